//! Revelar: deterministic entrance-reveal animation planning.
//!
//! Revelar (Spanish: "to reveal") models a server-rendered page snapshot,
//! discovers elements marked for entrance animation, derives per-element
//! tween parameters (direction offset, staggered delay, duration, easing),
//! and submits them to a pluggable async animation engine.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    REVELAR Architecture                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐            │
//! │   │ Page       │    │ Planning   │    │ Animation  │            │
//! │   │ Snapshot   │───►│ Core       │───►│ Engine     │            │
//! │   │ (dom)      │    │ (reveal)   │    │ (engine)   │            │
//! │   └────────────┘    └────────────┘    └────────────┘            │
//! │                           ▲                                      │
//! │                    PageInitializer (init)                        │
//! │                    diagnostic read + submission                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The planning core is pure — document snapshot in, ordered tween list
//! out — so parameter derivation is unit testable without a rendering
//! host. The initializer is the only environment-bound part: it logs the
//! diagnostic username attribute and awaits engine completions.
//!
//! # Example
//!
//! ```
//! use revelar::{ElementNode, PageDocument, compute_plan, Direction, REVEAL_CLASS};
//!
//! let doc = PageDocument::new("Index").with_body(
//!     ElementNode::new("body").child(
//!         ElementNode::new("section")
//!             .with_classes([REVEAL_CLASS, "gs_reveal_fromLeft"]),
//!     ),
//! );
//! let plan = compute_plan(&doc);
//! assert_eq!(plan.len(), 1);
//! assert_eq!(plan.tweens[0].direction, Direction::FromLeft);
//! ```

#![warn(missing_docs)]

pub mod dom;
pub mod engine;
pub mod init;
pub mod result;
pub mod reveal;

pub use dom::{ElementNode, PageDocument, USERNAME_DATA_KEY};
pub use engine::{AnimationEngine, RecordingEngine, SimulatedEngine, UnavailableEngine};
pub use init::{PageInitializer, RevealReport};
pub use result::{RevelarError, RevelarResult};
pub use reveal::{
    compute_plan, validate_directions, Direction, Ease, EndState, Keyframe, RevealPlan,
    RevealTween, StartState, TargetHandle, TweenSample, Visibility, ENTRY_OFFSET,
    FROM_BOTTOM_CLASS, FROM_LEFT_CLASS, FROM_RIGHT_CLASS, REVEAL_CLASS, REVEAL_DURATION_SECS,
    STAGGER_STEP_SECS,
};
