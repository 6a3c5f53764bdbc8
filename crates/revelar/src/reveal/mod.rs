//! Entrance-reveal planning: discovery, parameter derivation, easing.
//!
//! # Architecture
//!
//! ```text
//! PageDocument ──→ plan::compute_plan ──→ RevealPlan
//!                                             │
//!                        one RevealTween per target:
//!                        (TargetHandle, StartState, EndState)
//!
//! Ease ──→ easing::Ease::evaluate / sample ──→ curve verification
//! ```
//!
//! Planning is pure: the same snapshot always yields the same plan, and
//! nothing here touches an engine or a log sink.

pub mod easing;
pub mod plan;
pub mod types;

pub use easing::{Ease, Keyframe};
pub use plan::{compute_plan, validate_directions};
pub use types::{
    Direction, EndState, RevealPlan, RevealTween, StartState, TargetHandle, TweenSample,
    Visibility, ENTRY_OFFSET, FROM_BOTTOM_CLASS, FROM_LEFT_CLASS, FROM_RIGHT_CLASS, REVEAL_CLASS,
    REVEAL_DURATION_SECS, STAGGER_STEP_SECS,
};
