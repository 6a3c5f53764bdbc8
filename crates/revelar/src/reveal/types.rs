//! Types for entrance-reveal planning.
//!
//! A `RevealPlan` is the deterministic output of planning: one `RevealTween`
//! per discovered target, each pairing a start state (offset off-screen,
//! invisible) with an end state (settled, visible, staggered delay). Plans
//! serialize to JSON so they can be written and diffed as artifacts.

use super::easing::Ease;
use serde::{Deserialize, Serialize};

/// Marker class for animatable sections
pub const REVEAL_CLASS: &str = "gs_reveal";
/// Modifier class: element enters from the bottom edge
pub const FROM_BOTTOM_CLASS: &str = "gs_reveal_fromBottom";
/// Modifier class: element enters from the left edge
pub const FROM_LEFT_CLASS: &str = "gs_reveal_fromLeft";
/// Modifier class: element enters from the right edge
pub const FROM_RIGHT_CLASS: &str = "gs_reveal_fromRight";

/// Entry offset applied off the entering edge, in layout units (px)
pub const ENTRY_OFFSET: f64 = 100.0;
/// Duration of every reveal tween, in seconds
pub const REVEAL_DURATION_SECS: f64 = 1.2;
/// Per-target stagger step, in seconds
pub const STAGGER_STEP_SECS: f64 = 0.2;

/// Which edge an element visually enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Direction {
    /// Enters from the bottom edge (`gs_reveal_fromBottom`)
    FromBottom,
    /// Enters from the left edge (`gs_reveal_fromLeft`)
    FromLeft,
    /// Enters from the right edge (`gs_reveal_fromRight`)
    FromRight,
    /// No directional modifier; fades in place
    #[default]
    None,
}

impl Direction {
    /// Derive the direction from an element's class list.
    ///
    /// Checks modifiers in the order bottom, left, right; the first match
    /// wins. Elements carrying more than one modifier are an unsupported
    /// configuration — see `validate_directions`.
    #[must_use]
    pub fn from_classes(classes: &[String]) -> Self {
        if classes.iter().any(|c| c == FROM_BOTTOM_CLASS) {
            Self::FromBottom
        } else if classes.iter().any(|c| c == FROM_LEFT_CLASS) {
            Self::FromLeft
        } else if classes.iter().any(|c| c == FROM_RIGHT_CLASS) {
            Self::FromRight
        } else {
            Self::None
        }
    }

    /// All directional modifier classes present in a class list, in
    /// priority order.
    #[must_use]
    pub fn markers_present(classes: &[String]) -> Vec<&'static str> {
        [FROM_BOTTOM_CLASS, FROM_LEFT_CLASS, FROM_RIGHT_CLASS]
            .into_iter()
            .filter(|marker| classes.iter().any(|c| c == marker))
            .collect()
    }
}

/// Visibility of an element at a point in the tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// Element is hidden
    Hidden,
    /// Element is visible
    Visible,
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hidden => write!(f, "hidden"),
            Self::Visible => write!(f, "visible"),
        }
    }
}

/// Start state of a reveal tween.
///
/// Offsets are optional: an element with no directional modifier gets no
/// offset property at all, matching the markup contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StartState {
    /// Opacity (always 0 at the start of a reveal)
    pub opacity: f64,
    /// Visibility (always hidden at the start of a reveal)
    pub visibility: Visibility,
    /// Horizontal offset in layout units, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Vertical offset in layout units, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl StartState {
    /// Build the start state for a direction.
    #[must_use]
    pub fn for_direction(direction: Direction) -> Self {
        let (x, y) = match direction {
            Direction::FromBottom => (None, Some(ENTRY_OFFSET)),
            Direction::FromLeft => (Some(-ENTRY_OFFSET), None),
            Direction::FromRight => (Some(ENTRY_OFFSET), None),
            Direction::None => (None, None),
        };
        Self {
            opacity: 0.0,
            visibility: Visibility::Hidden,
            x,
            y,
        }
    }
}

/// End state of a reveal tween, with timing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EndState {
    /// Opacity (always 1 at the end of a reveal)
    pub opacity: f64,
    /// Visibility (always visible at the end of a reveal)
    pub visibility: Visibility,
    /// Horizontal offset, reset to 0
    pub x: f64,
    /// Vertical offset, reset to 0
    pub y: f64,
    /// Tween duration in seconds
    pub duration_secs: f64,
    /// Delay before the tween starts, in seconds
    pub delay_secs: f64,
    /// Easing curve
    pub ease: Ease,
}

impl EndState {
    /// Build the end state for a target at the given document-order index.
    ///
    /// Delay is `order * 0.2` seconds; everything else is invariant across
    /// targets and directions.
    #[must_use]
    pub fn for_order(order: usize) -> Self {
        Self {
            opacity: 1.0,
            visibility: Visibility::Visible,
            x: 0.0,
            y: 0.0,
            duration_secs: REVEAL_DURATION_SECS,
            delay_secs: order as f64 * STAGGER_STEP_SECS,
            ease: Ease::Power3Out,
        }
    }
}

/// Handle identifying a target element in the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetHandle {
    /// Element tag name
    pub tag_name: String,
    /// Element ID, if the markup carries one
    pub id: Option<String>,
    /// Zero-based position among all discovered targets, document order
    pub order: usize,
}

impl TargetHandle {
    /// Create a new target handle
    #[must_use]
    pub fn new(tag_name: impl Into<String>, id: Option<String>, order: usize) -> Self {
        Self {
            tag_name: tag_name.into(),
            id,
            order,
        }
    }

    /// Stable diagnostic label: the element ID if present, otherwise the
    /// tag with the target's order (e.g. `section[2]`).
    #[must_use]
    pub fn label(&self) -> String {
        self.id.clone().map_or_else(
            || format!("{}[{}]", self.tag_name, self.order),
            |id| format!("#{id}"),
        )
    }
}

/// Interpolated element state at a point in a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSample {
    /// Interpolated opacity
    pub opacity: f64,
    /// Interpolated horizontal offset
    pub x: f64,
    /// Interpolated vertical offset
    pub y: f64,
    /// Visibility at this point
    pub visibility: Visibility,
}

/// One (target, start state, end state) animation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealTween {
    /// The element being animated
    pub target: TargetHandle,
    /// Derived entry direction
    pub direction: Direction,
    /// Start state submitted to the engine
    pub from: StartState,
    /// End state and timing submitted to the engine
    pub to: EndState,
}

impl RevealTween {
    /// Time at which the tween finishes, relative to submission.
    #[must_use]
    pub fn completion_secs(&self) -> f64 {
        self.to.delay_secs + self.to.duration_secs
    }

    /// Interpolated state at `elapsed_secs` after submission.
    ///
    /// Delay-aware: before the delay elapses the sample equals the start
    /// state (hidden); afterwards progress follows the easing curve; past
    /// `completion_secs` the sample equals the end state. For verifying
    /// rendered output against the declared curve.
    #[must_use]
    pub fn sample(&self, elapsed_secs: f64) -> TweenSample {
        let start_x = self.from.x.unwrap_or(0.0);
        let start_y = self.from.y.unwrap_or(0.0);
        let local = elapsed_secs - self.to.delay_secs;
        if local <= 0.0 {
            return TweenSample {
                opacity: self.from.opacity,
                x: start_x,
                y: start_y,
                visibility: self.from.visibility,
            };
        }
        let progress = self.to.ease.evaluate(local / self.to.duration_secs);
        TweenSample {
            opacity: self.from.opacity + (self.to.opacity - self.from.opacity) * progress,
            x: start_x + (self.to.x - start_x) * progress,
            y: start_y + (self.to.y - start_y) * progress,
            visibility: Visibility::Visible,
        }
    }
}

/// An ordered sequence of reveal tweens for one document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RevealPlan {
    /// Tweens in document order
    pub tweens: Vec<RevealTween>,
}

impl RevealPlan {
    /// Number of tweens in the plan
    #[must_use]
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    /// Check whether the plan has no tweens
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Wall-clock time until the last tween finishes, in seconds.
    ///
    /// Zero for an empty plan.
    #[must_use]
    pub fn total_secs(&self) -> f64 {
        self.tweens
            .iter()
            .map(RevealTween::completion_secs)
            .fold(0.0, f64::max)
    }
}
