//! Plan computation: document snapshot → ordered reveal tweens.
//!
//! Pure functions with no logging and no engine access, so parameter
//! derivation is testable without a rendering host.

use crate::dom::PageDocument;
use crate::result::{RevelarError, RevelarResult};

use super::types::{
    Direction, EndState, RevealPlan, RevealTween, StartState, TargetHandle, REVEAL_CLASS,
};

/// Compute the reveal plan for a document snapshot.
///
/// Discovers every element carrying `gs_reveal` in document order and derives
/// one tween per element. An empty result is a valid plan, not an error.
#[must_use]
pub fn compute_plan(doc: &PageDocument) -> RevealPlan {
    let tweens = doc
        .query_class(REVEAL_CLASS)
        .into_iter()
        .enumerate()
        .map(|(order, el)| {
            let direction = Direction::from_classes(&el.classes);
            RevealTween {
                target: TargetHandle::new(el.tag.clone(), el.id.clone(), order),
                direction,
                from: StartState::for_direction(direction),
                to: EndState::for_order(order),
            }
        })
        .collect();
    RevealPlan { tweens }
}

/// Check that no reveal target carries more than one directional modifier.
///
/// Co-occurring modifiers are an unsupported markup configuration:
/// `compute_plan` still resolves them first-checked-wins, and this validator
/// lets strict callers reject the markup instead of silently resolving it.
///
/// # Errors
///
/// Returns [`RevelarError::ConflictingDirections`] naming the first
/// offending element.
pub fn validate_directions(doc: &PageDocument) -> RevelarResult<()> {
    for (order, el) in doc.query_class(REVEAL_CLASS).into_iter().enumerate() {
        let markers = Direction::markers_present(&el.classes);
        if markers.len() > 1 {
            return Err(RevelarError::ConflictingDirections {
                target: TargetHandle::new(el.tag.clone(), el.id.clone(), order).label(),
                classes: markers.into_iter().map(ToString::to_string).collect(),
            });
        }
    }
    Ok(())
}
