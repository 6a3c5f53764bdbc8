//! Page initializer: the "document structure ready" entry point.
//!
//! A thin adapter over the pure planning core. On firing it reads the
//! diagnostic username attribute, discovers reveal targets, and submits one
//! tween per target to the engine, awaiting all completions. Linear and
//! one-shot: no retained state, no retries, no fallback rendering path.

use serde::Serialize;

use crate::dom::PageDocument;
use crate::engine::AnimationEngine;
use crate::result::RevelarResult;
use crate::reveal::{compute_plan, RevealPlan};

/// Outcome of one initializer run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevealReport {
    /// Username as read from the document, if present
    pub username: Option<String>,
    /// Number of reveal targets discovered
    pub targets_found: usize,
    /// Number of tweens the engine completed
    pub tweens_completed: usize,
}

/// Runs the reveal flow against a document snapshot.
#[derive(Debug)]
pub struct PageInitializer<E> {
    engine: E,
}

impl<E: AnimationEngine> PageInitializer<E> {
    /// Create an initializer over an engine
    #[must_use]
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Access the underlying engine
    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Compute the reveal plan for a document without submitting it.
    #[must_use]
    pub fn plan(&self, doc: &PageDocument) -> RevealPlan {
        compute_plan(doc)
    }

    /// Handle the "document structure ready" signal.
    ///
    /// Reads the diagnostic username (absence is valid and logged as such),
    /// discovers targets, and submits every tween. Resolves once all
    /// animations have completed.
    ///
    /// # Errors
    ///
    /// Propagates the first engine failure; discovery of zero targets is
    /// not an error.
    pub async fn on_content_loaded(&self, doc: &PageDocument) -> RevelarResult<RevealReport> {
        let username = doc.current_username().map(ToOwned::to_owned);
        match username.as_deref() {
            Some(name) => tracing::info!(username = %name, "document ready"),
            None => tracing::info!("document ready, no username attribute"),
        }

        let plan = compute_plan(doc);
        if plan.is_empty() {
            tracing::info!("no reveal sections found");
            return Ok(RevealReport {
                username,
                targets_found: 0,
                tweens_completed: 0,
            });
        }
        tracing::info!(count = plan.len(), "found reveal sections");

        let targets_found = plan.len();
        futures::future::try_join_all(plan.tweens.iter().map(|tween| {
            tracing::debug!(
                target = %tween.target.label(),
                delay_secs = tween.to.delay_secs,
                "submitting tween"
            );
            self.engine.animate(tween)
        }))
        .await?;

        Ok(RevealReport {
            username,
            targets_found,
            tweens_completed: targets_found,
        })
    }
}
