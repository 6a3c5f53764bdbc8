//! Animation engine seam.
//!
//! The planner treats the engine as an opaque "animate from/to" capability.
//! Every submission is surfaced as a future so callers can await completion
//! deterministically instead of relying on wall-clock delay values.

use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

use crate::result::{RevelarError, RevelarResult};
use crate::reveal::RevealTween;

/// An external animation engine.
///
/// Implementations own their timing loops; the caller only learns about
/// completion through the returned future.
#[async_trait]
pub trait AnimationEngine: Send + Sync {
    /// Animate an element from the tween's start state to its end state.
    ///
    /// Resolves when the animation (including its delay) has completed.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is unavailable or rejects the tween.
    async fn animate(&self, tween: &RevealTween) -> RevelarResult<()>;
}

/// Test double that records every submitted tween and completes immediately.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    calls: Mutex<Vec<RevealTween>>,
}

impl RecordingEngine {
    /// Create a new recording engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tweens submitted so far, in submission order
    #[must_use]
    pub fn calls(&self) -> Vec<RevealTween> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Number of tweens submitted so far
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl AnimationEngine for RecordingEngine {
    async fn animate(&self, tween: &RevealTween) -> RevelarResult<()> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(tween.clone());
        Ok(())
    }
}

/// Engine double modeling the "engine not loaded" failure mode.
///
/// Every submission fails with [`RevelarError::EngineUnavailable`], so
/// callers observe the fault as an `Err` instead of an uncaught exception
/// in the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableEngine;

impl UnavailableEngine {
    /// Create a new unavailable engine
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AnimationEngine for UnavailableEngine {
    async fn animate(&self, _tween: &RevealTween) -> RevelarResult<()> {
        Err(RevelarError::EngineUnavailable {
            message: "animation engine is not loaded".to_string(),
        })
    }
}

/// Engine that completes each tween after its declared delay plus duration.
///
/// Time is scaled by a configurable factor, so end-to-end tests can run a
/// full staggered reveal in microseconds while preserving relative timing.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedEngine {
    time_scale: f64,
}

impl SimulatedEngine {
    /// Create an engine running at real-time speed
    #[must_use]
    pub fn new() -> Self {
        Self { time_scale: 1.0 }
    }

    /// Scale all waits by a factor (0.0 completes immediately)
    #[must_use]
    pub fn with_time_scale(mut self, time_scale: f64) -> Self {
        self.time_scale = time_scale.max(0.0);
        self
    }

    /// Scaled wall-clock time until a tween completes, in seconds
    #[must_use]
    pub fn completion_secs(&self, tween: &RevealTween) -> f64 {
        tween.completion_secs() * self.time_scale
    }
}

impl Default for SimulatedEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnimationEngine for SimulatedEngine {
    async fn animate(&self, tween: &RevealTween) -> RevelarResult<()> {
        let secs = self.completion_secs(tween);
        if secs > 0.0 {
            tokio::time::sleep(Duration::from_secs_f64(secs)).await;
        }
        Ok(())
    }
}
