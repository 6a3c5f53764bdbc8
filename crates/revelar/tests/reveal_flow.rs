//! End-to-end tests for the reveal flow.
//!
//! Drives the full initializer-over-engine path against fixture page
//! snapshots, covering the observable contract: discovery, direction
//! mapping, stagger, end-state invariance, and the diagnostic read.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use revelar::{
    compute_plan, validate_directions, Direction, ElementNode, PageDocument, PageInitializer,
    RecordingEngine, RevelarError, SimulatedEngine, UnavailableEngine, Visibility,
    FROM_BOTTOM_CLASS, FROM_LEFT_CLASS, FROM_RIGHT_CLASS, REVEAL_CLASS, USERNAME_DATA_KEY,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

/// An index-style page: three directional sections plus non-animated
/// chrome.
fn index_page() -> PageDocument {
    PageDocument::new("Index").with_body(
        ElementNode::new("body")
            .with_data(USERNAME_DATA_KEY, "alice")
            .child(ElementNode::new("header").with_class("site-header"))
            .child(
                ElementNode::new("section")
                    .with_id("intro")
                    .with_classes([REVEAL_CLASS, FROM_BOTTOM_CLASS]),
            )
            .child(
                ElementNode::new("section")
                    .with_id("features")
                    .with_classes([REVEAL_CLASS, FROM_LEFT_CLASS]),
            )
            .child(
                ElementNode::new("section")
                    .with_id("contact")
                    .with_classes([REVEAL_CLASS, FROM_RIGHT_CLASS]),
            )
            .child(ElementNode::new("footer")),
    )
}

// ============================================================================
// Discovery and submission
// ============================================================================

#[tokio::test]
async fn test_empty_page_submits_nothing() {
    init_tracing();
    let init = PageInitializer::new(RecordingEngine::new());
    let report = init
        .on_content_loaded(&PageDocument::new("Blank"))
        .await
        .expect("empty page is not an error");
    assert_eq!(report.targets_found, 0);
    assert_eq!(init.engine().call_count(), 0);
}

#[tokio::test]
async fn test_index_page_submits_all_sections() {
    init_tracing();
    let init = PageInitializer::new(RecordingEngine::new());
    let report = init.on_content_loaded(&index_page()).await.unwrap();
    assert_eq!(report.targets_found, 3);
    assert_eq!(report.tweens_completed, 3);

    let calls = init.engine().calls();
    let ids: Vec<_> = calls
        .iter()
        .map(|t| t.target.id.clone().unwrap())
        .collect();
    assert_eq!(ids, vec!["intro", "features", "contact"]);
}

#[tokio::test]
async fn test_directions_map_to_offsets() {
    init_tracing();
    let init = PageInitializer::new(RecordingEngine::new());
    init.on_content_loaded(&index_page()).await.unwrap();
    let calls = init.engine().calls();

    assert_eq!(calls[0].direction, Direction::FromBottom);
    assert_eq!(calls[0].from.y, Some(100.0));
    assert_eq!(calls[0].from.x, None);

    assert_eq!(calls[1].direction, Direction::FromLeft);
    assert_eq!(calls[1].from.x, Some(-100.0));
    assert_eq!(calls[1].from.y, None);

    assert_eq!(calls[2].direction, Direction::FromRight);
    assert_eq!(calls[2].from.x, Some(100.0));
    assert_eq!(calls[2].from.y, None);
}

#[tokio::test]
async fn test_stagger_and_end_state_invariants() {
    init_tracing();
    let init = PageInitializer::new(RecordingEngine::new());
    init.on_content_loaded(&index_page()).await.unwrap();

    for (i, tween) in init.engine().calls().iter().enumerate() {
        assert!((tween.to.delay_secs - i as f64 * 0.2).abs() < f64::EPSILON);
        assert!((tween.to.duration_secs - 1.2).abs() < f64::EPSILON);
        assert!((tween.to.opacity - 1.0).abs() < f64::EPSILON);
        assert_eq!(tween.to.visibility, Visibility::Visible);
        assert!((tween.to.x).abs() < f64::EPSILON);
        assert!((tween.to.y).abs() < f64::EPSILON);
        assert_eq!(tween.to.ease.name(), "power3.out");
    }
}

// ============================================================================
// Diagnostic read
// ============================================================================

#[tokio::test]
async fn test_username_round_trip() {
    init_tracing();
    let init = PageInitializer::new(RecordingEngine::new());
    let report = init.on_content_loaded(&index_page()).await.unwrap();
    assert_eq!(report.username.as_deref(), Some("alice"));
}

#[tokio::test]
async fn test_absent_username_accepted() {
    init_tracing();
    let init = PageInitializer::new(RecordingEngine::new());
    let report = init
        .on_content_loaded(&PageDocument::new("Anonymous"))
        .await
        .unwrap();
    assert_eq!(report.username, None);
}

// ============================================================================
// Failure semantics
// ============================================================================

#[tokio::test]
async fn test_unavailable_engine_surfaces_error() {
    init_tracing();
    let init = PageInitializer::new(UnavailableEngine::new());
    let err = init.on_content_loaded(&index_page()).await.unwrap_err();
    assert!(matches!(err, RevelarError::EngineUnavailable { .. }));
}

#[tokio::test]
async fn test_conflicting_modifiers_rejected_by_validator() {
    init_tracing();
    let doc = PageDocument::new("Conflict").with_body(
        ElementNode::new("body").child(
            ElementNode::new("section")
                .with_id("both")
                .with_classes([REVEAL_CLASS, FROM_BOTTOM_CLASS, FROM_RIGHT_CLASS]),
        ),
    );
    let err = validate_directions(&doc).unwrap_err();
    assert!(matches!(
        err,
        RevelarError::ConflictingDirections { .. }
    ));
    // Planning still resolves first-checked-wins
    assert_eq!(compute_plan(&doc).tweens[0].direction, Direction::FromBottom);
}

// ============================================================================
// Deterministic timing via the simulated engine
// ============================================================================

#[tokio::test]
async fn test_simulated_engine_full_reveal_awaitable() {
    init_tracing();
    // Scale waits down so the whole staggered reveal finishes in ~1.6ms
    let init = PageInitializer::new(SimulatedEngine::new().with_time_scale(0.001));
    let report = init.on_content_loaded(&index_page()).await.unwrap();
    assert_eq!(report.tweens_completed, 3);
}

// ============================================================================
// Plan artifact
// ============================================================================

#[test]
fn test_plan_serializes_as_artifact() {
    let plan = compute_plan(&index_page());
    let json = serde_json::to_string_pretty(&plan).expect("plan serializes");
    assert!(json.contains("\"ease\""));
    assert!(json.contains("intro"));
    // Directionless sections would omit offsets entirely; directional ones
    // carry exactly one axis
    assert!(json.contains("\"y\": 100.0"));

    let parsed: revelar::RevealPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, plan);
}

#[test]
fn test_discovery_is_idempotent() {
    let doc = index_page();
    assert_eq!(compute_plan(&doc), compute_plan(&doc));
    assert_eq!(
        doc.query_class(REVEAL_CLASS).len(),
        doc.query_class(REVEAL_CLASS).len()
    );
}
