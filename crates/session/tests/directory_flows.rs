//! Integration tests for the project directory: listing, creation
//! (with local validation), and deletion side effects on the open
//! session.

mod common;

use assert_matches::assert_matches;

use common::FakeBackend;
use fabula_core::CoreError;
use fabula_session::{SessionError, Workbench};

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_prepends_the_summary_and_opens_the_project() {
    let mut bench = Workbench::new(FakeBackend::new());

    bench.create_project("first idea", 3).await.expect("create");
    bench.create_project("second idea", 3).await.expect("create");

    let summaries = bench.directory().summaries();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].initial_idea, "second idea");
    assert_eq!(summaries[1].initial_idea, "first idea");

    // The newest project is the open one.
    let open = bench.open_project().expect("open project");
    assert_eq!(open.initial_idea, "second idea");
    assert_eq!(open.id, summaries[0].id);
}

#[tokio::test]
async fn create_with_an_empty_idea_fails_before_any_request() {
    let mut bench = Workbench::new(FakeBackend::new());

    let err = bench
        .create_project("   ", 3)
        .await
        .expect_err("empty idea must fail");
    assert_matches!(err, SessionError::Core(CoreError::Validation(_)));

    assert_eq!(bench.service().request_count(), 0);
    assert!(bench.directory().summaries().is_empty());
    assert!(bench.open_project().is_none());
}

#[tokio::test]
async fn create_with_an_out_of_range_chapter_count_fails_locally() {
    let mut bench = Workbench::new(FakeBackend::new());

    for count in [0, -1, 21] {
        let err = bench
            .create_project("idea", count)
            .await
            .expect_err("bad count must fail");
        assert_matches!(err, SessionError::Core(CoreError::Validation(_)));
    }
    assert_eq!(bench.service().request_count(), 0);
}

#[tokio::test]
async fn create_trims_the_idea_before_sending() {
    let mut bench = Workbench::new(FakeBackend::new());

    bench
        .create_project("  a drifting lighthouse  ", 3)
        .await
        .expect("create");
    assert_eq!(
        bench.open_project().expect("open").initial_idea,
        "a drifting lighthouse"
    );
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn refresh_replaces_the_list_with_the_server_state() {
    let mut bench = Workbench::new(FakeBackend::new());
    bench.create_project("kept", 3).await.expect("create");

    // A summary the local list does not know about yet.
    let mut other = bench.open_project().expect("open").clone();
    other.id = "proj-external".to_string();
    other.initial_idea = "created elsewhere".to_string();
    bench.service().seed(other);

    bench.refresh_directory().await.expect("refresh");

    let summaries = bench.directory().summaries();
    assert_eq!(summaries.len(), 2);
    assert!(bench.directory().contains("proj-external"));
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

#[tokio::test]
async fn deleting_the_open_project_returns_the_session_to_unopened() {
    let mut bench = Workbench::new(FakeBackend::new());
    bench.create_project("idea", 3).await.expect("create");
    let id = bench.open_project().expect("open").id.clone();

    bench.delete_project(&id).await.expect("delete");

    assert!(bench.open_project().is_none());
    assert!(bench.session().is_none());
    assert!(bench.directory().summaries().is_empty());
}

#[tokio::test]
async fn deleting_another_project_leaves_the_open_session_untouched() {
    let mut bench = Workbench::new(FakeBackend::new());
    bench.create_project("first", 3).await.expect("create");
    let first_id = bench.open_project().expect("open").id.clone();
    bench.create_project("second", 3).await.expect("create");
    let open_before = bench.open_project().expect("open").clone();

    bench.delete_project(&first_id).await.expect("delete");

    assert_eq!(bench.open_project().expect("still open"), &open_before);
    let summaries = bench.directory().summaries();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].id, open_before.id);
}

#[tokio::test]
async fn deleting_an_unknown_project_is_not_found() {
    let mut bench = Workbench::new(FakeBackend::new());
    bench.create_project("idea", 3).await.expect("create");

    let err = bench
        .delete_project("proj-missing")
        .await
        .expect_err("unknown project");
    assert_matches!(err, SessionError::Api(api) if api.is_not_found());

    // The list is unchanged.
    assert_eq!(bench.directory().summaries().len(), 1);
}
