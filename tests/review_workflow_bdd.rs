//! Behavioural tests for submitting a pull request and reading its review.

#[path = "review_workflow_bdd/mod.rs"]
mod review_workflow_bdd_support;

use std::sync::Arc;

use bubbletea_rs::Model;
use codesense::tui::ReviewApp;
use codesense::tui::app::ViewMode;
use codesense::tui::components::test_utils::strip_ansi_codes;
use codesense::tui::messages::AppMsg;
use codesense::tui::state::FormDefaults;
use codesense::{HttpReviewService, HttpReviewServiceConfig};
use review_workflow_bdd_support::{WorkflowState, drive};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REVIEW_PATH: &str = "/api/v1/review-pr";

type StepResult = Result<(), Box<dyn std::error::Error>>;

#[fixture]
fn workflow_state() -> WorkflowState {
    WorkflowState::default()
}

impl WorkflowState {
    /// Starts the mock backend with `response` and an app wired to it.
    fn start_backend(&self, response: ResponseTemplate) -> StepResult {
        let runtime = self.runtime()?;
        let server = runtime.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path(REVIEW_PATH))
                .respond_with(response)
                .mount(&server)
                .await;
            server
        });

        let config = HttpReviewServiceConfig::new(format!("{}/api/v1", server.uri()), None);
        let service = HttpReviewService::new(&config)?;
        let mut app = ReviewApp::new(FormDefaults::default()).with_service(Arc::new(service));
        app.handle_message(&AppMsg::WindowResized {
            width: 80,
            height: 24,
        });

        self.server.set(server);
        self.app.set(app);
        Ok(())
    }

    fn send(&self, msg: &AppMsg) -> StepResult {
        let runtime = self.runtime()?;
        self.app
            .with_mut(|app| {
                let cmd = app.handle_message(msg);
                runtime.block_on(drive(app, cmd));
            })
            .ok_or("app should be initialised before sending messages")?;
        Ok(())
    }

    #[expect(clippy::expect_used, reason = "test helper; panics acceptable")]
    fn rendered_view(&self) -> String {
        let view = self
            .app
            .with_ref(ReviewApp::view)
            .expect("app not initialised");
        strip_ansi_codes(&view)
    }

    #[expect(clippy::expect_used, reason = "test helper; panics acceptable")]
    fn view_mode(&self) -> ViewMode {
        self.app
            .with_ref(ReviewApp::view_mode)
            .expect("app not initialised")
    }
}

// Given steps

#[given("a review service that returns the report {report}")]
fn given_service_returns_report(workflow_state: &WorkflowState, report: String) -> StepResult {
    let markdown = report.trim_matches('"').replace("\\n", "\n");
    workflow_state.start_backend(
        ResponseTemplate::new(200).set_body_json(json!({ "report": markdown })),
    )
}

#[given("a review service that fails with status {status:u16} and message {message}")]
fn given_service_fails_with_message(
    workflow_state: &WorkflowState,
    status: u16,
    message: String,
) -> StepResult {
    workflow_state.start_backend(
        ResponseTemplate::new(status)
            .set_body_json(json!({ "message": message.trim_matches('"') })),
    )
}

#[given("a review service that fails with status {status:u16} and no message")]
fn given_service_fails_without_message(workflow_state: &WorkflowState, status: u16) -> StepResult {
    workflow_state.start_backend(ResponseTemplate::new(status).set_body_string("upstream failed"))
}

#[given("the form is in private mode")]
fn given_private_mode(workflow_state: &WorkflowState) -> StepResult {
    workflow_state.send(&AppMsg::ToggleMode)
}

#[given("the form holds the pull request URL {url}")]
fn given_form_url(workflow_state: &WorkflowState, url: String) -> StepResult {
    for ch in url.trim_matches('"').chars() {
        workflow_state.send(&AppMsg::InsertChar(ch))?;
    }
    Ok(())
}

// When steps

#[when("the user submits the form")]
fn when_user_submits(workflow_state: &WorkflowState) -> StepResult {
    workflow_state.send(&AppMsg::Submit)
}

#[when("the user returns to the start view")]
fn when_user_returns(workflow_state: &WorkflowState) -> StepResult {
    workflow_state.send(&AppMsg::BackToStart)
}

#[when("the result view is requested again")]
fn when_result_requested_again(workflow_state: &WorkflowState) -> StepResult {
    workflow_state.send(&AppMsg::ShowResult)
}

// Then steps

#[then("the result view is shown")]
fn then_result_view_shown(workflow_state: &WorkflowState) {
    assert_eq!(
        workflow_state.view_mode(),
        ViewMode::Result,
        "expected result view:\n{}",
        workflow_state.rendered_view()
    );
}

#[then("the start view is shown")]
fn then_start_view_shown(workflow_state: &WorkflowState) {
    assert_eq!(
        workflow_state.view_mode(),
        ViewMode::Start,
        "expected start view:\n{}",
        workflow_state.rendered_view()
    );
}

#[then("the view shows {text}")]
fn then_view_shows(workflow_state: &WorkflowState, text: String) {
    let expected = text.trim_matches('"');
    let view = workflow_state.rendered_view();
    assert!(view.contains(expected), "expected '{expected}' in view:\n{view}");
}

#[then("the review service request count is {count:usize}")]
#[expect(
    clippy::expect_used,
    reason = "integration test step; allow-expect-in-tests does not cover integration tests"
)]
fn then_service_received(workflow_state: &WorkflowState, count: usize) {
    let runtime = workflow_state.runtime().expect("runtime not initialised");
    let requests = workflow_state
        .server
        .with_ref(|server| runtime.block_on(server.received_requests()))
        .expect("mock server not initialised")
        .expect("request recording is not enabled");

    assert_eq!(requests.len(), count, "unexpected review request count");
    if let Some(request) = requests.first() {
        let body: serde_json::Value =
            serde_json::from_slice(&request.body).expect("request body should be JSON");
        assert_eq!(
            body,
            json!({ "pr_url": "https://github.com/octocat/hello-world/pull/42" })
        );
    }
}

#[then("no review is waiting to be shown")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_no_pending_review(workflow_state: &WorkflowState) {
    let pending = workflow_state
        .app
        .with_ref(ReviewApp::has_pending_handoff)
        .expect("app not initialised");
    assert!(!pending, "handoff should have been consumed");
    assert!(
        workflow_state
            .app
            .with_ref(|app| app.result_view().is_none())
            .expect("app not initialised")
    );
}

// Scenario bindings

#[scenario(path = "tests/features/review_workflow.feature", index = 0)]
fn public_submission_shows_report(workflow_state: WorkflowState) {
    let _ = workflow_state;
}

#[scenario(path = "tests/features/review_workflow.feature", index = 1)]
fn invalid_url_is_rejected_locally(workflow_state: WorkflowState) {
    let _ = workflow_state;
}

#[scenario(path = "tests/features/review_workflow.feature", index = 2)]
fn private_mode_requires_credential(workflow_state: WorkflowState) {
    let _ = workflow_state;
}

#[scenario(path = "tests/features/review_workflow.feature", index = 3)]
fn service_message_is_shown(workflow_state: WorkflowState) {
    let _ = workflow_state;
}

#[scenario(path = "tests/features/review_workflow.feature", index = 4)]
fn service_failure_shows_generic_error(workflow_state: WorkflowState) {
    let _ = workflow_state;
}

#[scenario(path = "tests/features/review_workflow.feature", index = 5)]
fn returning_to_start_consumes_review(workflow_state: WorkflowState) {
    let _ = workflow_state;
}
