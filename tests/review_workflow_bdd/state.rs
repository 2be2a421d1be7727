//! Scenario state for review workflow BDD tests.

use std::rc::Rc;

use bubbletea_rs::Cmd;
use codesense::tui::ReviewApp;
use codesense::tui::messages::AppMsg;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// State shared across steps in a review workflow scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct WorkflowState {
    /// Runtime used to run commands and the mock server.
    pub(crate) runtime: Slot<Rc<Runtime>>,
    /// Mock review backend.
    pub(crate) server: Slot<MockServer>,
    /// The TUI application model under test.
    pub(crate) app: Slot<ReviewApp>,
}

impl WorkflowState {
    /// Returns the scenario runtime, creating it on first use.
    pub(crate) fn runtime(&self) -> std::io::Result<Rc<Runtime>> {
        if let Some(runtime) = self.runtime.get() {
            return Ok(runtime);
        }
        let runtime = Rc::new(Runtime::new()?);
        self.runtime.set(Rc::clone(&runtime));
        Ok(runtime)
    }
}

/// Feeds command results back into the app until no command remains.
pub(crate) async fn drive(app: &mut ReviewApp, first: Option<Cmd>) {
    let mut next = first;
    while let Some(cmd) = next {
        let Some(msg) = cmd.await else {
            return;
        };
        let Ok(app_msg) = msg.downcast::<AppMsg>() else {
            return;
        };
        next = app.handle_message(&app_msg);
    }
}
