//! Support modules for review workflow BDD tests.

pub(crate) mod state;

pub(crate) use state::{WorkflowState, drive};
