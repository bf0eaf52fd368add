pub mod commands;
pub mod handlers;
pub mod state;

use std::sync::Arc;

use teloxide::dispatching::dialogue::{self, InMemStorage};
use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;

use crate::config::AppConfig;
use crate::store::CourseStore;
use state::State;

/// Shared application state, accessible from all handlers.
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<dyn CourseStore>,
}

/// Build the teloxide update handler tree. Commands are matched first;
/// anything else is fed to the active conversation form (or ignored when
/// the dialogue is idle).
pub fn build_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    let command_handler = Update::filter_message()
        .filter_command::<commands::Command>()
        .endpoint(commands::handle_command);

    let step_handler = Update::filter_message().endpoint(handlers::handle_step);

    dialogue::enter::<Update, InMemStorage<State>, State, _>()
        .branch(command_handler)
        .branch(step_handler)
}
