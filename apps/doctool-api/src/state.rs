//! Application state shared across handlers.

use crate::config::Config;

pub struct AppState {
    pub config: Config,
}
