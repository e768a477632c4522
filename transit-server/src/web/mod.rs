//! Web layer for the bus route planner.
//!
//! Provides the JSON API, server-rendered pages and the live position feed.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
