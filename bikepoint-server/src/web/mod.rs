//! Web layer for the bike point checker service.
//!
//! Provides the report endpoint and the health probes.

mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
