//! HTTP server for provider availability queries.
//!
//! A thin axum wrapper around `openhours-core`: the handlers parse and
//! validate request parameters, delegate to the resolver, and serialize the
//! result. The schedule is loaded once at startup and shared immutably
//! across requests.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
