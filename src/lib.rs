//! GitOps hello service — environment metadata endpoint.
//!
//! Re-exports all modules so the binary (`main.rs`) and router tests can
//! access `ApiConfig`, `AppState`, and `build_router`.

pub mod config;
pub mod routes;
pub mod state;
