//! Shared setup for the HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use tally_config::Seed;
use tally_server::{app, AppState};

/// Creates a test server over the built-in seed.
pub fn seeded_server() -> TestServer {
    server_with(Seed::default())
}

/// Creates a test server over empty stores.
pub fn empty_server() -> TestServer {
    server_with(Seed::empty())
}

/// Creates a test server over the given seed.
pub fn server_with(seed: Seed) -> TestServer {
    let state = AppState::in_memory(seed.assets, seed.tasks).expect("Failed to seed stores");
    TestServer::new(app(Arc::new(state))).expect("Failed to create test server")
}
