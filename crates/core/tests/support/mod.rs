//! Shared test helpers for `dealdesk-core` integration tests.

pub mod stages;
