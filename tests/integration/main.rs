//! Tests that need external services. Run with: cargo test -- --ignored

mod api_tests;
mod postgres_store;
