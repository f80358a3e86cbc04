//! End-to-end tests against the full router.
//!
//! These tests need a reachable Postgres server; connection settings come
//! from `config/test.toml`. Each test provisions its own database so the
//! suite can run in parallel.

mod helpers;

mod auth_test;
mod connection_test;
mod document_test;
mod group_test;
