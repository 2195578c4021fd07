//! Shared test support
//!
//! Compiled only for `cargo test`; holds the scripted backend used by the
//! client, service, and watcher tests.
