//! alienworld bridge library target.
//!
//! Exposes the window's modules for integration tests. The binary entry
//! point is in `main.rs`; this file exists so `tests/*.rs` can import the
//! bridge's logic.

pub mod app;
pub mod helpers;
pub mod messages;
pub mod subscription;
pub mod ui;
pub mod update;
pub mod view_ui;
