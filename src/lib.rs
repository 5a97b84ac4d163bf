//! Library crate for faculty-accounts.
//!
//! This crate exposes the building blocks of the TUI:
//! - Application state, the account creation modal and the update loop (`app`)
//! - Error and result types (`error`)
//! - Faculty roster loading (`roster`)
//! - In-memory search over the faculty list (`search`)
//! - UI rendering and widgets (`ui`)
//!
//! It is used by the `faculty-accounts` binary and by tests.
#![deny(rustdoc::broken_intra_doc_links)]

pub mod app;
pub mod error;
pub mod roster;
pub mod search;
pub mod ui;

/// Convenient error and result types shared across the crate.
pub use error::{DynError, Result};
