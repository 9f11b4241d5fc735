// SPDX-License-Identifier: PMPL-1.0-or-later
//
// Inkbridge — core types, errors, and configuration shared across crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::{ConfigStore, PrinterConfig, SharedConfig};
pub use error::InkbridgeError;
pub use types::*;
