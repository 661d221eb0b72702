//! Internal modules for the poker nights client.
//!
//! This library provides command parsing, configuration, rendering and the
//! timer session used by the pn_client binary.

pub mod commands;
pub mod config;
pub mod display;
pub mod logging;
pub mod timer;
