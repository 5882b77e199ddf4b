//! Common test utilities for suggestedsites CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated temp directory plus helpers to run the binary
//! - Fixtures: reusable property file contents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
