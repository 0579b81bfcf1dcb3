//! Common test imports.
#![allow(unused_imports)]

pub use rstest::rstest;

#[path = "../tests/common/mod.rs"]
mod common;
pub use common::*;
