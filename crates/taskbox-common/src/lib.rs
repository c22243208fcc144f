//! # taskbox-common
//!
//! Shared error definitions and reserved filename constants used across
//! the taskbox workspace. Leaf crate: depends on no other internal crate.

pub mod constants;
pub mod error;
