//! Common test utilities for the conversion tests
//!
//! Inline DrugBank documents and mapping backends shared by the
//! end-to-end tests.

#![allow(dead_code)]

pub mod fixtures;
pub mod mappers;

pub use fixtures::{write_fixture, APPROVAL_SCENARIO, MALFORMED, RICH_DOCUMENT};
pub use mappers::{thrombin_mapper, FailingMapper};
