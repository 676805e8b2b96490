//! Test helpers shared across crates.
//!
//! This crate provides HCL fixture documents, text helpers for writing those
//! documents inline, and wrappers around `figment::Jail`.

pub mod figment;
pub mod fixtures;
pub mod text;
