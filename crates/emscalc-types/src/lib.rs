//! Emscalc Types
//!
//! This crate defines the core value types shared across the emscalc
//! ecosystem (currently `emscalc-engine` and `emscalc-prelude`). It provides
//! the caller-facing `RawValue`/`InputSet` types and keeps the engine crate
//! free of serialization plumbing.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

mod types;

pub use types::{InputSet, RawValue};
