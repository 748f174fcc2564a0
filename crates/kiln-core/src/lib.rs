//! # kiln-core — Foundational Types for the Kiln Model Layer
//!
//! This crate is the bedrock of the Kiln control-plane client model. It
//! defines the machinery the generated-looking shape crates are built on:
//!
//! 1. **Closed wire-string enumerations.** Every enum-typed field in the
//!    control-plane API admits a fixed, closed set of wire strings. The
//!    [`wire_enum!`] macro instantiates that pattern: a `Copy` enum, a total
//!    `as_wire` mapping back to the canonical wire string, and a strict
//!    `from_wire` that rejects empty and unrecognized input. Membership is
//!    fixed at compile time and never extended at runtime.
//!
//! 2. **Identifier newtypes.** [`Arn`] and [`ResourceName`] validate their
//!    format at construction. No bare strings for identifiers.
//!
//! 3. **Structured errors.** All fallible paths surface [`ModelError`] or
//!    one of its sources via `thiserror`. Conversion failures are immediate
//!    and synchronous; nothing is retried or silently defaulted here.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `kiln-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`, and round-trip through
//!   serde using exactly their canonical wire encoding.

pub mod error;
pub mod identity;
pub mod wire;

// Re-export primary types for ergonomic imports.
pub use error::{EnumValueError, IdentifierError, ModelError};
pub use identity::{Arn, ResourceName};
pub use wire::WireEnum;
