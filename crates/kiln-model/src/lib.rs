//! # kiln-model — Control-Plane API Shapes
//!
//! Typed request/response shapes for the Kiln machine-learning platform's
//! control-plane API, grouped by API area. Every shape mirrors the wire
//! schema of the remote service: PascalCase JSON keys, epoch-second
//! timestamps, and closed wire-string enumerations that reject anything
//! outside their declared set.
//!
//! ## Shape conventions
//!
//! - Shapes are immutable values with owned data. There are no mutating
//!   fluent setters; request shapes with several mandatory fields are
//!   built through consuming builders whose `build()` fails with
//!   [`kiln_core::ModelError::MissingField`] when a required field is
//!   absent.
//! - Optional wire fields are `Option`; repeated fields are `Vec` (an
//!   absent wire field decodes as empty); string maps are `BTreeMap` so
//!   encoding is deterministic.
//! - Identifiers use the validated [`kiln_core::Arn`] and
//!   [`kiln_core::ResourceName`] newtypes. Other documented constraints
//!   (lengths, patterns on free-form fields) are advisory and not
//!   enforced here.
//!
//! This crate carries no transport: callers hand serialized bodies to
//! their own HTTP/signing stack.

pub mod common;
pub mod labeling;
pub mod notebook;
pub mod training;
pub mod transform;
pub mod tuning;

use kiln_core::ModelError;

/// Unwrap a builder field, failing with a structured error naming the
/// shape and the wire name of the missing field.
pub(crate) fn required<T>(
    value: Option<T>,
    shape: &'static str,
    field: &'static str,
) -> Result<T, ModelError> {
    value.ok_or(ModelError::MissingField { shape, field })
}
