//! # Closed Wire-String Enumerations
//!
//! Every enum-typed field in the Kiln control-plane API is a *closed set*
//! of wire strings: a fixed collection of (constant, canonical string)
//! pairs, unique on the string side, that is never extended at runtime.
//! This module defines the [`WireEnum`] trait describing that contract and
//! the [`wire_enum!`] macro that instantiates it.
//!
//! ## Contract
//!
//! - `as_wire` is total: every constant has exactly one canonical wire
//!   string, and the mapping is injective.
//! - `from_wire` is strict: empty input fails with
//!   [`EnumValueError::InvalidEnumValue`], and non-empty input that matches
//!   no declared constant fails with
//!   [`EnumValueError::UnknownEnumValue`]. Matching is exact and
//!   case-sensitive, with no trimming.
//! - `from_wire(as_wire(c)) == c` for every declared constant `c`.
//!
//! Both directions are pure functions over constant data. Values are
//! `Copy`, the declared set lives in the program text, and nothing is
//! mutated after definition, so concurrent readers need no synchronization.
//!
//! ## Serde behavior
//!
//! The macro emits manual `Serialize`/`Deserialize` impls that route
//! through `as_wire`/`from_wire`, so the serde encoding is the canonical
//! wire string by construction and decoding is exactly as strict as
//! `from_wire`. A payload carrying an unrecognized value fails the whole
//! decode; tolerating unknown values is a caller-side policy this layer
//! does not implement.

use crate::error::EnumValueError;

/// A closed set of named wire-protocol string values.
///
/// Implemented by every enum the [`wire_enum!`] macro generates. The trait
/// exists so generic code (tests, tooling) can iterate a catalog and check
/// the closed-set laws; everyday call sites use the inherent methods of the
/// concrete enum and never need to import this.
pub trait WireEnum: Copy + Sized + 'static {
    /// The enum's type name, used in error messages.
    const TYPE_NAME: &'static str;

    /// All declared constants, in declaration order. The order is for
    /// enumeration and documentation only; it plays no part in matching.
    fn values() -> &'static [Self];

    /// The canonical wire string for this constant. Total and injective.
    fn as_wire(&self) -> &'static str;

    /// Parse a wire string into its constant.
    ///
    /// # Errors
    ///
    /// [`EnumValueError::InvalidEnumValue`] if `wire` is empty, and
    /// [`EnumValueError::UnknownEnumValue`] if it is non-empty but matches
    /// no declared constant.
    fn from_wire(wire: &str) -> Result<Self, EnumValueError>;
}

/// Declare a closed wire-string enumeration.
///
/// Generates the enum itself plus its [`WireEnum`] impl, inherent
/// `values`/`as_wire`/`from_wire` methods, `Display` and `FromStr`
/// (delegating to the wire mapping), and strict serde impls.
///
/// ```
/// kiln_core::wire_enum! {
///     /// Lifecycle states of a widget.
///     pub enum WidgetStatus {
///         Pending => "Pending",
///         InService => "InService",
///         Stopped => "Stopped",
///     }
/// }
///
/// assert_eq!(WidgetStatus::from_wire("InService"), Ok(WidgetStatus::InService));
/// assert_eq!(WidgetStatus::InService.as_wire(), "InService");
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// All declared constants, in declaration order.
            $vis const fn values() -> &'static [Self] {
                &[$(Self::$variant,)+]
            }

            /// The canonical wire string for this constant.
            $vis const fn as_wire(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            /// Parse a wire string. Exact, case-sensitive matching; empty
            /// and unrecognized input are rejected.
            $vis fn from_wire(wire: &str) -> ::core::result::Result<Self, $crate::error::EnumValueError> {
                if wire.is_empty() {
                    return ::core::result::Result::Err(
                        $crate::error::EnumValueError::InvalidEnumValue {
                            type_name: ::core::stringify!($name),
                        },
                    );
                }
                match wire {
                    $($wire => ::core::result::Result::Ok(Self::$variant),)+
                    other => ::core::result::Result::Err(
                        $crate::error::EnumValueError::UnknownEnumValue {
                            type_name: ::core::stringify!($name),
                            value: other.to_string(),
                        },
                    ),
                }
            }
        }

        impl $crate::wire::WireEnum for $name {
            const TYPE_NAME: &'static str = ::core::stringify!($name);

            fn values() -> &'static [Self] {
                Self::values()
            }

            fn as_wire(&self) -> &'static str {
                Self::as_wire(self)
            }

            fn from_wire(wire: &str) -> ::core::result::Result<Self, $crate::error::EnumValueError> {
                Self::from_wire(wire)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_wire())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::error::EnumValueError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Self::from_wire(s)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_wire())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::from_wire(&raw).map_err(::serde::de::Error::custom)
            }
        }
    };
}
