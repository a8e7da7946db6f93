//! Invalid Argument - Pre-formatted invalid-argument errors
//!
//! This crate contains a single error value and the factories that build it:
//! - [`ArgumentError`] and its [`ArgumentErrorKind`] taxonomy
//! - Runtime value categories used in type-mismatch messages
//! - Extension traits for untyped boundaries (JSON input, optional lookups)
//!
//! **Design Principle**: Factories only construct. Raising, returning,
//! logging or discarding the error is always the caller's decision.

pub mod error {
    pub mod argument_error;
    pub mod conversions;
    pub mod kind;
}
pub mod boundary;
pub mod value_type;

pub use error::argument_error::{ArgumentError, ArgumentResult};
pub use error::kind::ArgumentErrorKind;
pub use value_type::{TypeOf, ValueType};
