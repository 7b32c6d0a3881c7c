//! Declarative, data-driven field validation.
//!
//! Pure logic with no I/O: a caller builds a [`validation::Fields`] table,
//! binds it to an input record through a [`validation::Validator`], and
//! receives a pass/fail result plus per-field messages written into an
//! output target of its choosing.

pub mod error;
pub mod validation;

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}
