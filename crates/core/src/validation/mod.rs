//! Field validation engine.
//!
//! Provides rule types, the rule catalog, the password strength check, the
//! field accessor boundary, and the validator that ties them together.

pub mod accessor;
pub mod catalog;
pub mod fields;
pub mod rules;
pub mod strength;
pub mod validator;

pub use accessor::{Discard, FieldSink, FieldSource};
pub use catalog::{email, equal, max, message, min, password, required, url};
pub use fields::Fields;
pub use rules::{
    build_rule_sequence, BoundRule, FieldViolation, IntoRule, Rule, RuleKind, RuleValue,
    ValidationReport,
};
pub use strength::{password_weakness, validate_password, PasswordWeakness};
pub use validator::{validate, Validator};
