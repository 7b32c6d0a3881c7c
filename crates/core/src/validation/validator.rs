//! Validator: runs a [`Fields`] table against one input record.

use serde_json::Value;
use unicode_general_category::{get_general_category, GeneralCategory};

use super::accessor::{FieldSink, FieldSource};
use super::fields::Fields;
use super::rules::{FieldViolation, RuleKind, ValidationReport};

/// Binds an input record to a field table.
///
/// Holds no state beyond the two references, so one validator can fill any
/// number of output targets.
#[derive(Debug)]
pub struct Validator<'a, S: ?Sized> {
    data: &'a S,
    fields: &'a Fields,
}

/// One message produced during a sweep.
struct Outcome<'a> {
    field: &'a str,
    rule: RuleKind,
    message: String,
    value: Option<&'a Value>,
    failed: bool,
}

impl<'a, S: FieldSource + ?Sized> Validator<'a, S> {
    pub fn new(data: &'a S, fields: &'a Fields) -> Self {
        Self { data, fields }
    }

    /// Validate every exported field, writing messages into `target`.
    ///
    /// Returns `true` iff no predicate failed. Message overrides are written
    /// but never affect the result.
    pub fn validate<T: FieldSink + ?Sized>(&self, target: &mut T) -> bool {
        let mut ok = true;
        self.sweep(|outcome| {
            if outcome.failed {
                ok = false;
            }
            if let Err(err) = target.set_field(outcome.field, outcome.message) {
                tracing::debug!(
                    field = outcome.field,
                    rule = %outcome.rule,
                    error = %err,
                    "Could not write validation message"
                );
            }
        });
        ok
    }

    /// Run the same sweep as [`Validator::validate`] and collect every
    /// message, in evaluation order, instead of writing them.
    pub fn report(&self) -> ValidationReport {
        let mut report = ValidationReport {
            is_valid: true,
            violations: Vec::new(),
        };
        self.sweep(|outcome| {
            if outcome.failed {
                report.is_valid = false;
            }
            report.violations.push(FieldViolation {
                field: outcome.field.to_string(),
                rule: outcome.rule,
                message: outcome.message,
                value: outcome.value.cloned(),
            });
        });
        report
    }

    fn sweep(&self, mut emit: impl FnMut(Outcome<'_>)) {
        for (name, rules) in self.fields.iter() {
            if !is_exported(name) {
                tracing::trace!(field = name, "Skipping unexported field");
                continue;
            }

            let value = self.data.field(name);
            if value.is_none() {
                tracing::debug!(field = name, "Field not present on input record");
            }

            for rule in rules {
                let bound = rule.bind(name, value.as_ref());
                if bound.is_override() {
                    if bound.config().as_str().is_none() {
                        tracing::debug!(field = name, "Message override without text, skipping");
                        continue;
                    }
                    emit(Outcome {
                        field: name,
                        rule: rule.kind(),
                        message: bound.message(),
                        value: value.as_ref(),
                        failed: false,
                    });
                    continue;
                }

                if !bound.passes() {
                    emit(Outcome {
                        field: name,
                        rule: rule.kind(),
                        message: bound.message(),
                        value: value.as_ref(),
                        failed: true,
                    });
                }
            }
        }
    }
}

/// Only fields whose name starts with an uppercase letter (`Lu`) are validated.
fn is_exported(name: &str) -> bool {
    name.chars()
        .next()
        .is_some_and(|c| get_general_category(c) == GeneralCategory::UppercaseLetter)
}

/// Validate `input` against `fields`, writing messages into `output`.
pub fn validate<S, T>(input: &S, output: &mut T, fields: &Fields) -> bool
where
    S: FieldSource + ?Sized,
    T: FieldSink + ?Sized,
{
    Validator::new(input, fields).validate(output)
}
