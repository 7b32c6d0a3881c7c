//! Validation rule and result types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::catalog;

/// The closed set of checks a [`Rule`] can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Required,
    MinLength,
    MaxLength,
    Equal,
    Email,
    Url,
    Password,
    /// Pseudo-rule: never evaluated, writes its configured text instead.
    Message,
}

impl RuleKind {
    pub const ALL: [RuleKind; 8] = [
        RuleKind::Required,
        RuleKind::MinLength,
        RuleKind::MaxLength,
        RuleKind::Equal,
        RuleKind::Email,
        RuleKind::Url,
        RuleKind::Password,
        RuleKind::Message,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::MinLength => "min_length",
            RuleKind::MaxLength => "max_length",
            RuleKind::Equal => "equal",
            RuleKind::Email => "email",
            RuleKind::Url => "url",
            RuleKind::Password => "password",
            RuleKind::Message => "message",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule configuration parameter.
///
/// Only the owning rule interprets it. A rule handed a parameter of the
/// wrong shape fails closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    #[default]
    None,
    Int(i64),
    Str(String),
}

impl RuleValue {
    pub fn is_none(&self) -> bool {
        matches!(self, RuleValue::None)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            RuleValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RuleValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for RuleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleValue::None => Ok(()),
            RuleValue::Int(n) => write!(f, "{n}"),
            RuleValue::Str(s) => f.write_str(s),
        }
    }
}

/// An immutable description of one validation check.
///
/// Serializes as `{"name": "min_length", "config": 3}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(rename = "name")]
    kind: RuleKind,
    #[serde(default, skip_serializing_if = "RuleValue::is_none")]
    config: RuleValue,
}

impl Rule {
    pub fn new(kind: RuleKind, config: RuleValue) -> Self {
        Self { kind, config }
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn config(&self) -> &RuleValue {
        &self.config
    }

    /// Bind the field under test, producing the view predicates run against.
    pub fn bind<'a>(
        &'a self,
        field_name: &'a str,
        field_value: Option<&'a Value>,
    ) -> BoundRule<'a> {
        BoundRule {
            rule: self,
            field_name,
            field_value,
        }
    }
}

/// A [`Rule`] bound to one field's name and value for a single evaluation.
#[derive(Debug, Clone, Copy)]
pub struct BoundRule<'a> {
    rule: &'a Rule,
    field_name: &'a str,
    field_value: Option<&'a Value>,
}

impl<'a> BoundRule<'a> {
    pub fn rule(&self) -> &'a Rule {
        self.rule
    }

    pub fn kind(&self) -> RuleKind {
        self.rule.kind
    }

    pub fn config(&self) -> &'a RuleValue {
        &self.rule.config
    }

    pub fn field_name(&self) -> &'a str {
        self.field_name
    }

    pub fn field_value(&self) -> Option<&'a Value> {
        self.field_value
    }

    /// The field value as a string, if it is one.
    pub fn field_str(&self) -> Option<&'a str> {
        self.field_value.and_then(Value::as_str)
    }

    pub fn is_override(&self) -> bool {
        self.rule.kind == RuleKind::Message
    }

    /// Whether the bound value satisfies the rule. Always true for the
    /// message override, which has no predicate.
    pub fn passes(&self) -> bool {
        catalog::evaluate(self)
    }

    /// The failure text for this rule, or the override text for
    /// [`RuleKind::Message`].
    pub fn message(&self) -> String {
        catalog::failure_message(self)
    }
}

/// Anything that materializes into a [`Rule`]: a rule value or a
/// zero-argument constructor such as [`catalog::required`].
pub trait IntoRule {
    fn into_rule(self) -> Rule;
}

impl IntoRule for Rule {
    fn into_rule(self) -> Rule {
        self
    }
}

impl<F> IntoRule for F
where
    F: FnOnce() -> Rule,
{
    fn into_rule(self) -> Rule {
        self()
    }
}

/// Materialize rule constructors into an ordered rule sequence.
///
/// For a mix of constructor functions and rule values use [`rules!`](crate::rules).
pub fn build_rule_sequence<I>(rules: I) -> Vec<Rule>
where
    I: IntoIterator,
    I::Item: IntoRule,
{
    rules.into_iter().map(IntoRule::into_rule).collect()
}

/// Build an ordered rule sequence from any mix of rules and constructors.
///
/// ```
/// use dreampic_core::rules;
/// use dreampic_core::validation::{min, required, RuleKind};
///
/// let seq = rules![required, min(3)];
/// assert_eq!(seq[0].kind(), RuleKind::Required);
/// assert_eq!(seq[1].kind(), RuleKind::MinLength);
/// ```
#[macro_export]
macro_rules! rules {
    ($($rule:expr),* $(,)?) => {
        ::std::vec![$($crate::validation::IntoRule::into_rule($rule)),*]
    };
}

/// Aggregated outcome of one validation sweep.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub violations: Vec<FieldViolation>,
}

impl ValidationReport {
    /// Collapse violations into one message per field, last write wins.
    pub fn messages(&self) -> BTreeMap<String, String> {
        self.violations
            .iter()
            .map(|v| (v.field.clone(), v.message.clone()))
            .collect()
    }

    /// Violations recorded for one field, in evaluation order.
    pub fn for_field<'a>(
        &'a self,
        field: &'a str,
    ) -> impl Iterator<Item = &'a FieldViolation> + 'a {
        self.violations.iter().filter(move |v| v.field == field)
    }
}

/// A single message produced for a field: a failed rule or an override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule: RuleKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}
