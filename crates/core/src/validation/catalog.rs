//! Rule catalog: constructors plus the predicate and message for each kind.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::{BoundRule, Rule, RuleKind, RuleValue};
use super::strength::validate_password;

const EMAIL_PATTERN: &str = r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,8}$";
const URL_PATTERN: &str = r"^(http(s)?://)?([\da-z\.-]+)\.([a-z\.]{2,6})([/\w \.-]*)*\]?$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));
static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(URL_PATTERN).expect("valid regex"));

/// Value must be a non-empty string.
pub fn required() -> Rule {
    Rule::new(RuleKind::Required, RuleValue::None)
}

/// Value must be at least `n` characters long.
pub fn min(n: usize) -> Rule {
    Rule::new(RuleKind::MinLength, length_config(n))
}

/// Value must be at most `n` characters long.
pub fn max(n: usize) -> Rule {
    Rule::new(RuleKind::MaxLength, length_config(n))
}

/// Value must equal `value` exactly.
pub fn equal(value: impl Into<String>) -> Rule {
    Rule::new(RuleKind::Equal, RuleValue::Str(value.into()))
}

/// Value must look like an email address. Matching ignores ASCII case.
pub fn email() -> Rule {
    Rule::new(RuleKind::Email, RuleValue::None)
}

/// Value must look like a URL. The scheme and path are optional.
pub fn url() -> Rule {
    Rule::new(RuleKind::Url, RuleValue::None)
}

/// Value must pass [`validate_password`].
pub fn password() -> Rule {
    Rule::new(RuleKind::Password, RuleValue::None)
}

/// Message override: writes `text` into the field's slot whenever the field
/// is processed, whether or not any other rule failed.
pub fn message(text: impl Into<String>) -> Rule {
    Rule::new(RuleKind::Message, RuleValue::Str(text.into()))
}

fn length_config(n: usize) -> RuleValue {
    RuleValue::Int(i64::try_from(n).unwrap_or(i64::MAX))
}

/// Run the predicate for a bound rule.
pub(crate) fn evaluate(rule: &BoundRule<'_>) -> bool {
    if rule.is_override() {
        return true;
    }
    // Every catalog predicate is string-based; anything else fails closed.
    let Some(value) = rule.field_str() else {
        return false;
    };

    match rule.kind() {
        RuleKind::Required => !value.is_empty(),
        RuleKind::MinLength => evaluate_length(rule.config(), value, |len, n| len >= n),
        RuleKind::MaxLength => evaluate_length(rule.config(), value, |len, n| len <= n),
        RuleKind::Equal => rule.config().as_str() == Some(value),
        RuleKind::Email => EMAIL_RE.is_match(&value.to_ascii_lowercase()),
        RuleKind::Url => URL_RE.is_match(value),
        RuleKind::Password => validate_password(value).1,
        RuleKind::Message => true,
    }
}

fn evaluate_length(config: &RuleValue, value: &str, cmp: impl Fn(i64, i64) -> bool) -> bool {
    let Some(n) = config.as_int() else {
        return false;
    };
    let len = i64::try_from(value.chars().count()).unwrap_or(i64::MAX);
    cmp(len, n)
}

/// Produce the failure text for a bound rule.
pub(crate) fn failure_message(rule: &BoundRule<'_>) -> String {
    let field = rule.field_name();
    match rule.kind() {
        RuleKind::Required => format!("{field} is a required field"),
        RuleKind::MinLength => {
            format!("{field} should be at least {} characters long", rule.config())
        }
        RuleKind::MaxLength => {
            format!("{field} should be maximum {} characters long", rule.config())
        }
        RuleKind::Equal => format!("{field} should be equal"),
        RuleKind::Email => "email address is invalid".to_string(),
        RuleKind::Url => "not a valid url".to_string(),
        RuleKind::Password => format!("{field} should be valid"),
        RuleKind::Message => rule.config().to_string(),
    }
}
