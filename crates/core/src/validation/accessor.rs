//! Field accessor boundary: read a named field from an input record and
//! write a message into a named slot of an output target.
//!
//! Reads never fail: a missing field or a non-record input yields `None`.
//! Writes return a [`CoreError`] on a structural mismatch so a direct caller
//! can see it; the validator logs and skips these.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Value};

use crate::error::CoreError;

/// An input record whose fields can be looked up by name.
pub trait FieldSource {
    fn field(&self, name: &str) -> Option<Value>;
}

/// An output target that accepts a message per field name.
pub trait FieldSink {
    fn set_field(&mut self, name: &str, message: String) -> Result<(), CoreError>;
}

impl FieldSource for Map<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl FieldSource for Value {
    fn field(&self, name: &str) -> Option<Value> {
        match self {
            Value::Object(map) => map.field(name),
            _ => None,
        }
    }
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn field(&self, name: &str) -> Option<Value> {
        (**self).field(name)
    }
}

impl<T: FieldSource + ?Sized> FieldSource for &mut T {
    fn field(&self, name: &str) -> Option<Value> {
        (**self).field(name)
    }
}

impl<T: FieldSource + ?Sized> FieldSource for Box<T> {
    fn field(&self, name: &str) -> Option<Value> {
        (**self).field(name)
    }
}

impl<T: FieldSource> FieldSource for Option<T> {
    fn field(&self, name: &str) -> Option<Value> {
        self.as_ref().and_then(|record| record.field(name))
    }
}

impl<S: BuildHasher> FieldSink for HashMap<String, String, S> {
    fn set_field(&mut self, name: &str, message: String) -> Result<(), CoreError> {
        self.insert(name.to_string(), message);
        Ok(())
    }
}

impl FieldSink for BTreeMap<String, String> {
    fn set_field(&mut self, name: &str, message: String) -> Result<(), CoreError> {
        self.insert(name.to_string(), message);
        Ok(())
    }
}

impl FieldSink for Map<String, Value> {
    fn set_field(&mut self, name: &str, message: String) -> Result<(), CoreError> {
        self.insert(name.to_string(), Value::String(message));
        Ok(())
    }
}

impl FieldSink for Value {
    fn set_field(&mut self, name: &str, message: String) -> Result<(), CoreError> {
        match self {
            Value::Object(map) => map.set_field(name, message),
            other => Err(CoreError::InvalidTarget(format!(
                "expected a JSON object, found {}",
                json_kind(other)
            ))),
        }
    }
}

impl<T: FieldSink + ?Sized> FieldSink for &mut T {
    fn set_field(&mut self, name: &str, message: String) -> Result<(), CoreError> {
        (**self).set_field(name, message)
    }
}

impl<T: FieldSink + ?Sized> FieldSink for Box<T> {
    fn set_field(&mut self, name: &str, message: String) -> Result<(), CoreError> {
        (**self).set_field(name, message)
    }
}

/// `None` opts out of receiving messages.
impl<T: FieldSink> FieldSink for Option<T> {
    fn set_field(&mut self, name: &str, message: String) -> Result<(), CoreError> {
        match self {
            Some(target) => target.set_field(name, message),
            None => Ok(()),
        }
    }
}

/// A sink that drops every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl FieldSink for Discard {
    fn set_field(&mut self, _name: &str, _message: String) -> Result<(), CoreError> {
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Implement [`FieldSource`] for a struct via an explicit accessor table.
///
/// Each entry maps an external field name to a struct field whose type
/// implements `Serialize`. Unlisted names read as absent.
///
/// ```
/// use dreampic_core::field_source;
/// use dreampic_core::validation::FieldSource;
///
/// struct Login { email: String }
/// field_source!(Login { "Email" => email });
///
/// let login = Login { email: "a@b.co".into() };
/// assert_eq!(login.field("Email"), Some("a@b.co".into()));
/// assert_eq!(login.field("Password"), None);
/// ```
#[macro_export]
macro_rules! field_source {
    ($ty:ty { $($name:literal => $field:ident),+ $(,)? }) => {
        impl $crate::validation::FieldSource for $ty {
            fn field(
                &self,
                name: &str,
            ) -> ::core::option::Option<$crate::__private::serde_json::Value> {
                match name {
                    $($name => $crate::__private::serde_json::to_value(&self.$field).ok(),)+
                    _ => ::core::option::Option::None,
                }
            }
        }
    };
}

/// Implement [`FieldSink`] for a struct via an explicit accessor table.
///
/// Each listed struct field must implement `From<String>` (`String` and
/// `Option<String>` both do). Unlisted names are reported as
/// [`CoreError::UnknownField`].
#[macro_export]
macro_rules! field_sink {
    ($ty:ty { $($name:literal => $field:ident),+ $(,)? }) => {
        impl $crate::validation::FieldSink for $ty {
            fn set_field(
                &mut self,
                name: &str,
                message: ::std::string::String,
            ) -> ::core::result::Result<(), $crate::error::CoreError> {
                match name {
                    $($name => {
                        self.$field = ::core::convert::From::from(message);
                        ::core::result::Result::Ok(())
                    })+
                    other => ::core::result::Result::Err($crate::error::CoreError::UnknownField {
                        field: ::std::string::ToString::to_string(other),
                    }),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[derive(Debug, Default)]
    struct Profile {
        name: String,
        age: u32,
    }

    crate::field_source!(Profile { "Name" => name, "Age" => age });

    #[derive(Debug, Default)]
    struct ProfileErrors {
        name: Option<String>,
        age: String,
    }

    crate::field_sink!(ProfileErrors { "Name" => name, "Age" => age });

    #[test]
    fn map_source_reads_present_and_missing() {
        let record = json!({"Name": "ada"});
        let Value::Object(map) = record else {
            unreachable!()
        };
        assert_eq!(map.field("Name"), Some(json!("ada")));
        assert_eq!(map.field("Missing"), None);
    }

    #[test]
    fn non_object_value_reads_as_absent() {
        assert_eq!(json!("just a string").field("Name"), None);
        assert_eq!(json!([1, 2]).field("Name"), None);
    }

    #[test]
    fn references_dereference_transparently() {
        let profile = Profile {
            name: "ada".into(),
            age: 36,
        };
        let by_ref: &Profile = &profile;
        let by_ref_ref: &&Profile = &by_ref;
        assert_eq!(by_ref.field("Name"), Some(json!("ada")));
        assert_eq!(by_ref_ref.field("Age"), Some(json!(36)));
        assert_eq!(Box::new(profile).field("Name"), Some(json!("ada")));
    }

    #[test]
    fn absent_record_reads_as_absent() {
        let none: Option<Profile> = None;
        assert_eq!(none.field("Name"), None);
    }

    #[test]
    fn struct_source_ignores_unlisted_fields() {
        assert_eq!(Profile::default().field("name"), None);
    }

    #[test]
    fn hash_map_sink_writes_by_key() {
        let mut errors: HashMap<String, String> = HashMap::new();
        errors.set_field("Name", "bad".into()).unwrap();
        assert_eq!(errors["Name"], "bad");
    }

    #[test]
    fn json_sink_rejects_non_object() {
        let mut target = json!(1);
        assert_matches!(
            target.set_field("Name", "bad".into()),
            Err(CoreError::InvalidTarget(_))
        );
        let mut target = json!({});
        target.set_field("Name", "bad".into()).unwrap();
        assert_eq!(target, json!({"Name": "bad"}));
    }

    #[test]
    fn struct_sink_writes_listed_fields() {
        let mut errors = ProfileErrors::default();
        errors.set_field("Name", "bad name".into()).unwrap();
        errors.set_field("Age", "bad age".into()).unwrap();
        assert_eq!(errors.name.as_deref(), Some("bad name"));
        assert_eq!(errors.age, "bad age");
    }

    #[test]
    fn struct_sink_reports_unknown_field() {
        let mut errors = ProfileErrors::default();
        assert_matches!(
            errors.set_field("Email", "x".into()),
            Err(CoreError::UnknownField { field }) if field == "Email"
        );
    }

    #[test]
    fn none_and_discard_are_no_ops() {
        let mut none: Option<&mut HashMap<String, String>> = None;
        assert!(none.set_field("Name", "x".into()).is_ok());
        assert!(Discard.set_field("Name", "x".into()).is_ok());
    }
}
