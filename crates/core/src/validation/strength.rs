//! Composite password strength check.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// The first unmet password requirement, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordWeakness {
    TooShort,
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSpecial,
}

impl PasswordWeakness {
    pub fn message(self) -> &'static str {
        match self {
            PasswordWeakness::TooShort => "Password must contain at least 8 characters",
            PasswordWeakness::MissingUppercase => "Password must contain an upper case character",
            PasswordWeakness::MissingLowercase => "Password must contain a lower case character",
            PasswordWeakness::MissingDigit => "Password must contain a number",
            PasswordWeakness::MissingSpecial => "Password must contain a special character",
        }
    }
}

#[derive(Debug, Default)]
struct CharClasses {
    upper: bool,
    lower: bool,
    digit: bool,
    special: bool,
}

impl CharClasses {
    /// Each character lands in at most one class.
    fn scan(password: &str) -> Self {
        let mut classes = Self::default();
        for c in password.chars() {
            match get_general_category(c) {
                GeneralCategory::UppercaseLetter => classes.upper = true,
                GeneralCategory::LowercaseLetter => classes.lower = true,
                GeneralCategory::DecimalNumber => classes.digit = true,
                GeneralCategory::MathSymbol
                | GeneralCategory::CurrencySymbol
                | GeneralCategory::ModifierSymbol
                | GeneralCategory::OtherSymbol => classes.special = true,
                _ if c.is_ascii_punctuation() => classes.special = true,
                _ => {}
            }
        }
        classes
    }
}

/// Typed form of [`validate_password`]: `None` means the password is strong.
pub fn password_weakness(password: &str) -> Option<PasswordWeakness> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Some(PasswordWeakness::TooShort);
    }

    let classes = CharClasses::scan(password);
    if !classes.upper {
        Some(PasswordWeakness::MissingUppercase)
    } else if !classes.lower {
        Some(PasswordWeakness::MissingLowercase)
    } else if !classes.digit {
        Some(PasswordWeakness::MissingDigit)
    } else if !classes.special {
        Some(PasswordWeakness::MissingSpecial)
    } else {
        None
    }
}

/// Check a password, returning the first unmet requirement's message and
/// whether it passed. A strong password yields `("", true)`.
pub fn validate_password(password: &str) -> (&'static str, bool) {
    match password_weakness(password) {
        Some(weakness) => (weakness.message(), false),
        None => ("", true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_short() {
        assert_eq!(
            validate_password("short"),
            ("Password must contain at least 8 characters", false)
        );
    }

    #[test]
    fn missing_uppercase() {
        assert_eq!(
            validate_password("alllowercase1!"),
            ("Password must contain an upper case character", false)
        );
    }

    #[test]
    fn missing_lowercase() {
        assert_eq!(
            password_weakness("UPPERLOWER12"),
            Some(PasswordWeakness::MissingLowercase)
        );
    }

    #[test]
    fn missing_digit() {
        assert_eq!(
            validate_password("NoDigitsHere!"),
            ("Password must contain a number", false)
        );
    }

    #[test]
    fn missing_special() {
        assert_eq!(
            validate_password("UpperLower12"),
            ("Password must contain a special character", false)
        );
    }

    #[test]
    fn strong_password() {
        assert_eq!(validate_password("Abcdef1!"), ("", true));
    }

    #[test]
    fn length_is_checked_before_classes() {
        assert_eq!(password_weakness("A1!"), Some(PasswordWeakness::TooShort));
    }

    #[test]
    fn unicode_symbols_count_as_special() {
        assert_eq!(password_weakness("Abcdefg1€"), None);
        assert_eq!(password_weakness("Abcdefg1+"), None);
    }

    #[test]
    fn non_ascii_punctuation_is_not_special() {
        assert_eq!(
            password_weakness("Abcdefg1¿"),
            Some(PasswordWeakness::MissingSpecial)
        );
    }

    #[test]
    fn non_latin_letters_are_classified() {
        assert_eq!(password_weakness("Ωmega123$x"), None);
        assert_eq!(password_weakness("Ωμέγα1234$"), None);
    }

    #[test]
    fn length_is_measured_in_characters() {
        // Eight multi-byte characters, all lowercase.
        assert_eq!(
            password_weakness("éééééééé"),
            Some(PasswordWeakness::MissingUppercase)
        );
        // Seven characters but more than eight bytes.
        assert_eq!(password_weakness("Éé1$ééé"), Some(PasswordWeakness::TooShort));
    }
}
