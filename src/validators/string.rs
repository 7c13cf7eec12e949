//! String validators

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::reject;
use crate::chained::ValueValidator;
use crate::error::Failure;
use crate::Validator;

/// Empty, or ASCII whitespace only.
static BLANK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A[[:space:]]*\z").expect("blank pattern is valid"));

/// Passes when the string contains at least one non-whitespace character.
///
/// ```text
/// ""        -> blank
/// "  "      -> blank
/// "\t\n\r"  -> blank
/// " abc "   -> not blank
/// ```
///
/// # Example
///
/// ```rust
/// use rampart::prelude::*;
///
/// assert!(NotBlank::new(" abc ").validate().is_ok());
/// assert_invalid!(NotBlank::new(" \t\n").validate(), ["shouldn't be blank"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotBlank {
    value: String,
    message: Option<Cow<'static, str>>,
}

impl NotBlank {
    /// Default failure message.
    pub const DEFAULT_MESSAGE: &'static str = "shouldn't be blank";

    /// Check `value`.
    pub fn new(value: impl Into<String>) -> Self {
        NotBlank {
            value: value.into(),
            message: None,
        }
    }

    /// Override the failure message.
    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Validator for NotBlank {
    fn validate(&self) -> Result<(), Failure> {
        if BLANK.is_match(&self.value) {
            Err(reject(&self.message, Self::DEFAULT_MESSAGE))
        } else {
            Ok(())
        }
    }
}

impl ValueValidator<String> for NotBlank {
    fn set_value(&mut self, value: String) {
        self.value = value;
    }
}

/// Passes when the string is one of `list`.
///
/// An empty list accepts nothing.
///
/// # Example
///
/// ```rust
/// use rampart::prelude::*;
///
/// let plan = |value: &str| Inclusion::new(value, ["free", "pro"]);
///
/// assert!(plan("pro").validate().is_ok());
/// assert_invalid!(plan("gold").validate(), ["should be in"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Inclusion {
    value: String,
    list: Vec<String>,
    message: Option<Cow<'static, str>>,
}

impl Inclusion {
    /// Default failure message.
    pub const DEFAULT_MESSAGE: &'static str = "should be in";

    /// Check that `value` is in `list`.
    pub fn new<I, S>(value: impl Into<String>, list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Inclusion {
            value: value.into(),
            list: list.into_iter().map(Into::into).collect(),
            message: None,
        }
    }

    /// The list only; the value is filled in later by a
    /// [`Chain`](crate::chained::Chain).
    pub fn of<I, S>(list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(String::new(), list)
    }

    /// Override the failure message.
    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Validator for Inclusion {
    fn validate(&self) -> Result<(), Failure> {
        if self.list.contains(&self.value) {
            Ok(())
        } else {
            Err(reject(&self.message, Self::DEFAULT_MESSAGE))
        }
    }
}

impl ValueValidator<String> for Inclusion {
    fn set_value(&mut self, value: String) {
        self.value = value;
    }
}

/// Passes when the string is not one of `list`.
///
/// An empty list accepts everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Exclusion {
    value: String,
    list: Vec<String>,
    message: Option<Cow<'static, str>>,
}

impl Exclusion {
    /// Default failure message.
    pub const DEFAULT_MESSAGE: &'static str = "shouldn't be in";

    /// Check that `value` is not in `list`.
    pub fn new<I, S>(value: impl Into<String>, list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Exclusion {
            value: value.into(),
            list: list.into_iter().map(Into::into).collect(),
            message: None,
        }
    }

    /// The list only; the value is filled in later by a
    /// [`Chain`](crate::chained::Chain).
    pub fn of<I, S>(list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(String::new(), list)
    }

    /// Override the failure message.
    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Validator for Exclusion {
    fn validate(&self) -> Result<(), Failure> {
        if self.list.contains(&self.value) {
            Err(reject(&self.message, Self::DEFAULT_MESSAGE))
        } else {
            Ok(())
        }
    }
}

impl ValueValidator<String> for Exclusion {
    fn set_value(&mut self, value: String) {
        self.value = value;
    }
}

/// Passes when the number of characters lies in `min..=max`.
///
/// Length is counted in Unicode scalar values, not bytes.
///
/// # Example
///
/// ```rust
/// use rampart::prelude::*;
///
/// assert!(Length::new("añejo", 5, 5).validate().is_ok());
/// assert_invalid!(Length::new("ab", 3, 5).validate(), ["too short"]);
/// assert_invalid!(
///     Length::new("abcdef", 3, 5).too_long_message("at most 5 characters").validate(),
///     ["at most 5 characters"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Length {
    value: String,
    min: usize,
    max: usize,
    too_short_message: Option<Cow<'static, str>>,
    too_long_message: Option<Cow<'static, str>>,
}

impl Length {
    /// Default message when the string is shorter than `min`.
    pub const DEFAULT_TOO_SHORT_MESSAGE: &'static str = "too short";
    /// Default message when the string is longer than `max`.
    pub const DEFAULT_TOO_LONG_MESSAGE: &'static str = "too long";

    /// Check that `value` has between `min` and `max` characters.
    pub fn new(value: impl Into<String>, min: usize, max: usize) -> Self {
        Length {
            value: value.into(),
            min,
            max,
            too_short_message: None,
            too_long_message: None,
        }
    }

    /// Bounds only; the value is filled in later by a
    /// [`Chain`](crate::chained::Chain).
    pub fn between(min: usize, max: usize) -> Self {
        Self::new(String::new(), min, max)
    }

    /// Override the message reported below `min`.
    pub fn too_short_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.too_short_message = Some(message.into());
        self
    }

    /// Override the message reported above `max`.
    pub fn too_long_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.too_long_message = Some(message.into());
        self
    }
}

impl Validator for Length {
    fn validate(&self) -> Result<(), Failure> {
        let len = self.value.chars().count();
        if len < self.min {
            return Err(reject(&self.too_short_message, Self::DEFAULT_TOO_SHORT_MESSAGE));
        }
        if len > self.max {
            return Err(reject(&self.too_long_message, Self::DEFAULT_TOO_LONG_MESSAGE));
        }
        Ok(())
    }
}

impl ValueValidator<String> for Length {
    fn set_value(&mut self, value: String) {
        self.value = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<(), Failure>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn test_not_blank() {
        assert!(NotBlank::new("abc").validate().is_ok());
        assert!(NotBlank::new(" abc ").validate().is_ok());
        assert!(NotBlank::new("").validate().is_err());
        assert!(NotBlank::new(" ").validate().is_err());
        assert!(NotBlank::new(" \t\t\n").validate().is_err());
        assert!(NotBlank::new("\r\n\x0b\x0c").validate().is_err());
    }

    #[test]
    fn test_not_blank_multiline_text_is_not_blank() {
        assert!(NotBlank::new("\n\nabc\n").validate().is_ok());
    }

    #[test]
    fn test_not_blank_messages() {
        assert_eq!(message(NotBlank::new("").validate()), "shouldn't be blank");
        assert_eq!(
            message(NotBlank::new("").message("override error message").validate()),
            "override error message"
        );
    }

    #[test]
    fn test_inclusion() {
        assert!(Inclusion::default().validate().is_err());
        assert!(Inclusion::new("abc", Vec::<String>::new()).validate().is_err());
        assert!(Inclusion::new("abc", ["bcd", "cdf"]).validate().is_err());
        assert!(Inclusion::new("abc", ["abc", "bcd", "cdf"]).validate().is_ok());
        assert_eq!(message(Inclusion::new("abc", ["x"]).validate()), "should be in");
    }

    #[test]
    fn test_exclusion() {
        assert!(Exclusion::default().validate().is_ok());
        assert!(Exclusion::new("abc", Vec::<String>::new()).validate().is_ok());
        assert!(Exclusion::new("abc", ["bcd", "cdf"]).validate().is_ok());
        assert!(Exclusion::new("abc", ["abc", "bcd", "cdf"]).validate().is_err());
        assert_eq!(message(Exclusion::new("abc", ["abc"]).validate()), "shouldn't be in");
    }

    #[test]
    fn test_length() {
        assert!(Length::default().validate().is_ok());
        assert!(Length::new("ab", 0, 0).validate().is_err());
        assert!(Length::new("ab", 3, 5).validate().is_err());
        assert!(Length::new("abc", 3, 5).validate().is_ok());
        assert!(Length::new("abcd", 3, 5).validate().is_ok());
        assert!(Length::new("abcdf", 3, 5).validate().is_ok());
        assert!(Length::new("abcdfg", 3, 5).validate().is_err());
    }

    #[test]
    fn test_length_counts_chars() {
        // five chars, six bytes
        assert!(Length::new("añejo", 0, 5).validate().is_ok());
    }

    #[test]
    fn test_length_messages() {
        assert_eq!(message(Length::new("ab", 3, 5).validate()), "too short");
        assert_eq!(
            message(Length::new("ab", 3, 5).too_short_message("override error message").validate()),
            "override error message"
        );
        assert_eq!(message(Length::new("abcdfg", 3, 5).validate()), "too long");
        assert_eq!(
            message(Length::new("abcdfg", 3, 5).too_long_message("override error message").validate()),
            "override error message"
        );
    }

    #[test]
    fn test_set_value() {
        let mut v = Inclusion::of(["Kent", "Bob"]);
        v.set_value("Bob".to_string());
        assert!(v.validate().is_ok());

        let mut v = Length::between(1, 3);
        v.set_value("four".to_string());
        assert!(v.validate().is_err());
    }
}
