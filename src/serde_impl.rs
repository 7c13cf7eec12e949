//! Serde support for validation errors (feature-gated)
//!
//! A [`ValidationError`] serializes as `{"message": "..."}` and a
//! [`ValidationErrors`] as a sequence of those. Deserializing an empty
//! sequence into [`ValidationErrors`] fails, since the collection is never
//! empty.
//!
//! # Example
//!
//! ```rust
//! use rampart::prelude::*;
//!
//! let err = validate(&validators![IsOdd::new(2), NotBlank::new("")]).unwrap_err();
//! let json = serde_json::to_string(err.validation_errors().unwrap()).unwrap();
//!
//! assert_eq!(json, r#"[{"message":"should be odd"},{"message":"shouldn't be blank"}]"#);
//! ```

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ValidationError, ValidationErrors};

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationError", 1)?;
        state.serialize_field("message", self.message())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for ValidationError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ErrorVisitor;

        impl<'de> Visitor<'de> for ErrorVisitor {
            type Value = ValidationError;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a validation error with a message")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut message: Option<String> = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == "message" {
                        if message.is_some() {
                            return Err(de::Error::duplicate_field("message"));
                        }
                        message = Some(map.next_value()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                let message = message.ok_or_else(|| de::Error::missing_field("message"))?;
                Ok(ValidationError::new(message))
            }
        }

        deserializer.deserialize_struct("ValidationError", &["message"], ErrorVisitor)
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for ValidationErrors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let errors = Vec::<ValidationError>::deserialize(deserializer)?;
        ValidationErrors::from_vec(errors)
            .ok_or_else(|| de::Error::invalid_length(0, &"at least one validation error"))
    }
}
