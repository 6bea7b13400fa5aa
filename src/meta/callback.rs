//! Callback reference type - a `Class::method` handler pointer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Reference to a controller method, rendered as `"ClassName::methodName"`.
///
/// The class part is the type's short name (last path segment of the
/// qualified name), matching what the dispatcher instantiates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallbackRef {
    class: String,
    method: String,
}

impl CallbackRef {
    /// Create a callback reference from class and method names.
    pub fn new(class: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            method: method.into(),
        }
    }

    /// The class (controller) part.
    #[inline]
    pub fn class(&self) -> &str {
        &self.class
    }

    /// The method (handler) part.
    #[inline]
    pub fn method(&self) -> &str {
        &self.method
    }
}

impl fmt::Display for CallbackRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.class, self.method)
    }
}

impl FromStr for CallbackRef {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once("::") {
            Some((class, method)) if !class.is_empty() && !method.is_empty() => {
                Ok(Self::new(class, method))
            }
            _ => Err(ValidationError::InvalidCallback(s.to_string())),
        }
    }
}

impl Serialize for CallbackRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CallbackRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let cb = CallbackRef::new("BlogController", "index");
        assert_eq!(cb.to_string(), "BlogController::index");
    }

    #[test]
    fn test_parse() {
        let cb: CallbackRef = "ErrorController::onWebError".parse().unwrap();
        assert_eq!(cb.class(), "ErrorController");
        assert_eq!(cb.method(), "onWebError");
    }

    #[test]
    fn test_parse_qualified_class() {
        // rsplit keeps nested path separators inside the class part
        let cb: CallbackRef = "app::controllers::BlogController::show".parse().unwrap();
        assert_eq!(cb.class(), "app::controllers::BlogController");
        assert_eq!(cb.method(), "show");
    }

    #[test]
    fn test_parse_invalid() {
        assert!("BlogController".parse::<CallbackRef>().is_err());
        assert!("::index".parse::<CallbackRef>().is_err());
        assert!("BlogController::".parse::<CallbackRef>().is_err());
    }

    #[test]
    fn test_serialize_deserialize() {
        let cb = CallbackRef::new("JobsCommand", "run");
        let json = serde_json::to_string(&cb).unwrap();
        assert_eq!(json, r#""JobsCommand::run""#);

        let parsed: CallbackRef = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cb);
    }
}
