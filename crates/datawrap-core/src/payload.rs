//! Opaque payload exchanged by get and set operations

use std::any::{self, Any};
use std::fmt;

/// An owned value of any `'static` type
///
/// The concrete type depends on the format: `text.*` formats carry a
/// `String`, `object.json` carries a `serde_json::Value`, and so on.
pub struct Payload {
    value: Box<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Payload {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: any::type_name::<T>(),
        }
    }

    /// Name of the wrapped type, for diagnostics
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Take the value out, handing the payload back if the type differs
    pub fn downcast<T: Any>(self) -> Result<T, Payload> {
        let type_name = self.type_name;
        match self.value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(Payload { value, type_name }),
        }
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Payload")
            .field("type", &self.type_name)
            .finish_non_exhaustive()
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Payload::new(value)
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Payload::new(value.to_string())
    }
}

impl From<bool> for Payload {
    fn from(value: bool) -> Self {
        Payload::new(value)
    }
}

impl From<serde_json::Value> for Payload {
    fn from(value: serde_json::Value) -> Self {
        Payload::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_downcast_matching_type() {
        let payload = Payload::new(42u32);
        assert!(payload.is::<u32>());
        assert_eq!(payload.downcast_ref::<u32>(), Some(&42));
        assert_eq!(payload.downcast::<u32>().unwrap(), 42);
    }

    #[test]
    fn test_downcast_mismatch_returns_payload() {
        let payload = Payload::from("hello");
        let back = payload.downcast::<u32>().unwrap_err();
        assert_eq!(back.downcast_ref::<String>().map(String::as_str), Some("hello"));
        assert_eq!(back.type_name(), "alloc::string::String");
    }

    #[test]
    fn test_debug_shows_type_only() {
        let payload = Payload::from(json!({"secret": "value"}));
        let debug = format!("{:?}", payload);
        assert!(debug.contains("serde_json::value::Value"));
        assert!(!debug.contains("secret"));
    }
}
