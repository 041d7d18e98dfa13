//! JSON-value backed data wrapper
//!
//! [`ValueWrapper`] keeps its data as a `serde_json::Value` and converts on
//! the way in and out. It is the reference implementation of the
//! [`DataWrapper`] contract.
//!
//! # Formats
//!
//! | Requested                | Get returns                   | Set accepts            |
//! |--------------------------|-------------------------------|------------------------|
//! | `object`                 | `serde_json::Value`           | -                      |
//! | `object.json`            | `serde_json::Value`           | `serde_json::Value`    |
//! | `text`, `text.json`      | JSON `String`                 | `text.json` only       |
//! | `text.toml`              | TOML `String`                 | TOML `String`          |
//! | `text.yaml`              | YAML `String`                 | YAML `String`          |
//!
//! # Info keys
//!
//! - `pointer` (`String`): JSON pointer selecting the sub-value to read or
//!   replace. The target must already exist.
//! - `pretty` (`bool`): pretty-print JSON and TOML output.
//!
//! # Example
//!
//! ```rust,ignore
//! use datawrap_core::{DataFormat, DataWrapper, DataWrapperExt, Info, ValueWrapper};
//!
//! let wrapper = ValueWrapper::from_json_str(r#"{"database": {"port": 5432}}"#)?;
//! let toml: String = wrapper.get_as(&DataFormat::TOML)?;
//!
//! let info = Info::new().with("pointer", "/database/port");
//! wrapper.set_data_with(&DataFormat::JSON, "6432".into(), &info)?;
//! ```

use super::traits::DataWrapper;
use crate::config::WrapperConfig;
use crate::error::{DataError, DataResult};
use crate::format::DataFormat;
use crate::info::Info;
use crate::payload::Payload;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Info key selecting a sub-value by JSON pointer
pub const POINTER_KEY: &str = "pointer";
/// Info key overriding pretty-printing
pub const PRETTY_KEY: &str = "pretty";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextFormat {
    Json,
    Toml,
    Yaml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Value,
    Text(TextFormat),
}

/// Map a requested get format to the shape produced
fn resolve_get(format: &DataFormat) -> Option<Shape> {
    match format.as_str() {
        "object" | "object.json" => Some(Shape::Value),
        "text" | "text.json" => Some(Shape::Text(TextFormat::Json)),
        "text.toml" => Some(Shape::Text(TextFormat::Toml)),
        "text.yaml" => Some(Shape::Text(TextFormat::Yaml)),
        _ => None,
    }
}

/// Map a stated set format to the shape expected
fn resolve_set(format: &DataFormat) -> Option<Shape> {
    match format.as_str() {
        "object.json" => Some(Shape::Value),
        "text.json" => Some(Shape::Text(TextFormat::Json)),
        "text.toml" => Some(Shape::Text(TextFormat::Toml)),
        "text.yaml" => Some(Shape::Text(TextFormat::Yaml)),
        _ => None,
    }
}

fn encode(text: TextFormat, value: &JsonValue, pretty: bool) -> DataResult<String> {
    match text {
        TextFormat::Json => {
            let result = if pretty {
                serde_json::to_string_pretty(value)
            } else {
                serde_json::to_string(value)
            };
            result.map_err(|e| DataError::failed(format!("JSON encoding failed: {}", e)))
        }
        TextFormat::Toml => {
            let result = if pretty {
                toml::to_string_pretty(value)
            } else {
                toml::to_string(value)
            };
            result.map_err(|e| DataError::failed(format!("TOML encoding failed: {}", e)))
        }
        TextFormat::Yaml => serde_yaml::to_string(value)
            .map_err(|e| DataError::failed(format!("YAML encoding failed: {}", e))),
    }
}

fn decode(text: TextFormat, content: &str) -> DataResult<JsonValue> {
    match text {
        TextFormat::Json => serde_json::from_str(content)
            .map_err(|e| DataError::failed(format!("JSON parsing failed: {}", e))),
        TextFormat::Toml => {
            let value: toml::Value = toml::from_str(content)
                .map_err(|e| DataError::failed(format!("TOML parsing failed: {}", e)))?;
            toml_to_json(value)
        }
        TextFormat::Yaml => {
            let value: serde_yaml::Value = serde_yaml::from_str(content)
                .map_err(|e| DataError::failed(format!("YAML parsing failed: {}", e)))?;
            yaml_to_json(value)
        }
    }
}

/// JSON has no NaN or infinities
fn finite_number(f: f64) -> DataResult<JsonValue> {
    serde_json::Number::from_f64(f)
        .map(JsonValue::Number)
        .ok_or_else(|| DataError::failed(format!("non-finite number {} has no JSON form", f)))
}

/// Lossless TOML to JSON conversion; datetimes become strings
fn toml_to_json(toml: toml::Value) -> DataResult<JsonValue> {
    let value = match toml {
        toml::Value::String(s) => JsonValue::String(s),
        toml::Value::Integer(i) => JsonValue::from(i),
        toml::Value::Float(f) => finite_number(f)?,
        toml::Value::Boolean(b) => JsonValue::Bool(b),
        toml::Value::Datetime(dt) => JsonValue::String(dt.to_string()),
        toml::Value::Array(items) => JsonValue::Array(
            items
                .into_iter()
                .map(toml_to_json)
                .collect::<DataResult<Vec<_>>>()?,
        ),
        toml::Value::Table(table) => {
            let mut object = serde_json::Map::with_capacity(table.len());
            for (key, item) in table {
                object.insert(key, toml_to_json(item)?);
            }
            JsonValue::Object(object)
        }
    };
    Ok(value)
}

/// Lossless YAML to JSON conversion; tags are dropped
fn yaml_to_json(yaml: serde_yaml::Value) -> DataResult<JsonValue> {
    let value = match yaml {
        serde_yaml::Value::Null => JsonValue::Null,
        serde_yaml::Value::Bool(b) => JsonValue::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                JsonValue::from(i)
            } else if let Some(u) = n.as_u64() {
                JsonValue::from(u)
            } else if let Some(f) = n.as_f64() {
                finite_number(f)?
            } else {
                return Err(DataError::failed(format!("unrepresentable YAML number {}", n)));
            }
        }
        serde_yaml::Value::String(s) => JsonValue::String(s),
        serde_yaml::Value::Sequence(items) => JsonValue::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<DataResult<Vec<_>>>()?,
        ),
        serde_yaml::Value::Mapping(mapping) => {
            let mut object = serde_json::Map::with_capacity(mapping.len());
            for (key, item) in mapping {
                object.insert(yaml_key(key)?, yaml_to_json(item)?);
            }
            JsonValue::Object(object)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value)?,
    };
    Ok(value)
}

// Only scalars with a string form can be object keys.
fn yaml_key(key: serde_yaml::Value) -> DataResult<String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Tagged(tagged) => yaml_key(tagged.value),
        other => Err(DataError::failed(format!("unrepresentable YAML key {:?}", other))),
    }
}

fn select<'a>(value: &'a JsonValue, pointer: Option<&str>) -> DataResult<&'a JsonValue> {
    match pointer {
        None => Ok(value),
        Some(p) => value
            .pointer(p)
            .ok_or_else(|| DataError::failed(format!("no data at pointer '{}'", p))),
    }
}

/// Data wrapper holding a `serde_json::Value`
///
/// # Thread Safety
///
/// The value sits behind an `RwLock`; concurrent gets proceed in parallel
/// and a set replaces the value atomically. A failed set leaves the stored
/// value untouched.
#[derive(Debug, Default)]
pub struct ValueWrapper {
    data: RwLock<JsonValue>,
    config: WrapperConfig,
}

impl ValueWrapper {
    pub fn new(value: JsonValue) -> Self {
        Self::with_config(value, WrapperConfig::default())
    }

    pub fn with_config(value: JsonValue, config: WrapperConfig) -> Self {
        Self {
            data: RwLock::new(value),
            config,
        }
    }

    /// Parse JSON text into a new wrapper
    pub fn from_json_str(content: &str) -> DataResult<Self> {
        Ok(Self::new(decode(TextFormat::Json, content)?))
    }

    /// Create a wrapper from a JSON, TOML or YAML file, by extension
    pub fn from_file(path: impl AsRef<Path>) -> DataResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let text = match extension.as_str() {
            "json" => TextFormat::Json,
            "toml" => TextFormat::Toml,
            "yaml" | "yml" => TextFormat::Yaml,
            _ => {
                return Err(DataError::failed(format!(
                    "Unknown file format: {}",
                    extension
                )))
            }
        };

        let content = std::fs::read_to_string(path)
            .map_err(|e| DataError::failed(format!("cannot read {}: {}", path.display(), e)))?;
        Ok(Self::new(decode(text, &content)?))
    }

    pub fn config(&self) -> WrapperConfig {
        self.config
    }

    /// Clone of the current value
    pub fn snapshot(&self) -> DataResult<JsonValue> {
        Ok(self.read()?.clone())
    }

    /// Write the wrapper, config and data, to `path` as JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> DataResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| DataError::failed(format!("cannot serialize wrapper: {}", e)))?;
        std::fs::write(path, json)
            .map_err(|e| DataError::failed(format!("cannot write {}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), "Saved wrapper");
        Ok(())
    }

    /// Restore a wrapper previously written by [`save_to`](Self::save_to)
    pub fn load_from(path: impl AsRef<Path>) -> DataResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| DataError::failed(format!("cannot read {}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| DataError::failed(format!("cannot restore wrapper: {}", e)))
    }

    fn read(&self) -> DataResult<RwLockReadGuard<'_, JsonValue>> {
        self.data.read().map_err(|e| DataError::failed(e.to_string()))
    }

    fn write(&self) -> DataResult<RwLockWriteGuard<'_, JsonValue>> {
        self.data.write().map_err(|e| DataError::failed(e.to_string()))
    }
}

impl DataWrapper for ValueWrapper {
    fn supports_get(&self, format: &DataFormat) -> bool {
        resolve_get(format).is_some()
    }

    fn get_data_with(&self, format: &DataFormat, info: &Info) -> DataResult<Payload> {
        let Some(shape) = resolve_get(format) else {
            tracing::debug!(format = %format, "Rejected get for unsupported format");
            return Err(DataError::unsupported(format));
        };

        let pointer = info.get_as::<String>(POINTER_KEY)?;
        let pretty = info
            .get_as::<bool>(PRETTY_KEY)?
            .copied()
            .unwrap_or(self.config.pretty);

        let data = self.read()?;
        let selected = select(&data, pointer.map(String::as_str))?;

        match shape {
            Shape::Value => Ok(Payload::new(selected.clone())),
            Shape::Text(text) => encode(text, selected, pretty).map(Payload::new),
        }
    }

    fn supports_set(&self, format: &DataFormat) -> bool {
        !self.config.read_only && resolve_set(format).is_some()
    }

    fn set_data_with(&self, format: &DataFormat, data: Payload, info: &Info) -> DataResult<()> {
        let shape = match resolve_set(format) {
            Some(shape) if !self.config.read_only => shape,
            _ => {
                tracing::debug!(
                    format = %format,
                    read_only = self.config.read_only,
                    "Rejected set for unsupported format"
                );
                return Err(DataError::unsupported(format));
            }
        };

        let pointer = info.get_as::<String>(POINTER_KEY)?;

        let value = match shape {
            Shape::Value => data.downcast::<JsonValue>().map_err(|p| {
                DataError::failed(format!("{} input must be a JSON value, got {}", format, p.type_name()))
            })?,
            Shape::Text(text) => {
                let content = data.downcast::<String>().map_err(|p| {
                    DataError::failed(format!("{} input must be a String, got {}", format, p.type_name()))
                })?;
                decode(text, &content).map_err(|e| {
                    tracing::debug!(format = %format, error = %e, "Input conversion failed");
                    e
                })?
            }
        };

        let mut stored = self.write()?;
        match pointer {
            None => *stored = value,
            Some(p) => {
                let slot = stored
                    .pointer_mut(p)
                    .ok_or_else(|| DataError::failed(format!("no data at pointer '{}'", p)))?;
                *slot = value;
            }
        }

        tracing::trace!(format = %format, pointer = ?pointer, "Stored data");
        Ok(())
    }
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    config: &'a WrapperConfig,
    data: &'a JsonValue,
}

#[derive(Deserialize)]
struct Snapshot {
    #[serde(default)]
    config: WrapperConfig,
    data: JsonValue,
}

impl Serialize for ValueWrapper {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::Error;

        let data = self
            .data
            .read()
            .map_err(|e| S::Error::custom(e.to_string()))?;
        SnapshotRef {
            config: &self.config,
            data: &*data,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ValueWrapper {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let snapshot = Snapshot::deserialize(deserializer)?;
        Ok(Self::with_config(snapshot.data, snapshot.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wrapper::traits::DataWrapperExt;
    use serde_json::json;

    fn sample() -> ValueWrapper {
        ValueWrapper::new(json!({
            "database": {
                "host": "localhost",
                "port": 5432
            },
            "app": {
                "name": "test-app"
            }
        }))
    }

    #[test]
    fn test_get_value() {
        let wrapper = sample();
        let value: JsonValue = wrapper.get_as(&DataFormat::JSON_VALUE).unwrap();
        assert_eq!(value["database"]["port"], 5432);

        // `object` resolves to its `object.json` child
        let value: JsonValue = wrapper.get_as(&DataFormat::OBJECT).unwrap();
        assert_eq!(value["app"]["name"], "test-app");
    }

    #[test]
    fn test_get_text_resolves_to_json() {
        let wrapper = ValueWrapper::new(json!({"a": 1}));
        let text: String = wrapper.get_as(&DataFormat::TEXT).unwrap();
        assert_eq!(text, r#"{"a":1}"#);
        let json: String = wrapper.get_as(&DataFormat::JSON).unwrap();
        assert_eq!(text, json);
    }

    #[test]
    fn test_get_toml() {
        let wrapper = sample();
        let text: String = wrapper.get_as(&DataFormat::TOML).unwrap();
        let parsed: toml::Value = toml::from_str(&text).unwrap();
        assert_eq!(parsed["database"]["host"].as_str(), Some("localhost"));
        assert_eq!(parsed["database"]["port"].as_integer(), Some(5432));
    }

    #[test]
    fn test_get_yaml() {
        let wrapper = sample();
        let text: String = wrapper.get_as(&DataFormat::YAML).unwrap();
        assert!(text.contains("name: test-app"));
    }

    #[test]
    fn test_toml_rejects_non_table_root() {
        let wrapper = ValueWrapper::new(json!(42));
        let err = wrapper.get_data(&DataFormat::TOML).unwrap_err();
        assert!(err.is_operation_failed());
    }

    #[test]
    fn test_pretty_from_config_and_info() {
        let config = WrapperConfig::default().with_pretty(true);
        let wrapper = ValueWrapper::with_config(json!({"a": 1}), config);

        let pretty: String = wrapper.get_as(&DataFormat::JSON).unwrap();
        assert_eq!(pretty, "{\n  \"a\": 1\n}");

        let info = Info::new().with(PRETTY_KEY, false);
        let compact: String = wrapper.get_as_with(&DataFormat::JSON, &info).unwrap();
        assert_eq!(compact, r#"{"a":1}"#);
    }

    #[test]
    fn test_pointer_get() {
        let wrapper = sample();
        let info = Info::new().with(POINTER_KEY, "/database/host");
        let host: JsonValue = wrapper.get_as_with(&DataFormat::JSON_VALUE, &info).unwrap();
        assert_eq!(host, json!("localhost"));

        let info = Info::new().with(POINTER_KEY, "/database/missing");
        let err = wrapper.get_data_with(&DataFormat::JSON, &info).unwrap_err();
        assert!(err.is_operation_failed());
        assert!(err.to_string().contains("/database/missing"));
    }

    #[test]
    fn test_wrong_info_type_fails() {
        let wrapper = sample();
        let info = Info::new().with(PRETTY_KEY, "yes");
        let err = wrapper.get_data_with(&DataFormat::JSON, &info).unwrap_err();
        assert!(err.is_operation_failed());
    }

    #[test]
    fn test_unknown_info_key_ignored() {
        let wrapper = ValueWrapper::new(json!({"a": 1}));
        let info = Info::new().with("compression", "gzip");
        let text: String = wrapper.get_as_with(&DataFormat::JSON, &info).unwrap();
        assert_eq!(text, r#"{"a":1}"#);
    }

    #[test]
    fn test_unsupported_get() {
        let wrapper = sample();
        let csv = DataFormat::new("text.csv").unwrap();
        assert!(!wrapper.supports_get(&csv));
        let err = wrapper.get_data(&csv).unwrap_err();
        assert!(matches!(err, DataError::UnsupportedFormat(f) if f == csv));
    }

    #[test]
    fn test_set_each_text_format() {
        let wrapper = ValueWrapper::default();

        wrapper
            .set_data(&DataFormat::JSON, Payload::from(r#"{"k": [1, 2]}"#))
            .unwrap();
        assert_eq!(wrapper.snapshot().unwrap(), json!({"k": [1, 2]}));

        wrapper
            .set_data(&DataFormat::TOML, Payload::from("[server]\nport = 8080\n"))
            .unwrap();
        assert_eq!(wrapper.snapshot().unwrap(), json!({"server": {"port": 8080}}));

        wrapper
            .set_data(&DataFormat::YAML, Payload::from("name: demo\n1: one\n"))
            .unwrap();
        assert_eq!(wrapper.snapshot().unwrap(), json!({"name": "demo", "1": "one"}));
    }

    #[test]
    fn test_set_value() {
        let wrapper = ValueWrapper::default();
        wrapper
            .set_data(&DataFormat::JSON_VALUE, Payload::from(json!([true, null])))
            .unwrap();
        assert_eq!(wrapper.snapshot().unwrap(), json!([true, null]));
    }

    #[test]
    fn test_set_get_only_formats_unsupported() {
        let wrapper = sample();
        assert!(wrapper.supports_get(&DataFormat::TEXT));
        assert!(!wrapper.supports_set(&DataFormat::TEXT));
        assert!(!wrapper.supports_set(&DataFormat::OBJECT));

        let err = wrapper
            .set_data(&DataFormat::TEXT, Payload::from("{}"))
            .unwrap_err();
        assert!(err.is_unsupported_format());
    }

    #[test]
    fn test_read_only_rejects_sets() {
        let wrapper = ValueWrapper::with_config(json!({"a": 1}), WrapperConfig::read_only());
        assert!(!wrapper.supports_set(&DataFormat::JSON));
        assert!(wrapper.supports_get(&DataFormat::JSON));

        let err = wrapper
            .set_data(&DataFormat::JSON, Payload::from("{}"))
            .unwrap_err();
        assert!(err.is_unsupported_format());
        assert_eq!(wrapper.snapshot().unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_set_wrong_payload_type() {
        let wrapper = sample();
        let err = wrapper
            .set_data(&DataFormat::JSON, Payload::new(12u8))
            .unwrap_err();
        assert!(err.is_operation_failed());
        assert!(err.to_string().contains("must be a String"));

        let err = wrapper
            .set_data(&DataFormat::JSON_VALUE, Payload::from("{}"))
            .unwrap_err();
        assert!(err.to_string().contains("must be a JSON value"));
    }

    #[test]
    fn test_failed_set_keeps_value() {
        let wrapper = sample();
        let before = wrapper.snapshot().unwrap();

        let err = wrapper
            .set_data(&DataFormat::YAML, Payload::from("key: [unclosed"))
            .unwrap_err();
        assert!(err.is_operation_failed());
        assert_eq!(wrapper.snapshot().unwrap(), before);
    }

    #[test]
    fn test_pointer_set() {
        let wrapper = sample();
        let info = Info::new().with(POINTER_KEY, "/database/port");
        wrapper
            .set_data_with(&DataFormat::JSON, Payload::from("6432"), &info)
            .unwrap();
        assert_eq!(wrapper.snapshot().unwrap()["database"]["port"], 6432);

        let info = Info::new().with(POINTER_KEY, "/cache/ttl");
        let err = wrapper
            .set_data_with(&DataFormat::JSON, Payload::from("60"), &info)
            .unwrap_err();
        assert!(err.is_operation_failed());
        assert!(wrapper.snapshot().unwrap().get("cache").is_none());
    }

    #[test]
    fn test_toml_non_finite_floats_fail() {
        let wrapper = ValueWrapper::new(json!({"keep": 1}));

        for input in ["ratio = nan\n", "limit = inf\n", "floor = -inf\n"] {
            let err = wrapper
                .set_data(&DataFormat::TOML, Payload::from(input))
                .unwrap_err();
            assert!(err.is_operation_failed(), "{input}");
            assert!(err.to_string().contains("non-finite number"));
        }
        assert_eq!(wrapper.snapshot().unwrap(), json!({"keep": 1}));
    }

    #[test]
    fn test_yaml_non_finite_floats_fail() {
        let wrapper = ValueWrapper::new(json!({"keep": 1}));

        for input in ["ratio: .nan\n", "limit: [1, .inf]\n", "floor: -.inf\n"] {
            let err = wrapper
                .set_data(&DataFormat::YAML, Payload::from(input))
                .unwrap_err();
            assert!(err.is_operation_failed(), "{input}");
        }
        assert_eq!(wrapper.snapshot().unwrap(), json!({"keep": 1}));
    }

    #[test]
    fn test_yaml_unrepresentable_keys_fail() {
        let wrapper = ValueWrapper::new(json!({"keep": 1}));

        for input in ["ok: 1\n~: lost\n", "[1, 2]: lost\n", "{a: 1}: lost\n"] {
            let err = wrapper
                .set_data(&DataFormat::YAML, Payload::from(input))
                .unwrap_err();
            assert!(err.is_operation_failed(), "{input}");
            assert!(err.to_string().contains("unrepresentable YAML key"));
        }
        assert_eq!(wrapper.snapshot().unwrap(), json!({"keep": 1}));
    }

    #[test]
    fn test_yaml_scalar_keys_and_large_integers() {
        let wrapper = ValueWrapper::default();
        wrapper
            .set_data(
                &DataFormat::YAML,
                Payload::from("true: yes\n2: two\nbig: 18446744073709551615\n"),
            )
            .unwrap();
        assert_eq!(
            wrapper.snapshot().unwrap(),
            json!({"true": "yes", "2": "two", "big": u64::MAX})
        );
    }

    #[test]
    fn test_toml_datetime_becomes_string() {
        let wrapper = ValueWrapper::default();
        wrapper
            .set_data(&DataFormat::TOML, Payload::from("released = 1979-05-27T07:32:00Z\n"))
            .unwrap();
        assert_eq!(
            wrapper.snapshot().unwrap(),
            json!({"released": "1979-05-27T07:32:00Z"})
        );
    }

    #[test]
    fn test_serialize_stores_data() {
        let wrapper = ValueWrapper::with_config(json!({"a": 1}), WrapperConfig::read_only());
        let json = serde_json::to_value(&wrapper).unwrap();
        assert_eq!(json["data"], json!({"a": 1}));
        assert_eq!(json["config"]["read_only"], true);

        let restored: ValueWrapper = serde_json::from_value(json).unwrap();
        assert_eq!(restored.snapshot().unwrap(), json!({"a": 1}));
        assert!(restored.config().read_only);
    }

    #[test]
    fn test_deserialize_without_config() {
        let restored: ValueWrapper = serde_json::from_str(r#"{"data": [1, 2]}"#).unwrap();
        assert_eq!(restored.config(), WrapperConfig::default());
        assert_eq!(restored.snapshot().unwrap(), json!([1, 2]));
    }

    #[test]
    fn test_from_json_str_invalid() {
        let err = ValueWrapper::from_json_str("{not json").unwrap_err();
        assert!(err.is_operation_failed());
    }
}
