//! Data wrappers
//!
//! This module defines the [`DataWrapper`] contract for getting and setting
//! data in multiple formats, plus the [`ValueWrapper`] reference
//! implementation backed by a `serde_json::Value`.
//!
//! # Architecture
//!
//! Every operation takes a [`DataFormat`](crate::DataFormat) and optional
//! [`Info`](crate::Info). Callers probe with `supports_get`/`supports_set`
//! before calling the fallible operation when they want to avoid the
//! `UnsupportedFormat` failure; wrappers never require that they do.
//!
//! # Example
//!
//! ```rust,ignore
//! use datawrap_core::{DataFormat, DataWrapper, DataWrapperExt, ValueWrapper};
//!
//! let wrapper = ValueWrapper::from_file("settings.toml")?;
//! if wrapper.supports_get(&DataFormat::YAML) {
//!     let yaml: String = wrapper.get_as(&DataFormat::YAML)?;
//! }
//! ```

pub mod traits;
pub mod value;

pub use traits::{DataWrapper, DataWrapperExt};
pub use value::{ValueWrapper, POINTER_KEY, PRETTY_KEY};
