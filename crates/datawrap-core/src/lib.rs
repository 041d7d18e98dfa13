//! Format-negotiated data access.
//!
//! A [`DataWrapper`] exposes its data in whichever [`DataFormat`]s it
//! advertises, optionally steered by auxiliary [`Info`] pairs, and fails
//! with [`DataError::UnsupportedFormat`] or [`DataError::OperationFailed`].
//!
//! # Modules
//!
//! - [`format`]: hierarchical format identifiers
//! - [`payload`]: the opaque value exchanged by gets and sets
//! - [`info`]: auxiliary key/value pairs
//! - [`wrapper`]: the contract and the [`ValueWrapper`] implementation
//! - [`config`]: serde-loadable wrapper settings

pub mod config;
pub mod error;
pub mod format;
pub mod info;
pub mod payload;
pub mod wrapper;

pub use config::WrapperConfig;
pub use error::{DataError, DataResult, FormatParseError};
pub use format::DataFormat;
pub use info::{Info, InfoPair};
pub use payload::Payload;
pub use wrapper::{DataWrapper, DataWrapperExt, ValueWrapper};
