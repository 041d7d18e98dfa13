//! Core traits for data wrappers
//!
//! A [`DataWrapper`] hands out its data in whichever formats it advertises
//! and accepts new data in the formats it advertises for input. Callers
//! can probe support up front to avoid the `UnsupportedFormat` failure.

use crate::error::{DataError, DataResult};
use crate::format::DataFormat;
use crate::info::Info;
use crate::payload::Payload;
use std::any::Any;
use std::fmt;

/// Contract for getting and setting data in multiple formats
///
/// Implementations should be thread-safe; mutation goes through `&self`
/// so a wrapper can be shared behind an `Arc`.
///
/// # Error Handling
///
/// `get_data_with` and `set_data_with` must return
/// `DataError::UnsupportedFormat` for any format their probe rejects, and
/// `DataError::OperationFailed` for every other failure. The probes
/// themselves never fail and must give the same answer for the same state.
pub trait DataWrapper: Send + Sync + fmt::Debug {
    /// Check whether a get in this format can avoid `UnsupportedFormat`
    fn supports_get(&self, format: &DataFormat) -> bool;

    /// Get the data with no auxiliary info
    fn get_data(&self, format: &DataFormat) -> DataResult<Payload> {
        self.get_data_with(format, &Info::none())
    }

    /// Get the data formatted as requested
    ///
    /// # Arguments
    ///
    /// * `format` - The requested format
    /// * `info` - Format- or wrapper-defined options, empty for none
    ///
    /// # Returns
    ///
    /// The data in `format` or in one of its child formats.
    fn get_data_with(&self, format: &DataFormat, info: &Info) -> DataResult<Payload>;

    /// Check whether a set in this format can avoid `UnsupportedFormat`
    fn supports_set(&self, format: &DataFormat) -> bool;

    /// Set the data with no auxiliary info
    fn set_data(&self, format: &DataFormat, data: Payload) -> DataResult<()> {
        self.set_data_with(format, data, &Info::none())
    }

    /// Replace the data with `data`, which is in `format`
    fn set_data_with(&self, format: &DataFormat, data: Payload, info: &Info) -> DataResult<()>;
}

/// Typed helpers available on every [`DataWrapper`]
pub trait DataWrapperExt: DataWrapper {
    /// Get the data and downcast it to `T`
    fn get_as<T: Any>(&self, format: &DataFormat) -> DataResult<T> {
        self.get_as_with(format, &Info::none())
    }

    fn get_as_with<T: Any>(&self, format: &DataFormat, info: &Info) -> DataResult<T> {
        let payload = self.get_data_with(format, info)?;
        payload.downcast::<T>().map_err(|p| {
            DataError::failed(format!(
                "{} data has type {}, expected {}",
                format,
                p.type_name(),
                std::any::type_name::<T>()
            ))
        })
    }

    /// Probe first, returning `Ok(None)` instead of `UnsupportedFormat`
    fn try_get_data(&self, format: &DataFormat, info: &Info) -> DataResult<Option<Payload>> {
        if !self.supports_get(format) {
            return Ok(None);
        }
        self.get_data_with(format, info).map(Some)
    }
}

impl<W: DataWrapper + ?Sized> DataWrapperExt for W {}
