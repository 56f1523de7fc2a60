#![warn(missing_docs)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::missing_errors_doc
)]

//! `gencam` is a library for `GenICam` compatible cameras.
//!
//! It provides a [`Camera`] facade that ties together a transport-specific
//! [`DeviceControl`] handle, a transport-specific [`PayloadStream`] handle, and a `GenApi`
//! context built from the device's own XML description. See [`u3v`] and [`gige`] for the
//! concrete transports, and [`genapi`] for the feature-tree runtime.

#[macro_use]
mod utils;

pub mod camera;
pub mod genapi;
pub mod gige;
pub mod payload;
pub mod u3v;

pub use camera::{Camera, CameraInfo, DeviceControl, PayloadStream};

use std::borrow::Cow;

/// The unified error type returned by [`Camera`]'s high level API.
///
/// This wraps the lower level [`ControlError`]/[`StreamError`]/[`gencam_genapi::GenApiError`]
/// raised by the transport and `GenApi` layers, and adds the errors that only make sense at the
/// facade level (a missing or malformed `GenApi` context).
#[derive(Debug, thiserror::Error)]
pub enum GencamError {
    /// An error occurred while accessing the device's memory or control channel.
    #[error(transparent)]
    Control(#[from] ControlError),

    /// An error occurred while streaming payloads from the device.
    #[error(transparent)]
    Stream(#[from] StreamError),

    /// An error occurred inside the `GenApi` feature tree.
    #[error(transparent)]
    GenApi(#[from] gencam_genapi::GenApiError),

    /// The `GenApi` xml retrieved from the device couldn't be parsed into a context.
    #[error("invalid GenApi xml: {0}")]
    InvalidGenApiXml(Cow<'static, str>),

    /// Tried to use the camera before a `GenApi` context has been loaded or set.
    #[error("GenApi context is not loaded, call `load_context` or `set_context` first")]
    GenApiContextMissing,

    /// A caller-supplied argument couldn't be parsed, e.g. a malformed `R[addr]=value` token in
    /// a feature-assignment string.
    #[error("invalid parameter: {0}")]
    InvalidParameter(Cow<'static, str>),
}

/// A specialized `Result` type for [`Camera`]'s high level API.
pub type GencamResult<T> = std::result::Result<T, GencamError>;

/// The error type raised by a [`DeviceControl`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    /// The device is busy, may be opened by another application.
    #[error("device is busy")]
    Busy,

    /// The device is disconnected from the host.
    #[error("device is disconnected")]
    Disconnected,

    /// IO error.
    #[error("input/output error: {0}")]
    Io(anyhow::Error),

    /// The device is not opened.
    #[error("device is not opened")]
    NotOpened,

    /// The device doesn't follow the specification it claims to implement.
    #[error("device is broken: {0}")]
    InvalidDevice(Cow<'static, str>),

    /// Tried to write invalid data to the device, e.g. data that would overrun a register.
    #[error("invalid data: {0}")]
    InvalidData(Cow<'static, str>),

    /// The requested operation isn't supported by this device or this transport.
    #[error("not supported: {0}")]
    NotSupported(Cow<'static, str>),

    /// Operation timed out.
    #[error("operation timed out")]
    Timeout,
}

/// A specialized `Result` type for [`DeviceControl`] operations.
pub type ControlResult<T> = std::result::Result<T, ControlError>;

/// The error type raised by a [`PayloadStream`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// Tried to start streaming while the streaming loop is already running.
    #[error("streaming loop is already running")]
    InStreaming,

    /// The device disconnected while streaming.
    #[error("device is disconnected")]
    Disconnected,

    /// IO error while streaming.
    #[error("input/output error: {0}")]
    Io(anyhow::Error),

    /// A received payload couldn't be parsed.
    #[error("invalid payload: {0}")]
    InvalidPayload(Cow<'static, str>),

    /// The caller supplied a buffer too small to hold the payload.
    #[error("buffer is too small to receive the payload")]
    BufferTooSmall,

    /// Internal synchronization primitive (queue mutex or condvar) was poisoned.
    #[error("streaming loop panicked: {0}")]
    Poisoned(Cow<'static, str>),

    /// Failed to send or receive a payload over the internal channel.
    #[error("failed to transfer payload: {0}")]
    ReceiveError(Cow<'static, str>),
}

/// A specialized `Result` type for [`PayloadStream`] operations.
pub type StreamResult<T> = std::result::Result<T, StreamError>;
