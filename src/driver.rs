//! The driver contract shared by every capability category.

use thiserror::Error;

/// Reason a driver failed to initialize.
///
/// Carries the free-form description reported by the backend (a missing
/// device, an unsupported format, a busy exclusive resource). It is only
/// ever logged by the selector; it never reaches the caller directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct InitError(String);

impl InitError {
    /// Create an initialization failure with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    /// The reason text.
    pub fn reason(&self) -> &str {
        &self.0
    }
}

impl From<&str> for InitError {
    fn from(reason: &str) -> Self {
        Self::new(reason)
    }
}

impl From<String> for InitError {
    fn from(reason: String) -> Self {
        Self(reason)
    }
}

/// A backend implementation of some capability.
///
/// Drivers follow a construct → init → use → drop lifecycle. Construction
/// must be cheap and infallible; anything that can fail (opening a device,
/// spawning a decode thread, taking an exclusive hardware lock) belongs in
/// [`init`]. A driver whose `init` fails is dropped immediately by the
/// selector, so `Drop` must release everything `init` acquired, whether or
/// not `init` succeeded.
///
/// # Example
///
/// ```rust
/// use cascade::driver::{Driver, InitError};
///
/// struct OssOutput { fd: Option<std::fs::File> }
///
/// impl Driver for OssOutput {
///     fn init(&mut self) -> Result<(), InitError> {
///         match std::fs::File::open("/dev/dsp") {
///             Ok(fd) => {
///                 self.fd = Some(fd);
///                 Ok(())
///             }
///             Err(e) => Err(InitError::new(format!("couldn't open /dev/dsp: {e}"))),
///         }
///     }
///
///     fn name(&self) -> &str {
///         "OSS"
///     }
/// }
/// ```
///
/// [`init`]: Driver::init
pub trait Driver: Send {
    /// Initialize the driver, acquiring whatever resources it needs.
    ///
    /// Called exactly once, immediately after construction. Returns the
    /// failure reason if the backend cannot run here and now.
    fn init(&mut self) -> Result<(), InitError>;

    /// The driver's canonical registry name (for diagnostics).
    fn name(&self) -> &str;
}
