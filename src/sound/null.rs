//! Null sound output - plays nothing, always initializes.

use crate::driver::{Driver, InitError};
use crate::sound::SoundOutput;

/// A sound output that discards all audio.
///
/// Initialization always succeeds and acquires no device. Useful as the
/// last-resort fallback and for running without audio hardware.
///
/// # Example
///
/// ```rust
/// use cascade::driver::Driver;
/// use cascade::sound::NullSoundOutput;
///
/// let mut output = NullSoundOutput::new();
/// assert!(output.init().is_ok());
/// output.write_samples(512);
/// assert_eq!(output.samples_discarded(), 512);
/// ```
pub struct NullSoundOutput {
    samples: u64,
}

impl NullSoundOutput {
    /// Create a new null sound output.
    pub fn new() -> Self {
        Self { samples: 0 }
    }

    /// Pretend to play `count` samples.
    pub fn write_samples(&mut self, count: u64) {
        self.samples += count;
    }

    /// Number of samples "played" so far.
    pub fn samples_discarded(&self) -> u64 {
        self.samples
    }
}

impl Default for NullSoundOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for NullSoundOutput {
    fn init(&mut self) -> Result<(), InitError> {
        Ok(())
    }

    fn name(&self) -> &str {
        "Null"
    }
}

impl SoundOutput for NullSoundOutput {}
