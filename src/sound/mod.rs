//! Sound output capability: contract, registry, and selection entry point.

mod null;

pub use null::NullSoundOutput;

use crate::driver::Driver;
use crate::error::Result;
use crate::registry::Registry;

/// A driver that plays mixed audio on some output device.
///
/// Mixing and playback are backend-specific and outside this crate; the
/// contract here is only the [`Driver`] lifecycle. Sound drivers take no
/// construction argument (they find their device during `init`).
pub trait SoundOutput: Driver {}

/// Registry of sound output drivers.
pub type SoundRegistry = Registry<(), dyn SoundOutput>;

/// Build the sound output registry with the backends enabled for this
/// build.
///
/// Only the `Null` backend is built in; real outputs (ALSA, DirectSound,
/// CoreAudio, …) are registered on top by the application:
///
/// ```rust
/// use cascade::sound::{self, NullSoundOutput, SoundOutput};
///
/// let mut registry = sound::registry();
/// registry.register("ALSA", |_| {
///     // A real application constructs its ALSA output here.
///     Box::new(NullSoundOutput::new()) as Box<dyn SoundOutput>
/// });
/// ```
pub fn registry() -> SoundRegistry {
    let mut registry = SoundRegistry::new("sound driver");
    registry.register("Null", |_: &()| {
        Box::new(NullSoundOutput::new()) as Box<dyn SoundOutput>
    });
    registry
}

/// Select a sound output driver from `prefs`.
///
/// See [`Registry::select`](crate::registry::Registry::select) for the
/// failure policy.
pub fn create(registry: &SoundRegistry, prefs: &str) -> Result<Box<dyn SoundOutput>> {
    registry.select(prefs, &())
}
