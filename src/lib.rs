//! # Cascade
//!
//! Preference-ordered driver selection for pluggable media backends.
//!
//! Cascade picks a working backend out of an ordered, user-configurable
//! list of candidates. Each capability (movie textures, sound output) has a
//! fixed [`Registry`] of named constructors; selection walks the preference
//! list, constructs each candidate in turn, and returns the first one whose
//! initialization succeeds. Candidates that are unknown or fail to
//! initialize are logged and skipped; their resources are released before
//! the next attempt.
//!
//! ## Quick Start
//!
//! ```rust
//! use cascade::driver::Driver;
//! use cascade::movie::{self, TextureId};
//! use cascade::sound;
//!
//! // Registries are built once at startup from the backends enabled for
//! // this build. Applications register their own backends on top.
//! let movies = movie::registry();
//! let sounds = sound::registry();
//!
//! let id = TextureId::new("intro.avi");
//! let texture = movie::create(&movies, "FFMpeg,Null", &id).unwrap();
//! let output = sound::create(&sounds, "ALSA,Null").unwrap();
//!
//! assert_eq!(texture.name(), "Null"); // only Null is built in
//! assert_eq!(output.name(), "Null");
//! ```
//!
//! ## Failure policy
//!
//! - An **empty preference list** is a configuration error, reported before
//!   any constructor runs ([`Error::EmptyDriverList`]).
//! - An **unknown name** is tolerated drift (warned, skipped) so one
//!   preference string can serve several platforms/builds.
//! - A **failed initialization** is logged with its reason and the instance
//!   is dropped; the scan moves on.
//! - Only **exhausting the whole list** is surfaced to the caller
//!   ([`Error::NoDriverAvailable`]).
//!
//! [`Registry`]: registry::Registry

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod driver;
pub mod error;
pub mod movie;
pub mod prefs;
pub mod registry;
pub mod selector;
pub mod sound;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::driver::{Driver, InitError};
    pub use crate::error::{Error, Result};
    pub use crate::movie::{MovieTexture, TextureId};
    pub use crate::prefs::DriverPreferences;
    pub use crate::registry::Registry;
    pub use crate::sound::SoundOutput;
}

pub use error::{Error, Result};
