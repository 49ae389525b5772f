//! Driver preference strings with per-platform defaults.

/// Per-capability driver preference lists.
///
/// Each field is a comma-separated, order-significant list of driver names
/// handed to [`Registry::select`](crate::registry::Registry::select). The
/// defaults name the usual backends for the current platform and always end
/// in `Null`, so selection still succeeds on a machine with no working
/// hardware backend. Names that don't exist in a given build's registry are
/// harmless; the selector warns and skips them.
///
/// # Example
///
/// ```rust
/// use cascade::prefs::DriverPreferences;
///
/// let prefs = DriverPreferences::default().with_sound("Null");
/// assert_eq!(prefs.sound, "Null");
/// assert!(prefs.movie.ends_with("Null"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverPreferences {
    /// Movie texture driver list, most preferred first.
    pub movie: String,
    /// Sound output driver list, most preferred first.
    pub sound: String,
}

impl Default for DriverPreferences {
    fn default() -> Self {
        Self {
            movie: default_movie_drivers().to_string(),
            sound: default_sound_drivers().to_string(),
        }
    }
}

impl DriverPreferences {
    /// Replace the movie texture driver list.
    pub fn with_movie(mut self, drivers: impl Into<String>) -> Self {
        self.movie = drivers.into();
        self
    }

    /// Replace the sound output driver list.
    pub fn with_sound(mut self, drivers: impl Into<String>) -> Self {
        self.sound = drivers.into();
        self
    }
}

fn default_movie_drivers() -> &'static str {
    if cfg!(target_os = "windows") {
        "DShow,FFMpeg,Null"
    } else {
        "FFMpeg,Null"
    }
}

fn default_sound_drivers() -> &'static str {
    if cfg!(target_os = "linux") {
        "ALSA,ALSA-sw,OSS,Null"
    } else if cfg!(target_os = "windows") {
        "DirectSound,DirectSound-sw,WaveOut,Null"
    } else if cfg!(target_os = "macos") {
        "CoreAudio,Null"
    } else {
        "Null"
    }
}
