//! Null movie texture - decodes nothing, always initializes.
//!
//! The terminal fallback for movie texture selection. Putting `Null` last
//! in the preference list guarantees the scan succeeds even when no real
//! decoder can run, at the cost of a black surface.

use crate::driver::{Driver, InitError};
use crate::movie::{MovieTexture, TextureId};

/// A movie texture that renders nothing.
///
/// Initialization always succeeds and acquires no resources. Useful as the
/// last-resort fallback and for exercising pipelines without a decoder.
///
/// # Example
///
/// ```rust
/// use cascade::driver::Driver;
/// use cascade::movie::{NullMovieTexture, TextureId};
///
/// let mut texture = NullMovieTexture::new(TextureId::new("intro.avi"));
/// assert!(texture.init().is_ok());
/// assert_eq!(texture.frames_rendered(), 0);
/// ```
pub struct NullMovieTexture {
    source: TextureId,
    frames: u64,
}

impl NullMovieTexture {
    /// Create a null texture for the given resource.
    pub fn new(source: TextureId) -> Self {
        Self { source, frames: 0 }
    }

    /// Pretend to render one frame.
    pub fn render_frame(&mut self) {
        self.frames += 1;
    }

    /// Number of frames "rendered" so far.
    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }
}

impl Driver for NullMovieTexture {
    fn init(&mut self) -> Result<(), InitError> {
        Ok(())
    }

    fn name(&self) -> &str {
        "Null"
    }
}

impl MovieTexture for NullMovieTexture {
    fn source(&self) -> &TextureId {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_texture_always_initializes() {
        let mut texture = NullMovieTexture::new(TextureId::new("a.avi"));
        assert!(texture.init().is_ok());
        assert_eq!(texture.name(), "Null");
    }

    #[test]
    fn test_null_texture_counts_frames() {
        let mut texture = NullMovieTexture::new(TextureId::new("a.avi"));
        texture.render_frame();
        texture.render_frame();
        assert_eq!(texture.frames_rendered(), 2);
    }
}
