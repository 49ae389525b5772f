//! Movie texture capability: contract, registry, and selection entry point.

mod null;
pub mod probe;

pub use null::NullMovieTexture;

use std::path::{Path, PathBuf};

use crate::driver::Driver;
use crate::error::Result;
use crate::registry::Registry;

/// Identifies the movie resource a texture decodes (a file path today).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextureId(PathBuf);

impl TextureId {
    /// Create a texture id for the given movie file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// The movie file path.
    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// A driver that renders a movie file to a texture.
///
/// The decoding/rendering surface itself is backend-specific and outside
/// this crate; the contract here is only what selection needs: the
/// [`Driver`] lifecycle plus the resource the texture was built for.
pub trait MovieTexture: Driver {
    /// The movie resource this texture decodes.
    fn source(&self) -> &TextureId;
}

/// Registry of movie texture drivers.
pub type MovieRegistry = Registry<TextureId, dyn MovieTexture>;

/// Build the movie texture registry with the backends enabled for this
/// build.
///
/// Only the `Null` backend is built in; real decoders (FFMpeg, DShow, …)
/// are registered on top by the application:
///
/// ```rust
/// use cascade::movie::{self, MovieTexture, NullMovieTexture};
///
/// let mut registry = movie::registry();
/// registry.register("FFMpeg", |id| {
///     // A real application constructs its FFMpeg-backed texture here.
///     Box::new(NullMovieTexture::new(id.clone())) as Box<dyn MovieTexture>
/// });
/// ```
pub fn registry() -> MovieRegistry {
    let mut registry = MovieRegistry::new("movie texture");
    registry.register("Null", |id: &TextureId| {
        Box::new(NullMovieTexture::new(id.clone())) as Box<dyn MovieTexture>
    });
    registry
}

/// Select a movie texture driver for `id` from `prefs`.
///
/// Logs the file's container FourCC info first (when `id` names a readable
/// AVI file), then runs the selection scan. See
/// [`Registry::select`](crate::registry::Registry::select) for the failure
/// policy.
pub fn create(registry: &MovieRegistry, prefs: &str, id: &TextureId) -> Result<Box<dyn MovieTexture>> {
    probe::log_avi_info(id.path());
    registry.select(prefs, id)
}
