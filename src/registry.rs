//! Driver registries: fixed name → constructor tables, one per capability.

use std::fmt;

/// Type alias for driver constructor functions.
///
/// `A` is the capability-specific construction argument (the resource a
/// movie texture decodes, `()` for sound output); `D` is the capability's
/// driver trait object type. Construction is infallible; failure belongs in
/// [`Driver::init`](crate::driver::Driver::init).
pub type Constructor<A, D> = Box<dyn Fn(&A) -> Box<D> + Send + Sync>;

/// Registry of driver constructors for one capability category.
///
/// The registry is built once at startup and only contains backends enabled
/// for the current build. Names are matched case-insensitively (ASCII).
/// Registration order is preserved for introspection, but *selection* order
/// always comes from the caller's preference list, never from here.
///
/// # Example
///
/// ```rust
/// use cascade::registry::Registry;
/// use cascade::sound::{NullSoundOutput, SoundOutput};
///
/// let mut registry: Registry<(), dyn SoundOutput> = Registry::new("sound driver");
/// registry.register("Null", |_| Box::new(NullSoundOutput::new()) as Box<dyn SoundOutput>);
///
/// assert!(registry.contains("null"));
/// assert_eq!(registry.driver_names(), vec!["Null"]);
/// ```
pub struct Registry<A, D: ?Sized> {
    /// Human-readable capability label, used in errors and log lines.
    capability: &'static str,
    /// Ordered (name, constructor) pairs.
    constructors: Vec<(String, Constructor<A, D>)>,
}

impl<A, D: ?Sized> Registry<A, D> {
    /// Create an empty registry for the given capability.
    pub fn new(capability: &'static str) -> Self {
        Self {
            capability,
            constructors: Vec::new(),
        }
    }

    /// The capability this registry provides (e.g. `"movie texture"`).
    pub fn capability(&self) -> &'static str {
        self.capability
    }

    /// Register a driver constructor.
    ///
    /// Registering a name that already exists (case-insensitively) replaces
    /// the earlier entry in place, so applications can shadow a built-in
    /// backend with their own.
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F)
    where
        F: Fn(&A) -> Box<D> + Send + Sync + 'static,
    {
        let name = name.into();
        let constructor: Constructor<A, D> = Box::new(constructor);
        match self
            .constructors
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(&name))
        {
            Some(entry) => *entry = (name, constructor),
            None => self.constructors.push((name, constructor)),
        }
    }

    /// Look up a constructor by name, case-insensitively.
    pub fn lookup(&self, name: &str) -> Option<&Constructor<A, D>> {
        self.constructors
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, ctor)| ctor)
    }

    /// Check if a driver name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// List registered driver names in registration order.
    pub fn driver_names(&self) -> Vec<&str> {
        self.constructors.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Number of registered drivers.
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Check if no drivers are registered.
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl<A, D: ?Sized> fmt::Debug for Registry<A, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("capability", &self.capability)
            .field("drivers", &self.driver_names())
            .finish()
    }
}
