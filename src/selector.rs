//! The selection scan: try drivers in preference order until one works.

use smallvec::SmallVec;

use crate::driver::Driver;
use crate::error::{Error, Result};
use crate::registry::Registry;

/// Parse a comma-separated driver preference string.
///
/// Entries are trimmed of ASCII whitespace and empty entries are dropped;
/// order is preserved (it is the caller's preference order).
///
/// # Example
///
/// ```rust
/// use cascade::selector::parse_driver_list;
///
/// let list = parse_driver_list(" DShow, FFMpeg ,,Null ");
/// assert_eq!(list.as_slice(), ["DShow", "FFMpeg", "Null"]);
/// ```
pub fn parse_driver_list(prefs: &str) -> SmallVec<[&str; 4]> {
    prefs
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

impl<A, D> Registry<A, D>
where
    D: Driver + ?Sized,
{
    /// Select the first driver in `prefs` that initializes successfully.
    ///
    /// Walks the preference list in order. Unknown names are warned and
    /// skipped; a candidate whose [`init`](Driver::init) fails is logged
    /// with its reason and dropped before the next candidate is attempted,
    /// so at most one driver instance is alive at any point during the
    /// scan. The first success wins outright; later candidates are never
    /// constructed.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyDriverList`] if `prefs` yields no candidates after
    ///   splitting and trimming. No constructor is invoked.
    /// - [`Error::NoDriverAvailable`] if every candidate was unknown or
    ///   failed to initialize; `tried` names each rejected candidate in
    ///   attempt order.
    pub fn select(&self, prefs: &str, arg: &A) -> Result<Box<D>> {
        let capability = self.capability();
        let candidates = parse_driver_list(prefs);
        if candidates.is_empty() {
            return Err(Error::EmptyDriverList { capability });
        }

        let mut tried = Vec::new();
        for name in candidates {
            tracing::trace!(capability, driver = name, "initializing driver");

            let Some(ctor) = self.lookup(name) else {
                tracing::warn!(capability, driver = name, "unknown driver name");
                continue;
            };

            let mut driver = ctor(arg);
            match driver.init() {
                Ok(()) => {
                    tracing::trace!(
                        capability,
                        driver = name,
                        "created {capability} with driver {name}"
                    );
                    return Ok(driver);
                }
                Err(reason) => {
                    tracing::info!(
                        capability,
                        driver = name,
                        %reason,
                        "couldn't load driver"
                    );
                    tried.push(name.to_string());
                    // Dropping the instance releases whatever init acquired.
                    drop(driver);
                }
            }
        }

        Err(Error::NoDriverAvailable { capability, tried })
    }
}
