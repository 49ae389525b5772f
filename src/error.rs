//! Error types for Cascade.

use thiserror::Error;

/// Result type alias using Cascade's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes visible outside a selection run.
///
/// Per-candidate problems (unknown names, failed initializations) are
/// absorbed into diagnostics and never appear here; the only externally
/// visible outcomes are a misconfigured preference list and total
/// exhaustion.
#[derive(Error, Debug)]
pub enum Error {
    /// The preference string yielded no candidates after splitting and
    /// trimming. Raised before any constructor runs; indicates a setup bug
    /// upstream rather than an environment condition.
    #[error("no {capability} drivers configured: preference list is empty")]
    EmptyDriverList {
        /// Capability whose preference list was empty.
        capability: &'static str,
    },

    /// Every listed candidate was unknown or failed to initialize.
    #[error("couldn't create a {capability}{}", fmt_tried(.tried))]
    NoDriverAvailable {
        /// Capability that could not be provided.
        capability: &'static str,
        /// Names of every candidate that was actually constructed and
        /// rejected, in attempt order.
        tried: Vec<String>,
    },
}

fn fmt_tried(tried: &[String]) -> String {
    if tried.is_empty() {
        String::new()
    } else {
        format!(" (tried {})", tried.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_display() {
        let err = Error::EmptyDriverList {
            capability: "sound driver",
        };
        assert_eq!(
            err.to_string(),
            "no sound driver drivers configured: preference list is empty"
        );
    }

    #[test]
    fn test_exhaustion_display_names_tried_drivers() {
        let err = Error::NoDriverAvailable {
            capability: "movie texture",
            tried: vec!["DShow".to_string(), "FFMpeg".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "couldn't create a movie texture (tried DShow, FFMpeg)"
        );
    }

    #[test]
    fn test_exhaustion_display_without_attempts() {
        let err = Error::NoDriverAvailable {
            capability: "movie texture",
            tried: vec![],
        };
        assert_eq!(err.to_string(), "couldn't create a movie texture");
    }
}
