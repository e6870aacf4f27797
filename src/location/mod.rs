//! Page location and its query parameters
//!
//! The location URL is the only place selection state lives. Reading it is
//! side-effect free; the only write is a full navigation to a new URL built
//! by [`agent_switch_target`].

mod navigation;

pub use navigation::{Navigator, agent_switch_target};

use thiserror::Error;
use url::Url;

/// Query parameter holding the selected agent id.
pub const ASSISTANT_PARAM: &str = "assistantId";

/// Query parameter holding the active conversation thread.
pub const THREAD_PARAM: &str = "threadId";

/// Errors produced while building locations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input could not be parsed as a URL
    #[error("invalid location {input:?}: {source}")]
    InvalidUrl {
        /// The rejected input
        input: String,
        /// Parser failure
        #[source]
        source: url::ParseError,
    },
    /// The id does not name a registered agent
    #[error("unknown agent {0:?}")]
    UnknownAgent(String),
}

/// Read access to the query parameters of the current page.
pub trait QueryStore {
    /// The full current location.
    fn href(&self) -> &Url;

    /// First value stored under `key`, if any.
    fn query(&self, key: &str) -> Option<String> {
        self.href()
            .query_pairs()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.into_owned())
    }
}

/// A parsed page location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    url: Url,
}

impl Location {
    /// Wrap an already parsed URL.
    #[must_use]
    pub const fn new(url: Url) -> Self {
        Self { url }
    }

    /// Parse an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `input` is not a valid absolute URL
    pub fn parse(input: &str) -> Result<Self, Error> {
        Url::parse(input)
            .map(Self::new)
            .map_err(|source| Error::InvalidUrl {
                input: input.to_string(),
                source,
            })
    }

    /// Parse `input` relative to `base`.
    ///
    /// Absolute inputs ignore the base, so `"?assistantId=visual-agent"` and
    /// `"http://host/?assistantId=visual-agent"` are both accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `input` cannot be resolved
    pub fn parse_relative(input: &str, base: &Url) -> Result<Self, Error> {
        Url::options()
            .base_url(Some(base))
            .parse(input)
            .map(Self::new)
            .map_err(|source| Error::InvalidUrl {
                input: input.to_string(),
                source,
            })
    }

    /// Consume the location, returning the URL.
    #[must_use]
    pub fn into_url(self) -> Url {
        self.url
    }

    /// Current conversation thread, if the location carries one.
    #[must_use]
    pub fn thread_id(&self) -> Option<String> {
        self.query(THREAD_PARAM)
    }

    /// Query pairs other than the selection and thread parameters.
    #[must_use]
    pub fn extra_params(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .filter(|(name, _)| name != ASSISTANT_PARAM && name != THREAD_PARAM)
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect()
    }
}

impl QueryStore for Location {
    fn href(&self) -> &Url {
        &self.url
    }
}
