use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::{Result, WcError};

/// Scheme, host and port of the environment the client runs against.
///
/// Only the origin of the parsed URL is kept, so
/// `http://localhost:8080/some/page?x=1` and `http://localhost:8080` are the
/// same origin. Default ports are dropped the way `location.origin` drops them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    serialized: String,
}

impl Origin {
    pub fn parse(input: &str) -> Result<Self> {
        let url = Url::parse(input.trim())?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(WcError::InvalidOrigin(format!(
                    "unsupported scheme '{}' in {}",
                    other, input
                )))
            }
        }

        let origin = url.origin();
        if !origin.is_tuple() {
            return Err(WcError::InvalidOrigin(format!("{} has no host", input)));
        }

        Ok(Self {
            serialized: origin.ascii_serialization(),
        })
    }

    // Callers must pass an already-serialized tuple origin.
    pub(crate) fn from_serialized(serialized: &str) -> Self {
        Self {
            serialized: serialized.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.serialized
    }

    /// Appends an absolute path to the origin. Nothing is escaped.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.serialized, path)
        } else {
            format!("{}/{}", self.serialized, path)
        }
    }

    pub fn group_stage_url(&self, group: &str) -> String {
        self.endpoint(&format!("/api/match/group/{}", group))
    }

    pub fn country_group_url(&self, group: &str) -> String {
        self.endpoint(&format!("/api/country/group/{}", group))
    }

    pub fn version_url(&self) -> String {
        self.endpoint("/api/version")
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialized)
    }
}

impl FromStr for Origin {
    type Err = WcError;

    fn from_str(s: &str) -> Result<Self> {
        Origin::parse(s)
    }
}
