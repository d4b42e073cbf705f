use crate::config::ClientConfig;
use crate::cookie::CookieJar;
use crate::origin::Origin;

/// Ambient state owned by the host: where we are, and the current cookies.
pub trait Document {
    fn origin(&self) -> &Origin;

    fn cookie(&self) -> &str;

    fn cookies(&self) -> CookieJar<'_> {
        CookieJar::new(self.cookie())
    }
}

/// A [`Document`] held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticDocument {
    origin: Origin,
    cookie: String,
}

impl StaticDocument {
    pub fn new(origin: Origin, cookie: impl Into<String>) -> Self {
        Self {
            origin,
            cookie: cookie.into(),
        }
    }
}

impl From<&ClientConfig> for StaticDocument {
    fn from(config: &ClientConfig) -> Self {
        Self::new(config.origin.clone(), config.cookie.clone())
    }
}

impl Document for StaticDocument {
    fn origin(&self) -> &Origin {
        &self.origin
    }

    fn cookie(&self) -> &str {
        &self.cookie
    }
}

/// Reads the cookie named `name` from the document's cookie string.
pub fn get_cookie_from<D: Document + ?Sized>(doc: &D, name: &str) -> Option<String> {
    crate::cookie::get_cookie(doc.cookie(), name)
}
