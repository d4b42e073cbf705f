//! Lookups over a `document.cookie` style string: `key=value` pairs joined by `;`.
//!
//! Two flavours are provided. [`get_cookie`] trims whitespace around keys and
//! values, which is what browsers produce (`"a=1; b=2"`). [`get_cookie_untrimmed`]
//! compares segments exactly as they were split, so any key after the first
//! `"; "` carries a leading space and will not match a bare name.

/// Returns the value of the first cookie named `name`, ignoring surrounding whitespace.
pub fn get_cookie(cookies: &str, name: &str) -> Option<String> {
    CookieJar::new(cookies).get(name).map(str::to_string)
}

/// Returns the value of the first segment whose raw key equals `name`.
pub fn get_cookie_untrimmed(cookies: &str, name: &str) -> Option<String> {
    CookieJar::new(cookies).get_untrimmed(name).map(str::to_string)
}

/// Read-only view over a cookie string.
#[derive(Debug, Clone, Copy)]
pub struct CookieJar<'a> {
    raw: &'a str,
}

impl<'a> CookieJar<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    pub fn get_untrimmed(&self, name: &str) -> Option<&'a str> {
        self.raw_pairs()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Trimmed `(key, value)` pairs in the order they appear.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.raw_pairs()
            .map(|(key, value)| (key.trim(), value.trim()))
    }

    // Segments without '=' are not cookies.
    fn raw_pairs(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.raw
            .split(';')
            .filter_map(|segment| segment.split_once('='))
    }
}
