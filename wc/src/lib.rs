pub mod client;
pub mod config;
pub mod cookie;
pub mod environment;
pub mod error;
pub mod origin;

// Re-export key types for easier access
pub use client::GroupStageClient;
pub use config::ClientConfig;
pub use cookie::{get_cookie, get_cookie_untrimmed, CookieJar};
pub use environment::{get_cookie_from, Document, StaticDocument};
pub use error::{Result, WcError};
pub use origin::Origin;
