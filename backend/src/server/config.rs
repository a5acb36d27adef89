//! HTTP server configuration.

use std::net::SocketAddr;

use backend::inbound::http::books::BooksState;
use backend::settings::{ServerSettings, SettingsError};

/// Resolved configuration for creating the HTTP server.
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) books: BooksState,
}

impl ServerConfig {
    /// Resolve loaded settings, failing on malformed values.
    pub fn from_settings(settings: &ServerSettings) -> Result<Self, SettingsError> {
        Ok(Self {
            bind_addr: settings.bind_addr()?,
            books: BooksState::new(settings.reference_date()?),
        })
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
