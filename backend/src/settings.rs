//! Server settings loaded via OrthoConfig.
//!
//! Values layer command-line flags over `BOOKS_*` environment variables over
//! an optional configuration file. Every field is optional; the accessors
//! supply the defaults.

use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};

use book_data::default_reference_date;
use chrono::{DateTime, Utc};
use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;

/// Settings that cannot be turned into a running server.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The host is not an IP address.
    #[error("invalid host {value:?}: {source}")]
    InvalidHost {
        /// Configured value.
        value: String,
        /// Parser failure.
        #[source]
        source: AddrParseError,
    },
    /// The reference date is not an RFC 3339 timestamp.
    #[error("invalid reference date {value:?}: {source}")]
    InvalidReferenceDate {
        /// Configured value.
        value: String,
        /// Parser failure.
        #[source]
        source: chrono::ParseError,
    },
}

/// HTTP server settings.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BOOKS")]
pub struct ServerSettings {
    /// Address to listen on, default `0.0.0.0`.
    pub host: Option<String>,
    /// Port to listen on, default 8080.
    pub port: Option<u16>,
    /// RFC 3339 instant generated dates count back from.
    pub reference_date: Option<String>,
}

impl ServerSettings {
    /// Socket address the server binds to.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when the host is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let ip = match self.host.as_deref() {
            Some(host) => host
                .parse::<IpAddr>()
                .map_err(|source| SettingsError::InvalidHost {
                    value: host.to_owned(),
                    source,
                })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Reference date for generated publication and review dates.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidReferenceDate`] when the configured
    /// value is not RFC 3339.
    ///
    /// # Examples
    /// ```
    /// use backend::settings::ServerSettings;
    ///
    /// let settings = ServerSettings {
    ///     reference_date: Some("2030-06-01T12:00:00Z".to_owned()),
    ///     ..ServerSettings::default()
    /// };
    /// let date = settings.reference_date().expect("valid date");
    /// assert_eq!(date.to_rfc3339(), "2030-06-01T12:00:00+00:00");
    /// ```
    pub fn reference_date(&self) -> Result<DateTime<Utc>, SettingsError> {
        match self.reference_date.as_deref() {
            Some(value) => DateTime::parse_from_rfc3339(value)
                .map(|date| date.with_timezone(&Utc))
                .map_err(|source| SettingsError::InvalidReferenceDate {
                    value: value.to_owned(),
                    source,
                }),
            None => Ok(default_reference_date()),
        }
    }
}
