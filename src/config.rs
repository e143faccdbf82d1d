use crate::error::{ProvisionError, Result};
use serde::{Deserialize, Serialize};

/// Registry provisioning intent, as supplied by the flag-parsing layer.
///
/// `heartbeat`, `overcommit`, `tls_verify` and the local TLS path fields
/// are reserved: they are accepted for configuration parity but not
/// consumed when the launch command is rendered. The remote TLS paths
/// actually used at render time come from [`AuthOptions`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryOptions {
    pub enabled: bool,
    pub address: String,
    pub host: String,
    pub image: String,
    pub heartbeat: u64,
    pub overcommit: f64,
    pub tls_ca_cert: String,
    pub tls_cert: String,
    pub tls_key: String,
    pub tls_verify: bool,
    pub arbitrary_flags: Vec<String>,
    pub discovery: String,
}

impl RegistryOptions {
    pub fn new(host: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            enabled: true,
            host: host.into(),
            image: image.into(),
            ..Self::default()
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_discovery(mut self, discovery: impl Into<String>) -> Self {
        self.discovery = discovery.into();
        self
    }

    pub fn with_arbitrary_flags(mut self, flags: Vec<String>) -> Self {
        self.arbitrary_flags = flags;
        self
    }

    /// Extracts the port segment from `host`.
    ///
    /// Accepts `host:port` and `scheme://host:port` forms. The authority
    /// must contain exactly one colon and a numeric port; anything else
    /// is a configuration error, never a silent default.
    pub fn host_port(&self) -> Result<String> {
        let authority = match self.host.split_once("://") {
            Some((_, rest)) => rest,
            None => self.host.as_str(),
        };

        let (host, port) = authority.split_once(':').ok_or_else(|| {
            self.bad_host("expected host:port, found no port")
        })?;

        if host.is_empty() {
            return Err(self.bad_host("authority has an empty host segment"));
        }
        if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
            return Err(self.bad_host("port segment is not a decimal number"));
        }
        if port.parse::<u16>().is_err() {
            return Err(self.bad_host("port is out of range"));
        }

        Ok(port.to_string())
    }

    fn bad_host(&self, reason: &str) -> ProvisionError {
        ProvisionError::Configuration {
            host: self.host.clone(),
            reason: reason.to_string(),
        }
    }
}

/// Remote filesystem paths to the TLS material securing the registry API.
///
/// The paths point at files on the machine being provisioned; placing
/// the certificates there happens earlier in the provisioning lifecycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthOptions {
    pub ca_cert_remote_path: String,
    pub server_cert_remote_path: String,
    pub server_key_remote_path: String,
}

impl AuthOptions {
    pub fn new(
        ca_cert: impl Into<String>,
        server_cert: impl Into<String>,
        server_key: impl Into<String>,
    ) -> Self {
        Self {
            ca_cert_remote_path: ca_cert.into(),
            server_cert_remote_path: server_cert.into(),
            server_key_remote_path: server_key.into(),
        }
    }
}
