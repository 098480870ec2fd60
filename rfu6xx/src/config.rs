// rfu6xx/src/config.rs
//! Session configuration: where to connect and which namespace URIs the
//! reader's information model lives in.

use std::time::Duration;

use crate::constants::{AUTO_ID_NAMESPACE_URI, OPC_DI_NAMESPACE_URI, RFU_NAMESPACE_URI};

/// Scheme prefix of an OPC UA binary endpoint URL.
pub const ENDPOINT_SCHEME: &str = "opc.tcp://";

/// Endpoint used when no host is given (4840 is the OPC UA default port).
pub const DEFAULT_ENDPOINT_URL: &str = "opc.tcp://localhost:4840";

/// Per-request timeout used when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 1000;

/// Namespace URIs resolved to indices at session start.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NamespaceUris {
    pub auto_id: String,
    pub opc_di: String,
    pub rfu: String,
}

impl Default for NamespaceUris {
    fn default() -> Self {
        Self {
            auto_id: AUTO_ID_NAMESPACE_URI.to_string(),
            opc_di: OPC_DI_NAMESPACE_URI.to_string(),
            rfu: RFU_NAMESPACE_URI.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    pub endpoint_url: String,
    pub request_timeout_ms: u64,
    pub namespaces: NamespaceUris,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            namespaces: NamespaceUris::default(),
        }
    }
}

impl SessionConfig {
    /// Config for `host` given as `ip:port` (or a full `opc.tcp://` URL).
    pub fn for_host(host: &str) -> Self {
        let endpoint_url = if host.starts_with(ENDPOINT_SCHEME) {
            host.to_string()
        } else {
            format!("{}{}", ENDPOINT_SCHEME, host)
        };
        Self {
            endpoint_url,
            ..Self::default()
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.request_timeout_ms = timeout_ms;
        self
    }

    pub fn with_namespaces(mut self, namespaces: NamespaceUris) -> Self {
        self.namespaces = namespaces;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
