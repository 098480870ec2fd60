// rfu6xx/src/device/builder.rs

use log::info;

use crate::config::SessionConfig;
use crate::device::handle::{Device, Uninitialized};
use crate::transport::{Connector, Transport};
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    config: SessionConfig,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Open a transport to the configured endpoint through `connector`.
    pub fn connect(mut self, connector: &dyn Connector) -> Result<Self> {
        info!("Client connect to server: {}", self.config.endpoint_url);
        let transport =
            connector.connect(&self.config.endpoint_url, self.config.request_timeout())?;
        self.transport = Some(transport);
        Ok(self)
    }

    /// Consume the builder and return an uninitialized Device.
    /// Requires a transport, either given directly or via [`Self::connect`].
    pub fn build_uninitialized(self) -> Result<Device<Uninitialized>> {
        match self.transport {
            Some(t) => Ok(Device::new_with_transport(t).with_namespaces(self.config.namespaces)),
            None => Err(Error::Connect("no transport configured".into())),
        }
    }
}
