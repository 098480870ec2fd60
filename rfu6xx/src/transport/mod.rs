// rfu6xx/src/transport/mod.rs

pub mod mock;
#[cfg(feature = "opcua")]
pub mod opcua;
pub mod traits;

pub use mock::{MockConnector, MockTransport, RecordedCall};
#[cfg(feature = "opcua")]
pub use self::opcua::{OpcUaConnector, OpcUaTransport};
pub use traits::{Connector, Transport};
