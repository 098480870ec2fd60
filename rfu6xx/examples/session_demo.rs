//! Linear RFU6xx session: connect, initialize, start scan, read last scan
//! data, stop scan, write the scanned tag, read it back.
//!
//! Against a reader:
//!   RUST_LOG=info cargo run --example session_demo --features opcua -- ip:port
//!
//! Without the `opcua` feature the session runs against a simulated reader.

use anyhow::{Context, bail};
use log::info;
use rfu6xx::prelude::*;

#[cfg(feature = "opcua")]
fn connector() -> Box<dyn Connector> {
    Box::new(rfu6xx::transport::OpcUaConnector::new())
}

#[cfg(not(feature = "opcua"))]
fn connector() -> Box<dyn Connector> {
    log::warn!("built without the `opcua` feature, talking to a simulated reader");
    Box::new(rfu6xx::transport::MockConnector::new(simulated_reader()))
}

#[cfg(not(feature = "opcua"))]
fn simulated_reader() -> rfu6xx::transport::MockTransport {
    use rfu6xx::test_support;

    let mut m = test_support::mock_reader();
    let status = test_support::reader_node(Role::DeviceStatus);
    m.set_attribute(status, Variant::Int32(DeviceStatus::Idle.as_i32()));
    m.queue_attribute(status, Variant::Int32(DeviceStatus::Scanning.as_i32()));
    m.set_attribute(
        test_support::reader_node(Role::LastScanData),
        Variant::String("e2801160600002084e5a2b3c".into()),
    );
    m.push_call_response(vec![]);
    m.push_call_response(vec![]);
    m.push_call_response(vec![Variant::Int32(0)]);
    m.push_call_response(vec![
        Variant::ByteString(b"affedeafbeadaffe".to_vec()),
        Variant::Int32(0),
    ]);
    m
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match args.as_slice() {
        [] => {
            info!("No ip address and no port number was specified. The standard values are used.");
            SessionConfig::default()
        }
        [host] => {
            if cfg!(not(feature = "opcua")) {
                bail!("connecting to {} needs the `opcua` feature", host);
            }
            SessionConfig::for_host(host)
        }
        _ => bail!("too many parameters, expected at most one ip:port"),
    };

    let connector = connector();
    let mut dev = DeviceBuilder::new()
        .with_config(config)
        .connect(connector.as_ref())
        .context("failed to connect to server")?
        .build_uninitialized()?
        .initialize()
        .context("init failed")?;

    dev.start_scan(&ScanParameters::new(0.0, 0, false))
        .context("method call StartScan failed")?;

    let last_scan = dev.read_last_scan_data().context("read last data failed")?;
    info!("Last scan data: {}", last_scan);

    dev.stop_scan().context("method call StopScan failed")?;

    dev.write_tag(&last_scan, TagAddress::new(3, 0), "affedeafbeadaffe")
        .context("method call WriteTag failed")?
        .ensure_success()
        .context("WriteTag was rejected by the reader")?;

    let read = dev
        .read_tag(&last_scan, TagAddress::new(3, 0).with_length(16))
        .context("method call ReadTag failed")?;
    read.response
        .ensure_success()
        .context("ReadTag was rejected by the reader")?;
    info!("Tag read data: {}", String::from_utf8_lossy(&read.data));

    Ok(())
}
