// Reader operations executed on an initialized device.

pub mod scan;
pub mod tag;

pub use scan::{start_scan, stop_scan};
pub use tag::{read_tag, write_tag};
