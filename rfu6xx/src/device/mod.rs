// rfu6xx/src/device/mod.rs

pub mod builder;
pub mod handle;
pub mod operations;

pub use builder::DeviceBuilder;
pub use handle::{Device, Initialized, Uninitialized};
