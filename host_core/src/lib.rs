pub mod bridge;
pub mod config;
pub mod error;
pub mod log;
pub mod resize;
pub mod viewport;

pub use crate::bridge::HostBridge;
pub use crate::config::{ConfigSource, EnvSource, HostConfig, MapSource};
pub use crate::error::{HostError, HostResult};
pub use crate::resize::{ResizeFanout, ResizeSource, ResizeTracker};
