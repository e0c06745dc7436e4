//! Native desktop host: winit window events drive the bridge's resize tracker.

mod app;
mod config;
mod events;

pub use app::{run_host_app, HostApp};
pub use config::{load_native_config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
pub use events::{is_resize, WinitResizeSource};

pub use winit;
