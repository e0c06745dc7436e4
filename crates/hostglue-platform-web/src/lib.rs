//! Browser (`wasm32`) host for the bridge.
//!
//! - `BrowserResizeSource`: `resize` listener on `window`
//! - `GlobalSource`: config slots read from `globalThis`
//! - `ConsoleLogger`: `log` records to the devtools console
//!
//! `GlobalSource` yields `None` for missing or non-string globals and passes
//! `""` through; `HostConfig` resolves both to the default endpoint, so
//! `globalThis.apiServer || default` holds. Those rules are tested natively in
//! `hostglue_core::config`. The listener and `globalThis` reads themselves need
//! a browser and are not covered by `cargo test`.
//!
//! On native targets only the target-independent pieces are compiled, so the
//! workspace builds without a wasm toolchain.

#[cfg(target_arch = "wasm32")]
mod browser;
mod console;

#[cfg(target_arch = "wasm32")]
pub use browser::{install, maximize_canvas, BrowserResizeSource, GlobalSource};
#[cfg(target_arch = "wasm32")]
pub use console::{init_logging, ConsoleLogger};
pub use console::format_record;
