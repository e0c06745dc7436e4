/// Tagged logger. The tag becomes the `log` target, so `RUST_LOG=Bridge=debug` works.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    tag: &'static str,
}

impl Logger {
    pub const fn new(tag: &'static str) -> Self {
        Self { tag }
    }

    #[inline]
    pub fn info(&self, msg: impl AsRef<str>) {
        self.emit(log::Level::Info, msg.as_ref());
    }

    #[inline]
    pub fn debug(&self, msg: impl AsRef<str>) {
        self.emit(log::Level::Debug, msg.as_ref());
    }

    #[inline]
    pub fn warn(&self, msg: impl AsRef<str>) {
        self.emit(log::Level::Warn, msg.as_ref());
    }

    #[inline]
    pub fn error(&self, msg: impl AsRef<str>) {
        self.emit(log::Level::Error, msg.as_ref());
    }

    fn emit(&self, lvl: log::Level, msg: &str) {
        log::log!(target: self.tag, lvl, "{}", msg);
    }
}

/// Install `env_logger` with `default` as the fallback filter. `RUST_LOG` overrides it.
/// Calling twice is harmless.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(default: log::LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(default)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init();
}
