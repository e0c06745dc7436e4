use std::fmt;

/// `[LEVEL] [target] message`, the same shape the native logger prints.
pub fn format_record(level: log::Level, target: &str, args: &fmt::Arguments<'_>) -> String {
    format!("[{}] [{}] {}", level, target, args)
}

#[cfg(target_arch = "wasm32")]
pub use imp::{init_logging, ConsoleLogger};

#[cfg(target_arch = "wasm32")]
mod imp {
    use super::format_record;
    use wasm_bindgen::JsValue;

    /// `log::Log` backend writing to the browser console.
    pub struct ConsoleLogger;

    static LOGGER: ConsoleLogger = ConsoleLogger;

    impl log::Log for ConsoleLogger {
        fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &log::Record<'_>) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let line = JsValue::from_str(&format_record(record.level(), record.target(), record.args()));
            match record.level() {
                log::Level::Error => web_sys::console::error_1(&line),
                log::Level::Warn => web_sys::console::warn_1(&line),
                log::Level::Info => web_sys::console::info_1(&line),
                log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&line),
            }
        }

        fn flush(&self) {}
    }

    /// Install the console logger. Calling twice is harmless.
    pub fn init_logging(level: log::LevelFilter) {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_shape() {
        let line = format_record(log::Level::Warn, "Bridge", &format_args!("setup called {} times", 2));
        assert_eq!(line, "[WARN] [Bridge] setup called 2 times");
    }

    #[test]
    fn info_record() {
        let line = format_record(log::Level::Info, "Web", &format_args!("canvas resized to 800x600"));
        assert_eq!(line, "[INFO] [Web] canvas resized to 800x600");
    }
}
