use crate::{
    config::HostConfig,
    error::HostResult,
    log::Logger,
    resize::{ResizeSource, ResizeTracker},
};

/// Host integration layer: one resize tracker plus the resolved endpoint config.
///
/// Engines hold a `HostBridge` instead of reaching into host globals.
#[derive(Debug)]
pub struct HostBridge {
    config: HostConfig,
    tracker: ResizeTracker,
    subscribed: bool,
    log: Logger,
}

impl HostBridge {
    pub fn new(config: HostConfig) -> Self {
        Self {
            config,
            tracker: ResizeTracker::new(),
            subscribed: false,
            log: Logger::new("Bridge"),
        }
    }

    /// Subscribe to the host's resize events. Only the first call subscribes.
    pub fn setup(&mut self, source: &mut dyn ResizeSource) -> HostResult<()> {
        if self.subscribed {
            self.log.warn("setup called again; resize listener already installed");
            return Ok(());
        }
        source.subscribe(self.tracker.clone())?;
        self.subscribed = true;
        self.log.info(format!(
            "resize tracking installed (api={}, secure={})",
            self.api_server(),
            self.secure_api_server()
        ));
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn is_set_up(&self) -> bool {
        self.subscribed
    }

    /// `true` iff the window was resized since the previous poll. Clears the flag.
    #[inline]
    pub fn poll_resized(&self) -> bool {
        self.tracker.poll_and_clear()
    }

    pub fn api_server(&self) -> &str {
        self.config.api_server()
    }

    pub fn secure_api_server(&self) -> &str {
        self.config.secure_api_server()
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Handle for hosts that push resize notifications directly.
    pub fn tracker(&self) -> ResizeTracker {
        self.tracker.clone()
    }
}

impl Default for HostBridge {
    fn default() -> Self {
        Self::new(HostConfig::default())
    }
}
