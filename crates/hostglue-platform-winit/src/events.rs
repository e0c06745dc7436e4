use hostglue_core::{HostResult, ResizeFanout, ResizeSource, ResizeTracker};
use winit::event::WindowEvent;

/// Resize source fed by winit window events.
///
/// The event loop owns it and calls `handle_window_event` for every event of the window.
#[derive(Debug, Default)]
pub struct WinitResizeSource {
    fanout: ResizeFanout,
}

impl WinitResizeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notify subscribers if `event` changes the window size. Returns `true` if it did.
    pub fn handle_window_event(&self, event: &WindowEvent) -> bool {
        if !is_resize(event) {
            return false;
        }
        self.fanout.fire();
        true
    }
}

impl ResizeSource for WinitResizeSource {
    fn subscribe(&mut self, tracker: ResizeTracker) -> HostResult<()> {
        self.fanout.subscribe(tracker)
    }
}

/// DPI changes resize the surface too.
#[inline]
pub fn is_resize(event: &WindowEvent) -> bool {
    matches!(
        event,
        WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. }
    )
}
