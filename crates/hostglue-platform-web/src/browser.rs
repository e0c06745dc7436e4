use hostglue_core::{
    log::Logger, ConfigSource, HostBridge, HostConfig, HostError, HostResult, ResizeSource,
    ResizeTracker,
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{HtmlCanvasElement, Window};

const LOG: Logger = Logger::new("Web");

fn js_err(v: JsValue) -> HostError {
    HostError::Platform(format!("{v:?}"))
}

fn browser_window() -> HostResult<Window> {
    web_sys::window().ok_or_else(|| HostError::Platform("no global `window`".into()))
}

/// Subscribes trackers to the window's `resize` event.
pub struct BrowserResizeSource {
    window: Window,
}

impl BrowserResizeSource {
    pub fn new() -> HostResult<Self> {
        Ok(Self {
            window: browser_window()?,
        })
    }
}

impl ResizeSource for BrowserResizeSource {
    fn subscribe(&mut self, tracker: ResizeTracker) -> HostResult<()> {
        let cb = Closure::<dyn FnMut()>::new(move || tracker.notify());
        self.window
            .add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
            .map_err(js_err)?;
        // Listener lives for the rest of the page.
        cb.forget();
        Ok(())
    }
}

/// Config slots on `globalThis` (e.g. `globalThis.apiServer = "https://..."`).
/// Non-string values are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalSource;

impl ConfigSource for GlobalSource {
    fn lookup(&self, slot: &str) -> Option<String> {
        js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(slot))
            .ok()?
            .as_string()
    }
}

/// Resolve config from `globalThis` and start tracking window resizes.
pub fn install() -> HostResult<HostBridge> {
    let config = HostConfig::from_source(&GlobalSource);
    LOG.debug(format!("globals resolved: {config:?}"));

    let mut bridge = HostBridge::new(config);
    let mut source = BrowserResizeSource::new()?;
    bridge.setup(&mut source)?;
    Ok(bridge)
}

/// Match the canvas backing store to the window's inner size. Returns the new size.
pub fn maximize_canvas(canvas: &HtmlCanvasElement) -> HostResult<(u32, u32)> {
    let win = browser_window()?;
    let w = win
        .inner_width()
        .map_err(js_err)?
        .as_f64()
        .ok_or_else(|| HostError::Platform("innerWidth is not a number".into()))?;
    let h = win
        .inner_height()
        .map_err(js_err)?
        .as_f64()
        .ok_or_else(|| HostError::Platform("innerHeight is not a number".into()))?;

    let (w, h) = (w.max(0.0) as u32, h.max(0.0) as u32);
    canvas.set_width(w);
    canvas.set_height(h);
    LOG.debug(format!("canvas resized to {w}x{h}"));
    Ok((w, h))
}
