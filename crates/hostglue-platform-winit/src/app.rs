use crate::events::WinitResizeSource;
use hostglue_core::{log::Logger, HostBridge, HostConfig, HostError, HostResult};

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

/// Per-frame callbacks driven by the winit loop.
pub trait HostApp {
    fn on_start(&mut self, _window: &Window, _bridge: &HostBridge) {}

    /// Called once per loop iteration. Return `false` to exit.
    fn on_frame(&mut self, window: &Window, bridge: &HostBridge) -> bool;

    fn on_shutdown(&mut self, _bridge: &HostBridge) {}
}

struct App<A: HostApp> {
    app: A,
    bridge: HostBridge,
    resize: WinitResizeSource,
    attrs: WindowAttributes,
    window: Option<Window>,
    shutdown_done: bool,
    error: Option<HostError>,
    log: Logger,
}

impl<A: HostApp> App<A> {
    fn new(app: A, bridge: HostBridge, resize: WinitResizeSource, attrs: WindowAttributes) -> Self {
        Self {
            app,
            bridge,
            resize,
            attrs,
            window: None,
            shutdown_done: false,
            error: None,
            log: Logger::new("Winit"),
        }
    }

    fn shutdown_once(&mut self, event_loop: &ActiveEventLoop) {
        if !self.shutdown_done {
            self.shutdown_done = true;
            self.app.on_shutdown(&self.bridge);
            self.log.info("shutdown");
        }
        event_loop.exit();
    }
}

impl<A: HostApp> ApplicationHandler for App<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(self.attrs.clone()) {
            Ok(w) => w,
            Err(e) => {
                self.log.error(format!("failed to create window: {e}"));
                self.error = Some(HostError::Winit(e.to_string()));
                event_loop.exit();
                return;
            }
        };

        self.app.on_start(&window, &self.bridge);
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        if self.window.as_ref().map(Window::id) != Some(id) {
            return;
        }

        if self.resize.handle_window_event(&event) {
            self.log.debug(format!("{event:?}"));
        }

        let esc_pressed = matches!(
            event,
            WindowEvent::KeyboardInput {
                event: KeyEvent {
                    state: ElementState::Pressed,
                    physical_key: PhysicalKey::Code(KeyCode::Escape),
                    ..
                },
                ..
            }
        );

        if esc_pressed || matches!(event, WindowEvent::CloseRequested) {
            self.shutdown_once(event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Poll);

        if self.shutdown_done {
            return;
        }
        let Some(window) = self.window.as_ref() else {
            return;
        };

        if self.app.on_frame(window, &self.bridge) {
            window.request_redraw();
        } else {
            self.shutdown_once(event_loop);
        }
    }
}

/// Open a window, track its resizes through a fresh `HostBridge` and drive `app` until exit.
pub fn run_host_app<A: HostApp>(config: HostConfig, app: A, attrs: WindowAttributes) -> HostResult<()> {
    let mut resize = WinitResizeSource::new();
    let mut bridge = HostBridge::new(config);
    bridge.setup(&mut resize)?;

    let event_loop = EventLoop::new().map_err(|e| HostError::Winit(e.to_string()))?;
    let mut state = App::new(app, bridge, resize, attrs);

    event_loop
        .run_app(&mut state)
        .map_err(|e| HostError::Winit(e.to_string()))?;

    match state.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
