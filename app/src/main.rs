use hostglue_core::{log::init_logging, viewport::compute_upscale, HostBridge};
use hostglue_platform_winit::{
    load_native_config, run_host_app,
    winit::{dpi::LogicalSize, window::Window, window::WindowAttributes},
    HostApp, DEFAULT_CONFIG_FILE,
};

const RENDER_WIDTH: u32 = 320;
const RENDER_HEIGHT: u32 = 180;

/// Logs endpoints once, then recomputes the integer upscale whenever the window resizes.
struct DemoApp {
    upscale: u32,
}

impl DemoApp {
    fn refit(&mut self, window: &Window) {
        let size = window.inner_size();
        let upscale = compute_upscale(RENDER_WIDTH, RENDER_HEIGHT, size.width, size.height);
        if upscale != self.upscale {
            log::info!("window {}x{} -> upscale x{}", size.width, size.height, upscale);
            self.upscale = upscale;
        }
    }
}

impl HostApp for DemoApp {
    fn on_start(&mut self, window: &Window, bridge: &HostBridge) {
        log::debug!("resolved config: {:?}", bridge.config());
        log::info!("api server: {}", bridge.api_server());
        log::info!("secure api server: {}", bridge.secure_api_server());
        self.refit(window);
    }

    fn on_frame(&mut self, window: &Window, bridge: &HostBridge) -> bool {
        if bridge.poll_resized() {
            self.refit(window);
        }
        true
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(log::LevelFilter::Info);

    let config = load_native_config(DEFAULT_CONFIG_FILE)?;
    let attrs = WindowAttributes::default()
        .with_title("hostglue")
        .with_inner_size(LogicalSize::new(RENDER_WIDTH * 4, RENDER_HEIGHT * 4));

    run_host_app(config, DemoApp { upscale: 0 }, attrs)?;
    Ok(())
}
