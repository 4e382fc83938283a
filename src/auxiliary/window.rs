use anyhow::{Context, Result};
use log::info;
use winit::event_loop::EventLoop;
use winit::window::{Fullscreen, Window, WindowBuilder};

/// Create a borderless fullscreen window covering the primary monitor and
/// report the monitor's pixel resolution alongside it.
pub fn create_window(title: &str, event_loop: &EventLoop<()>) -> Result<(Window, u32, u32)> {
    let monitor = event_loop
        .primary_monitor()
        .context("no primary monitor, can't query the display resolution")?;
    let size = monitor.size();

    let window = WindowBuilder::new()
        .with_title(title)
        .with_fullscreen(Some(Fullscreen::Borderless(Some(monitor))))
        .build(event_loop)
        .context("create window failed")?;

    info!("created {}x{} fullscreen window", size.width, size.height);

    Ok((window, size.width, size.height))
}
