use sdl2::{
    render::WindowCanvas,
    video,
    VideoSubsystem,
};

use crate::config::{
    RendererConfig,
    WindowConfig,
};

pub fn build_window(video: &VideoSubsystem, config: &WindowConfig) -> Result<video::Window, String>
{
    let mut builder = video.window(&config.title, config.width, config.height);
    builder.position(config.x, config.y);

    if !config.shown {
        builder.hidden();
    }

    builder.build().map_err(|e| e.to_string())
}

// the canvas shares the window's context, the caller keeps its handle
pub fn build_canvas(window: &video::Window, config: &RendererConfig) -> Result<WindowCanvas, String>
{
    let mut builder = unsafe { video::Window::from_ref(window.context()) }.into_canvas();

    if config.driver_index >= 0 {
        builder = builder.index(config.driver_index as u32);
    }
    if config.accelerated {
        builder = builder.accelerated();
    }
    if config.vsync {
        builder = builder.present_vsync();
    }

    builder.build().map_err(|e| e.to_string())
}
