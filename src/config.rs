use std::time::Duration;

/// Everything the run needs to know up front. There is no config file; the
/// defaults are the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig
{
    pub window: WindowConfig,
    pub renderer: RendererConfig,

    /// Bitmap to show, relative to the resource directory.
    pub image_file: String,

    pub frames: u32,
    pub frame_delay: Duration,

    /// Where to draw the texture at its native size. `None` stretches it
    /// over the whole window.
    pub draw_position: Option<(i32, i32)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig
{
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub shown: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendererConfig
{
    /// -1 picks the first driver supporting the requested flags.
    pub driver_index: i32,
    pub accelerated: bool,
    pub vsync: bool,
}

pub const SCREEN_WIDTH: u32 = 640;
pub const SCREEN_HEIGHT: u32 = 480;

impl Default for AppConfig
{
    fn default() -> Self
    {
        Self {
            window: WindowConfig::default(),
            renderer: RendererConfig::default(),
            image_file: "hello.bmp".into(),
            frames: 3,
            frame_delay: Duration::from_millis(1000),
            draw_position: None,
        }
    }
}

impl Default for WindowConfig
{
    fn default() -> Self
    {
        Self {
            title: "Hello World".into(),
            x: 100,
            y: 100,
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            shown: true,
        }
    }
}

impl Default for RendererConfig
{
    fn default() -> Self
    {
        Self {
            driver_index: -1,
            accelerated: true,
            vsync: true,
        }
    }
}
