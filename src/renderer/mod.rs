pub mod window;
pub mod sdl;

#[cfg(test)]
pub mod mock;

pub use sdl::SdlBackend;

use crate::config::{
    RendererConfig,
    WindowConfig,
};

use std::{
    path::Path,
    time::Duration,
};

/// A rectangle in pixels, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect
{
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect
{
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self
    {
        Self { x, y, width, height }
    }
}

// release functions take handles by value
pub trait GraphicsBackend
{
    type Window;
    type Renderer;
    /// Pixel data in system memory.
    type Surface;
    /// Pixel data on the rendering device.
    type Texture;

    fn init(&mut self) -> Result<(), String>;
    fn shutdown(&mut self);

    /// Directory the running executable lives in, with a trailing separator.
    fn base_path(&self) -> Result<String, String>;

    fn create_window(&mut self, config: &WindowConfig) -> Result<Self::Window, String>;
    fn destroy_window(&mut self, window: Self::Window);

    fn create_renderer(&mut self, window: &Self::Window, config: &RendererConfig) -> Result<Self::Renderer, String>;
    fn destroy_renderer(&mut self, renderer: Self::Renderer);

    fn load_bmp(&mut self, path: &Path) -> Result<Self::Surface, String>;
    fn free_surface(&mut self, surface: Self::Surface);

    fn create_texture_from_surface(&mut self, renderer: &Self::Renderer, surface: &Self::Surface) -> Result<Self::Texture, String>;
    fn destroy_texture(&mut self, texture: Self::Texture);

    fn clear(&mut self, renderer: &mut Self::Renderer);

    /// Copy `src` of the texture (all of it if `None`) onto `dst` of the
    /// render target (all of it if `None`).
    fn copy(&mut self,
        renderer: &mut Self::Renderer,
        texture: &Self::Texture,
        src: Option<Rect>,
        dst: Option<Rect>
    ) -> Result<(), String>;

    fn present(&mut self, renderer: &mut Self::Renderer);
    fn query_texture_size(&self, texture: &Self::Texture) -> (u32, u32);
    fn delay(&mut self, duration: Duration);

    fn last_error(&self) -> String;
}
