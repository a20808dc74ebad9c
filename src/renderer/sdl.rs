use sdl2::{
    render::{
        Texture,
        WindowCanvas,
    },
    surface::Surface,
    video,
    Sdl,
    VideoSubsystem,
};

use super::{
    window,
    GraphicsBackend,
    Rect,
};
use crate::config::{
    RendererConfig,
    WindowConfig,
};

use std::{
    path::Path,
    time::Duration,
};

const NOT_INITIALIZED: &str = "SDL video subsystem is not initialized";

// field order is drop order: subsystem before the context
struct SdlContext
{
    video: VideoSubsystem,
    _sdl: Sdl,
}

#[derive(Default)]
pub struct SdlBackend
{
    context: Option<SdlContext>,
}

impl SdlBackend
{
    pub fn new() -> Self
    {
        Self::default()
    }

    fn video(&self) -> Result<&VideoSubsystem, String>
    {
        self.context.as_ref()
            .map(|ctx| &ctx.video)
            .ok_or_else(|| NOT_INITIALIZED.to_string())
    }
}

impl GraphicsBackend for SdlBackend
{
    type Window = video::Window;
    type Renderer = WindowCanvas;
    type Surface = Surface<'static>;
    type Texture = Texture;

    fn init(&mut self) -> Result<(), String>
    {
        let sdl = sdl2::init()?;
        let video = sdl.video()?;

        self.context = Some(SdlContext {
            video,
            _sdl: sdl,
        });

        Ok(())
    }

    fn shutdown(&mut self)
    {
        self.context = None;
    }

    fn base_path(&self) -> Result<String, String>
    {
        sdl2::filesystem::base_path().map_err(|e| e.to_string())
    }

    fn create_window(&mut self, config: &WindowConfig) -> Result<Self::Window, String>
    {
        window::build_window(self.video()?, config)
    }

    fn destroy_window(&mut self, window: Self::Window)
    {
        drop(window);
    }

    fn create_renderer(&mut self, target: &Self::Window, config: &RendererConfig) -> Result<Self::Renderer, String>
    {
        window::build_canvas(target, config)
    }

    fn destroy_renderer(&mut self, renderer: Self::Renderer)
    {
        drop(renderer);
    }

    fn load_bmp(&mut self, path: &Path) -> Result<Self::Surface, String>
    {
        Surface::load_bmp(path)
    }

    fn free_surface(&mut self, surface: Self::Surface)
    {
        drop(surface);
    }

    fn create_texture_from_surface(&mut self, renderer: &Self::Renderer, surface: &Self::Surface) -> Result<Self::Texture, String>
    {
        renderer.texture_creator()
            .create_texture_from_surface(surface)
            .map_err(|e| e.to_string())
    }

    fn destroy_texture(&mut self, texture: Self::Texture)
    {
        // textures are not tied to the renderer's lifetime, the resource
        // chain releases them before the renderer they were created on
        unsafe{ texture.destroy() };
    }

    fn clear(&mut self, renderer: &mut Self::Renderer)
    {
        renderer.clear();
    }

    fn copy(&mut self,
        renderer: &mut Self::Renderer,
        texture: &Self::Texture,
        src: Option<Rect>,
        dst: Option<Rect>
    ) -> Result<(), String>
    {
        renderer.copy(texture, src.map(to_sdl_rect), dst.map(to_sdl_rect))
    }

    fn present(&mut self, renderer: &mut Self::Renderer)
    {
        renderer.present();
    }

    fn query_texture_size(&self, texture: &Self::Texture) -> (u32, u32)
    {
        let query = texture.query();
        (query.width, query.height)
    }

    fn delay(&mut self, duration: Duration)
    {
        std::thread::sleep(duration);
    }

    fn last_error(&self) -> String
    {
        sdl2::get_error()
    }
}

fn to_sdl_rect(rect: Rect) -> sdl2::rect::Rect
{
    sdl2::rect::Rect::new(rect.x, rect.y, rect.width, rect.height)
}
