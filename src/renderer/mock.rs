use super::{
    GraphicsBackend,
    Rect,
};
use crate::{
    config::{
        RendererConfig,
        WindowConfig,
    },
    error::Stage,
};

use std::{
    path::{ Path, PathBuf },
    time::Duration,
};

#[derive(Debug, PartialEq, Eq)]
pub struct MockWindow(pub u32);
#[derive(Debug, PartialEq, Eq)]
pub struct MockRenderer(pub u32);
#[derive(Debug, PartialEq, Eq)]
pub struct MockSurface(pub u32);
#[derive(Debug, PartialEq, Eq)]
pub struct MockTexture(pub u32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call
{
    Init,
    Shutdown,
    CreateWindow(u32),
    DestroyWindow(u32),
    CreateRenderer { renderer: u32, window: u32 },
    DestroyRenderer(u32),
    LoadBmp(PathBuf),
    FreeSurface(u32),
    CreateTexture { renderer: u32, surface: u32 },
    DestroyTexture(u32),
    Clear(u32),
    Copy { renderer: u32, texture: u32, src: Option<Rect>, dst: Option<Rect> },
    Present(u32),
    Delay(Duration),
}

pub struct MockBackend
{
    pub calls: Vec<Call>,
    pub fail_at: Option<Stage>,
    pub fail_copy: bool,
    /// Fail with an empty message, leaving the reason to `last_error`.
    pub silent_errors: bool,
    pub base: Result<String, String>,
    pub texture_size: (u32, u32),
    pub next_id: u32,
}

pub const MOCK_ERROR: &str = "mock failure";
pub const MOCK_LAST_ERROR: &str = "mock last error";

impl Default for MockBackend
{
    fn default() -> Self
    {
        Self {
            calls: Vec::new(),
            fail_at: None,
            fail_copy: false,
            silent_errors: false,
            base: Ok("/opt/hello/bin/".into()),
            texture_size: (64, 32),
            next_id: 1,
        }
    }
}

impl MockBackend
{
    pub fn failing_at(stage: Stage) -> Self
    {
        Self {
            fail_at: Some(stage),
            ..Self::default()
        }
    }

    fn acquire(&mut self, stage: Stage) -> Result<u32, String>
    {
        if self.fail_at == Some(stage) {
            return Err(self.failure());
        }
        let id = self.next_id;
        self.next_id += 1;
        Ok(id)
    }

    fn failure(&self) -> String
    {
        if self.silent_errors { String::new() } else { MOCK_ERROR.into() }
    }

    /// Calls that release something, in the order they happened.
    pub fn releases(&self) -> Vec<Call>
    {
        self.calls.iter()
            .filter(|c| matches!(c,
                Call::DestroyWindow(_) |
                Call::DestroyRenderer(_) |
                Call::FreeSurface(_) |
                Call::DestroyTexture(_)
            ))
            .cloned()
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize
    {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl GraphicsBackend for MockBackend
{
    type Window = MockWindow;
    type Renderer = MockRenderer;
    type Surface = MockSurface;
    type Texture = MockTexture;

    fn init(&mut self) -> Result<(), String>
    {
        self.calls.push(Call::Init);
        if self.fail_at == Some(Stage::Init) {
            return Err(self.failure());
        }
        Ok(())
    }

    fn shutdown(&mut self)
    {
        self.calls.push(Call::Shutdown);
    }

    fn base_path(&self) -> Result<String, String>
    {
        self.base.clone()
    }

    fn create_window(&mut self, _config: &WindowConfig) -> Result<Self::Window, String>
    {
        let id = self.acquire(Stage::CreateWindow)?;
        self.calls.push(Call::CreateWindow(id));
        Ok(MockWindow(id))
    }

    fn destroy_window(&mut self, window: Self::Window)
    {
        self.calls.push(Call::DestroyWindow(window.0));
    }

    fn create_renderer(&mut self, window: &Self::Window, _config: &RendererConfig) -> Result<Self::Renderer, String>
    {
        let id = self.acquire(Stage::CreateRenderer)?;
        self.calls.push(Call::CreateRenderer { renderer: id, window: window.0 });
        Ok(MockRenderer(id))
    }

    fn destroy_renderer(&mut self, renderer: Self::Renderer)
    {
        self.calls.push(Call::DestroyRenderer(renderer.0));
    }

    fn load_bmp(&mut self, path: &Path) -> Result<Self::Surface, String>
    {
        self.calls.push(Call::LoadBmp(path.to_path_buf()));
        let id = self.acquire(Stage::LoadBmp)?;
        Ok(MockSurface(id))
    }

    fn free_surface(&mut self, surface: Self::Surface)
    {
        self.calls.push(Call::FreeSurface(surface.0));
    }

    fn create_texture_from_surface(&mut self, renderer: &Self::Renderer, surface: &Self::Surface) -> Result<Self::Texture, String>
    {
        self.calls.push(Call::CreateTexture { renderer: renderer.0, surface: surface.0 });
        let id = self.acquire(Stage::CreateTexture)?;
        Ok(MockTexture(id))
    }

    fn destroy_texture(&mut self, texture: Self::Texture)
    {
        self.calls.push(Call::DestroyTexture(texture.0));
    }

    fn clear(&mut self, renderer: &mut Self::Renderer)
    {
        self.calls.push(Call::Clear(renderer.0));
    }

    fn copy(&mut self,
        renderer: &mut Self::Renderer,
        texture: &Self::Texture,
        src: Option<Rect>,
        dst: Option<Rect>
    ) -> Result<(), String>
    {
        self.calls.push(Call::Copy { renderer: renderer.0, texture: texture.0, src, dst });
        if self.fail_copy {
            return Err(MOCK_ERROR.into());
        }
        Ok(())
    }

    fn present(&mut self, renderer: &mut Self::Renderer)
    {
        self.calls.push(Call::Present(renderer.0));
    }

    fn query_texture_size(&self, _texture: &Self::Texture) -> (u32, u32)
    {
        self.texture_size
    }

    fn delay(&mut self, duration: Duration)
    {
        self.calls.push(Call::Delay(duration));
    }

    fn last_error(&self) -> String
    {
        MOCK_LAST_ERROR.into()
    }
}
