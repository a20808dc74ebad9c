use std::fmt;

use log::{ debug, warn };

use crate::{
    error::ChainError,
    renderer::GraphicsBackend,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind
{
    Window,
    Renderer,
    Surface,
    Texture,
}

impl fmt::Display for ResourceKind
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(match self {
            ResourceKind::Window => "window",
            ResourceKind::Renderer => "renderer",
            ResourceKind::Surface => "surface",
            ResourceKind::Texture => "texture",
        })
    }
}

pub struct ResourceChain<B: GraphicsBackend>
{
    window: Option<B::Window>,
    renderer: Option<B::Renderer>,
    surface: Option<B::Surface>,
    texture: Option<B::Texture>,

    acquired: Vec<ResourceKind>,
}

impl<B: GraphicsBackend> Default for ResourceChain<B>
{
    fn default() -> Self
    {
        Self {
            window: None,
            renderer: None,
            surface: None,
            texture: None,
            acquired: Vec::with_capacity(4),
        }
    }
}

impl<B: GraphicsBackend> ResourceChain<B>
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Kinds currently held, oldest first.
    pub fn acquired(&self) -> &[ResourceKind] { &self.acquired }
    pub fn is_empty(&self) -> bool { self.acquired.is_empty() }

    pub fn window(&self) -> Option<&B::Window> { self.window.as_ref() }
    pub fn renderer(&self) -> Option<&B::Renderer> { self.renderer.as_ref() }
    pub fn surface(&self) -> Option<&B::Surface> { self.surface.as_ref() }

    /// Drawing needs the renderer mutably while reading the texture.
    pub fn renderer_with_texture(&mut self) -> Option<(&mut B::Renderer, &B::Texture)>
    {
        match (self.renderer.as_mut(), self.texture.as_ref()) {
            (Some(ren), Some(tex)) => Some((ren, tex)),
            _ => None,
        }
    }

    // A rejected handle is released straight away so it cannot leak.

    pub fn store_window(&mut self, backend: &mut B, window: B::Window) -> Result<(), ChainError>
    {
        if self.window.is_some() {
            backend.destroy_window(window);
            return Err(ChainError::AlreadyHeld(ResourceKind::Window));
        }
        self.window = Some(window);
        self.record(ResourceKind::Window);
        Ok(())
    }

    pub fn store_renderer(&mut self, backend: &mut B, renderer: B::Renderer) -> Result<(), ChainError>
    {
        if self.renderer.is_some() {
            backend.destroy_renderer(renderer);
            return Err(ChainError::AlreadyHeld(ResourceKind::Renderer));
        }
        self.renderer = Some(renderer);
        self.record(ResourceKind::Renderer);
        Ok(())
    }

    pub fn store_surface(&mut self, backend: &mut B, surface: B::Surface) -> Result<(), ChainError>
    {
        if self.surface.is_some() {
            backend.free_surface(surface);
            return Err(ChainError::AlreadyHeld(ResourceKind::Surface));
        }
        self.surface = Some(surface);
        self.record(ResourceKind::Surface);
        Ok(())
    }

    pub fn store_texture(&mut self, backend: &mut B, texture: B::Texture) -> Result<(), ChainError>
    {
        if self.texture.is_some() {
            backend.destroy_texture(texture);
            return Err(ChainError::AlreadyHeld(ResourceKind::Texture));
        }
        self.texture = Some(texture);
        self.record(ResourceKind::Texture);
        Ok(())
    }

    fn record(&mut self, kind: ResourceKind)
    {
        debug!("acquired {}", kind);
        self.acquired.push(kind);
    }

    /// Release one kind out of order. Does nothing if it isn't held.
    pub fn release(&mut self, backend: &mut B, kind: ResourceKind)
    {
        self.acquired.retain(|k| *k != kind);
        self.release_slot(backend, kind);
    }

    /// Release everything still held, newest first.
    pub fn release_all(&mut self, backend: &mut B)
    {
        while let Some(kind) = self.acquired.pop() {
            self.release_slot(backend, kind);
        }
    }

    fn release_slot(&mut self, backend: &mut B, kind: ResourceKind)
    {
        let released = match kind {
            ResourceKind::Window => self.window.take().map(|h| backend.destroy_window(h)),
            ResourceKind::Renderer => self.renderer.take().map(|h| backend.destroy_renderer(h)),
            ResourceKind::Surface => self.surface.take().map(|h| backend.free_surface(h)),
            ResourceKind::Texture => self.texture.take().map(|h| backend.destroy_texture(h)),
        };

        if released.is_some() {
            debug!("released {}", kind);
        }
    }
}

impl<B: GraphicsBackend> Drop for ResourceChain<B>
{
    fn drop(&mut self)
    {
        if !self.is_empty() {
            warn!("resource chain dropped while still holding {:?}", self.acquired);
        }
    }
}
