use log::{ debug, info, trace, warn };

use crate::{
    cleanup::{
        ResourceChain,
        ResourceKind,
    },
    config::AppConfig,
    error::{
        LifecycleError,
        Stage,
    },
    renderer::{
        GraphicsBackend,
        Rect,
    },
    res_path,
};

use std::path::PathBuf;

pub fn run<B: GraphicsBackend>(backend: &mut B, config: &AppConfig) -> Result<(), LifecycleError>
{
    backend.init().map_err(|e| failure(&*backend, Stage::Init, e))?;
    info!("SDL initialized");

    let mut chain = ResourceChain::new();

    let result = acquire(backend, &mut chain, config);
    match &result {
        Ok(()) => display(backend, &mut chain, config),
        Err(e) => debug!("{} failed, releasing {:?}", e.stage, chain.acquired()),
    }

    chain.release_all(backend);
    backend.shutdown();
    info!("SDL shut down");

    result
}

fn acquire<B: GraphicsBackend>(backend: &mut B, chain: &mut ResourceChain<B>, config: &AppConfig) -> Result<(), LifecycleError>
{
    let window = backend.create_window(&config.window)
        .map_err(|e| failure(&*backend, Stage::CreateWindow, e))?;
    chain.store_window(backend, window)
        .map_err(|e| LifecycleError::new(Stage::CreateWindow, e.to_string()))?;

    let renderer = {
        let window = held(chain.window(), Stage::CreateRenderer, ResourceKind::Window)?;
        backend.create_renderer(window, &config.renderer)
            .map_err(|e| failure(&*backend, Stage::CreateRenderer, e))?
    };
    chain.store_renderer(backend, renderer)
        .map_err(|e| LifecycleError::new(Stage::CreateRenderer, e.to_string()))?;

    let image_path = PathBuf::from(format!("{}{}", res_path::resource_dir(&*backend), config.image_file));
    debug!("loading {}", image_path.display());

    let surface = backend.load_bmp(&image_path)
        .map_err(|e| failure(&*backend, Stage::LoadBmp, e))?;
    chain.store_surface(backend, surface)
        .map_err(|e| LifecycleError::new(Stage::LoadBmp, e.to_string()))?;

    let converted = {
        let renderer = held(chain.renderer(), Stage::CreateTexture, ResourceKind::Renderer)?;
        let surface = held(chain.surface(), Stage::CreateTexture, ResourceKind::Surface)?;
        backend.create_texture_from_surface(renderer, surface)
    };
    // the pixels live on the renderer now, or never will
    chain.release(backend, ResourceKind::Surface);

    let texture = converted.map_err(|e| failure(&*backend, Stage::CreateTexture, e))?;
    chain.store_texture(backend, texture)
        .map_err(|e| LifecycleError::new(Stage::CreateTexture, e.to_string()))?;

    Ok(())
}

/// SDL sometimes fails without saying why; fall back to its last error.
fn failure<B: GraphicsBackend>(backend: &B, stage: Stage, message: String) -> LifecycleError
{
    if message.is_empty() {
        LifecycleError::new(stage, backend.last_error())
    } else {
        LifecycleError::new(stage, message)
    }
}

fn held<T>(handle: Option<T>, stage: Stage, kind: ResourceKind) -> Result<T, LifecycleError>
{
    handle.ok_or_else(|| LifecycleError::new(stage, format!("no {} to build on", kind)))
}

/// Draw the same frame `config.frames` times, pausing after each present.
fn display<B: GraphicsBackend>(backend: &mut B, chain: &mut ResourceChain<B>, config: &AppConfig)
{
    let (renderer, texture) = match chain.renderer_with_texture() {
        Some(pair) => pair,
        None => return,
    };

    for frame in 0..config.frames {
        trace!("frame {}", frame);

        backend.clear(renderer);

        let drawn = match config.draw_position {
            Some((x, y)) => render_texture(backend, renderer, texture, x, y),
            None => backend.copy(renderer, texture, None, None),
        };
        if let Err(e) = drawn {
            warn!("SDL_RenderCopy error: {}", e);
        }

        backend.present(renderer);
        backend.delay(config.frame_delay);
    }
}

/// Draw a texture at its own size with its top-left corner at `(x, y)`.
pub fn render_texture<B: GraphicsBackend>(
    backend: &mut B,
    renderer: &mut B::Renderer,
    texture: &B::Texture,
    x: i32,
    y: i32
) -> Result<(), String>
{
    let (width, height) = backend.query_texture_size(texture);
    backend.copy(renderer, texture, None, Some(Rect::new(x, y, width, height)))
}
