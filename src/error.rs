use std::fmt;

use thiserror::Error;

use crate::cleanup::ResourceKind;

/// The acquisition step a failure happened at.
///
/// Displayed with the name of the SDL call that backs the step, which is what
/// ends up in front of the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage
{
    Init,
    CreateWindow,
    CreateRenderer,
    LoadBmp,
    CreateTexture,
}

impl Stage
{
    pub fn name(self) -> &'static str
    {
        match self {
            Stage::Init => "SDL_Init",
            Stage::CreateWindow => "SDL_CreateWindow",
            Stage::CreateRenderer => "SDL_CreateRenderer",
            Stage::LoadBmp => "SDL_LoadBMP",
            Stage::CreateTexture => "SDL_CreateTextureFromSurface",
        }
    }
}

impl fmt::Display for Stage
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.name())
    }
}

/// A resource could not be acquired. Always terminal for the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{stage} error: {message}")]
pub struct LifecycleError
{
    pub stage: Stage,
    pub message: String,
}

impl LifecycleError
{
    pub fn new(stage: Stage, message: impl Into<String>) -> Self
    {
        Self {
            stage,
            message: message.into(),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainError
{
    #[error("a {0} is already held by the resource chain")]
    AlreadyHeld(ResourceKind),
}
