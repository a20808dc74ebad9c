mod cleanup;
mod config;
mod error;
mod lifecycle;
mod renderer;
mod res_path;

use crate::{
    config::AppConfig,
    renderer::SdlBackend,
};

use log::info;

use std::process::ExitCode;


struct Application
{
    backend: SdlBackend,
    config: AppConfig,
}
impl Application
{
    fn new() -> Self
    {
        Self {
            backend: SdlBackend::new(),
            config: AppConfig::default(),
        }
    }

    fn run(&mut self) -> ExitCode
    {
        match lifecycle::run(&mut self.backend, &self.config) {
            Ok(()) => {
                info!("{} finished", PROGRAM_NAME);
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{}", e);
                ExitCode::FAILURE
            },
        }
    }
}


pub const PROGRAM_NAME: &'static str = env!("CARGO_PKG_NAME");

fn main() -> ExitCode
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .init();

    info!("starting {}", PROGRAM_NAME);

    let mut app = Application::new();
    app.run()
}
