use std::sync::Mutex;

use lazy_static::lazy_static;
use log::error;

use crate::renderer::GraphicsBackend;

cfg_if::cfg_if! {
    if #[cfg(windows)] {
        pub const PATH_SEP: char = '\\';
    } else {
        pub const PATH_SEP: char = '/';
    }
}

lazy_static! {
    static ref RESOURCE_DIR: Mutex<String> = Mutex::new(String::new());
}

/// Swap the last `bin` in an install path for `res`.
///
/// `/opt/app/bin/` becomes `/opt/app/res/`. A path without `bin` keeps all
/// of its text and gets `res` appended.
pub fn derive_resource_dir(base: &str) -> String
{
    let end = base.rfind("bin").unwrap_or(base.len());

    let mut dir = String::with_capacity(end + 4);
    dir.push_str(&base[..end]);
    dir.push_str("res");
    dir.push(PATH_SEP);
    dir
}

/// Resource directory for the running executable, computed once.
///
/// Returns an empty string if the executable's location is unknown; that
/// outcome is not cached.
pub fn resource_dir<B: GraphicsBackend>(backend: &B) -> String
{
    cached_resource_dir(&RESOURCE_DIR, backend)
}

fn cached_resource_dir<B: GraphicsBackend>(cache: &Mutex<String>, backend: &B) -> String
{
    let mut cached = match cache.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };

    if cached.is_empty() {
        match backend.base_path() {
            Ok(base) => *cached = derive_resource_dir(&base),
            Err(e) => {
                error!("Error getting resource path: {}", e);
                return String::new();
            }
        }
    }

    cached.clone()
}
