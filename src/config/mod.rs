pub mod paths;
pub mod settings;
pub mod site;

pub use paths::AppPaths;
pub use settings::Settings;
pub use site::resolve_site;

use crate::error::AppResult;

pub fn load_settings(paths: &AppPaths, site: &str) -> AppResult<Settings> {
    settings::load(paths.settings_file(site))
}
