use crate::api::client::ProfileClient;
use crate::config::{self, AppPaths, Settings};
use crate::error::AppResult;
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub site: String,
    pub paths: AppPaths,
    pub settings: Settings,
    pub client: ProfileClient,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(site: String, json: bool) -> AppResult<Self> {
        let site = config::resolve_site(&site);
        let paths = AppPaths::discover()?;
        let settings = config::load_settings(&paths, &site)?;
        Self::from_parts(site, paths, settings, json)
    }

    pub fn from_parts(
        site: String,
        paths: AppPaths,
        settings: Settings,
        json: bool,
    ) -> AppResult<Self> {
        let client = ProfileClient::new(settings.endpoint())?;
        let output = Output::new(json);

        Ok(Self {
            site,
            paths,
            settings,
            client,
            output,
        })
    }
}
