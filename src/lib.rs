pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{document::HtmlDocument, http::ApiClient, storage::LocalStorage};
pub use config::SiteConfig;
pub use core::{
    form::ContactFields,
    renderer::{PageDataRenderer, RenderSettings},
    site::SiteBuilder,
    target::{RegionMap, RegionUpdate},
};
pub use domain::page::Page;
pub use utils::error::{FolioError, Result};
