pub mod toml_config;

pub use toml_config::SiteConfig;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "folio-render")]
#[command(about = "Render portfolio pages from a headless content API")]
pub struct CliConfig {
    /// Path to the TOML site configuration
    #[arg(short, long, global = true, default_value = "folio.toml")]
    pub config: String,

    /// Override api.base_url (also used when the config file is absent)
    #[arg(long, global = true)]
    pub api_base_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render page templates into the output directory
    Build {
        /// Build only this page (file name or URL path); defaults to site.pages
        #[arg(long)]
        page: Option<String>,

        /// Print the region updates as JSON instead of writing files
        #[arg(long)]
        dry_run: bool,
    },
    /// Send a message through the contact endpoint
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,
    },
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Load the site config, applying CLI overrides.
    ///
    /// A missing config file is fine when `--api-base-url` is given; every
    /// other setting then takes its default.
    pub fn load_site_config(&self) -> crate::Result<SiteConfig> {
        let path = std::path::Path::new(&self.config);

        let mut site = match (&self.api_base_url, path.exists()) {
            (Some(base_url), false) => {
                tracing::debug!("No config at {}, using defaults", self.config);
                SiteConfig::with_base_url(base_url.clone())
            }
            _ => SiteConfig::from_file(path)?,
        };

        if let Some(base_url) = &self.api_base_url {
            site.api.base_url = base_url.clone();
        }
        Ok(site)
    }
}
