use crate::core::renderer::{DEFAULT_CONTACT_ERROR, DEFAULT_CONTACT_SUCCESS};
use crate::domain::page::Page;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{FolioError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub messages: MessagesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// 圖片與檔案網址的前綴，未設定時沿用 base_url
    pub asset_base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    #[serde(default = "default_template_dir")]
    pub template_dir: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    pub pages: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default)]
    pub show_titles: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessagesConfig {
    pub contact_success: Option<String>,
    pub contact_error: Option<String>,
}

fn default_template_dir() -> String {
    "./frontend".to_string()
}

fn default_output_dir() -> String {
    "./dist".to_string()
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            template_dir: default_template_dir(),
            output_dir: default_output_dir(),
            pages: None,
        }
    }
}

impl SiteConfig {
    /// Defaults for everything except the API location.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
                asset_base_url: None,
            },
            site: SiteSection::default(),
            gallery: GalleryConfig::default(),
            messages: MessagesConfig::default(),
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FolioError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FolioError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CMS_URL})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FolioError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("api.base_url", &self.api.base_url)?;
        if let Some(asset_base) = &self.api.asset_base_url {
            validation::validate_asset_base("api.asset_base_url", asset_base)?;
        }

        validation::validate_path("site.template_dir", &self.site.template_dir)?;
        validation::validate_path("site.output_dir", &self.site.output_dir)?;

        if let Some(pages) = &self.site.pages {
            for page in pages {
                validation::validate_relative_path("site.pages", page)?;
                if Page::from_path(page).is_none() {
                    return Err(FolioError::InvalidConfigValueError {
                        field: "site.pages".to_string(),
                        value: page.clone(),
                        reason: format!(
                            "Unknown page. Known pages: {}",
                            Page::ALL.map(|p| p.file_name()).join(", ")
                        ),
                    });
                }
            }
        }

        Ok(())
    }

    /// Template files to build; all five pages unless configured otherwise.
    pub fn pages(&self) -> Vec<String> {
        match &self.site.pages {
            Some(pages) => pages.clone(),
            None => Page::ALL.iter().map(|p| p.file_name().to_string()).collect(),
        }
    }
}

impl ConfigProvider for SiteConfig {
    fn api_base_url(&self) -> &str {
        &self.api.base_url
    }

    fn asset_base_url(&self) -> &str {
        self.api
            .asset_base_url
            .as_deref()
            .unwrap_or(&self.api.base_url)
    }

    fn template_dir(&self) -> &str {
        &self.site.template_dir
    }

    fn output_dir(&self) -> &str {
        &self.site.output_dir
    }

    fn show_gallery_titles(&self) -> bool {
        self.gallery.show_titles
    }

    fn contact_success_message(&self) -> &str {
        self.messages
            .contact_success
            .as_deref()
            .unwrap_or(DEFAULT_CONTACT_SUCCESS)
    }

    fn contact_error_message(&self) -> &str {
        self.messages
            .contact_error
            .as_deref()
            .unwrap_or(DEFAULT_CONTACT_ERROR)
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_minimal_config_uses_defaults() {
        let toml_content = r#"
[api]
base_url = "http://localhost:1338"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.api_base_url(), "http://localhost:1338");
        assert_eq!(config.asset_base_url(), "http://localhost:1338");
        assert_eq!(config.template_dir(), "./frontend");
        assert_eq!(config.output_dir(), "./dist");
        assert!(!config.show_gallery_titles());
        assert_eq!(config.contact_success_message(), DEFAULT_CONTACT_SUCCESS);
        assert_eq!(config.pages().len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[api]
base_url = "https://cms.example.com"
asset_base_url = "/strapi"

[site]
template_dir = "./site"
output_dir = "./public"
pages = ["index.html", "gallery.html"]

[gallery]
show_titles = true

[messages]
contact_error = "Try again later."
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.asset_base_url(), "/strapi");
        assert!(config.show_gallery_titles());
        assert_eq!(config.contact_error_message(), "Try again later.");
        assert_eq!(config.contact_success_message(), DEFAULT_CONTACT_SUCCESS);
        assert_eq!(config.pages(), vec!["index.html", "gallery.html"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FOLIO_TEST_CMS_URL", "https://test.cms.com");

        let toml_content = r#"
[api]
base_url = "${FOLIO_TEST_CMS_URL}"
asset_base_url = "${FOLIO_TEST_UNSET_VAR}"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api.base_url, "https://test.cms.com");
        assert_eq!(
            config.api.asset_base_url.as_deref(),
            Some("${FOLIO_TEST_UNSET_VAR}")
        );

        std::env::remove_var("FOLIO_TEST_CMS_URL");
    }

    #[test]
    fn test_config_validation() {
        let bad_url = SiteConfig::with_base_url("/strapi");
        assert!(bad_url.validate().is_err());

        let mut bad_page = SiteConfig::with_base_url("http://localhost:1338");
        bad_page.site.pages = Some(vec!["about.html".to_string()]);
        assert!(matches!(
            bad_page.validate(),
            Err(FolioError::InvalidConfigValueError { .. })
        ));

        for escaping in ["/tmp/site/gallery.html", "../gallery.html"] {
            let mut config = SiteConfig::with_base_url("http://localhost:1338");
            config.site.pages = Some(vec![escaping.to_string()]);
            assert!(config.validate().is_err(), "{} accepted", escaping);
        }
    }

    #[test]
    fn test_missing_api_section_is_error() {
        let result = SiteConfig::from_toml_str("[site]\noutput_dir = \"./x\"\n");
        assert!(matches!(
            result,
            Err(FolioError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api]\nbase_url = \"https://api.example.com\"\n")
            .unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.api_base_url(), "https://api.example.com");
    }
}
