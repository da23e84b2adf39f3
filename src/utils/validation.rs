use crate::utils::error::{FolioError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(FolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FolioError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(FolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Asset bases only end up inside generated markup, so a site-relative
/// prefix such as `/strapi` is accepted alongside absolute URLs.
pub fn validate_asset_base(field_name: &str, base: &str) -> Result<()> {
    if base.is_empty() || base.starts_with('/') {
        return Ok(());
    }
    validate_url(field_name, base)
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Paths resolved inside a base directory must not leave it.
pub fn validate_relative_path(field_name: &str, path: &str) -> Result<()> {
    let escapes = path.starts_with(['/', '\\'])
        || path.split(['/', '\\']).any(|s| s == ".." || s.contains(':'));

    if escapes {
        return Err(FolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path must be relative to the template directory".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api.base_url", "https://example.com").is_ok());
        assert!(validate_url("api.base_url", "http://localhost:1338").is_ok());
        assert!(validate_url("api.base_url", "").is_err());
        assert!(validate_url("api.base_url", "invalid-url").is_err());
        assert!(validate_url("api.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_asset_base_allows_site_relative() {
        assert!(validate_asset_base("api.asset_base_url", "/strapi").is_ok());
        assert!(validate_asset_base("api.asset_base_url", "").is_ok());
        assert!(validate_asset_base("api.asset_base_url", "https://cdn.example.com").is_ok());
        assert!(validate_asset_base("api.asset_base_url", "strapi").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("site.output_dir", "./dist").is_ok());
        assert!(validate_path("site.output_dir", "").is_err());
        assert!(validate_path("site.output_dir", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_relative_path() {
        assert!(validate_relative_path("site.pages", "index.html").is_ok());
        assert!(validate_relative_path("site.pages", "blog/").is_ok());
        assert!(validate_relative_path("site.pages", "./gallery.html").is_ok());
        assert!(validate_relative_path("site.pages", "/gallery.html").is_err());
        assert!(validate_relative_path("site.pages", "../gallery.html").is_err());
        assert!(validate_relative_path("site.pages", "C:\\site\\index.html").is_err());
    }
}
