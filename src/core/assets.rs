use crate::domain::model::MediaAsset;

/// Public URL of a media asset: the primary URL, else the medium rendition,
/// else the small one, prefixed with `base`. Empty when nothing is usable.
pub fn resolve_asset_url(base: &str, asset: Option<&MediaAsset>) -> String {
    let Some(asset) = asset else {
        return String::new();
    };

    let formats = asset.formats.as_ref();
    let path = non_empty(asset.url.as_deref())
        .or_else(|| non_empty(formats?.medium.as_ref()?.url.as_deref()))
        .or_else(|| non_empty(formats?.small.as_ref()?.url.as_deref()));

    match path {
        Some(path) => join_url(base, path),
        None => String::new(),
    }
}

/// Plain concatenation of base and path, as the CMS returns root-relative
/// upload paths. Absolute URLs (e.g. assets on an external provider) pass
/// through unchanged.
pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
        return path.to_string();
    }
    format!("{}{}", base, path)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
