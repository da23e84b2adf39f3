use serde::{Deserialize, Serialize};

/// Image or file reference as the content API returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaAsset {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub url: Option<String>,
    #[serde(default)]
    pub formats: Option<MediaFormats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaFormats {
    #[serde(default)]
    pub medium: Option<Rendition>,
    #[serde(default)]
    pub small: Option<Rendition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rendition {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "lenient::opt_asset")]
    pub photo: Option<MediaAsset>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub about: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub citizenship: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub availability: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_asset")]
    pub resume: Option<MediaAsset>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub degree: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub institution: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub start_year: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub end_year: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub major: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub responsibilities: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub key_achievements: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub order: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_asset")]
    pub image: Option<MediaAsset>,
}

/// Body of the contact write request. Built from form input, sent once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Helpers that accept whatever scalar shape the CMS happens to send.
///
/// Numbers and booleans become their string form, empty strings and
/// non-scalar values become `None`.
pub(crate) mod lenient {
    use super::MediaAsset;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
    }

    pub fn opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        })
    }

    pub fn opt_asset<'de, D>(deserializer: D) -> Result<Option<MediaAsset>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Object(_) => serde_json::from_value(value).ok(),
            _ => None,
        })
    }
}
