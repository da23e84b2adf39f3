use crate::domain::ports::RenderTarget;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One write addressed to a named region of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegionUpdate {
    Html {
        region: String,
        html: String,
    },
    Text {
        region: String,
        text: String,
    },
    Attribute {
        region: String,
        name: String,
        value: String,
    },
}

impl RegionUpdate {
    pub fn html(region: &str, html: impl Into<String>) -> Self {
        RegionUpdate::Html {
            region: region.to_string(),
            html: html.into(),
        }
    }

    pub fn text(region: &str, text: impl Into<String>) -> Self {
        RegionUpdate::Text {
            region: region.to_string(),
            text: text.into(),
        }
    }

    pub fn attribute(region: &str, name: &str, value: impl Into<String>) -> Self {
        RegionUpdate::Attribute {
            region: region.to_string(),
            name: name.to_string(),
            value: value.into(),
        }
    }

    pub fn region(&self) -> &str {
        match self {
            RegionUpdate::Html { region, .. }
            | RegionUpdate::Text { region, .. }
            | RegionUpdate::Attribute { region, .. } => region,
        }
    }

    /// Write this update into `target`. Returns `false` if the region is missing.
    pub fn apply<T: RenderTarget + ?Sized>(&self, target: &mut T) -> bool {
        match self {
            RegionUpdate::Html { region, html } => target.set_html(region, html),
            RegionUpdate::Text { region, text } => target.set_text(region, text),
            RegionUpdate::Attribute {
                region,
                name,
                value,
            } => target.set_attribute(region, name, value),
        }
    }
}

/// Apply updates in order, skipping missing regions. Returns how many landed.
pub fn apply_all<T: RenderTarget + ?Sized>(updates: &[RegionUpdate], target: &mut T) -> usize {
    updates
        .iter()
        .filter(|update| {
            let applied = update.apply(target);
            if !applied {
                tracing::debug!("Region '{}' not present, skipping", update.region());
            }
            applied
        })
        .count()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegionState {
    pub html: Option<String>,
    pub text: Option<String>,
    pub attributes: BTreeMap<String, String>,
}

/// In-memory rendering target.
///
/// A restricted map only accepts writes to the regions it was created with,
/// which mirrors a template that lacks some containers. A permissive map
/// accepts any region id.
#[derive(Debug, Clone, Default)]
pub struct RegionMap {
    known: Option<BTreeSet<String>>,
    regions: BTreeMap<String, RegionState>,
    writes: usize,
}

impl RegionMap {
    pub fn permissive() -> Self {
        Self::default()
    }

    pub fn with_regions<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: Some(ids.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn get(&self, id: &str) -> Option<&RegionState> {
        self.regions.get(id)
    }

    pub fn html(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(|r| r.html.as_deref())
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(|r| r.text.as_deref())
    }

    pub fn attribute(&self, id: &str, name: &str) -> Option<&str> {
        self.get(id)
            .and_then(|r| r.attributes.get(name))
            .map(String::as_str)
    }

    /// Total number of successful writes, useful to assert "nothing happened".
    pub fn write_count(&self) -> usize {
        self.writes
    }

    fn region_mut(&mut self, id: &str) -> Option<&mut RegionState> {
        if !self.has_region(id) {
            return None;
        }
        self.writes += 1;
        Some(self.regions.entry(id.to_string()).or_default())
    }
}

impl RenderTarget for RegionMap {
    fn has_region(&self, id: &str) -> bool {
        match &self.known {
            Some(known) => known.contains(id),
            None => true,
        }
    }

    fn set_html(&mut self, id: &str, html: &str) -> bool {
        match self.region_mut(id) {
            Some(region) => {
                region.html = Some(html.to_string());
                region.text = None;
                true
            }
            None => false,
        }
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        match self.region_mut(id) {
            Some(region) => {
                region.text = Some(text.to_string());
                region.html = None;
                true
            }
            None => false,
        }
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> bool {
        match self.region_mut(id) {
            Some(region) => {
                region.attributes.insert(name.to_string(), value.to_string());
                true
            }
            None => false,
        }
    }
}
