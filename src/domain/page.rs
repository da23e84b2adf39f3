use serde::{Deserialize, Serialize};

/// The five pages of the site, keyed by their template file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Education,
    Experience,
    Gallery,
    Contact,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Education,
        Page::Experience,
        Page::Gallery,
        Page::Contact,
    ];

    /// Resolve a page from a URL path or file path using its trailing segment.
    ///
    /// An empty trailing segment (e.g. `/` or `https://site/`) is the home page.
    /// Query strings and fragments are ignored. Unknown names yield `None`.
    pub fn from_path(path: &str) -> Option<Page> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segment = path.rsplit(['/', '\\']).next().unwrap_or_default();

        match segment {
            "" | "index.html" => Some(Page::Home),
            "education.html" => Some(Page::Education),
            "experience.html" => Some(Page::Experience),
            "gallery.html" => Some(Page::Gallery),
            "contact.html" => Some(Page::Contact),
            _ => None,
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::Education => "education.html",
            Page::Experience => "experience.html",
            Page::Gallery => "gallery.html",
            Page::Contact => "contact.html",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}
