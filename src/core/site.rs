use crate::adapters::document::HtmlDocument;
use crate::core::renderer::PageDataRenderer;
use crate::core::target::RegionUpdate;
use crate::domain::page::Page;
use crate::domain::ports::{ContentSource, Storage};
use crate::utils::error::{FolioError, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub page: Page,
    pub file: String,
    pub updates_applied: usize,
}

/// Renders page templates into a static output directory.
pub struct SiteBuilder<S: Storage, C: ContentSource> {
    templates: S,
    output: S,
    renderer: PageDataRenderer<C>,
}

impl<S: Storage, C: ContentSource> SiteBuilder<S, C> {
    pub fn new(templates: S, output: S, renderer: PageDataRenderer<C>) -> Self {
        Self {
            templates,
            output,
            renderer,
        }
    }

    /// Render one template. Returns `Ok(None)` for file names that are not a
    /// known page; those are neither fetched for nor written.
    pub async fn build_page(&self, file: &str) -> Result<Option<BuildReport>> {
        let Some(page) = Page::from_path(file) else {
            tracing::warn!("⚠️ '{}' is not a known page, skipping", file);
            return Ok(None);
        };

        let file = storage_key(file, page);

        let bytes = self.templates.read_file(&file).await?;
        let html = String::from_utf8(bytes).map_err(|e| FolioError::TemplateError {
            template: file.clone(),
            message: format!("not valid UTF-8: {}", e),
        })?;

        let mut document = HtmlDocument::new(html);
        let updates_applied = self.renderer.render_page(page, &mut document).await;

        self.output
            .write_file(&file, document.as_str().as_bytes())
            .await?;
        tracing::info!("📄 {} written ({} updates)", file, updates_applied);

        Ok(Some(BuildReport {
            page,
            file,
            updates_applied,
        }))
    }

    /// Build every file in order. The first template or IO error stops the run.
    pub async fn build_all<I, F>(&self, files: I) -> Result<Vec<BuildReport>>
    where
        I: IntoIterator<Item = F>,
        F: AsRef<str>,
    {
        let mut reports = Vec::new();
        for file in files {
            if let Some(report) = self.build_page(file.as_ref()).await? {
                reports.push(report);
            }
        }
        tracing::info!("✅ Built {} page(s)", reports.len());
        Ok(reports)
    }

    /// What a build would write for `page`, without touching any template.
    pub async fn dry_run(&self, page: Page) -> Vec<RegionUpdate> {
        self.renderer.load_page(page).await
    }
}

/// Key of `file` inside template and output storage: its relative directory
/// plus the page's own file name, so "" and "blog/" map to an `index.html`.
/// Absolute paths, URLs and `..` segments keep only the file name.
fn storage_key(file: &str, page: Page) -> String {
    let path = file.split(['?', '#']).next().unwrap_or_default();
    let dir = path.rfind(['/', '\\']).map(|i| &path[..i]).unwrap_or_default();
    let segments: Vec<&str> = dir
        .split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != ".")
        .collect();

    let rooted = path.starts_with(['/', '\\'])
        || segments.iter().any(|s| *s == ".." || s.contains(':'));
    if rooted {
        tracing::debug!("'{}' is not relative, using {}", file, page.file_name());
    }
    if rooted || segments.is_empty() {
        return page.file_name().to_string();
    }
    format!("{}/{}", segments.join("/"), page.file_name())
}
