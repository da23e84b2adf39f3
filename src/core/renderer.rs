use crate::core::ordering::sort_experiences;
use crate::core::payload::{decode_list, decode_object};
use crate::core::render::{self, regions};
use crate::core::target::{apply_all, RegionUpdate};
use crate::domain::endpoints;
use crate::domain::model::{EducationEntry, ExperienceEntry, GalleryItem, Profile, SkillEntry};
use crate::domain::page::Page;
use crate::domain::ports::{ConfigProvider, ContactForm, ContentSource, RenderTarget};
use crate::utils::error::Result;

pub const DEFAULT_CONTACT_SUCCESS: &str = "Thank you! Your message has been sent successfully.";
pub const DEFAULT_CONTACT_ERROR: &str =
    "Sorry, there was an error sending your message. Please try again.";

#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub asset_base_url: String,
    pub show_gallery_titles: bool,
    pub contact_success: String,
    pub contact_error: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            asset_base_url: String::new(),
            show_gallery_titles: false,
            contact_success: DEFAULT_CONTACT_SUCCESS.to_string(),
            contact_error: DEFAULT_CONTACT_ERROR.to_string(),
        }
    }
}

impl RenderSettings {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            asset_base_url: config.asset_base_url().to_string(),
            show_gallery_titles: config.show_gallery_titles(),
            contact_success: config.contact_success_message().to_string(),
            contact_error: config.contact_error_message().to_string(),
        }
    }
}

/// Fetches the content a page needs and turns it into region updates.
///
/// Every load routine runs fetch → validate → transform on its own; a failed
/// fetch yields no updates for that section and never affects another one.
pub struct PageDataRenderer<S: ContentSource> {
    source: S,
    settings: RenderSettings,
}

impl<S: ContentSource> PageDataRenderer<S> {
    pub fn new(source: S, settings: RenderSettings) -> Self {
        Self { source, settings }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    async fn fetch_object<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        what: &str,
    ) -> Option<T> {
        let value = self.source.fetch_resource(endpoint).await?;
        decode_object(value, what)
    }

    async fn fetch_list<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        what: &str,
    ) -> Option<Vec<T>> {
        let value = self.source.fetch_resource(endpoint).await?;
        decode_list(value, what)
    }

    pub async fn load_home(&self) -> Vec<RegionUpdate> {
        match self.fetch_object::<Profile>(endpoints::PROFILE, "profile").await {
            Some(profile) => render::render_profile(&profile, &self.settings.asset_base_url),
            None => Vec::new(),
        }
    }

    pub async fn load_education(&self) -> Vec<RegionUpdate> {
        let Some(entries) = self
            .fetch_list::<EducationEntry>(endpoints::EDUCATIONS, "educations")
            .await
        else {
            return Vec::new();
        };

        tracing::debug!("Rendering {} education entries", entries.len());
        vec![RegionUpdate::html(
            regions::EDUCATION_TIMELINE,
            render::render_education_timeline(&entries),
        )]
    }

    pub async fn load_skills(&self) -> Vec<RegionUpdate> {
        let Some(skills) = self.fetch_list::<SkillEntry>(endpoints::SKILLS, "skills").await else {
            return Vec::new();
        };

        tracing::debug!("Rendering {} skills", skills.len());
        vec![RegionUpdate::html(
            regions::ALL_SKILLS,
            render::render_skills_list(&skills),
        )]
    }

    pub async fn load_experience(&self) -> Vec<RegionUpdate> {
        let Some(mut entries) = self
            .fetch_list::<ExperienceEntry>(endpoints::EXPERIENCES, "experiences")
            .await
        else {
            return Vec::new();
        };

        sort_experiences(&mut entries);
        tracing::debug!("Timeline populated with {} experiences", entries.len());
        vec![RegionUpdate::html(
            regions::EXPERIENCE_TIMELINE,
            render::render_experience_timeline(&entries),
        )]
    }

    pub async fn load_gallery(&self) -> Vec<RegionUpdate> {
        let Some(items) = self
            .fetch_list::<GalleryItem>(endpoints::GALLERIES, "galleries")
            .await
        else {
            return Vec::new();
        };

        vec![RegionUpdate::html(
            regions::GALLERY_GRID,
            render::render_gallery(
                &items,
                &self.settings.asset_base_url,
                self.settings.show_gallery_titles,
            ),
        )]
    }

    pub async fn load_contact_details(&self) -> Vec<RegionUpdate> {
        match self.fetch_object::<Profile>(endpoints::PROFILE, "profile").await {
            Some(profile) => vec![RegionUpdate::html(
                regions::CONTACT_DETAILS,
                render::render_contact_details(&profile),
            )],
            None => Vec::new(),
        }
    }

    /// All updates for `page`. Routines of the same page run concurrently and
    /// write to disjoint regions, so their results are simply concatenated.
    pub async fn load_page(&self, page: Page) -> Vec<RegionUpdate> {
        match page {
            Page::Home => self.load_home().await,
            Page::Education => {
                let (mut education, skills) =
                    tokio::join!(self.load_education(), self.load_skills());
                education.extend(skills);
                education
            }
            Page::Experience => self.load_experience().await,
            Page::Gallery => self.load_gallery().await,
            Page::Contact => self.load_contact_details().await,
        }
    }

    /// Load `page` and write it into `target`. Returns the number of updates applied.
    pub async fn render_page<T: RenderTarget + ?Sized>(&self, page: Page, target: &mut T) -> usize {
        tracing::info!("Loading {} page", page);
        let updates = self.load_page(page).await;
        let applied = apply_all(&updates, target);
        tracing::debug!("{}: {}/{} updates applied", page, applied, updates.len());
        applied
    }

    /// Dispatch on the trailing segment of `path`. Unknown pages do nothing
    /// and return `None`.
    pub async fn render_path<T: RenderTarget + ?Sized>(
        &self,
        path: &str,
        target: &mut T,
    ) -> Option<usize> {
        let Some(page) = Page::from_path(path) else {
            tracing::debug!("No loader for '{}', nothing to render", path);
            return None;
        };
        Some(self.render_page(page, target).await)
    }

    /// Send the form as a contact message and report the outcome in `formMessage`.
    ///
    /// On success the form is reset. On failure it is left as it was so the
    /// visitor can try again; the error is also returned to the caller.
    pub async fn submit_contact_form<F, T>(&self, form: &mut F, target: &mut T) -> Result<()>
    where
        F: ContactForm + ?Sized,
        T: RenderTarget + ?Sized,
    {
        let message = form.to_message();

        match self.source.submit_contact(&message).await {
            Ok(()) => {
                tracing::info!("Contact message sent");
                target.set_text(regions::FORM_MESSAGE, &self.settings.contact_success);
                target.set_attribute(regions::FORM_MESSAGE, "class", "success");
                form.reset();
                Ok(())
            }
            Err(e) => {
                tracing::error!("Contact submission failed: {}", e);
                target.set_text(regions::FORM_MESSAGE, &self.settings.contact_error);
                target.set_attribute(regions::FORM_MESSAGE, "class", "error");
                Err(e)
            }
        }
    }
}
