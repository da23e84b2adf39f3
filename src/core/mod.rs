pub mod assets;
pub mod form;
pub mod ordering;
pub mod payload;
pub mod render;
pub mod renderer;
pub mod site;
pub mod target;

pub use crate::domain::model::{
    ContactMessage, EducationEntry, ExperienceEntry, GalleryItem, MediaAsset, Profile, SkillEntry,
};
pub use crate::domain::page::Page;
pub use crate::domain::ports::{ConfigProvider, ContactForm, ContentSource, RenderTarget, Storage};
pub use crate::utils::error::Result;
