use crate::domain::model::ContactMessage;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    /// Prefix for media URLs written into pages. Defaults to the API base.
    fn asset_base_url(&self) -> &str;
    fn template_dir(&self) -> &str;
    fn output_dir(&self) -> &str;
    fn show_gallery_titles(&self) -> bool;
    fn contact_success_message(&self) -> &str;
    fn contact_error_message(&self) -> &str;
}

/// Read/write access to the content API.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// `None` means "render nothing for this section"; failures are logged, not returned.
    async fn fetch_resource(&self, endpoint: &str) -> Option<Value>;
    async fn submit_contact(&self, message: &ContactMessage) -> Result<()>;
}

/// A page with named regions that renderers can write into.
///
/// Every setter returns `false` when the region does not exist; callers
/// treat that as a silent no-op.
pub trait RenderTarget {
    fn has_region(&self, id: &str) -> bool;
    fn set_html(&mut self, id: &str, html: &str) -> bool;
    fn set_text(&mut self, id: &str, text: &str) -> bool;
    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> bool;
}

pub trait ContactForm {
    fn to_message(&self) -> ContactMessage;
    fn reset(&mut self);
}
