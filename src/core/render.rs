//! Pure transforms from validated view models to HTML fragments.
//!
//! Nothing in here touches the network or a page. Missing fields are omitted
//! from the output; interpolated values are always HTML-escaped.

use crate::core::assets::{join_url, resolve_asset_url};
use crate::core::target::RegionUpdate;
use crate::domain::model::{EducationEntry, ExperienceEntry, GalleryItem, Profile, SkillEntry};

/// Region ids the page templates provide.
pub mod regions {
    pub const PROFILE_IMAGE: &str = "profileImage";
    pub const ABOUT_CONTENT: &str = "aboutContent";
    pub const CITIZENSHIP: &str = "citizenship";
    pub const LOCATION: &str = "location";
    pub const PHONE: &str = "phone";
    pub const EMAIL: &str = "email";
    pub const AVAILABILITY: &str = "availability";
    pub const RESUME_DOWNLOAD_BTN: &str = "resumeDownloadBtn";
    pub const EDUCATION_TIMELINE: &str = "educationTimeline";
    pub const ALL_SKILLS: &str = "allSkills";
    pub const EXPERIENCE_TIMELINE: &str = "experienceTimeline";
    pub const GALLERY_GRID: &str = "galleryGrid";
    pub const CONTACT_DETAILS: &str = "contactDetails";
    pub const FORM_MESSAGE: &str = "formMessage";
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Non-blank lines of a newline-delimited field, trimmed.
pub fn split_lines(value: Option<&str>) -> Vec<&str> {
    value
        .map(|v| v.lines().map(str::trim).filter(|l| !l.is_empty()).collect())
        .unwrap_or_default()
}

fn date_range(start: Option<&str>, end: Option<&str>, open_end: Option<&str>) -> Option<String> {
    match (start, end.or(open_end)) {
        (Some(start), Some(end)) => Some(format!("{} - {}", start, end)),
        (Some(start), None) => Some(start.to_string()),
        (None, _) => end.map(str::to_string),
    }
}

fn bullet_section(html: &mut String, heading: &str, items: &[&str]) {
    if items.is_empty() {
        return;
    }
    html.push_str(&format!("<h4>{}</h4>\n<ul>\n", heading));
    for item in items {
        html.push_str(&format!("<li>{}</li>\n", escape_html(item)));
    }
    html.push_str("</ul>\n");
}

fn timeline_item(
    html: &mut String,
    heading: Option<&str>,
    dates: Option<String>,
    organisation: Option<&str>,
    content: &str,
) {
    html.push_str("<div class=\"timeline-item fade-in\">\n<div class=\"timeline-header\">\n");
    if let Some(heading) = heading {
        html.push_str(&format!("<h3>{}</h3>\n", escape_html(heading)));
    }
    html.push_str("<div class=\"timeline-meta\">\n");
    if let Some(dates) = dates {
        html.push_str(&format!(
            "<span class=\"timeline-date\">{}</span>\n",
            escape_html(&dates)
        ));
    }
    if let Some(organisation) = organisation {
        html.push_str(&format!(
            "<span class=\"timeline-company\">{}</span>\n",
            escape_html(organisation)
        ));
    }
    html.push_str("</div>\n</div>\n<div class=\"timeline-content\">\n");
    html.push_str(content);
    html.push_str("</div>\n</div>\n");
}

/// Updates for the home page. Each populated field yields exactly one update.
pub fn render_profile(profile: &Profile, asset_base: &str) -> Vec<RegionUpdate> {
    let mut updates = Vec::new();

    let photo = resolve_asset_url(asset_base, profile.photo.as_ref());
    if !photo.is_empty() {
        updates.push(RegionUpdate::attribute(regions::PROFILE_IMAGE, "src", photo));
    }

    if let Some(about) = profile.about.as_deref() {
        let paragraphs: String = split_lines(Some(about))
            .into_iter()
            .map(|p| format!("<p>{}</p>", escape_html(p)))
            .collect();
        if !paragraphs.is_empty() {
            updates.push(RegionUpdate::html(regions::ABOUT_CONTENT, paragraphs));
        }
    }

    for (region, value) in [
        (regions::CITIZENSHIP, &profile.citizenship),
        (regions::LOCATION, &profile.location),
        (regions::PHONE, &profile.phone),
        (regions::EMAIL, &profile.email),
        (regions::AVAILABILITY, &profile.availability),
    ] {
        if let Some(value) = value {
            updates.push(RegionUpdate::text(region, value.as_str()));
        }
    }

    if let Some(url) = profile
        .resume
        .as_ref()
        .and_then(|resume| resume.url.as_deref())
    {
        updates.push(RegionUpdate::attribute(
            regions::RESUME_DOWNLOAD_BTN,
            "href",
            join_url(asset_base, url),
        ));
    }

    updates
}

pub fn render_education_timeline(entries: &[EducationEntry]) -> String {
    let mut html = String::with_capacity(entries.len() * 512);

    for edu in entries {
        let mut content = String::new();
        if let Some(major) = edu.major.as_deref() {
            content.push_str(&format!(
                "<p><strong>Major:</strong> {}</p>\n",
                escape_html(major)
            ));
        }
        if let Some(description) = edu.description.as_deref() {
            content.push_str(&format!("<p>{}</p>\n", escape_html(description)));
        }

        timeline_item(
            &mut html,
            edu.degree.as_deref(),
            date_range(edu.start_year.as_deref(), edu.end_year.as_deref(), None),
            edu.institution.as_deref(),
            &content,
        );
    }

    html
}

pub fn render_skills_list(skills: &[SkillEntry]) -> String {
    let mut html = String::from("<ul class=\"skills-list\">\n");
    for name in skills.iter().filter_map(|s| s.name.as_deref()) {
        html.push_str(&format!("<li>{}</li>\n", escape_html(name)));
    }
    html.push_str("</ul>\n");
    html
}

/// Render entries in the order given. Callers sort first.
pub fn render_experience_timeline(entries: &[ExperienceEntry]) -> String {
    let mut html = String::with_capacity(entries.len() * 1024);

    for exp in entries {
        let mut content = String::new();
        if let Some(description) = exp.description.as_deref() {
            content.push_str(&format!("<p>{}</p>\n", escape_html(description)));
        }
        bullet_section(
            &mut content,
            "Responsibilities:",
            &split_lines(exp.responsibilities.as_deref()),
        );
        bullet_section(
            &mut content,
            "Key Achievements:",
            &split_lines(exp.key_achievements.as_deref()),
        );

        timeline_item(
            &mut html,
            exp.position.as_deref(),
            date_range(
                exp.start_date.as_deref(),
                exp.end_date.as_deref(),
                Some("Present"),
            ),
            exp.company.as_deref(),
            &content,
        );
    }

    html
}

pub fn render_gallery(items: &[GalleryItem], asset_base: &str, show_titles: bool) -> String {
    let mut html = String::with_capacity(items.len() * 256);

    for item in items {
        let src = resolve_asset_url(asset_base, item.image.as_ref());
        let title = item.title.as_deref().unwrap_or_default();

        html.push_str("<div class=\"gallery-item fade-in\">\n");
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">\n",
            escape_html(&src),
            escape_html(title)
        ));
        html.push_str("<div class=\"gallery-info\">\n");
        if show_titles && !title.is_empty() {
            html.push_str(&format!("<h3>{}</h3>\n", escape_html(title)));
        }
        html.push_str(&format!(
            "<p>{}</p>\n",
            escape_html(item.description.as_deref().unwrap_or_default())
        ));
        html.push_str("</div>\n</div>\n");
    }

    html
}

pub fn render_contact_details(profile: &Profile) -> String {
    let mut html = String::new();

    for (icon, label, value) in [
        ("📍", "Location", &profile.location),
        ("✉️", "Email", &profile.email),
        ("📞", "Phone", &profile.phone),
        ("✓", "Availability", &profile.availability),
    ] {
        html.push_str("<div class=\"contact-detail-item fade-in\">\n");
        html.push_str(&format!("<div class=\"contact-icon\">{}</div>\n", icon));
        html.push_str("<div class=\"contact-detail-content\">\n");
        html.push_str(&format!("<strong>{}</strong>\n", label));
        html.push_str(&format!(
            "<span>{}</span>\n",
            escape_html(value.as_deref().unwrap_or("N/A"))
        ));
        html.push_str("</div>\n</div>\n");
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::MediaAsset;

    fn full_profile() -> Profile {
        Profile {
            photo: Some(MediaAsset {
                url: Some("/uploads/me.jpg".to_string()),
                formats: None,
            }),
            about: Some("First line\n\nSecond <line>".to_string()),
            citizenship: Some("Canadian".to_string()),
            location: Some("Toronto".to_string()),
            phone: Some("+1 555 0100".to_string()),
            email: Some("ada@example.com".to_string()),
            availability: Some("Open to work".to_string()),
            resume: Some(MediaAsset {
                url: Some("/uploads/cv.pdf".to_string()),
                formats: None,
            }),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_render_profile_one_update_per_field() {
        let updates = render_profile(&full_profile(), "/strapi");

        assert_eq!(updates.len(), 8);
        for region in [
            regions::PROFILE_IMAGE,
            regions::ABOUT_CONTENT,
            regions::CITIZENSHIP,
            regions::LOCATION,
            regions::PHONE,
            regions::EMAIL,
            regions::AVAILABILITY,
            regions::RESUME_DOWNLOAD_BTN,
        ] {
            assert_eq!(
                updates.iter().filter(|u| u.region() == region).count(),
                1,
                "region {}",
                region
            );
        }
        assert!(updates.contains(&RegionUpdate::attribute(
            regions::PROFILE_IMAGE,
            "src",
            "/strapi/uploads/me.jpg"
        )));
        assert!(updates.contains(&RegionUpdate::html(
            regions::ABOUT_CONTENT,
            "<p>First line</p><p>Second &lt;line&gt;</p>"
        )));
        assert!(updates.contains(&RegionUpdate::attribute(
            regions::RESUME_DOWNLOAD_BTN,
            "href",
            "/strapi/uploads/cv.pdf"
        )));
    }

    #[test]
    fn test_render_profile_skips_absent_fields() {
        let profile = Profile {
            email: Some("ada@example.com".to_string()),
            resume: Some(MediaAsset::default()),
            ..Default::default()
        };
        let updates = render_profile(&profile, "/strapi");
        assert_eq!(updates, vec![RegionUpdate::text(regions::EMAIL, "ada@example.com")]);
    }

    #[test]
    fn test_education_optional_sections() {
        let entries = vec![
            EducationEntry {
                degree: Some("MSc Computer Science".to_string()),
                institution: Some("U of T".to_string()),
                start_year: Some("2019".to_string()),
                end_year: Some("2021".to_string()),
                major: Some("Systems".to_string()),
                description: None,
            },
            EducationEntry {
                degree: Some("BSc".to_string()),
                ..Default::default()
            },
        ];

        let html = render_education_timeline(&entries);
        assert_eq!(html.matches("class=\"timeline-item fade-in\"").count(), 2);
        assert!(html.contains("<h3>MSc Computer Science</h3>"));
        assert!(html.contains("<span class=\"timeline-date\">2019 - 2021</span>"));
        assert!(html.contains("<p><strong>Major:</strong> Systems</p>"));
        assert_eq!(html.matches("Major:").count(), 1);
        assert_eq!(html.matches("timeline-company").count(), 1);
    }

    #[test]
    fn test_skills_list_skips_unnamed() {
        let skills = vec![
            SkillEntry {
                name: Some("Rust".to_string()),
            },
            SkillEntry { name: None },
            SkillEntry {
                name: Some("C & C++".to_string()),
            },
        ];
        assert_eq!(
            render_skills_list(&skills),
            "<ul class=\"skills-list\">\n<li>Rust</li>\n<li>C &amp; C++</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_experience_lists_and_present() {
        let entries = vec![ExperienceEntry {
            position: Some("Engineer".to_string()),
            company: Some("Acme".to_string()),
            start_date: Some("2021-03-01".to_string()),
            responsibilities: Some("Build things\n  \nShip things\n".to_string()),
            ..Default::default()
        }];

        let html = render_experience_timeline(&entries);
        assert!(html.contains("<span class=\"timeline-date\">2021-03-01 - Present</span>"));
        assert!(html.contains("<h4>Responsibilities:</h4>"));
        assert!(html.contains("<li>Build things</li>\n<li>Ship things</li>"));
        assert!(!html.contains("Key Achievements"));
    }

    #[test]
    fn test_gallery_item_without_image_or_description() {
        let items = vec![GalleryItem {
            title: Some("Sunset".to_string()),
            description: None,
            image: None,
        }];

        let html = render_gallery(&items, "/strapi", false);
        assert!(html.contains("<img src=\"\" alt=\"Sunset\" loading=\"lazy\">"));
        assert!(html.contains("<p></p>"));
        assert!(!html.contains("<h3>"));

        let with_titles = render_gallery(&items, "/strapi", true);
        assert!(with_titles.contains("<h3>Sunset</h3>"));
    }

    #[test]
    fn test_contact_details_fall_back_to_na() {
        let profile = Profile {
            email: Some("ada@example.com".to_string()),
            ..Default::default()
        };
        let html = render_contact_details(&profile);

        assert_eq!(html.matches("contact-detail-item").count(), 4);
        assert!(html.contains("<span>ada@example.com</span>"));
        assert_eq!(html.matches("<span>N/A</span>").count(), 3);
    }
}
