//! Content API paths, relative to the configured base URL.

pub const PROFILE: &str = "/profile";
pub const EDUCATIONS: &str = "/educations?_sort=startYear:DESC";
pub const SKILLS: &str = "/skills";
pub const EXPERIENCES: &str = "/experiences";
pub const GALLERIES: &str = "/galleries";
pub const CONTACTS: &str = "/contacts";
