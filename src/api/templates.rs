//! HTML templates.

use askama::Template;

use super::handlers::SERVICE_VERSION;

/// Owner shown on the portfolio page.
pub const PAGE_OWNER: &str = "Angel Adalberto";
/// Title of the portfolio page.
pub const PAGE_TITLE: &str = "DevOps Portfolio";

#[derive(Template, Debug, Clone)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub owner: &'static str,
    pub title: &'static str,
    pub version: &'static str,
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self {
            owner: PAGE_OWNER,
            title: PAGE_TITLE,
            version: SERVICE_VERSION,
        }
    }
}
