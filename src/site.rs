/// Identity of the site owner, shared by the page chrome and the RSS feed.
#[derive(Debug, Clone, Copy)]
pub struct SiteInfo {
    pub owner: &'static str,
    pub initials: &'static str,
    pub headline: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub const SITE: SiteInfo = SiteInfo {
    owner: "John Doe",
    initials: "JD",
    headline: "Full Stack Developer",
    description: "Portfolio and blog of John Doe, a passionate full-stack developer specializing in React, Node.js, and modern web technologies.",
    url: "https://johndoe.dev",
    email: "hello@johndoe.dev",
    location: "San Francisco, CA",
    github: "https://github.com",
    linkedin: "https://linkedin.com",
};

/// RFC 3339 timestamp captured by the build script.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// Year of the build, used for the footer copyright line.
pub fn build_year() -> i32 {
    use chrono::{DateTime, Datelike};

    DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|t| t.year())
        .unwrap_or(2024)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_time_is_rfc3339() {
        assert!(chrono::DateTime::parse_from_rfc3339(BUILD_TIME).is_ok());
    }

    #[test]
    fn test_site_url_has_no_trailing_slash() {
        // links are built as format!("{}/blog/{}", SITE.url, slug)
        assert!(!SITE.url.ends_with('/'));
    }
}
