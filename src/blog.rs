use chrono::NaiveDate;
use dashmap::DashMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::sync::LazyLock;
use thiserror::Error;

use crate::featured::{partition_featured, Featured};
use crate::icon::Icon;

#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};
#[cfg(feature = "ssr")]
use rust_embed::Embed;

#[cfg(feature = "ssr")]
use crate::highlight::highlight;

/// Rendered article bodies keyed by slug. `None` marks a post that has no
/// long-form body, so we don't ask again.
pub static GLOBAL_ARTICLE_CACHE: LazyLock<DashMap<String, Option<String>>> =
    LazyLock::new(DashMap::new);

#[cfg(feature = "ssr")]
#[derive(Embed)]
#[folder = "articles"]
struct Articles;

#[derive(Debug, Clone, Copy)]
pub struct BlogPost {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub icon: Icon,
    pub gradient: &'static str,
    /// `YYYY-MM-DD`
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
    pub slug: &'static str,
    pub featured: bool,
    pub tags: &'static [&'static str],
}

impl Featured for BlogPost {
    fn is_featured(&self) -> bool {
        self.featured
    }
}

impl BlogPost {
    pub fn href(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    pub fn display_date(&self) -> Result<String, BlogError> {
        format_date(self.date)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlogError {
    #[error("Blog post not found: {0}")]
    NotFound(String),
    #[error("Invalid post date {input:?}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::format::ParseError,
    },
    #[error("Couldn't highlight code block: {0}")]
    Highlight(String),
}

pub fn parse_date(input: &str) -> Result<NaiveDate, BlogError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|source| BlogError::InvalidDate {
        input: input.to_string(),
        source,
    })
}

/// `2024-03-15` → `March 15, 2024`. Anything that isn't a calendar date in
/// that exact shape is rejected.
pub fn format_date(input: &str) -> Result<String, BlogError> {
    Ok(parse_date(input)?.format("%B %-d, %Y").to_string())
}

/// Distinct category labels in the order they first appear.
pub fn categories(posts: &[BlogPost]) -> Vec<&'static str> {
    let mut seen = Vec::new();
    for post in posts {
        if !seen.contains(&post.category) {
            seen.push(post.category);
        }
    }
    seen
}

/// Everything but RFC 3986 unreserved characters.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Blank or missing query values select every post.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::All,
            Some(c) => Self::Named(c.to_string()),
        }
    }

    pub fn matches(&self, post: &BlogPost) -> bool {
        match self {
            Self::All => true,
            Self::Named(c) => post.category == c.as_str(),
        }
    }

    pub fn href(&self) -> String {
        match self {
            Self::All => "/blog".to_string(),
            Self::Named(c) => format!(
                "/blog?category={}",
                utf8_percent_encode(c, QUERY_VALUE)
            ),
        }
    }
}

pub fn posts_in_category<'a>(posts: &'a [BlogPost], filter: &CategoryFilter) -> Vec<&'a BlogPost> {
    posts.iter().filter(|p| filter.matches(p)).collect()
}

pub fn featured_posts() -> (Vec<&'static BlogPost>, Vec<&'static BlogPost>) {
    partition_featured(POSTS)
}

pub fn find_post(slug: &str) -> Result<&'static BlogPost, BlogError> {
    POSTS
        .iter()
        .find(|p| p.slug == slug)
        .ok_or_else(|| BlogError::NotFound(slug.to_string()))
}

/// Markdown body of `slug` rendered to HTML, `Ok(None)` when the post only
/// has its excerpt.
#[cfg(feature = "ssr")]
pub fn get_article_body(slug: &str) -> Result<Option<String>, BlogError> {
    let post = find_post(slug)?;

    let cache = &*GLOBAL_ARTICLE_CACHE;
    if let Some(body) = cache.get(post.slug) {
        return Ok(body.clone());
    }
    tracing::debug!(slug = post.slug, "rendering article body");

    let body = match Articles::get(&format!("{}.md", post.slug)) {
        Some(file) => {
            let markdown = String::from_utf8_lossy(&file.data);
            let parser = Parser::new_ext(&markdown, Options::all());
            let events = highlight(parser)?;

            let mut html_output = String::new();
            pulldown_cmark::html::push_html(&mut html_output, events.into_iter());
            Some(html_output)
        }
        None => None,
    };
    cache.insert(post.slug.to_string(), body.clone());
    Ok(body)
}

pub const POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Building Scalable React Applications with Next.js 14",
        excerpt: "Explore the latest features in Next.js 14 and learn how to build performant, scalable React applications with server-side rendering and app router.",
        icon: Icon::Code,
        gradient: "from-blue-500 to-purple-600",
        date: "2024-03-15",
        read_time: "8 min read",
        category: "React",
        slug: "building-scalable-react-applications-nextjs-14",
        featured: true,
        tags: &["React", "Next.js", "Web Development"],
    },
    BlogPost {
        title: "Mastering TypeScript for Better Code Quality",
        excerpt: "Discover advanced TypeScript patterns and best practices that will help you write more maintainable and error-free code.",
        icon: Icon::Database,
        gradient: "from-purple-500 to-pink-600",
        date: "2024-03-10",
        read_time: "12 min read",
        category: "TypeScript",
        slug: "mastering-typescript-better-code-quality",
        featured: true,
        tags: &["TypeScript", "Code Quality"],
    },
    BlogPost {
        title: "The Complete Guide to Tailwind CSS",
        excerpt: "Learn how to leverage Tailwind CSS utility classes to build beautiful, responsive designs faster than ever before.",
        icon: Icon::Palette,
        gradient: "from-green-500 to-blue-600",
        date: "2024-03-05",
        read_time: "6 min read",
        category: "CSS",
        slug: "complete-guide-tailwind-css",
        featured: false,
        tags: &["CSS", "Tailwind CSS"],
    },
    BlogPost {
        title: "Optimizing Web Performance: A Developer's Guide",
        excerpt: "Essential techniques for improving your web application's performance, from code splitting to image optimization.",
        icon: Icon::Zap,
        gradient: "from-yellow-500 to-orange-600",
        date: "2024-02-28",
        read_time: "10 min read",
        category: "Performance",
        slug: "optimizing-web-performance-guide",
        featured: false,
        tags: &["Performance", "Web Vitals"],
    },
    BlogPost {
        title: "Understanding JavaScript Async/Await",
        excerpt: "A comprehensive look at asynchronous JavaScript, promises, and how to handle async operations effectively.",
        icon: Icon::Globe,
        gradient: "from-indigo-500 to-cyan-600",
        date: "2024-02-22",
        read_time: "7 min read",
        category: "JavaScript",
        slug: "understanding-javascript-async-await",
        featured: false,
        tags: &["JavaScript", "Async"],
    },
    BlogPost {
        title: "Building APIs with Node.js and Express",
        excerpt: "Step-by-step guide to creating robust RESTful APIs using Node.js, Express, and modern development practices.",
        icon: Icon::Smartphone,
        gradient: "from-emerald-500 to-teal-600",
        date: "2024-02-15",
        read_time: "9 min read",
        category: "Backend",
        slug: "building-apis-nodejs-express",
        featured: false,
        tags: &["Node.js", "Express", "REST"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15").unwrap(), "March 15, 2024");
        assert_eq!(format_date("2024-02-05").unwrap(), "February 5, 2024");
    }

    #[test]
    fn test_format_date_rejects_garbage() {
        for input in ["", "yesterday", "2024-13-01", "2024-02-30", "15/03/2024"] {
            match format_date(input) {
                Err(BlogError::InvalidDate { input: got, .. }) => assert_eq!(got, input),
                other => panic!("{input:?} should be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_all_post_dates_parse() {
        for post in POSTS {
            assert!(post.display_date().is_ok(), "{}", post.slug);
        }
    }

    #[test]
    fn test_categories_first_seen_order() {
        assert_eq!(
            categories(POSTS),
            ["React", "TypeScript", "CSS", "Performance", "JavaScript", "Backend"]
        );

        let mut doubled = POSTS.to_vec();
        doubled.extend_from_slice(POSTS);
        assert_eq!(categories(&doubled), categories(POSTS));
    }

    #[test]
    fn test_featured_split() {
        let (featured, regular) = featured_posts();
        assert_eq!(featured.len(), 2);
        assert_eq!(regular.len(), 4);
        assert_eq!(featured.len() + regular.len(), POSTS.len());

        let slugs = featured
            .iter()
            .chain(regular.iter())
            .map(|p| p.slug)
            .collect::<HashSet<_>>();
        assert_eq!(slugs.len(), POSTS.len());
    }

    #[test]
    fn test_all_filter_keeps_every_post_in_order() {
        let all = posts_in_category(POSTS, &CategoryFilter::All);
        let slugs = all.iter().map(|p| p.slug).collect::<Vec<_>>();
        let expected = POSTS.iter().map(|p| p.slug).collect::<Vec<_>>();
        assert_eq!(slugs, expected);
    }

    #[test]
    fn test_named_filter() {
        let react = posts_in_category(POSTS, &CategoryFilter::Named("React".to_string()));
        assert_eq!(react.len(), 1);
        assert_eq!(react[0].slug, "building-scalable-react-applications-nextjs-14");

        let none = posts_in_category(POSTS, &CategoryFilter::Named("Rust".to_string()));
        assert!(none.is_empty());
    }

    #[test]
    fn test_filter_from_query() {
        assert_eq!(CategoryFilter::from_query(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_query(Some("  ")), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_query(Some("CSS")),
            CategoryFilter::Named("CSS".to_string())
        );
        assert_eq!(CategoryFilter::All.href(), "/blog");
        assert_eq!(
            CategoryFilter::Named("CSS".to_string()).href(),
            "/blog?category=CSS"
        );
    }

    #[test]
    fn test_filter_href_is_percent_encoded() {
        let filter = CategoryFilter::Named("Tips & Tricks #1".to_string());
        assert_eq!(filter.href(), "/blog?category=Tips%20%26%20Tricks%20%231");

        // unreserved characters stay readable
        let filter = CategoryFilter::Named("Next.js_v-14~".to_string());
        assert_eq!(filter.href(), "/blog?category=Next.js_v-14~");

        for c in categories(POSTS) {
            let href = CategoryFilter::Named(c.to_string()).href();
            let value = href.trim_start_matches("/blog?category=");
            let decoded = percent_encoding::percent_decode_str(value).decode_utf8().unwrap();
            assert_eq!(decoded, c);
        }
    }

    #[test]
    fn test_slugs_are_unique() {
        let slugs = POSTS.iter().map(|p| p.slug).collect::<HashSet<_>>();
        assert_eq!(slugs.len(), POSTS.len());
    }

    #[test]
    fn test_find_post() {
        let post = find_post("complete-guide-tailwind-css").unwrap();
        assert_eq!(post.title, "The Complete Guide to Tailwind CSS");
        assert_eq!(post.href(), "/blog/complete-guide-tailwind-css");

        assert_eq!(
            find_post("no-such-post").unwrap_err(),
            BlogError::NotFound("no-such-post".to_string())
        );
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_article_body() {
        let body = get_article_body("building-scalable-react-applications-nextjs-14")
            .unwrap()
            .expect("the Next.js article has a body");
        assert!(body.contains("<h2>Setting Up Your Project</h2>"));
        assert!(body.contains("<blockquote>"));
        // fenced code is replaced by syntect's inline-styled <pre>
        assert!(body.contains("<pre style="));
        assert!(body.contains("npm"));

        // second call is served from the cache
        let again = get_article_body("building-scalable-react-applications-nextjs-14").unwrap();
        assert_eq!(again.as_deref(), Some(body.as_str()));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_article_without_body() {
        assert_eq!(get_article_body("building-apis-nodejs-express"), Ok(None));
        assert!(matches!(
            get_article_body("missing"),
            Err(BlogError::NotFound(_))
        ));
    }
}
