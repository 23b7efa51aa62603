use axum::Router;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tracing_subscriber::EnvFilter;

use crate::app::{shell, App};

/// `RUST_LOG` wins, otherwise everything at info.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub fn router(leptos_options: LeptosOptions) -> Router {
    // Generate the list of routes in the Leptos App
    let routes = generate_route_list(App);

    Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn get(path: &str) -> (StatusCode, String) {
        let options = LeptosOptions::builder()
            .output_name("portfolio-site")
            .build();
        let res = router(options)
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_every_page_has_one_nav_and_one_footer() {
        for path in [
            "/",
            "/about",
            "/projects",
            "/blog",
            "/blog/complete-guide-tailwind-css",
        ] {
            let (status, html) = get(path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert_eq!(html.matches("<nav").count(), 1, "{path}");
            assert_eq!(html.matches("<footer").count(), 1, "{path}");
        }
    }

    #[tokio::test]
    async fn test_menu_renders_closed() {
        let (_, html) = get("/").await;
        assert!(!html.contains("id=\"mobile-menu\""));
        // desktop row always has every link
        for href in ["\"/about\"", "\"/projects\"", "\"/blog\"", "\"/contact\""] {
            assert!(html.contains(&format!("href={href}")), "{href}");
        }
    }

    #[tokio::test]
    async fn test_blog_index_cards() {
        let (status, html) = get("/blog").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(html.matches("data-card=\"featured-post\"").count(), 2);
        assert_eq!(html.matches("data-card=\"post\"").count(), 4);
        assert!(html.contains("March 15, 2024"));
    }

    #[tokio::test]
    async fn test_blog_category_filter() {
        let (status, html) = get("/blog?category=React").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(html.matches("data-card=\"featured-post\"").count(), 0);
        assert_eq!(html.matches("data-card=\"post\"").count(), 1);
    }

    #[tokio::test]
    async fn test_blog_category_query_is_decoded() {
        let (status, html) = get("/blog?category=Web%20Dev%20%26%20Tools").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Web Dev &amp; Tools Posts"));
        assert!(html.contains("No posts in this category yet."));
        assert_eq!(html.matches("data-card=\"post\"").count(), 0);
    }

    #[tokio::test]
    async fn test_home_preview_uses_taglines() {
        let (status, html) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Real-time data visualization with interactive charts"));
        assert!(html.contains(">D3.js<"));
        // the full description only lives on /projects
        assert!(!html.contains("custom reports, and data export"));
    }

    #[tokio::test]
    async fn test_projects_cards() {
        let (status, html) = get("/projects").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(html.matches("data-card=\"featured-project\"").count(), 3);
        assert_eq!(html.matches("data-card=\"project\"").count(), 3);
    }

    #[tokio::test]
    async fn test_article_is_keyed_on_slug() {
        let (status, html) = get("/blog/mastering-typescript-better-code-quality").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Mastering TypeScript for Better Code Quality"));
        assert!(!html.contains("Building Scalable React Applications"));

        let (status, html) = get("/blog/building-scalable-react-applications-nextjs-14").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Setting Up Your Project"));
    }

    #[tokio::test]
    async fn test_unknown_slug_is_404() {
        let (status, html) = get("/blog/not-a-real-post").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(html.contains("Page not found"));
    }
}
