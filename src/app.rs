mod about;
mod blog;
mod footer;
mod homepage;
mod icon;
mod nav;
mod projects;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::site::SITE;

use about::AboutPage;
use blog::{BlogArticle, BlogHome};
use footer::Footer;
use homepage::HomePage;
use nav::Navbar;
use projects::ProjectsPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="alternate"
                    type="application/rss+xml"
                    title="RSS"
                    href="/rss.xml"
                />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} | {} - {}", SITE.owner, SITE.headline) />
        <Meta name="description" content=SITE.description />

        <Router>
            <div class="min-h-screen flex flex-col bg-background text-text">
                <Navbar />
                <main class="pt-16 flex-grow">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/about") view=AboutPage />
                        <Route path=path!("/projects") view=ProjectsPage />
                        <Route path=path!("/blog") view=BlogHome />
                        <Route path=path!("/blog/:slug") view=BlogArticle />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

/// Rendered for unmatched routes and unknown blog slugs.
#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <div class="min-h-[60vh] flex flex-col items-center justify-center text-center px-4">
            <h1 class="text-5xl font-bold mb-6">
                "404 - " <span class="gradient-text">"Page not found"</span>
            </h1>
            <p class="text-xl text-gray-400 mb-8">
                "The page you are looking for doesn't exist or has moved."
            </p>
            <A
                href="/"
                attr:class="bg-primary hover:bg-indigo-600 text-white px-8 py-4 rounded-lg font-semibold transition-colors duration-200"
            >
                "Back to Home"
            </A>
        </div>
    }
}
