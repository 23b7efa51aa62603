use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_router::{components::A, hooks::*};
use server_fn::codec::GetUrl;

#[cfg(feature = "ssr")]
use crate::blog::get_article_body;
use crate::blog::{
    categories, featured_posts, find_post, format_date, posts_in_category, BlogPost,
    CategoryFilter, GLOBAL_ARTICLE_CACHE, POSTS,
};
use crate::icon::Icon;
use crate::site::SITE;

use super::icon::Glyph;
use super::NotFound;

#[component]
pub fn BlogHome() -> impl IntoView {
    let query = use_query_map();
    let filter =
        Memo::new(move |_| CategoryFilter::from_query(query.get().get("category").as_deref()));
    let is_all = move || filter.get() == CategoryFilter::All;

    view! {
        <Title text="Blog" />
        <div class="min-h-screen py-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h1 class="text-5xl font-bold mb-6">
                        "My " <span class="gradient-text">"Blog"</span>
                    </h1>
                    <p class="text-xl text-gray-400 max-w-3xl mx-auto">
                        "Thoughts, tutorials, and insights about web development, technology trends, and everything I learn along my coding journey."
                    </p>
                </div>

                <Show when=is_all>
                    <section class="mb-20">
                        <h2 class="text-3xl font-bold mb-12">"Featured Posts"</h2>
                        <div class="grid lg:grid-cols-2 gap-8">
                            {featured_posts()
                                .0
                                .into_iter()
                                .map(|post| view! { <FeaturedPostCard post /> })
                                .collect_view()}
                        </div>
                    </section>
                </Show>

                <section class="mb-12">
                    <div class="flex flex-wrap gap-3 justify-center">
                        <CategoryChip label="All Posts" target=CategoryFilter::All current=filter />
                        {categories(POSTS)
                            .into_iter()
                            .map(|c| {
                                view! {
                                    <CategoryChip
                                        label=c
                                        target=CategoryFilter::Named(c.to_string())
                                        current=filter
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section>
                    <h2 class="text-3xl font-bold mb-12">
                        {move || match filter.get() {
                            CategoryFilter::All => "All Posts".to_string(),
                            CategoryFilter::Named(c) => format!("{c} Posts"),
                        }}
                    </h2>
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {move || {
                            let filter = filter.get();
                            // the featured section already shows the rest
                            let posts = match filter {
                                CategoryFilter::All => featured_posts().1,
                                CategoryFilter::Named(_) => posts_in_category(POSTS, &filter),
                            };
                            if posts.is_empty() {
                                Either::Left(
                                    view! {
                                        <p class="text-gray-400 col-span-full text-center">
                                            "No posts in this category yet."
                                        </p>
                                    },
                                )
                            } else {
                                Either::Right(
                                    posts
                                        .into_iter()
                                        .map(|post| view! { <PostCard post /> })
                                        .collect_view(),
                                )
                            }
                        }}
                    </div>
                </section>

                <Newsletter />
            </div>
        </div>
    }
}

#[component]
fn CategoryChip(
    label: &'static str,
    target: CategoryFilter,
    current: Memo<CategoryFilter>,
) -> impl IntoView {
    let href = target.href();
    let class = move || {
        if current.get() == target {
            "bg-primary text-white px-4 py-2 rounded-full text-sm font-medium"
        } else {
            "bg-gray-800 text-gray-300 hover:bg-gray-700 px-4 py-2 rounded-full text-sm font-medium transition-colors duration-200"
        }
    };
    view! {
        <A href=href attr:class=class>
            {label}
        </A>
    }
}

/// Long-form date, or a visible error instead of a guessed rendering.
#[component]
fn PostDate(date: &'static str) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| {
            view! {
                <span class="text-red-400">
                    {move || {
                        errors
                            .get()
                            .into_iter()
                            .map(|(_, e)| e.to_string())
                            .collect::<Vec<_>>()
                            .join(", ")
                    }}
                </span>
            }
        }>{format_date(date).map(|d| view! { <span>{d}</span> })}</ErrorBoundary>
    }
}

#[component]
fn FeaturedPostCard(post: &'static BlogPost) -> impl IntoView {
    view! {
        <A href=post.href()>
            <article
                data-card="featured-post"
                class="glass-effect rounded-xl overflow-hidden group hover:scale-105 transition-all duration-300 h-full"
            >
                <div class="relative h-64">
                    <div class=format!(
                        "w-full h-full bg-gradient-to-br {} flex items-center justify-center group-hover:scale-110 transition-transform duration-300",
                        post.gradient,
                    )>
                        <Glyph icon=post.icon classes="text-white text-6xl opacity-40" />
                    </div>
                    <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent" />
                    <div class="absolute top-4 left-4">
                        <span class="bg-primary px-3 py-1 rounded-full text-white text-sm font-medium">
                            {post.category}
                        </span>
                    </div>
                </div>
                <div class="p-8">
                    <h3 class="text-2xl font-bold mb-3 group-hover:text-primary transition-colors duration-200">
                        {post.title}
                    </h3>
                    <p class="text-gray-400 mb-4 leading-relaxed">{post.excerpt}</p>
                    <div class="flex items-center gap-4 text-sm text-gray-500">
                        <div class="flex items-center gap-1">
                            <Glyph icon=Icon::Calendar />
                            <PostDate date=post.date />
                        </div>
                        <div class="flex items-center gap-1">
                            <Glyph icon=Icon::Clock />
                            <span>{post.read_time}</span>
                        </div>
                    </div>
                </div>
            </article>
        </A>
    }
}

#[component]
fn PostCard(post: &'static BlogPost) -> impl IntoView {
    view! {
        <A href=post.href()>
            <article
                data-card="post"
                class="glass-effect rounded-xl overflow-hidden group hover:scale-105 transition-all duration-300 h-full"
            >
                <div class="relative h-48">
                    <div class=format!(
                        "w-full h-full bg-gradient-to-br {} flex items-center justify-center group-hover:scale-110 transition-transform duration-300",
                        post.gradient,
                    )>
                        <Glyph icon=post.icon classes="text-white text-4xl opacity-40" />
                    </div>
                    <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent" />
                    <div class="absolute top-4 left-4">
                        <span class="bg-primary px-2 py-1 rounded text-white text-xs font-medium">
                            {post.category}
                        </span>
                    </div>
                </div>
                <div class="p-6">
                    <h3 class="text-lg font-semibold mb-2 group-hover:text-primary transition-colors duration-200 line-clamp-2">
                        {post.title}
                    </h3>
                    <p class="text-gray-400 text-sm mb-4 line-clamp-3">{post.excerpt}</p>
                    <div class="flex items-center justify-between text-xs text-gray-500">
                        <div class="flex items-center gap-1">
                            <Glyph icon=Icon::Calendar />
                            <PostDate date=post.date />
                        </div>
                        <div class="flex items-center gap-1">
                            <Glyph icon=Icon::Clock />
                            <span>{post.read_time}</span>
                        </div>
                    </div>
                </div>
            </article>
        </A>
    }
}

/// Signup is not wired to any backend; the form only renders.
#[component]
fn Newsletter() -> impl IntoView {
    view! {
        <section class="mt-20 text-center">
            <div class="glass-effect rounded-2xl p-12 max-w-2xl mx-auto">
                <div class="mb-6">
                    <div class="bg-gradient-to-r from-primary to-secondary rounded-full w-16 h-16 flex items-center justify-center mx-auto mb-4">
                        <Glyph icon=Icon::BookOpen classes="text-white text-3xl" />
                    </div>
                </div>
                <h3 class="text-3xl font-bold mb-4">"Stay Updated"</h3>
                <p class="text-gray-400 mb-8">
                    "Subscribe to my newsletter to get the latest posts and updates delivered straight to your inbox."
                </p>
                <form
                    class="flex flex-col sm:flex-row gap-4 max-w-md mx-auto"
                    title="Newsletter signup is not available yet"
                    on:submit=|ev| ev.prevent_default()
                >
                    <input
                        type="email"
                        placeholder="Enter your email"
                        disabled=true
                        class="flex-1 px-4 py-3 bg-gray-800 border border-gray-700 rounded-lg focus:outline-none focus:ring-2 focus:ring-primary"
                    />
                    <button
                        type="submit"
                        disabled=true
                        class="bg-primary text-white px-6 py-3 rounded-lg font-semibold opacity-60 cursor-not-allowed"
                    >
                        "Subscribe"
                    </button>
                </form>
            </div>
        </section>
    }
}

#[server(input = GetUrl)]
pub async fn get_article_body_server(slug: String) -> Result<Option<String>, ServerFnError> {
    get_article_body(&slug).map_err(|e| {
        tracing::warn!(%slug, "couldn't load article body: {e}");
        ServerFnError::new(e.to_string())
    })
}

#[component]
pub fn BlogArticle() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();

    move || match find_post(&slug()) {
        Ok(post) => Either::Left(view! { <Article post /> }),
        Err(e) => {
            log::warn!("{e}");
            Either::Right(view! { <NotFound /> })
        }
    }
}

#[component]
fn Article(post: &'static BlogPost) -> impl IntoView {
    let body = Resource::new(
        move || post.slug.to_string(),
        move |slug| async move {
            let cache = &*GLOBAL_ARTICLE_CACHE;
            if let Some(b) = cache.get(&slug) {
                return Ok((*b).clone());
            }
            let body = get_article_body_server(slug.clone()).await;
            // the server fills the cache itself
            #[cfg(feature = "hydrate")]
            if let Ok(b) = &body {
                cache.insert(slug, b.clone());
            }
            body
        },
    );
    let share_href = format!(
        "mailto:?subject={}&body={}{}",
        post.title.replace(' ', "%20"),
        SITE.url,
        post.href()
    );

    view! {
        <Title text=post.title />
        <div class="min-h-screen py-20">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <A
                    href="/blog"
                    attr:class="inline-flex items-center gap-2 text-primary hover:text-indigo-400 transition-colors duration-200 mb-8"
                >
                    <Glyph icon=Icon::ArrowLeft />
                    "Back to Blog"
                </A>

                <header class="mb-12">
                    <div class="mb-6">
                        <span class="bg-primary px-3 py-1 rounded-full text-white text-sm font-medium">
                            {post.category}
                        </span>
                    </div>
                    <h1 class="text-4xl md:text-5xl font-bold mb-6 leading-tight">{post.title}</h1>
                    <div class="flex flex-wrap items-center gap-6 text-gray-400 mb-8">
                        <div class="flex items-center gap-2">
                            <Glyph icon=Icon::Calendar />
                            <PostDate date=post.date />
                        </div>
                        <div class="flex items-center gap-2">
                            <Glyph icon=Icon::Clock />
                            <span>{post.read_time}</span>
                        </div>
                        <div class="flex items-center gap-2">
                            <Glyph icon=Icon::Tag />
                            <span>{post.tags.join(", ")}</span>
                        </div>
                    </div>
                    <div class="relative h-64 md:h-96 rounded-xl overflow-hidden mb-8">
                        <div class=format!(
                            "w-full h-full bg-gradient-to-br {} flex items-center justify-center",
                            post.gradient,
                        )>
                            <Glyph icon=post.icon classes="text-white text-7xl opacity-30" />
                        </div>
                        <div class="absolute inset-0 bg-gradient-to-t from-black/30 to-transparent" />
                    </div>
                </header>

                <article class="prose prose-invert max-w-none">
                    <Suspense fallback=move || {
                        view! {
                            <div class="space-y-4">
                                <div class="loading-skeleton h-8 rounded"></div>
                                <div class="loading-skeleton h-6 rounded w-3/4"></div>
                                <div class="loading-skeleton h-6 rounded w-2/3"></div>
                            </div>
                        }
                    }>
                        {move || Suspend::new(async move {
                            body.await
                                .map(|body| match body {
                                    Some(html) => Either::Left(view! { <div inner_html=html></div> }),
                                    None => {
                                        Either::Right(
                                            view! {
                                                <p class="text-xl text-gray-300 mb-8 leading-relaxed">
                                                    {post.excerpt}
                                                </p>
                                            },
                                        )
                                    }
                                })
                        })}
                    </Suspense>
                </article>

                <div class="border-t border-gray-800 pt-8 mt-12">
                    <div class="flex flex-col md:flex-row justify-between items-start md:items-center gap-6">
                        <div>
                            <h3 class="text-lg font-semibold mb-2">"Share this article"</h3>
                            <a
                                href=share_href
                                class="inline-flex items-center gap-2 bg-gray-800 hover:bg-gray-700 px-4 py-2 rounded-lg transition-colors duration-200"
                            >
                                <Glyph icon=Icon::Share />
                                "Share"
                            </a>
                        </div>
                        <div class="flex flex-col sm:flex-row gap-4">
                            <A
                                href="/blog"
                                attr:class="bg-gray-800 hover:bg-gray-700 text-white px-6 py-3 rounded-lg font-medium transition-colors duration-200"
                            >
                                "More Articles"
                            </A>
                            <a
                                href="/contact"
                                class="bg-primary hover:bg-indigo-600 text-white px-6 py-3 rounded-lg font-medium transition-colors duration-200"
                            >
                                "Get in Touch"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render_date(date: &'static str) -> String {
        Owner::new_root(None).with(|| view! { <PostDate date /> }.to_html())
    }

    #[test]
    fn test_post_date_renders_long_form() {
        let html = render_date("2024-03-15");
        assert!(html.contains("March 15, 2024"));
        assert!(!html.contains("text-red-400"));
    }

    #[test]
    fn test_malformed_post_date_shows_error() {
        for date in ["2024-13-40", "15/03/2024", ""] {
            let html = render_date(date);
            assert!(html.contains("text-red-400"), "{date:?}: {html}");
            assert!(html.contains("Invalid post date"), "{date:?}: {html}");
            assert!(!html.contains("2024,"), "{date:?}: {html}");
        }
    }
}
