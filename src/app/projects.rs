use leptos::prelude::*;
use leptos_meta::Title;

use crate::icon::Icon;
use crate::projects::{featured_projects, ProjectEntry, COMPACT_TECH_LIMIT};

use super::icon::Glyph;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let (featured, other) = featured_projects();

    view! {
        <Title text="Projects" />
        <div class="min-h-screen py-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h1 class="text-5xl font-bold mb-6">
                        "My " <span class="gradient-text">"Projects"</span>
                    </h1>
                    <p class="text-xl text-gray-400 max-w-3xl mx-auto">
                        "A collection of my recent work showcasing various technologies and solutions. Each project represents a unique challenge and learning experience."
                    </p>
                </div>

                <section class="mb-20">
                    <h2 class="text-3xl font-bold mb-12">"Featured Projects"</h2>
                    <div class="space-y-12">
                        {featured
                            .into_iter()
                            .enumerate()
                            .map(|(index, project)| {
                                view! { <FeaturedProject project flipped={index % 2 == 1} /> }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section>
                    <h2 class="text-3xl font-bold mb-12">"Other Projects"</h2>
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {other
                            .into_iter()
                            .map(|project| view! { <ProjectCard project /> })
                            .collect_view()}
                    </div>
                </section>
            </div>
        </div>
    }
}

/// Two-column row; every other row puts the artwork on the right.
#[component]
fn FeaturedProject(project: &'static ProjectEntry, flipped: bool) -> impl IntoView {
    let (row, art, text) = if flipped {
        ("lg:grid-flow-col-dense", "lg:col-start-2", "lg:col-start-1")
    } else {
        ("", "", "")
    };

    view! {
        <div
            data-card="featured-project"
            class=format!("grid lg:grid-cols-2 gap-8 items-center {row}")
        >
            <div class=format!("relative h-80 rounded-xl overflow-hidden group {art}")>
                <div class=format!(
                    "w-full h-full bg-gradient-to-br {} flex items-center justify-center group-hover:scale-105 transition-transform duration-300",
                    project.gradient,
                )>
                    <Glyph icon=project.icon classes="text-white text-6xl opacity-50" />
                </div>
                <div class="absolute inset-0 bg-gradient-to-t from-black/50 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300" />
            </div>

            <div class=format!("space-y-6 {text}")>
                <h3 class="text-2xl font-bold">{project.title}</h3>
                <p class="text-gray-400 text-lg leading-relaxed">{project.description}</p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="bg-primary/20 text-primary px-3 py-1 rounded-full text-sm font-medium">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4">
                    <a
                        href=project.github_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 text-gray-300 hover:text-white transition-colors duration-200"
                    >
                        <Glyph icon=Icon::Github />
                        "View Code"
                    </a>
                    <a
                        href=project.live_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 text-primary hover:text-indigo-400 transition-colors duration-200"
                    >
                        <Glyph icon=Icon::ExternalLink />
                        "Live Demo"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static ProjectEntry) -> impl IntoView {
    let (techs, hidden) = project.tech_preview(COMPACT_TECH_LIMIT);

    view! {
        <div
            data-card="project"
            class="glass-effect rounded-xl overflow-hidden group hover:scale-105 transition-all duration-300"
        >
            <div class="relative h-48">
                <div class=format!(
                    "w-full h-full bg-gradient-to-br {} flex items-center justify-center group-hover:scale-110 transition-transform duration-300",
                    project.gradient,
                )>
                    <Glyph icon=project.icon classes="text-white text-5xl opacity-50" />
                </div>
                <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent" />
                <div class="absolute bottom-4 left-4 right-4">
                    <div class="flex gap-3">
                        <a
                            href=project.github_url
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="View Code"
                            class="p-2 bg-black/30 backdrop-blur-sm rounded-full text-white hover:bg-black/50 transition-colors duration-200"
                        >
                            <Glyph icon=Icon::Github />
                        </a>
                        <a
                            href=project.live_url
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="Live Demo"
                            class="p-2 bg-black/30 backdrop-blur-sm rounded-full text-white hover:bg-black/50 transition-colors duration-200"
                        >
                            <Glyph icon=Icon::ExternalLink />
                        </a>
                    </div>
                </div>
            </div>

            <div class="p-6">
                <h3 class="text-xl font-semibold mb-3">{project.title}</h3>
                <p class="text-gray-400 mb-4 text-sm leading-relaxed">{project.description}</p>
                <div class="flex flex-wrap gap-1">
                    {techs
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="text-xs bg-gray-800 text-gray-300 px-2 py-1 rounded">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                    {(hidden > 0)
                        .then(|| {
                            view! {
                                <span class="text-xs bg-gray-800 text-gray-300 px-2 py-1 rounded">
                                    {format!("+{hidden}")}
                                </span>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
