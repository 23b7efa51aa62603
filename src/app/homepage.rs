use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::icon::Icon;
use crate::profile::SERVICES;
use crate::projects::featured_projects;
use crate::site::SITE;

use super::icon::Glyph;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <div class="min-h-screen">
            <Hero />
            <Services />
            <ProjectsPreview />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="relative h-screen flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 z-0">
                <div class="w-full h-full bg-gradient-to-br from-indigo-900 via-purple-900 to-pink-900 opacity-80"></div>
            </div>
            <div class="relative z-10 text-center max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <h1 class="text-5xl md:text-7xl font-bold mb-6">
                    "Hi, I'm " <span class="gradient-text">{SITE.owner}</span>
                </h1>
                <p class="text-xl md:text-2xl mb-8 text-gray-300">
                    {SITE.headline} " & Creative Problem Solver"
                </p>
                <p class="text-lg mb-12 text-gray-400 max-w-2xl mx-auto">
                    "I craft digital experiences that combine beautiful design with robust functionality. Passionate about modern web technologies and creating solutions that make a difference."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                    <A
                        href="/projects"
                        attr:class="bg-primary hover:bg-indigo-600 text-white px-8 py-4 rounded-lg font-semibold flex items-center gap-2 transition-colors duration-200"
                    >
                        "View My Work"
                        <Glyph icon=Icon::ArrowRight />
                    </A>
                    <a
                        href="/contact"
                        class="border border-primary text-primary hover:bg-primary hover:text-white px-8 py-4 rounded-lg font-semibold transition-colors duration-200"
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Services() -> impl IntoView {
    view! {
        <section class="py-20 bg-gray-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold mb-4">"What I Do"</h2>
                    <p class="text-xl text-gray-400 max-w-2xl mx-auto">
                        "I specialize in creating modern, scalable web applications using cutting-edge technologies"
                    </p>
                </div>
                <div class="grid md:grid-cols-3 gap-8">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <div class="text-center p-8 glass-effect rounded-xl">
                                    <div class=format!(
                                        "{} rounded-full w-16 h-16 flex items-center justify-center mx-auto mb-4",
                                        service.accent,
                                    )>
                                        <Glyph icon=service.icon classes="text-white text-3xl" />
                                    </div>
                                    <h3 class="text-xl font-semibold mb-4">{service.title}</h3>
                                    <p class="text-gray-400">{service.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectsPreview() -> impl IntoView {
    let (featured, _) = featured_projects();

    view! {
        <section class="py-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold mb-4">"Featured Projects"</h2>
                    <p class="text-xl text-gray-400 max-w-2xl mx-auto">
                        "A selection of my recent work that showcases my skills and passion for development"
                    </p>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 mb-12">
                    {featured
                        .into_iter()
                        .map(|project| {
                            view! {
                                <div class="glass-effect rounded-xl overflow-hidden group">
                                    <div class=format!(
                                        "relative h-48 bg-gradient-to-br {}",
                                        project.gradient,
                                    )>
                                        <div class="absolute inset-0 flex items-center justify-center">
                                            <Glyph
                                                icon=project.icon
                                                classes="text-white text-5xl opacity-50"
                                            />
                                        </div>
                                    </div>
                                    <div class="p-6">
                                        <h3 class="text-xl font-semibold mb-2">{project.title}</h3>
                                        <p class="text-gray-400 mb-4">{project.tagline}</p>
                                        <div class="flex gap-2">
                                            {project
                                                .highlights
                                                .iter()
                                                .map(|tech| {
                                                    view! {
                                                        <span class="text-xs bg-primary px-2 py-1 rounded">
                                                            {*tech}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="text-center">
                    <A
                        href="/projects"
                        attr:class="bg-primary hover:bg-indigo-600 text-white px-8 py-4 rounded-lg font-semibold inline-flex items-center gap-2 transition-colors duration-200"
                    >
                        "View All Projects"
                        <Glyph icon=Icon::ArrowRight />
                    </A>
                </div>
            </div>
        </section>
    }
}
