use leptos::prelude::*;
use leptos_meta::Title;

use crate::icon::Icon;
use crate::profile::{EXPERIENCE, SKILLS};
use crate::site::SITE;

use super::icon::Glyph;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <div class="min-h-screen py-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid lg:grid-cols-2 gap-12 items-center mb-20">
                    <div>
                        <h1 class="text-5xl font-bold mb-6">
                            "About " <span class="gradient-text">"Me"</span>
                        </h1>
                        <p class="text-xl text-gray-300 mb-6">
                            "I'm a passionate full-stack developer with over 5 years of experience creating digital solutions that make a real impact."
                        </p>
                        <p class="text-gray-400 mb-8">
                            "My journey in web development started with a curiosity about how things work on the internet. Today, I specialize in building scalable web applications using modern technologies like React, Next.js, and Node.js. I believe in writing clean, maintainable code and creating user experiences that are both beautiful and functional."
                        </p>
                        <div class="flex items-center gap-4 mb-8">
                            <Glyph icon=Icon::MapPin classes="text-primary" />
                            <span class="text-gray-300">{SITE.location}</span>
                        </div>
                        // no resume is published yet, the button is a placeholder
                        <button
                            type="button"
                            disabled=true
                            title="Resume download is not available yet"
                            class="bg-primary text-white px-6 py-3 rounded-lg font-semibold flex items-center gap-2 opacity-60 cursor-not-allowed"
                        >
                            <Glyph icon=Icon::Download />
                            "Download Resume"
                        </button>
                    </div>
                    <div class="relative">
                        <div class="glass-effect rounded-2xl p-8">
                            <div class="relative w-full h-96 rounded-xl overflow-hidden bg-gradient-to-br from-indigo-500 to-purple-600 flex items-center justify-center">
                                <div class="text-white text-6xl font-bold opacity-20">
                                    {SITE.initials}
                                </div>
                            </div>
                        </div>
                    </div>
                </div>

                <section class="mb-20">
                    <h2 class="text-3xl font-bold mb-12 text-center">"Technical Skills"</h2>
                    <div class="grid md:grid-cols-3 gap-8">
                        {SKILLS
                            .iter()
                            .map(|group| {
                                view! {
                                    <div class="glass-effect rounded-xl p-6">
                                        <h3 class="text-xl font-semibold mb-4 text-primary">
                                            {group.category}
                                        </h3>
                                        <div class="flex flex-wrap gap-2">
                                            {group
                                                .items
                                                .iter()
                                                .map(|skill| {
                                                    view! {
                                                        <span class="bg-gray-800 text-gray-300 px-3 py-1 rounded-full text-sm">
                                                            {*skill}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section>
                    <h2 class="text-3xl font-bold mb-12 text-center">"Work Experience"</h2>
                    <div class="space-y-8">
                        {EXPERIENCE
                            .iter()
                            .map(|job| {
                                view! {
                                    <div class="glass-effect rounded-xl p-8">
                                        <div class="flex flex-col md:flex-row md:justify-between md:items-start mb-4">
                                            <div>
                                                <h3 class="text-xl font-semibold text-primary mb-1">
                                                    {job.title}
                                                </h3>
                                                <p class="text-gray-300 font-medium">{job.company}</p>
                                            </div>
                                            <span class="text-gray-400 text-sm mt-2 md:mt-0">
                                                {job.period}
                                            </span>
                                        </div>
                                        <p class="text-gray-400">{job.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </div>
        </div>
    }
}
