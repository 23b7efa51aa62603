use leptos::prelude::*;
use leptos_router::components::A;

use crate::icon::Icon;
use crate::site::{build_year, SITE};

use super::icon::Glyph;

#[component]
pub fn Footer() -> impl IntoView {
    let socials = [
        (SITE.github, Icon::Github, "GitHub Profile"),
        (SITE.linkedin, Icon::Linkedin, "LinkedIn Profile"),
    ];

    view! {
        <footer class="border-t border-gray-800 bg-gray-900/60">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="flex flex-col md:flex-row justify-between items-center gap-6">
                    <div class="text-center md:text-left">
                        <A href="/" attr:class="text-xl font-bold gradient-text">
                            {SITE.owner}
                        </A>
                        <p class="text-gray-400 mt-2">{SITE.headline}</p>
                    </div>
                    <div class="flex items-center gap-4">
                        {socials
                            .into_iter()
                            .map(|(href, icon, label)| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=label
                                        class="text-gray-400 hover:text-primary text-2xl transition-colors duration-200"
                                    >
                                        <Glyph icon />
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href=format!("mailto:{}", SITE.email)
                            aria-label="Email"
                            class="text-gray-400 hover:text-primary text-2xl transition-colors duration-200"
                        >
                            <Glyph icon=Icon::Mail />
                        </a>
                        <a
                            href="/rss.xml"
                            aria-label="RSS Feed"
                            class="text-gray-400 hover:text-primary text-sm transition-colors duration-200"
                        >
                            "RSS"
                        </a>
                    </div>
                </div>
                <p class="text-center text-gray-500 text-sm mt-8">
                    {format!("© {} {}. All rights reserved.", build_year(), SITE.owner)}
                </p>
            </div>
        </footer>
    }
}
