use leptos::{either::Either, prelude::*};
use leptos_router::{components::A, hooks::use_location};

use crate::icon::Icon;
use crate::nav::{MenuState, NAV_ITEMS};
use crate::site::SITE;

use super::icon::Glyph;

/// Collapses the mobile panel; fired by every link inside it.
fn close_menu(set_menu: WriteSignal<MenuState>) -> Callback<()> {
    Callback::new(move |_| set_menu.update(MenuState::close))
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu, set_menu) = signal(MenuState::default());
    let pathname = use_location().pathname;

    let toggle_menu = move |_| {
        set_menu.update(MenuState::toggle);
        log::debug!("mobile menu open: {}", menu.get_untracked().is_open());
    };
    let on_navigate = close_menu(set_menu);

    view! {
        <nav id="site-nav" class="fixed top-0 w-full z-50 glass-effect">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        <A href="/" attr:class="text-2xl font-bold gradient-text">
                            {SITE.owner}
                        </A>
                    </div>

                    // wide viewports always show every link
                    <div class="hidden md:block">
                        <DesktopLinks pathname />
                    </div>

                    <div class="md:hidden">
                        <button
                            type="button"
                            class="text-text hover:text-primary p-2"
                            aria-controls="mobile-menu"
                            aria-label="Toggle navigation menu"
                            aria-expanded=move || menu.get().is_open().to_string()
                            on:click=toggle_menu
                        >
                            {move || {
                                if menu.get().is_open() {
                                    Either::Left(view! { <Glyph icon=Icon::X classes="text-2xl" /> })
                                } else {
                                    Either::Right(
                                        view! { <Glyph icon=Icon::Menu classes="text-2xl" /> },
                                    )
                                }
                            }}
                        </button>
                    </div>
                </div>

                <Show when=move || menu.get().is_open()>
                    <div id="mobile-menu" class="md:hidden">
                        <MobileLinks pathname on_navigate />
                    </div>
                </Show>
            </div>
        </nav>
    }
}

#[component]
fn DesktopLinks(#[prop(into)] pathname: Signal<String>) -> impl IntoView {
    view! {
        <div class="ml-10 flex items-baseline space-x-4">
            {NAV_ITEMS
                .iter()
                .map(|item| {
                    view! {
                        <a
                            href=item.href
                            aria-current=move || item.is_active(&pathname.get()).then_some("page")
                            class="text-text hover:text-primary aria-[current=page]:text-primary px-3 py-2 rounded-md text-sm font-medium transition-colors duration-200"
                        >
                            {item.name}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn MobileLinks(
    #[prop(into)] pathname: Signal<String>,
    on_navigate: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3 bg-gray-800 rounded-lg mt-2">
            {NAV_ITEMS
                .iter()
                .map(|item| {
                    view! {
                        <a
                            href=item.href
                            aria-current=move || item.is_active(&pathname.get()).then_some("page")
                            class="text-text hover:text-primary block px-3 py-2 rounded-md text-base font-medium transition-colors duration-200"
                            on:click=move |_| on_navigate.run(())
                        >
                            {item.name}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render(view: impl FnOnce() -> AnyView) -> String {
        Owner::new_root(None).with(|| view().to_html())
    }

    #[test]
    fn test_navigating_from_panel_closes_menu() {
        Owner::new_root(None).with(|| {
            let (menu, set_menu) = signal(MenuState::default());
            set_menu.update(MenuState::toggle);
            assert!(menu.get_untracked().is_open());

            close_menu(set_menu).run(());
            assert!(!menu.get_untracked().is_open());
        });
    }

    #[test]
    fn test_link_rows_mark_one_active_item() {
        let desktop = render(|| {
            view! { <DesktopLinks pathname=Signal::stored("/blog/x".to_string()) /> }.into_any()
        });
        let mobile = render(|| {
            let on_navigate = Callback::new(|_| {});
            view! { <MobileLinks pathname=Signal::stored("/blog/x".to_string()) on_navigate /> }
                .into_any()
        });

        for html in [desktop, mobile] {
            assert_eq!(html.matches("<a").count(), NAV_ITEMS.len());
            assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
            for item in &NAV_ITEMS {
                assert!(html.contains(&format!("href=\"{}\"", item.href)), "{}", item.name);
            }
        }
    }
}
