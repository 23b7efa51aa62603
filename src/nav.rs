#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

impl NavItem {
    /// `/` only matches itself, every other item also matches its children,
    /// so `/blog/some-post` keeps "Blog" highlighted.
    pub fn is_active(&self, pathname: &str) -> bool {
        let pathname = match pathname.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        if self.href == "/" {
            return pathname == "/";
        }
        pathname == self.href
            || pathname
                .strip_prefix(self.href)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

pub static NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        name: "Home",
        href: "/",
    },
    NavItem {
        name: "About",
        href: "/about",
    },
    NavItem {
        name: "Projects",
        href: "/projects",
    },
    NavItem {
        name: "Blog",
        href: "/blog",
    },
    NavItem {
        name: "Contact",
        href: "/contact",
    },
];

/// Open/closed state of the collapsible menu shown on narrow viewports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a link from the mobile panel always collapses it.
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_even_toggles_restore_state() {
        for n in [0, 2, 4, 10] {
            let mut menu = MenuState::default();
            for _ in 0..n {
                menu.toggle();
            }
            assert_eq!(menu, MenuState::default(), "{n} toggles");
        }

        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        menu.toggle();
        assert!(menu.is_open());
    }

    #[test]
    fn test_close_from_any_state() {
        let mut menu = MenuState::default();
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());

        // closing an already closed menu is a no-op
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_nav_items_order() {
        let names = NAV_ITEMS.iter().map(|i| i.name).collect::<Vec<_>>();
        assert_eq!(names, ["Home", "About", "Projects", "Blog", "Contact"]);
    }

    #[test]
    fn test_active_item() {
        let [home, about, _, blog, _] = NAV_ITEMS;

        assert!(home.is_active("/"));
        assert!(home.is_active(""));
        assert!(!home.is_active("/about"));

        assert!(about.is_active("/about"));
        assert!(about.is_active("/about/"));
        assert!(!about.is_active("/aboutme"));

        assert!(blog.is_active("/blog"));
        assert!(blog.is_active("/blog/complete-guide-tailwind-css"));
        assert!(!blog.is_active("/"));
    }

    #[test]
    fn test_exactly_one_active_item_per_route() {
        for path in ["/", "/about", "/projects", "/blog", "/blog/x", "/contact"] {
            let active = NAV_ITEMS.iter().filter(|i| i.is_active(path)).count();
            assert_eq!(active, 1, "{path}");
        }
    }
}
