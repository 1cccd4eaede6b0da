//! Navigation locations and the triggers that select them

use std::fmt;

/// Top-level pages, one per registered location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Login,
    Signup,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Login, Page::Signup];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Login => "/login",
            Page::Signup => "/signup",
        }
    }

    /// Resolves a location. Unregistered paths are left to the caller.
    pub fn from_path(path: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.path() == path)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationTarget {
    pub page: Page,
    pub label: &'static str,
}

impl NavigationTarget {
    pub fn path(self) -> &'static str {
        self.page.path()
    }
}

/// Controls in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTrigger {
    Brand,
    Login,
    Signup,
}

impl NavTrigger {
    pub const ALL: [NavTrigger; 3] = [NavTrigger::Brand, NavTrigger::Login, NavTrigger::Signup];

    pub fn target(self) -> NavigationTarget {
        match self {
            NavTrigger::Brand => NavigationTarget {
                page: Page::Home,
                label: "Company Lens",
            },
            NavTrigger::Login => NavigationTarget {
                page: Page::Login,
                label: "Connexion",
            },
            NavTrigger::Signup => NavigationTarget {
                page: Page::Signup,
                label: "Inscription",
            },
        }
    }

    pub fn page(self) -> Page {
        self.target().page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_initial_page_is_home() {
        assert_eq!(Page::default(), Page::Home);
        assert_eq!(Page::from_path("/"), Some(Page::Home));
    }

    #[test]
    fn test_paths_resolve() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
        assert_eq!(Page::from_path("/pricing"), None);
        assert_eq!(Page::from_path("login"), None);
    }

    #[test]
    fn test_triggers_map_to_registered_pages() {
        for trigger in NavTrigger::ALL {
            let target = trigger.target();
            assert_eq!(Page::from_path(target.path()), Some(target.page));
            assert_eq!(trigger.page(), target.page);
        }
    }

    #[test]
    fn test_triggers_are_exclusive() {
        let pages: HashSet<Page> = NavTrigger::ALL.iter().map(|t| t.page()).collect();
        assert_eq!(pages.len(), NavTrigger::ALL.len());
        assert_eq!(NavTrigger::Brand.page(), Page::Home);
        assert_eq!(NavTrigger::Login.page(), Page::Login);
        assert_eq!(NavTrigger::Signup.page(), Page::Signup);
    }
}
