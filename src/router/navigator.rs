use std::cell::Cell;
use std::rc::Rc;

use leptos::*;

use super::lazy::LazyView;
use super::route::{Route, ROUTES};

/// Content of the About view, built on first visit
#[derive(Debug, Clone, PartialEq)]
pub struct AboutContent {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub views: Vec<(&'static str, &'static str)>,
}

impl AboutContent {
    fn load() -> Self {
        log::debug!("router: loading about view");
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            views: ROUTES
                .iter()
                .map(|(path, route)| (*path, route.title()))
                .collect(),
        }
    }
}

/// Tracks the active route and owns lazily loaded views
pub struct Navigator {
    current: Cell<Route>,
    about: LazyView<AboutContent>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: Cell::new(Route::Initpage),
            about: LazyView::new(),
        }
    }

    /// Resolve `path` and make it the active route
    pub fn navigate(&self, path: &str) -> Route {
        let route = Route::resolve(path);
        if route == Route::NotFound {
            log::warn!("router: no view for {}", path);
        }
        self.current.set(route);
        route
    }

    pub fn current(&self) -> Route {
        self.current.get()
    }

    /// About content, loaded on first call; the About view is its only caller
    pub fn about(&self) -> &AboutContent {
        self.about.get_or_load(AboutContent::load)
    }

    /// How many times the About view was loaded
    pub fn about_loads(&self) -> usize {
        self.about.load_count()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the navigator to the application
pub fn provide_navigator() -> Rc<Navigator> {
    let navigator = Rc::new(Navigator::new());
    provide_context(navigator.clone());
    navigator
}

/// Hook to access the navigator
pub fn use_navigator() -> Rc<Navigator> {
    use_context::<Rc<Navigator>>().expect("Navigator must be provided by a parent component")
}
