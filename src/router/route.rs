/// Views reachable through navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Initpage,
    Room,
    Reception,
    Manager,
    Server,
    About,
    NotFound,
}

/// Path table, in navbar order
pub const ROUTES: &[(&str, Route)] = &[
    ("/", Route::Initpage),
    ("/room", Route::Room),
    ("/reception", Route::Reception),
    ("/manager", Route::Manager),
    ("/server", Route::Server),
    ("/about", Route::About),
];

impl Route {
    /// Resolve a location to a route.
    ///
    /// Query string, fragment and a trailing slash are ignored.
    /// Paths not in the table resolve to [`Route::NotFound`].
    pub fn resolve(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        ROUTES
            .iter()
            .find(|(p, _)| *p == path)
            .map(|(_, route)| *route)
            .unwrap_or(Route::NotFound)
    }

    /// Path the route is mounted at, `None` for NotFound
    pub fn path(&self) -> Option<&'static str> {
        ROUTES
            .iter()
            .find(|(_, route)| route == self)
            .map(|(p, _)| *p)
    }

    /// Segment the route is nested under in the router, relative to the layout
    pub fn segment(&self) -> &'static str {
        match self.path() {
            Some(path) => path.trim_start_matches('/'),
            None => "*any",
        }
    }

    /// Get display name
    pub fn title(&self) -> &'static str {
        match self {
            Route::Initpage => "Connect",
            Route::Room => "Room",
            Route::Reception => "Reception",
            Route::Manager => "Manager",
            Route::Server => "Server",
            Route::About => "About",
            Route::NotFound => "Not Found",
        }
    }
}
