//! Authenticated view router
//!
//! Maps a path to exactly one leaf view. Flat routes only, no parameters.

/// Destinations available once logged in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Dashboard,
    Preferences,
    Messages,
    NotFound,
}

impl Route {
    /// Routes offered in the navigation bar
    pub const NAV: [Route; 3] = [Route::Dashboard, Route::Messages, Route::Preferences];

    /// Resolve a path. Unknown paths map to [`Route::NotFound`].
    pub fn resolve(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        match normalized {
            "" | "/dashboard" => Route::Dashboard,
            "/preferences" => Route::Preferences,
            "/messages" => Route::Messages,
            _ => Route::NotFound,
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::Preferences => "/preferences",
            Route::Messages => "/messages",
            Route::NotFound => "/404",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Preferences => "Preferences",
            Route::Messages => "Messages",
            Route::NotFound => "Not found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_paths() {
        assert_eq!(Route::resolve("/"), Route::Dashboard);
        assert_eq!(Route::resolve(""), Route::Dashboard);
        assert_eq!(Route::resolve("/dashboard"), Route::Dashboard);
        assert_eq!(Route::resolve("/preferences/"), Route::Preferences);
        assert_eq!(Route::resolve("  /messages "), Route::Messages);
    }

    #[test]
    fn test_resolve_unknown_paths() {
        assert_eq!(Route::resolve("/Messages"), Route::NotFound);
        assert_eq!(Route::resolve("/messages/3"), Route::NotFound);
        assert_eq!(Route::resolve("dashboard"), Route::NotFound);
    }

    #[test]
    fn test_paths_round_trip() {
        for route in Route::NAV {
            assert_eq!(Route::resolve(route.path()), route);
        }
    }
}
