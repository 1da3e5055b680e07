//! Route table for the single-page site.
//!
//! A route is a name drawn from a fixed set; unknown names and paths fall
//! back to `Home` silently. The browser URL uses clean paths: `/` for home,
//! `/<name>` for everything else.

/// The fixed set of views the router can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Portraits,
    Events,
    Babies,
    Booking,
    Admin,
}

impl Route {
    /// Navigation order for the link bar.
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Portraits,
        Route::Events,
        Route::Babies,
        Route::Booking,
        Route::Admin,
    ];

    /// Route name as used in history state and nav-link matching.
    pub fn name(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Portraits => "portraits",
            Route::Events => "events",
            Route::Babies => "babies",
            Route::Booking => "booking",
            Route::Admin => "admin",
        }
    }

    /// Link text for the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Portraits => "Portraits",
            Route::Events => "Events",
            Route::Babies => "Baby Pictures",
            Route::Booking => "Booking",
            Route::Admin => "Admin",
        }
    }

    /// Canonical path shown in the address bar.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Portraits => "/portraits",
            Route::Events => "/events",
            Route::Babies => "/babies",
            Route::Booking => "/booking",
            Route::Admin => "/admin",
        }
    }

    /// Look up a route by name; anything unrecognized is `Home`.
    pub fn from_name(name: &str) -> Route {
        match name {
            "portraits" => Route::Portraits,
            "events" => Route::Events,
            "babies" => Route::Babies,
            "booking" => Route::Booking,
            "admin" => Route::Admin,
            _ => Route::Home,
        }
    }

    /// Derive the route from a URL path. `/` and unknown paths map to `Home`.
    pub fn from_path(path: &str) -> Route {
        Route::from_name(path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_round_trips_through_its_path() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn every_route_round_trips_through_its_name() {
        for route in Route::ALL {
            assert_eq!(Route::from_name(route.name()), route);
        }
    }

    #[test]
    fn unknown_names_fall_back_to_home() {
        assert_eq!(Route::from_name("pricing"), Route::Home);
        assert_eq!(Route::from_name(""), Route::Home);
        assert_eq!(Route::from_path("/does-not-exist"), Route::Home);
    }

    #[test]
    fn home_uses_the_bare_slash() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::from_path("/"), Route::Home);
    }
}
