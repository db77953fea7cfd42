//! Route definitions. Pure path parsing/printing, no DOM or web_sys here.

/// Application routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// The login form (default route).
    #[default]
    Login,
    /// Admin landing page, the navigation target after a successful login.
    Admin,
    /// Anything else.
    NotFound,
}

impl AppRoute {
    /// Parses a URL path into a route.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/login" => Self::Login,
            "/admin" => Self::Admin,
            _ => Self::NotFound,
        }
    }

    /// The canonical URL path for this route.
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Admin => "/admin",
            Self::NotFound => "/404",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_parse() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/admin"), AppRoute::Admin);
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/admin/"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path(""), AppRoute::NotFound);
    }

    #[test]
    fn canonical_paths_round_trip() {
        for route in [AppRoute::Login, AppRoute::Admin] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
        assert_eq!(AppRoute::default(), AppRoute::Login);
    }
}
