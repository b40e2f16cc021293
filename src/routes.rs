/// Pages reachable from the header. Each one is a contract with whatever
/// serves the rest of the application: a page must exist at [`AppRoute::path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    List,
    Add,
    Play,
}

impl AppRoute {
    /// Header order.
    pub const ALL: [AppRoute; 3] = [AppRoute::List, AppRoute::Add, AppRoute::Play];

    /// Suffix appended to the page origin when navigating.
    pub fn suffix(self) -> &'static str {
        match self {
            AppRoute::List => "",
            AppRoute::Add => "/add",
            AppRoute::Play => "/play",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            AppRoute::List => "/",
            other => other.suffix(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AppRoute::List => "List",
            AppRoute::Add => "Add",
            AppRoute::Play => "Play",
        }
    }
}

impl std::fmt::Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Full navigation target for `route`. Plain concatenation, the origin is
/// used as given.
pub fn navigation_target(origin: &str, route: AppRoute) -> String {
    format!("{origin}{}", route.suffix())
}
