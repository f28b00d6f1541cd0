//! Routes and the navigation bar's active-link rule.

/// Every path the portal links to. Only library and schedule are served
/// by content pages; upload and auth belong to other flows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Library,
    Upload,
    Schedule,
    Auth,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Library => "/library",
            Route::Upload => "/upload",
            Route::Schedule => "/schedule",
            Route::Auth => "/auth",
        }
    }
}

/// Links shown in the navigation bar, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Library,
    Upload,
    Schedule,
}

impl NavTarget {
    pub const ALL: [NavTarget; 3] = [NavTarget::Library, NavTarget::Upload, NavTarget::Schedule];

    pub fn route(self) -> Route {
        match self {
            NavTarget::Library => Route::Library,
            NavTarget::Upload => Route::Upload,
            NavTarget::Schedule => Route::Schedule,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavTarget::Library => "Bibliothèque",
            NavTarget::Upload => "Importer",
            NavTarget::Schedule => "Emploi du temps",
        }
    }
}

/// Link to highlight for `path`. Exact match only: `/library/` or
/// `/library?x` highlight nothing.
pub fn active_target(path: &str) -> Option<NavTarget> {
    NavTarget::ALL.into_iter().find(|target| target.route().path() == path)
}
