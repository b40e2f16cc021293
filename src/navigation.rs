use std::sync::{Arc, Mutex, PoisonError};

use crate::routes::{AppRoute, navigation_target};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("no browser window is available")]
    Unavailable,
    #[error("location access failed: {0}")]
    Location(String),
}

/// The platform's full-page navigation primitive.
pub trait Navigator {
    /// Scheme, host and port of the current page.
    fn origin(&self) -> Result<String, NavigationError>;
    /// Replace the current document with `href`.
    fn assign(&self, href: &str) -> Result<(), NavigationError>;
}

/// Navigate the whole page to `route`, returning the assigned target.
pub fn navigate(navigator: &dyn Navigator, route: AppRoute) -> Result<String, NavigationError> {
    let origin = navigator.origin()?;
    let target = navigation_target(&origin, route);
    navigator.assign(&target)?;
    tracing::debug!(route = %route, target = %target, "navigating");
    Ok(target)
}

/// `window.location` of the running browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

#[cfg(target_arch = "wasm32")]
impl BrowserNavigator {
    fn location() -> Result<web_sys::Location, NavigationError> {
        web_sys::window()
            .map(|window| window.location())
            .ok_or(NavigationError::Unavailable)
    }
}

impl Navigator for BrowserNavigator {
    fn origin(&self) -> Result<String, NavigationError> {
        #[cfg(target_arch = "wasm32")]
        {
            Self::location()?
                .origin()
                .map_err(|err| NavigationError::Location(format!("{err:?}")))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Err(NavigationError::Unavailable)
        }
    }

    fn assign(&self, href: &str) -> Result<(), NavigationError> {
        #[cfg(target_arch = "wasm32")]
        {
            Self::location()?
                .set_href(href)
                .map_err(|err| NavigationError::Location(format!("{err:?}")))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = href;
            Err(NavigationError::Unavailable)
        }
    }
}

/// Navigator with a fixed origin that keeps every assigned href instead of
/// leaving the page.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    origin: String,
    assigned: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            assigned: Mutex::new(Vec::new()),
        }
    }

    pub fn assigned(&self) -> Vec<String> {
        self.assigned
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn origin(&self) -> Result<String, NavigationError> {
        Ok(self.origin.clone())
    }

    fn assign(&self, href: &str) -> Result<(), NavigationError> {
        self.assigned
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(href.to_string());
        Ok(())
    }
}

/// Navigator shared through Leptos context.
#[derive(Clone)]
pub struct NavigatorHandle(Arc<dyn Navigator + Send + Sync>);

impl NavigatorHandle {
    pub fn new(navigator: impl Navigator + Send + Sync + 'static) -> Self {
        Self(Arc::new(navigator))
    }

    pub fn from_arc(navigator: Arc<dyn Navigator + Send + Sync>) -> Self {
        Self(navigator)
    }

    pub fn navigate(&self, route: AppRoute) -> Result<String, NavigationError> {
        navigate(self.0.as_ref(), route)
    }
}

impl Default for NavigatorHandle {
    fn default() -> Self {
        Self::new(BrowserNavigator)
    }
}

impl std::fmt::Debug for NavigatorHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("NavigatorHandle")
    }
}
