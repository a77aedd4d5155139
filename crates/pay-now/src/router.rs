//! Screen routing for the desktop shell

use std::cell::Cell;

use pay_now_core::Navigator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Payment,
    Login,
}

/// Maps navigation paths onto the app's screens.
#[derive(Debug)]
pub struct Router {
    login_path: String,
    current: Cell<Route>,
}

impl Router {
    pub const HOME_PATH: &'static str = "/";

    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
            current: Cell::new(Route::Payment),
        }
    }

    pub fn current(&self) -> Route {
        self.current.get()
    }

    pub fn go_home(&self) {
        self.go_to(Self::HOME_PATH);
    }
}

impl Navigator for Router {
    fn go_to(&self, path: &str) {
        let route = if path == self.login_path {
            Route::Login
        } else if path == Self::HOME_PATH {
            Route::Payment
        } else {
            tracing::warn!(path, "no screen for path");
            return;
        };
        tracing::debug!(path, ?route, "navigating");
        self.current.set(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_path_switches_screen() {
        let router = Router::new("/login");
        assert_eq!(router.current(), Route::Payment);
        router.go_to("/login");
        assert_eq!(router.current(), Route::Login);
        router.go_home();
        assert_eq!(router.current(), Route::Payment);
    }

    #[test]
    fn unknown_path_keeps_screen() {
        let router = Router::new("/sign-in");
        router.go_to("/login");
        assert_eq!(router.current(), Route::Payment);
        router.go_to("/sign-in");
        router.go_to("/elsewhere");
        assert_eq!(router.current(), Route::Login);
    }
}
