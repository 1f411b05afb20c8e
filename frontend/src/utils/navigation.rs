pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";
pub const REGISTER_ROUTE: &str = "/register";
pub const FORGOT_PASSWORD_ROUTE: &str = "/forgot-password";

pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn navigate(&self, path: &str) {
        self(path)
    }
}

/// Full-page navigation through `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn navigate(&self, path: &str) {
        match super::storage::window() {
            Ok(window) => {
                if window.location().set_href(path).is_err() {
                    log::warn!("Navigation to {} was rejected", path);
                }
            }
            Err(err) => log::warn!("Cannot navigate to {}: {}", path, err),
        }
    }
}
