use crate::api::{ApiError, AuthToken};
use web_sys::{Storage, Window};

/// localStorage key holding the bearer token returned by a successful login.
pub const AUTH_TOKEN_KEY: &str = "authToken";

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Durable client-side home of the auth token. Writes overwrite.
pub trait TokenStore {
    fn store_token(&self, token: &AuthToken) -> Result<(), ApiError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn store_token(&self, token: &AuthToken) -> Result<(), ApiError> {
        let storage = local_storage().map_err(ApiError::storage)?;
        storage
            .set_item(AUTH_TOKEN_KEY, token.as_str())
            .map_err(|_| ApiError::storage("Failed to persist auth token"))
    }
}

impl<T: TokenStore + ?Sized> TokenStore for std::rc::Rc<T> {
    fn store_token(&self, token: &AuthToken) -> Result<(), ApiError> {
        (**self).store_token(token)
    }
}

#[cfg(test)]
pub use memory::MemoryTokenStore;
