pub mod button;
pub mod card;
pub mod error;
pub mod input;
pub mod layout;
