pub mod components;
pub mod config;
pub mod icons;
pub mod list_utils;
pub mod url_state;
