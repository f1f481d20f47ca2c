pub mod use_in_view;
pub mod use_theme;
