pub mod contact;
pub mod features;
pub mod footer;
pub mod hero;
pub mod nav;
pub mod section;
pub mod technical;
pub mod ui_showcase;
