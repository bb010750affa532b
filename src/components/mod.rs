pub mod about;
pub mod anchors;
pub mod app;
pub mod back_to_top;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod notice_overlay;
pub mod page_effects;
pub mod projects;
pub mod stats_panel;
