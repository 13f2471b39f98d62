//! Terminal application: focus, key handling and layout around the view
//! controller

mod app_events;
mod app_render;
mod app_state;

pub use app_state::{App, BrowseGroup, BrowseItem, Focus};
