//! Layout and text helpers shared by the renderers

pub mod popup;
pub mod text;
