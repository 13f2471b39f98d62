//! Transient notices shown in the top right corner
//!
//! Service failures and rejected input surface here without blocking the
//! rest of the interface.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{Notification, NotificationLevel, NotificationState};
