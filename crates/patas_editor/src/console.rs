//! Console panel

use patas_core::{Notification, Notifications};

/// `Code: <code> - Message: <text>`
pub fn format_line(notification: &Notification) -> String {
    format!(
        "Code: {} - Message: {}",
        notification.severity.code(),
        notification.message
    )
}

/// One line per notification, oldest first
pub fn lines(notifications: &Notifications) -> Vec<String> {
    notifications.notifications().iter().map(format_line).collect()
}
