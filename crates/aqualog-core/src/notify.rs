//! Notification capability.
//!
//! Reminder logic talks to the [`Notifier`] trait instead of a platform
//! notification system, so it can be exercised in tests. Missing
//! permission degrades silently to no notifications.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// User-facing notification channel.
pub trait Notifier {
    /// Ask for permission to show notifications.
    fn request_permission(&mut self) -> Permission;

    /// Current permission state, without prompting.
    fn permission(&self) -> Permission;

    /// Show a notification. Callers check [`Notifier::permission`] first.
    fn notify(&self, title: &str, body: &str);
}

/// Prints notifications to the terminal.
pub struct ConsoleNotifier {
    granted: bool,
}

impl ConsoleNotifier {
    pub fn new(granted: bool) -> Self {
        Self { granted }
    }
}

impl Notifier for ConsoleNotifier {
    fn request_permission(&mut self) -> Permission {
        // A terminal can always display output.
        self.granted = true;
        Permission::Granted
    }

    fn permission(&self) -> Permission {
        if self.granted {
            Permission::Granted
        } else {
            Permission::Denied
        }
    }

    fn notify(&self, title: &str, body: &str) {
        eprintln!("** {title} **");
        eprintln!("   {body}");
    }
}

/// Discards notifications.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn request_permission(&mut self) -> Permission {
        Permission::Denied
    }

    fn permission(&self) -> Permission {
        Permission::Denied
    }

    fn notify(&self, title: &str, _body: &str) {
        debug!("notification suppressed: {title}");
    }
}
