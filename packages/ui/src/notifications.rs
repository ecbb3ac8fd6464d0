//! Transient user notifications (toasts).
//!
//! Screens report outcomes through [`Notifier`] instead of rendering their
//! own banners; [`Toaster`] draws whatever is queued and removes entries
//! after a short delay or on click.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NotificationKind {
    Success,
    Warning,
    Destructive,
}

impl NotificationKind {
    fn class(self) -> &'static str {
        match self {
            NotificationKind::Success => "toast toast-success",
            NotificationKind::Warning => "toast toast-warning",
            NotificationKind::Destructive => "toast toast-destructive",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Queue of visible notifications. Ids are monotonic so a delayed dismissal
/// never removes a newer entry.
#[derive(Clone, Debug, Default)]
pub struct Notifications {
    next_id: u64,
    pub entries: Vec<Notification>,
}

impl Notifications {
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notification {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

/// Handle screens use to emit notifications.
#[derive(Clone, Copy)]
pub struct Notifier {
    state: Signal<Notifications>,
}

impl Notifier {
    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(NotificationKind::Success, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.notify(NotificationKind::Warning, message);
    }

    pub fn destructive(&mut self, message: impl Into<String>) {
        self.notify(NotificationKind::Destructive, message);
    }

    fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        let id = self.state.write().push(kind, message);
        schedule_dismiss(self.state, id);
    }
}

pub fn use_notifier() -> Notifier {
    Notifier {
        state: use_notifications(),
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(mut state: Signal<Notifications>, id: u64) {
    spawn(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(4)).await;
        state.write().dismiss(id);
    });
}

// Without a browser event loop toasts stay until clicked away.
#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_state: Signal<Notifications>, _id: u64) {}

/// Provider owning the notification queue.
#[component]
pub fn NotificationsProvider(children: Element) -> Element {
    let state = use_signal(Notifications::default);
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Renders the queued notifications. Clicking one dismisses it.
#[component]
pub fn Toaster() -> Element {
    let mut state = use_notifications();

    rsx! {
        div { class: "toaster",
            for entry in state().entries {
                div {
                    key: "{entry.id}",
                    class: entry.kind.class(),
                    onclick: move |_| state.write().dismiss(entry.id),
                    "{entry.message}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_monotonic_ids() {
        let mut queue = Notifications::default();
        let a = queue.push(NotificationKind::Success, "saved");
        let b = queue.push(NotificationKind::Warning, "careful");
        assert!(b > a);
        assert_eq!(queue.entries.len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_the_target() {
        let mut queue = Notifications::default();
        let a = queue.push(NotificationKind::Success, "one");
        let b = queue.push(NotificationKind::Destructive, "two");
        queue.dismiss(a);
        assert_eq!(queue.entries.len(), 1);
        assert_eq!(queue.entries[0].id, b);

        queue.dismiss(a);
        assert_eq!(queue.entries.len(), 1);
    }

    #[test]
    fn test_ids_are_not_reused_after_dismiss() {
        let mut queue = Notifications::default();
        let a = queue.push(NotificationKind::Success, "one");
        queue.dismiss(a);
        let b = queue.push(NotificationKind::Success, "two");
        assert!(b > a);
    }
}
