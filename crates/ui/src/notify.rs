//! Transient notifications.
//!
//! Actions push a notice after they finish; the host renders the queue in a
//! corner and each notice removes itself after a short delay.

use std::time::Duration;

use dioxus::prelude::*;

const DISMISS_AFTER: Duration = Duration::from_secs(4);

/// How a notice should read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Notice queue provided at the app root.
///
/// Copy, so actions can capture it without cloning ceremony.
#[derive(Clone, Copy)]
pub struct Notices {
    items: Signal<Vec<Notice>>,
    next_id: Signal<u64>,
}

impl Notices {
    /// Creates an empty queue. Must be called inside a component scope,
    /// typically through `use_context_provider`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text.into());
    }

    fn push(&self, kind: NoticeKind, text: String) {
        let mut items = self.items;
        let mut next_id = self.next_id;

        let id = next_id();
        next_id.set(id + 1);
        items.write().push(Notice { id, kind, text });

        // Removal is keyed by id, so a notice pushed later is never dropped
        // in place of this one.
        spawn(async move {
            tokio::time::sleep(DISMISS_AFTER).await;
            items.write().retain(|notice| notice.id != id);
        });
    }

    #[must_use]
    pub fn current(&self) -> Vec<Notice> {
        (self.items)()
    }
}

impl Default for Notices {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn NoticeHost() -> Element {
    let notices = use_context::<Notices>();
    let items = notices.current();

    rsx! {
        if !items.is_empty() {
            div { class: "toast-container position-fixed bottom-0 end-0 p-3",
                for notice in items {
                    NoticeToast { key: "{notice.id}", notice }
                }
            }
        }
    }
}

#[component]
fn NoticeToast(notice: Notice) -> Element {
    let class = match notice.kind {
        NoticeKind::Success => "toast show text-bg-success border-0",
        NoticeKind::Error => "toast show text-bg-danger border-0",
    };

    rsx! {
        div { class: "{class}", role: "alert",
            div { class: "toast-body", "{notice.text}" }
        }
    }
}
