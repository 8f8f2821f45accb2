//! Application Context
//!
//! Shared configuration and the notice banner, provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use questionnaire_model::EditorConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct EditorContext {
    /// Editor configuration, fixed after start-up
    pub config: StoredValue<EditorConfig>,
    /// Message shown in the notice banner - read
    pub notice: ReadSignal<Option<String>>,
    /// Message shown in the notice banner - write
    set_notice: WriteSignal<Option<String>>,
    /// Bumped per notice so a stale timeout does not clear a newer one
    notice_ticket: StoredValue<u32>,
}

impl EditorContext {
    pub fn new(config: EditorConfig) -> Self {
        let (notice, set_notice) = signal(None);
        Self {
            config: StoredValue::new(config),
            notice,
            set_notice,
            notice_ticket: StoredValue::new(0),
        }
    }

    /// Show a message in the notice banner for the configured timeout
    pub fn notify(&self, message: impl Into<String>) {
        let message = message.into();
        log::info!("[NOTICE] {}", message);

        self.notice_ticket.update_value(|t| *t = t.wrapping_add(1));
        let ticket = self.notice_ticket.get_value();
        self.set_notice.set(Some(message));

        let timeout_ms = self.config.with_value(|c| c.notice_timeout_ms);
        let set_notice = self.set_notice;
        let tickets = self.notice_ticket;
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            if tickets.get_value() == ticket {
                set_notice.set(None);
            }
        });
    }

    pub fn dismiss_notice(&self) {
        self.set_notice.set(None);
    }
}

/// Get the editor context
pub fn use_editor_context() -> EditorContext {
    expect_context::<EditorContext>()
}
