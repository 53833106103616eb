//! `EmployeeView` implementation that forwards everything to the UI thread.

use async_trait::async_trait;
use client_core::{EditBuffer, EmployeeRow, EmployeeView, Notification, UiMode};
use crossbeam_channel::Sender;
use tokio::sync::oneshot;

use crate::controller::events::UiEvent;

pub struct ChannelView {
    ui_tx: Sender<UiEvent>,
}

impl ChannelView {
    pub fn new(ui_tx: Sender<UiEvent>) -> Self {
        Self { ui_tx }
    }

    fn send(&self, event: UiEvent) -> bool {
        match self.ui_tx.try_send(event) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("dropping ui event: {err}");
                false
            }
        }
    }
}

#[async_trait]
impl EmployeeView for ChannelView {
    fn render_rows(&self, rows: Vec<EmployeeRow>) {
        self.send(UiEvent::RowsRendered(rows));
    }

    fn show_mode(&self, mode: UiMode, buffer: &EditBuffer) {
        self.send(UiEvent::ModeChanged {
            mode,
            buffer: buffer.clone(),
        });
    }

    fn notify(&self, notification: Notification) {
        self.send(UiEvent::Notify(notification));
    }

    async fn confirm(&self, prompt: &str) -> bool {
        let (reply, answer) = oneshot::channel();
        let requested = self.send(UiEvent::ConfirmRequested {
            prompt: prompt.to_string(),
            reply,
        });
        if !requested {
            return false;
        }
        // A dropped reply (dialog replaced or window closed) counts as "no".
        answer.await.unwrap_or(false)
    }
}
