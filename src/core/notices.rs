use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

/// How long validation messages stay visible before they clear themselves.
pub const NOTICE_TTL: Duration = Duration::from_secs(8);

/// Holds the currently displayed validation messages. Each post schedules a
/// deferred clear and keeps the timer handle, so a newer post cancels the
/// older clear instead of letting it wipe fresh messages early.
#[derive(Debug)]
pub struct NoticeBoard {
    messages: Arc<Mutex<Vec<String>>>,
    ttl: Duration,
    clear_task: Option<JoinHandle<()>>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::with_ttl(NOTICE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
            ttl,
            clear_task: None,
        }
    }

    /// Replaces the displayed messages and restarts the auto-clear timer.
    /// Must run inside a tokio runtime.
    pub fn post(&mut self, messages: Vec<String>) {
        if let Some(task) = self.clear_task.take() {
            task.abort();
        }

        if let Ok(mut current) = self.messages.lock() {
            *current = messages;
        }

        let shared = Arc::clone(&self.messages);
        let ttl = self.ttl;
        self.clear_task = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            if let Ok(mut current) = shared.lock() {
                current.clear();
            }
        }));
    }

    pub fn current(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|current| current.clone())
            .unwrap_or_default()
    }

    pub fn clear(&mut self) {
        if let Some(task) = self.clear_task.take() {
            task.abort();
        }
        if let Ok(mut current) = self.messages.lock() {
            current.clear();
        }
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for NoticeBoard {
    fn drop(&mut self) {
        if let Some(task) = self.clear_task.take() {
            task.abort();
        }
    }
}
