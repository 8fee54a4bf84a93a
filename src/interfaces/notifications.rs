use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

/// A transient, user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn info(message: impl Into<String>) -> Self {
        Toast { level: ToastLevel::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Toast { level: ToastLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Toast { level: ToastLevel::Error, message: message.into() }
    }
}

/// View-layer seam for surfacing toasts.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Logs toasts through `tracing`. Default for headless embedders.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        match toast.level {
            ToastLevel::Info | ToastLevel::Success => tracing::info!("{}", toast.message),
            ToastLevel::Error => tracing::warn!("{}", toast.message),
        }
    }
}

/// Queues toasts for a view layer that polls instead of subscribing.
#[derive(Default)]
pub struct BufferedNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl BufferedNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes every queued toast, leaving the buffer empty.
    pub fn drain(&self) -> Vec<Toast> {
        let mut toasts = self.toasts.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *toasts)
    }
}

impl Notifier for BufferedNotifier {
    fn notify(&self, toast: Toast) {
        let mut toasts = self.toasts.lock().unwrap_or_else(|e| e.into_inner());
        toasts.push(toast);
    }
}
