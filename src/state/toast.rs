#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Queue of transient notifications, newest last.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

/// A single notification. `id` keys the rendered element and its
/// auto-dismiss timer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub is_error: bool,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, message: impl Into<String>, is_error: bool) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            is_error,
        });
        id
    }

    /// Remove the toast with the given id. Unknown ids are a no-op, so a
    /// timer firing after a manual close is harmless.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
