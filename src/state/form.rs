#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// State for the classify form: the message being typed and whether a
/// submit is currently in flight.
#[derive(Clone, Debug, Default)]
pub struct FormState {
    pub message: String,
    pub submitting: bool,
}

impl FormState {
    /// The submit control is enabled iff the trimmed input is non-empty and
    /// no submit is in flight.
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.message.trim().is_empty()
    }

    /// Cleanup run after every submit completion, success or failure:
    /// clear the input and release the in-flight flag. With the input
    /// empty, `can_submit` is false again until the user types.
    pub fn reset_after_submit(&mut self) {
        self.message.clear();
        self.submitting = false;
    }
}
