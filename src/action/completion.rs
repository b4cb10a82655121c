use std::fmt;

/// Continuation handed to an executing action.
///
/// It is consumed by [`Completion::complete`]; dropping it without completing
/// fires it as well, so every path through an action signals exactly once.
pub struct Completion {
    callback: Option<Box<dyn FnOnce()>>,
}

impl Completion {
    pub fn new(callback: impl FnOnce() + 'static) -> Self {
        Self {
            callback: Some(Box::new(callback)),
        }
    }

    pub fn noop() -> Self {
        Self { callback: None }
    }

    pub fn complete(mut self) {
        self.fire();
    }

    fn fire(&mut self) {
        if let Some(callback) = self.callback.take() {
            callback();
        }
    }
}

impl Drop for Completion {
    fn drop(&mut self) {
        self.fire();
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("pending", &self.callback.is_some())
            .finish()
    }
}
