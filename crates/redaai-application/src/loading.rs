//! Guaranteed release of the loading flag.

/// Drop guard that clears a store's loading flag on every exit path of
/// an action, early returns included.
pub(crate) struct LoadingGuard<F: FnMut()> {
    on_drop: F,
}

impl<F: FnMut()> LoadingGuard<F> {
    pub(crate) fn new(on_drop: F) -> Self {
        Self { on_drop }
    }
}

impl<F: FnMut()> Drop for LoadingGuard<F> {
    fn drop(&mut self) {
        (self.on_drop)();
    }
}
