use roadwatch_core::FormError;

/// Surfaces user-facing failures.
pub trait Notifier {
    fn notify(&self, error: &FormError);
}

/// Blocking `window.alert`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DialogNotifier;

impl Notifier for DialogNotifier {
    fn notify(&self, error: &FormError) {
        gloo::dialogs::alert(&error.to_string());
    }
}
