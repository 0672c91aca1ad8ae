use linereview_app_ui::Origin;

pub struct AppState {
    /// Injected into every rendered comment box in place of the browser's
    /// `window.location.origin`.
    pub origin: Origin,
}

impl AppState {
    #[must_use]
    pub const fn new(origin: Origin) -> Self {
        Self { origin }
    }
}
