/// [Settings] for the watch loop.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Render a single derivation and exit, instead of ticking at 1 Hz.
    pub once: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { once: false }
    }
}
