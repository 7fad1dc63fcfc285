use roadwatch_core::{AnalysisSettings, ANALYSIS_DELAY_STORAGE_KEY};

fn read_storage(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(key).ok()?
}

/// Debug override from local storage, then the build-time value, then the
/// default.
pub fn load_analysis_settings() -> AnalysisSettings {
    let stored = read_storage(ANALYSIS_DELAY_STORAGE_KEY);
    AnalysisSettings::resolve([stored.as_deref(), option_env!("ROADWATCH_ANALYSIS_MS")])
}
