pub const DEFAULT_ANALYSIS_DELAY_MS: u32 = 2000;

pub const ANALYSIS_DELAY_STORAGE_KEY: &str = "roadwatch.debug.analysis_ms";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisSettings {
    pub delay_ms: u32,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_ANALYSIS_DELAY_MS,
        }
    }
}

impl AnalysisSettings {
    /// Picks the first usable value from `sources`, in priority order.
    pub fn resolve<'a, I>(sources: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let delay_ms = sources
            .into_iter()
            .flatten()
            .find_map(parse_delay)
            .unwrap_or(DEFAULT_ANALYSIS_DELAY_MS);
        Self { delay_ms }
    }
}

fn parse_delay(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<u32>().ok()
}
