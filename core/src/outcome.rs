pub const ANALYZING_TEXT: &str = "🔍 Analyzing...";
pub const ANALYZING_COLOR: &str = "yellow";

/// Threshold at or above which a sample counts as a clean road.
pub const CLEAN_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    GarbageDetected,
    CleanRoad,
}

impl Outcome {
    /// Classifies a uniform sample from [0, 1).
    pub fn from_sample(value: f64) -> Self {
        if value >= CLEAN_THRESHOLD {
            Outcome::CleanRoad
        } else {
            Outcome::GarbageDetected
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::GarbageDetected => "🛑 Garbage Detected",
            Outcome::CleanRoad => "✅ Clean Road",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Outcome::GarbageDetected => "red",
            Outcome::CleanRoad => "limegreen",
        }
    }

    pub fn markup(self) -> String {
        format!("<strong>{}</strong>", self.label())
    }
}
