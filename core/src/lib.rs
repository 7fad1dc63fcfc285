pub mod error;
pub mod form;
pub mod geo;
pub mod outcome;
pub mod report;
pub mod sample;
pub mod session;
pub mod settings;

pub use error::{ErrorKind, FormError, LocateFailure};
pub use form::{FormSnapshot, Submission};
pub use geo::GeoFix;
pub use outcome::{Outcome, ANALYZING_COLOR, ANALYZING_TEXT};
pub use report::{AnalysisReport, ReportError};
pub use sample::{CoinFlip, RngSource, UniformSource};
pub use session::{Phase, RequestToken, SubmissionSession};
pub use settings::{AnalysisSettings, ANALYSIS_DELAY_STORAGE_KEY, DEFAULT_ANALYSIS_DELAY_MS};
