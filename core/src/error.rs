use std::fmt;

/// Broad class of a user-facing failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UserInputMissing,
    PlatformCapabilityUnavailable,
    PlatformOperationFailed,
}

/// Failures surfaced to the user. The display text is the alert message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("⚠️ Please select an image first!")]
    MissingImage,
    #[error("⚠️ Please enter valid latitude and longitude!")]
    MissingCoordinates,
    #[error("Geolocation is not supported by your browser.")]
    LocationUnsupported,
    #[error("Unable to retrieve your location. Please enter the coordinates manually.")]
    LocationFailed(LocateFailure),
}

impl FormError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FormError::MissingImage | FormError::MissingCoordinates => ErrorKind::UserInputMissing,
            FormError::LocationUnsupported => ErrorKind::PlatformCapabilityUnavailable,
            FormError::LocationFailed(_) => ErrorKind::PlatformOperationFailed,
        }
    }
}

/// Reason reported by the platform for a failed position lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateFailure {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Unknown(u16),
}

impl LocateFailure {
    /// Maps a `GeolocationPositionError.code`.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => LocateFailure::PermissionDenied,
            2 => LocateFailure::PositionUnavailable,
            3 => LocateFailure::Timeout,
            other => LocateFailure::Unknown(other),
        }
    }
}

impl fmt::Display for LocateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocateFailure::PermissionDenied => f.write_str("permission denied"),
            LocateFailure::PositionUnavailable => f.write_str("position unavailable"),
            LocateFailure::Timeout => f.write_str("timed out"),
            LocateFailure::Unknown(code) => write!(f, "unknown error (code {code})"),
        }
    }
}
