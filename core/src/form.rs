use crate::FormError;

/// Field values read from the page when the form is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub has_image: bool,
    pub latitude: String,
    pub longitude: String,
}

/// A snapshot that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub latitude: String,
    pub longitude: String,
}

impl FormSnapshot {
    /// Checks the image first, then both coordinates. Any non-empty text is
    /// accepted as a coordinate.
    pub fn validate(&self) -> Result<Submission, FormError> {
        if !self.has_image {
            return Err(FormError::MissingImage);
        }
        if self.latitude.is_empty() || self.longitude.is_empty() {
            return Err(FormError::MissingCoordinates);
        }
        Ok(Submission {
            latitude: self.latitude.clone(),
            longitude: self.longitude.clone(),
        })
    }
}
