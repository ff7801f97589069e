use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassificationRequest {
    pub text: String,
    pub vehicle_make: Option<String>,
}

impl ClassificationRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            vehicle_make: None,
        }
    }

    pub fn with_vehicle_make(mut self, make: impl Into<String>) -> Self {
        let make = make.into();
        let make = make.trim();
        self.vehicle_make = if make.is_empty() {
            None
        } else {
            Some(make.to_string())
        };
        self
    }

    /// True when the text is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
