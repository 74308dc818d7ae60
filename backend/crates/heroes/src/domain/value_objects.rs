//! Domain Value Objects
//!
//! Validated input types. Constructing one of these is the validation step:
//! nothing reaches storage without passing through them.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Input validation failures, reported verbatim to the client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Description is required")]
    DescriptionRequired,

    #[error("Description must be at least {min} characters long", min = PowerDescription::MIN_LENGTH)]
    DescriptionTooShort,

    #[error("Strength must be one of 'Strong', 'Weak', 'Average'")]
    InvalidStrength,

    /// Request body could not be decoded
    #[error("{0}")]
    MalformedBody(String),
}

/// Strength of a hero's power
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Strong,
    Weak,
    Average,
}

impl Strength {
    pub const ALL: [Strength; 3] = [Strength::Strong, Strength::Weak, Strength::Average];

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Strength::Strong => "Strong",
            Strength::Weak => "Weak",
            Strength::Average => "Average",
        }
    }

    /// Validate an optional raw value from a request body
    pub fn parse(raw: Option<&str>) -> Result<Self, ValidationError> {
        raw.ok_or(ValidationError::InvalidStrength)?.parse()
    }
}

impl FromStr for Strength {
    type Err = ValidationError;

    // Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strength::ALL
            .into_iter()
            .find(|strength| strength.as_str() == s)
            .ok_or(ValidationError::InvalidStrength)
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for Strength {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A power description accepted for update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerDescription(String);

impl PowerDescription {
    /// Minimum length, counted in characters
    pub const MIN_LENGTH: usize = 20;

    pub fn parse(raw: Option<String>) -> Result<Self, ValidationError> {
        let value = raw.ok_or(ValidationError::DescriptionRequired)?;
        if value.chars().count() < Self::MIN_LENGTH {
            return Err(ValidationError::DescriptionTooShort);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_accepts_each_literal() {
        assert_eq!(Strength::parse(Some("Strong")), Ok(Strength::Strong));
        assert_eq!(Strength::parse(Some("Weak")), Ok(Strength::Weak));
        assert_eq!(Strength::parse(Some("Average")), Ok(Strength::Average));
    }

    #[test]
    fn test_strength_rejects_other_values() {
        for raw in ["strong", "AVERAGE", "", "Mighty", " Weak"] {
            assert_eq!(
                Strength::parse(Some(raw)),
                Err(ValidationError::InvalidStrength),
                "{raw:?} should be rejected"
            );
        }
        assert_eq!(Strength::parse(None), Err(ValidationError::InvalidStrength));
    }

    #[test]
    fn test_description_required() {
        assert_eq!(
            PowerDescription::parse(None),
            Err(ValidationError::DescriptionRequired)
        );
    }

    #[test]
    fn test_description_length_boundary() {
        let nineteen = "a".repeat(19);
        let twenty = "a".repeat(20);
        assert_eq!(
            PowerDescription::parse(Some(nineteen)),
            Err(ValidationError::DescriptionTooShort)
        );
        assert_eq!(
            PowerDescription::parse(Some(twenty.clone())).unwrap().as_str(),
            twenty
        );
    }

    #[test]
    fn test_description_counts_characters_not_bytes() {
        // 10 characters, 30 bytes
        let short = "日本語の説明です。。".to_string();
        assert_eq!(short.chars().count(), 10);
        assert!(PowerDescription::parse(Some(short)).is_err());
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::DescriptionTooShort.to_string(),
            "Description must be at least 20 characters long"
        );
        assert_eq!(
            ValidationError::InvalidStrength.to_string(),
            "Strength must be one of 'Strong', 'Weak', 'Average'"
        );
    }
}
