//! Built-in anonymizers, one per PII category

use super::{Anonymizer, RandomSource};
use crate::redaction::models::PiiCategory;
use anyhow::{bail, Result};

/// Replacement for social security numbers
pub const SSN_REPLACEMENT: &str = "999-99-9999";
/// Replacement for phone numbers
pub const PHONE_REPLACEMENT: &str = "555-555-5555";
/// Replacement for driver's license numbers
pub const DRIVERS_LICENSE_REPLACEMENT: &str = "X9999999";
/// Replacement for credit card numbers
pub const CREDIT_CARD_REPLACEMENT: &str = "4444-4444-4444-4444";
/// Replacement for street addresses
pub const STREET_ADDRESS_REPLACEMENT: &str = "123 Privacy Street";
/// Year written into every redacted date
pub const MASKED_YEAR: &str = "1990";

/// Same text for every match
#[derive(Debug, Clone)]
pub struct FixedReplacement(String);

impl FixedReplacement {
    /// Create a fixed replacement
    pub fn new(replacement: impl Into<String>) -> Self {
        Self(replacement.into())
    }
}

impl Anonymizer for FixedReplacement {
    fn anonymize(&self, _matched: &str, _random: &dyn RandomSource) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Zeroes every digit, keeping digit counts and the decimal point
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroFill;

impl Anonymizer for ZeroFill {
    fn anonymize(&self, matched: &str, _random: &dyn RandomSource) -> Result<String> {
        let zeros = |part: &str| "0".repeat(part.chars().count());
        Ok(match matched.split_once('.') {
            Some((whole, fraction)) => format!("{}.{}", zeros(whole), zeros(fraction)),
            None => zeros(matched),
        })
    }
}

/// `anonymous<N>@example.com` with N in `[0, 999)`
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberedEmail;

impl Anonymizer for NumberedEmail {
    fn anonymize(&self, _matched: &str, random: &dyn RandomSource) -> Result<String> {
        Ok(format!(
            "anonymous{}@example.com",
            random.next_in_range(0..999)
        ))
    }
}

/// Keeps month and day, forces the year, re-joins with `/`
#[derive(Debug, Clone, Copy, Default)]
pub struct MaskedYearDate;

impl Anonymizer for MaskedYearDate {
    fn anonymize(&self, matched: &str, _random: &dyn RandomSource) -> Result<String> {
        let mut parts = matched.split(['-', '.', '/']);
        match (parts.next(), parts.next()) {
            (Some(month), Some(day)) => Ok(format!("{month}/{day}/{MASKED_YEAR}")),
            _ => bail!("date has no month/day separator"),
        }
    }
}

/// `MRN: <N>` with N in `[1000000, 10000000)`
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomRecordNumber;

impl Anonymizer for RandomRecordNumber {
    fn anonymize(&self, _matched: &str, random: &dyn RandomSource) -> Result<String> {
        Ok(format!(
            "MRN: {}",
            random.next_in_range(1_000_000..10_000_000)
        ))
    }
}

/// `FN`, `FN LN` or `FN MN LN` depending on the word count
#[derive(Debug, Clone, Copy, Default)]
pub struct NamePlaceholder;

impl Anonymizer for NamePlaceholder {
    fn anonymize(&self, matched: &str, _random: &dyn RandomSource) -> Result<String> {
        let placeholder = match matched.split_whitespace().count() {
            0 | 1 => "FN",
            2 => "FN LN",
            _ => "FN MN LN",
        };
        Ok(placeholder.to_string())
    }
}

/// Default anonymizer for a category
pub fn default_anonymizer(category: PiiCategory) -> Box<dyn Anonymizer> {
    match category {
        PiiCategory::GenericNumber => Box::new(ZeroFill),
        PiiCategory::Ssn => Box::new(FixedReplacement::new(SSN_REPLACEMENT)),
        PiiCategory::PhoneNumber => Box::new(FixedReplacement::new(PHONE_REPLACEMENT)),
        PiiCategory::Email => Box::new(NumberedEmail),
        PiiCategory::DateOfBirth => Box::new(MaskedYearDate),
        PiiCategory::DriversLicense => {
            Box::new(FixedReplacement::new(DRIVERS_LICENSE_REPLACEMENT))
        }
        PiiCategory::CreditCard => Box::new(FixedReplacement::new(CREDIT_CARD_REPLACEMENT)),
        PiiCategory::MedicalRecordNumber => Box::new(RandomRecordNumber),
        PiiCategory::PersonName => Box::new(NamePlaceholder),
        PiiCategory::StreetAddress => {
            Box::new(FixedReplacement::new(STREET_ADDRESS_REPLACEMENT))
        }
    }
}
