//! PII category definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::VeilError;

/// Fixed set of PII categories the redaction pass knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PiiCategory {
    /// Standalone integer or decimal number
    GenericNumber,
    /// Social Security Number
    Ssn,
    /// Ten digit telephone number
    PhoneNumber,
    /// Email address
    Email,
    /// Month/day/year date
    DateOfBirth,
    /// One letter followed by seven digits
    DriversLicense,
    /// Four groups of four digits
    CreditCard,
    /// `MRN` prefixed record number
    MedicalRecordNumber,
    /// Run of capitalized words
    PersonName,
    /// House number, street words and a street suffix
    StreetAddress,
}

impl PiiCategory {
    /// Every category, in default evaluation order
    pub const ALL: [PiiCategory; 10] = [
        PiiCategory::Email,
        PiiCategory::MedicalRecordNumber,
        PiiCategory::Ssn,
        PiiCategory::PhoneNumber,
        PiiCategory::DateOfBirth,
        PiiCategory::DriversLicense,
        PiiCategory::CreditCard,
        PiiCategory::StreetAddress,
        PiiCategory::PersonName,
        PiiCategory::GenericNumber,
    ];

    /// Stable identifier used in configuration and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GenericNumber => "generic-number",
            Self::Ssn => "ssn",
            Self::PhoneNumber => "phone-number",
            Self::Email => "email",
            Self::DateOfBirth => "date-of-birth",
            Self::DriversLicense => "drivers-license",
            Self::CreditCard => "credit-card",
            Self::MedicalRecordNumber => "medical-record-number",
            Self::PersonName => "person-name",
            Self::StreetAddress => "street-address",
        }
    }

    /// Whether this is the catch-all numeric category that must run last
    pub fn is_generic_number(&self) -> bool {
        matches!(self, Self::GenericNumber)
    }
}

impl fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PiiCategory {
    type Err = VeilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "generic-number" | "number" | "numbers" => Ok(Self::GenericNumber),
            "ssn" => Ok(Self::Ssn),
            "phone-number" | "phone" | "phonenumber" => Ok(Self::PhoneNumber),
            "email" => Ok(Self::Email),
            "date-of-birth" | "dob" | "dateofbirth" => Ok(Self::DateOfBirth),
            "drivers-license" | "driver-license" | "driverlicense" => Ok(Self::DriversLicense),
            "credit-card" | "creditcard" => Ok(Self::CreditCard),
            "medical-record-number" | "mrn" | "medicalrecordnumber" => {
                Ok(Self::MedicalRecordNumber)
            }
            "person-name" | "name" => Ok(Self::PersonName),
            "street-address" | "address" => Ok(Self::StreetAddress),
            _ => Err(VeilError::Configuration(format!("Unknown PII category: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("ssn", PiiCategory::Ssn)]
    #[test_case("phone_number", PiiCategory::PhoneNumber)]
    #[test_case("phoneNumber", PiiCategory::PhoneNumber)]
    #[test_case("MRN", PiiCategory::MedicalRecordNumber)]
    #[test_case("numbers", PiiCategory::GenericNumber)]
    #[test_case("driverLicense", PiiCategory::DriversLicense)]
    #[test_case("address", PiiCategory::StreetAddress)]
    fn test_parse_category_aliases(input: &str, expected: PiiCategory) {
        assert_eq!(input.parse::<PiiCategory>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_category() {
        assert!("passport".parse::<PiiCategory>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for category in PiiCategory::ALL {
            assert_eq!(category.to_string().parse::<PiiCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_generic_number_is_last_by_default() {
        assert_eq!(PiiCategory::ALL.last(), Some(&PiiCategory::GenericNumber));
        assert_eq!(
            PiiCategory::ALL
                .iter()
                .filter(|c| c.is_generic_number())
                .count(),
            1
        );
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&PiiCategory::DateOfBirth).unwrap();
        assert_eq!(json, "\"date-of-birth\"");
    }
}
