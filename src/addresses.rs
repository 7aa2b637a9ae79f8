//! Delivery Addresses

use std::fmt;

use serde::{Deserialize, Serialize};

/// Country used when none is given.
pub const DEFAULT_COUNTRY: &str = "India";

/// Delivery address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Street and house number.
    #[serde(default)]
    pub street_address: String,

    /// City
    #[serde(default)]
    pub city: String,

    /// State or province.
    #[serde(default)]
    pub state_province: String,

    /// Postal code.
    #[serde(default)]
    pub postal_code: String,

    /// Country
    #[serde(default = "default_country")]
    pub country: String,
}

impl Default for Address {
    fn default() -> Self {
        Self {
            street_address: String::new(),
            city: String::new(),
            state_province: String::new(),
            postal_code: String::new(),
            country: default_country(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            self.street_address.as_str(),
            self.city.as_str(),
            self.state_province.as_str(),
            self.postal_code.as_str(),
            self.country.as_str(),
        ];

        let mut first = true;

        for part in parts.iter().map(|part| part.trim()).filter(|p| !p.is_empty()) {
            if !first {
                f.write_str(", ")?;
            }

            f.write_str(part)?;
            first = false;
        }

        Ok(())
    }
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn default_country_is_india() {
        assert_eq!(Address::default().country, "India");
    }

    #[test]
    fn missing_country_deserializes_to_default() -> TestResult {
        let address: Address =
            serde_json::from_str(r#"{"streetAddress":"12 MG Road","city":"Pune"}"#)?;

        assert_eq!(address.country, "India");
        assert_eq!(address.state_province, "");

        Ok(())
    }

    #[test]
    fn display_skips_blank_parts() {
        let address = Address {
            street_address: "12 MG Road".to_string(),
            city: "Pune".to_string(),
            ..Address::default()
        };

        assert_eq!(address.to_string(), "12 MG Road, Pune, India");
    }
}
