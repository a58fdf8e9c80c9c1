//! Reference rent observations.

use serde::{Deserialize, Serialize};

/// A historical rent observation used as a comparison basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    /// State name (e.g., "Karnataka").
    pub state: String,
    /// City name (e.g., "Bangalore").
    pub city: String,
    /// Free-text locality (e.g., "Whitefield").
    pub location: String,
    /// Built-up area in square feet.
    pub size: f64,
    /// Number of bedrooms.
    pub bedrooms: u32,
    /// Number of bathrooms.
    pub bathrooms: u32,
    /// Number of parking spaces.
    pub parking: u32,
    /// Monthly rent in rupees.
    pub rent: f64,
}

impl ReferenceRecord {
    /// Creates a new reference record.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        state: impl Into<String>,
        city: impl Into<String>,
        location: impl Into<String>,
        size: f64,
        bedrooms: u32,
        bathrooms: u32,
        parking: u32,
        rent: f64,
    ) -> Self {
        Self {
            state: state.into(),
            city: city.into(),
            location: location.into(),
            size,
            bedrooms,
            bathrooms,
            parking,
            rent,
        }
    }

    /// Checks the record can take part in per-area averages.
    ///
    /// # Errors
    ///
    /// Returns a description of the first offending field.
    pub fn check(&self) -> Result<(), String> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(format!("size must be positive, got {}", self.size));
        }
        if !(self.rent.is_finite() && self.rent > 0.0) {
            return Err(format!("rent must be positive, got {}", self.rent));
        }
        if self.state.trim().is_empty() {
            return Err("state is empty".to_string());
        }
        if self.city.trim().is_empty() {
            return Err("city is empty".to_string());
        }
        Ok(())
    }

    /// Returns the monthly rent per square foot.
    #[must_use]
    pub fn rent_per_area_unit(&self) -> f64 {
        self.rent / self.size
    }
}

impl std::fmt::Display for ReferenceRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}: {} sq ft {}bd/{}ba/{}p @ {}",
            self.location,
            self.city,
            self.state,
            self.size,
            self.bedrooms,
            self.bathrooms,
            self.parking,
            self.rent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn whitefield() -> ReferenceRecord {
        ReferenceRecord::new(
            "Karnataka",
            "Bangalore",
            "Whitefield",
            1836.0,
            4,
            4,
            2,
            34915.0,
        )
    }

    #[test]
    fn test_record_check() {
        assert!(whitefield().check().is_ok());

        let mut zero_size = whitefield();
        zero_size.size = 0.0;
        assert!(zero_size.check().unwrap_err().contains("size"));

        let mut negative_rent = whitefield();
        negative_rent.rent = -1.0;
        assert!(negative_rent.check().unwrap_err().contains("rent"));

        let mut nan_size = whitefield();
        nan_size.size = f64::NAN;
        assert!(nan_size.check().is_err());

        let mut blank_city = whitefield();
        blank_city.city = "  ".to_string();
        assert!(blank_city.check().is_err());
    }

    #[test]
    fn test_rent_per_area_unit() {
        assert_relative_eq!(whitefield().rent_per_area_unit(), 34915.0 / 1836.0);
    }

    #[test]
    fn test_deserialize_record() {
        let json = r#"{"state":"Kerala","city":"Kochi","location":"Marine Drive","size":2228,"bedrooms":5,"bathrooms":2,"parking":1,"rent":45584}"#;
        let record: ReferenceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.city, "Kochi");
        assert_relative_eq!(record.size, 2228.0);
        assert_eq!(record.bathrooms, 2);
    }
}
