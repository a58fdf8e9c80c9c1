//! Property queries.

use serde::{Deserialize, Serialize};

use crate::QueryError;

/// Attributes of the property for which a rent is sought.
///
/// A `PropertyQuery` can only be built through [`PropertyQuery::new`], so any
/// value in hand has a non-empty state and city, a strictly positive size no
/// larger than [`PropertyQuery::MAX_SIZE`] and at least one bedroom and bathroom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPropertyQuery")]
pub struct PropertyQuery {
    state: String,
    city: String,
    size: f64,
    bedrooms: u32,
    bathrooms: u32,
    parking: u32,
}

/// Unvalidated query as it arrives from JSON.
#[derive(Debug, Deserialize)]
struct RawPropertyQuery {
    state: String,
    city: String,
    size: f64,
    bedrooms: u32,
    bathrooms: u32,
    #[serde(default)]
    parking: u32,
}

impl TryFrom<RawPropertyQuery> for PropertyQuery {
    type Error = QueryError;

    fn try_from(raw: RawPropertyQuery) -> Result<Self, Self::Error> {
        Self::new(
            raw.state,
            raw.city,
            raw.size,
            raw.bedrooms,
            raw.bathrooms,
            raw.parking,
        )
    }
}

impl PropertyQuery {
    /// Largest accepted size in square feet.
    pub const MAX_SIZE: f64 = 1_000_000.0;

    /// Creates a validated query.
    ///
    /// State and city are trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if the state or city is empty, the size is not a
    /// positive finite number, the size exceeds [`Self::MAX_SIZE`], or
    /// bedrooms/bathrooms are zero.
    pub fn new(
        state: impl Into<String>,
        city: impl Into<String>,
        size: f64,
        bedrooms: u32,
        bathrooms: u32,
        parking: u32,
    ) -> Result<Self, QueryError> {
        let state = state.into().trim().to_string();
        let city = city.into().trim().to_string();

        if state.is_empty() {
            return Err(QueryError::EmptyState);
        }
        if city.is_empty() {
            return Err(QueryError::EmptyCity);
        }
        if !(size.is_finite() && size > 0.0) {
            return Err(QueryError::NonPositiveSize(size));
        }
        if size > Self::MAX_SIZE {
            return Err(QueryError::SizeTooLarge {
                size,
                max: Self::MAX_SIZE,
            });
        }
        if bedrooms == 0 {
            return Err(QueryError::NoBedrooms);
        }
        if bathrooms == 0 {
            return Err(QueryError::NoBathrooms);
        }

        Ok(Self {
            state,
            city,
            size,
            bedrooms,
            bathrooms,
            parking,
        })
    }

    /// Returns the state name.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the city name.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the size in square feet.
    #[must_use]
    pub const fn size(&self) -> f64 {
        self.size
    }

    /// Returns the number of bedrooms.
    #[must_use]
    pub const fn bedrooms(&self) -> u32 {
        self.bedrooms
    }

    /// Returns the number of bathrooms.
    #[must_use]
    pub const fn bathrooms(&self) -> u32 {
        self.bathrooms
    }

    /// Returns the number of parking spaces.
    #[must_use]
    pub const fn parking(&self) -> u32 {
        self.parking
    }

    /// Returns a copy of this query with a different size.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NonPositiveSize`] if `size` is not positive, or
    /// [`QueryError::SizeTooLarge`] if it exceeds [`Self::MAX_SIZE`].
    pub fn with_size(&self, size: f64) -> Result<Self, QueryError> {
        Self::new(
            self.state.clone(),
            self.city.clone(),
            size,
            self.bedrooms,
            self.bathrooms,
            self.parking,
        )
    }
}

impl std::fmt::Display for PropertyQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}: {} sq ft {}bd/{}ba/{}p",
            self.city, self.state, self.size, self.bedrooms, self.bathrooms, self.parking
        )
    }
}
