//! Derived figures for presenting an estimate.

use kiraya_types::{Prediction, PropertyQuery, Tier};
use serde::Serialize;

/// Rent-per-sq-ft above which a property is [`MarketSegment::Premium`].
const PREMIUM_RATE: u64 = 50;

/// Rent-per-sq-ft above which a property is [`MarketSegment::MidRange`].
const MID_RANGE_RATE: u64 = 30;

/// Market segment by monthly rent per square foot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketSegment {
    /// Up to ₹30 per sq ft.
    Budget,
    /// Above ₹30 and up to ₹50 per sq ft.
    MidRange,
    /// Above ₹50 per sq ft.
    Premium,
}

impl MarketSegment {
    /// Classifies a monthly rent per square foot.
    #[must_use]
    pub const fn from_rate(rent_per_area_unit: u64) -> Self {
        if rent_per_area_unit > PREMIUM_RATE {
            Self::Premium
        } else if rent_per_area_unit > MID_RANGE_RATE {
            Self::MidRange
        } else {
            Self::Budget
        }
    }

    /// Returns the segment as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "Budget",
            Self::MidRange => "Mid-Range",
            Self::Premium => "Premium",
        }
    }
}

impl std::fmt::Display for MarketSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Monthly, annual and per-area figures for a prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentReport {
    /// Estimated monthly rent.
    pub monthly_rent: u64,
    /// Monthly rent times twelve, saturating at `u64::MAX`.
    pub annual_rent: u64,
    /// Monthly rent per square foot, rounded.
    pub rent_per_area_unit: u64,
    /// Typical per-square-foot range, ±10% around `rent_per_area_unit`.
    pub range_per_area_unit: (u64, u64),
    /// Market segment.
    pub segment: MarketSegment,
    /// Tier that produced the estimate.
    pub tier: Tier,
    /// Number of records behind the estimate.
    pub candidates: usize,
}

impl RentReport {
    /// Builds a report for a prediction made for `query`.
    #[must_use]
    pub fn new(prediction: &Prediction, query: &PropertyQuery) -> Self {
        let monthly_rent = prediction.rent;
        let rate = monthly_rent as f64 / query.size();
        let rent_per_area_unit = rate.round() as u64;
        let per_unit = rent_per_area_unit as f64;

        Self {
            monthly_rent,
            annual_rent: monthly_rent.saturating_mul(12),
            rent_per_area_unit,
            range_per_area_unit: (
                (per_unit * 0.9).round() as u64,
                (per_unit * 1.1).round() as u64,
            ),
            segment: MarketSegment::from_rate(rent_per_area_unit),
            tier: prediction.tier,
            candidates: prediction.candidates,
        }
    }

    /// Formats the report as a human-readable summary.
    #[must_use]
    pub fn format_report(&self) -> String {
        format!(
            "Monthly rent:   {}\n\
             Annual rent:    {}\n\
             Per sq ft:      ₹{} (typical ₹{} - ₹{})\n\
             Segment:        {}\n\
             Based on:       {} ({} records)",
            format_inr(self.monthly_rent),
            format_inr(self.annual_rent),
            self.rent_per_area_unit,
            self.range_per_area_unit.0,
            self.range_per_area_unit.1,
            self.segment,
            self.tier.description(),
            self.candidates,
        )
    }
}

/// Formats a rupee amount with Indian digit grouping (e.g. "₹12,34,567").
#[must_use]
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("₹{},{tail}", groups.join(","))
}
