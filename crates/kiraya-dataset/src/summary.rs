//! Aggregate rent statistics over a set of reference records.

use kiraya_types::ReferenceRecord;
use serde::Serialize;

/// Mean rent and mean size over a group of records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RentSummary {
    /// Number of records summarized.
    pub count: usize,
    /// Mean monthly rent.
    pub mean_rent: f64,
    /// Mean size in square feet.
    pub mean_size: f64,
}

impl RentSummary {
    /// Summarizes the given records, or returns `None` if there are none.
    pub fn of<'a, I>(records: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a ReferenceRecord>,
    {
        let (count, total_rent, total_size) = records
            .into_iter()
            .fold((0_usize, 0.0, 0.0), |(n, rent, size), record| {
                (n + 1, rent + record.rent, size + record.size)
            });

        if count == 0 {
            return None;
        }

        let n = count as f64;
        Some(Self {
            count,
            mean_rent: total_rent / n,
            mean_size: total_size / n,
        })
    }

    /// Returns mean rent divided by mean size.
    #[must_use]
    pub fn rent_per_area_unit(&self) -> f64 {
        self.mean_rent / self.mean_size
    }

    /// Scales the per-area rate to a property of the given size.
    #[must_use]
    pub fn rent_for_size(&self, size: f64) -> f64 {
        self.rent_per_area_unit() * size
    }
}
