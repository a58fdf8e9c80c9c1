//! The reference dataset and its loaders.

use std::path::Path;
use std::sync::OnceLock;

use csv_async::{AsyncReaderBuilder, Trim};
use futures::StreamExt;
use kiraya_types::{KirayaError, ReferenceRecord, Result};
use tokio::io::AsyncRead;
use tracing::{debug, info};

use crate::RentSummary;

/// Embedded sample dataset.
const RENT_DATA_JSON: &str = include_str!("../data/rent_data.json");

/// Static dataset instance.
static DATASET: OnceLock<ReferenceDataset> = OnceLock::new();

/// Immutable, insertion-ordered collection of reference records.
///
/// Construction guarantees at least one record and a positive size and rent
/// on every record, so averages over the whole dataset are always defined.
#[derive(Debug, Clone)]
pub struct ReferenceDataset {
    records: Vec<ReferenceRecord>,
    national: RentSummary,
}

impl ReferenceDataset {
    /// Returns the embedded sample dataset.
    ///
    /// This lazily initializes the dataset from embedded JSON on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        DATASET.get_or_init(|| {
            Self::from_json(RENT_DATA_JSON).expect("embedded rent_data.json should be valid")
        })
    }

    /// Creates a dataset from records, validating each one.
    ///
    /// # Errors
    ///
    /// Returns [`KirayaError::EmptyDataset`] if `records` is empty and
    /// [`KirayaError::InvalidRecord`] for the first record with a
    /// non-positive size or rent.
    pub fn from_records(records: Vec<ReferenceRecord>) -> Result<Self> {
        for (index, record) in records.iter().enumerate() {
            record
                .check()
                .map_err(|reason| KirayaError::InvalidRecord { index, reason })?;
        }

        let national = RentSummary::of(&records).ok_or(KirayaError::EmptyDataset)?;
        debug!(
            records = records.len(),
            rent_per_sqft = national.rent_per_area_unit(),
            "reference dataset validated"
        );

        Ok(Self { records, national })
    }

    /// Creates a dataset from a JSON array of records.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or the records fail validation.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<ReferenceRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Loads a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let dataset = Self::from_json(&json)?;
        info!(path = %path.display(), records = dataset.len(), "loaded JSON dataset");
        Ok(dataset)
    }

    /// Reads a dataset from CSV with a
    /// `state,city,location,size,bedrooms,bathrooms,parking,rent` header.
    ///
    /// # Errors
    ///
    /// Returns [`KirayaError::Csv`] for malformed rows, or a validation error.
    pub async fn from_csv_reader<R>(reader: R) -> Result<Self>
    where
        R: AsyncRead + Unpin + Send,
    {
        let mut deserializer = AsyncReaderBuilder::new()
            .trim(Trim::All)
            .create_deserializer(reader);
        let mut rows = deserializer.deserialize::<ReferenceRecord>();

        let mut records = Vec::new();
        while let Some(row) = rows.next().await {
            records.push(row.map_err(|e| KirayaError::Csv(e.to_string()))?);
        }

        Self::from_records(records)
    }

    /// Loads a dataset from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or its contents are invalid.
    pub async fn from_csv_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = tokio::fs::File::open(path).await?;
        let dataset = Self::from_csv_reader(file).await?;
        info!(path = %path.display(), records = dataset.len(), "loaded CSV dataset");
        Ok(dataset)
    }

    /// Loads a dataset from a `.json` or `.csv` file.
    ///
    /// # Errors
    ///
    /// Returns [`KirayaError::UnsupportedFormat`] for other extensions.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("json") => Self::from_json_file(path),
            Some("csv") => Self::from_csv_file(path).await,
            _ => Err(KirayaError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Returns all records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[ReferenceRecord] {
        &self.records
    }

    /// Returns an iterator over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, ReferenceRecord> {
        self.records.iter()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: construction rejects empty datasets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the records whose state equals `state` exactly.
    pub fn in_state<'a>(&'a self, state: &'a str) -> impl Iterator<Item = &'a ReferenceRecord> {
        self.records.iter().filter(move |r| r.state == state)
    }

    /// Returns the summary over every record.
    #[must_use]
    pub const fn national_summary(&self) -> &RentSummary {
        &self.national
    }

    /// Returns per-state summaries in order of first appearance.
    #[must_use]
    pub fn state_summaries(&self) -> Vec<(&str, RentSummary)> {
        let mut states: Vec<&str> = Vec::new();
        for record in &self.records {
            if !states.contains(&record.state.as_str()) {
                states.push(&record.state);
            }
        }

        states
            .into_iter()
            .filter_map(|state| RentSummary::of(self.in_state(state)).map(|s| (state, s)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ReferenceDataset {
    type Item = &'a ReferenceRecord;
    type IntoIter = std::slice::Iter<'a, ReferenceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Default for ReferenceDataset {
    fn default() -> Self {
        Self::global().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;

    const CSV: &str = "state,city,location,size,bedrooms,bathrooms,parking,rent
Karnataka, Bangalore, Whitefield, 685, 1, 1, 2, 71745
Karnataka,Bangalore,Whitefield,2176,1,1,2,64064
Goa,Panaji,Miramar,1200,2,2,1,30000
";

    #[test]
    fn test_global_dataset_loads() {
        let dataset = ReferenceDataset::global();
        assert_eq!(dataset.len(), 25);
        assert!(!dataset.is_empty());

        let first = &dataset.records()[0];
        assert_eq!(first.city, "Visakhapatnam");
        assert_relative_eq!(first.rent, 79151.0);
    }

    #[test]
    fn test_national_summary() {
        let dataset = ReferenceDataset::global();
        let national = dataset.national_summary();

        let total_rent: f64 = dataset.iter().map(|r| r.rent).sum();
        let total_size: f64 = dataset.iter().map(|r| r.size).sum();

        assert_eq!(national.count, 25);
        assert_relative_eq!(national.rent_per_area_unit(), total_rent / total_size);
    }

    #[test]
    fn test_in_state() {
        let dataset = ReferenceDataset::global();
        assert_eq!(dataset.in_state("Karnataka").count(), 3);
        assert_eq!(dataset.in_state("Andhra Pradesh").count(), 7);
        assert_eq!(dataset.in_state("karnataka").count(), 0);
        assert_eq!(dataset.in_state("Goa").count(), 0);
    }

    #[test]
    fn test_state_summaries_order() {
        let dataset = ReferenceDataset::global();
        let summaries = dataset.state_summaries();

        assert_eq!(summaries[0].0, "Andhra Pradesh");
        assert_eq!(summaries[0].1.count, 7);
        assert_eq!(summaries[1].0, "Karnataka");
        assert_eq!(summaries.iter().map(|(_, s)| s.count).sum::<usize>(), 25);
    }

    #[test]
    fn test_empty_dataset_rejected() {
        assert!(matches!(
            ReferenceDataset::from_records(Vec::new()),
            Err(KirayaError::EmptyDataset)
        ));
        assert!(matches!(
            ReferenceDataset::from_json("[]"),
            Err(KirayaError::EmptyDataset)
        ));
    }

    #[test]
    fn test_invalid_record_rejected() {
        let records = vec![
            ReferenceRecord::new("Goa", "Panaji", "Miramar", 1200.0, 2, 2, 1, 30000.0),
            ReferenceRecord::new("Goa", "Panaji", "Miramar", 0.0, 2, 2, 1, 30000.0),
        ];
        let err = ReferenceDataset::from_records(records).unwrap_err();
        assert!(matches!(err, KirayaError::InvalidRecord { index: 1, .. }));
    }

    #[tokio::test]
    async fn test_from_csv_reader() {
        let dataset = ReferenceDataset::from_csv_reader(CSV.as_bytes())
            .await
            .unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.records()[0].city, "Bangalore");
        assert_eq!(dataset.records()[0].parking, 2);
        assert_eq!(dataset.records()[2].location, "Miramar");
    }

    #[tokio::test]
    async fn test_csv_malformed_row() {
        let csv = "state,city,location,size,bedrooms,bathrooms,parking,rent\nGoa,Panaji,Miramar,big,2,2,1,30000\n";
        let err = ReferenceDataset::from_csv_reader(csv.as_bytes())
            .await
            .unwrap_err();
        assert!(matches!(err, KirayaError::Csv(_)));
    }

    #[tokio::test]
    async fn test_csv_header_only_is_empty() {
        let csv = "state,city,location,size,bedrooms,bathrooms,parking,rent\n";
        let err = ReferenceDataset::from_csv_reader(csv.as_bytes())
            .await
            .unwrap_err();
        assert!(matches!(err, KirayaError::EmptyDataset));
    }

    #[tokio::test]
    async fn test_load_dispatches_on_extension() {
        let mut csv_file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        csv_file.write_all(CSV.as_bytes()).unwrap();
        let dataset = ReferenceDataset::load(csv_file.path()).await.unwrap();
        assert_eq!(dataset.len(), 3);

        let mut json_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        json_file.write_all(RENT_DATA_JSON.as_bytes()).unwrap();
        let dataset = ReferenceDataset::load(json_file.path()).await.unwrap();
        assert_eq!(dataset.len(), 25);

        let txt_file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        assert!(matches!(
            ReferenceDataset::load(txt_file.path()).await,
            Err(KirayaError::UnsupportedFormat(_))
        ));
    }
}
