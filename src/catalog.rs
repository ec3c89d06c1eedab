use crate::models::CatalogEntry;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use thiserror::Error;
use tokio::fs;

pub const DAY_RANGE: std::ops::RangeInclusive<u16> = 1..=365;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("day {0} appears more than once in the catalog")]
    DuplicateDay(u16),
    #[error("day {0} is outside 1..=365")]
    DayOutOfRange(u16),
    #[error("day {day} lists '{item}' more than once")]
    DuplicateItem { day: u16, item: String },
    #[error("day {0} has no items")]
    EmptyItems(u16),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    categories: Vec<CatalogEntry>,
}

/// Read-only lookup table mapping a day number to that day's quiz.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    entries: BTreeMap<u16, CatalogEntry>,
}

impl Catalog {
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut map = BTreeMap::new();
        for entry in entries {
            if !DAY_RANGE.contains(&entry.day) {
                return Err(CatalogError::DayOutOfRange(entry.day));
            }
            if entry.items.is_empty() {
                return Err(CatalogError::EmptyItems(entry.day));
            }
            let mut seen = BTreeSet::new();
            for item in &entry.items {
                if !seen.insert(item.as_str()) {
                    return Err(CatalogError::DuplicateItem {
                        day: entry.day,
                        item: item.clone(),
                    });
                }
            }
            let day = entry.day;
            if map.insert(day, entry).is_some() {
                return Err(CatalogError::DuplicateDay(day));
            }
        }
        Ok(Self { entries: map })
    }

    pub fn parse(bytes: &[u8]) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_slice(bytes)?;
        Self::from_entries(file.categories)
    }

    pub fn lookup(&self, day: u16) -> Option<&CatalogEntry> {
        self.entries.get(&day)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub async fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let bytes = fs::read(path).await?;
    Catalog::parse(&bytes)
}
