//! In-memory catalog store.
//!
//! Holds every entry in insertion order. Reads go through
//! [`CatalogStore::active`], so inactive entries never reach rendering.

use chrono::NaiveDate;

use crate::error::{CatalogError, CatalogResult};
use crate::types::{CatalogEntry, EntryStatus, EntryType, Tier};

/// Date format of the static data tables
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Ordered set of catalog entries with unique ids
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    entries: Vec<CatalogEntry>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry at the end of the catalog.
    ///
    /// Fails if a required field is blank or the id is already taken.
    pub fn add_entry(&mut self, entry: CatalogEntry) -> CatalogResult<()> {
        entry.validate()?;
        if self.contains(&entry.id) {
            return Err(CatalogError::DuplicateId(entry.id));
        }
        tracing::info!(id = %entry.id, kind = entry.entry_type.as_str(), "Catalog entry added");
        self.entries.push(entry);
        Ok(())
    }

    /// Remove an entry, returning it
    pub fn remove_entry(&mut self, id: &str) -> CatalogResult<CatalogEntry> {
        let index = self
            .position(id)
            .ok_or_else(|| CatalogError::EntryNotFound(id.to_string()))?;
        tracing::info!(id, "Catalog entry removed");
        Ok(self.entries.remove(index))
    }

    /// Change an entry's status; the only mutation an entry allows
    pub fn set_status(&mut self, id: &str, status: EntryStatus) -> CatalogResult<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| CatalogError::EntryNotFound(id.to_string()))?;
        if entry.status != status {
            tracing::info!(id, ?status, "Catalog entry status changed");
            entry.status = status;
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Active entries in catalog order
    pub fn active(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(|e| e.is_active())
    }

    /// Active entries of one type in catalog order
    pub fn active_of_type(&self, entry_type: EntryType) -> impl Iterator<Item = &CatalogEntry> {
        self.active().filter(move |e| e.entry_type == entry_type)
    }

    /// Every entry regardless of status
    pub fn all(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }
}

/// Hand-authored record from a static data table.
///
/// Blank strings stand for missing fields; they are rejected at load time.
#[derive(Debug, Clone, Copy)]
pub struct RawEntry {
    pub id: &'static str,
    pub entry_type: EntryType,
    pub brand_name: &'static str,
    pub category: &'static str,
    pub short_description: &'static str,
    pub link_url: &'static str,
    pub discount_code: Option<&'static str>,
    pub tier: Tier,
    pub featured: bool,
    pub status: EntryStatus,
    /// `YYYY-MM-DD`
    pub date_added: &'static str,
}

impl TryFrom<&RawEntry> for CatalogEntry {
    type Error = CatalogError;

    fn try_from(raw: &RawEntry) -> CatalogResult<Self> {
        let date_added = NaiveDate::parse_from_str(raw.date_added, DATE_FORMAT).map_err(|_| {
            CatalogError::MalformedDate {
                id: raw.id.to_string(),
                value: raw.date_added.to_string(),
            }
        })?;

        let entry = CatalogEntry {
            id: raw.id.to_string(),
            entry_type: raw.entry_type,
            brand_name: raw.brand_name.to_string(),
            category: raw.category.to_string(),
            short_description: raw.short_description.to_string(),
            link_url: raw.link_url.to_string(),
            discount_code: raw
                .discount_code
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            tier: raw.tier,
            featured: raw.featured,
            status: raw.status,
            date_added,
        };
        entry.validate()?;
        Ok(entry)
    }
}

/// Result of loading a static table
#[derive(Debug, Default)]
pub struct CatalogLoad {
    pub store: CatalogStore,
    /// Records that were skipped, with the reason
    pub rejected: Vec<CatalogError>,
}

/// Build a store from raw records, skipping and logging malformed ones
pub fn load_catalog<'a>(records: impl IntoIterator<Item = &'a RawEntry>) -> CatalogLoad {
    let mut load = CatalogLoad::default();

    for raw in records {
        let result = CatalogEntry::try_from(raw).and_then(|entry| load.store.add_entry(entry));
        if let Err(e) = result {
            tracing::warn!(id = raw.id, "Skipping catalog record: {}", e);
            load.rejected.push(e);
        }
    }

    tracing::debug!(
        loaded = load.store.len(),
        rejected = load.rejected.len(),
        "Catalog loaded"
    );
    load
}
