pub mod sequence;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::errors::AppError;
use crate::models::{iso_timestamp, Booking, BookingRequest};
use sequence::Sequence;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: name, phone, datetime";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdAssignment {
    // Monotonic counter persisted in a `.seq` file next to the store.
    #[default]
    Sequence,
    // Previous record's id plus one, or the list length when that id is
    // missing. Matches files written by the old site.
    LastRecord,
}

impl IdAssignment {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" | "last_record" | "last-record" => IdAssignment::LastRecord,
            _ => IdAssignment::Sequence,
        }
    }
}

// The whole list is held in memory and rewritten to disk on every create.
#[derive(Debug)]
pub struct BookingStore {
    path: PathBuf,
    bookings: Vec<Booking>,
    ids: IdAssignment,
    sequence: Sequence,
}

impl BookingStore {
    pub fn open(path: impl Into<PathBuf>, ids: IdAssignment) -> anyhow::Result<Self> {
        let path = path.into();

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create data directory {}", dir.display()))?;
        }
        if !path.exists() {
            fs::write(&path, "[]")
                .with_context(|| format!("failed to create {}", path.display()))?;
        }

        let bookings = read_bookings(&path);
        let highest = bookings.iter().map(|b| b.id).max().unwrap_or(0);
        let sequence = Sequence::open(&path, highest);

        tracing::info!(
            path = %path.display(),
            count = bookings.len(),
            ids = ?ids,
            "opened booking store"
        );

        Ok(Self {
            path,
            bookings,
            ids,
            sequence,
        })
    }

    pub fn create(&mut self, mut request: BookingRequest) -> Result<Booking, AppError> {
        if !request.is_complete() {
            return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }
        request.drop_extra(&Booking::ASSIGNED_KEYS);

        let id = self.next_id()?;
        let booking = Booking {
            request,
            id,
            received_at: iso_timestamp(),
        };

        self.bookings.push(booking.clone());
        if let Err(e) = self.flush() {
            self.bookings.pop();
            return Err(e);
        }

        if self.ids == IdAssignment::Sequence {
            if let Err(e) = self.sequence.commit(id) {
                tracing::warn!(
                    error = %e,
                    path = %self.sequence.path().display(),
                    "failed to persist booking sequence"
                );
            }
        }

        tracing::info!(id, service = %booking.request.service, "booking stored");
        Ok(booking)
    }

    pub fn list(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn next_id(&self) -> Result<u64, AppError> {
        let next = match self.ids {
            IdAssignment::Sequence => self.sequence.peek_next(),
            IdAssignment::LastRecord => match self.bookings.last() {
                None => Some(1),
                Some(last) if last.id == 0 => Some(self.bookings.len() as u64 + 1),
                Some(last) => last.id.checked_add(1),
            },
        };
        next.ok_or(AppError::IdsExhausted)
    }

    fn flush(&self) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(&self.bookings)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

// Absent, empty and non-array files read as an empty list. Inside an array
// only entries that are not objects are skipped.
fn read_bookings(path: &Path) -> Vec<Booking> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, path = %path.display(), "could not read bookings, starting empty");
            return Vec::new();
        }
    };

    if raw.trim().is_empty() {
        return Vec::new();
    }

    let entries: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(error = %e, path = %path.display(), "bookings file is corrupt, starting empty");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Booking>(entry) {
            Ok(booking) => Some(booking),
            Err(e) => {
                tracing::warn!(error = %e, index, path = %path.display(), "skipping unreadable booking");
                None
            }
        })
        .collect()
}
