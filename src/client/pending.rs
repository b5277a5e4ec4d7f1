use std::sync::Arc;

use anyhow::Context;

use crate::models::{BookingRequest, PendingBooking};
use crate::storage::Storage;

pub const PENDING_KEY: &str = "gs_bookings";

// Append-only list of bookings the server never received.
#[derive(Clone)]
pub struct PendingStore {
    storage: Arc<dyn Storage>,
}

impl PendingStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // Unreadable or non-array contents read as an empty list.
    pub fn load(&self) -> Vec<PendingBooking> {
        let raw = match self.storage.get_item(PENDING_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "could not read pending bookings");
                return Vec::new();
            }
        };

        let entries: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "pending bookings are corrupt, treating as empty");
                return Vec::new();
            }
        };

        entries
            .into_iter()
            .filter_map(|entry| {
                serde_json::from_value::<PendingBooking>(entry)
                    .map_err(|e| tracing::warn!(error = %e, "skipping unreadable pending booking"))
                    .ok()
            })
            .collect()
    }

    pub fn count(&self) -> usize {
        self.load().len()
    }

    pub fn append(&self, request: BookingRequest) -> anyhow::Result<PendingBooking> {
        let pending = PendingBooking::new(request);

        let mut all = self.load();
        all.push(pending.clone());
        let json = serde_json::to_string(&all)?;
        self.storage
            .set_item(PENDING_KEY, &json)
            .context("failed to save pending booking")?;

        Ok(pending)
    }
}
