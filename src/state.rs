use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::AppConfig;
use crate::store::BookingStore;

pub struct AppState {
    pub store: Mutex<BookingStore>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(store: BookingStore, config: AppConfig) -> Self {
        Self {
            store: Mutex::new(store),
            config,
        }
    }

    pub fn store(&self) -> MutexGuard<'_, BookingStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
