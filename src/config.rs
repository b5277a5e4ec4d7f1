use std::env;
use std::path::PathBuf;

use crate::store::IdAssignment;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub bookings_file: PathBuf,
    pub site_dir: PathBuf,
    pub id_assignment: IdAssignment,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let data_dir = PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()));
        let bookings_file = env::var("BOOKINGS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("bookings.json"));

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            bookings_file,
            site_dir: PathBuf::from(env::var("SITE_DIR").unwrap_or_else(|_| "public".to_string())),
            id_assignment: env::var("BOOKING_ID_MODE")
                .map(|v| IdAssignment::parse(&v))
                .unwrap_or_default(),
        }
    }

    pub fn index_file(&self) -> PathBuf {
        self.site_dir.join("index.html")
    }
}
