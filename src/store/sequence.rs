use std::fs;
use std::io;
use std::path::{Path, PathBuf};

// Last issued booking id, persisted next to the bookings file.
#[derive(Debug)]
pub struct Sequence {
    path: PathBuf,
    last: u64,
}

impl Sequence {
    pub fn open(store_path: &Path, floor: u64) -> Self {
        let path = store_path.with_extension("seq");
        let persisted = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(0);

        Self {
            path,
            last: persisted.max(floor),
        }
    }

    pub fn peek_next(&self) -> Option<u64> {
        self.last.checked_add(1)
    }

    pub fn commit(&mut self, id: u64) -> io::Result<()> {
        self.last = self.last.max(id);
        fs::write(&self.path, self.last.to_string())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
