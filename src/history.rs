use crate::{decode, encode, Grid, KeyValueStore, Snapshot};
use log::{info, warn};

/// Key of the persisted history entry.
pub const STORAGE_KEY: &str = "patterns";

/// Saved patterns, oldest first, with a cursor for stepping through them.
pub struct History {
    snapshots: Vec<Snapshot>,
    // Offset of the selected snapshot from the end: 1 is the newest one.
    // It is also the value after saving or restoring the latest pattern.
    back: usize,
}

impl Default for History {
    fn default() -> Self {
        Self {
            snapshots: vec![],
            back: 1,
        }
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the history from `store`; missing or unreadable data gives an empty history.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self::decode_or_default(store.get_string(STORAGE_KEY).as_deref())
    }

    pub fn decode_or_default(data: Option<&str>) -> Self {
        let Some(data) = data else {
            return Self::default();
        };
        match decode(data) {
            Ok(snapshots) => {
                info!("loaded {} saved patterns", snapshots.len());
                Self {
                    snapshots,
                    back: 1,
                }
            }
            Err(err) => {
                warn!("ignoring saved patterns: {err:#}");
                Self::default()
            }
        }
    }

    /// Overwrites the stored history with the current one.
    pub fn persist(&self, store: &mut dyn KeyValueStore) {
        match encode(&self.snapshots) {
            Ok(data) => {
                store.set_string(STORAGE_KEY, data);
                store.flush();
            }
            Err(err) => warn!("patterns were not saved: {err:#}"),
        }
    }

    /// Appends a copy of `grid` and persists the history.
    pub fn save(&mut self, grid: &Grid, store: &mut dyn KeyValueStore) {
        self.snapshots.push(Snapshot::capture(grid));
        self.back = 1;
        info!("saved pattern #{}", self.snapshots.len());
        self.persist(store);
    }

    pub fn clear_all(&mut self, store: &mut dyn KeyValueStore) {
        self.snapshots.clear();
        self.back = 1;
        info!("cleared saved patterns");
        self.persist(store);
    }

    /// Selects and returns the newest snapshot.
    pub fn restore_latest(&mut self) -> Option<&Snapshot> {
        let latest = self.snapshots.last()?;
        self.back = 1;
        Some(latest)
    }

    /// Moves the selection one snapshot back in time.
    ///
    /// Returns `None` and keeps the selection if it is already the oldest one.
    pub fn navigate_older(&mut self) -> Option<&Snapshot> {
        if self.back >= self.snapshots.len() {
            return None;
        }
        self.back += 1;
        self.selected()
    }

    /// Moves the selection one snapshot forward in time, never past the newest one.
    pub fn navigate_newer(&mut self) -> Option<&Snapshot> {
        if self.back <= 1 {
            return None;
        }
        self.back -= 1;
        self.selected()
    }

    pub fn selected(&self) -> Option<&Snapshot> {
        self.snapshots
            .len()
            .checked_sub(self.back)
            .and_then(|i| self.snapshots.get(i))
    }

    /// `(index, total)` of the selected snapshot, 1-based.
    pub fn position(&self) -> Option<(usize, usize)> {
        let total = self.snapshots.len();
        (total > 0).then(|| (total + 1 - self.back, total))
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
