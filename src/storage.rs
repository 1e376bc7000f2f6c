use crate::{Grid, Snapshot};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// String key-value store the history is persisted into.
pub trait KeyValueStore {
    fn get_string(&self, key: &str) -> Option<String>;

    fn set_string(&mut self, key: &str, value: String);

    /// Writes pending changes to durable storage, if there is any.
    fn flush(&mut self) {}
}

/// In-process store, used when the host has no persistent storage.
#[derive(Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

/// Stored cell value: older data may hold booleans instead of numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredCell {
    Number(u8),
    Bool(bool),
}

impl StoredCell {
    fn alive(self) -> Result<bool> {
        match self {
            Self::Number(0) | Self::Bool(false) => Ok(false),
            Self::Number(1) | Self::Bool(true) => Ok(true),
            Self::Number(x) => Err(anyhow!("unexpected cell value {x}")),
        }
    }
}

#[derive(Serialize)]
#[serde(transparent)]
struct EncodedGrid(Vec<Vec<u8>>);

/// Serializes snapshots as a JSON array of row-major `0`/`1` matrices.
pub fn encode(snapshots: &[Snapshot]) -> Result<String> {
    let grids = snapshots
        .iter()
        .map(|s| {
            EncodedGrid(
                s.grid()
                    .iter_rows()
                    .map(|row| row.iter().map(|&c| c as u8).collect())
                    .collect(),
            )
        })
        .collect::<Vec<_>>();
    serde_json::to_string(&grids).context("failed to serialize saved patterns")
}

/// Parses the format written by [`encode`].
pub fn decode(data: &str) -> Result<Vec<Snapshot>> {
    let grids: Vec<Vec<Vec<StoredCell>>> =
        serde_json::from_str(data).context("saved patterns are not a list of matrices")?;
    grids
        .into_iter()
        .enumerate()
        .map(|(i, rows)| {
            let rows = rows
                .into_iter()
                .map(|row| row.into_iter().map(StoredCell::alive).collect())
                .collect::<Result<Vec<Vec<bool>>>>()
                .with_context(|| format!("pattern #{i} has invalid cells"))?;
            Grid::from_rows(rows)
                .map(Snapshot::from)
                .ok_or_else(|| anyhow!("pattern #{i} is empty or not rectangular"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_numbers() {
        let grid = Grid::with_alive(2, 3, &[(0, 1), (1, 2)]);
        let data = encode(&[Snapshot::capture(&grid)]).unwrap();
        assert_eq!(data, "[[[0,1,0],[0,0,1]]]");
    }

    #[test]
    fn test_decode_accepts_booleans() {
        let snapshots = decode("[[[true,false],[0,1]]]").unwrap();
        assert_eq!(snapshots.len(), 1);
        assert_eq!(
            snapshots[0].grid(),
            &Grid::with_alive(2, 2, &[(0, 0), (1, 1)])
        );
    }

    #[test]
    fn test_decode_empty_list() {
        assert!(decode("[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode("").is_err());
        assert!(decode("{\"a\": 1}").is_err());
        assert!(decode("[[[0,1],[1]]]").is_err());
        assert!(decode("[[]]").is_err());
        assert!(decode("[[[2]]]").is_err());
        assert!(decode("[[[\"x\"]]]").is_err());
    }
}
