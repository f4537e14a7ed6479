use adivina_data::{GameReport, StatsLedger, StatsSnapshot};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use std::{io::ErrorKind, path::PathBuf};
use thiserror::Error;
use tokio::{fs, sync::Mutex};
use tracing::{debug, warn};

/// Fixed key the snapshot is stored under
const STORAGE_KEY: &str = "adivina-palabra-stats";

/// File backed key-value store holding the stats snapshot as a JSON blob
///
/// Unreadable or corrupt data degrades to the zero-valued default, a broken
/// stats file never surfaces to the player.
pub struct StatsStore {
    path: PathBuf,
    // serializes read-modify-write cycles
    lock: Mutex<()>,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse stats file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl StatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn read_key(&self) -> Result<Option<Value>, StorageError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let mut map: Map<String, Value> = serde_json::from_str(&raw)?;
        Ok(map.remove(STORAGE_KEY))
    }

    async fn write_key(&self, value: Value) -> Result<(), StorageError> {
        // keep other keys of the file intact
        let mut map = match fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            Err(_) => Map::new(),
        };
        map.insert(STORAGE_KEY.to_string(), value);
        fs::write(&self.path, serde_json::to_string_pretty(&Value::Object(map))?).await?;
        Ok(())
    }

    async fn load(&self) -> StatsSnapshot {
        match self.read_key().await {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(stats) => stats,
                Err(e) => {
                    warn!("corrupt stats snapshot, falling back to default: {e}");
                    StatsSnapshot::default()
                }
            },
            Ok(None) => StatsSnapshot::default(),
            Err(e) => {
                warn!("failed to read stats, falling back to default: {e}");
                StatsSnapshot::default()
            }
        }
    }

    async fn store(&self, stats: &StatsSnapshot) {
        match serde_json::to_value(stats) {
            Ok(value) => {
                if let Err(e) = self.write_key(value).await {
                    warn!("failed to persist stats: {e}");
                }
            }
            Err(e) => warn!("failed to serialize stats: {e}"),
        }
    }
}

#[async_trait]
impl StatsLedger for StatsStore {
    async fn record_game(&self, report: &GameReport) -> StatsSnapshot {
        let _guard = self.lock.lock().await;
        let mut stats = self.load().await;
        stats.record(report, Utc::now());
        self.store(&stats).await;
        debug!(
            "recorded game, {} played, streak {}",
            stats.total_games, stats.current_streak
        );
        stats
    }

    async fn snapshot(&self) -> StatsSnapshot {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    async fn reset(&self) {
        let _guard = self.lock.lock().await;
        self.store(&StatsSnapshot::default()).await;
    }
}
