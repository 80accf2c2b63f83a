//! Periodic refresh of the cached game count served by `/count`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use sea_orm::DatabaseConnection;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::db::games::count_games;

/// Last known number of stored games. Starts at 0 until the first refresh.
#[derive(Debug, Default)]
pub struct GameCounter {
    count: AtomicU64,
}

impl GameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> u64 {
        self.count.load(Ordering::Acquire)
    }

    fn set(&self, value: u64) {
        self.count.store(value, Ordering::Release);
    }

    /// Re-query the row count. On failure the previous value is kept.
    pub async fn refresh(&self, db: &DatabaseConnection) {
        match count_games(db).await {
            Ok(count) => self.set(count),
            Err(e) => tracing::warn!("Failed to refresh game count, keeping {}: {}", self.get(), e),
        }
    }
}

/// Spawn the refresh loop. The first refresh happens immediately; the loop
/// exits when `shutdown` flips to true or its sender is dropped.
pub fn spawn_count_monitor(
    db: Arc<DatabaseConnection>,
    counter: Arc<GameCounter>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    counter.refresh(&db).await;
                    tracing::trace!("Game count is {}", counter.get());
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        tracing::debug!("Count monitor stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::games::{insert_game, NewGame};
    use crate::db::init_database;
    use sea_orm::{ConnectionTrait, Statement};
    use tempfile::TempDir;

    fn game(id: &str) -> NewGame {
        NewGame {
            id: id.to_string(),
            game_name: "g".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_refresh_updates_count() {
        let temp_dir = TempDir::new().unwrap();
        let db = init_database(&temp_dir.path().join("flappy.db")).await.unwrap();
        let counter = GameCounter::new();
        assert_eq!(counter.get(), 0);

        insert_game(&db, game("a")).await.unwrap();
        insert_game(&db, game("b")).await.unwrap();
        counter.refresh(&db).await;
        assert_eq!(counter.get(), 2);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_stale_value() {
        let temp_dir = TempDir::new().unwrap();
        let db = init_database(&temp_dir.path().join("flappy.db")).await.unwrap();
        let counter = GameCounter::new();

        insert_game(&db, game("a")).await.unwrap();
        counter.refresh(&db).await;
        assert_eq!(counter.get(), 1);

        db.execute(Statement::from_string(db.get_database_backend(), "DROP TABLE games".to_string()))
            .await
            .unwrap();
        counter.refresh(&db).await;
        assert_eq!(counter.get(), 1);
    }

    #[tokio::test]
    async fn test_monitor_loop_refreshes_and_stops() {
        let temp_dir = TempDir::new().unwrap();
        let db = Arc::new(init_database(&temp_dir.path().join("flappy.db")).await.unwrap());
        insert_game(&db, game("a")).await.unwrap();

        let counter = Arc::new(GameCounter::new());
        let (tx, rx) = watch::channel(false);
        let handle = spawn_count_monitor(db.clone(), counter.clone(), Duration::from_millis(20), rx);

        insert_game(&db, game("b")).await.unwrap();
        let mut seen = 0;
        for _ in 0..100 {
            seen = counter.get();
            if seen >= 2 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        assert_eq!(seen, 2);

        tx.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("monitor should stop")
            .unwrap();
    }
}
