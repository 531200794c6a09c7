use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::shared::AppError;

use super::models::SportsActivity;

/// Whole-document storage boundary for activities. There are no
/// partial-field updates: every mutation reads the full document and
/// writes it back. Two concurrent admin sessions are not arbitrated;
/// the later `upsert` wins.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    async fn get(&self, activity_id: &str) -> Result<Option<SportsActivity>, AppError>;
    async fn upsert(&self, activity: &SportsActivity) -> Result<(), AppError>;
    async fn list(&self) -> Result<Vec<SportsActivity>, AppError>;
    async fn remove(&self, activity_id: &str) -> Result<(), AppError>;
}

#[derive(Default)]
pub struct InMemoryActivityRepository {
    activities: Arc<RwLock<HashMap<String, SportsActivity>>>,
}

impl InMemoryActivityRepository {
    pub fn new() -> Self {
        Self {
            activities: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn get(&self, activity_id: &str) -> Result<Option<SportsActivity>, AppError> {
        let activities = self.activities.read().await;
        Ok(activities.get(activity_id).cloned())
    }

    async fn upsert(&self, activity: &SportsActivity) -> Result<(), AppError> {
        let mut activities = self.activities.write().await;
        activities.insert(activity.id.clone(), activity.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<SportsActivity>, AppError> {
        let activities = self.activities.read().await;
        Ok(activities.values().cloned().collect())
    }

    async fn remove(&self, activity_id: &str) -> Result<(), AppError> {
        let mut activities = self.activities.write().await;
        activities.remove(activity_id);
        Ok(())
    }
}
