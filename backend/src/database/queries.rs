//! In-memory store implementations (data access objects).
//!
//! These back the services during development and in tests. Each operation
//! takes the collection lock exactly once, so a single store call always
//! observes a consistent view of the data.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::models::{HealthMetric, HealthProfile};
use super::{MetricStore, ProfileStore, StoreError};

#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<String, HealthProfile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<HealthProfile>, StoreError> {
        Ok(self.profiles.read().await.get(username).cloned())
    }

    async fn save(&self, profile: HealthProfile) -> Result<(), StoreError> {
        self.profiles
            .write()
            .await
            .insert(profile.username.clone(), profile);
        Ok(())
    }

    async fn delete(&self, profile: &HealthProfile) -> Result<(), StoreError> {
        self.profiles.write().await.remove(&profile.username);
        Ok(())
    }
}

/// Metrics live in a single insertion-ordered list; a user's history is the
/// filtered view of that list, which preserves per-user insertion order.
#[derive(Default)]
pub struct InMemoryMetricStore {
    metrics: RwLock<Vec<HealthMetric>>,
}

impl InMemoryMetricStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MetricStore for InMemoryMetricStore {
    async fn find_history(&self, username: &str) -> Result<Vec<HealthMetric>, StoreError> {
        Ok(self
            .metrics
            .read()
            .await
            .iter()
            .filter(|metric| metric.username == username)
            .cloned()
            .collect())
    }

    async fn save(&self, metric: HealthMetric) -> Result<(), StoreError> {
        self.metrics.write().await.push(metric);
        Ok(())
    }

    async fn delete_all_for_user(&self, profile: &HealthProfile) -> Result<(), StoreError> {
        self.metrics
            .write()
            .await
            .retain(|metric| metric.username != profile.username);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::models::HealthMetricType;
    use super::*;

    fn profile(username: &str) -> HealthProfile {
        HealthProfile {
            username: username.into(),
            full_name: None,
            email: None,
            date_of_birth: None,
        }
    }

    fn metric(username: &str, value: f64) -> HealthMetric {
        HealthMetric {
            username: username.into(),
            metric_type: HealthMetricType::HeartRate,
            value,
        }
    }

    #[tokio::test]
    async fn profile_store_round_trips_by_username() {
        let store = InMemoryProfileStore::new();
        store.save(profile("testuser")).await.unwrap();

        let found = store.find_by_username("testuser").await.unwrap();
        assert_eq!(found, Some(profile("testuser")));
        assert_eq!(store.find_by_username("other").await.unwrap(), None);

        store.delete(&profile("testuser")).await.unwrap();
        assert_eq!(store.find_by_username("testuser").await.unwrap(), None);
    }

    #[tokio::test]
    async fn metric_history_preserves_insertion_order_per_user() {
        let store = InMemoryMetricStore::new();
        store.save(metric("testuser", 60.0)).await.unwrap();
        store.save(metric("other", 80.0)).await.unwrap();
        store.save(metric("testuser", 62.0)).await.unwrap();

        let history = store.find_history("testuser").await.unwrap();
        let values: Vec<f64> = history.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![60.0, 62.0]);
    }

    #[tokio::test]
    async fn delete_all_for_user_leaves_other_users_untouched() {
        let store = InMemoryMetricStore::new();
        store.save(metric("testuser", 60.0)).await.unwrap();
        store.save(metric("other", 80.0)).await.unwrap();

        store.delete_all_for_user(&profile("testuser")).await.unwrap();

        assert!(store.find_history("testuser").await.unwrap().is_empty());
        assert_eq!(store.find_history("other").await.unwrap().len(), 1);
    }
}
