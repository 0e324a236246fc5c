//! Каталог аккаунтов. Для движка это внешний read-mostly справочник:
//! lookup по логину, полный список, приращение статистики.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Identity, StatsDelta};
use crate::infra::persistence::StoreError;

#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    /// Найти аккаунт по логину.
    async fn lookup_by_username(&self, username: &str) -> Result<Option<Identity>, StoreError>;

    /// Все аккаунты (для финального свистка).
    async fn list_all(&self) -> Result<Vec<Identity>, StoreError>;

    /// Прибавить статистику аккаунту. Неизвестный логин – не ошибка:
    /// запись могла пережить удаление аккаунта.
    async fn apply_stats_delta(&self, username: &str, delta: StatsDelta)
        -> Result<(), StoreError>;
}

/// In-memory каталог для тестов и локального запуска.
pub struct InMemoryIdentityDirectory {
    identities: RwLock<HashMap<String, Identity>>,
}

impl InMemoryIdentityDirectory {
    pub fn new() -> Self {
        Self {
            identities: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_identities(list: impl IntoIterator<Item = Identity>) -> Self {
        let map = list
            .into_iter()
            .map(|i| (i.username.clone(), i))
            .collect();
        Self {
            identities: RwLock::new(map),
        }
    }

    pub async fn insert(&self, identity: Identity) {
        self.identities
            .write()
            .await
            .insert(identity.username.clone(), identity);
    }
}

impl Default for InMemoryIdentityDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityDirectory for InMemoryIdentityDirectory {
    async fn lookup_by_username(&self, username: &str) -> Result<Option<Identity>, StoreError> {
        Ok(self.identities.read().await.get(username).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Identity>, StoreError> {
        Ok(self.identities.read().await.values().cloned().collect())
    }

    async fn apply_stats_delta(
        &self,
        username: &str,
        delta: StatsDelta,
    ) -> Result<(), StoreError> {
        if let Some(identity) = self.identities.write().await.get_mut(username) {
            identity.stats.games_played += delta.games_played;
            identity.stats.time_played_minutes += delta.time_played_minutes;
        }
        Ok(())
    }
}
