//! Фабрика персистентности: один общий документ ростера + подписки.
//!
//! Движок про хранилище ничего не знает – сервис получает стор как
//! зависимость, в тестах подставляется in-memory реализация.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::{broadcast, RwLock};

use crate::domain::RosterState;

/// Логический ключ живого документа ростера.
pub const ROSTER_DOC_KEY: &str = "game_registration";

/// Транзиентная ошибка слоя хранения (сеть/сервис недоступны).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Хранилище недоступно: {0}")]
pub struct StoreError(pub String);

/// Абстракция хранилища документов с подписками.
///
/// Семантика записей – полная замена документа, не частичные патчи.
/// Подписчики получают каждый закоммиченный снапшот (at-least-once,
/// без гарантий порядка относительно собственных последующих записей).
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Прочитать последний закоммиченный снапшот ростера.
    async fn read_roster(&self) -> Result<Option<RosterState>, StoreError>;

    /// Записать снапшот целиком (last-writer-wins).
    async fn write_roster(&self, roster: &RosterState) -> Result<(), StoreError>;

    /// Подписаться на новые снапшоты ростера.
    fn subscribe(&self) -> broadcast::Receiver<RosterState>;

    /// Глобальный счётчик сыгранных игр.
    async fn read_total_games(&self) -> Result<u64, StoreError>;

    async fn write_total_games(&self, total: u64) -> Result<(), StoreError>;
}

/// In-memory реализация для тестов и локального запуска.
///
/// Документы лежат сериализованными в JSON – как и в настоящей фабрике,
/// так что несовместимый снапшот всплывает уже здесь.
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<String, serde_json::Value>>,
    total_games: RwLock<u64>,
    updates: broadcast::Sender<RosterState>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        let (updates, _) = broadcast::channel(64);
        Self {
            documents: RwLock::new(HashMap::new()),
            total_games: RwLock::new(0),
            updates,
        }
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn read_roster(&self) -> Result<Option<RosterState>, StoreError> {
        match self.documents.read().await.get(ROSTER_DOC_KEY) {
            Some(doc) => serde_json::from_value(doc.clone())
                .map(Some)
                .map_err(|e| StoreError(e.to_string())),
            None => Ok(None),
        }
    }

    async fn write_roster(&self, roster: &RosterState) -> Result<(), StoreError> {
        let doc = serde_json::to_value(roster).map_err(|e| StoreError(e.to_string()))?;
        self.documents
            .write()
            .await
            .insert(ROSTER_DOC_KEY.to_string(), doc);
        // Некому слушать – не ошибка.
        let _ = self.updates.send(roster.clone());
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<RosterState> {
        self.updates.subscribe()
    }

    async fn read_total_games(&self) -> Result<u64, StoreError> {
        Ok(*self.total_games.read().await)
    }

    async fn write_total_games(&self, total: u64) -> Result<(), StoreError> {
        *self.total_games.write().await = total;
        Ok(())
    }
}
