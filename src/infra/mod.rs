//! Инфраструктурный слой вокруг движка ростера:
//! - генерация ID записей;
//! - RNG-реализации для генератора команд;
//! - фабрика персистентности (документ + подписки);
//! - каталог аккаунтов.

pub mod identity_store;
pub mod ids;
pub mod persistence;
pub mod rng;

pub use identity_store::{IdentityDirectory, InMemoryIdentityDirectory};
pub use ids::{generate_player_id, now_millis};
pub use persistence::{DocumentStore, InMemoryDocumentStore, StoreError};
pub use rng::{DeterministicRng, SystemRng};
