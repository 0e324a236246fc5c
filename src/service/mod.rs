//! Оркестрация поверх движка: права, конкурентный протокол
//! "перечитай-пересчитай-закоммить", запись в стор и уведомления.

pub mod errors;
pub mod roster_service;

pub use errors::ServiceError;
pub use roster_service::RosterService;
