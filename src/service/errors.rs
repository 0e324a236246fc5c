use thiserror::Error;

use crate::engine::RosterError;
use crate::infra::StoreError;

/// Ошибки сервисного слоя – то, что уходит вызывающему UI.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Недостаточно прав. Отклоняется до любых вычислений состояния.
    #[error("Недостаточно прав: {0}")]
    PermissionDenied(&'static str),

    /// Ожидаемый отказ валидации из движка.
    #[error(transparent)]
    Validation(#[from] RosterError),

    /// Транзиентная ошибка хранилища. Показываем как "попробуйте ещё раз";
    /// оптимистичное локальное состояние при этом не откатывается.
    #[error(transparent)]
    Store(#[from] StoreError),
}
