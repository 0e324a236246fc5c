//! Сервис ростера: все пользовательские действия входят сюда.
//!
//! Схема каждой мутации: (перечитать последний снапшот, если операция
//! чувствительна к гонкам) → чистый пересчёт в движке → запись целиком →
//! возврат нового снапшота вызывающему (оптимистичное локальное
//! обновление) → рассылка подписчикам через стор.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;

use crate::domain::{EditingTeams, Identity, PlayerId, RosterState};
use crate::engine::{self, NewPlayer, RemovalOutcome, WhistleOutcome};
use crate::infra::rng::SystemRng;
use crate::infra::{generate_player_id, now_millis, DocumentStore, IdentityDirectory};
use crate::notify::{
    format_roster_message, format_teams_message, DebouncedNotifier, Notifier, NotifyMessage,
};
use crate::service::ServiceError;

pub struct RosterService {
    store: Arc<dyn DocumentStore>,
    identities: Arc<dyn IdentityDirectory>,
    notifier: DebouncedNotifier,
}

impl RosterService {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        identities: Arc<dyn IdentityDirectory>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            identities,
            notifier: DebouncedNotifier::new(notifier),
        }
    }

    /// Вариант с нестандартным окном дебаунса (тесты, локальный запуск).
    pub fn with_debounce(
        store: Arc<dyn DocumentStore>,
        identities: Arc<dyn IdentityDirectory>,
        notifier: Arc<dyn Notifier>,
        debounce: Duration,
    ) -> Self {
        Self {
            store,
            identities,
            notifier: DebouncedNotifier::with_delay(notifier, debounce),
        }
    }

    /// Последний закоммиченный снапшот; если документа ещё нет –
    /// пустой ростер.
    pub async fn latest_roster(&self) -> Result<RosterState, ServiceError> {
        Ok(self.store.read_roster().await?.unwrap_or_default())
    }

    /// Подписка на новые снапшоты (для других подключённых клиентов).
    pub fn subscribe(&self) -> broadcast::Receiver<RosterState> {
        self.store.subscribe()
    }

    /// Устарели ли опубликованные команды. Считается на лету.
    pub async fn needs_team_update(&self) -> Result<bool, ServiceError> {
        Ok(engine::needs_team_update(&self.latest_roster().await?))
    }

    // ---------- запись ----------

    /// Записать гостя.
    ///
    /// Конкурентный протокол: непосредственно перед выбором места заново
    /// читаем последний снапшот из стора, а не то, что видел UI вызывающего.
    /// Окно между перечитыванием и записью остаётся – принятый
    /// last-writer-wins, см. документацию модуля.
    pub async fn register_guest(
        &self,
        actor: &Identity,
        candidate: NewPlayer,
    ) -> Result<RosterState, ServiceError> {
        ensure_not_blocked(actor)?;

        let latest = self.latest_roster().await?;
        let now = now_millis();
        let next =
            engine::register_guest(&latest, candidate, actor, generate_player_id(now), now)?;

        self.commit_and_announce(&next).await?;
        Ok(next)
    }

    /// Записаться "за себя". Тот же конкурентный протокол, что и у гостя.
    pub async fn register_self(&self, actor: &Identity) -> Result<RosterState, ServiceError> {
        ensure_not_blocked(actor)?;

        let latest = self.latest_roster().await?;
        let now = now_millis();
        let next = engine::register_self(&latest, actor, generate_player_id(now), now)?;

        self.commit_and_announce(&next).await?;
        Ok(next)
    }

    /// Удалить запись. Право: админ или автор записи.
    pub async fn remove_player(
        &self,
        actor: &Identity,
        id: &PlayerId,
    ) -> Result<RemovalOutcome, ServiceError> {
        ensure_not_blocked(actor)?;

        let latest = self.latest_roster().await?;
        let player = latest
            .find_player(id)
            .ok_or_else(|| engine::RosterError::PlayerNotFound(id.clone()))?;
        if !engine::registration::can_modify_entry(actor, player) {
            return Err(ServiceError::PermissionDenied(
                "удалять можно только свои записи",
            ));
        }

        let outcome = engine::remove_player(&latest, id)?;
        self.commit_and_announce(&outcome.roster).await?;
        Ok(outcome)
    }

    // ---------- подтверждения ----------

    /// Подтвердить/снять подтверждение. Право: админ или автор записи.
    pub async fn set_confirmed(
        &self,
        actor: &Identity,
        id: &PlayerId,
        value: bool,
    ) -> Result<RosterState, ServiceError> {
        ensure_not_blocked(actor)?;

        let latest = self.latest_roster().await?;
        let player = latest
            .find_player(id)
            .ok_or_else(|| engine::RosterError::PlayerNotFound(id.clone()))?;
        if !engine::registration::can_modify_entry(actor, player) {
            return Err(ServiceError::PermissionDenied(
                "подтверждать можно только свои записи",
            ));
        }

        let next = engine::set_confirmed(&latest, id, value)?;
        self.commit_and_announce(&next).await?;
        Ok(next)
    }

    pub async fn confirm_all(&self, actor: &Identity) -> Result<RosterState, ServiceError> {
        ensure_admin(actor, "подтвердить всех может только админ")?;
        let next = engine::confirm_all(&self.latest_roster().await?);
        self.commit_and_announce(&next).await?;
        Ok(next)
    }

    pub async fn unconfirm_all(&self, actor: &Identity) -> Result<RosterState, ServiceError> {
        ensure_admin(actor, "снять подтверждения может только админ")?;
        let next = engine::unconfirm_all(&self.latest_roster().await?);
        self.commit_and_announce(&next).await?;
        Ok(next)
    }

    // ---------- команды ----------

    /// Сгенерировать черновик команд. Черновик живёт у вызывающего
    /// и стор не трогает до публикации.
    pub async fn generate_teams(&self, actor: &Identity) -> Result<EditingTeams, ServiceError> {
        ensure_admin(actor, "генерировать команды может только админ")?;
        let latest = self.latest_roster().await?;
        let mut rng = SystemRng;
        Ok(engine::generate_teams(&latest, &mut rng)?)
    }

    /// Черновик из уже опубликованных команд (глубокая копия).
    pub async fn start_editing_published(
        &self,
        actor: &Identity,
    ) -> Result<EditingTeams, ServiceError> {
        ensure_admin(actor, "редактировать команды может только админ")?;
        Ok(engine::draft_from_published(&self.latest_roster().await?)?)
    }

    /// Опубликовать черновик. Единственная точка, где расклад становится
    /// durable; уведомление уходит немедленно, мимо дебаунса.
    pub async fn publish_teams(
        &self,
        actor: &Identity,
        draft: &EditingTeams,
    ) -> Result<RosterState, ServiceError> {
        ensure_admin(actor, "публиковать команды может только админ")?;

        let latest = self.latest_roster().await?;
        let next = engine::publish_teams(&latest, draft, &actor.username, now_millis());
        self.store.write_roster(&next).await?;

        if let Some(teams) = next.published_teams.as_ref() {
            self.notifier
                .send_now(NotifyMessage::new(format_teams_message(teams)))
                .await;
        }
        Ok(next)
    }

    pub async fn unpublish_teams(&self, actor: &Identity) -> Result<RosterState, ServiceError> {
        ensure_admin(actor, "снять публикацию может только админ")?;
        let next = engine::unpublish_teams(&self.latest_roster().await?);
        self.store.write_roster(&next).await?;
        Ok(next)
    }

    // ---------- жизненный цикл ----------

    pub async fn toggle_lock(&self, actor: &Identity) -> Result<RosterState, ServiceError> {
        ensure_admin(actor, "замок записи переключает только админ")?;
        let next = engine::toggle_lock(&self.latest_roster().await?);
        self.store.write_roster(&next).await?;
        Ok(next)
    }

    /// Финальный свисток: закоммитить статистику и сбросить ростер.
    ///
    /// Для вызывающего это одно действие, хотя записей несколько.
    /// Все записи выполняются в любом случае; первая ошибка запоминается
    /// и возвращается после того, как остальные попытки сделаны, –
    /// частичное применение возможно и не маскируется.
    pub async fn blow_final_whistle(
        &self,
        actor: &Identity,
    ) -> Result<WhistleOutcome, ServiceError> {
        ensure_admin(actor, "финальный свисток даёт только админ")?;

        let latest = self.latest_roster().await?;
        let identities = self.identities.list_all().await?;
        let outcome = engine::blow_final_whistle(&latest, &identities);

        let mut first_error: Option<ServiceError> = None;

        for (username, delta) in &outcome.stats {
            if let Err(err) = self.identities.apply_stats_delta(username, *delta).await {
                log::error!("статистика {username} не записалась: {err}");
                first_error.get_or_insert(err.into());
            }
        }

        match self.store.read_total_games().await {
            Ok(total) => {
                if let Err(err) = self
                    .store
                    .write_total_games(total + outcome.games_delta)
                    .await
                {
                    log::error!("счётчик игр не записался: {err}");
                    first_error.get_or_insert(err.into());
                }
            }
            Err(err) => {
                log::error!("счётчик игр не прочитался: {err}");
                first_error.get_or_insert(err.into());
            }
        }

        if let Err(err) = self.store.write_roster(&outcome.roster).await {
            log::error!("сброс ростера не записался: {err}");
            first_error.get_or_insert(err.into());
        }

        // Начался новый цикл – отложенное сообщение о старом уже неактуально.
        self.notifier.cancel_pending().await;

        match first_error {
            Some(err) => Err(err),
            None => Ok(outcome),
        }
    }

    // ---------- внутреннее ----------

    /// Записать снапшот и запланировать дебаунс-сообщение о ростере.
    async fn commit_and_announce(&self, next: &RosterState) -> Result<(), ServiceError> {
        self.store.write_roster(next).await?;
        self.notifier
            .schedule(NotifyMessage::new(format_roster_message(next)))
            .await;
        Ok(())
    }
}

fn ensure_not_blocked(actor: &Identity) -> Result<(), ServiceError> {
    if actor.is_blocked {
        return Err(ServiceError::PermissionDenied("аккаунт заблокирован"));
    }
    Ok(())
}

fn ensure_admin(actor: &Identity, reason: &'static str) -> Result<(), ServiceError> {
    ensure_not_blocked(actor)?;
    if !actor.is_admin {
        return Err(ServiceError::PermissionDenied(reason));
    }
    Ok(())
}
