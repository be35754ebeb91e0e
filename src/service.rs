//! Session service boundary
//!
//! A [`SimulationSession`] owns one engine and talks to a [`GameService`]
//! for everything outside the simulation: fetching the play bank when the
//! game starts, persisting the completion payload, and releasing the game
//! when the caller walks away. Play resolution itself never awaits.

use crate::bank::{load_bank, PlayBank};
use crate::config::GamePolicy;
use crate::core::Matchup;
use crate::game::{CompletedGame, Decision, ExitSignal, GameEngine, Resolution};
use crate::{Result, SimError};
use rustc_hash::{FxHashMap, FxHashSet};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// External collaborator that stores play banks and finished games
pub trait GameService: Send + Sync {
    /// Fetch the play bank prepared for a game
    fn fetch_play_bank(&self, game_id: &str) -> impl Future<Output = Result<PlayBank>> + Send;

    /// Persist the completion payload of a finished game
    fn persist(
        &self,
        game_id: &str,
        payload: &CompletedGame,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Release a game that will not be completed
    fn release(&self, game_id: &str) -> impl Future<Output = Result<()>> + Send;
}

/// Directory-backed service: reads `<id>.bank.json`, writes `<id>.result.json`
#[derive(Debug, Clone)]
pub struct FileGameService {
    root: PathBuf,
}

impl FileGameService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileGameService { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bank_path(&self, game_id: &str) -> PathBuf {
        self.root.join(format!("{game_id}.bank.json"))
    }

    pub fn result_path(&self, game_id: &str) -> PathBuf {
        self.root.join(format!("{game_id}.result.json"))
    }
}

impl GameService for FileGameService {
    async fn fetch_play_bank(&self, game_id: &str) -> Result<PlayBank> {
        let path = self.bank_path(game_id);
        if !tokio::fs::try_exists(&path).await? {
            return Err(SimError::UnknownGame(game_id.to_string()));
        }
        load_bank(&path).await
    }

    async fn persist(&self, game_id: &str, payload: &CompletedGame) -> Result<()> {
        let json = serde_json::to_string_pretty(payload)?;
        let path = self.result_path(game_id);
        tokio::fs::write(&path, json).await?;
        log::info!("game {game_id} persisted to {}", path.display());
        Ok(())
    }

    async fn release(&self, game_id: &str) -> Result<()> {
        log::info!("game {game_id} released without a result");
        Ok(())
    }
}

/// Service that keeps everything in memory, for tests and embedding
#[derive(Debug, Default)]
pub struct InMemoryGameService {
    banks: RwLock<FxHashMap<String, PlayBank>>,
    results: RwLock<FxHashMap<String, Vec<CompletedGame>>>,
    released: RwLock<FxHashSet<String>>,
}

impl InMemoryGameService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_bank(&self, game_id: impl Into<String>, bank: PlayBank) {
        self.banks.write().await.insert(game_id.into(), bank);
    }

    /// Every payload persisted for a game, oldest first
    pub async fn results(&self, game_id: &str) -> Vec<CompletedGame> {
        self.results
            .read()
            .await
            .get(game_id)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn is_released(&self, game_id: &str) -> bool {
        self.released.read().await.contains(game_id)
    }
}

impl GameService for InMemoryGameService {
    async fn fetch_play_bank(&self, game_id: &str) -> Result<PlayBank> {
        self.banks
            .read()
            .await
            .get(game_id)
            .cloned()
            .ok_or_else(|| SimError::UnknownGame(game_id.to_string()))
    }

    async fn persist(&self, game_id: &str, payload: &CompletedGame) -> Result<()> {
        self.results
            .write()
            .await
            .entry(game_id.to_string())
            .or_default()
            .push(payload.clone());
        Ok(())
    }

    async fn release(&self, game_id: &str) -> Result<()> {
        self.released.write().await.insert(game_id.to_string());
        Ok(())
    }
}

/// One game bound to its service
pub struct SimulationSession<S: GameService> {
    game_id: String,
    engine: GameEngine,
    service: Arc<S>,
    persisted: Option<CompletedGame>,
}

impl<S: GameService> SimulationSession<S> {
    /// Fetch the game's play bank and start at the opening kickoff
    pub async fn start(
        service: Arc<S>,
        game_id: impl Into<String>,
        matchup: Matchup,
        policy: GamePolicy,
    ) -> Result<Self> {
        let game_id = game_id.into();
        let bank = service.fetch_play_bank(&game_id).await?;
        let engine = GameEngine::start(bank, matchup, policy)?;
        log::info!("game {game_id} started");
        Ok(SimulationSession {
            game_id,
            engine,
            service,
            persisted: None,
        })
    }

    /// Wrap an engine that is already running (e.g. one restored from a snapshot)
    pub fn from_engine(service: Arc<S>, game_id: impl Into<String>, engine: GameEngine) -> Self {
        SimulationSession {
            game_id: game_id.into(),
            engine,
            service,
            persisted: None,
        }
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut GameEngine {
        &mut self.engine
    }

    /// Resolve one play; see [`GameEngine::resolve`]
    pub fn resolve(&mut self, decision: Decision) -> Result<Option<Resolution>> {
        self.engine.resolve(decision)
    }

    pub fn is_persisted(&self) -> bool {
        self.persisted.is_some()
    }

    /// Persist the finished game
    ///
    /// The payload goes to the service exactly once; later calls return the
    /// same payload without contacting it. Fails with `GameInProgress` until
    /// the engine is complete.
    pub async fn complete(&mut self) -> Result<CompletedGame> {
        if let Some(payload) = &self.persisted {
            return Ok(payload.clone());
        }
        let payload = self.engine.complete()?;
        self.service.persist(&self.game_id, &payload).await?;
        self.persisted = Some(payload.clone());
        Ok(payload)
    }

    /// Walk away from the game without persisting anything new
    pub async fn exit(self) -> Result<ExitSignal> {
        self.service.release(&self.game_id).await?;
        Ok(self.engine.exit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::{generate_bank, save_bank};
    use crate::core::Team;
    use tempfile::TempDir;

    fn matchup() -> Matchup {
        Matchup::new(Team::new(1, "Home"), Team::new(2, "Away"))
    }

    async fn memory_service(game_id: &str) -> Arc<InMemoryGameService> {
        let service = Arc::new(InMemoryGameService::new());
        service
            .insert_bank(game_id, generate_bank(&matchup(), 21, 12))
            .await;
        service
    }

    fn finish<S: GameService>(session: &mut SimulationSession<S>) {
        while !session.engine().is_complete() {
            session.resolve(Decision::Auto).unwrap();
        }
    }

    #[tokio::test]
    async fn test_complete_persists_once() {
        let service = memory_service("g1").await;
        let mut session =
            SimulationSession::start(service.clone(), "g1", matchup(), GamePolicy::default())
                .await
                .unwrap();

        assert!(matches!(session.complete().await, Err(SimError::GameInProgress)));
        assert!(service.results("g1").await.is_empty());

        finish(&mut session);
        let first = session.complete().await.unwrap();
        let second = session.complete().await.unwrap();
        assert_eq!(first, second);
        assert!(session.is_persisted());
        assert_eq!(service.results("g1").await.len(), 1);
    }

    #[tokio::test]
    async fn test_exit_releases_without_persisting() {
        let service = memory_service("g2").await;
        let mut session =
            SimulationSession::start(service.clone(), "g2", matchup(), GamePolicy::default())
                .await
                .unwrap();
        session.resolve(Decision::Auto).unwrap();

        let signal = session.exit().await.unwrap();
        assert_eq!(signal.plays_played, 1);
        assert!(!signal.was_complete);
        assert!(service.is_released("g2").await);
        assert!(service.results("g2").await.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_game() {
        let service = Arc::new(InMemoryGameService::new());
        let result =
            SimulationSession::start(service, "missing", matchup(), GamePolicy::default()).await;
        assert!(matches!(result, Err(SimError::UnknownGame(id)) if id == "missing"));
    }

    #[tokio::test]
    async fn test_file_service_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let service = Arc::new(FileGameService::new(temp_dir.path()));
        save_bank(&generate_bank(&matchup(), 4, 12), service.bank_path("week1"))
            .await
            .unwrap();

        let mut session =
            SimulationSession::start(service.clone(), "week1", matchup(), GamePolicy::default())
                .await
                .unwrap();
        finish(&mut session);
        let payload = session.complete().await.unwrap();

        let written = tokio::fs::read_to_string(service.result_path("week1"))
            .await
            .unwrap();
        let parsed: CompletedGame = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, payload);

        let missing =
            SimulationSession::start(service, "week2", matchup(), GamePolicy::default()).await;
        assert!(matches!(missing, Err(SimError::UnknownGame(_))));
    }
}
