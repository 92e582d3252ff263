//! Thin stateful wrapper around the pure engine.
//!
//! The engine itself is storage-free; `GameStore` holds the "current
//! game" and persists every new snapshot through a [`GameRepository`].
//! Swap the repository to change where games live (in memory, flat
//! file, remote database) without touching scoring logic.

use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::core::{GameId, GameState, HouseRules, PlayerHand, PlayerId};
use crate::engine;

/// Storage seam for finished and in-progress games.
pub trait GameRepository {
    /// Load a game by ID.
    fn load(&self, id: &GameId) -> Option<GameState>;

    /// Persist a snapshot, replacing any prior version.
    fn save(&mut self, state: &GameState);

    /// Remove a game.
    fn delete(&mut self, id: &GameId);
}

/// In-memory repository, mainly for tests and single-session use.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    games: FxHashMap<GameId, GameState>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl GameRepository for InMemoryRepository {
    fn load(&self, id: &GameId) -> Option<GameState> {
        self.games.get(id).cloned()
    }

    fn save(&mut self, state: &GameState) {
        self.games.insert(state.id.clone(), state.clone());
    }

    fn delete(&mut self, id: &GameId) {
        self.games.remove(id);
    }
}

/// Current-game store delegating all rules to the pure engine.
pub struct GameStore<R: GameRepository> {
    repository: R,
    current: Option<GameState>,
}

impl<R: GameRepository> GameStore<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            current: None,
        }
    }

    /// The game in progress, if any.
    #[must_use]
    pub fn current(&self) -> Option<&GameState> {
        self.current.as_ref()
    }

    /// Start a new game, replacing any current one.
    pub fn create_game<S: AsRef<str>>(&mut self, names: &[S], rules: HouseRules) -> &GameState {
        let state = engine::create_game(names, rules);
        info!("created game {} with {} players", state.id, state.player_count());
        self.repository.save(&state);
        self.current.insert(state)
    }

    /// Record a round against the current game.
    ///
    /// Returns `None` when no game is in progress.
    pub fn add_round(
        &mut self,
        player_hands: &[PlayerHand],
        yaniv_caller_id: &PlayerId,
    ) -> Option<&GameState> {
        let current = self.current.as_ref()?;
        let next = engine::add_round(current, player_hands, yaniv_caller_id);
        debug!(
            "game {}: round {} recorded, ended={}",
            next.id,
            next.round_count(),
            next.game_ended
        );
        self.repository.save(&next);
        Some(self.current.insert(next))
    }

    /// Force-end the current game.
    pub fn end_game(&mut self) -> Option<&GameState> {
        let current = self.current.as_ref()?;
        let next = engine::force_end(current);
        info!("game {} force-ended", next.id);
        self.repository.save(&next);
        Some(self.current.insert(next))
    }

    /// Drop the current game without deleting it from storage.
    pub fn reset(&mut self) {
        if let Some(state) = self.current.take() {
            debug!("game {} cleared from store", state.id);
        }
    }

    /// Load a stored game and make it current.
    pub fn resume(&mut self, id: &GameId) -> Option<&GameState> {
        let state = self.repository.load(id)?;
        Some(self.current.insert(state))
    }
}
