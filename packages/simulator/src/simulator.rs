//! Drives whole legs through the scoring service with a simple aiming model.

use std::sync::Arc;

use darts_backend::domain::catalog;
use darts_backend::{
    AppError, ExitMode, MatchLocks, MatchService, MemoryMatchStore, NewMatch, PlayerId,
    ScoringConfig, ScoringService, ThrowResponse, ThrowType,
};
use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

/// Per-leg line written to stdout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegResult {
    pub leg: u32,
    pub match_id: Uuid,
    /// Position of the winner in the throwing order.
    pub winner_seat: Option<usize>,
    pub winner: Option<PlayerId>,
    pub darts_thrown: u32,
    pub busts: u32,
    /// Darts that were aimed at a suggested checkout.
    pub checkout_attempts: u32,
}

pub struct LegSettings {
    pub players: usize,
    pub starting_score: u32,
    pub entry_mode: ExitMode,
    pub exit_mode: ExitMode,
    pub max_darts: u32,
    pub accuracy: f64,
}

pub struct Simulator {
    matches: MatchService,
    scoring: ScoringService,
    rng: StdRng,
}

impl Simulator {
    pub fn new(rng: StdRng) -> Self {
        let store = Arc::new(MemoryMatchStore::new());
        let locks = Arc::new(MatchLocks::new());
        let config = ScoringConfig::default();
        Self {
            matches: MatchService::new(store.clone(), locks.clone(), config.clone()),
            scoring: ScoringService::new(store, locks, config),
            rng,
        }
    }

    pub async fn play_leg(&mut self, leg: u32, settings: &LegSettings) -> Result<LegResult, AppError> {
        let players: Vec<PlayerId> = (0..settings.players).map(|_| Uuid::new_v4()).collect();
        let game = self
            .matches
            .create_match(NewMatch {
                players: players.clone(),
                starting_score: settings.starting_score,
                entry_mode: settings.entry_mode,
                exit_mode: settings.exit_mode,
            })
            .await?;

        let mut result = LegResult {
            leg,
            match_id: game.id,
            winner_seat: None,
            winner: None,
            darts_thrown: 0,
            busts: 0,
            checkout_attempts: 0,
        };
        let mut thrower = game.current_player;
        let mut last: Option<ThrowResponse> = None;

        while result.darts_thrown < settings.max_darts {
            let score = last
                .as_ref()
                .and_then(|r| r.scores.get(&thrower).copied())
                .unwrap_or(settings.starting_score);
            let suggested = last
                .as_ref()
                .and_then(|r| r.suggested_checkout.as_ref())
                .and_then(|c| c.first());
            if suggested.is_some() {
                result.checkout_attempts += 1;
            }

            let aim = suggested.unwrap_or_else(|| fallback_aim(score, settings));
            let landed = self.land(aim, settings.accuracy);
            let response = self.scoring.submit_throw(game.id, thrower, landed).await?;
            result.darts_thrown += 1;
            debug!(leg, %thrower, %aim, %landed, bust = response.bust, "Dart");

            if response.bust {
                result.busts += 1;
            }
            if response.won {
                result.winner = Some(thrower);
                result.winner_seat = players.iter().position(|&p| p == thrower);
                break;
            }
            thrower = response.next_player_id;
            last = Some(response);
        }

        self.matches.delete_match(game.id).await?;
        Ok(result)
    }

    fn land(&mut self, aim: ThrowType, accuracy: f64) -> ThrowType {
        if self.rng.random_bool(accuracy) {
            return aim;
        }
        let all = catalog::all_by_descending_value();
        all[self.rng.random_range(0..all.len())]
    }
}

/// Where to aim without a checkout: open with a legal entry dart, otherwise
/// the biggest dart that cannot bust.
fn fallback_aim(score: u32, settings: &LegSettings) -> ThrowType {
    if score == settings.starting_score {
        match settings.entry_mode {
            ExitMode::Double => return ThrowType::D20,
            ExitMode::Master | ExitMode::Straight => return ThrowType::T20,
        }
    }
    catalog::all_by_descending_value()
        .iter()
        .copied()
        .find(|&t| !settings.exit_mode.is_overthrow(score, t) && t.points() < score)
        .unwrap_or(ThrowType::S1)
}
