//! Level initialisation.

use hashbrown::HashSet;
use log::info;

use super::{ArenaMatch, Scheduled};
use crate::board::SceneRefs;
use crate::config::ArenaConfig;
use crate::egg::Egg;
use crate::enemy::Enemy;
use crate::error::SetupError;
use crate::player::Player;
use crate::score::Team;
use crate::turn::{Phase, TurnState};

/// Builds one player per configured seat, in seat order.
pub(super) fn seat_players(config: &ArenaConfig) -> Result<Vec<Player>, SetupError> {
    let mut taken = HashSet::new();
    config
        .players
        .iter()
        .enumerate()
        .map(|(index, seat)| {
            let player = Player::new(
                index,
                seat.slot,
                seat.team,
                seat.spawn.unwrap_or_default(),
                config.player,
            )?;
            if !taken.insert(seat.slot) {
                return Err(SetupError::DuplicateSlot(seat.slot));
            }
            Ok(player)
        })
        .collect()
}

impl ArenaMatch {
    /// Sets up the current level from scratch.
    ///
    /// Shows the level card, asks the board collaborator for the layout and
    /// resolves its markers, rebuilds enemies and team rosters, clears the
    /// score and egg state and places every player. Play begins once the
    /// level card has been up for the configured start delay.
    ///
    /// # Errors
    ///
    /// Returns the board's [`SetupError`] or a missing-marker error; the
    /// match stays in [`Phase::Setup`] and will not start.
    pub fn init_game(&mut self) -> Result<(), SetupError> {
        self.phase = Phase::Setup;
        self.turn = TurnState::default();
        self.presenter.set_level_text(&format!("Round {}", self.level));
        self.presenter.set_level_image_visible(true);

        let layout = self.board.setup_scene(self.level)?;
        let scene = SceneRefs::resolve(&layout)?;
        self.scene = scene;
        self.walls = layout.walls;
        self.enemies = layout
            .enemies
            .iter()
            .enumerate()
            .map(|(i, spawn)| Enemy::new(i, *spawn, &self.config.enemy))
            .collect();
        self.projectiles.clear();
        self.rebuild_rosters();

        self.score.reset();
        self.presenter.set_score_text(&self.score.to_string());
        self.egg = Egg::new(scene.egg_spawn, self.config.egg);
        for (player, seat) in self.players.iter_mut().zip(&self.config.players) {
            let spawn = seat
                .spawn
                .unwrap_or_else(|| scene.safe_zone.random_point(&mut self.rng));
            player.reset_for_level(spawn);
        }

        self.timers.schedule(
            self.clock + self.config.timing.level_start_delay,
            Scheduled::HideLevelImage { level: self.level },
        );
        info!(
            "round {} ready: {} players, {} enemies, {} walls",
            self.level,
            self.players.len(),
            self.enemies.len(),
            self.walls.len()
        );
        Ok(())
    }

    fn rebuild_rosters(&mut self) {
        self.left_roster.clear();
        self.right_roster.clear();
        for player in &self.players {
            match player.team() {
                Team::Left => self.left_roster.push(player.index()),
                Team::Right => self.right_roster.push(player.index()),
            }
        }
    }
}
