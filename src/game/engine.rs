use std::time::Duration;

use rand::Rng;

use super::config::GameConfig;
use super::state::{GameState, Phase, Position};

/// Drives the game state machine.
///
/// The engine owns the fixed configuration and the RNG used for apple
/// placement; all mutable game data lives in the [`GameState`] passed by
/// reference into [`GameEngine::tick`].
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the state every game starts and restarts from
    pub fn reset(&self) -> GameState {
        GameState::new(self.config.grid_width, self.config.grid_height)
    }

    /// Feed elapsed wall-clock time into the game.
    ///
    /// Once the accumulated time crosses the step interval the snake advances
    /// one cell and both the accumulator and the once-per-move turn latch are
    /// cleared. No-op while paused or after game over, so callers can keep
    /// ticking unconditionally.
    pub fn tick(&mut self, state: &mut GameState, delta: Duration) {
        if state.phase != Phase::Playing {
            return;
        }

        state.clock += delta;
        if state.clock < self.config.step_interval {
            return;
        }
        state.clock = Duration::ZERO;
        state.turned = false;

        self.advance(state);
    }

    /// One discrete move: place a missing apple, step the head with wrap,
    /// then resolve self-collision, eating, or the tail dragging along.
    fn advance(&mut self, state: &mut GameState) {
        if state.apple.is_none() {
            state.apple = Some(self.place_apple(state));
        }

        let vacated = state.snake.head;
        state.snake.head =
            vacated.stepped(state.snake.direction, state.grid_width, state.grid_height);

        if state.snake.body_contains(state.snake.head) {
            state.phase = Phase::GameOver;
            return;
        }

        if state.apple == Some(state.snake.head) {
            state.snake.grow(vacated);
            state.score += self.config.apple_reward;
            state.apple = None;
        } else {
            state.snake.drag_tail(vacated);
        }
    }

    /// Sample grid cells until one misses the head. Body segments are not
    /// rejected, so an apple can appear under the snake.
    fn place_apple(&mut self, state: &GameState) -> Position {
        loop {
            let pos = Position::new(
                self.rng.gen_range(0..state.grid_width) as i32,
                self.rng.gen_range(0..state.grid_height) as i32,
            );
            if pos != state.snake.head {
                return pos;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;

    const STEP: Duration = Duration::from_millis(200);

    #[test]
    fn test_reset_yields_fresh_state() {
        let engine = GameEngine::new(GameConfig::default());
        let state = engine.reset();

        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.head, Position::new(0, 0));
        assert_eq!(state.snake.direction, Direction::Right);
        assert!(state.snake.is_empty());
        assert!(state.apple.is_none());
    }

    #[test]
    fn test_head_moves_one_cell_per_step() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();

        for _ in 0..3 {
            engine.tick(&mut state, STEP);
        }

        assert_eq!(state.snake.head, Position::new(3, 0));
    }

    #[test]
    fn test_sub_step_deltas_accumulate() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();

        engine.tick(&mut state, Duration::from_millis(120));
        assert_eq!(state.snake.head, Position::new(0, 0));

        engine.tick(&mut state, Duration::from_millis(80));
        assert_eq!(state.snake.head, Position::new(1, 0));
    }

    fn wrap_case(start: Position, direction: Direction, expected: Position) {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();
        state.snake.head = start;
        state.snake.direction = direction;

        engine.tick(&mut state, STEP);

        assert_eq!(state.snake.head, expected);
    }

    #[test]
    fn test_wraps_around_every_edge() {
        wrap_case(Position::new(5, 2), Direction::Right, Position::new(0, 2));
        wrap_case(Position::new(0, 2), Direction::Left, Position::new(5, 2));
        wrap_case(Position::new(2, 0), Direction::Up, Position::new(2, 5));
        wrap_case(Position::new(2, 5), Direction::Down, Position::new(2, 0));
    }

    #[test]
    fn test_eating_grows_scores_and_consumes_apple() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();
        state.apple = Some(Position::new(1, 0));

        engine.tick(&mut state, STEP);

        assert_eq!(state.snake.head, Position::new(1, 0));
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.body[0], Position::new(0, 0));
        assert_eq!(state.score, 20);
        assert!(state.apple.is_none());
    }

    #[test]
    fn test_apple_respawns_on_the_step_after_eating() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();
        state.apple = Some(Position::new(1, 0));

        engine.tick(&mut state, STEP);
        assert!(state.apple.is_none());

        engine.tick(&mut state, STEP);
        match state.apple {
            Some(apple) => assert_ne!(apple, state.snake.head),
            // The fresh apple landed straight in the head's path and was
            // eaten in the same move
            None => assert_eq!(state.score, 40),
        }
    }

    #[test]
    fn test_apple_placement_rejects_the_head_cell() {
        let mut engine = GameEngine::new(GameConfig::small());

        for _ in 0..50 {
            let mut state = engine.reset();
            engine.tick(&mut state, STEP);
            // Placement happened before the move, with the head still at the
            // origin
            if let Some(apple) = state.apple {
                assert_ne!(apple, Position::new(0, 0));
            }
        }
    }

    #[test]
    fn test_tail_follows_the_head() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();
        state.snake.head = Position::new(2, 0);
        state.snake.body.push_back(Position::new(0, 0));
        state.snake.body.push_back(Position::new(1, 0));
        state.apple = Some(Position::new(9, 9));

        engine.tick(&mut state, STEP);

        assert_eq!(state.snake.head, Position::new(3, 0));
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.snake.body[0], Position::new(1, 0));
        assert_eq!(state.snake.body[1], Position::new(2, 0));
    }

    #[test]
    fn test_self_collision_ends_the_game() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();
        state.snake.head = Position::new(2, 2);
        state.snake.body.push_back(Position::new(3, 2));
        state.apple = Some(Position::new(9, 9));

        engine.tick(&mut state, STEP);

        assert_eq!(state.phase, Phase::GameOver);
        // The head moved onto the segment, then the game froze
        assert_eq!(state.snake.head, Position::new(3, 2));
        assert_eq!(state.snake.len(), 1);
    }

    #[test]
    fn test_game_over_freezes_until_restart() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();
        state.snake.head = Position::new(2, 2);
        state.snake.body.push_back(Position::new(3, 2));
        state.apple = Some(Position::new(9, 9));
        engine.tick(&mut state, STEP);
        assert_eq!(state.phase, Phase::GameOver);

        let frozen = state.clone();
        engine.tick(&mut state, STEP);
        engine.tick(&mut state, Duration::from_secs(5));
        assert_eq!(state, frozen);

        state = engine.reset();
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.score, 0);
        assert!(state.snake.is_empty());
        assert!(state.apple.is_none());
    }

    #[test]
    fn test_one_turn_honored_per_step() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();

        state.set_direction(Direction::Down);
        state.set_direction(Direction::Right);
        assert_eq!(state.snake.direction, Direction::Down);

        // The step clears the latch
        engine.tick(&mut state, STEP);
        state.set_direction(Direction::Right);
        assert_eq!(state.snake.direction, Direction::Right);
    }

    #[test]
    fn test_paused_game_does_not_advance() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();

        state.toggle_pause();
        engine.tick(&mut state, Duration::from_secs(1));
        assert_eq!(state.snake.head, Position::new(0, 0));
        assert_eq!(state.clock, Duration::ZERO);

        state.toggle_pause();
        engine.tick(&mut state, STEP);
        assert_eq!(state.snake.head, Position::new(1, 0));
    }
}
