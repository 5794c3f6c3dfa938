use std::collections::VecDeque;
use std::time::Duration;

use super::direction::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// One move in `direction`, wrapped into a `width` x `height` grid.
    /// Exiting one edge re-enters from the opposite edge.
    pub fn stepped(&self, direction: Direction, width: usize, height: usize) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: (self.x + dx).rem_euclid(width as i32),
            y: (self.y + dy).rem_euclid(height as i32),
        }
    }
}

/// The snake: a head plus the trail of segments behind it.
///
/// The body holds the cells the head most recently vacated, oldest (the tail
/// tip) at the front of the deque, the segment right behind the head at the
/// back. The head itself is never part of the body.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Current head cell
    pub head: Position,
    /// Direction of the next move
    pub direction: Direction,
    /// Body segments trailing the head
    pub body: VecDeque<Position>,
}

impl Snake {
    pub fn new(head: Position, direction: Direction) -> Self {
        Self {
            head,
            direction,
            body: VecDeque::new(),
        }
    }

    /// Check if a position lies on a body segment
    pub fn body_contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Number of body segments trailing the head
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Grow by one segment, placed in the cell the head just vacated
    pub fn grow(&mut self, vacated: Position) {
        self.body.push_back(vacated);
    }

    /// Recycle the oldest segment into the cell the head just vacated.
    /// A snake with no body has nothing to drag.
    pub fn drag_tail(&mut self, vacated: Position) {
        if self.body.pop_front().is_some() {
            self.body.push_back(vacated);
        }
    }
}

/// Lifecycle phase of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Paused,
    GameOver,
}

/// Complete game state.
///
/// Mutated only by [`crate::game::GameEngine::tick`] and the entry points
/// below; the render layer reads it as a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub phase: Phase,
    pub snake: Snake,
    /// Cell of the current apple, `None` while no apple is on the grid
    pub apple: Option<Position>,
    pub score: u32,
    pub grid_width: usize,
    pub grid_height: usize,
    /// Time accumulated toward the next discrete move
    pub clock: Duration,
    /// Set once a turn has been accepted in the current move window
    pub turned: bool,
}

impl GameState {
    /// Fresh state: head at the origin heading right, no body, no apple
    pub fn new(grid_width: usize, grid_height: usize) -> Self {
        Self {
            phase: Phase::Playing,
            snake: Snake::new(Position::new(0, 0), Direction::Right),
            apple: None,
            score: 0,
            grid_width,
            grid_height,
            clock: Duration::ZERO,
            turned: false,
        }
    }

    /// Request a direction change.
    ///
    /// At most one change is honored per discrete move, and reversing
    /// straight into the body is ignored; a snake with no body may double
    /// back freely. Rejected requests do not consume the move's change.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.phase != Phase::Playing || self.turned {
            return;
        }
        if direction == self.snake.direction {
            return;
        }
        if direction.is_opposite(self.snake.direction) && !self.snake.is_empty() {
            return;
        }
        self.snake.direction = direction;
        self.turned = true;
    }

    /// Toggle between Playing and Paused. Ignored on the game-over screen.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Playing => Phase::Paused,
            Phase::Paused => Phase::Playing,
            Phase::GameOver => Phase::GameOver,
        };
    }
}
