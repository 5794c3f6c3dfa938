use std::time::{Duration, Instant};

/// Session-scoped counters shown in the header.
/// Nothing here survives the process.
pub struct SessionMetrics {
    pub game_start: Instant,
    pub elapsed: Duration,
    pub games_played: u32,
    pub high_score: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            game_start: Instant::now(),
            elapsed: Duration::ZERO,
            games_played: 0,
            high_score: 0,
        }
    }

    /// Refresh the elapsed-time reading for the current game
    pub fn refresh(&mut self) {
        self.elapsed = self.game_start.elapsed();
    }

    pub fn on_restart(&mut self) {
        self.game_start = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
    }

    /// Elapsed game time as mm:ss
    pub fn game_time(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
