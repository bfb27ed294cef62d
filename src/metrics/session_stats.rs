use std::time::{Duration, Instant};

use crate::game::GameStatus;

/// Stats for the lifetime of the process; nothing is written to disk
#[derive(Debug)]
pub struct SessionStats {
    run_started: Option<Instant>,
    run_time: Duration,
    best_score: u32,
    games_played: u32,
    wins: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            run_started: None,
            run_time: Duration::ZERO,
            best_score: 0,
            games_played: 0,
            wins: 0,
        }
    }

    pub fn on_game_start(&mut self) {
        self.run_started = Some(Instant::now());
        self.run_time = Duration::ZERO;
    }

    /// Freeze the clock and fold the final score in
    pub fn on_game_end(&mut self, status: GameStatus, final_score: u32) {
        self.refresh();
        self.run_started = None;
        self.games_played += 1;
        self.best_score = self.best_score.max(final_score);
        if status == GameStatus::Won {
            self.wins += 1;
        }
    }

    /// Advance the clock of the running game
    pub fn refresh(&mut self) {
        if let Some(started) = self.run_started {
            self.run_time = started.elapsed();
        }
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.run_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut stats = SessionStats::new();
        assert_eq!(stats.format_time(), "00:00");

        stats.run_time = Duration::from_secs(125);
        assert_eq!(stats.format_time(), "02:05");

        stats.run_time = Duration::from_secs(3661);
        assert_eq!(stats.format_time(), "61:01");
    }

    #[test]
    fn test_best_score_never_decreases() {
        let mut stats = SessionStats::new();

        stats.on_game_end(GameStatus::GameOver, 10);
        stats.on_game_end(GameStatus::GameOver, 4);
        assert_eq!(stats.best_score(), 10);

        stats.on_game_end(GameStatus::Won, 15);
        assert_eq!(stats.best_score(), 15);
        assert_eq!(stats.games_played(), 3);
        assert_eq!(stats.wins(), 1);
    }

    #[test]
    fn test_clock_frozen_after_game_end() {
        let mut stats = SessionStats::new();
        stats.on_game_start();
        std::thread::sleep(Duration::from_millis(20));
        stats.on_game_end(GameStatus::GameOver, 0);
        let frozen = stats.run_time;

        std::thread::sleep(Duration::from_millis(20));
        stats.refresh();

        assert!(frozen >= Duration::from_millis(20));
        assert_eq!(stats.run_time, frozen);
    }

    #[test]
    fn test_start_resets_clock() {
        let mut stats = SessionStats::new();
        stats.run_time = Duration::from_secs(90);

        stats.on_game_start();
        stats.refresh();

        assert!(stats.run_time < Duration::from_secs(1));
    }
}
