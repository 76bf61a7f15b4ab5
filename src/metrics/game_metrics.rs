use std::time::Duration;

use crate::game::CollisionType;

/// Statistics across the runs of one program invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMetrics {
    pub high_score: u32,
    pub games_played: u32,
    pub last_score: u32,
    /// Length of the last run in ticks
    pub last_run_ticks: u64,
    /// What ended the last run
    pub last_collision: Option<CollisionType>,
    /// Ticks per second, used to turn tick counts into wall time
    pub tick_rate: u32,
}

impl GameMetrics {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            high_score: 0,
            games_played: 0,
            last_score: 0,
            last_run_ticks: 0,
            last_collision: None,
            tick_rate: tick_rate.max(1),
        }
    }

    pub fn on_game_over(&mut self, final_score: u32, ticks: u64, collision: Option<CollisionType>) {
        self.games_played += 1;
        self.last_score = final_score;
        self.last_run_ticks = ticks;
        self.last_collision = collision;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    /// True if the last run set the current high score
    pub fn is_new_high_score(&self) -> bool {
        self.games_played > 0 && self.last_score > 0 && self.last_score == self.high_score
    }

    pub fn ticks_to_duration(&self, ticks: u64) -> Duration {
        Duration::from_millis(ticks * 1000 / u64::from(self.tick_rate))
    }

    pub fn format_time(&self, ticks: u64) -> String {
        let total_secs = self.ticks_to_duration(ticks).as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new(30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let metrics = GameMetrics::new(30);
        assert_eq!(metrics.format_time(125 * 30), "02:05");
        assert_eq!(metrics.format_time(0), "00:00");
        assert_eq!(metrics.format_time(29), "00:00");
        assert_eq!(metrics.format_time(3661 * 30), "61:01");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut metrics = GameMetrics::default();

        metrics.on_game_over(10, 100, Some(CollisionType::Wall));
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.games_played, 1);
        assert!(metrics.is_new_high_score());

        metrics.on_game_over(5, 50, Some(CollisionType::SelfCollision));
        assert_eq!(metrics.high_score, 10); // Should not decrease
        assert_eq!(metrics.games_played, 2);
        assert_eq!(metrics.last_score, 5);
        assert_eq!(metrics.last_collision, Some(CollisionType::SelfCollision));
        assert!(!metrics.is_new_high_score());

        metrics.on_game_over(15, 200, None);
        assert_eq!(metrics.high_score, 15); // Should update
        assert_eq!(metrics.games_played, 3);
        assert_eq!(metrics.last_run_ticks, 200);
        assert_eq!(metrics.last_collision, None);
    }

    #[test]
    fn test_zero_tick_rate_is_clamped() {
        let metrics = GameMetrics::new(0);
        assert_eq!(metrics.tick_rate, 1);
        assert_eq!(metrics.format_time(61), "01:01");
    }
}
