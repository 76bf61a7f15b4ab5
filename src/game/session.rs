use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use super::{
    coins::CoinSet,
    config::GameConfig,
    direction::Direction,
    state::{Cell, CollisionType, SnakeBody},
};

/// What happened during one call to [`GameSession::update`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The snake moved this tick
    pub advanced: bool,
    /// A coin was eaten this tick
    pub coin_collected: bool,
    /// Cell of a coin spawned this tick
    pub spawned: Option<Cell>,
    /// Set on the tick the run ended
    pub collision: Option<CollisionType>,
}

/// One run of the game: snake, coins, counters and the terminal flag
pub struct GameSession<R = StdRng> {
    config: GameConfig,
    snake: SnakeBody,
    coins: CoinSet,
    tick: u64,
    score: u32,
    terminal: bool,
    collision: Option<CollisionType>,
    rng: R,
}

impl GameSession<StdRng> {
    /// Session with a generator seeded from OS entropy
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Session with a reproducible coin sequence
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let snake = Self::initial_snake(&config);
        let coins = CoinSet::new(config.max_coins);

        Self {
            config,
            snake,
            coins,
            tick: 0,
            score: 0,
            terminal: false,
            collision: None,
            rng,
        }
    }

    fn initial_snake(config: &GameConfig) -> SnakeBody {
        SnakeBody::new(Cell::ORIGIN, Direction::PosX, config.initial_snake_length)
    }

    /// Start a fresh run; the random generator keeps its state
    pub fn reset(&mut self) {
        info!(score = self.score, tick = self.tick, "session reset");
        self.snake = Self::initial_snake(&self.config);
        self.coins.clear();
        self.tick = 0;
        self.score = 0;
        self.terminal = false;
        self.collision = None;
    }

    /// Run one tick. Does nothing once the session is terminal.
    pub fn update(&mut self, input: Option<Direction>) -> TickReport {
        let mut report = TickReport::default();
        if self.terminal {
            return report;
        }

        self.tick += 1;
        if let Some(direction) = input {
            self.snake.set_direction(direction);
        }

        if self.tick % self.config.move_interval == 0 {
            self.snake.advance();
            report.advanced = true;

            if let Some(collision) = self.snake.collision(self.config.half_extent) {
                info!(?collision, score = self.score, tick = self.tick, "game over");
                self.terminal = true;
                self.collision = Some(collision);
                report.collision = Some(collision);
                return report;
            }

            let head = self.snake.head();
            if self.coins.consume(head) {
                self.snake.grow();
                self.score += 1;
                report.coin_collected = true;
                debug!(x = head.x, y = head.y, z = head.z, score = self.score, "coin collected");
            }
        }

        if self.tick % self.config.spawn_interval == 0 && !self.coins.is_full() {
            report.spawned = self
                .coins
                .spawn(&self.snake, self.config.half_extent, &mut self.rng);
            if let Some(cell) = report.spawned {
                trace!(x = cell.x, y = cell.y, z = cell.z, "coin spawned");
            }
        }

        report
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &SnakeBody {
        &self.snake
    }

    pub fn coins(&self) -> &CoinSet {
        &self.coins
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// What ended the run, if it has ended
    pub fn collision(&self) -> Option<CollisionType> {
        self.collision
    }

    #[cfg(test)]
    pub(crate) fn snake_mut(&mut self) -> &mut SnakeBody {
        &mut self.snake
    }

    #[cfg(test)]
    pub(crate) fn coins_mut(&mut self) -> &mut CoinSet {
        &mut self.coins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::seeded(GameConfig::default(), 1)
    }

    /// Run updates until the next advance
    fn step(session: &mut GameSession, input: Option<Direction>) -> TickReport {
        let mut report = session.update(input);
        while !report.advanced && !session.is_terminal() {
            report = session.update(None);
        }
        report
    }

    #[test]
    fn test_new_session() {
        let session = session();
        assert!(!session.is_terminal());
        assert_eq!(session.score(), 0);
        assert_eq!(session.tick(), 0);
        assert_eq!(session.snake().len(), 3);
        assert_eq!(session.snake().head(), Cell::ORIGIN);
        assert!(session.coins().is_empty());
    }

    #[test]
    fn test_tick_gating() {
        let mut session = session();
        let mut advanced = Vec::new();
        let mut spawned = Vec::new();

        for _ in 0..130 {
            let report = session.update(None);
            if report.advanced {
                advanced.push(session.tick());
            }
            if report.spawned.is_some() {
                spawned.push(session.tick());
            }
        }

        assert_eq!(advanced, vec![24, 48, 72, 96, 120]);
        assert_eq!(spawned, vec![128]);
        assert_eq!(session.snake().head(), Cell::new(5, 0, 0));
    }

    #[test]
    fn test_coin_collection_grows_on_next_advance() {
        let mut session = session();
        session.coins_mut().insert(Cell::new(1, 0, 0));

        let report = step(&mut session, None);
        assert!(report.coin_collected);
        assert_eq!(session.score(), 1);
        assert!(session.coins().is_empty());
        assert_eq!(session.snake().len(), 3);

        step(&mut session, None);
        assert_eq!(session.snake().len(), 4);

        step(&mut session, None);
        assert_eq!(session.snake().len(), 4);
    }

    #[test]
    fn test_boundary_collision_skips_coin_check() {
        let mut session = session();
        *session.snake_mut() = SnakeBody::new(Cell::new(6, 0, 0), Direction::PosX, 3);
        // Coin beside the head must survive the fatal tick.
        session.coins_mut().insert(Cell::new(6, 1, 0));

        let report = step(&mut session, None);
        assert_eq!(report.collision, Some(CollisionType::Wall));
        assert!(!report.coin_collected);
        assert!(session.is_terminal());
        assert_eq!(session.collision(), Some(CollisionType::Wall));
        assert_eq!(session.score(), 0);
        assert_eq!(session.coins().len(), 1);
    }

    #[test]
    fn test_collision_tick_does_not_consume_coin_under_head() {
        let mut session = session();
        // Head moves -Y onto (1,0,0), which is both a body segment and a coin.
        *session.snake_mut() = SnakeBody::from_segments(
            [
                Cell::new(1, 1, 0),
                Cell::new(2, 1, 0),
                Cell::new(2, 0, 0),
                Cell::new(1, 0, 0),
                Cell::new(0, 0, 0),
            ],
            Direction::NegY,
        );
        session.coins_mut().insert(Cell::new(1, 0, 0));

        let report = step(&mut session, None);
        assert_eq!(report.collision, Some(CollisionType::SelfCollision));
        assert!(session.is_terminal());
        assert_eq!(session.score(), 0);
        assert!(session.coins().contains(Cell::new(1, 0, 0)));
    }

    #[test]
    fn test_terminal_session_is_frozen() {
        let mut session = session();
        *session.snake_mut() = SnakeBody::new(Cell::new(6, 0, 0), Direction::PosX, 3);
        step(&mut session, None);
        assert!(session.is_terminal());

        let tick = session.tick();
        let head = session.snake().head();
        for _ in 0..300 {
            assert_eq!(session.update(Some(Direction::PosY)), TickReport::default());
        }
        assert_eq!(session.tick(), tick);
        assert_eq!(session.snake().head(), head);
        assert!(session.coins().is_empty());
    }

    #[test]
    fn test_reversal_input_is_ignored() {
        let mut session = session();
        step(&mut session, Some(Direction::NegX));
        assert_eq!(session.snake().head(), Cell::new(1, 0, 0));
        assert!(!session.is_terminal());
    }

    #[test]
    fn test_input_between_advances_is_remembered() {
        let mut session = session();
        session.update(Some(Direction::PosZ));
        step(&mut session, None);
        assert_eq!(session.snake().head(), Cell::new(0, 0, 1));
    }

    #[test]
    fn test_coin_cap_over_long_run() {
        let config = GameConfig {
            spawn_interval: 1,
            move_interval: 1_000_000,
            ..Default::default()
        };
        let mut session = GameSession::seeded(config, 99);
        for _ in 0..500 {
            session.update(None);
            assert!(session.coins().len() <= 5);
        }
        assert_eq!(session.coins().len(), 5);
        for coin in session.coins().iter() {
            assert!(!session.snake().contains(coin));
            assert!(coin.is_within(6));
        }
    }

    #[test]
    fn test_reset() {
        let mut session = session();
        session.coins_mut().insert(Cell::new(1, 0, 0));
        step(&mut session, None);
        *session.snake_mut() = SnakeBody::new(Cell::new(6, 0, 0), Direction::PosX, 3);
        step(&mut session, None);
        assert!(session.is_terminal());
        assert_eq!(session.score(), 1);

        session.reset();
        assert!(!session.is_terminal());
        assert_eq!(session.collision(), None);
        assert_eq!(session.score(), 0);
        assert_eq!(session.tick(), 0);
        assert_eq!(session.snake().len(), 3);
        assert_eq!(session.snake().head(), Cell::ORIGIN);
        assert_eq!(session.snake().direction(), Direction::PosX);
        assert!(session.coins().is_empty());
    }
}
