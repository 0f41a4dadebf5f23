//! Single-player match: human paddle on the left, computer on the right

use glam::Vec2;
use hecs::World;
use log::{debug, info, warn};

use crate::fsm::{MatchAction, MatchFsm, MatchState, TransitionResult};
use crate::host::DrawSurface;
use crate::systems::reset_positions;
use crate::{
    create_ball, create_paddle, step, Ball, Config, Events, GameMap, GameRng, InputState, Paddle,
    PaddleControl, Score, Side,
};

/// What happened while draining the accumulator for one rendered frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Logic ticks run this frame
    pub ticks: u32,
    /// Scoring side of every point, in order
    pub points: Vec<Side>,
    pub winner: Option<Side>,
    /// Backlog discarded because the tick cap was hit, in ms
    pub dropped_ms: f64,
}

pub struct Game {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    fsm: MatchFsm,
    /// Real time not yet consumed by a full tick, in ms
    accumulator: f64,
    last_time: f64,
}

impl Game {
    pub fn new(config: Config, seed: u64, map: &GameMap) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        create_paddle(
            &mut world,
            Paddle::new(
                Side::Left,
                map.paddle_spawn(Side::Left).y,
                config.human_paddle_speed,
                PaddleControl::Keyboard,
            ),
        );
        create_paddle(
            &mut world,
            Paddle::new(
                Side::Right,
                map.paddle_spawn(Side::Right).y,
                config.cpu_paddle_speed,
                PaddleControl::TrackBall,
            ),
        );

        let mut ball = Ball::new(map.ball_spawn(), Vec2::X, config.ball_speed);
        ball.reset(map, &mut rng);
        create_ball(&mut world, ball);

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            fsm: MatchFsm::new(),
            accumulator: 0.0,
            last_time: 0.0,
        }
    }

    pub fn state(&self) -> MatchState {
        self.fsm.state()
    }

    pub fn is_running(&self) -> bool {
        self.fsm.is_running()
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    /// Begin a fresh match at 0 : 0 from any state
    pub fn start(&mut self, now_ms: f64, map: &GameMap) -> TransitionResult {
        let result = self.fsm.transition(MatchAction::Start);
        self.score = Score::new();
        self.events.clear();
        reset_positions(&mut self.world, map, &mut self.rng);
        self.accumulator = 0.0;
        self.last_time = now_ms;
        info!("Match started on {}x{} surface", map.width, map.height);
        result
    }

    /// Halt the match; score and positions are kept
    pub fn stop(&mut self) -> TransitionResult {
        let result = self.fsm.transition(MatchAction::Stop);
        if result.success {
            info!("Match stopped at {}", self.score);
        }
        result
    }

    /// Run one fixed logic tick. Returns false (and does nothing) when stopped.
    pub fn update(&mut self, map: &GameMap, input: &InputState) -> bool {
        if !self.is_running() {
            return false;
        }

        let dt = self.config.tick_secs();
        step(
            &mut self.world,
            map,
            &self.config,
            &mut self.score,
            &mut self.events,
            input,
            &mut self.rng,
            dt,
        );

        if let Some(side) = self.events.scored {
            debug!("Point to {:?}, score {}", side, self.score);
        }
        if let Some(winner) = self.events.winner {
            self.fsm.transition(MatchAction::Win);
            info!("{:?} wins the match {}", winner, self.score);
        }
        true
    }

    /// Consume wall-clock time since the previous frame in fixed ticks.
    ///
    /// Leftover time below one tick carries over to the next frame.
    pub fn advance(&mut self, now_ms: f64, map: &GameMap, input: &InputState) -> FrameReport {
        let mut report = FrameReport::default();
        if !self.is_running() {
            return report;
        }

        let elapsed = (now_ms - self.last_time).max(0.0);
        self.last_time = now_ms;
        self.accumulator += elapsed;

        let tick_ms = self.config.tick_ms();
        while self.accumulator > tick_ms {
            if let Some(cap) = self.config.max_ticks_per_frame {
                if report.ticks >= cap {
                    report.dropped_ms = self.accumulator;
                    warn!(
                        "Tick cap of {} hit, dropping {:.1}ms of backlog",
                        cap, self.accumulator
                    );
                    self.accumulator = 0.0;
                    break;
                }
            }

            if !self.update(map, input) {
                break;
            }
            report.ticks += 1;
            self.accumulator -= tick_ms;

            if let Some(side) = self.events.scored {
                report.points.push(side);
            }
            if let Some(winner) = self.events.winner {
                report.winner = Some(winner);
            }
        }

        report
    }

    /// Clear the surface and fill paddle and ball rectangles
    pub fn draw<S: DrawSurface + ?Sized>(&self, map: &GameMap, surface: &mut S) {
        surface.clear();
        for side in [Side::Left, Side::Right] {
            if let Some(paddle) = self.paddle(side) {
                surface.fill_rect(map.paddle_rect(&paddle));
            }
        }
        if let Some(ball) = self.ball() {
            surface.fill_rect(map.ball_rect(&ball));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Aabb;

    const SURFACE: GameMap = GameMap {
        width: 800.0,
        height: 600.0,
    };

    fn started_game() -> Game {
        let mut game = Game::new(Config::new(), 42, &SURFACE);
        game.start(0.0, &SURFACE);
        game
    }

    fn place_ball(game: &mut Game, pos: Vec2, dir: Vec2) {
        for (_e, ball) in game.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.dir = dir;
        }
    }

    #[derive(Default)]
    struct RecordingSurface {
        clears: usize,
        rects: Vec<Aabb>,
    }

    impl DrawSurface for RecordingSurface {
        fn size(&self) -> GameMap {
            SURFACE
        }

        fn clear(&mut self) {
            self.clears += 1;
            self.rects.clear();
        }

        fn fill_rect(&mut self, rect: Aabb) {
            self.rects.push(rect);
        }
    }

    #[test]
    fn test_new_game_is_stopped() {
        let game = Game::new(Config::new(), 1, &SURFACE);
        assert_eq!(game.state(), MatchState::Stopped);
        assert!(game.ball().is_some());
        assert!(game.paddle(Side::Left).is_some());
        assert!(game.paddle(Side::Right).is_some());
    }

    #[test]
    fn test_fresh_match_layout() {
        let game = started_game();
        assert!(game.is_running());
        assert_eq!(game.score.to_string(), "0 : 0");
        assert_eq!(game.ball().unwrap().pos, Vec2::new(400.0, 300.0));
        assert_eq!(game.paddle(Side::Left).unwrap().y, 300.0);
        assert_eq!(game.paddle(Side::Right).unwrap().y, 300.0);
    }

    #[test]
    fn test_left_exit_scores_for_computer() {
        let mut game = started_game();
        place_ball(&mut game, Vec2::new(1.0, 300.0), Vec2::new(-1.0, 0.0));

        assert!(game.update(&SURFACE, &InputState::default()));

        assert_eq!(game.score.to_string(), "0 : 1");
        assert_eq!(game.events.scored, Some(Side::Right));
        assert_eq!(game.ball().unwrap().pos, SURFACE.ball_spawn());
        assert_eq!(game.paddle(Side::Left).unwrap().y, 300.0);
        assert_eq!(game.paddle(Side::Right).unwrap().y, 300.0);
        assert!(game.is_running());
    }

    #[test]
    fn test_right_exit_scores_for_human() {
        let mut game = started_game();
        place_ball(&mut game, Vec2::new(799.0, 100.0), Vec2::new(1.0, 0.0));

        game.update(&SURFACE, &InputState::default());

        assert_eq!(game.score, Score { left: 1, right: 0 });
    }

    #[test]
    fn test_match_point_stops_the_game() {
        let mut game = started_game();
        game.score = Score { left: 10, right: 10 };
        place_ball(&mut game, Vec2::new(799.0, 100.0), Vec2::new(1.0, 0.0));

        game.update(&SURFACE, &InputState::default());

        assert_eq!(game.score.to_string(), "11 : 10");
        assert!(!game.is_running());
        assert_eq!(game.events.winner, Some(Side::Left));

        // Further updates are no-ops
        let ball_before = game.ball().unwrap();
        assert!(!game.update(&SURFACE, &InputState::default()));
        assert_eq!(game.ball().unwrap(), ball_before);
        assert_eq!(game.score.to_string(), "11 : 10");
    }

    #[test]
    fn test_no_win_below_threshold() {
        let mut game = started_game();
        game.score = Score { left: 9, right: 10 };
        place_ball(&mut game, Vec2::new(799.0, 100.0), Vec2::new(1.0, 0.0));

        game.update(&SURFACE, &InputState::default());

        assert_eq!(game.score.to_string(), "10 : 10");
        assert!(game.is_running());
    }

    #[test]
    fn test_stop_keeps_score_and_start_resets_it() {
        let mut game = started_game();
        game.score = Score { left: 4, right: 2 };
        assert!(game.stop().success);
        assert_eq!(game.score, Score { left: 4, right: 2 });
        assert!(!game.update(&SURFACE, &InputState::default()));

        game.start(1000.0, &SURFACE);
        assert_eq!(game.score, Score::new());
        assert!(game.is_running());
    }

    #[test]
    fn test_accumulator_runs_fixed_ticks() {
        let mut game = started_game();
        place_ball(&mut game, Vec2::new(400.0, 300.0), Vec2::new(1.0, 0.0));

        let report = game.advance(35.0, &SURFACE, &InputState::default());

        assert_eq!(report.ticks, 3);
        assert!((game.accumulator() - 5.0).abs() < 1e-9);
        // Three 10ms ticks at 200px/s
        assert!((game.ball().unwrap().pos.x - 406.0).abs() < 1e-3);

        let report = game.advance(40.0, &SURFACE, &InputState::default());
        assert_eq!(report.ticks, 0, "10ms accumulated is not more than one tick");
        let report = game.advance(41.0, &SURFACE, &InputState::default());
        assert_eq!(report.ticks, 1);
    }

    #[test]
    fn test_uncapped_catch_up_drains_backlog() {
        let mut game = started_game();
        place_ball(&mut game, Vec2::new(400.0, 300.0), Vec2::new(0.0, 1.0));

        let report = game.advance(505.0, &SURFACE, &InputState::default());

        assert_eq!(report.ticks, 50);
        assert_eq!(report.dropped_ms, 0.0);
    }

    #[test]
    fn test_tick_cap_drops_backlog() {
        let config = Config {
            max_ticks_per_frame: Some(4),
            ..Config::default()
        };
        let mut game = Game::new(config, 3, &SURFACE);
        game.start(0.0, &SURFACE);

        let report = game.advance(1000.0, &SURFACE, &InputState::default());

        assert_eq!(report.ticks, 4);
        assert!(report.dropped_ms > 900.0);
        assert_eq!(game.accumulator(), 0.0);
    }

    #[test]
    fn test_advance_reports_points_and_winner() {
        let mut game = started_game();
        game.score = Score { left: 10, right: 3 };
        place_ball(&mut game, Vec2::new(799.0, 100.0), Vec2::new(1.0, 0.0));

        let report = game.advance(100.0, &SURFACE, &InputState::default());

        assert_eq!(report.points, vec![Side::Left]);
        assert_eq!(report.winner, Some(Side::Left));
        assert_eq!(report.ticks, 1, "ticks stop once the match is over");
    }

    #[test]
    fn test_stopped_game_does_not_advance() {
        let mut game = Game::new(Config::new(), 5, &SURFACE);
        let report = game.advance(1000.0, &SURFACE, &InputState::default());
        assert_eq!(report, FrameReport::default());
    }

    #[test]
    fn test_draw_fills_three_rects() {
        let game = started_game();
        let mut surface = RecordingSurface::default();

        game.draw(&SURFACE, &mut surface);

        assert_eq!(surface.clears, 1);
        assert_eq!(surface.rects.len(), 3);
        assert_eq!(surface.rects[2], SURFACE.ball_rect(&game.ball().unwrap()));
    }

    #[test]
    fn test_resize_applies_on_next_tick() {
        let mut game = started_game();
        let small = GameMap::new(400.0, 200.0);
        let input = InputState {
            up: false,
            down: true,
        };
        for _ in 0..200 {
            game.update(&small, &input);
        }
        let (_, max) = small.paddle_y_range();
        assert!(game.paddle(Side::Left).unwrap().y <= max);
    }
}
