use crate::render::{render, Snapshot, Surface};
use crate::systems::*;
use crate::{
    create_ball, create_paddle, AiOffset, Backdrop, Ball, Config, Events, FlashCounter, GameRng,
    Paddle, Palette, Rgb, Score, Side,
};
use hecs::{Entity, World};
use tracing::info;

/// The whole game: entities plus the resources the systems share
///
/// Mutated only by [`Game::tick`] / [`Game::step`], and by
/// [`Game::advance_clock`] for the presentation-only backdrop.
pub struct Game {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub palette: Palette,
    pub backdrop: Backdrop,
    pub frame_count: u32,
    ball: Entity,
    left_paddle: Entity,
    right_paddle: Entity,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self::with_config(Config::new(), seed)
    }

    pub fn with_config(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let left_paddle = create_paddle(&mut world, Side::Left, config.paddle_spawn_y());
        let right_paddle = create_paddle(&mut world, Side::Right, config.paddle_spawn_y());
        let ball = create_ball(
            &mut world,
            config.ball_spawn(),
            config.initial_ball_velocity(),
        );
        let palette = Palette::random(&mut rng);

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            palette,
            backdrop: Backdrop::new(),
            frame_count: 0,
            ball,
            left_paddle,
            right_paddle,
        }
    }

    /// Advance one tick and draw the result
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.step();
        render(&self.snapshot(), &self.config, surface);
    }

    /// Advance one tick without drawing
    pub fn step(&mut self) {
        // Clear events at start of tick
        self.events.clear();

        // 1. Move ball
        move_ball(&mut self.world);

        // 2. Top/bottom boundaries
        bounce_off_walls(&mut self.world, &self.config, &mut self.events);

        // 3. Paddles (left wins ties)
        check_paddle_hits(&mut self.world, &self.config, &mut self.events);

        // 4. AI jitter, then frame counter
        rejitter_ai(
            &mut self.world,
            &mut self.frame_count,
            &self.config,
            &mut self.rng,
        );

        // 5. AI paddles chase the ball
        move_ai_paddles(&mut self.world, &self.config);

        // 6. Ball left the screen
        if check_scoring(&self.world, &self.config, &mut self.score, &mut self.events).is_some() {
            match self.score.has_winner(self.config.win_score) {
                Some(winner) => {
                    info!(?winner, left = self.score.left, right = self.score.right, "match won");
                    self.events.match_won = Some(winner);
                    self.flash_screen();
                    self.reset_match();
                }
                None => recenter_ball(&mut self.world, &self.config),
            }
        }

        // 7. Paddle flash countdown
        decay_flash_counters(&mut self.world);
    }

    /// Feed wall-clock time (seconds) to the backdrop flash timer
    pub fn advance_clock(&mut self, dt: f32) {
        self.backdrop.update(dt);
    }

    /// Recolor the backdrop briefly
    pub fn flash_screen(&mut self) {
        let color = Rgb::random(&mut self.rng);
        self.backdrop.flash(color, self.config.screen_flash_secs);
    }

    /// Start a fresh match: serve, zero scores and frame counter, new palette
    ///
    /// Paddle positions, flash counters and AI offsets carry over.
    pub fn reset_match(&mut self) {
        serve_ball(&mut self.world, &self.config);
        self.score.reset();
        self.frame_count = 0;
        self.palette = Palette::random(&mut self.rng);
        info!("match reset");
    }

    pub fn snapshot(&self) -> Snapshot {
        let ball = self.ball();
        Snapshot {
            ball_x: ball.pos.x,
            ball_y: ball.pos.y,
            paddle_left_y: self.paddle(Side::Left).y,
            paddle_right_y: self.paddle(Side::Right).y,
            flash_left: self.flash(Side::Left),
            flash_right: self.flash(Side::Right),
            score_left: self.score.left,
            score_right: self.score.right,
            palette: self.palette,
            background: self.backdrop.color(),
        }
    }

    pub fn ball(&self) -> Ball {
        self.world
            .get::<&Ball>(self.ball)
            .map(|ball| *ball)
            .unwrap_or_else(|_| {
                Ball::new(self.config.ball_spawn(), self.config.initial_ball_velocity())
            })
    }

    pub fn set_ball(&mut self, ball: Ball) {
        if let Ok(current) = self.world.query_one_mut::<&mut Ball>(self.ball) {
            *current = ball;
        }
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        self.world
            .get::<&Paddle>(self.paddle_entity(side))
            .map(|paddle| *paddle)
            .unwrap_or_else(|_| Paddle::new(side, self.config.paddle_spawn_y()))
    }

    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        if let Ok(paddle) = self.world.query_one_mut::<&mut Paddle>(self.paddle_entity(side)) {
            paddle.y = y;
        }
    }

    pub fn flash(&self, side: Side) -> u32 {
        self.world
            .get::<&FlashCounter>(self.paddle_entity(side))
            .map_or(0, |flash| flash.0)
    }

    pub fn set_flash(&mut self, side: Side, frames: u32) {
        if let Ok(flash) = self
            .world
            .query_one_mut::<&mut FlashCounter>(self.paddle_entity(side))
        {
            flash.0 = frames;
        }
    }

    pub fn ai_offset(&self, side: Side) -> f32 {
        self.world
            .get::<&AiOffset>(self.paddle_entity(side))
            .map_or(0.0, |offset| offset.0)
    }

    fn paddle_entity(&self, side: Side) -> Entity {
        match side {
            Side::Left => self.left_paddle,
            Side::Right => self.right_paddle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawList;
    use glam::Vec2;

    #[test]
    fn test_new_game_initial_state() {
        let game = Game::new(12345);
        assert_eq!(game.ball(), Ball::new(Vec2::new(320.0, 240.0), Vec2::new(5.0, 5.0)));
        assert_eq!(game.paddle(Side::Left).y, 210.0);
        assert_eq!(game.paddle(Side::Right).y, 210.0);
        assert_eq!(game.score, Score::new());
        assert_eq!(game.frame_count, 0);
        assert_eq!(game.backdrop.color(), Rgb::BLACK);
        assert_eq!(game.ai_offset(Side::Left), 0.0);
    }

    #[test]
    fn test_tick_renders_one_frame() {
        let mut game = Game::new(12345);
        let mut surface = DrawList::new();

        game.tick(&mut surface);

        assert_eq!(surface.calls.len(), 8, "One full frame per tick");
        assert_eq!(surface.last_text(), Some("0 - 0"));
        assert_eq!(game.frame_count, 1);
        assert_eq!(game.ball().pos, Vec2::new(325.0, 245.0));
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = Game::new(42);
        let mut b = Game::new(42);
        for _ in 0..500 {
            a.step();
            b.step();
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut game = Game::new(1);
        game.set_paddle_y(Side::Right, 33.0);
        game.set_flash(Side::Left, 4);
        game.score.increment(Side::Left);

        let snapshot = game.snapshot();
        assert_eq!(snapshot.paddle_right_y, 33.0);
        assert_eq!(snapshot.flash_left, 4);
        assert_eq!(snapshot.score_left, 1);
        assert_eq!(snapshot.palette, game.palette);
    }
}
