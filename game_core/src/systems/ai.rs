use crate::{AiOffset, Ball, Config, GameRng, Paddle};
use hecs::World;
use rand::Rng;
use tracing::debug;

/// Resample every paddle's tracking jitter once per jitter interval, then
/// advance the frame counter
pub fn rejitter_ai(world: &mut World, frame_count: &mut u32, config: &Config, rng: &mut GameRng) {
    if *frame_count % config.ai_jitter_interval.max(1) == 0 {
        // Fixed left-then-right draw order keeps seeded runs reproducible
        let mut offsets: Vec<_> = world
            .query_mut::<(&Paddle, &mut AiOffset)>()
            .into_iter()
            .map(|(_e, (paddle, offset))| (paddle.side, offset))
            .collect();
        offsets.sort_by_key(|(side, _)| *side);

        for (side, offset) in offsets {
            offset.0 = rng.0.gen_range(-config.ai_jitter..=config.ai_jitter);
            debug!(?side, offset = offset.0, frame = *frame_count, "ai offset resampled");
        }
    }
    *frame_count += 1;
}

/// Steer each paddle toward the ball while the ball is heading at it
///
/// The step is capped at `paddle_speed` and never passes the target.
pub fn move_ai_paddles(world: &mut World, config: &Config) {
    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| *ball);

    let ball = match ball {
        Some(ball) => ball,
        None => return,
    };

    for (_entity, (paddle, offset)) in world.query_mut::<(&mut Paddle, &AiOffset)>() {
        if !paddle.side.is_approached_by(ball.vel.x) {
            continue;
        }

        let target = ball.pos.y + offset.0;
        let gap = target - paddle.center(config.paddle_height);
        paddle.y += gap.clamp(-config.paddle_speed, config.paddle_speed);

        if config.clamp_paddles {
            paddle.y = config.clamp_paddle_y(paddle.y);
        }
    }
}
