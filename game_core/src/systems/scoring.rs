use crate::{Ball, Config, Events, Score, Side};
use hecs::World;
use tracing::debug;

/// Check if ball left the screen and award the point
///
/// Returns the side that scored. The caller decides between a point reset
/// and a full match reset.
pub fn check_scoring(
    world: &World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) -> Option<Side> {
    let mut scorer = None;
    for (_entity, ball) in world.query::<&Ball>().iter() {
        if ball.pos.x < 0.0 {
            // Exited left: right player scores
            scorer = Some(Side::Right);
        } else if ball.pos.x > config.screen_width {
            scorer = Some(Side::Left);
        }
    }

    if let Some(side) = scorer {
        score.increment(side);
        events.scored = Some(side);
        debug!(?side, left = score.left, right = score.right, "point scored");
    }
    scorer
}

/// Put the ball back at the center, keeping its velocity
pub fn recenter_ball(world: &mut World, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.recenter(config.ball_spawn());
    }
}

/// Put the ball back at the center with the opening velocity
pub fn serve_ball(world: &mut World, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        *ball = Ball::new(config.ball_spawn(), config.initial_ball_velocity());
    }
}
