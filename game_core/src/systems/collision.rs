use crate::{Ball, Config, Events, FlashCounter, Paddle, Side};
use hecs::World;
use tracing::trace;

/// Bounce the ball off the top and bottom boundaries
///
/// Only the sign of the vertical velocity changes; wall bounces never speed
/// the ball up.
pub fn bounce_off_walls(world: &mut World, config: &Config, events: &mut Events) {
    let top = config.boundary_thickness;
    let bottom = config.screen_height - config.ball_size - config.boundary_thickness;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y <= top || ball.pos.y >= bottom {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
            trace!(y = ball.pos.y, vy = ball.vel.y, "ball bounced off wall");
        }
    }
}

/// Reflect the ball off a paddle it overlaps and speed it up
///
/// At most one paddle registers per tick. The left paddle is checked first.
pub fn check_paddle_hits(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle positions without holding a borrow on the world
    let paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();
    let paddle_y = |side: Side| {
        paddles
            .iter()
            .find(|(s, _)| *s == side)
            .map(|(_, y)| *y)
    };

    let mut hit = None;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let current = *ball;
        hit = [Side::Left, Side::Right].into_iter().find(|&side| {
            paddle_y(side).is_some_and(|y| overlaps_paddle(&current, side, y, config))
        });

        if hit.is_some() {
            ball.vel.x = -ball.vel.x;
            ball.vel.x += config.ball_speed_increment * ball.vel.x.signum();
            trace!(vx = ball.vel.x, "ball hit paddle");
        }
    }

    if let Some(side) = hit {
        for (_entity, (paddle, flash)) in world.query_mut::<(&Paddle, &mut FlashCounter)>() {
            if paddle.side == side {
                flash.0 = config.flash_duration;
            }
        }
        events.paddle_hit = Some(side);
    }
}

/// Ball reference point is inside the paddle's reach and strictly between
/// its top and bottom edges
fn overlaps_paddle(ball: &Ball, side: Side, paddle_y: f32, config: &Config) -> bool {
    let within_x = match side {
        Side::Left => ball.pos.x <= config.paddle_width,
        Side::Right => ball.pos.x >= config.screen_width - config.paddle_width - config.ball_size,
    };
    within_x && paddle_y < ball.pos.y && ball.pos.y < paddle_y + config.paddle_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Ball, Config, Events};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Events) {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Left, config.paddle_spawn_y());
        create_paddle(&mut world, Side::Right, config.paddle_spawn_y());
        (world, config, Events::new())
    }

    fn ball(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap()
    }

    fn flash(world: &World, side: Side) -> u32 {
        world
            .query::<(&Paddle, &FlashCounter)>()
            .iter()
            .find(|(_e, (p, _))| p.side == side)
            .map(|(_e, (_, f))| f.0)
            .unwrap()
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(320.0, 8.0), Vec2::new(5.0, -5.0));

        bounce_off_walls(&mut world, &config, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.vel.y, 5.0, "Vertical velocity flips with same magnitude");
        assert_eq!(ball.vel.x, 5.0, "X velocity should be unchanged");
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut events) = setup_world();
        // Bottom limit is 480 - 20 - 10 = 450
        create_ball(&mut world, Vec2::new(320.0, 450.0), Vec2::new(-5.2, 5.0));

        bounce_off_walls(&mut world, &config, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.vel.y, -5.0, "Ball should head back up");
        assert_eq!(ball.vel.x, -5.2);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_no_wall_bounce_mid_screen() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(320.0, 240.0), Vec2::new(5.0, 5.0));

        bounce_off_walls(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel, Vec2::new(5.0, 5.0));
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (mut world, config, mut events) = setup_world();
        // Left paddle spans y in (210, 270)
        create_ball(&mut world, Vec2::new(9.0, 245.0), Vec2::new(-5.0, 5.0));

        check_paddle_hits(&mut world, &config, &mut events);

        let ball = ball(&world);
        assert!((ball.vel.x - 5.2).abs() < 1e-5, "vx should become +5.2, got {}", ball.vel.x);
        assert_eq!(ball.vel.y, 5.0, "Paddle hits leave vy alone");
        assert_eq!(events.paddle_hit, Some(Side::Left));
        assert_eq!(flash(&world, Side::Left), config.flash_duration);
        assert_eq!(flash(&world, Side::Right), 0);
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (mut world, config, mut events) = setup_world();
        // Right reach starts at 640 - 10 - 20 = 610
        create_ball(&mut world, Vec2::new(612.0, 230.0), Vec2::new(5.2, -5.0));

        check_paddle_hits(&mut world, &config, &mut events);

        let ball = ball(&world);
        assert!((ball.vel.x + 5.4).abs() < 1e-5, "vx should become -5.4, got {}", ball.vel.x);
        assert_eq!(events.paddle_hit, Some(Side::Right));
        assert_eq!(flash(&world, Side::Right), config.flash_duration);
    }

    #[test]
    fn test_ball_misses_paddle_outside_vertical_span() {
        let (mut world, config, mut events) = setup_world();
        // Exactly on the paddle's top edge does not count
        create_ball(&mut world, Vec2::new(5.0, 210.0), Vec2::new(-5.0, 5.0));

        check_paddle_hits(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel.x, -5.0);
        assert_eq!(events.paddle_hit, None);
        assert_eq!(flash(&world, Side::Left), 0);
    }

    #[test]
    fn test_left_paddle_wins_when_both_overlap() {
        let mut world = World::new();
        // Narrow court where both reaches overlap: left x <= 10, right x >= -5
        let config = Config {
            screen_width: 25.0,
            ..Config::new()
        };
        create_paddle(&mut world, Side::Left, 200.0);
        create_paddle(&mut world, Side::Right, 200.0);
        create_ball(&mut world, Vec2::new(5.0, 230.0), Vec2::new(-5.0, 5.0));
        let mut events = Events::new();

        check_paddle_hits(&mut world, &config, &mut events);

        assert_eq!(events.paddle_hit, Some(Side::Left));
        assert!((ball(&world).vel.x - 5.2).abs() < 1e-5, "Flipped exactly once");
        assert_eq!(flash(&world, Side::Left), config.flash_duration);
        assert_eq!(flash(&world, Side::Right), 0, "Right paddle must not register");
    }
}
