use crate::{Params, Side};
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub boundary_thickness: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_size: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
    pub ball_speed_increment: f32,
    pub flash_duration: u32,
    pub screen_flash_secs: f32,
    pub ai_jitter: f32,
    pub ai_jitter_interval: u32,
    pub win_score: u8,
    pub tick_rate_hz: f32,
    /// Keep AI paddles inside the screen. Off by default: paddles may travel
    /// past the top and bottom edges while chasing the ball.
    pub clamp_paddles: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            boundary_thickness: Params::BOUNDARY_THICKNESS,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed_x: Params::BALL_SPEED_X,
            ball_speed_y: Params::BALL_SPEED_Y,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            flash_duration: Params::FLASH_DURATION,
            screen_flash_secs: Params::SCREEN_FLASH_SECS,
            ai_jitter: Params::AI_JITTER,
            ai_jitter_interval: Params::AI_JITTER_INTERVAL,
            win_score: Params::WIN_SCORE,
            tick_rate_hz: Params::TICK_RATE_HZ,
            clamp_paddles: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => 0.0,
            Side::Right => self.screen_width - self.paddle_width,
        }
    }

    /// Initial paddle Y (top edge), vertically centered
    pub fn paddle_spawn_y(&self) -> f32 {
        (self.screen_height - self.paddle_height) / 2.0
    }

    /// Where the ball goes after any reset
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }

    /// Ball velocity at the start of a match
    pub fn initial_ball_velocity(&self) -> Vec2 {
        Vec2::new(self.ball_speed_x, self.ball_speed_y)
    }

    /// Clamp paddle Y (top edge) to screen bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.screen_height - self.paddle_height)
    }

    /// Scheduler period in milliseconds
    pub fn tick_interval_ms(&self) -> f32 {
        1000.0 / self.tick_rate_hz
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 0.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 630.0, "Right paddle X position");
    }

    #[test]
    fn test_config_spawn_positions() {
        let config = Config::new();
        assert_eq!(config.paddle_spawn_y(), 210.0);
        assert_eq!(config.ball_spawn(), Vec2::new(320.0, 240.0));
        assert_eq!(config.initial_ball_velocity(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-25.0), 0.0);
        assert_eq!(
            config.clamp_paddle_y(1000.0),
            config.screen_height - config.paddle_height
        );
        let valid_y = 120.0;
        assert_eq!(config.clamp_paddle_y(valid_y), valid_y);
    }

    #[test]
    fn test_config_tick_interval() {
        let config = Config::new();
        assert!((config.tick_interval_ms() - 16.666_666).abs() < 1e-3);
    }
}
