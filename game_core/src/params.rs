/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen (pixels)
    pub const SCREEN_WIDTH: f32 = 640.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;
    pub const BOUNDARY_THICKNESS: f32 = 10.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 60.0;
    pub const PADDLE_SPEED: f32 = 7.0; // pixels per tick

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED_X: f32 = 5.0; // pixels per tick
    pub const BALL_SPEED_Y: f32 = 5.0;
    pub const BALL_SPEED_INCREMENT: f32 = 0.2; // Added on every paddle hit

    // Effects
    pub const FLASH_DURATION: u32 = 10; // ticks
    pub const SCREEN_FLASH_SECS: f32 = 0.1;

    // AI
    pub const AI_JITTER: f32 = 10.0;
    pub const AI_JITTER_INTERVAL: u32 = 30; // ticks

    // Score
    pub const WIN_SCORE: u8 = 3;

    // Loop
    pub const TICK_RATE_HZ: f32 = 60.0;
}
