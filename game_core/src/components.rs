use glam::Vec2;

/// Which end of the court a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// True when a ball with this horizontal velocity is heading at this side
    pub fn is_approached_by(self, vx: f32) -> bool {
        match self {
            Side::Left => vx < 0.0,
            Side::Right => vx > 0.0,
        }
    }
}

/// Paddle component - an AI-controlled paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge, not clamped unless Config::clamp_paddles
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    /// Vertical center of the paddle
    pub fn center(&self, height: f32) -> f32 {
        self.y + height / 2.0
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2, // pixels per tick
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Move back to the spawn point, keeping the current velocity
    pub fn recenter(&mut self, spawn: Vec2) {
        self.pos = spawn;
    }
}

/// Frames left during which a paddle renders in the alert color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlashCounter(pub u32);

impl FlashCounter {
    pub fn is_active(&self) -> bool {
        self.0 > 0
    }

    pub fn decay(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }
}

/// Jitter added to the AI's tracking target
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AiOffset(pub f32);
