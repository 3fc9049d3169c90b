use crate::{Rgb, Side};

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Left player score
    pub right: u8, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Award a point to `side`
    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub paddle_hit: Option<Side>,
    pub scored: Option<Side>,
    pub match_won: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Pending full-screen flash, counted down in wall-clock seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenFlash {
    pub color: Rgb,
    pub remaining: f32,
}

/// Background color of the play surface
///
/// Black except while a [`ScreenFlash`] is pending. The flash is a one-shot
/// timer advanced by the host's clock, not by ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backdrop {
    pub base: Rgb,
    flash: Option<ScreenFlash>,
}

impl Backdrop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `color` for `duration` seconds, replacing any pending flash
    pub fn flash(&mut self, color: Rgb, duration: f32) {
        self.flash = Some(ScreenFlash {
            color,
            remaining: duration,
        });
    }

    pub fn cancel(&mut self) {
        self.flash = None;
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(flash) = &mut self.flash {
            flash.remaining -= dt;
            if flash.remaining <= 0.0 {
                self.flash = None;
            }
        }
    }

    pub fn pending(&self) -> Option<ScreenFlash> {
        self.flash
    }

    pub fn is_flashing(&self) -> bool {
        self.flash.is_some()
    }

    pub fn color(&self) -> Rgb {
        self.flash.map_or(self.base, |flash| flash.color)
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self {
            base: Rgb::BLACK,
            flash: None,
        }
    }
}
