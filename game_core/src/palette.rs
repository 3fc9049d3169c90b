use crate::GameRng;
use rand::Rng;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Paddle color while its flash counter is running
    pub const ALERT: Rgb = Rgb::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uniformly random color
    pub fn random(rng: &mut GameRng) -> Self {
        Self::new(rng.0.gen(), rng.0.gen(), rng.0.gen())
    }

    /// CSS `rgb(r, g, b)` form
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Colors for the ball, paddles and boundaries, re-rolled every match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub ball: Rgb,
    pub paddle: Rgb,
    pub boundary: Rgb,
}

impl Palette {
    pub fn random(rng: &mut GameRng) -> Self {
        Self {
            ball: Rgb::random(rng),
            paddle: Rgb::random(rng),
            boundary: Rgb::random(rng),
        }
    }
}
