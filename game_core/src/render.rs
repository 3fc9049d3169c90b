//! Drawing seam between the simulation and whatever displays it

use crate::{Config, Palette, Rgb};

/// Everything the renderer reads from one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub ball_x: f32,
    pub ball_y: f32,
    pub paddle_left_y: f32,
    pub paddle_right_y: f32,
    pub flash_left: u32,
    pub flash_right: u32,
    pub score_left: u8,
    pub score_right: u8,
    pub palette: Palette,
    pub background: Rgb,
}

/// A 2D drawing target. Coordinates are pixels with the origin top-left.
pub trait Surface {
    /// Background of the play area (presentation only)
    fn set_background(&mut self, color: Rgb);
    fn clear(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, size_px: f32, color: Rgb);
}

/// Score text size in pixels
pub const SCORE_FONT_PX: f32 = 50.0;

/// Draw one frame
pub fn render<S: Surface + ?Sized>(snapshot: &Snapshot, config: &Config, surface: &mut S) {
    let width = config.screen_width;
    let height = config.screen_height;
    let palette = &snapshot.palette;

    surface.set_background(snapshot.background);
    surface.clear(0.0, 0.0, width, height);

    // Boundaries
    let thickness = config.boundary_thickness;
    surface.fill_rect(0.0, 0.0, width, thickness, palette.boundary);
    surface.fill_rect(0.0, height - thickness, width, thickness, palette.boundary);

    // Paddles
    let paddle_color = |flash: u32| {
        if flash > 0 {
            Rgb::ALERT
        } else {
            palette.paddle
        }
    };
    surface.fill_rect(
        0.0,
        snapshot.paddle_left_y,
        config.paddle_width,
        config.paddle_height,
        paddle_color(snapshot.flash_left),
    );
    surface.fill_rect(
        width - config.paddle_width,
        snapshot.paddle_right_y,
        config.paddle_width,
        config.paddle_height,
        paddle_color(snapshot.flash_right),
    );

    surface.fill_circle(
        snapshot.ball_x,
        snapshot.ball_y,
        config.ball_size / 2.0,
        palette.ball,
    );

    let score = format!("{} - {}", snapshot.score_left, snapshot.score_right);
    surface.fill_text(&score, width / 2.0 - 50.0, 50.0, SCORE_FONT_PX, Rgb::WHITE);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Background(Rgb),
    Clear {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
    },
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
        color: Rgb,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size_px: f32,
        color: Rgb,
    },
}

/// Headless surface that records every call
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub calls: Vec<DrawCall>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Rect { .. }))
    }

    /// Last score string drawn
    pub fn last_text(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for DrawList {
    fn set_background(&mut self, color: Rgb) {
        self.calls.push(DrawCall::Background(color));
    }

    fn clear(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.calls.push(DrawCall::Clear {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        self.calls.push(DrawCall::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb) {
        self.calls.push(DrawCall::Circle {
            cx,
            cy,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, size_px: f32, color: Rgb) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            size_px,
            color,
        });
    }
}
