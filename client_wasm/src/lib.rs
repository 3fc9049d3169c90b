//! Canvas client for Pong
//!
//! Drives the simulation from a `setInterval` timer and draws each tick with
//! the 2D canvas API. Note: only compiled for the wasm32 target

#![cfg(target_arch = "wasm32")]

macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}

macro_rules! console_error {
    ($($t:tt)*) => (web_sys::console::error_1(&format!($($t)*).into()))
}

mod surface;

use game_core::{Game, Side};
use std::cell::RefCell;
use surface::CanvasSurface;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Performance};

/// Main client state
struct Client {
    game: Game,
    surface: CanvasSurface,
    performance: Performance,
    last_frame_ms: f64,
}

impl Client {
    fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let performance = window()?
            .performance()
            .ok_or_else(|| JsValue::from_str("Performance timer unavailable"))?;

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(seed);
        canvas.set_width(game.config.screen_width as u32);
        canvas.set_height(game.config.screen_height as u32);
        let surface = CanvasSurface::new(canvas)?;

        console_log!("Pong: starting with seed {}", seed);
        Ok(Self {
            game,
            surface,
            last_frame_ms: performance.now(),
            performance,
        })
    }

    /// One scheduler callback: feed elapsed wall-clock time, then tick
    fn frame(&mut self) {
        let now = self.performance.now();
        let dt = ((now - self.last_frame_ms) / 1000.0) as f32;
        self.last_frame_ms = now;

        self.game.advance_clock(dt);
        self.game.tick(&mut self.surface);

        let events = self.game.events;
        if let Some(winner) = events.match_won {
            console_log!("Pong: {} wins the match", side_name(winner));
        } else if let Some(side) = events.scored {
            console_log!(
                "Pong: point to {} ({} - {})",
                side_name(side),
                self.game.score.left,
                self.game.score.right
            );
        }
    }
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::Left => "left",
        Side::Right => "right",
    }
}

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
}

/// A scheduled client; dropping it frees the interval callback
struct Running {
    client: Client,
    interval_id: i32,
    _callback: Closure<dyn FnMut()>,
}

thread_local! {
    static RUNNING: RefCell<Option<Running>> = const { RefCell::new(None) };
}

/// Start the game on `canvas`, ticking at the configured rate
#[wasm_bindgen]
pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    stop()?;

    let client = Client::new(canvas)?;
    let period_ms = client.game.config.tick_interval_ms() as i32;

    let callback = Closure::<dyn FnMut()>::new(|| {
        RUNNING.with(|running| {
            if let Some(running) = running.borrow_mut().as_mut() {
                running.client.frame();
            }
        })
    });
    let interval_id = window()?.set_interval_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        period_ms,
    )?;

    RUNNING.with(|running| {
        *running.borrow_mut() = Some(Running {
            client,
            interval_id,
            _callback: callback,
        });
    });
    Ok(())
}

/// Cancel the tick schedule. Safe to call when not running.
#[wasm_bindgen]
pub fn stop() -> Result<(), JsValue> {
    let previous = RUNNING.with(|running| running.borrow_mut().take());
    if let Some(previous) = previous {
        window()?.clear_interval_with_handle(previous.interval_id);
        console_log!("Pong: stopped");
    }
    Ok(())
}
