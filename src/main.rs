//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent};

    use canvas_pong::renderer::CanvasSurface;
    use canvas_pong::{Game, Settings};

    /// Game plus the host objects it draws into
    struct App {
        game: Game,
        surface: CanvasSurface,
        canvas: HtmlCanvasElement,
        /// Last score written to the page, to skip redundant DOM writes
        shown_score: Option<(u32, u32)>,
    }

    impl App {
        /// Map a client-space Y to play-area coordinates
        ///
        /// The canvas may be scaled by CSS, so divide out the ratio between
        /// its drawing buffer and its on-screen box.
        fn to_area_y(&self, client_y: f64) -> f32 {
            let rect = self.canvas.get_bounding_client_rect();
            let scale = if rect.height() > 0.0 {
                self.canvas.height() as f64 / rect.height()
            } else {
                1.0
            };
            ((client_y - rect.top()) * scale) as f32
        }

        fn frame(&mut self) {
            self.game.frame(&mut self.surface);
            self.update_score();
        }

        /// Write the score into `#score`, if the page has one
        fn update_score(&mut self) {
            let board = self.game.scoreboard;
            let score = (board.player, board.opponent);
            if self.shown_score == Some(score) {
                return;
            }
            self.shown_score = Some(score);

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&format!("{} : {}", board.player, board.opponent)));
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Canvas Pong starting...");

        let Some(app) = setup() else {
            log::error!("Canvas Pong failed to start");
            return;
        };
        let app = Rc::new(RefCell::new(app));

        setup_input_handlers(app.clone());
        request_animation_frame(app);

        log::info!("Canvas Pong running!");
    }

    fn setup() -> Option<App> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let Some(canvas) = document
            .get_element_by_id("pong-canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No <canvas id=\"pong-canvas\"> on the page");
            return None;
        };

        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            log::error!("Canvas has no 2d context");
            return None;
        };

        let settings = Settings::load();
        canvas.set_width(settings.area_width as u32);
        canvas.set_height(settings.area_height as u32);

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        log::info!("Game initialized with seed: {}", seed);

        Some(App {
            game: Game::new(&settings, seed),
            surface: CanvasSurface::new(ctx),
            canvas,
            shown_score: None,
        })
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let canvas = app.borrow().canvas.clone();

        // Mouse move
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                let y = a.to_area_y(event.client_y() as f64);
                a.game.pointer_moved(y);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut a = app.borrow_mut();
                    let y = a.to_area_y(touch.client_y() as f64);
                    a.game.pointer_moved(y);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_pong::renderer::ShapeBatch;
    use canvas_pong::{Game, Settings};

    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode runs headless - serve the wasm build for the playable version");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or(0x5EED);
    let frames: u32 = match std::env::var("CANVAS_PONG_FRAMES") {
        Ok(v) => v.parse().unwrap_or_else(|_| {
            log::warn!("Invalid CANVAS_PONG_FRAMES '{}', using default", v);
            600
        }),
        Err(_) => 600,
    };

    let mut game = Game::new(&settings, seed);
    let mut batch = ShapeBatch::new(settings.area_width, settings.area_height);

    // Sweep the pointer up and down the table, one pass every four seconds at 60 Hz
    let sweep = 2.0 * settings.area_height;
    for frame in 0..frames {
        let phase = (frame as f32 * 5.0) % sweep;
        let y = if phase < settings.area_height { phase } else { sweep - phase };
        game.pointer_moved(y);
        game.frame(&mut batch);
    }

    log::info!(
        "Ran {} frames (seed {}): player {} - opponent {}",
        frames,
        seed,
        game.scoreboard.player,
        game.scoreboard.opponent
    );
    log::info!(
        "Last frame: {} vertices ({} bytes)",
        batch.vertices().len(),
        batch.as_bytes().len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
