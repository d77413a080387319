//! Skyward Jumper entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use skyward_jumper::input::{intent_for_key_down, intent_for_key_up, intent_for_pointer};
    use skyward_jumper::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
    use skyward_jumper::{DrawCommand, GameConfig, LoopClock, render, render_dirty};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        clock: LoopClock,
        last_time: f64,
        input: TickInput,
        ctx: CanvasRenderingContext2d,
    }

    impl Game {
        /// Run due update ticks, then draw if a draw is due
        fn frame(&mut self, time: f64) {
            let elapsed = if self.last_time > 0.0 {
                time - self.last_time
            } else {
                0.0
            };
            self.last_time = time;

            let work = self.clock.advance(elapsed);
            for _ in 0..work.updates {
                let input = self.input.clone();
                if let Some(GameEvent::GameOver { score }) = tick(&mut self.state, &input) {
                    log::info!("Final score: {}", score);
                }

                // Clear one-shot inputs after processing
                self.input.intent = None;
                self.input.start = false;
                self.input.pause = false;
            }

            // An unchanged state only yields the retain list; keep the last frame
            if work.draw && render_dirty(&mut self.state).len() > 1 {
                self.draw();
            }
        }

        fn draw(&self) {
            let width = self.state.config.stage_width as f64;
            let height = self.state.config.stage_height as f64;
            let ctx = &self.ctx;

            // Stage y grows upward, canvas y grows downward
            let to_canvas = |origin: glam::Vec2, size: glam::Vec2| {
                (
                    origin.x as f64,
                    height - (origin.y + size.y) as f64,
                    size.x as f64,
                    size.y as f64,
                )
            };

            for command in render(&self.state) {
                match command {
                    DrawCommand::Background { offset_y } => {
                        ctx.set_fill_style_str("#1b2440");
                        ctx.fill_rect(0.0, 0.0, width, height);
                        // Scrolling stripes stand in for the background image
                        ctx.set_fill_style_str("#243056");
                        let stripe = 40.0;
                        let shift = (offset_y as f64) % (stripe * 2.0);
                        let mut y = shift - stripe * 2.0;
                        while y < height {
                            ctx.fill_rect(0.0, y, width, stripe);
                            y += stripe * 2.0;
                        }
                    }
                    DrawCommand::Platform { origin, size, .. } => {
                        let (x, y, w, h) = to_canvas(origin, size);
                        ctx.set_fill_style_str("#6fcf6f");
                        ctx.fill_rect(x, y, w, h);
                    }
                    DrawCommand::Jumper {
                        origin,
                        size,
                        facing_right,
                        is_jumping,
                    } => {
                        let (x, y, w, h) = to_canvas(origin, size);
                        ctx.set_fill_style_str(if is_jumping { "#ffd166" } else { "#ef8354" });
                        ctx.fill_rect(x, y, w, h);
                        // Eye marks the facing direction
                        let eye_x = if facing_right { x + w * 0.7 } else { x + w * 0.2 };
                        ctx.set_fill_style_str("#000000");
                        ctx.fill_rect(eye_x, y + h * 0.2, w * 0.1, h * 0.08);
                    }
                    DrawCommand::Score { value } => {
                        ctx.set_fill_style_str("#ffffff");
                        ctx.set_font("24px sans-serif");
                        let _ = ctx.fill_text(&value.to_string(), 12.0, 32.0);
                    }
                    DrawCommand::GameOver { score } => {
                        ctx.set_fill_style_str("rgba(0, 0, 0, 0.6)");
                        ctx.fill_rect(0.0, height / 2.0 - 60.0, width, 120.0);
                        ctx.set_fill_style_str("#ffffff");
                        ctx.set_font("32px sans-serif");
                        let _ = ctx.fill_text("Game over", width / 2.0 - 80.0, height / 2.0 - 10.0);
                        ctx.set_font("20px sans-serif");
                        let _ = ctx.fill_text(
                            &format!("Score {} - press Space", score),
                            width / 2.0 - 100.0,
                            height / 2.0 + 30.0,
                        );
                    }
                    DrawCommand::Retain { .. } => {}
                }
            }

            if self.state.phase == GamePhase::Ready {
                ctx.set_fill_style_str("#ffffff");
                ctx.set_font("20px sans-serif");
                let _ = ctx.fill_text("Press Space to play", width / 2.0 - 90.0, height / 2.0);
            }
        }

        /// Space/Enter starts, or restarts after a game over
        fn start_or_restart(&mut self) {
            if self.state.phase == GamePhase::GameOver {
                let seed = js_sys::Date::now() as u64;
                self.state.restart_session(seed);
                self.clock = LoopClock::from_config(&self.state.config);
            }
            self.input.start = true;
        }

        /// Switch platform generation, remember the choice and lay out a new field
        fn cycle_generation(&mut self) {
            let generation = self.state.config.generation.cycled();
            self.state.config.generation = generation;
            self.state.config.save();
            self.state.restart_session(js_sys::Date::now() as u64);
            self.clock = LoopClock::from_config(&self.state.config);
            log::info!("Platform generation: {}", generation.as_str());
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Skyward Jumper starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let config = GameConfig::load();

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("stage")
            .ok_or("no stage canvas")?
            .dyn_into()?;
        canvas.set_width(config.stage_width as u32);
        canvas.set_height(config.stage_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let clock = LoopClock::from_config(&config);
        let state = GameState::new(config, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state,
            clock,
            last_time: 0.0,
            input: TickInput::default(),
            ctx,
        }));

        setup_input_handlers(&window, game.clone());
        setup_pointer_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Skyward Jumper running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        // Key down: steering and game controls
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if let Some(intent) = intent_for_key_down(&key) {
                    g.input.intent = Some(intent);
                    return;
                }
                match key.as_str() {
                    " " | "Enter" => g.start_or_restart(),
                    "Escape" | "p" | "P" => g.input.pause = true,
                    "g" | "G" => g.cycle_generation(),
                    "i" | "I" => {
                        g.input.idle_mode = !g.input.idle_mode;
                        log::info!("Idle mode: {}", g.input.idle_mode);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up: stop steering
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: KeyboardEvent| {
                game.borrow_mut().input.intent = Some(intent_for_key_up());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// On-screen steering: press a stage half to steer that way, release to stop
    fn setup_pointer_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let width = g.state.config.stage_width;
                g.input.intent = Some(intent_for_pointer(event.offset_x() as f32, width));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.intent = Some(intent_for_key_up());
            });
            for event in ["mouseup", "mouseleave"] {
                let _ = canvas
                    .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            }
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use skyward_jumper::sim::{GameEvent, GameState, TickInput, tick};
    use skyward_jumper::{GameConfig, GenerationStrategy};

    env_logger::init();
    log::info!("Skyward Jumper (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - run with `trunk serve` to play");

    // Usage: skyward-jumper [seed] [biased|recycle]
    let args: Vec<String> = std::env::args().collect();
    let seed = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(1);
    let mut config = GameConfig::load();
    if let Some(name) = args.get(2) {
        match GenerationStrategy::from_str(name) {
            Some(generation) => config = config.with_generation(generation),
            None => log::warn!(
                "Unknown generation strategy {:?}, keeping {}",
                name,
                config.generation.as_str()
            ),
        }
    }
    log::info!("Platform generation: {}", config.generation.as_str());
    let max_ticks: u64 = 100_000;

    let mut state = match GameState::new(config, seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            std::process::exit(1);
        }
    };

    let input = TickInput {
        start: true,
        idle_mode: true,
        ..Default::default()
    };

    let mut outcome = None;
    for _ in 0..max_ticks {
        if let Some(GameEvent::GameOver { score }) = tick(&mut state, &input) {
            outcome = Some(score);
            break;
        }
    }

    match outcome {
        Some(score) => println!(
            "Seed {}: autopilot fell after {} ticks, score {}",
            seed, state.time_ticks, score
        ),
        None => println!(
            "Seed {}: autopilot still jumping after {} ticks, score {}",
            seed,
            max_ticks,
            state.display_score()
        ),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
