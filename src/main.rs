//! Paddle Duel entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, PageTransitionEvent};

    use paddle_duel::consts::*;
    use paddle_duel::platform::{Key, KeyboardState};
    use paddle_duel::renderer::CanvasSurface;
    use paddle_duel::sim::TickOutcome;
    use paddle_duel::app::FixedStep;
    use paddle_duel::{App, Settings};

    /// Game instance plus its browser-side collaborators
    struct Game {
        app: App,
        surface: CanvasSurface,
        keyboard: KeyboardState,
        stepper: FixedStep,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Paddle Duel starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id("canvas")
            .ok_or("no #canvas element")?
            .dyn_into::<HtmlCanvasElement>()?;
        canvas.set_width(PLAYFIELD_WIDTH as u32);
        canvas.set_height(PLAYFIELD_HEIGHT as u32);

        let settings = Settings::load();
        // Write back so defaults show up in storage for hand editing
        settings.save();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            app: App::new(&settings, seed),
            surface: CanvasSurface::new(&canvas)?,
            keyboard: KeyboardState::new(),
            stepper: FixedStep::new(),
        }));

        setup_input_handlers(&window, game.clone())?;
        request_animation_frame(game);

        log::info!("Paddle Duel running!");
        Ok(())
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                let key = Key::from_code(&event.key());
                if matches!(key, Key::Up | Key::Down) {
                    event.prevent_default();
                }
                game.borrow_mut().keyboard.key_down(key, event.repeat());
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                let key = Key::from_code(&event.key());
                game.borrow_mut().keyboard.key_up(key);
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key-up events are lost while unfocused
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                game.borrow_mut().keyboard.release_all();
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Page teardown is the browser's window-close
        {
            let closure =
                Closure::<dyn FnMut(PageTransitionEvent)>::new(move |event: PageTransitionEvent| {
                    game.borrow_mut().keyboard.page_hidden(event.persisted());
                });
            window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let closure = Closure::once(move |time: f64| game_loop(game, time));
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {:?}", e);
            }
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let outcome = {
            let mut g = game.borrow_mut();
            let Game {
                app,
                surface,
                keyboard,
                stepper,
            } = &mut *g;
            let steps = stepper.steps(time);
            app.frame_steps(keyboard, surface, steps)
        };

        if outcome == TickOutcome::Exit {
            log::info!("Session ended");
            return;
        }
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
    use std::time::{SystemTime, UNIX_EPOCH};

    use paddle_duel::consts::FRAME_RATE;
    use paddle_duel::platform::{HeadlessInput, SleepClock};
    use paddle_duel::renderer::RecordingSurface;
    use paddle_duel::{App, Settings, run};

    env_logger::init();
    log::info!("Paddle Duel (native) starting...");
    log::info!("Native mode has no window backend - playing an unattended match headless");

    let settings = Settings::load();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let mut app = App::new(&settings, seed);
    // Tap Escape once a second; give up after two minutes
    let fps = FRAME_RATE as u64;
    let mut input = HeadlessInput::new(fps, 120 * fps);
    let mut surface = RecordingSurface::new();
    let mut clock = SleepClock::new();

    let code = run(&mut app, &mut input, &mut surface, &mut clock);
    std::process::exit(code);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
