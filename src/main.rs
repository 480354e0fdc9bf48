//! Square Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::convert::FromWasmAbi;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, EventTarget, HtmlCanvasElement, HtmlElement, HtmlInputElement, MouseEvent,
        PointerEvent,
    };

    use square_dash::renderer::{Frame, RenderState, TitleCard};
    use square_dash::{Game, IconKind, Rgb, SurfaceRect};

    /// Game plus the page it lives in
    struct WebGame {
        game: Game,
        render_state: Option<RenderState>,
        canvas: HtmlCanvasElement,
        document: Document,
        /// Title card currently on the page
        shown_title: Option<TitleCard>,
    }

    impl WebGame {
        /// Canvas bounds in client coordinates, read fresh for every event
        fn surface_rect(&self) -> SurfaceRect {
            let rect = self.canvas.get_bounding_client_rect();
            SurfaceRect::new(
                rect.left() as f32,
                rect.top() as f32,
                rect.width() as f32,
                rect.height() as f32,
            )
        }

        /// Match the backing buffer to the canvas's CSS size
        fn fit_canvas(&mut self) {
            let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
            let client_w = self.canvas.client_width().max(0);
            let client_h = self.canvas.client_height().max(0);
            let width = (client_w as f64 * dpr) as u32;
            let height = (client_h as f64 * dpr) as u32;
            self.canvas.set_width(width);
            self.canvas.set_height(height);

            if let Some(ref mut render_state) = self.render_state {
                render_state.resize(width, height);
            }
            self.game.resize(client_w as f32, client_h as f32);
        }

        /// Draw the current state
        fn render(&mut self) {
            let frame = self.game.frame();
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&frame, self.game.state.playfield) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
            self.update_title(&frame);
            self.update_score();
        }

        fn update_title(&mut self, frame: &Frame) {
            if frame.title == self.shown_title {
                return;
            }
            if let Some(el) = self.document.get_element_by_id("title") {
                let class = if frame.title.is_some() { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }
            if let Some(card) = &frame.title {
                if let Some(el) = self.element("title-heading") {
                    el.set_text_content(Some(card.heading));
                    let _ = el.style().set_property("color", &card.heading_color.to_hex());
                }
                if let Some(el) = self.element("title-prompt") {
                    el.set_text_content(Some(card.prompt));
                    let _ = el.style().set_property("color", &card.prompt_color.to_hex());
                }
            }
            self.shown_title = frame.title.clone();
        }

        fn update_score(&mut self) {
            if !self.game.sync_score_display() {
                return;
            }
            if let Some(el) = self.element("score") {
                let display = &self.game.score_display;
                el.set_text_content(Some(display.text()));
                let opacity = if display.is_visible() { "1" } else { "0" };
                let _ = el.style().set_property("opacity", opacity);
            }
        }

        fn element(&self, id: &str) -> Option<HtmlElement> {
            self.document.get_element_by_id(id)?.dyn_into().ok()
        }

        /// Open/close the editor panel and recolor the accent
        fn toggle_editor(&mut self) {
            let open = self.game.toggle_editor();
            if let Some(panel) = self.document.get_element_by_id("editor-panel") {
                let _ = panel.class_list().toggle_with_force("open", open);
            }
            let accent = self.game.customization.get().player_color.to_hex();
            if let Some(root) = self
                .document
                .document_element()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                let _ = root.style().set_property("--accent", &accent);
            }
        }

        fn select_icon(&mut self, icon: IconKind) {
            self.game.customization.set_icon(icon);
            for other in IconKind::ALL {
                if let Some(btn) = self.document.get_element_by_id(&icon_button_id(other)) {
                    let _ = btn.class_list().toggle_with_force("active", other == icon);
                }
            }
        }
    }

    fn icon_button_id(icon: IconKind) -> String {
        format!("icon-{}", icon.as_str())
    }

    /// Attach `handler` to `target` for the lifetime of the page
    fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static)
    where
        E: FromWasmAbi + 'static,
    {
        let closure = Closure::<dyn FnMut(E)>::new(handler);
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Square Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(WebGame {
            game: Game::new(seed, 0.0, 0.0),
            render_state: None,
            canvas: canvas.clone(),
            document: document.clone(),
            shown_title: None,
        }));
        app.borrow_mut().fit_canvas();
        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU, falling back to WebGL2
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let (width, height) = (canvas.width(), canvas.height());
        let render_state = RenderState::new(surface, &adapter, width, height).await;
        app.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, app.clone());
        setup_editor(&document, app.clone());

        {
            let app = app.clone();
            listen(&window, "resize", move |_event: web_sys::Event| {
                app.borrow_mut().fit_canvas();
            });
        }

        // Start game loop
        request_animation_frame(app);

        log::info!("Square Dash running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<WebGame>>) {
        {
            let app = app.clone();
            listen(canvas, "pointerdown", move |event: PointerEvent| {
                event.prevent_default();
                let mut a = app.borrow_mut();
                let rect = a.surface_rect();
                let client = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                a.game.pointer_down(client, rect);
            });
        }

        {
            let app = app.clone();
            listen(canvas, "pointermove", move |event: PointerEvent| {
                let mut a = app.borrow_mut();
                let rect = a.surface_rect();
                let client = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                a.game.pointer_move(client, rect);
            });
        }

        for name in ["pointerup", "pointercancel"] {
            let app = app.clone();
            listen(canvas, name, move |_event: PointerEvent| {
                app.borrow_mut().game.pointer_up();
            });
        }
    }

    fn setup_editor(document: &Document, app: Rc<RefCell<WebGame>>) {
        // EDIT and BACK both toggle the panel
        for id in ["edit-btn", "editor-back"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let app = app.clone();
                listen(&btn, "click", move |event: MouseEvent| {
                    event.stop_propagation();
                    app.borrow_mut().toggle_editor();
                });
            }
        }

        for icon in IconKind::ALL {
            if let Some(btn) = document.get_element_by_id(&icon_button_id(icon)) {
                let app = app.clone();
                listen(&btn, "click", move |_event: MouseEvent| {
                    app.borrow_mut().select_icon(icon);
                });
            }
        }

        type Setter = fn(&mut Game, Rgb);
        let pickers: [(&str, Rgb, Setter); 3] = {
            let look = app.borrow().game.customization.get().clone();
            [
                ("player-color", look.player_color, |g: &mut Game, c: Rgb| {
                    g.customization.set_player_color(c)
                }),
                ("enemy-color", look.enemy_color, |g: &mut Game, c: Rgb| {
                    g.customization.set_enemy_color(c)
                }),
                ("background-color", look.background_color, |g: &mut Game, c: Rgb| {
                    g.customization.set_background_color(c)
                }),
            ]
        };

        for (id, initial, set) in pickers {
            let Some(input) = document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            else {
                log::warn!("Missing color picker #{}", id);
                continue;
            };
            input.set_value(&initial.to_hex());

            let app = app.clone();
            let source = input.clone();
            listen(&input, "input", move |_event: web_sys::Event| {
                match Rgb::from_hex(&source.value()) {
                    Some(color) => set(&mut app.borrow_mut().game, color),
                    None => log::warn!("Ignoring color {:?} from #{}", source.value(), id),
                }
            });
        }
    }

    fn request_animation_frame(app: Rc<RefCell<WebGame>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One display refresh: tick, draw, schedule the next
    fn game_loop(app: Rc<RefCell<WebGame>>) {
        {
            let mut a = app.borrow_mut();
            a.game.advance();
            a.render();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Square Dash (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    run_headless_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play one scripted run: the pointer circles the playfield until the
/// player is hit or time runs out.
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_session() {
    use glam::Vec2;
    use square_dash::{Game, SurfaceRect};

    const WIDTH: f32 = 400.0;
    const HEIGHT: f32 = 600.0;
    const MAX_TICKS: u32 = 60 * 60;

    let rect = SurfaceRect::new(0.0, 0.0, WIDTH, HEIGHT);
    let center = Vec2::new(WIDTH, HEIGHT) / 2.0;
    let mut game = Game::new(0x5eed, WIDTH, HEIGHT);
    game.pointer_down(center, rect);

    let mut ticks = 0;
    let mut vertices = 0;
    while ticks < MAX_TICKS {
        let angle = ticks as f32 * 0.03;
        let pointer = center + Vec2::new(angle.cos(), angle.sin()) * 120.0;
        game.pointer_move(pointer, rect);

        let outcome = game.advance();
        vertices += game.frame().vertices.len();
        ticks += 1;
        if outcome.collided {
            break;
        }
    }

    println!(
        "Headless run: {} ticks, score {}, {} enemies on field, {} vertices drawn",
        ticks,
        game.state.score,
        game.state.enemies.len(),
        vertices
    );
}
