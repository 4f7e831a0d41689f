use std::cell::RefCell;
use std::rc::Rc;

use sdl2::messagebox::{
    ButtonData, ClickedButton, MessageBoxButtonFlag, MessageBoxFlag, show_message_box,
};
use sdl2::pixels::Color;

use puno_ui::config::UiConfig;
use puno_ui::graphics::Graphics;
use puno_ui::gui::{
    GameModeSelectWindow, GameOptionWindow, HelpWindow, MenuWindow, OptionWindow,
    TitleMenuWindow,
};
use puno_ui::input_system::{InputSystem, UiAction};
use puno_ui::render::DrawCommand;
use puno_ui::scene::{Overlay, SceneRequest, SceneRequests};
use puno_ui::sdl_backend::SdlRenderer;
use puno_ui::settings::{AudioSettings, GameMode, GameOptions, SettingsStore};
use puno_ui::sound::{Sound, SoundBoard};
use puno_ui::window::{NavKey, PointerEvent};

const CONFIG_PATH: &str = "assets/config/ui.json";

/// Title screen: the main menu, a help bar and the overlay stack
struct TitleScene {
    menu: TitleMenuWindow,
    help: Rc<RefCell<HelpWindow>>,
    options: OptionWindow,
    mode_select: GameModeSelectWindow,
    game_options: GameOptionWindow,
    overlays: Vec<Overlay>,
    requests: SceneRequests,
    mode: Option<GameMode>,
}

impl TitleScene {
    fn new(graphics: Rc<Graphics>, sound: Rc<dyn Sound>, game: GameOptions) -> puno_ui::Result<Self> {
        let display = graphics.display.clone();
        let center_x = |w: f32| display.app_center_width(w);

        let mut menu = TitleMenuWindow::new(
            Rc::clone(&graphics),
            Rc::clone(&sound),
            center_x(300.0),
            display.app_height * 0.45,
            300.0,
            200.0,
        )?;
        menu.activate();

        let help = Rc::new(RefCell::new(HelpWindow::new(
            Rc::clone(&graphics),
            Rc::clone(&sound),
            0.0,
            display.app_height - 80.0,
            display.app_width,
            80.0,
        )?));

        let mut options = OptionWindow::new(Rc::clone(&graphics), Rc::clone(&sound))?;
        options.window_mut().hide();

        let mut mode_select = GameModeSelectWindow::new(
            Rc::clone(&graphics),
            Rc::clone(&sound),
            center_x(400.0),
            display.app_center_height(160.0),
            400.0,
            160.0,
        )?;
        mode_select.window_mut().set_help_window(help.clone());
        mode_select.window_mut().hide();

        let mut game_options = GameOptionWindow::new(
            Rc::clone(&graphics),
            sound,
            center_x(400.0),
            display.app_center_height(200.0),
            400.0,
            200.0,
            game,
        )?;
        game_options.window_mut().hide();

        Ok(TitleScene {
            menu,
            help,
            options,
            mode_select,
            game_options,
            overlays: Vec::new(),
            requests: SceneRequests::new(),
            mode: None,
        })
    }

    fn overlay_mut(&mut self, overlay: Overlay) -> &mut dyn MenuWindow {
        match overlay {
            Overlay::Options => &mut self.options,
            Overlay::GameModeSelect => &mut self.mode_select,
            Overlay::GameOptions => &mut self.game_options,
        }
    }

    /// Window that receives input: the top overlay, else the title menu
    fn focused_mut(&mut self) -> &mut dyn MenuWindow {
        match self.overlays.last().copied() {
            Some(overlay) => self.overlay_mut(overlay),
            None => &mut self.menu,
        }
    }

    fn has_overlay(&self) -> bool {
        !self.overlays.is_empty()
    }

    fn handle_pointer(&mut self, event: PointerEvent) {
        let mut requests = std::mem::take(&mut self.requests);
        self.focused_mut().handle_pointer(event, &mut requests);
        self.requests = requests;
    }

    fn handle_key(&mut self, key: NavKey) {
        let mut requests = std::mem::take(&mut self.requests);
        self.focused_mut().handle_key(key, &mut requests);
        self.requests = requests;
    }

    fn raise_overlay(&mut self, overlay: Overlay) {
        if self.overlays.contains(&overlay) {
            return;
        }
        self.focused_mut().deactivate();
        let window = self.overlay_mut(overlay);
        window.window_mut().show();
        window.activate();
        self.overlays.push(overlay);
        log::debug!("Raised {:?}", overlay);
    }

    fn close_overlay(&mut self) {
        let Some(overlay) = self.overlays.pop() else {
            return;
        };
        let window = self.overlay_mut(overlay);
        window.deactivate();
        window.window_mut().unselect();
        window.window_mut().hide();
        self.focused_mut().activate();
        if overlay == Overlay::GameModeSelect {
            self.help.borrow_mut().set_text::<&str>(&[]);
        }
        log::debug!("Closed {:?}", overlay);
    }

    /// Applies what the windows asked for during input handling
    fn apply_requests(&mut self, sdl_window: &sdl2::video::Window) {
        for request in self.requests.drain() {
            match request {
                SceneRequest::RaiseOverlay(overlay) => self.raise_overlay(overlay),
                SceneRequest::CloseOverlay => self.close_overlay(),
                SceneRequest::ConfirmAndOpen { prompt, url } => {
                    if confirm(sdl_window, &prompt) {
                        if let Err(e) = sdl2::url::open_url(&url) {
                            log::warn!("Failed to open {}: {}", url, e);
                        }
                    }
                }
                SceneRequest::StartGame(mode) => {
                    log::info!("Selected game mode {:?}", mode);
                    self.mode = Some(mode);
                    self.close_overlay();
                    self.raise_overlay(Overlay::GameOptions);
                }
                SceneRequest::RemoveWindow(id) => {
                    log::debug!("Window {:?} removed", id);
                }
            }
        }
    }

    fn update(&mut self) {
        self.menu.update();
        self.help.borrow_mut().update();
        self.options.update();
        self.mode_select.update();
        self.game_options.update();
    }

    /// Draw commands for every window, back to front
    fn draw_commands(&self) -> Vec<DrawCommand> {
        let mut commands = self.menu.window().draw_commands();
        commands.extend(self.help.borrow().window().draw_commands());
        for overlay in &self.overlays {
            let window = match overlay {
                Overlay::Options => self.options.window(),
                Overlay::GameModeSelect => self.mode_select.window(),
                Overlay::GameOptions => self.game_options.window(),
            };
            commands.extend(window.draw_commands());
        }
        commands
    }
}

/// Asks the player to confirm with a native message box
fn confirm(sdl_window: &sdl2::video::Window, prompt: &str) -> bool {
    let buttons = [
        ButtonData {
            flags: MessageBoxButtonFlag::RETURNKEY_DEFAULT,
            button_id: 1,
            text: "OK",
        },
        ButtonData {
            flags: MessageBoxButtonFlag::ESCAPEKEY_DEFAULT,
            button_id: 0,
            text: "Cancel",
        },
    ];
    match show_message_box(MessageBoxFlag::INFORMATION, &buttons, "Puno", prompt, sdl_window, None) {
        Ok(ClickedButton::CustomButton(button)) => button.button_id == 1,
        Ok(ClickedButton::CloseButton) => false,
        Err(e) => {
            log::warn!("Confirm dialog failed: {:?}", e);
            false
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    let config = UiConfig::load_from_file(CONFIG_PATH);
    let (app_width, app_height) = (
        config.display.app_width as u32,
        config.display.app_height as u32,
    );

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window("Puno", app_width, app_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(app_width, app_height)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let mut renderer = SdlRenderer::new();
    let atlas = renderer.load_images(&texture_creator, &config)?;
    let graphics = Rc::new(Graphics::new(config, Box::new(atlas)));

    let sound = Rc::new(SoundBoard::new());
    let store = SettingsStore::new(SettingsStore::default_location())?;
    let mut settings = store.load().unwrap_or_else(|e| {
        log::warn!("Failed to load settings: {}", e);
        Default::default()
    });
    settings.audio.apply(sound.as_ref());

    let mut scene = TitleScene::new(Rc::clone(&graphics), sound.clone(), settings.game)?;
    let mut input = InputSystem::new();

    log::info!("Title scene ready ({}x{})", app_width, app_height);

    'running: loop {
        input.update_context(scene.has_overlay());
        for action in input.poll_events(&mut event_pump) {
            match action {
                UiAction::Quit => break 'running,
                UiAction::Pointer(event) => scene.handle_pointer(event),
                UiAction::Key(key) => scene.handle_key(key),
            }
        }
        scene.apply_requests(canvas.window());
        scene.update();

        canvas.set_draw_color(Color::RGB(20, 20, 30));
        canvas.clear();
        renderer.draw(&mut canvas, &scene.draw_commands())?;
        canvas.present();

        // Cap at ~60 FPS
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    settings.audio = AudioSettings::capture(sound.as_ref());
    settings.game = scene.game_options.options();
    if let Err(e) = store.save(&settings) {
        log::warn!("Failed to save settings: {}", e);
    }

    Ok(())
}
