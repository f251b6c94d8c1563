//! The application loop
//!
//! [`App`] owns the scene, the editor, the notification sink and the
//! texture cache. [`App::run`] opens a window, builds the startup scene and
//! runs `handle_events -> editor commands -> update -> render` until the
//! window closes, then persists the notification log.

use patas_core::{Notifications, ResourceManager, Scene, Severity};
use patas_editor::Editor;
use crate::config::{AppConfig, ConfigError, WindowConfig};
use crate::input::{InputAction, InputMapper};
use crate::scene::{startup_scene, SceneBuildError};
use crate::systems::{FrameClock, RenderWindow, WindowError};

/// Fatal errors that stop the app before its loop starts
#[derive(Debug)]
pub enum AppError {
    /// The window could not be opened
    Window(WindowError),
    /// The configuration could not be loaded
    Config(ConfigError),
    /// An actor the app needs is not in the scene
    MissingActor(String),
    /// The patrol has nowhere to go
    EmptyPatrol,
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Window(e) => write!(f, "{}", e),
            AppError::Config(e) => write!(f, "{}", e),
            AppError::MissingActor(name) => write!(f, "Required actor '{}' is missing", name),
            AppError::EmptyPatrol => write!(f, "Patrol has no waypoints"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Window(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::MissingActor(_) | AppError::EmptyPatrol => None,
        }
    }
}

impl From<WindowError> for AppError {
    fn from(e: WindowError) -> Self {
        AppError::Window(e)
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<SceneBuildError> for AppError {
    fn from(e: SceneBuildError) -> Self {
        match e {
            SceneBuildError::EmptyPatrol => AppError::EmptyPatrol,
            SceneBuildError::MissingActor(name) => AppError::MissingActor(name),
        }
    }
}

/// Main application state
pub struct App {
    config: AppConfig,
    scene: Scene,
    editor: Editor,
    notifications: Notifications,
    resources: ResourceManager,
    clock: FrameClock,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let resources = ResourceManager::new(
            config.assets.root.clone(),
            &config.assets.extension,
            &config.assets.default_texture,
        );
        let clock = FrameClock::from_config(&config.timing);
        Self {
            config,
            scene: Scene::new(),
            editor: Editor::new(),
            notifications: Notifications::new(),
            resources,
            clock,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    /// Open a window with `open_window` and run until it closes
    ///
    /// Initialization failures are recorded as an error notification, the
    /// log is persisted and the error is returned.
    pub fn run<W, F>(&mut self, open_window: F) -> Result<(), AppError>
    where
        W: RenderWindow,
        F: FnOnce(&WindowConfig) -> Result<W, WindowError>,
    {
        let mut window = match open_window(&self.config.window) {
            Ok(window) => window,
            Err(e) => return Err(self.fail(e.into())),
        };
        self.run_window(&mut window)
    }

    /// Build the startup scene and run the loop on an already open window
    pub fn run_window<W: RenderWindow>(&mut self, window: &mut W) -> Result<(), AppError> {
        if let Err(e) = self.initialize() {
            window.destroy();
            return Err(self.fail(e));
        }

        self.notifications.add_message(Severity::Normal, "BaseApp initialized successfully.");

        self.clock.reset();
        while window.is_open() {
            self.handle_events(window);
            let dt = self.clock.tick();
            self.update(dt);
            self.render(window);
        }

        window.destroy();
        self.persist_log();
        Ok(())
    }

    fn initialize(&mut self) -> Result<(), AppError> {
        self.scene = startup_scene(&self.config, &mut self.resources, &mut self.notifications)?;
        log::info!("Startup scene ready with {} actors", self.scene.actor_count());
        Ok(())
    }

    fn fail(&mut self, error: AppError) -> AppError {
        self.notifications
            .add_message(Severity::Error, format!("Initialization failed: {}", error));
        self.persist_log();
        error
    }

    fn handle_events<W: RenderWindow>(&mut self, window: &mut W) {
        window.handle_events();
        for key in window.take_key_presses() {
            let Some(action) = InputMapper::map_key(key) else {
                continue;
            };
            match action.editor_command() {
                Some(command) => {
                    self.editor.apply(command, &mut self.scene, &mut self.notifications);
                }
                None if action == InputAction::Exit => window.close(),
                None => {}
            }
        }
    }

    fn update(&mut self, dt: f32) {
        self.scene.update(dt);
    }

    fn render<W: RenderWindow>(&mut self, window: &mut W) {
        window.clear();
        self.scene.render(window.surface());
        window.show_editor(self.editor.frame(&self.scene, &self.notifications));
        window.display();
    }

    fn persist_log(&self) {
        let path = &self.config.debug.log_file;
        match self.notifications.save_to_file(path) {
            Ok(()) => log::debug!("Notification log written to {}", path.display()),
            Err(e) => log::warn!("Failed to write notification log {}: {}", path.display(), e),
        }
    }
}
