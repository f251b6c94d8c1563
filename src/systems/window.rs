//! Window systems
//!
//! [`RenderWindow`] is what the app loop needs from a window: an open flag,
//! event pumping, key presses and a surface to draw the frame onto.
//! [`WinitWindow`] is the desktop window; [`HeadlessWindow`] runs the same
//! loop without an OS window for a fixed number of frames.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use patas_core::{Primitive, RenderTarget, Surface};
use patas_editor::EditorFrame;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window, WindowId},
};
use crate::config::WindowConfig;

/// Frame cap for headless windows configured without one
pub const DEFAULT_HEADLESS_FRAMES: u64 = 600;

/// The window collaborator driven by the app loop
pub trait RenderWindow {
    /// False once the window was closed
    fn is_open(&self) -> bool;

    /// Process pending window events without blocking
    fn handle_events(&mut self);

    /// Keys pressed since the last call
    fn take_key_presses(&mut self) -> Vec<KeyCode>;

    /// Start a new frame
    fn clear(&mut self);

    /// Offscreen target for this frame's draws
    fn surface(&mut self) -> &mut dyn Surface;

    /// Hand over the editor overlay for this frame
    fn show_editor(&mut self, frame: EditorFrame);

    /// Present the frame
    fn display(&mut self);

    /// Request the window to close; the loop stops before the next frame
    fn close(&mut self);

    /// Release the OS window
    fn destroy(&mut self);
}

/// Window lifecycle errors
#[derive(Debug)]
pub enum WindowError {
    /// The event loop could not be created
    EventLoop(String),
    /// The OS window could not be created
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::EventLoop(msg) => write!(f, "Event loop creation failed: {}", msg),
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

/// State the winit event loop writes into
struct WindowState {
    config: WindowConfig,
    window: Option<Arc<Window>>,
    open: bool,
    target: RenderTarget,
    pressed: Vec<KeyCode>,
    error: Option<WindowError>,
}

impl ApplicationHandler for WindowState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.width,
                self.config.height,
            ));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                self.target.resize(size.width, size.height);
                self.window = Some(Arc::new(window));
                self.open = true;
            }
            Err(e) => {
                self.error = Some(WindowError::CreationFailed(e.to_string()));
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                self.open = false;
            }
            WindowEvent::Resized(size) => {
                log::debug!("Resized to {}x{}", size.width, size.height);
                self.target.resize(size.width, size.height);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        self.pressed.push(code);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Desktop window backed by winit
///
/// Events are pumped once per frame with `pump_app_events`, so the loop
/// stays in the caller.
pub struct WinitWindow {
    event_loop: EventLoop<()>,
    state: WindowState,
    editor: EditorFrame,
    presented: usize,
}

impl WinitWindow {
    /// Create the event loop and the window
    pub fn open(config: &WindowConfig) -> Result<Self, WindowError> {
        let event_loop = EventLoop::new().map_err(|e| WindowError::EventLoop(e.to_string()))?;
        let mut window = Self {
            event_loop,
            state: WindowState {
                config: config.clone(),
                window: None,
                open: false,
                target: RenderTarget::new(config.width, config.height),
                pressed: Vec::new(),
                error: None,
            },
            editor: EditorFrame::default(),
            presented: 0,
        };

        // The window is created from `resumed`, delivered on the first pump
        window.pump();
        if let Some(e) = window.state.error.take() {
            return Err(e);
        }
        if window.state.window.is_none() {
            return Err(WindowError::CreationFailed("event loop never resumed".to_string()));
        }

        log::info!("Opened window '{}' ({}x{})", config.title, config.width, config.height);
        Ok(window)
    }

    fn pump(&mut self) {
        let status = self.event_loop.pump_app_events(Some(Duration::ZERO), &mut self.state);
        if let PumpStatus::Exit(code) = status {
            log::debug!("Event loop exited with code {}", code);
            self.state.open = false;
        }
    }

    /// Draws presented by the last `display`
    pub fn presented_draws(&self) -> usize {
        self.presented
    }

    /// The editor overlay of the last frame
    pub fn editor_frame(&self) -> &EditorFrame {
        &self.editor
    }
}

impl RenderWindow for WinitWindow {
    fn is_open(&self) -> bool {
        self.state.open
    }

    fn handle_events(&mut self) {
        self.pump();
    }

    fn take_key_presses(&mut self) -> Vec<KeyCode> {
        std::mem::take(&mut self.state.pressed)
    }

    fn clear(&mut self) {
        self.state.target.clear();
    }

    fn surface(&mut self) -> &mut dyn Surface {
        &mut self.state.target
    }

    fn show_editor(&mut self, frame: EditorFrame) {
        self.editor = frame;
    }

    fn display(&mut self) {
        self.presented = self.state.target.draw_count();
        if let Some(window) = &self.state.window {
            window.pre_present_notify();
            window.request_redraw();
        }
    }

    fn close(&mut self) {
        self.state.open = false;
    }

    fn destroy(&mut self) {
        self.state.open = false;
        if self.state.window.take().is_some() {
            log::info!("Window destroyed");
        }
    }
}

/// A window with no OS surface
///
/// Stays open for `max_frames` displayed frames. Key presses can be scripted
/// per frame to drive the editor shortcuts.
pub struct HeadlessWindow {
    open: bool,
    max_frames: u64,
    frame: u64,
    target: RenderTarget,
    script: BTreeMap<u64, Vec<KeyCode>>,
    pressed: Vec<KeyCode>,
    last_draws: Vec<Primitive>,
    editor: EditorFrame,
}

impl HeadlessWindow {
    /// Create a window that closes after `max_frames` frames
    pub fn new(width: u32, height: u32, max_frames: u64) -> Self {
        Self {
            open: true,
            max_frames,
            frame: 0,
            target: RenderTarget::new(width, height),
            script: BTreeMap::new(),
            pressed: Vec::new(),
            last_draws: Vec::new(),
            editor: EditorFrame::default(),
        }
    }

    /// Create from window config, falling back to [`DEFAULT_HEADLESS_FRAMES`]
    pub fn from_config(config: &WindowConfig) -> Self {
        let max_frames = config.max_frames.unwrap_or(DEFAULT_HEADLESS_FRAMES);
        log::info!("Headless window ({}x{}) for {} frames", config.width, config.height, max_frames);
        Self::new(config.width, config.height, max_frames)
    }

    /// Press `key` at the start of frame `frame` (0-based)
    pub fn with_key_press(mut self, frame: u64, key: KeyCode) -> Self {
        self.script.entry(frame).or_default().push(key);
        self
    }

    /// Resize the offscreen target, as a window resize event would
    pub fn resize(&mut self, width: u32, height: u32) {
        self.target.resize(width, height);
    }

    /// Frames displayed so far
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// What the last displayed frame drew
    pub fn last_draws(&self) -> &[Primitive] {
        &self.last_draws
    }

    /// The editor overlay of the last frame
    pub fn editor_frame(&self) -> &EditorFrame {
        &self.editor
    }
}

impl RenderWindow for HeadlessWindow {
    fn is_open(&self) -> bool {
        self.open && self.frame < self.max_frames
    }

    fn handle_events(&mut self) {
        if let Some(keys) = self.script.remove(&self.frame) {
            self.pressed.extend(keys);
        }
    }

    fn take_key_presses(&mut self) -> Vec<KeyCode> {
        std::mem::take(&mut self.pressed)
    }

    fn clear(&mut self) {
        self.target.clear();
    }

    fn surface(&mut self) -> &mut dyn Surface {
        &mut self.target
    }

    fn show_editor(&mut self, frame: EditorFrame) {
        self.editor = frame;
    }

    fn display(&mut self) {
        self.last_draws = self.target.draws().to_vec();
        self.frame += 1;
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn destroy(&mut self) {
        self.open = false;
    }
}
