//! Input management system
//!
//! Platform layers translate their native events into [`InputEvent`]s and
//! hand them to [`InputManager::handle_event`] as they arrive. Key presses
//! become [`Command`]s right away; mouse drags are accumulated and consumed
//! once per tick through [`InputManager::take_drag_delta`].

pub mod bindings;

pub use bindings::{Command, KeyBindings};

/// Key codes the demo reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// W key
    W,
    /// A key
    A,
    /// S key
    S,
    /// D key
    D,
    /// Space key
    Space,
    /// Left shift
    LeftShift,
    /// Left control
    LeftControl,
    /// Escape key
    Escape,
    /// Any key without a dedicated variant
    Other,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
    /// Any additional button
    Other,
}

/// Key transition reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Key went down
    Press,
    /// Key held long enough to auto-repeat
    Repeat,
    /// Key went up
    Release,
}

/// Discrete input event delivered by the platform layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Keyboard event
    Key {
        /// The key that changed
        key: KeyCode,
        /// How it changed
        action: KeyAction,
    },
    /// Mouse button event
    MouseButton {
        /// The mouse button that was pressed/released
        button: MouseButton,
        /// Whether the button was pressed (true) or released (false)
        pressed: bool,
        /// Cursor X coordinate when the button changed
        x: f64,
        /// Cursor Y coordinate when the button changed
        y: f64,
    },
    /// Cursor movement in window coordinates
    CursorMoved {
        /// New X coordinate
        x: f64,
        /// New Y coordinate
        y: f64,
    },
    /// Window close requested
    CloseRequested,
}

/// Input manager
///
/// Owns the mouse-pressed flag and the last cursor positions. Lives for the
/// whole process and is only touched from the frame loop's thread.
#[derive(Debug, Clone)]
pub struct InputManager {
    bindings: KeyBindings,
    cursor: (f64, f64),
    drag_anchor: (f64, f64),
    dragging: bool,
}

impl InputManager {
    /// Create a new input manager with the default bindings
    pub fn new() -> Self {
        Self {
            bindings: KeyBindings::default(),
            cursor: (0.0, 0.0),
            drag_anchor: (0.0, 0.0),
            dragging: false,
        }
    }

    /// Feed one platform event, returning the command it maps to
    pub fn handle_event(&mut self, event: InputEvent) -> Option<Command> {
        match event {
            InputEvent::Key { key, action } => self.handle_key_input(key, action),
            InputEvent::MouseButton { button, pressed, x, y } => {
                self.handle_mouse_move(x, y);
                self.handle_mouse_button(button, pressed);
                None
            }
            InputEvent::CursorMoved { x, y } => {
                self.handle_mouse_move(x, y);
                None
            }
            InputEvent::CloseRequested => Some(Command::Quit),
        }
    }

    /// Handle key input; presses and auto-repeats trigger, releases do not
    pub fn handle_key_input(&mut self, key: KeyCode, action: KeyAction) -> Option<Command> {
        match action {
            KeyAction::Press | KeyAction::Repeat => self.bindings.command_for(key),
            KeyAction::Release => None,
        }
    }

    /// Handle mouse button input
    ///
    /// Only a left press starts a drag; every other button event ends it.
    /// The cursor position at the event becomes the new drag anchor either way.
    pub fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        self.dragging = button == MouseButton::Left && pressed;
        self.drag_anchor = self.cursor;
    }

    /// Handle mouse movement
    pub fn handle_mouse_move(&mut self, x: f64, y: f64) {
        self.cursor = (x, y);
    }

    /// Whether a left-button drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Last known cursor position
    pub fn cursor_position(&self) -> (f64, f64) {
        self.cursor
    }

    /// Cursor travel since the last call while dragging, in pixels
    ///
    /// Returns `None` when no drag is active or the cursor has not moved.
    /// Consuming the delta moves the anchor to the current cursor.
    #[allow(clippy::cast_possible_truncation)]
    pub fn take_drag_delta(&mut self) -> Option<(f32, f32)> {
        if !self.dragging {
            return None;
        }
        let dx = (self.cursor.0 - self.drag_anchor.0) as f32;
        let dy = (self.cursor.1 - self.drag_anchor.1) as f32;
        self.drag_anchor = self.cursor;
        if dx == 0.0 && dy == 0.0 {
            None
        } else {
            Some((dx, dy))
        }
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
