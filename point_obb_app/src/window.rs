//! Window management using GLFW
//!
//! The window carries no graphics context. It feeds input to the engine and
//! shows the collision highlight in its title bar.

use point_obb::input::{InputEvent, KeyAction, KeyCode, MouseButton};
use point_obb::render::{Hue, Mesh, RenderSurface};
use point_obb::foundation::math::Mat4;
use point_obb::EventSource;
use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// `glfwInit` failed
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// The window could not be created
    #[error("Window creation failed")]
    CreationFailed,
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window wrapper
pub struct Window {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    title: String,
    cursor: (f64, f64),
    highlighted: bool,
    frame_highlighted: bool,
}

impl Window {
    /// Open a fixed-size window with input polling enabled
    pub fn new(title: &str, width: u32, height: u32) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors).map_err(|_| WindowError::InitializationFailed)?;

        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
        glfw.window_hint(glfw::WindowHint::Resizable(false));

        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        window.set_key_polling(true);
        window.set_mouse_button_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_close_polling(true);

        // GLFW only reports motion, so seed the position for a click that
        // arrives before the first move.
        let cursor = window.get_cursor_pos();

        Ok(Self {
            glfw,
            window,
            events,
            title: title.to_string(),
            cursor,
            highlighted: false,
            frame_highlighted: false,
        })
    }
}

impl EventSource for Window {
    fn poll_events(&mut self, events: &mut Vec<InputEvent>) {
        self.glfw.poll_events();
        for (_, event) in glfw::flush_messages(&self.events) {
            if let glfw::WindowEvent::CursorPos(x, y) = event {
                self.cursor = (x, y);
            }
            events.extend(translate_event(&event, self.cursor));
        }
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }
}

impl RenderSurface for Window {
    fn begin_frame(&mut self) {
        self.frame_highlighted = false;
    }

    fn draw(&mut self, _mesh: &Mesh, _mvp: &Mat4, hue: Hue) {
        self.frame_highlighted |= hue.is_highlighted();
    }

    fn end_frame(&mut self) {
        if self.frame_highlighted != self.highlighted {
            self.highlighted = self.frame_highlighted;
            if self.highlighted {
                self.window.set_title(&format!("{} [colliding]", self.title));
            } else {
                self.window.set_title(&self.title);
            }
        }
    }
}

/// Map a GLFW event onto an [`InputEvent`]; `cursor` is the pointer position
/// when the event happened
fn translate_event(event: &glfw::WindowEvent, cursor: (f64, f64)) -> Option<InputEvent> {
    match *event {
        glfw::WindowEvent::Key(key, _, action, _) => Some(InputEvent::Key {
            key: translate_key(key),
            action: translate_action(action),
        }),
        glfw::WindowEvent::MouseButton(button, action, _) => Some(InputEvent::MouseButton {
            button: translate_mouse_button(button),
            pressed: action == glfw::Action::Press,
            x: cursor.0,
            y: cursor.1,
        }),
        glfw::WindowEvent::CursorPos(x, y) => Some(InputEvent::CursorMoved { x, y }),
        glfw::WindowEvent::Close => Some(InputEvent::CloseRequested),
        _ => None,
    }
}

const fn translate_key(key: glfw::Key) -> KeyCode {
    match key {
        glfw::Key::W => KeyCode::W,
        glfw::Key::A => KeyCode::A,
        glfw::Key::S => KeyCode::S,
        glfw::Key::D => KeyCode::D,
        glfw::Key::Space => KeyCode::Space,
        glfw::Key::LeftShift => KeyCode::LeftShift,
        glfw::Key::LeftControl => KeyCode::LeftControl,
        glfw::Key::Escape => KeyCode::Escape,
        _ => KeyCode::Other,
    }
}

const fn translate_action(action: glfw::Action) -> KeyAction {
    match action {
        glfw::Action::Press => KeyAction::Press,
        glfw::Action::Repeat => KeyAction::Repeat,
        glfw::Action::Release => KeyAction::Release,
    }
}

const fn translate_mouse_button(button: glfw::MouseButton) -> MouseButton {
    match button {
        glfw::MouseButton::Button1 => MouseButton::Left,
        glfw::MouseButton::Button2 => MouseButton::Right,
        glfw::MouseButton::Button3 => MouseButton::Middle,
        _ => MouseButton::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_movement_keys() {
        assert_eq!(translate_key(glfw::Key::LeftControl), KeyCode::LeftControl);
        assert_eq!(translate_key(glfw::Key::Q), KeyCode::Other);
        assert_eq!(translate_action(glfw::Action::Repeat), KeyAction::Repeat);
    }

    #[test]
    fn test_translate_mouse_events() {
        let press = glfw::WindowEvent::MouseButton(
            glfw::MouseButton::Button1,
            glfw::Action::Press,
            glfw::Modifiers::empty(),
        );
        assert_eq!(
            translate_event(&press, (400.0, 300.0)),
            Some(InputEvent::MouseButton { button: MouseButton::Left, pressed: true, x: 400.0, y: 300.0 })
        );
        assert_eq!(
            translate_event(&glfw::WindowEvent::CursorPos(3.0, 4.0), (0.0, 0.0)),
            Some(InputEvent::CursorMoved { x: 3.0, y: 4.0 })
        );
        assert_eq!(translate_event(&glfw::WindowEvent::Focus(true), (0.0, 0.0)), None);
    }
}
