//! Key bindings
//!
//! Maps keys onto scene commands. Movement directions are unit world axes;
//! the scene scales them by the configured movement speed.

use std::collections::HashMap;

use super::KeyCode;
use crate::foundation::math::Vec3;

/// Action produced by input for the simulation to apply
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Move the selected entity one step along a world-space direction
    Move(Vec3),
    /// Swap which entity is selected
    ToggleSelection,
    /// Stop the frame loop
    Quit,
}

/// Lookup table from keys to commands
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, Command>,
}

impl Default for KeyBindings {
    /// WASD moves in the XY plane, left control/shift move along +Z/-Z,
    /// space swaps the selection and escape quits
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(KeyCode::W, Command::Move(Vec3::y()));
        bindings.bind(KeyCode::S, Command::Move(-Vec3::y()));
        bindings.bind(KeyCode::A, Command::Move(-Vec3::x()));
        bindings.bind(KeyCode::D, Command::Move(Vec3::x()));
        bindings.bind(KeyCode::LeftControl, Command::Move(Vec3::z()));
        bindings.bind(KeyCode::LeftShift, Command::Move(-Vec3::z()));
        bindings.bind(KeyCode::Space, Command::ToggleSelection);
        bindings.bind(KeyCode::Escape, Command::Quit);
        bindings
    }
}

impl KeyBindings {
    /// Bindings with nothing mapped
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Map `key` to `command`, replacing any previous binding
    pub fn bind(&mut self, key: KeyCode, command: Command) {
        self.bindings.insert(key, command);
    }

    /// Command bound to `key`, if any
    pub fn command_for(&self, key: KeyCode) -> Option<Command> {
        self.bindings.get(&key).copied()
    }
}
