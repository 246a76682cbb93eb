// Logical controller buttons and default key bindings

use winit::keyboard::KeyCode;

/// The closed set of logical inputs a controller can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Up,
    Right,
    Down,
    Cancel,
    Select,
    Pause,
}

impl Button {
    /// Every button, in declaration order.
    pub const ALL: [Button; 7] = [
        Button::Left,
        Button::Up,
        Button::Right,
        Button::Down,
        Button::Cancel,
        Button::Select,
        Button::Pause,
    ];

    /// Movement buttons, used to filter directional queries.
    pub const DIRECTIONS: [Button; 4] =
        [Button::Left, Button::Up, Button::Right, Button::Down];

    /// Menu/meta buttons, used to filter selection queries.
    pub const SELECTIONS: [Button; 3] = [Button::Cancel, Button::Select, Button::Pause];

    /// The name used for this button in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Button::Left => "Left",
            Button::Up => "Up",
            Button::Right => "Right",
            Button::Down => "Down",
            Button::Cancel => "Cancel",
            Button::Select => "Select",
            Button::Pause => "Pause",
        }
    }

    /// Resolve a configuration-file name back to a button (case-sensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.name() == name)
    }
}

/// The built-in key mapping every controller starts from.
pub fn default_bindings() -> [(KeyCode, Button); 7] {
    [
        (KeyCode::KeyA, Button::Left),
        (KeyCode::KeyW, Button::Up),
        (KeyCode::KeyD, Button::Right),
        (KeyCode::KeyS, Button::Down),
        (KeyCode::KeyQ, Button::Cancel),
        (KeyCode::Enter, Button::Select),
        (KeyCode::KeyP, Button::Pause),
    ]
}
