/// Keyboard key identifier, taken from the layout-aware (logical) key.
///
/// Only the keys an application is likely to bind are named. Printable keys
/// arrive as lowercase `Character`s; anything else is `Unknown`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,
    Alt,
    Meta,

    F11,

    Character(char),

    Unknown,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Modifier keys state.
///
/// Stored as booleans rather than bitflags to keep it explicit and stable.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Platform-agnostic events delivered to `core::App::on_event`.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The operator asked to close the window.
    CloseRequested,

    /// Explicit quit request from the host (e.g. the event loop is exiting).
    Quit,

    /// Drawable size changed, in physical pixels.
    Resized { width: u32, height: u32 },

    /// Window focus change.
    Focused(bool),

    ModifiersChanged(Modifiers),

    Key {
        key: Key,
        state: KeyState,
        /// True when event is a key-repeat.
        repeat: bool,
    },
}

impl Event {
    /// Returns true for events that always end the lifecycle.
    pub fn is_quit(&self) -> bool {
        matches!(self, Event::CloseRequested | Event::Quit)
    }

    /// Returns true for a fresh (non-repeat) press of `key`.
    pub fn is_key_press(&self, key: Key) -> bool {
        matches!(
            self,
            Event::Key { key: k, state: KeyState::Pressed, repeat: false } if *k == key
        )
    }
}
