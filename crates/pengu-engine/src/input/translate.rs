use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{Key as WinitKey, ModifiersState, NamedKey};

use super::{Event, Key, KeyState, Modifiers};

/// Translates a winit `WindowEvent` into an engine `Event`.
///
/// Returns `None` for events the harness does not forward (redraws, pointer
/// motion, IME, ...).
pub(crate) fn translate_window_event(event: &WindowEvent) -> Option<Event> {
    match event {
        WindowEvent::CloseRequested => Some(Event::CloseRequested),

        WindowEvent::Destroyed => Some(Event::Quit),

        WindowEvent::Resized(size) => Some(Event::Resized {
            width: size.width,
            height: size.height,
        }),

        WindowEvent::Focused(f) => Some(Event::Focused(*f)),

        WindowEvent::ModifiersChanged(m) => {
            // winit 0.30: ModifiersChanged carries a wrapper with `.state()`.
            Some(Event::ModifiersChanged(map_modifiers(m.state())))
        }

        WindowEvent::KeyboardInput { event, .. } => {
            let state = match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            };

            Some(Event::Key {
                key: map_key(&event.logical_key),
                state,
                repeat: event.repeat,
            })
        }

        _ => None,
    }
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

fn map_key(key: &WinitKey) -> Key {
    match key {
        WinitKey::Named(named) => match named {
            NamedKey::Escape => Key::Escape,
            NamedKey::Enter => Key::Enter,
            NamedKey::Tab => Key::Tab,
            NamedKey::Backspace => Key::Backspace,
            NamedKey::Space => Key::Space,

            NamedKey::ArrowUp => Key::ArrowUp,
            NamedKey::ArrowDown => Key::ArrowDown,
            NamedKey::ArrowLeft => Key::ArrowLeft,
            NamedKey::ArrowRight => Key::ArrowRight,

            NamedKey::Shift => Key::Shift,
            NamedKey::Control => Key::Control,
            NamedKey::Alt => Key::Alt,
            NamedKey::Super | NamedKey::Meta => Key::Meta,

            NamedKey::F11 => Key::F11,

            _ => Key::Unknown,
        },

        // Some platforms report space as a character rather than a named key.
        WinitKey::Character(s) => match s.chars().next() {
            Some(' ') => Key::Space,
            Some(c) => Key::Character(c.to_ascii_lowercase()),
            None => Key::Unknown,
        },

        _ => Key::Unknown,
    }
}
