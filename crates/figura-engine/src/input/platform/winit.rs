use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use crate::input::{InputEvent, InputState, Key, KeyState, Modifiers};

/// Translates a winit `WindowEvent` into an engine `InputEvent`.
///
/// Returns `None` for events not represented by the input subsystem.
pub(crate) fn translate_window_event(state: &InputState, event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::ModifiersChanged(m) => {
            // winit 0.30: ModifiersChanged carries a wrapper with `.state()`.
            let ms: ModifiersState = m.state();
            Some(InputEvent::ModifiersChanged(map_modifiers(ms)))
        }

        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::KeyboardInput { event, .. } => {
            let st = match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            };

            let (key, code) = map_key(event.physical_key);

            Some(InputEvent::Key {
                key,
                state: st,
                modifiers: state.modifiers,
                code,
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

pub(crate) fn map_key(pk: PhysicalKey) -> (Key, u32) {
    match pk {
        PhysicalKey::Code(code) => {
            let key = match code {
                KeyCode::Escape => Key::Escape,
                KeyCode::Tab => Key::Tab,
                KeyCode::Space => Key::Space,

                KeyCode::ArrowUp => Key::ArrowUp,
                KeyCode::ArrowDown => Key::ArrowDown,
                KeyCode::ArrowLeft => Key::ArrowLeft,
                KeyCode::ArrowRight => Key::ArrowRight,

                KeyCode::KeyR => Key::R,

                other => Key::Unknown(other as u32),
            };

            (key, code as u32)
        }

        // NativeKeyCode is not a u32 in winit 0.30; preserve "unknown" without a stable numeric.
        PhysicalKey::Unidentified(_) => (Key::Unknown(0), 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    #[test]
    fn arrows_and_escape_map_to_named_keys() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ArrowUp)).0, Key::ArrowUp);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ArrowDown)).0, Key::ArrowDown);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Escape)).0, Key::Escape);
    }

    #[test]
    fn bound_letters_map_and_others_do_not() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyR)).0, Key::R);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Tab)).0, Key::Tab);
        let (key, code) = map_key(PhysicalKey::Code(KeyCode::KeyQ));
        assert_eq!(key, Key::Unknown(code));
    }

    #[test]
    fn unmapped_code_is_unknown_with_code() {
        let (key, code) = map_key(PhysicalKey::Code(KeyCode::F5));
        assert_eq!(key, Key::Unknown(code));
    }

    #[test]
    fn unidentified_is_unknown_zero() {
        let (key, code) = map_key(PhysicalKey::Unidentified(NativeKeyCode::Unidentified));
        assert_eq!((key, code), (Key::Unknown(0), 0));
    }
}
