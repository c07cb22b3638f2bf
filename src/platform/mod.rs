//! Platform input mapping
//!
//! Turns raw device events into intent updates:
//! - Keyboard: arrow keys, press = active, release = inactive
//! - Touch: left/right screen zones, start = active, end = inactive

use crate::sim::{Direction, Intents};

/// Legacy DOM key codes for the arrow keys
pub const KEY_CODE_LEFT: u32 = 37;
pub const KEY_CODE_RIGHT: u32 = 39;

/// Map a key name (`KeyboardEvent.key` style) to a direction
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowLeft" | "Left" => Some(Direction::Left),
        "ArrowRight" | "Right" => Some(Direction::Right),
        _ => None,
    }
}

/// Map a legacy key code to a direction
pub fn direction_for_key_code(code: u32) -> Option<Direction> {
    match code {
        KEY_CODE_LEFT => Some(Direction::Left),
        KEY_CODE_RIGHT => Some(Direction::Right),
        _ => None,
    }
}

/// Touch regions laid over the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchZone {
    Left,
    Right,
}

impl TouchZone {
    pub fn direction(self) -> Direction {
        match self {
            TouchZone::Left => Direction::Left,
            TouchZone::Right => Direction::Right,
        }
    }

    /// Zone under a touch point: left or right half of the surface
    pub fn at(x: f32, surface_width: f32) -> Self {
        if x < surface_width / 2.0 {
            TouchZone::Left
        } else {
            TouchZone::Right
        }
    }
}

/// A device event relevant to the game
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),
    TouchStart(TouchZone),
    TouchEnd(TouchZone),
}

/// Apply one device event. Returns false for events the game ignores.
pub fn apply_event(intents: &mut Intents, event: &InputEvent) -> bool {
    let (direction, active) = match event {
        InputEvent::KeyDown(key) => match direction_for_key(key) {
            Some(d) => (d, true),
            None => return false,
        },
        InputEvent::KeyUp(key) => match direction_for_key(key) {
            Some(d) => (d, false),
            None => return false,
        },
        InputEvent::TouchStart(zone) => (zone.direction(), true),
        InputEvent::TouchEnd(zone) => (zone.direction(), false),
    };
    intents.set(direction, active);
    true
}

/// Apply a browser keyboard event
#[cfg(target_arch = "wasm32")]
pub fn apply_keyboard_event(
    intents: &mut Intents,
    event: &web_sys::KeyboardEvent,
    pressed: bool,
) -> bool {
    let key = event.key();
    let direction = direction_for_key(&key).or_else(|| direction_for_key_code(event.key_code()));
    match direction {
        Some(d) => {
            intents.set(d, pressed);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(direction_for_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(direction_for_key("Right"), Some(Direction::Right));
        assert_eq!(direction_for_key("a"), None);
        assert_eq!(direction_for_key_code(37), Some(Direction::Left));
        assert_eq!(direction_for_key_code(39), Some(Direction::Right));
        assert_eq!(direction_for_key_code(38), None);
    }

    #[test]
    fn test_key_press_and_release() {
        let mut intents = Intents::default();
        assert!(apply_event(&mut intents, &InputEvent::KeyDown("ArrowLeft".into())));
        assert!(intents.left());
        assert!(apply_event(&mut intents, &InputEvent::KeyUp("ArrowLeft".into())));
        assert!(!intents.left());
        assert!(!apply_event(&mut intents, &InputEvent::KeyDown("Space".into())));
        assert_eq!(intents, Intents::default());
    }

    #[test]
    fn test_touch_zones() {
        assert_eq!(TouchZone::at(10.0, 400.0), TouchZone::Left);
        assert_eq!(TouchZone::at(200.0, 400.0), TouchZone::Right);

        let mut intents = Intents::default();
        apply_event(&mut intents, &InputEvent::TouchStart(TouchZone::Right));
        assert!(intents.right());
        apply_event(&mut intents, &InputEvent::TouchEnd(TouchZone::Right));
        assert!(!intents.right());
    }
}
