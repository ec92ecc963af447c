use crate::constants::NUM_KEYS;

/// # Keypad
/// The 16-key hexadecimal input device, plus the wait latch used by the
/// blocking `LD Vx, K` instruction.
///
/// At most one wait is pending at a time; while it is, the interpreter's
/// `cycle()` is a no-op, so the latch can only be re-armed after it
/// resolves.
pub struct Keypad {
    keys: [bool; NUM_KEYS],
    /// Register index awaiting a key press, if any.
    waiting_for: Option<u8>,
}

impl Keypad {
    pub fn new() -> Self {
        Keypad {
            keys: [false; NUM_KEYS],
            waiting_for: None,
        }
    }

    pub fn reset(&mut self) {
        self.keys = [false; NUM_KEYS];
        self.waiting_for = None;
    }

    /// Whether `key` is currently held. Codes outside 0x0..=0xF read as not
    /// pressed; `SKP`/`SKNP` index by a full register byte, so they are
    /// reachable.
    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys.get(key as usize).copied().unwrap_or(false)
    }

    /// Records a key state change. When a wait is pending and this call is
    /// a transition to pressed, the wait resolves: the latch clears and the
    /// target register index is returned so the caller can store the key
    /// code there. Repeats of an already-held key and releases never
    /// resolve a wait.
    pub fn set_key(&mut self, key: u8, pressed: bool) -> Option<u8> {
        let slot = self.keys.get_mut(key as usize)?;
        let was_pressed = *slot;
        *slot = pressed;
        if pressed && !was_pressed {
            self.waiting_for.take()
        } else {
            None
        }
    }

    /// Arms the wait latch for `register`.
    pub fn begin_wait(&mut self, register: u8) {
        self.waiting_for = Some(register);
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting_for.is_some()
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_start_released() {
        let keypad = Keypad::new();
        assert!((0..16).all(|key| !keypad.is_pressed(key)));
    }

    #[test]
    fn test_press_and_release_are_recorded() {
        let mut keypad = Keypad::new();
        keypad.set_key(0xA, true);
        assert!(keypad.is_pressed(0xA));
        keypad.set_key(0xA, false);
        assert!(!keypad.is_pressed(0xA));
    }

    #[test]
    fn test_out_of_range_codes_read_as_released() {
        let mut keypad = Keypad::new();
        assert!(!keypad.is_pressed(0xFF));
        assert_eq!(keypad.set_key(0xFF, true), None);
    }

    #[test]
    fn test_fresh_press_resolves_a_pending_wait() {
        let mut keypad = Keypad::new();
        keypad.begin_wait(0x3);
        assert!(keypad.is_waiting());
        assert_eq!(keypad.set_key(0xE, true), Some(0x3));
        assert!(!keypad.is_waiting());
    }

    #[test]
    fn test_release_does_not_resolve_a_wait() {
        let mut keypad = Keypad::new();
        keypad.set_key(0xE, true);
        keypad.begin_wait(0x3);
        assert_eq!(keypad.set_key(0xE, false), None);
        assert!(keypad.is_waiting());
    }

    #[test]
    fn test_held_key_repeat_does_not_resolve_a_wait() {
        let mut keypad = Keypad::new();
        keypad.set_key(0xE, true);
        keypad.begin_wait(0x3);
        assert_eq!(keypad.set_key(0xE, true), None);
        assert!(keypad.is_waiting());
    }

    #[test]
    fn test_press_with_no_pending_wait_only_records_state() {
        let mut keypad = Keypad::new();
        assert_eq!(keypad.set_key(0x1, true), None);
        assert!(keypad.is_pressed(0x1));
    }

    #[test]
    fn test_reset_clears_keys_and_latch() {
        let mut keypad = Keypad::new();
        keypad.set_key(0x1, true);
        keypad.begin_wait(0x0);
        keypad.reset();
        assert!(!keypad.is_pressed(0x1));
        assert!(!keypad.is_waiting());
    }
}
