/// Total bytes of addressable RAM.
pub const MEMORY_SIZE: usize = 4096;

/// Address at which loaded programs begin executing.
pub const PROGRAM_START: u16 = 0x200;

/// Address of the font sprite sheet; everything below [`PROGRAM_START`] is
/// reserved for the interpreter and never touched by a ROM load.
pub const FONT_START: u16 = 0x050;

/// Bytes per font glyph; glyphs are 8x5 pixels, one byte per row.
pub const FONT_GLYPH_SIZE: u16 = 5;

/// Display dimensions in pixels.
pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Number of return addresses the call stack can hold.
pub const STACK_DEPTH: usize = 16;

/// Number of keys on the hexadecimal keypad.
pub const NUM_KEYS: usize = 16;

/// Default instruction clock rate in Hz. Hosts may drive `cycle()` anywhere
/// between [`MIN_CYCLE_RATE`] and [`MAX_CYCLE_RATE`].
pub const DEFAULT_CYCLE_RATE: u32 = 500;
pub const MIN_CYCLE_RATE: u32 = 10;
pub const MAX_CYCLE_RATE: u32 = 1500;

/// Rate at which hosts must drive `tick_timers()`, in Hz. Fixed by the
/// machine definition, independent of the instruction clock.
pub const TIMER_RATE: u32 = 60;

/// Sprite data for the hexadecimal digits 0..F, 5 bytes per glyph.
///
/// Written at [`FONT_START`] on every reset so `LD F, Vx` can point the
/// index register at a digit.
pub const FONT_SPRITES: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
