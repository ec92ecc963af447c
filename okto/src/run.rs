use std::time::{Duration, Instant};

use log::{debug, error};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use okto_core::constants::TIMER_RATE;
use okto_core::Interpreter;
use okto_display::Display;

use crate::keymap::keymap;

/// Drives the interpreter against a window until it is closed.
///
/// Two logical clocks run off one scheduling loop: instruction cycles at
/// `cycle_rate` Hz and timer ticks at the fixed 60 Hz, each with its own
/// deadline. The loop sleeps until the nearer deadline, so neither clock
/// starves the other.
///
/// Host controls on top of the keypad block: `Space` toggles pause,
/// `Escape` reloads the ROM from scratch, closing the window quits.
pub fn run(rom: &[u8], cycle_rate: u32) -> Result<(), String> {
    let mut chip8 = Interpreter::new();
    chip8.load_rom(rom);

    let sdl = sdl2::init()?;
    let mut display = Display::new(&sdl)?;
    let mut events = sdl.event_pump()?;

    let cycle_interval = Duration::from_secs_f64(1.0 / f64::from(cycle_rate));
    let tick_interval = Duration::from_secs_f64(1.0 / f64::from(TIMER_RATE));
    let mut next_cycle = Instant::now();
    let mut next_tick = Instant::now();
    let mut was_beeping = false;

    'event: loop {
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(code)) => chip8.set_key(code, true),
                    (Keycode::Space, _) => {
                        let paused = !chip8.is_paused();
                        chip8.set_paused(paused);
                        debug!("{}", if paused { "paused" } else { "resumed" });
                    }
                    (Keycode::Escape, _) => {
                        chip8.load_rom(rom);
                        debug!("reloaded ROM");
                    }
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(code) = keymap(key) {
                        chip8.set_key(code, false);
                    }
                }
                _ => continue,
            }
        }

        let now = Instant::now();
        while next_cycle <= now {
            if let Err(fault) = chip8.cycle() {
                // latched; the window stays up so the fault can be inspected
                error!("machine halted: {}", fault);
            }
            next_cycle += cycle_interval;
        }
        while next_tick <= now {
            chip8.tick_timers();
            next_tick += tick_interval;
        }

        // the sound signal is surfaced, not synthesized
        if chip8.is_sound_active() != was_beeping {
            was_beeping = !was_beeping;
            debug!("sound {}", if was_beeping { "on" } else { "off" });
        }

        if let Some(pixels) = chip8.poll_frame() {
            display.render(pixels)?;
        }

        let deadline = next_cycle.min(next_tick);
        if let Some(wait) = deadline.checked_duration_since(Instant::now()) {
            std::thread::sleep(wait);
        }
    }

    Ok(())
}
