//! dotboy: command line frontend for the emulator core.
//!
//! Loads a cartridge image, opens a scaled window, and drives the frame
//! loop at ~60 Hz, translating host key edges into joypad presses.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use minifb::{Key, Scale, Window, WindowOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

use dotboy_core::{Button, Machine, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Game Boy (DMG) emulator.
#[derive(Debug, Parser)]
#[command(name = "dotboy", version, about)]
struct Args {
    /// Path to the cartridge ROM image.
    rom: PathBuf,

    /// Integer window scale factor (1, 2, 4, or 8).
    #[arg(long, default_value_t = 2)]
    scale: u32,

    /// Run without a window, then exit.
    #[arg(long)]
    headless: bool,

    /// Number of frames to run in headless mode.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Verbose logging (RUST_LOG overrides this).
    #[arg(long)]
    debug: bool,
}

/// Host key bindings, d-pad on the arrows.
const KEY_MAP: [(Key, Button); 8] = [
    (Key::Right, Button::Right),
    (Key::Left, Button::Left),
    (Key::Up, Button::Up),
    (Key::Down, Button::Down),
    (Key::X, Button::A),
    (Key::Z, Button::B),
    (Key::Backspace, Button::Select),
    (Key::Enter, Button::Start),
];

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.debug);

    if !args.rom.is_file() {
        bail!("ROM file not found: {}", args.rom.display());
    }
    let rom = std::fs::read(&args.rom)
        .with_context(|| format!("failed to read ROM file {}", args.rom.display()))?;
    let mut machine = Machine::new(rom).context("failed to load cartridge")?;
    info!(
        rom = %args.rom.display(),
        title = machine.mmu.cartridge().title(),
        "cartridge loaded"
    );

    if args.headless {
        for _ in 0..args.frames {
            machine.run_frame();
        }
        return Ok(());
    }

    run_windowed(&mut machine, args.scale)
}

fn init_tracing(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

fn scale_option(scale: u32) -> Result<Scale> {
    Ok(match scale {
        1 => Scale::X1,
        2 => Scale::X2,
        4 => Scale::X4,
        8 => Scale::X8,
        other => bail!("unsupported scale factor {other} (use 1, 2, 4, or 8)"),
    })
}

fn run_windowed(machine: &mut Machine, scale: u32) -> Result<()> {
    let mut window = Window::new(
        "dotboy",
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        WindowOptions {
            scale: scale_option(scale)?,
            ..WindowOptions::default()
        },
    )
    .context("failed to open the emulator window")?;
    window.set_target_fps(60);

    let mut display = vec![0u32; SCREEN_WIDTH * SCREEN_HEIGHT];
    let mut held = [false; 8];

    while window.is_open() && !window.is_key_down(Key::Escape) {
        for (key, button) in KEY_MAP {
            let down = window.is_key_down(key);
            let was_down = &mut held[button as usize];
            if down && !*was_down {
                machine.press(button);
            }
            if !down && *was_down {
                machine.release(button);
            }
            *was_down = down;
        }

        machine.run_frame();

        for (slot, shade) in display.iter_mut().zip(machine.frame()) {
            *slot = shade.to_rgb();
        }
        window
            .update_with_buffer(&display, SCREEN_WIDTH, SCREEN_HEIGHT)
            .context("failed to present the frame")?;
    }

    Ok(())
}
