// What you SEE when you run this:
// • A 1000x1000 window tiled with 25x25 blue squares.
// • Click anywhere: a small pink eraser appears at the click.
// • The eraser follows your mouse and repaints touched squares white.
// • Press 'q' (or close the window) to quit.

mod canvas;
mod eraser;
mod error;
mod grid;
mod scene;
mod types;

use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use canvas::Canvas;
use eraser::{ERASER_SIZE, erase_objects};
use error::Error;
use grid::create_grid;
use log::warn;
use types::{BLUE, PINK, WHITE};

const CANVAS_WIDTH: i32 = 1000;
const CANVAS_HEIGHT: i32 = 1000;
const CELL_SIZE: i32 = 40;

/// The sole quit signal, case-sensitive.
const QUIT_KEY: char = 'q';

/// Pacing of the Running loop (bounds the polling rate).
const TICK: Duration = Duration::from_millis(50);
/// Pacing of the wait-for-first-click poll.
const CLICK_POLL: Duration = Duration::from_millis(100);

fn main() -> ExitCode {
    // Recoverable failures (skipped cells / iterations) go to stdout.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    let mut canvas = match Canvas::new(
        "Grid Eraser",
        CANVAS_WIDTH as usize,
        CANVAS_HEIGHT as usize,
    ) {
        Ok(canvas) => canvas,
        Err(e) => {
            println!("Error initializing canvas: {e}");
            return ExitCode::from(1);
        }
    };

    // Anything that escapes the loop is reported once; either way the
    // run ends with normal cleanup messaging and status 0.
    if let Err(e) = run(&mut canvas) {
        println!("An error occurred: {e}");
    }
    println!("Program finished");
    ExitCode::SUCCESS
}

fn run(canvas: &mut Canvas) -> Result<(), Error> {
    let created = create_grid(
        canvas.scene_mut(),
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
        CELL_SIZE,
        BLUE,
    );
    log::debug!("grid ready: {created} cells");
    canvas.update()?;

    println!("Click anywhere to start. Press '{QUIT_KEY}' to quit.");

    // WaitingForFirstClick: the click position seeds the eraser.
    let Some((click_x, click_y)) = canvas.wait_for_click(CLICK_POLL)? else {
        return Ok(()); // window closed before the first click
    };
    let eraser = canvas.scene_mut().create_rectangle(
        click_x,
        click_y,
        click_x + ERASER_SIZE,
        click_y + ERASER_SIZE,
        PINK,
    )?;

    // Running: move the eraser, erase what it touches, until 'q'.
    loop {
        // Present the frame first; this also refreshes mouse/key state.
        canvas.update()?;
        if !canvas.is_open() {
            break;
        }
        if canvas.last_key_press() == Some(QUIT_KEY) {
            println!("Quitting...");
            break;
        }

        let (mouse_x, mouse_y) = canvas.mouse_pos();
        if let Err(e) = erase_objects(canvas.scene_mut(), eraser, mouse_x, mouse_y, WHITE) {
            // skip this iteration only, keep the loop alive
            warn!("error in erase step: {e}");
        }

        thread::sleep(TICK);
    }
    Ok(())
}
