//! Terminal Pac-Man path playback.
//!
//! Run: cargo run --bin pacwalk -- bfs --fps 10

use std::io::{self, Write};
use std::thread;

use clap::Parser;
use crossterm::{
    cursor, execute, queue,
    style::Print,
    terminal::{self, ClearType},
};
use log::{debug, info, warn};

use mazewalk_core::GridMap;
use mazewalk_demos::{Animation, DemoConfig, HiddenCursor, render_frame, standard_maze};
use mazewalk_paths::{is_valid_path, path_steps};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = DemoConfig::parse();
    let (strategy, start, goal) = (config.strategy(), config.start(), config.goal());

    let grid = standard_maze()?;
    let (rows, cols) = grid.dimensions();
    debug!(
        "maze {rows}x{cols}, {} passable cells",
        grid.passable_count()
    );

    let path = strategy.search(&grid, start, goal)?;
    if path.is_empty() {
        warn!("{strategy}: no path from {start} to {goal}");
    } else {
        info!(
            "{strategy}: {} steps from {start} to {goal}",
            path_steps(&path)
        );
        debug!("path valid: {}", is_valid_path(&grid, &path, start, goal));
    }

    if config.once() {
        println!("{}", render_frame(&grid, goal, path.last().copied()));
        println!("{strategy}: {} steps", path_steps(&path));
        return Ok(());
    }

    animate(&grid, &config, Animation::new(path))?;
    Ok(())
}

/// Draw one frame per tick until the animation finishes.
fn animate(grid: &GridMap, config: &DemoConfig, mut anim: Animation) -> io::Result<()> {
    let frame_time = config.frame_time();
    let mut out = HiddenCursor::new(io::stdout())?;
    execute!(out, terminal::Clear(ClearType::All))?;

    loop {
        anim.tick();
        queue!(
            out,
            cursor::MoveTo(0, 0),
            Print(render_frame(grid, config.goal(), anim.current())),
            Print("\n")
        )?;
        out.flush()?;
        if anim.is_finished() {
            break;
        }
        thread::sleep(frame_time);
    }

    execute!(
        out,
        Print(format!("{}: {} frames\n", config.strategy(), anim.len()))
    )?;
    Ok(())
}
