//! Grid-based raycasting shooter.
//!
//! ```bash
//! cargo run --release
//! ```
//!
//! W/S or Up/Down move, A/D strafe, Q/E or Left/Right turn, Ctrl or
//! the left mouse button fires, R restarts the round, Escape quits.

use std::time::{Duration, Instant};

use clap::Parser;
use minifb::{Key, KeyRepeat, MouseButton, Window, WindowOptions};

use gridfire::engine::{self, ViewParams};
use gridfire::renderer::{RendererExt, Software};
use gridfire::sim::{GameState, InputCmd};
use gridfire::world::GridMap;

#[derive(Parser, Debug)]
#[command(about = "Grid-based raycasting shooter")]
struct Args {
    /// Window width in pixels.
    #[arg(long, default_value_t = 800)]
    width: usize,

    /// Window height in pixels.
    #[arg(long, default_value_t = 600)]
    height: usize,

    /// Horizontal field of view in degrees.
    #[arg(long, default_value_t = 60.0)]
    fov: f32,

    /// Rays cast per frame, one wall strip each.
    #[arg(long, default_value_t = 120)]
    rays: usize,

    /// Frame rate cap.
    #[arg(long, default_value_t = 60)]
    fps: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let view = ViewParams {
        width: args.width,
        height: args.height,
        fov: args.fov.to_radians(),
        fan_size: args.rays,
        wall_scale: engine::WALL_SCALE,
    };
    let mut state = GameState::new(GridMap::arena());
    let mut renderer = Software::default();

    let mut win = Window::new("Gridfire", args.width, args.height, WindowOptions::default())?;
    win.set_target_fps(args.fps);

    // ────────────────── render-time accounting ──────────────────────────
    let mut acc_time = Duration::ZERO; // cumulated render time
    let mut acc_frames = 0usize; // frames in the current window
    let mut last_print = Instant::now(); // when we printed last

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let t0 = Instant::now();

        let cmd = read_input(&win);
        state.advance(&cmd);

        let calls = engine::compose(&state, &view);
        renderer.draw_frame(view.width, view.height, &calls, |fb, w, h| {
            acc_time += t0.elapsed();
            acc_frames += 1;
            win.update_with_buffer(fb, w, h).unwrap()
        });

        if last_print.elapsed() >= Duration::from_secs(3) && acc_frames > 0 {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            println!("avg render: {:.2} ms  ({:.1} FPS)", avg_ms, 1000.0 / avg_ms);
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}

/// Map the held keys onto one frame's command.
fn read_input(win: &Window) -> InputCmd {
    let mut cmd = InputCmd::default();

    if win.is_key_down(Key::W) || win.is_key_down(Key::Up) {
        cmd.forward += 1.0;
    }
    if win.is_key_down(Key::S) || win.is_key_down(Key::Down) {
        cmd.forward -= 1.0;
    }
    if win.is_key_down(Key::A) {
        cmd.strafe -= 1.0;
    }
    if win.is_key_down(Key::D) {
        cmd.strafe += 1.0;
    }
    if win.is_key_down(Key::Q) || win.is_key_down(Key::Left) {
        cmd.turn -= 1.0;
    }
    if win.is_key_down(Key::E) || win.is_key_down(Key::Right) {
        cmd.turn += 1.0;
    }

    cmd.fire = win.is_key_down(Key::LeftCtrl)
        || win.is_key_down(Key::RightCtrl)
        || win.get_mouse_down(MouseButton::Left);
    cmd.reset = win.is_key_pressed(Key::R, KeyRepeat::No); // edge-trigger

    cmd
}
