//! First-person software walker over the built-in map.
//!
//! Controls  W/↑ forward · S/↓ back · A/← turn left · D/→ turn right
//!           B bilinear filter · R reset to spawn · Esc quit
//!
//! Run:  cargo run --release -- --atlas textures.jpg

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

use gridcast_rs::{
    assets,
    renderer::{Renderer, Software, ViewOptions},
    sim::{self, InputCmd, Player},
    world::{Camera, Palette, builtin_map},
};

const FOV: f32 = 60.0 * std::f32::consts::PI / 180.0;

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Opts {
    /// Texture atlas image; walls fall back to flat palette colors when
    /// it is missing or unreadable
    #[arg(long, value_name = "FILE", default_value = "textures.jpg")]
    atlas: PathBuf,

    /// Initial window width in pixels
    #[arg(long, default_value_t = 960)]
    width: usize,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 600)]
    height: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();

    let grid = builtin_map();
    let store = assets::load_store(&opts.atlas, Palette::default());
    let mut view = ViewOptions::default();
    let mut player = Player::spawn(glam::vec2(3.5, 3.5), 90_f32.to_radians());

    let mut renderer = Software::default();
    let mut win = Window::new(
        "gridcast",
        opts.width,
        opts.height,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )?;
    win.set_target_fps(60);

    tracing::info!(textured = store.has_textures(), "walker up");

    /* ─────────────── rolling ~1 s FPS window ─────────────────────── */
    let mut frames = 0usize;
    let mut window_start = Instant::now();
    let mut fps = 0.0f64;

    while win.is_open() && !win.is_key_down(Key::Escape) {
        /* --------------- build one InputCmd per frame ---------------- */
        let mut cmd = InputCmd::default();
        if win.is_key_down(Key::Up) || win.is_key_down(Key::W) {
            cmd.forward += 1.0;
        }
        if win.is_key_down(Key::Down) || win.is_key_down(Key::S) {
            cmd.forward -= 1.0;
        }
        if win.is_key_down(Key::Left) || win.is_key_down(Key::A) {
            cmd.turn -= 1.0;
        }
        if win.is_key_down(Key::Right) || win.is_key_down(Key::D) {
            cmd.turn += 1.0;
        }
        cmd.toggle_filter = win.is_key_pressed(Key::B, KeyRepeat::No); // edge-trigger
        cmd.reset = win.is_key_pressed(Key::R, KeyRepeat::No);

        sim::step(&cmd, &mut player, grid, &mut view);

        /* --------------- render at the window's current size --------- */
        let (w, h) = win.get_size();
        let camera = Camera::new(player.pos, player.yaw, FOV);
        renderer.begin_frame(w, h);
        renderer.draw_scene(grid, &store, &camera, &view);
        renderer.end_frame(|fb, fw, fh| win.update_with_buffer(fb, fw, fh).unwrap());

        /* --------------- diagnostic overlay -------------------------- */
        frames += 1;
        if window_start.elapsed() >= Duration::from_secs(1) {
            fps = frames as f64 / window_start.elapsed().as_secs_f64();
            frames = 0;
            window_start = Instant::now();
        }
        win.set_title(&format!(
            "gridcast – pos ({:.2}, {:.2})  cell ({}, {})  angle {:>5.1}°  {}  fps {:.0}",
            player.pos.x,
            player.pos.y,
            player.pos.x.floor() as i32,
            player.pos.y.floor() as i32,
            player.yaw.to_degrees(),
            if view.bilinear { "bilinear" } else { "nearest" },
            fps
        ));
    }
    Ok(())
}
