//! Minimal top-down map viewer.
//!
//! ```bash
//! cargo run --bin gridcast_rs
//! ```
//!
//! Draws the built-in grid, the player disc and the full ray fan at map
//! scale – handy for eyeballing DDA hits. Arrow keys drive the same
//! simulation step the first-person walker uses.

use minifb::{Key, KeyRepeat, Window, WindowOptions};

use gridcast_rs::{
    renderer::{Frame, ViewOptions, cast_column, software::draw_minimap},
    sim::{self, InputCmd, Player},
    world::{Camera, Palette, TextureStore, builtin_map},
};

const WIDTH: usize = 640;
const HEIGHT: usize = 640;
const MAP_PX: usize = 560;
const FAN_RAYS: usize = 320;

fn main() -> anyhow::Result<()> {
    let grid = builtin_map();
    let store = TextureStore::palette_only(Palette::default());
    let mut view = ViewOptions::default();
    let mut player = Player::spawn(glam::vec2(3.5, 3.5), 90_f32.to_radians());

    let mut map_frame = Frame::default();
    map_frame.resize(MAP_PX, MAP_PX);
    let mut buffer = vec![0xFF_10_10_10u32; WIDTH * HEIGHT];

    let mut win = Window::new(
        "gridcast – map preview",
        WIDTH,
        HEIGHT,
        WindowOptions::default(),
    )?;
    win.set_target_fps(60);

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let mut cmd = InputCmd::default();
        if win.is_key_down(Key::Up) {
            cmd.forward += 1.0;
        }
        if win.is_key_down(Key::Down) {
            cmd.forward -= 1.0;
        }
        if win.is_key_down(Key::Left) {
            cmd.turn -= 1.0;
        }
        if win.is_key_down(Key::Right) {
            cmd.turn += 1.0;
        }
        cmd.reset = win.is_key_pressed(Key::R, KeyRepeat::No);
        sim::step(&cmd, &mut player, grid, &mut view);

        // one hit per fan column, exactly like the walker's render pass
        let camera = Camera::new(player.pos, player.yaw, 60_f32.to_radians());
        let hits: Vec<_> = (0..FAN_RAYS)
            .filter_map(|x| cast_column(grid, &camera, x, FAN_RAYS))
            .collect();

        map_frame.clear(0xFF_181818);
        draw_minimap(&mut map_frame, grid, &store, player.pos, &hits, MAP_PX);

        // centre the map frame in the window buffer; its rows land at
        // the window's wider stride
        let offset = (HEIGHT - MAP_PX) / 2 * WIDTH + (WIDTH - MAP_PX) / 2;
        map_frame.copy_rows_into(&mut buffer[offset..], WIDTH);

        win.update_with_buffer(&buffer, WIDTH, HEIGHT)?;
    }
    Ok(())
}
