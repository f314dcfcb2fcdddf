use std::f32::consts::TAU;

use pixclip::prelude::*;
use pixclip::render::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

const OUTPUT_PATH: &str = "clipped_lines.png";
const RAY_COUNT: u32 = 72;

/// Color ramp across the starburst, blended between two endpoints.
fn ray_color(i: u32) -> u32 {
    let t = i as f32 / RAY_COUNT as f32;
    let (r, g, b) = colors::lerp_color(
        colors::unpack_color(colors::CYAN),
        colors::unpack_color(colors::MAGENTA),
        t,
    );
    colors::pack_color(r, g, b, 1.0)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut renderer = Renderer::new(DEFAULT_WIDTH, DEFAULT_HEIGHT);
    renderer.clear(colors::BACKGROUND);
    renderer.draw_grid(50, colors::GRID);

    let window = ClipWindow::new(200, 150, 599, 449);
    renderer.draw_rect_outline(
        window.min_x() - 1,
        window.min_y() - 1,
        window.width() as i32 + 2,
        window.height() as i32 + 2,
        colors::YELLOW,
    );

    // Rays start inside the window and end far outside the buffer; only the
    // clipped part is drawn.
    renderer.set_clip_window(window);
    let center = Point::new(400, 300);
    let mut drawn = 0;
    for i in 0..RAY_COUNT {
        let angle = i as f32 / RAY_COUNT as f32 * TAU;
        let end = Point::new(
            center.x + (angle.cos() * 2000.0) as i32,
            center.y + (angle.sin() * 2000.0) as i32,
        );
        if renderer.draw_line(center, end, ray_color(i)) {
            drawn += 1;
        }
    }

    // These lie entirely outside the window and are rejected.
    renderer.draw_line(Point::new(0, 0), Point::new(150, 100), colors::RED);
    renderer.draw_line(Point::new(650, 500), Point::new(790, 590), colors::RED);
    renderer.reset_clip_window();

    log::info!("drew {drawn} of {RAY_COUNT} rays through {window:?}");
    renderer.save_png(OUTPUT_PATH)?;

    Ok(())
}
