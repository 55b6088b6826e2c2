//! 矩形の各セルを region_in_rect の結果で塗り分ける。
//! マウス下のセルとその8近傍も表示する。

use macroquad::prelude::*;

use lattice_point as lattice;

const W: usize = 24;
const H: usize = 16;
const CELL: f32 = 20.0;

fn region_color(dir: lattice::Direction) -> Color {
    match dir {
        lattice::Direction::North => SKYBLUE,
        lattice::Direction::East => ORANGE,
        lattice::Direction::South => LIME,
        lattice::Direction::West => PINK,
        _ => GRAY,
    }
}

// y 軸上向きのセル座標 -> 画面上の左上隅
fn cell_origin(p: lattice::Point2) -> (f32, f32) {
    let v = lattice::Vec2::from(p);
    (v.x * CELL, (H as f32 - 1.0 - v.y) * CELL)
}

fn window_conf() -> Conf {
    Conf {
        window_title: "region".to_owned(),
        window_width: (W as f32 * CELL) as i32,
        window_height: (H as f32 * CELL) as i32 + 40,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() -> eyre::Result<()> {
    let mut regions = [[lattice::Direction::Invalid; H]; W];
    let size = lattice::get_size(&regions);

    for x in 0..size.x {
        for y in 0..size.y {
            let p = lattice::Point2::new(x, y);
            lattice::set_value(&mut regions, p.region_in_rect(size), p)?;
        }
    }

    loop {
        clear_background(BLACK);

        for x in 0..size.x {
            for y in 0..size.y {
                let p = lattice::Point2::new(x, y);
                let (sx, sy) = cell_origin(p);
                let dir = *lattice::get_value(&regions, p)?;
                draw_rectangle(sx, sy, CELL - 1.0, CELL - 1.0, region_color(dir));
            }
        }

        let (mx, my) = mouse_position();
        let hover = lattice::Point2::floor(lattice::Vec2::new(
            mx / CELL,
            H as f32 - my / CELL,
        ));
        if hover.in_size(size) {
            for (_, p) in hover.neighbors().filter(|&(_, p)| p.in_size(size)) {
                let (sx, sy) = cell_origin(p);
                draw_rectangle_lines(sx, sy, CELL - 1.0, CELL - 1.0, 2.0, WHITE);
            }
            let dir = *lattice::get_value(&regions, hover)?;
            draw_text(
                &format!("{} {}", hover, dir),
                4.0,
                H as f32 * CELL + 28.0,
                24.0,
                WHITE,
            );
        }

        next_frame().await
    }
}
