//! 矩形の2本の対角線による4分割。
//!
//! 原点を左下隅とする大きさ `size` の矩形を、主対角線 (原点 → `size`) と
//! 反対角線 (`(size.x, 0)` → `(0, size.y)`) で北・東・南・西の三角形に分ける。
//! 対角線上の点の帰属は下の比較 (`< 0`, `> 0`) で決まる。

use crate::direction::Direction;
use crate::point2::Point2;
use crate::vector::Vec2;

/// 2次元外積 (3次元外積の z 成分)。オーバーフローしないよう i64 で計算する。
pub fn cross_z(a: Point2, b: Point2) -> i64 {
    i64::from(a.x) * i64::from(b.y) - i64::from(a.y) * i64::from(b.x)
}

fn cross_z_f32(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

fn classify(nw: bool, ne: bool) -> Direction {
    match (nw, ne) {
        (true, true) => Direction::North,
        (false, true) => Direction::East,
        (false, false) => Direction::South,
        (true, false) => Direction::West,
    }
}

impl Point2 {
    /// 矩形内のどの三角形に属するか。結果は North, East, South, West のいずれか。
    pub fn region_in_rect(self, size: Point2) -> Direction {
        // 主対角線より左上
        let nw = cross_z(self, size) < 0;
        // 反対角線より右上 (右下隅から見る)
        let ne = cross_z(self - Point2::new(size.x, 0), Point2::new(-size.x, size.y)) > 0;

        classify(nw, ne)
    }
}

impl Vec2 {
    /// `Point2::region_in_rect` の浮動小数点版。
    pub fn region_in_rect(self, size: Vec2) -> Direction {
        let nw = cross_z_f32(self, size) < 0.0;
        let ne = cross_z_f32(Vec2::new(self.x - size.x, self.y), Vec2::new(-size.x, size.y)) > 0.0;

        classify(nw, ne)
    }
}
