//! ホスト側 (描画エンジンなど) の浮動小数点ベクトルとの変換。
//!
//! 整数点 → ベクトルは無損失なので `From` で提供する。
//! ベクトル → 整数点は損失があるので、切り捨て・床・丸めを名前で区別する。

use crate::math;
use crate::point2::Point2;
use crate::point3::Point3;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

// 丸めは偶数丸め (2.5 -> 2, -2.5 -> -2, 3.5 -> 4)。
fn round_to_int(f: f32) -> i32 {
    f.round_ties_even() as i32
}

impl Point2 {
    /// 0 方向への切り捨て。
    pub fn truncate(v: Vec2) -> Self {
        Self::new(v.x as i32, v.y as i32)
    }

    /// 負の無限大方向への切り捨て。座標をセルに割り当てるときに使う。
    pub fn floor(v: Vec2) -> Self {
        Self::new(math::floor_to_int(v.x), math::floor_to_int(v.y))
    }

    /// 最も近い整数への丸め (ちょうど中間なら偶数側)。
    pub fn round(v: Vec2) -> Self {
        Self::new(round_to_int(v.x), round_to_int(v.y))
    }

    /// z を捨てて 0 方向へ切り捨てる。
    pub fn truncate_xy(v: Vec3) -> Self {
        Self::truncate(v.xy())
    }
}

impl Point3 {
    pub fn truncate(v: Vec3) -> Self {
        Self::new(v.x as i32, v.y as i32, v.z as i32)
    }

    pub fn floor(v: Vec3) -> Self {
        Self::new(
            math::floor_to_int(v.x),
            math::floor_to_int(v.y),
            math::floor_to_int(v.z),
        )
    }

    pub fn round(v: Vec3) -> Self {
        Self::new(round_to_int(v.x), round_to_int(v.y), round_to_int(v.z))
    }
}

impl From<Point2> for Vec2 {
    fn from(p: Point2) -> Self {
        Self::new(p.x as f32, p.y as f32)
    }
}

// z は捨てる
impl From<Point3> for Vec2 {
    fn from(p: Point3) -> Self {
        Self::new(p.x as f32, p.y as f32)
    }
}

impl From<Point2> for Vec3 {
    fn from(p: Point2) -> Self {
        Self::new(p.x as f32, p.y as f32, 0.0)
    }
}

impl From<Point3> for Vec3 {
    fn from(p: Point3) -> Self {
        Self::new(p.x as f32, p.y as f32, p.z as f32)
    }
}
