use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Range, Sub, SubAssign,
};

use crate::error::{Error, Result};
use crate::math;
use crate::point2::Point2;

/// 3次元の格子点 (兼ベクトル)。
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Point3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point3 {
    pub const LEN: usize = 3;

    pub const ZERO: Self = Self::new(0, 0, 0);
    pub const ONE: Self = Self::new(1, 1, 1);

    pub const BACK: Self = Self::new(0, 0, -1);
    pub const FORWARD: Self = Self::new(0, 0, 1);
    pub const DOWN: Self = Self::new(0, -1, 0);
    pub const UP: Self = Self::new(0, 1, 0);
    pub const LEFT: Self = Self::new(-1, 0, 0);
    pub const RIGHT: Self = Self::new(1, 0, 0);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn get(self, index: usize) -> Result<i32> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(Error::IndexOutOfRange {
                index,
                len: Self::LEN,
            }),
        }
    }

    pub fn set(&mut self, index: usize, value: i32) -> Result<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => {
                return Err(Error::IndexOutOfRange {
                    index,
                    len: Self::LEN,
                })
            }
        }
        Ok(())
    }

    pub fn abs(self) -> Self {
        Self::new(math::abs(self.x), math::abs(self.y), math::abs(self.z))
    }

    pub fn unit(self) -> Self {
        Self::new(
            math::signum(self.x),
            math::signum(self.y),
            math::signum(self.z),
        )
    }

    pub fn max(self) -> i32 {
        math::max(math::max(self.x, self.y), self.z)
    }

    pub fn sqr_magnitude(self) -> f32 {
        let x = self.x as f32;
        let y = self.y as f32;
        let z = self.z as f32;
        x * x + y * y + z * z
    }

    pub fn magnitude(self) -> f32 {
        self.sqr_magnitude().sqrt()
    }

    pub fn dot(self, rhs: Self) -> i32 {
        self.x
            .wrapping_mul(rhs.x)
            .wrapping_add(self.y.wrapping_mul(rhs.y))
            .wrapping_add(self.z.wrapping_mul(rhs.z))
    }

    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y.wrapping_mul(rhs.z).wrapping_sub(self.z.wrapping_mul(rhs.y)),
            self.z.wrapping_mul(rhs.x).wrapping_sub(self.x.wrapping_mul(rhs.z)),
            self.x.wrapping_mul(rhs.y).wrapping_sub(self.y.wrapping_mul(rhs.x)),
        )
    }

    pub fn distance(self, other: Self) -> f32 {
        (self - other).magnitude()
    }

    pub fn in_bounds(self, bounds: Range<Self>) -> bool {
        (bounds.start.x..bounds.end.x).contains(&self.x)
            && (bounds.start.y..bounds.end.y).contains(&self.y)
            && (bounds.start.z..bounds.end.z).contains(&self.z)
    }

    pub fn in_size(self, size: Self) -> bool {
        self.in_bounds(Self::ZERO..size)
    }
}

impl From<Point2> for Point3 {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y, 0)
    }
}

impl From<Point3> for Point2 {
    fn from(p: Point3) -> Self {
        Self::new(p.x, p.y)
    }
}

impl Index<usize> for Point3 {
    type Output = i32;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Invalid Point3 index: {}", index),
        }
    }
}

impl IndexMut<usize> for Point3 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Invalid Point3 index: {}", index),
        }
    }
}

impl Add for Point3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x.wrapping_add(rhs.x),
            self.y.wrapping_add(rhs.y),
            self.z.wrapping_add(rhs.z),
        )
    }
}

impl Sub for Point3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.x.wrapping_sub(rhs.x),
            self.y.wrapping_sub(rhs.y),
            self.z.wrapping_sub(rhs.z),
        )
    }
}

impl Neg for Point3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(
            self.x.wrapping_neg(),
            self.y.wrapping_neg(),
            self.z.wrapping_neg(),
        )
    }
}

impl Mul<i32> for Point3 {
    type Output = Self;

    fn mul(self, d: i32) -> Self {
        Self::new(
            self.x.wrapping_mul(d),
            self.y.wrapping_mul(d),
            self.z.wrapping_mul(d),
        )
    }
}

impl Mul<Point3> for i32 {
    type Output = Point3;

    fn mul(self, p: Point3) -> Point3 {
        p * self
    }
}

impl Div<i32> for Point3 {
    type Output = Self;

    fn div(self, d: i32) -> Self {
        Self::new(self.x / d, self.y / d, self.z / d)
    }
}

impl AddAssign for Point3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Point3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<i32> for Point3 {
    fn mul_assign(&mut self, d: i32) {
        *self = *self * d;
    }
}

impl DivAssign<i32> for Point3 {
    fn div_assign(&mut self, d: i32) {
        *self = *self / d;
    }
}
