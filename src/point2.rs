use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Range, Sub, SubAssign,
};

use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::math;

/// 2次元の格子点 (兼ベクトル)。
///
/// 加減乗算はオーバーフロー時にラップアラウンドする。除算は 0 で panic。
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Point2 {
    pub x: i32,
    pub y: i32,
}

impl Point2 {
    pub const LEN: usize = 2;

    pub const ZERO: Self = Self::new(0, 0);
    pub const ONE: Self = Self::new(1, 1);

    pub const NORTH: Self = Self::new(0, 1);
    pub const NORTH_EAST: Self = Self::new(1, 1);
    pub const EAST: Self = Self::new(1, 0);
    pub const SOUTH_EAST: Self = Self::new(1, -1);
    pub const SOUTH: Self = Self::new(0, -1);
    pub const SOUTH_WEST: Self = Self::new(-1, -1);
    pub const WEST: Self = Self::new(-1, 0);
    pub const NORTH_WEST: Self = Self::new(-1, 1);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn get(self, index: usize) -> Result<i32> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
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
        Self::new(math::abs(self.x), math::abs(self.y))
    }

    pub fn unit(self) -> Self {
        Self::new(math::signum(self.x), math::signum(self.y))
    }

    pub fn max(self) -> i32 {
        math::max(self.x, self.y)
    }

    pub fn sqr_magnitude(self) -> f32 {
        let x = self.x as f32;
        let y = self.y as f32;
        x * x + y * y
    }

    pub fn magnitude(self) -> f32 {
        self.sqr_magnitude().sqrt()
    }

    pub fn dot(self, rhs: Self) -> i32 {
        self.x
            .wrapping_mul(rhs.x)
            .wrapping_add(self.y.wrapping_mul(rhs.y))
    }

    pub fn distance(self, other: Self) -> f32 {
        (self - other).magnitude()
    }

    /// 各軸について `bounds.start <= p < bounds.end` か。
    pub fn in_bounds(self, bounds: Range<Self>) -> bool {
        (bounds.start.x..bounds.end.x).contains(&self.x)
            && (bounds.start.y..bounds.end.y).contains(&self.y)
    }

    pub fn in_size(self, size: Self) -> bool {
        self.in_bounds(Self::ZERO..size)
    }

    /// 北から時計回り。
    pub fn neighbors(self) -> impl Iterator<Item = (Direction, Self)> {
        Direction::ALL
            .iter()
            .map(move |&dir| (dir, self + Self::from(dir)))
    }
}

/// 方向の単位変位。`Direction::Invalid` は原点になる。
impl From<Direction> for Point2 {
    fn from(dir: Direction) -> Self {
        dir.delta()
    }
}

impl Index<usize> for Point2 {
    type Output = i32;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Invalid Point2 index: {}", index),
        }
    }
}

impl IndexMut<usize> for Point2 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Invalid Point2 index: {}", index),
        }
    }
}

impl Add for Point2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.wrapping_add(rhs.x), self.y.wrapping_add(rhs.y))
    }
}

impl Sub for Point2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.wrapping_sub(rhs.x), self.y.wrapping_sub(rhs.y))
    }
}

impl Neg for Point2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(self.x.wrapping_neg(), self.y.wrapping_neg())
    }
}

impl Mul<i32> for Point2 {
    type Output = Self;

    fn mul(self, d: i32) -> Self {
        Self::new(self.x.wrapping_mul(d), self.y.wrapping_mul(d))
    }
}

impl Mul<Point2> for i32 {
    type Output = Point2;

    fn mul(self, p: Point2) -> Point2 {
        p * self
    }
}

/// 成分ごとの除算 (0 方向への切り捨て)。
impl Div<i32> for Point2 {
    type Output = Self;

    fn div(self, d: i32) -> Self {
        Self::new(self.x / d, self.y / d)
    }
}

impl AddAssign for Point2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Point2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<i32> for Point2 {
    fn mul_assign(&mut self, d: i32) {
        *self = *self * d;
    }
}

impl DivAssign<i32> for Point2 {
    fn div_assign(&mut self, d: i32) {
        *self = *self / d;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_index() {
        let mut p = Point2::new(3, -4);
        assert_eq!(p[0], 3);
        assert_eq!(p[1], -4);

        p[1] = 8;
        assert_eq!(p, Point2::new(3, 8));

        assert_eq!(p.get(0).unwrap(), 3);
        assert!(matches!(
            p.get(2),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        ));

        p.set(0, -1).unwrap();
        assert_eq!(p.x, -1);
        assert!(p.set(5, 0).is_err());
    }

    #[test]
    #[should_panic(expected = "Invalid Point2 index")]
    fn test_index_out_of_range() {
        let p = Point2::new(1, 2);
        let _ = p[2];
    }

    #[test]
    fn test_arith() {
        let a = Point2::new(2, -3);
        let b = Point2::new(5, 7);

        assert_eq!(a + b, Point2::new(7, 4));
        assert_eq!(a - b, Point2::new(-3, -10));
        assert_eq!(-a, Point2::new(-2, 3));
        assert_eq!(a * 3, Point2::new(6, -9));
        assert_eq!(3 * a, a * 3);

        // 0 方向への切り捨て
        assert_eq!(Point2::new(7, -7) / 2, Point2::new(3, -3));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
        c *= 2;
        c /= 2;
        assert_eq!(c, b);
    }

    #[test]
    fn test_arith_wraps() {
        assert_eq!(
            Point2::new(i32::MAX, 0) + Point2::new(1, 0),
            Point2::new(i32::MIN, 0)
        );
        assert_eq!(
            Point2::new(0, i32::MIN) - Point2::new(0, 1),
            Point2::new(0, i32::MAX)
        );
        assert_eq!(-Point2::new(i32::MIN, 1), Point2::new(i32::MIN, -1));
        assert_eq!(Point2::new(i32::MAX, 2) * 2, Point2::new(-2, 4));
        assert_eq!(
            Point2::new(70000, 0).dot(Point2::new(70000, 0)),
            70000_i32.wrapping_mul(70000)
        );
    }

    #[test]
    #[should_panic]
    fn test_div_by_zero() {
        let zero = std::hint::black_box(0);
        let _ = Point2::new(4, -4) / zero;
    }

    #[test]
    fn test_unit_abs_max() {
        assert_eq!(Point2::new(-5, 9).unit(), Point2::new(-1, 1));
        assert_eq!(Point2::ZERO.unit(), Point2::ZERO);
        assert_eq!(Point2::new(-5, 9).abs(), Point2::new(5, 9));
        assert_eq!(Point2::new(-5, -9).max(), -5);
        assert_eq!(Point2::new(4, 2).max(), 4);
    }

    #[test]
    fn test_metric() {
        let p = Point2::new(3, 4);
        assert_eq!(p.sqr_magnitude(), 25.0);
        assert_eq!(p.magnitude(), 5.0);
        assert_eq!(Point2::new(1, 1).distance(Point2::new(4, 5)), 5.0);
        assert_eq!(p.dot(Point2::new(-2, 1)), -2);
    }

    #[test]
    fn test_in_bounds() {
        let p = Point2::new(2, 3);
        assert!(p.in_bounds(Point2::new(2, 3)..Point2::new(3, 4)));
        assert!(!p.in_bounds(Point2::new(0, 0)..Point2::new(2, 10)));
        assert!(p.in_size(Point2::new(3, 4)));
        assert!(!p.in_size(Point2::new(3, 3)));
        assert!(!Point2::new(-1, 0).in_size(Point2::new(3, 3)));
    }

    #[test]
    fn test_from_direction() {
        assert_eq!(Point2::from(Direction::North), Point2::NORTH);
        assert_eq!(Point2::from(Direction::SouthWest), Point2::new(-1, -1));
        assert_eq!(Point2::from(Direction::Invalid), Point2::ZERO);
    }

    #[test]
    fn test_neighbors() {
        let center = Point2::new(10, -4);
        let neighbors: Vec<_> = center.neighbors().collect();

        assert_eq!(neighbors.len(), 8);
        assert_eq!(neighbors[0], (Direction::North, Point2::new(10, -3)));
        assert_eq!(neighbors[3], (Direction::SouthEast, Point2::new(11, -5)));
        for (dir, p) in neighbors {
            assert_eq!(Direction::of_point(p - center), dir);
        }
    }

    #[test]
    fn test_hash() {
        let set: HashSet<_> = (-10..10)
            .flat_map(|x| (-10..10).map(move |y| Point2::new(x, y)))
            .collect();
        assert_eq!(set.len(), 400);
        assert!(set.contains(&Point2::new(-3, 7)));
        assert!(!set.contains(&Point2::new(10, 0)));
    }
}
