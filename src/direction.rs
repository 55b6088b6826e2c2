use crate::math;
use crate::point2::Point2;

/// 8方位。北から時計回りに並ぶ (回転計算はこの順序に依存する)。
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,

    // 単位変位や名前からの逆引きに失敗したときの値。
    Invalid,
}

// (方向, 単位変位, 表示名)
const COMPASS: [(Direction, Point2, &str); Direction::LENGTH] = [
    (Direction::North, Point2::NORTH, "North"),
    (Direction::NorthEast, Point2::NORTH_EAST, "NorthEast"),
    (Direction::East, Point2::EAST, "East"),
    (Direction::SouthEast, Point2::SOUTH_EAST, "SouthEast"),
    (Direction::South, Point2::SOUTH, "South"),
    (Direction::SouthWest, Point2::SOUTH_WEST, "SouthWest"),
    (Direction::West, Point2::WEST, "West"),
    (Direction::NorthWest, Point2::NORTH_WEST, "NorthWest"),
];

impl Direction {
    pub const LENGTH: usize = 8;

    pub const ALL: [Direction; Direction::LENGTH] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// 生の添字から方位を得る。範囲外の値は 8 を法として巻き戻す。
    pub fn from_index(idx: i32) -> Self {
        Self::ALL[math::floor_mod(idx, Self::LENGTH as i32) as usize]
    }

    pub fn index(self) -> Option<usize> {
        match self {
            Self::Invalid => None,
            dir => Some(dir as usize),
        }
    }

    pub fn is_valid(self) -> bool {
        self.index().is_some()
    }

    /// `Invalid` は `Invalid` のまま。
    pub fn rotate(self, delta: i32) -> Self {
        match self.index() {
            Some(idx) => {
                let delta = math::floor_mod(delta, Self::LENGTH as i32) as usize;
                Self::ALL[(idx + delta) % Self::LENGTH]
            }
            None => Self::Invalid,
        }
    }

    pub fn opposite(self) -> Self {
        self.rotate(4)
    }

    pub fn normalize(self) -> Self {
        self.rotate(0)
    }

    /// 単位変位。`Invalid` は原点。
    pub fn delta(self) -> Point2 {
        self.index().map_or(Point2::ZERO, |idx| COMPASS[idx].1)
    }

    pub fn name(self) -> Option<&'static str> {
        self.index().map(|idx| COMPASS[idx].2)
    }

    /// `p.unit()` と単位変位が一致する方位。軸・対角線に乗っていない点
    /// (原点を含む) では `Invalid`。
    pub fn of_point(p: Point2) -> Self {
        let aligned = p.x == 0 || p.y == 0 || p.x.unsigned_abs() == p.y.unsigned_abs();
        if !aligned {
            return Self::Invalid;
        }

        let unit = p.unit();
        COMPASS
            .iter()
            .find(|&&(_, delta, _)| delta == unit)
            .map_or(Self::Invalid, |&(dir, _, _)| dir)
    }

    pub fn of_name(name: &str) -> Self {
        COMPASS
            .iter()
            .find(|&&(_, _, s)| s == name)
            .map_or(Self::Invalid, |&(dir, _, _)| dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate() {
        assert_eq!(Direction::North.rotate(4), Direction::South);
        assert_eq!(Direction::West.rotate(-2), Direction::South);
        assert_eq!(Direction::NorthWest.rotate(1), Direction::North);
        assert_eq!(Direction::East.rotate(8 * 3 + 1), Direction::SouthEast);
        assert_eq!(Direction::East.rotate(-8 * 5 - 1), Direction::NorthEast);
        assert_eq!(Direction::South.rotate(i32::MIN), Direction::South);
        assert_eq!(Direction::Invalid.rotate(3), Direction::Invalid);
    }

    #[test]
    fn test_opposite_normalize() {
        assert_eq!(Direction::NorthEast.opposite(), Direction::SouthWest);
        assert_eq!(Direction::West.opposite(), Direction::East);
        for &dir in Direction::ALL.iter() {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.normalize(), dir);
            assert_eq!(Point2::from(dir.opposite()), -Point2::from(dir));
        }
        assert_eq!(Direction::Invalid.normalize(), Direction::Invalid);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Direction::from_index(0), Direction::North);
        assert_eq!(Direction::from_index(7), Direction::NorthWest);
        assert_eq!(Direction::from_index(8), Direction::North);
        assert_eq!(Direction::from_index(-1), Direction::NorthWest);
        assert_eq!(Direction::from_index(-10), Direction::West);
    }

    #[test]
    fn test_of_point() {
        assert_eq!(Direction::of_point(Point2::new(1, 1)), Direction::NorthEast);
        assert_eq!(Direction::of_point(Point2::new(0, 5)), Direction::North);
        assert_eq!(Direction::of_point(Point2::new(-3, -3)), Direction::SouthWest);
        assert_eq!(Direction::of_point(Point2::new(-7, 0)), Direction::West);
        assert_eq!(Direction::of_point(Point2::new(2, 1)), Direction::Invalid);
        assert_eq!(Direction::of_point(Point2::ZERO), Direction::Invalid);
        assert_eq!(
            Direction::of_point(Point2::new(i32::MIN, i32::MIN)),
            Direction::SouthWest
        );
    }

    #[test]
    fn test_name() {
        assert_eq!(Direction::SouthEast.name(), Some("SouthEast"));
        assert_eq!(Direction::Invalid.name(), None);

        assert_eq!(Direction::of_name("NorthWest"), Direction::NorthWest);
        assert_eq!(Direction::of_name("northwest"), Direction::Invalid);
        assert_eq!(Direction::of_name(""), Direction::Invalid);

        for &dir in Direction::ALL.iter() {
            assert_eq!(Direction::of_name(dir.name().unwrap()), dir);
        }
    }

    #[test]
    fn test_delta() {
        assert_eq!(Direction::North.delta(), Point2::new(0, 1));
        assert_eq!(Direction::NorthEast.delta(), Point2::new(1, 1));
        assert_eq!(Direction::West.delta(), Point2::new(-1, 0));
        assert_eq!(Direction::Invalid.delta(), Point2::ZERO);
    }
}
