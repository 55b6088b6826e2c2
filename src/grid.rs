//! 格子点による2次元/3次元コンテナのアクセス。
//!
//! 矩形 (固定長配列の配列) と配列の配列 (`Vec` の入れ子) の両方を扱う。
//! 添字は `grid[x][y]` (3次元なら `grid[x][y][z]`) の順。
//! 報告されるサイズの内側の点は必ず読み書きできる。

use std::convert::TryFrom;

use crate::error::{Error, Result};
use crate::point2::Point2;
use crate::point3::Point3;

pub trait Grid2 {
    type Item;

    fn size(&self) -> Point2;
    fn cell(&self, x: usize, y: usize) -> Option<&Self::Item>;
    fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut Self::Item>;
}

pub trait Grid3 {
    type Item;

    fn size(&self) -> Point3;
    fn cell(&self, x: usize, y: usize, z: usize) -> Option<&Self::Item>;
    fn cell_mut(&mut self, x: usize, y: usize, z: usize) -> Option<&mut Self::Item>;
}

fn extent(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}

fn coord(c: i32) -> Option<usize> {
    usize::try_from(c).ok()
}

pub fn get_size<G: Grid2 + ?Sized>(grid: &G) -> Point2 {
    grid.size()
}

pub fn get_value<G: Grid2 + ?Sized>(grid: &G, p: Point2) -> Result<&G::Item> {
    coord(p.x)
        .zip(coord(p.y))
        .and_then(|(x, y)| grid.cell(x, y))
        .ok_or_else(|| Error::OutOfGrid {
            point: p.to_string(),
        })
}

pub fn set_value<G: Grid2 + ?Sized>(grid: &mut G, value: G::Item, p: Point2) -> Result<()> {
    let cell = coord(p.x)
        .zip(coord(p.y))
        .and_then(|(x, y)| grid.cell_mut(x, y))
        .ok_or_else(|| Error::OutOfGrid {
            point: p.to_string(),
        })?;
    *cell = value;
    Ok(())
}

pub fn get_size3<G: Grid3 + ?Sized>(grid: &G) -> Point3 {
    grid.size()
}

pub fn get_value3<G: Grid3 + ?Sized>(grid: &G, p: Point3) -> Result<&G::Item> {
    coord(p.x)
        .zip(coord(p.y))
        .zip(coord(p.z))
        .and_then(|((x, y), z)| grid.cell(x, y, z))
        .ok_or_else(|| Error::OutOfGrid {
            point: p.to_string(),
        })
}

pub fn set_value3<G: Grid3 + ?Sized>(grid: &mut G, value: G::Item, p: Point3) -> Result<()> {
    let cell = coord(p.x)
        .zip(coord(p.y))
        .zip(coord(p.z))
        .and_then(|((x, y), z)| grid.cell_mut(x, y, z))
        .ok_or_else(|| Error::OutOfGrid {
            point: p.to_string(),
        })?;
    *cell = value;
    Ok(())
}

impl<T, const W: usize, const H: usize> Grid2 for [[T; H]; W] {
    type Item = T;

    fn size(&self) -> Point2 {
        Point2::new(extent(W), extent(H))
    }

    fn cell(&self, x: usize, y: usize) -> Option<&T> {
        self.get(x)?.get(y)
    }

    fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        self.get_mut(x)?.get_mut(y)
    }
}

// 行の長さが不揃いでも読めるよう、y 方向のサイズは最短の行に合わせる。
impl<T> Grid2 for [Vec<T>] {
    type Item = T;

    fn size(&self) -> Point2 {
        let h = self.iter().map(Vec::len).min().unwrap_or(0);
        Point2::new(extent(self.len()), extent(h))
    }

    fn cell(&self, x: usize, y: usize) -> Option<&T> {
        self.get(x)?.get(y)
    }

    fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        self.get_mut(x)?.get_mut(y)
    }
}

impl<T> Grid2 for Vec<Vec<T>> {
    type Item = T;

    fn size(&self) -> Point2 {
        Grid2::size(self.as_slice())
    }

    fn cell(&self, x: usize, y: usize) -> Option<&T> {
        Grid2::cell(self.as_slice(), x, y)
    }

    fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        Grid2::cell_mut(self.as_mut_slice(), x, y)
    }
}

impl<T, const W: usize, const H: usize, const D: usize> Grid3 for [[[T; D]; H]; W] {
    type Item = T;

    fn size(&self) -> Point3 {
        Point3::new(extent(W), extent(H), extent(D))
    }

    fn cell(&self, x: usize, y: usize, z: usize) -> Option<&T> {
        self.get(x)?.get(y)?.get(z)
    }

    fn cell_mut(&mut self, x: usize, y: usize, z: usize) -> Option<&mut T> {
        self.get_mut(x)?.get_mut(y)?.get_mut(z)
    }
}

impl<T> Grid3 for [Vec<Vec<T>>] {
    type Item = T;

    fn size(&self) -> Point3 {
        let h = self.iter().map(Vec::len).min().unwrap_or(0);
        let d = self
            .iter()
            .flat_map(|plane| plane.iter().map(Vec::len))
            .min()
            .unwrap_or(0);
        Point3::new(extent(self.len()), extent(h), extent(d))
    }

    fn cell(&self, x: usize, y: usize, z: usize) -> Option<&T> {
        self.get(x)?.get(y)?.get(z)
    }

    fn cell_mut(&mut self, x: usize, y: usize, z: usize) -> Option<&mut T> {
        self.get_mut(x)?.get_mut(y)?.get_mut(z)
    }
}

impl<T> Grid3 for Vec<Vec<Vec<T>>> {
    type Item = T;

    // [Vec<Vec<T>>] は Grid2 でもあるので明示する
    fn size(&self) -> Point3 {
        Grid3::size(self.as_slice())
    }

    fn cell(&self, x: usize, y: usize, z: usize) -> Option<&T> {
        Grid3::cell(self.as_slice(), x, y, z)
    }

    fn cell_mut(&mut self, x: usize, y: usize, z: usize) -> Option<&mut T> {
        Grid3::cell_mut(self.as_mut_slice(), x, y, z)
    }
}
