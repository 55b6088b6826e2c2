mod direction;
mod error;
mod grid;
pub mod math;
mod point2;
mod point3;
mod region;
mod text;
mod vector;

pub use crate::direction::*;
pub use crate::error::*;
pub use crate::grid::*;
pub use crate::point2::*;
pub use crate::point3::*;
pub use crate::region::*;
pub use crate::vector::*;
