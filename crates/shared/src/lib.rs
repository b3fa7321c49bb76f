//! 1. Only put small concepts here. Nothing major
//! 2. This crate *must* have no dependencies on other local crates in the project

mod circle;
mod radius;

pub use circle::Circle;
pub use radius::Radius;
