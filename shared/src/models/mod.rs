//! Catalog Models

pub mod product;

pub use product::{Product, ProductCreate};
