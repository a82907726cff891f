//! Headphones Widget Package
//!
//! Recommends headphones from a fixed catalog, filtered by price bracket,
//! activity and style. Exposes one tool (`find_headphones`) and one
//! resource (the renderable widget surface).

pub mod config;
pub mod data;
pub mod models;
pub mod register;

pub use register::HeadphonesWidget;
