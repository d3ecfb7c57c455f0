//! Core types and the segmentation/projection engine

pub mod fields;
pub mod model;
pub mod render;
pub mod segment;
