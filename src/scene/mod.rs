//! Serializable scene descriptions and their conversion into widget trees.

pub(crate) mod color;
pub(crate) mod model;
