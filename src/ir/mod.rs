//! 翻訳データの中間表現

pub mod catalog;
pub mod reverse_index;

pub use catalog::{
    Catalog,
    MissingKeys,
};
pub use reverse_index::{
    Collision,
    ReverseIndex,
};
