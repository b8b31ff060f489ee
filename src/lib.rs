pub mod demo;
pub mod sorting;

pub use sorting::{bubble_sort, bubble_sorted};
