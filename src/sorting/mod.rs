mod bubble;

pub use bubble::{bubble_sort, bubble_sorted};
