pub mod grid;
pub mod opportunity;
pub mod point;
