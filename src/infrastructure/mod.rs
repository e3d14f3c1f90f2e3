pub mod csv;
pub mod memory;
