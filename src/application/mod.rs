pub mod competitors;
pub mod lookup;
pub mod stats;
pub mod white_space;
