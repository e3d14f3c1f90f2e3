pub mod cluster_profile;
pub mod store_position;
