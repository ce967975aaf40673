pub mod data;
pub mod lokasi;
pub mod user;
