//! In-memory drive forest backend.

mod fs;
pub mod seed;


pub use fs::VfsMem;
