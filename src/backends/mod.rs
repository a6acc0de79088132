pub mod memory;

pub use memory::VfsMem;
