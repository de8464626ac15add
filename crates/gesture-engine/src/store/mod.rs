pub mod codec;
pub mod file;
pub mod registry;
pub mod symbol;
