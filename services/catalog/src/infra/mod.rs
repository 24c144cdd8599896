pub mod builtin;
pub mod file;
pub mod kv;
pub mod memory;
pub mod store;
