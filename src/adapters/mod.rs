//! Adapters - concrete implementations of the ports

pub mod fs_store;

pub use fs_store::FsUploadAdapter;
