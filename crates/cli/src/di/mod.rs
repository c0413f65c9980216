pub mod root;

pub use root::RootServices;
