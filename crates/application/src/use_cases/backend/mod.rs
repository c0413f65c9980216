pub mod initialize_backend;

pub use initialize_backend::InitializeBackendUseCase;
