pub mod backend;
pub mod dns;

pub use backend::InitializeBackendUseCase;
pub use dns::HandleRootQueryUseCase;
