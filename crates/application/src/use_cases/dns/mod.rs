pub mod handle_root_query;

pub use handle_root_query::HandleRootQueryUseCase;
