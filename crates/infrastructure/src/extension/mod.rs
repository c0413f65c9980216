mod http_resolver;
mod registry;

pub use http_resolver::HttpExtensionResolver;
pub use registry::contract_address;
