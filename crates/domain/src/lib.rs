//! Ferrous Root Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod dns_request;
pub mod errors;
pub mod extension;

pub use config::{CliOverrides, Config};
pub use dns_query::DnsQuery;
pub use dns_record::{denial_type_bitmap, RecordType, EMPTY_NON_TERMINAL_TYPES, SUPPORTED_TYPES};
pub use dns_request::DnsRequest;
pub use errors::DomainError;
pub use extension::{ExtensionKind, ExtensionLabels, Referral, TldRoute};
