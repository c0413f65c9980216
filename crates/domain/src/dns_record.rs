mod record_type;

pub use record_type::{denial_type_bitmap, RecordType, EMPTY_NON_TERMINAL_TYPES, SUPPORTED_TYPES};
