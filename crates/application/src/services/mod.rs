mod native_zone;
mod negative_proof;
mod readiness;
mod record_codec;
mod record_type_map;
mod referral_scanner;
mod response_assembler;

pub use native_zone::NativeZoneResolver;
pub use negative_proof::NegativeProofSynthesizer;
pub use readiness::ReadinessGate;
pub use record_codec::RecordCodec;
pub use record_type_map::RecordTypeMapper;
pub use referral_scanner::ReferralScanner;
pub use response_assembler::ResponseAssembler;
