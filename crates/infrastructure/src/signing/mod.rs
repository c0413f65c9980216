mod ed25519_signer;
mod key_store;

pub use ed25519_signer::{soa_serial, Ed25519ZoneSigner};
pub use key_store::load_or_generate_key;
