use ferrous_root_domain::DomainError;
use hickory_proto::dnssec::crypto::Ed25519SigningKey;
use rustls::pki_types::PrivatePkcs8KeyDer;
use std::fs;
use std::path::Path;
use tracing::info;

/// Reads the zone key from `path`, or generates one and persists it there.
/// Without a path the key lives only for this process.
pub fn load_or_generate_key(
    path: Option<&Path>,
) -> Result<PrivatePkcs8KeyDer<'static>, DomainError> {
    if let Some(path) = path.filter(|p| p.exists()) {
        let der = fs::read(path).map_err(|e| {
            DomainError::IoError(format!("Failed to read zone key {}: {}", path.display(), e))
        })?;
        info!(path = %path.display(), "Loaded zone signing key");
        return Ok(PrivatePkcs8KeyDer::from(der));
    }

    let pkcs8 = Ed25519SigningKey::generate_pkcs8()
        .map_err(|e| DomainError::Signing(format!("Failed to generate Ed25519 key: {}", e)))?;

    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| {
                    DomainError::IoError(format!(
                        "Failed to create key directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
            fs::write(path, pkcs8.secret_pkcs8_der()).map_err(|e| {
                DomainError::IoError(format!(
                    "Failed to write zone key {}: {}",
                    path.display(),
                    e
                ))
            })?;
            info!(path = %path.display(), "Generated and saved zone signing key");
        }
        None => info!("Generated ephemeral zone signing key"),
    }

    Ok(pkcs8)
}
