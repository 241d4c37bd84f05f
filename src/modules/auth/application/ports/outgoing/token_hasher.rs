use sha2::{Digest, Sha256};

/// Raw tokens never reach the revocation store; only their digest does.
pub fn hash_token(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
