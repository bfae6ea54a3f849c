use sha2::Digest;
use sha2::Sha256;

/// Deterministic password hashing.
///
/// Digests the plaintext with SHA-256 and prefixes the application-wide salt
/// to the digest output before hex encoding. The same input always yields the
/// same credential, so stored credentials can be compared by equality.
#[derive(Clone)]
pub struct PasswordHasher {
    salt: Vec<u8>,
}

impl PasswordHasher {
    /// Create a new password hasher.
    ///
    /// # Arguments
    /// * `salt` - Application-wide secret salt (loaded from configuration)
    ///
    /// # Returns
    /// PasswordHasher bound to the given salt
    pub fn new(salt: &[u8]) -> Self {
        Self {
            salt: salt.to_vec(),
        }
    }

    /// Hash a plaintext password into its stored credential form.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Lowercase hex string of `salt || sha256(password)`
    pub fn hash(&self, password: &str) -> String {
        let digest = Sha256::digest(password.as_bytes());

        let mut credential = Vec::with_capacity(self.salt.len() + digest.len());
        credential.extend_from_slice(&self.salt);
        credential.extend_from_slice(&digest);

        hex::encode(credential)
    }

    /// Check a plaintext password against a stored credential.
    pub fn verify(&self, password: &str, credential: &str) -> bool {
        self.hash(password) == credential
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("salt", &"<redacted>")
            .finish()
    }
}
