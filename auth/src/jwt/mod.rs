pub mod claims;
pub mod errors;
pub mod handler;

pub use claims::SessionClaims;
pub use errors::JwtError;
pub use handler::JwtHandler;
pub use handler::DEFAULT_TOKEN_TTL_HOURS;
