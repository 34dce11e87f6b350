pub mod crypto;
pub use crypto::cipher_config::*;
pub use crypto::cipher_context::*;
pub use crypto::cipher_traits::*;
pub use crypto::cipher_types::*;
pub use crypto::error::*;
