//! Атака Винера на RSA: восстановление малого секретного показателя d
//! по открытому ключу (n, e) через подходящие дроби разложения e/n.

pub mod attacks;
pub mod contfrac;
pub mod keygen;
pub mod keys;
pub mod number_theory;
pub mod primality;

pub use attacks::{WienerAttack, WienerAttackResult};
pub use keygen::{PrimalityType, VulnerableKeyGenerator, VulnerableKeyPair};
pub use keys::{KeyError, RsaPrivateKey, RsaPublicKey};
