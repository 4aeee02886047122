pub mod wiener;

pub use wiener::{WienerAttack, WienerAttackResult};
