use crate::contfrac::{Convergent, convergents};
use crate::number_theory::is_perfect_square;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Результат атаки Винера
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WienerAttackResult {
    pub d: BigUint,
    pub phi_n: BigUint,
    pub p: BigUint,
    pub q: BigUint,
}

/// Атака Винера на открытый ключ RSA с малым секретным показателем.
///
/// Перебирает подходящие дроби k/d разложения e/n: для настоящей пары
/// выполняется e·d ≡ 1 (mod φ(n)) и k = (e·d − 1)/φ(n), поэтому кандидат
/// проверяется восстановлением φ(n) и разложением n на два множителя.
#[derive(Debug, Default)]
pub struct WienerAttack {
    max_convergents: Option<usize>,
}

impl WienerAttack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Атака с ограничением на число проверяемых подходящих дробей
    pub fn with_max_convergents(limit: usize) -> Self {
        Self {
            max_convergents: Some(limit),
        }
    }

    /// Выполняет атаку по открытому ключу (n, e)
    pub fn attack(&self, n: &BigUint, e: &BigUint) -> Option<WienerAttackResult> {
        if e.is_zero() || n.is_zero() || e >= n {
            return None;
        }

        let one = BigUint::one();
        let two = BigUint::from(2u8);

        for (i, Convergent { k, d }) in convergents(e, n).enumerate() {
            if self.max_convergents.is_some_and(|limit| i >= limit) {
                return None;
            }

            // 1) k = 0 не восстанавливает phi
            if k.is_zero() {
                continue;
            }

            // 2) k обязано делить e·d - 1, иначе кандидат ложный
            let ed_minus1 = e * &d - &one;
            if !(&ed_minus1 % &k).is_zero() {
                continue;
            }
            let phi = &ed_minus1 / &k;

            // 3) s = n - phi + 1 — кандидат в сумму p + q
            if &phi > n {
                continue;
            }
            let s = n - &phi + &one;

            // 4) дискриминант s² - 4n должен быть полным квадратом
            let s2 = &s * &s;
            let four_n = BigUint::from(4u8) * n;
            if s2 < four_n {
                continue;
            }
            let Some(root) = is_perfect_square(&(s2 - four_n)) else {
                continue;
            };

            // 5) корни (s ± root)/2 должны быть целыми
            let s_plus = &s + &root;
            if s_plus.is_odd() {
                continue;
            }

            let p = &s_plus / &two;
            let q = (&s - &root) / &two;
            return Some(WienerAttackResult { d, phi_n: phi, p, q });
        }

        None
    }
}
