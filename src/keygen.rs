use crate::number_theory::{gcd, mod_inverse};
use crate::primality::{FermatTest, MillerRabinTest, PrimalityTest};
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::thread_rng;

/// Выбор теста простоты
pub enum PrimalityType {
    Fermat,
    MillerRabin,
}

/// Пара ключей RSA с малым секретным показателем d
pub struct VulnerableKeyPair {
    pub n: BigUint,
    pub e: BigUint,
    pub d: BigUint,
    #[doc(hidden)]
    pub(crate) p: BigUint,
    #[doc(hidden)]
    pub(crate) q: BigUint,
}

impl VulnerableKeyPair {
    #[doc(hidden)]
    pub fn get_p(&self) -> &BigUint {
        &self.p
    }

    #[doc(hidden)]
    pub fn get_q(&self) -> &BigUint {
        &self.q
    }
}

/// Генератор ключей RSA, заведомо уязвимых к атаке Винера.
///
/// Простые p и q берутся близкими (p < q < 2p), показатель d выбирается
/// под границей 81·d⁴ < n, после чего e = d⁻¹ mod φ(n).
pub struct VulnerableKeyGenerator {
    test_type: PrimalityType,
    confidence: f64,
    bit_length: usize,
}

impl VulnerableKeyGenerator {
    /// Создание нового генератора
    pub fn new(test_type: PrimalityType, confidence: f64, bit_length: usize) -> Self {
        Self {
            test_type,
            confidence,
            bit_length,
        }
    }

    /// Генерация уязвимой пары ключей
    pub fn generate_keypair(&self) -> VulnerableKeyPair {
        let test = self.get_test();
        let one = BigUint::one();
        let half_bits = self.bit_length / 2;
        let quarter_bits = (self.bit_length / 4) as u64;

        let mut rng = thread_rng();

        loop {
            let p = loop {
                let mut candidate = rng.gen_biguint(half_bits as u64);
                candidate.set_bit((half_bits - 1) as u64, true);
                candidate.set_bit(0, true);
                if test.is_probably_prime(&candidate, self.confidence) {
                    break candidate;
                }
            };

            // q ∈ (p, 2p): отношение q/p < 2 обязательно для атаки Винера
            let q = loop {
                let mut candidate = rng.gen_biguint_range(&(&p + &one), &(&p << 1));
                candidate.set_bit(0, true);
                if test.is_probably_prime(&candidate, self.confidence) {
                    break candidate;
                }
            };

            let n = &p * &q;
            if n.bits() < self.bit_length as u64 {
                continue; // пробуем заново
            }

            let phi = (&p - &one) * (&q - &one);

            // случайный малый показатель: 1 < d, gcd(d, phi) = 1, 81·d⁴ < n
            let d = loop {
                let candidate = rng.gen_biguint(quarter_bits);
                if candidate <= one {
                    continue;
                }
                if gcd(&candidate, &phi) != one {
                    continue;
                }
                if BigUint::from(81u8) * candidate.pow(4) >= n {
                    continue;
                }
                break candidate;
            };

            let e = match mod_inverse(&d, &phi) {
                Some(e) => e,
                None => continue,
            };

            return VulnerableKeyPair { n, e, d, p, q };
        }
    }

    /// Получение экземпляра теста простоты по выбору пользователя
    fn get_test(&self) -> Box<dyn PrimalityTest> {
        match self.test_type {
            PrimalityType::Fermat => Box::new(FermatTest),
            PrimalityType::MillerRabin => Box::new(MillerRabinTest),
        }
    }
}
