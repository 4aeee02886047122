use crate::number_theory::mod_pow;
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::thread_rng;

/// Интерфейс для вероятностного теста простоты.
/// Использует шаблонный метод: фиксированный public API, переопределяется одна итерация.
pub trait PrimalityTest {
    /// Основной метод: возвращает true, если n — вероятно простое с заданной вероятностью
    fn is_probably_prime(&self, n: &BigUint, confidence: f64) -> bool {
        let iterations = confidence_to_iterations(confidence);
        for _ in 0..iterations {
            if !self.run_iteration(n) {
                return false;
            }
        }
        true
    }

    /// Одна итерация теста
    fn run_iteration(&self, n: &BigUint) -> bool;
}

fn confidence_to_iterations(confidence: f64) -> u32 {
    // вероятность ошибки каждой итерации не выше 1/2,
    // тогда confidence = 1 - (1/2)^k  =>  k = log2(1 / (1 - confidence))
    ((1.0 / (1.0 - confidence)).log2().ceil()) as u32
}

/// Структура, реализующая тест Миллера–Рабина
pub struct MillerRabinTest;

impl PrimalityTest for MillerRabinTest {
    fn run_iteration(&self, n: &BigUint) -> bool {
        let one = BigUint::one();
        let two = BigUint::from(2u8);
        let three = BigUint::from(3u8);

        if *n == two || *n == three {
            return true;
        }
        if *n < two || n.is_even() {
            return false;
        }

        let upper = n - &one;

        // n - 1 = d·2^s, d нечётное
        let mut d = upper.clone();
        let mut s = 0u32;
        while d.is_even() {
            d >>= 1;
            s += 1;
        }

        let mut rng = thread_rng();
        let a = rng.gen_biguint_range(&two, &upper);
        let mut x = mod_pow(&a, &d, n);

        if x == one || x == upper {
            return true;
        }

        for _ in 1..s {
            x = mod_pow(&x, &two, n);
            if x == upper {
                return true;
            }
            if x == one {
                return false;
            }
        }

        false
    }
}

/// Структура, реализующая тест Ферма
pub struct FermatTest;

impl PrimalityTest for FermatTest {
    fn run_iteration(&self, n: &BigUint) -> bool {
        let one = BigUint::one();
        let two = BigUint::from(2u8);
        let three = BigUint::from(3u8);

        if *n == two || *n == three {
            return true;
        }
        if *n < two || n.is_even() {
            return false;
        }

        let mut rng = thread_rng();
        let a = rng.gen_biguint_range(&two, &(n - &one));

        mod_pow(&a, &(n - &one), n) == one
    }
}
