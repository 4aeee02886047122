//! Цепные дроби: разложение отношения двух целых и подходящие дроби.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::mem;

/// Неполные частные разложения a/b в цепную дробь.
///
/// Итератор ленивый: очередной член вычисляется одним шагом алгоритма Евклида.
/// Для b = 0 последовательность пуста.
pub struct PartialQuotients {
    a: BigUint,
    b: BigUint,
}

impl PartialQuotients {
    pub fn new(a: &BigUint, b: &BigUint) -> Self {
        Self {
            a: a.clone(),
            b: b.clone(),
        }
    }
}

impl Iterator for PartialQuotients {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        if self.b.is_zero() {
            return None;
        }

        let q = &self.a / &self.b;
        let r = &self.a % &self.b;
        self.a = mem::replace(&mut self.b, r);
        Some(q)
    }
}

/// Подходящая дробь k/d.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Convergent {
    pub k: BigUint,
    pub d: BigUint,
}

/// Подходящие дроби по потоку неполных частных.
///
/// Рекуррентность: k_i = a_i·k_{i-1} + k_{i-2}, d_i = a_i·d_{i-1} + d_{i-2};
/// хранится только последняя пара, i-я дробь выдаётся по i-му члену потока.
pub struct Convergents<I> {
    terms: I,
    prev_k: BigUint,
    k: BigUint,
    prev_d: BigUint,
    d: BigUint,
}

impl<I> Convergents<I> {
    pub fn new(terms: I) -> Self {
        Self {
            terms,
            prev_k: BigUint::zero(),
            k: BigUint::one(),
            prev_d: BigUint::one(),
            d: BigUint::zero(),
        }
    }
}

impl<I: Iterator<Item = BigUint>> Iterator for Convergents<I> {
    type Item = Convergent;

    fn next(&mut self) -> Option<Convergent> {
        let a = self.terms.next()?;

        let next_k = &a * &self.k + &self.prev_k;
        let next_d = &a * &self.d + &self.prev_d;
        self.prev_k = mem::replace(&mut self.k, next_k);
        self.prev_d = mem::replace(&mut self.d, next_d);

        Some(Convergent {
            k: self.k.clone(),
            d: self.d.clone(),
        })
    }
}

/// Подходящие дроби разложения a/b.
pub fn convergents(a: &BigUint, b: &BigUint) -> Convergents<PartialQuotients> {
    Convergents::new(PartialQuotients::new(a, b))
}

/// Свёртка цепной дроби обратно в дробь (числитель, знаменатель).
pub fn contfrac_to_rational(terms: &[BigUint]) -> (BigUint, BigUint) {
    let Some((last, rest)) = terms.split_last() else {
        return (BigUint::zero(), BigUint::one());
    };

    let mut num = last.clone();
    let mut den = BigUint::one();
    for a in rest.iter().rev() {
        // num/den -> a + den/num
        let next_num = a * &num + &den;
        den = mem::replace(&mut num, next_num);
    }
    (num, den)
}
