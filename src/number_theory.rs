use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use std::mem;

pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = mem::replace(&mut b, r);
    }
    a
}

/// Возвращает (g, x, y) такие что: ax + by = g = gcd(a, b)
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;

        let next_r = &old_r - &q * &r;
        old_r = mem::replace(&mut r, next_r);

        let next_s = &old_s - &q * &s;
        old_s = mem::replace(&mut s, next_s);

        let next_t = &old_t - &q * &t;
        old_t = mem::replace(&mut t, next_t);
    }

    (old_r, old_s, old_t)
}

/// Возведение в степень по модулю: base^exp mod modulus
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_zero() {
        return BigUint::zero();
    }
    let mut base = base % modulus;
    let mut exp = exponent.clone();
    let mut result = BigUint::one();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }
    result
}

/// Обратный элемент a⁻¹ mod m, если gcd(a, m) = 1
pub fn mod_inverse(a: &BigUint, modulus: &BigUint) -> Option<BigUint> {
    if modulus.is_zero() {
        return None;
    }

    let m = BigInt::from(modulus.clone());
    let (g, x, _) = extended_gcd(&BigInt::from(a.clone()), &m);
    if !g.is_one() {
        return None;
    }

    // приводим коэффициент Безу к диапазону [0, m)
    (((x % &m) + &m) % &m).to_biguint()
}

/// Целая часть квадратного корня (метод Ньютона)
pub fn isqrt(n: &BigUint) -> BigUint {
    if n.is_zero() {
        return BigUint::zero();
    }

    // стартовое приближение 2^((bits+1)/2) >= sqrt(n)
    let bits = n.bits();
    let mut x = BigUint::one() << ((bits + 1) / 2);

    loop {
        let y = (&x + n / &x) >> 1;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// Проверка на полный квадрат: Some(корень), если n — полный квадрат
pub fn is_perfect_square(n: &BigUint) -> Option<BigUint> {
    // квадрат по модулю 16 оканчивается только на 0, 1, 4 или 9
    let low = (n % 16u8).to_u8().unwrap_or(u8::MAX);
    if !matches!(low, 0 | 1 | 4 | 9) {
        return None;
    }

    let root = isqrt(n);
    if &(&root * &root) == n { Some(root) } else { None }
}
