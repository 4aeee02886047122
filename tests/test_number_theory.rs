use wiener_attack::number_theory::{
    extended_gcd, gcd, is_perfect_square, isqrt, mod_inverse, mod_pow,
};

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::{One, Zero};
use quickcheck::quickcheck;
use rand::thread_rng;

#[test]
fn test_gcd_basic() {
    let a = BigUint::from(54u32);
    let b = BigUint::from(24u32);
    assert_eq!(gcd(&a, &b), BigUint::from(6u32));
    assert_eq!(gcd(&b, &a), BigUint::from(6u32));
    assert_eq!(gcd(&a, &BigUint::zero()), a);
}

#[test]
fn test_extended_gcd_bezout() {
    let a = BigInt::from(240);
    let b = BigInt::from(46);
    let (g, x, y) = extended_gcd(&a, &b);

    assert_eq!(g, BigInt::from(2));
    assert_eq!(&a * &x + &b * &y, g);
}

#[test]
fn test_mod_pow_small() {
    let base = BigUint::from(4u32);
    let exp = BigUint::from(13u32);
    let modulus = BigUint::from(497u32);
    assert_eq!(mod_pow(&base, &exp, &modulus), BigUint::from(445u32));
}

#[test]
fn test_mod_inverse_known() {
    let a = BigUint::from(3u32);
    let m = BigUint::from(11u32);
    assert_eq!(mod_inverse(&a, &m), Some(BigUint::from(4u32)));
}

#[test]
fn test_mod_inverse_missing() {
    let a = BigUint::from(4u32);
    let m = BigUint::from(8u32);
    assert_eq!(mod_inverse(&a, &m), None, "при gcd(a, m) != 1 обратного нет");
}

#[test]
fn test_isqrt_small_values() {
    let cases = [
        (0u64, 0u64),
        (1, 1),
        (2, 1),
        (3, 1),
        (4, 2),
        (8, 2),
        (9, 3),
        (90580, 300),
    ];
    for (n, expected) in cases {
        assert_eq!(
            isqrt(&BigUint::from(n)),
            BigUint::from(expected),
            "isqrt({}) должен быть {}",
            n,
            expected
        );
    }
}

#[test]
fn test_is_perfect_square_large() {
    // корень на 1024 бита даёт квадрат на 2048 бит
    let mut rng = thread_rng();
    let mut r = rng.gen_biguint(1024);
    r.set_bit(1023, true);
    let square = &r * &r;

    assert_eq!(is_perfect_square(&square), Some(r));
    assert_eq!(is_perfect_square(&(&square + 1u32)), None);
    assert_eq!(is_perfect_square(&(&square - 1u32)), None);
}

quickcheck! {
    fn prop_isqrt_floor(x: u64) -> bool {
        let n = BigUint::from(x);
        let r = isqrt(&n);
        &r * &r <= n && (&r + 1u32) * (&r + 1u32) > n
    }

    fn prop_is_perfect_square_detects_squares(x: u64) -> bool {
        let r = BigUint::from(x);
        is_perfect_square(&(&r * &r)) == Some(r)
    }

    fn prop_mod_inverse_prime_modulus(a: u64) -> bool {
        let m = BigUint::from(1_000_000_007u64);
        let a = BigUint::from(a) % &m;
        if a.is_zero() {
            return true;
        }
        match mod_inverse(&a, &m) {
            Some(inv) => (a * inv) % m == BigUint::one(),
            None => false,
        }
    }
}
