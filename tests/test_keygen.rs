use wiener_attack::keygen::{PrimalityType, VulnerableKeyGenerator};
use wiener_attack::number_theory::gcd;
use wiener_attack::primality::{MillerRabinTest, PrimalityTest};

use num_bigint::BigUint;
use num_traits::One;
use quickcheck::quickcheck;

#[test]
fn test_keygen_basic() {
    let generator = VulnerableKeyGenerator::new(PrimalityType::MillerRabin, 0.99, 64);
    let keypair = generator.generate_keypair();

    assert!(keypair.n.bits() >= 64);
    assert!(keypair.e.bits() > 1);
    assert!(keypair.d.bits() > 1);
}

#[test]
fn test_keygen_modinv_check() {
    let generator = VulnerableKeyGenerator::new(PrimalityType::MillerRabin, 0.99, 64);
    let keypair = generator.generate_keypair();

    let phi_n = (keypair.get_p() - 1u32) * (keypair.get_q() - 1u32);
    let ed_mod_phi = (&keypair.e * &keypair.d) % &phi_n;
    assert_eq!(ed_mod_phi, BigUint::one());
}

#[test]
fn test_keygen_primes_are_close() {
    let generator = VulnerableKeyGenerator::new(PrimalityType::MillerRabin, 0.99, 64);
    let keypair = generator.generate_keypair();
    let p = keypair.get_p();
    let q = keypair.get_q();

    assert!(p < q, "должно быть p < q");
    assert!(*q < (p << 1), "должно быть q < 2p");
}

#[test]
fn test_keygen_d_below_wiener_bound() {
    let generator = VulnerableKeyGenerator::new(PrimalityType::MillerRabin, 0.99, 64);
    let keypair = generator.generate_keypair();

    assert!(keypair.d > BigUint::one());
    assert!(
        BigUint::from(81u32) * keypair.d.pow(4) < keypair.n,
        "должно выполняться 81·d^4 < n"
    );

    let phi_n = (keypair.get_p() - 1u32) * (keypair.get_q() - 1u32);
    assert_eq!(gcd(&keypair.d, &phi_n), BigUint::one());
}

#[test]
fn test_keygen_prime_checks() {
    let generator = VulnerableKeyGenerator::new(PrimalityType::Fermat, 0.99, 64);
    let keypair = generator.generate_keypair();
    let primality = MillerRabinTest;

    assert!(keypair.get_p() != keypair.get_q(), "p и q не должны совпадать");
    assert!(primality.is_probably_prime(keypair.get_p(), 0.99));
    assert!(primality.is_probably_prime(keypair.get_q(), 0.99));
}

#[test]
fn test_keygen_encrypt_decrypt_cycle() {
    let generator = VulnerableKeyGenerator::new(PrimalityType::MillerRabin, 0.99, 64);
    let keypair = generator.generate_keypair();

    let m = BigUint::from(42u32);
    let c = m.modpow(&keypair.e, &keypair.n);
    assert_eq!(c.modpow(&keypair.d, &keypair.n), m);
}

quickcheck! {
    fn prop_keygen_encrypt_decrypt_cycle(val: u8) -> bool {
        let generator = VulnerableKeyGenerator::new(PrimalityType::MillerRabin, 0.99, 64);
        let keypair = generator.generate_keypair();

        let m = BigUint::from(val);
        let c = m.modpow(&keypair.e, &keypair.n);
        c.modpow(&keypair.d, &keypair.n) == m
    }
}
