//! Разбор и кодирование ключей RSA в PEM (PKCS#1 и SPKI).
//!
//! Ключи, уязвимые к атаке Винера, имеют e порядка n, поэтому никакие
//! ограничения на величину показателя здесь не накладываются.

use crate::number_theory::mod_inverse;
use der::asn1::{AnyRef, BitStringRef, UintRef};
use der::oid::ObjectIdentifier;
use der::pem::{LineEnding, PemLabel};
use der::{Decode, Document, Encode, EncodePem};
use num_bigint::BigUint;
use num_traits::One;
use spki::{AlgorithmIdentifier, SubjectPublicKeyInfoRef};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// OID rsaEncryption (RFC 8017)
pub const RSA_ENCRYPTION: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// Ошибки разбора и кодирования ключей
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("DER/PEM error: {0}")]
    Der(#[from] der::Error),
    #[error("unsupported PEM label: {0}")]
    UnsupportedLabel(String),
    #[error("unsupported key algorithm: {0}")]
    UnsupportedAlgorithm(ObjectIdentifier),
    #[error("inconsistent key components")]
    InconsistentKey,
}

/// Открытый ключ RSA: модуль n и открытый показатель e
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub n: BigUint,
    pub e: BigUint,
}

impl RsaPublicKey {
    /// Чтение ключа из PEM: PKCS#1 ("RSA PUBLIC KEY") или SPKI ("PUBLIC KEY")
    pub fn from_pem(pem: &str) -> Result<Self, KeyError> {
        let (label, doc) = Document::from_pem(pem)?;
        if label == pkcs1::RsaPublicKey::PEM_LABEL {
            Self::from_pkcs1_der(doc.as_bytes())
        } else if label == SubjectPublicKeyInfoRef::PEM_LABEL {
            Self::from_spki_der(doc.as_bytes())
        } else {
            Err(KeyError::UnsupportedLabel(label.to_string()))
        }
    }

    /// Чтение ключа из PEM-файла
    pub fn from_pem_file(path: &Path) -> Result<Self, KeyError> {
        let pem = fs::read_to_string(path)?;
        Self::from_pem(&pem)
    }

    fn from_pkcs1_der(bytes: &[u8]) -> Result<Self, KeyError> {
        let key = pkcs1::RsaPublicKey::from_der(bytes)?;
        Ok(Self {
            n: BigUint::from_bytes_be(key.modulus.as_bytes()),
            e: BigUint::from_bytes_be(key.public_exponent.as_bytes()),
        })
    }

    fn from_spki_der(bytes: &[u8]) -> Result<Self, KeyError> {
        let info = SubjectPublicKeyInfoRef::from_der(bytes)?;
        if info.algorithm.oid != RSA_ENCRYPTION {
            return Err(KeyError::UnsupportedAlgorithm(info.algorithm.oid));
        }

        // внутри BIT STRING лежит тот же PKCS#1 RSAPublicKey
        let inner = info
            .subject_public_key
            .as_bytes()
            .ok_or(KeyError::InconsistentKey)?;
        Self::from_pkcs1_der(inner)
    }

    /// Кодирование в PKCS#1 PEM
    pub fn to_pkcs1_pem(&self) -> Result<String, KeyError> {
        let n = self.n.to_bytes_be();
        let e = self.e.to_bytes_be();
        let key = pkcs1::RsaPublicKey {
            modulus: UintRef::new(&n)?,
            public_exponent: UintRef::new(&e)?,
        };
        Ok(key.to_pem(LineEnding::LF)?)
    }

    /// Кодирование в SPKI PEM (X.509 SubjectPublicKeyInfo)
    pub fn to_public_key_pem(&self) -> Result<String, KeyError> {
        let n = self.n.to_bytes_be();
        let e = self.e.to_bytes_be();
        let key = pkcs1::RsaPublicKey {
            modulus: UintRef::new(&n)?,
            public_exponent: UintRef::new(&e)?,
        };
        let key_der = key.to_der()?;

        let info = SubjectPublicKeyInfoRef {
            algorithm: AlgorithmIdentifier {
                oid: RSA_ENCRYPTION,
                parameters: Some(AnyRef::NULL),
            },
            subject_public_key: BitStringRef::from_bytes(&key_der)?,
        };
        Ok(info.to_pem(LineEnding::LF)?)
    }
}

/// Закрытый ключ RSA, восстановленный атакой
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub n: BigUint,
    pub e: BigUint,
    pub d: BigUint,
    pub p: BigUint,
    pub q: BigUint,
}

impl RsaPrivateKey {
    /// Кодирование в PKCS#1 PEM ("RSA PRIVATE KEY") вместе с CRT-компонентами
    pub fn to_pkcs1_pem(&self) -> Result<String, KeyError> {
        let one = BigUint::one();
        if self.p <= one || self.q <= one || &self.p * &self.q != self.n {
            return Err(KeyError::InconsistentKey);
        }

        let dp = &self.d % (&self.p - &one);
        let dq = &self.d % (&self.q - &one);
        let qinv = mod_inverse(&self.q, &self.p).ok_or(KeyError::InconsistentKey)?;

        let n = self.n.to_bytes_be();
        let e = self.e.to_bytes_be();
        let d = self.d.to_bytes_be();
        let p = self.p.to_bytes_be();
        let q = self.q.to_bytes_be();
        let dp = dp.to_bytes_be();
        let dq = dq.to_bytes_be();
        let qinv = qinv.to_bytes_be();

        let key = pkcs1::RsaPrivateKey {
            modulus: UintRef::new(&n)?,
            public_exponent: UintRef::new(&e)?,
            private_exponent: UintRef::new(&d)?,
            prime1: UintRef::new(&p)?,
            prime2: UintRef::new(&q)?,
            exponent1: UintRef::new(&dp)?,
            exponent2: UintRef::new(&dq)?,
            coefficient: UintRef::new(&qinv)?,
            other_prime_infos: None,
        };
        Ok(key.to_pem(LineEnding::LF)?)
    }
}
