use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use wiener_attack::attacks::WienerAttack;
use wiener_attack::keygen::{PrimalityType, VulnerableKeyGenerator};
use wiener_attack::keys::{RsaPrivateKey, RsaPublicKey};

#[derive(Parser)]
#[command(version, about = "Recovers RSA private keys with a small private exponent (Wiener's attack)")]
struct Cli {
    /// Run the attack against freshly generated vulnerable keys
    #[arg(long)]
    run_tests: bool,

    /// Path to an RSA public key in PEM format (PKCS#1 or SPKI)
    public_key: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.run_tests {
        run_self_test();
        return Ok(());
    }

    let Some(path) = cli.public_key else {
        Cli::command().print_help()?;
        std::process::exit(1)
    };

    let public = RsaPublicKey::from_pem_file(&path)?;
    log::info!(
        "attacking public key: |n| = {} bits, |e| = {} bits",
        public.n.bits(),
        public.e.bits()
    );

    match WienerAttack::new().attack(&public.n, &public.e) {
        Some(result) => {
            log::info!("recovered private exponent of {} bits", result.d.bits());
            println!("Successfully recovered the private key!");

            let private = RsaPrivateKey {
                n: public.n,
                e: public.e,
                d: result.d,
                p: result.p,
                q: result.q,
            };
            print!("{}", private.to_pkcs1_pem()?);
        }
        None => println!("Could not recover the private key."),
    }

    Ok(())
}

fn run_self_test() {
    println!("Testing Wiener Attack");
    let generator = VulnerableKeyGenerator::new(PrimalityType::MillerRabin, 0.99, 1024);
    let attack = WienerAttack::new();

    for i in 1..=5 {
        let keypair = generator.generate_keypair();
        println!("test {}: (e, n) = ({}, {})", i, keypair.e, keypair.n);

        match attack.attack(&keypair.n, &keypair.e) {
            Some(result) if result.d == keypair.d => {
                println!("test {}: hacked d = {}", i, result.d);
                println!("Attack worked!");
            }
            Some(result) => {
                println!("test {}: wrong d = {} (expected {})", i, result.d, keypair.d);
                println!("Attack failed!");
            }
            None => println!("Attack failed!"),
        }
        println!("-------------------------");
    }
}
