// Command-line front-end
// Thin request layer over the cipher engine, one subcommand per operation

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use num_bigint::BigUint;

use crate::cipher::{caesar, vigenere, Direction};
use crate::defaults::{
    DEFAULT_CAESAR_SHIFT, DEFAULT_PRIME_P, DEFAULT_PRIME_Q, DEFAULT_VIGENERE_KEY,
};
use crate::numtheory::{is_prime, mod_pow};
use crate::rsa::{decrypt_message, encrypt_message, generate_keys};

/// Command-line arguments for the cipher engine.
#[derive(Parser, Debug)]
#[command(name = "cipher-lab", about = "Classical and textbook RSA cipher demos")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Mode of operation for the classical ciphers.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Encrypt,
    Decrypt,
}

impl From<Mode> for Direction {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Encrypt => Direction::Encrypt,
            Mode::Decrypt => Direction::Decrypt,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Caesar shift cipher
    Caesar {
        /// Text to process
        text: String,
        /// Shift amount; negative values shift backwards
        #[arg(short, long, default_value_t = DEFAULT_CAESAR_SHIFT)]
        shift: i64,
        #[arg(short, long, value_enum, default_value = "encrypt")]
        mode: Mode,
    },
    /// Vigenere polyalphabetic cipher
    Vigenere {
        /// Text to process
        text: String,
        /// Cipher key; non-letters are ignored
        #[arg(short, long, default_value = DEFAULT_VIGENERE_KEY)]
        key: String,
        #[arg(short, long, value_enum, default_value = "encrypt")]
        mode: Mode,
    },
    /// Generate an RSA key pair from two primes
    RsaKeys {
        #[arg(short, long, default_value_t = DEFAULT_PRIME_P)]
        p: u64,
        #[arg(short, long, default_value_t = DEFAULT_PRIME_Q)]
        q: u64,
    },
    /// RSA-encrypt a message with a public key
    RsaEncrypt {
        /// Message text, or a sequence of numbers to encrypt directly
        text: String,
        /// Public exponent e
        #[arg(short, long)]
        exponent: BigUint,
        /// Modulus n
        #[arg(short, long)]
        modulus: BigUint,
    },
    /// RSA-decrypt a space-separated payload with a private key
    RsaDecrypt {
        /// Space-separated decimal payload
        payload: String,
        /// Private exponent d
        #[arg(short, long)]
        exponent: BigUint,
        /// Modulus n
        #[arg(short, long)]
        modulus: BigUint,
    },
    /// Test a number for primality
    IsPrime { n: BigUint },
    /// Modular exponentiation: base^exp mod modulus
    ModPow {
        base: BigUint,
        exp: BigUint,
        modulus: BigUint,
    },
}

/// Parse the command line and run the requested operation.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Caesar { text, shift, mode } => {
            println!("{}", caesar(&text, shift, mode.into()));
        }
        Command::Vigenere { text, key, mode } => {
            println!("{}", vigenere(&text, &key, mode.into()));
        }
        Command::RsaKeys { p, q } => {
            let keys = generate_keys(&BigUint::from(p), &BigUint::from(q))?;
            println!("n   = {}", keys.n);
            println!("e   = {}", keys.e);
            println!("d   = {}", keys.d);
            println!("phi = {}", keys.phi);
        }
        Command::RsaEncrypt {
            text,
            exponent,
            modulus,
        } => {
            println!("{}", encrypt_message(&text, &exponent, &modulus)?);
        }
        Command::RsaDecrypt {
            payload,
            exponent,
            modulus,
        } => {
            println!("{}", decrypt_message(&payload, &exponent, &modulus)?);
        }
        Command::IsPrime { n } => {
            println!("{}", if is_prime(&n) { "prime" } else { "not prime" });
        }
        Command::ModPow { base, exp, modulus } => {
            println!("{}", mod_pow(&base, &exp, &modulus)?);
        }
    }

    Ok(())
}
