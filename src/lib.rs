// cipher-lab - Educational cipher engine
// Caesar and Vigenere classical ciphers plus textbook RSA

pub mod cipher;
pub mod cli;
pub mod defaults;
pub mod error;
pub mod numtheory;
pub mod rsa;

pub use cipher::{
    caesar, caesar_decrypt, caesar_encrypt, vigenere, vigenere_decrypt, vigenere_encrypt,
    CipherPolicy, Direction,
};
pub use error::{CipherError, CipherResult};
pub use rsa::{decrypt_message, encrypt_message, generate_keys, EncryptedPayload, RsaKeyPair};
