//! Random secret generation.

use std::io;

use crate::domain::AppError;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Bytes at or above this bound are discarded so every symbol is equally likely.
const UNBIASED_BOUND: u8 = 248;

/// Generate an alphanumeric secret from the OS random source.
pub fn generate_secret(length: usize) -> Result<String, AppError> {
    let mut secret = String::with_capacity(length);
    let mut buf = [0u8; 64];

    while secret.len() < length {
        getrandom::fill(&mut buf).map_err(|e| {
            AppError::Io(io::Error::other(format!("OS random source unavailable: {}", e)))
        })?;

        for byte in buf.iter().copied().filter(|b| *b < UNBIASED_BOUND) {
            secret.push(char::from(ALPHABET[usize::from(byte) % ALPHABET.len()]));
            if secret.len() == length {
                break;
            }
        }
    }

    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_requested_length_and_charset() {
        let secret = generate_secret(40).unwrap();
        assert_eq!(secret.len(), 40);
        assert!(secret.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn successive_secrets_differ() {
        assert_ne!(generate_secret(32).unwrap(), generate_secret(32).unwrap());
    }

    #[test]
    fn zero_length_is_empty() {
        assert_eq!(generate_secret(0).unwrap(), "");
    }
}
