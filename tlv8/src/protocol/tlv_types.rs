/*!
 Type codes used by HomeKit pairing messages.
*/

/// Method to use for pairing, see [`pairing::method`](crate::protocol::pairing::method)
pub const METHOD: u8 = 0x00;
/// Identifier for authentication
pub const IDENTIFIER: u8 = 0x01;
/// 16+ bytes of random salt
pub const SALT: u8 = 0x02;
/// Curve25519, SRP public key, or signed Ed25519 key
pub const PUBLIC_KEY: u8 = 0x03;
/// Ed25519 or SRP proof
pub const PROOF: u8 = 0x04;
/// Encrypted data with auth tag at end
pub const ENCRYPTED_DATA: u8 = 0x05;
/// State of the pairing process, see [`pairing::state`](crate::protocol::pairing::state)
pub const STATE: u8 = 0x06;
/// Error code, see [`pairing::error`](crate::protocol::pairing::error)
pub const ERROR: u8 = 0x07;
/// Seconds to delay until retrying a setup code
pub const RETRY_DELAY: u8 = 0x08;
/// X.509 certificate
pub const CERTIFICATE: u8 = 0x09;
/// Ed25519 signature
pub const SIGNATURE: u8 = 0x0A;
/// Bit value describing permissions of the controller being added
pub const PERMISSIONS: u8 = 0x0B;
/// Non-last fragment of data
pub const FRAGMENT_DATA: u8 = 0x0C;
/// Last fragment of data
pub const FRAGMENT_LAST: u8 = 0x0D;
/// Identifier to resume a session
pub const SESSION_ID: u8 = 0x0E;
/// Pairing type flags
pub const FLAGS: u8 = 0x13;
/// Zero-length entry that separates groups of entries, i.e. pairings in a list response
pub const SEPARATOR: u8 = 0xFF;

/// Every named type code, in ascending order
const NAMES: [(u8, &str); 17] = [
    (METHOD, "method"),
    (IDENTIFIER, "identifier"),
    (SALT, "salt"),
    (PUBLIC_KEY, "public_key"),
    (PROOF, "proof"),
    (ENCRYPTED_DATA, "encrypted_data"),
    (STATE, "state"),
    (ERROR, "error"),
    (RETRY_DELAY, "retry_delay"),
    (CERTIFICATE, "certificate"),
    (SIGNATURE, "signature"),
    (PERMISSIONS, "permissions"),
    (FRAGMENT_DATA, "fragment_data"),
    (FRAGMENT_LAST, "fragment_last"),
    (SESSION_ID, "session_id"),
    (FLAGS, "flags"),
    (SEPARATOR, "separator"),
];

/// Get the name of a type code, if it is one of the known codes
pub fn name(code: u8) -> Option<&'static str> {
    NAMES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
}

/// Given user's input, return the type code if the input names one.
///
/// Matching ignores case and treats `-` the same as `_`, so `PublicKey` does not match
/// but `public-key` and `PUBLIC_KEY` do.
pub fn from_name(input: &str) -> Option<u8> {
    let normalized = input.trim().to_lowercase().replace('-', "_");
    NAMES
        .iter()
        .find(|(_, name)| *name == normalized)
        .map(|(code, _)| *code)
}
