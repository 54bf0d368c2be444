/*!
 Values carried by the [`STATE`](crate::protocol::tlv_types::STATE), [`METHOD`](crate::protocol::tlv_types::METHOD),
 [`ERROR`](crate::protocol::tlv_types::ERROR), and [`PERMISSIONS`](crate::protocol::tlv_types::PERMISSIONS) entries.

 Each value is a single byte on the wire, so they are provided both as integers and as ready-to-encode byte strings.
*/

/// Steps of a pairing exchange
pub mod state {
    pub const M1: &[u8] = &[0x01];
    pub const M2: &[u8] = &[0x02];
    pub const M3: &[u8] = &[0x03];
    pub const M4: &[u8] = &[0x04];
    pub const M5: &[u8] = &[0x05];
    pub const M6: &[u8] = &[0x06];
}

/// Pairing methods
pub mod method {
    pub const PAIR_SETUP: u8 = 0;
    pub const PAIR_SETUP_WITH_AUTH: u8 = 1;
    pub const PAIR_VERIFY: u8 = 2;
    pub const ADD_PAIRING: u8 = 3;
    pub const REMOVE_PAIRING: u8 = 4;
    pub const LIST_PAIRINGS: u8 = 5;
}

/// Error codes an accessory can respond with
pub mod error {
    /// Generic error to handle unexpected errors
    pub const UNKNOWN: u8 = 1;
    /// Setup code or signature verification failed
    pub const AUTHENTICATION: u8 = 2;
    /// Client must look at the retry delay and wait that many seconds before retrying
    pub const BACKOFF: u8 = 3;
    /// Server cannot accept any more pairings
    pub const MAX_PEERS: u8 = 4;
    /// Server reached its maximum number of authentication attempts
    pub const MAX_TRIES: u8 = 5;
    /// Server pairing method is unavailable
    pub const UNAVAILABLE: u8 = 6;
    /// Server is busy and cannot accept a pairing request at this time
    pub const BUSY: u8 = 7;
}

/// Controller permission levels
pub mod permissions {
    pub const USER: u8 = 0;
    pub const ADMIN: u8 = 1;
}
