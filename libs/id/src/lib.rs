//! # steamapi-id
//!
//! SteamID parsing, rendering, and validation for the steamapi platform.
//!
//! ## Design Principles
//!
//! - A SteamID is a pure value: one packed `u64`, no I/O, no shared state
//! - All encodings round-trip (parse → render → parse)
//! - Field setters mask to field width, so the packing invariant always
//!   holds and accessors never need to re-normalize
//! - Structural validity is a boolean question ([`SteamId::is_valid`]),
//!   never an error
//!
//! ## Encodings
//!
//! A SteamID packs universe, account type, instance, and account id into
//! one 64-bit value with three textual encodings:
//!
//! - decimal 64-bit: `76561198006409530`
//! - Steam2: `STEAM_0:0:23071901` (individual accounts only)
//! - Steam3: `[U:1:46143802]`, optionally with an instance suffix
//!
//! [`SteamId::parse`] accepts all three, tried in that order:
//!
//! ```
//! use steamapi_id::SteamId;
//!
//! let sid = SteamId::parse("STEAM_0:0:23071901")?;
//! assert_eq!(sid.steam3(), "[U:1:46143802]");
//! assert_eq!(sid.to_string(), "76561198006409530");
//! assert!(sid.is_valid_individual());
//! # Ok::<(), steamapi_id::SteamIdError>(())
//! ```

mod error;
mod steamid;
mod types;

pub use error::SteamIdError;
pub use steamid::SteamId;
pub use types::{instance, AccountType, Universe};
