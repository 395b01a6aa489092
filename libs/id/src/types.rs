//! Universe, account type, and instance domains for SteamIDs.
//!
//! A SteamID packs four fields into 64 bits: universe (8 bits), account
//! type (4 bits), instance (20 bits), and account id (32 bits). Universes
//! and account types are closed integer domains with named values; the
//! instance field is an open 20-bit value with a handful of named points
//! and, for chat IDs, dedicated flag bits.

use serde::{Deserialize, Serialize};

/// Top-level partition of the SteamID space.
///
/// The 8-bit universe field admits raw values beyond this domain (the
/// parser accepts any 64-bit input); those are representable on a
/// [`SteamId`](crate::SteamId) but never valid. Value 5 is reserved and
/// has no name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Universe {
    #[default]
    Invalid = 0,
    Public = 1,
    Beta = 2,
    Internal = 3,
    Dev = 4,
}

impl Universe {
    /// Checked view of a raw universe field value.
    pub const fn from_raw(raw: u8) -> Option<Universe> {
        match raw {
            0 => Some(Universe::Invalid),
            1 => Some(Universe::Public),
            2 => Some(Universe::Beta),
            3 => Some(Universe::Internal),
            4 => Some(Universe::Dev),
            _ => None,
        }
    }
}

impl std::fmt::Display for Universe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Universe::Invalid => "invalid",
            Universe::Public => "public",
            Universe::Beta => "beta",
            Universe::Internal => "internal",
            Universe::Dev => "dev",
        };
        write!(f, "{}", s)
    }
}

/// The kind of entity a SteamID names.
///
/// Stored as a 4-bit field; raw values 11..=15 are unnamed and never valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum AccountType {
    #[default]
    Invalid = 0,
    Individual = 1,
    Multiseat = 2,
    GameServer = 3,
    AnonGameServer = 4,
    Pending = 5,
    ContentServer = 6,
    Clan = 7,
    Chat = 8,
    /// Reserved by Steam; has no canonical Steam3 character.
    P2pSuperSeeder = 9,
    AnonUser = 10,
}

impl AccountType {
    /// Checked view of a raw account type field value.
    pub const fn from_raw(raw: u8) -> Option<AccountType> {
        match raw {
            0 => Some(AccountType::Invalid),
            1 => Some(AccountType::Individual),
            2 => Some(AccountType::Multiseat),
            3 => Some(AccountType::GameServer),
            4 => Some(AccountType::AnonGameServer),
            5 => Some(AccountType::Pending),
            6 => Some(AccountType::ContentServer),
            7 => Some(AccountType::Clan),
            8 => Some(AccountType::Chat),
            9 => Some(AccountType::P2pSuperSeeder),
            10 => Some(AccountType::AnonUser),
            _ => None,
        }
    }

    /// The canonical Steam3 character for this type.
    ///
    /// `P2pSuperSeeder` has no entry in the canonical table and falls back
    /// to `'i'`, the same character used for raw type values outside the
    /// named domain.
    pub const fn char(self) -> char {
        match self {
            AccountType::Invalid => 'I',
            AccountType::Individual => 'U',
            AccountType::Multiseat => 'M',
            AccountType::GameServer => 'G',
            AccountType::AnonGameServer => 'A',
            AccountType::Pending => 'P',
            AccountType::ContentServer => 'C',
            AccountType::Clan => 'g',
            AccountType::Chat => 'T',
            AccountType::P2pSuperSeeder => 'i',
            AccountType::AnonUser => 'a',
        }
    }

    /// Reverse lookup in the canonical character table.
    ///
    /// Unrecognized characters (including the fallback `'i'`) map to
    /// `Invalid` rather than failing; Steam3 parsing relies on this.
    pub const fn from_char(c: char) -> AccountType {
        match c {
            'I' => AccountType::Invalid,
            'U' => AccountType::Individual,
            'M' => AccountType::Multiseat,
            'G' => AccountType::GameServer,
            'A' => AccountType::AnonGameServer,
            'P' => AccountType::Pending,
            'C' => AccountType::ContentServer,
            'g' => AccountType::Clan,
            'T' => AccountType::Chat,
            'a' => AccountType::AnonUser,
            _ => AccountType::Invalid,
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AccountType::Invalid => "invalid",
            AccountType::Individual => "individual",
            AccountType::Multiseat => "multiseat",
            AccountType::GameServer => "gameserver",
            AccountType::AnonGameServer => "anon_gameserver",
            AccountType::Pending => "pending",
            AccountType::ContentServer => "content_server",
            AccountType::Clan => "clan",
            AccountType::Chat => "chat",
            AccountType::P2pSuperSeeder => "p2p_super_seeder",
            AccountType::AnonUser => "anon_user",
        };
        write!(f, "{}", s)
    }
}

/// Named values and flag bits for the 20-bit instance field.
///
/// For individual accounts the instance distinguishes the client kind
/// (desktop/console/web). For chat accounts the high bits of the field
/// double as a bitmask selecting the chat sub-kind.
pub mod instance {
    /// Mask covering the 20-bit instance field.
    pub const MASK: u32 = 0x000F_FFFF;

    pub const ALL: u32 = 0;
    pub const DESKTOP: u32 = 1;
    pub const CONSOLE: u32 = 2;
    pub const WEB: u32 = 4;

    /// Clan (group) chat flag bit.
    pub const FLAG_CLAN: u32 = (MASK + 1) >> 1;
    /// Game lobby flag bit.
    pub const FLAG_LOBBY: u32 = (MASK + 1) >> 2;
    /// Matchmaking lobby flag bit.
    pub const FLAG_MMS_LOBBY: u32 = (MASK + 1) >> 3;
}
