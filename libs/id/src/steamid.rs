//! The SteamID value type: parsing, rendering, and validation.

use crate::error::SteamIdError;
use crate::types::{instance, AccountType, Universe};

/// A 64-bit packed Steam identifier.
///
/// Bit layout, most significant first:
///
/// ```text
/// [universe:8][type:4][instance:20][account_id:32]
/// ```
///
/// The packed value is the single source of truth: field accessors read
/// bit ranges and setters mask to field width before writing, so a
/// `SteamId` can never hold an out-of-width field. Equality, ordering,
/// and hashing all follow the packed value, making it a cheap key across
/// representations.
///
/// Parsing accepts the decimal 64-bit form, Steam2 (`STEAM_0:0:23071901`),
/// and Steam3 (`[U:1:46143802]`), tried in that order. `Display` renders
/// the decimal 64-bit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SteamId(u64);

const ACCOUNT_ID_MASK: u64 = 0xFFFF_FFFF;
const TYPE_MASK: u64 = 0xF;

impl SteamId {
    /// Creates a SteamID from its packed 64-bit value.
    #[must_use]
    pub const fn from_u64(packed: u64) -> Self {
        Self(packed)
    }

    /// Returns the packed 64-bit value.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Packs the four fields into a SteamID.
    ///
    /// The type and instance arguments are masked to their 4- and 20-bit
    /// field widths.
    #[must_use]
    pub const fn from_parts(universe: u8, account_type: u8, inst: u32, account_id: u32) -> Self {
        Self(
            ((universe as u64) << 56)
                | (((account_type as u64) & TYPE_MASK) << 52)
                | (((inst & instance::MASK) as u64) << 32)
                | (account_id as u64),
        )
    }

    /// Creates an individual SteamID in the public universe with the
    /// desktop instance, the shape most callers mean by "a SteamID".
    #[must_use]
    pub const fn from_individual_account_id(account_id: u32) -> Self {
        Self::from_parts(
            Universe::Public as u8,
            AccountType::Individual as u8,
            instance::DESKTOP,
            account_id,
        )
    }

    /// Parses a SteamID from any of its textual encodings.
    ///
    /// Encodings are tried in a fixed order: all-digits decimal 64-bit,
    /// then Steam2, then Steam3. An empty input yields the default
    /// (all-invalid) SteamID rather than an error.
    pub fn parse(input: &str) -> Result<Self, SteamIdError> {
        if input.is_empty() {
            return Ok(Self::default());
        }

        if input.bytes().all(|b| b.is_ascii_digit()) {
            return input
                .parse::<u64>()
                .map(Self)
                .map_err(|_| SteamIdError::UnknownFormat(input.to_string()));
        }

        if let Some(sid) = parse_steam2(input) {
            return Ok(sid);
        }

        if let Some(sid) = parse_steam3(input) {
            return Ok(sid);
        }

        Err(SteamIdError::UnknownFormat(input.to_string()))
    }

    /// The universe field (bits 56..64), raw.
    #[must_use]
    pub const fn universe(&self) -> u8 {
        (self.0 >> 56) as u8
    }

    /// The account type field (bits 52..56), raw.
    #[must_use]
    pub const fn account_type(&self) -> u8 {
        ((self.0 >> 52) & TYPE_MASK) as u8
    }

    /// The instance field (bits 32..52).
    #[must_use]
    pub const fn instance(&self) -> u32 {
        ((self.0 >> 32) as u32) & instance::MASK
    }

    /// The account id field (bits 0..32).
    #[must_use]
    pub const fn account_id(&self) -> u32 {
        self.0 as u32
    }

    /// Replaces the universe field.
    pub fn set_universe(&mut self, universe: u8) {
        self.0 = (self.0 & !(0xFF << 56)) | ((universe as u64) << 56);
    }

    /// Replaces the account type field, masked to 4 bits.
    pub fn set_account_type(&mut self, account_type: u8) {
        self.0 = (self.0 & !(TYPE_MASK << 52)) | (((account_type as u64) & TYPE_MASK) << 52);
    }

    /// Replaces the instance field, masked to 20 bits.
    pub fn set_instance(&mut self, inst: u32) {
        self.0 =
            (self.0 & !((instance::MASK as u64) << 32)) | (((inst & instance::MASK) as u64) << 32);
    }

    /// Replaces the account id field.
    pub fn set_account_id(&mut self, account_id: u32) {
        self.0 = (self.0 & !ACCOUNT_ID_MASK) | (account_id as u64);
    }

    /// Renders the Steam2 form, e.g. `STEAM_0:0:23071901`.
    ///
    /// Only individual SteamIDs have a Steam2 form; any other type fails
    /// with [`SteamIdError::NotIndividual`]. When `newer_format` is false
    /// the public universe renders with the legacy leading digit 0; this
    /// is display-only and does not change the SteamID.
    pub fn steam2(&self, newer_format: bool) -> Result<String, SteamIdError> {
        if self.account_type() != AccountType::Individual as u8 {
            return Err(SteamIdError::NotIndividual);
        }

        let mut universe = self.universe();
        if !newer_format && universe == Universe::Public as u8 {
            universe = 0;
        }

        Ok(format!(
            "STEAM_{}:{}:{}",
            universe,
            self.account_id() & 1,
            self.account_id() / 2
        ))
    }

    /// Renders the Steam3 form, e.g. `[U:1:46143802]`.
    ///
    /// The type character comes from the canonical table, with `'c'`/`'L'`
    /// overriding it for clan chats and lobbies. The instance suffix is
    /// rendered only for anonymous gameservers, multiseat accounts, and
    /// individuals off the desktop instance.
    #[must_use]
    pub fn steam3(&self) -> String {
        let inst = self.instance();
        let account_type = self.account_type();

        let mut type_char = match AccountType::from_raw(account_type) {
            Some(t) => t.char(),
            None => 'i',
        };
        if inst & instance::FLAG_CLAN != 0 {
            type_char = 'c';
        } else if inst & instance::FLAG_LOBBY != 0 {
            type_char = 'L';
        }

        let render_instance = account_type == AccountType::AnonGameServer as u8
            || account_type == AccountType::Multiseat as u8
            || (account_type == AccountType::Individual as u8 && inst != instance::DESKTOP);

        if render_instance {
            format!(
                "[{}:{}:{}:{}]",
                type_char,
                self.universe(),
                self.account_id(),
                inst
            )
        } else {
            format!("[{}:{}:{}]", type_char, self.universe(), self.account_id())
        }
    }

    /// Renders the decimal 64-bit form, e.g. `76561198006409530`.
    #[must_use]
    pub fn steamid64(&self) -> String {
        self.0.to_string()
    }

    /// Returns whether Steam would consider this ID structurally valid.
    ///
    /// This checks field domains only; it does not check that the ID
    /// belongs to a real account, nor that it names an individual in the
    /// public universe.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let kind = match AccountType::from_raw(self.account_type()) {
            None | Some(AccountType::Invalid) => return false,
            Some(kind) => kind,
        };

        match Universe::from_raw(self.universe()) {
            None | Some(Universe::Invalid) => return false,
            Some(_) => {}
        }

        match kind {
            AccountType::Individual => {
                self.account_id() != 0 && self.instance() <= instance::WEB
            }
            AccountType::Clan => self.account_id() != 0 && self.instance() == instance::ALL,
            AccountType::GameServer => self.account_id() != 0,
            _ => true,
        }
    }

    /// Returns whether this is a valid individual account in the public
    /// universe with the desktop instance.
    #[must_use]
    pub fn is_valid_individual(&self) -> bool {
        self.universe() == Universe::Public as u8
            && self.account_type() == AccountType::Individual as u8
            && self.instance() == instance::DESKTOP
            && self.is_valid()
    }

    /// Returns whether this ID names a legacy (clan) group chat.
    #[must_use]
    pub fn is_group_chat(&self) -> bool {
        self.account_type() == AccountType::Chat as u8
            && self.instance() & instance::FLAG_CLAN != 0
    }

    /// Returns whether this ID names a game or matchmaking lobby.
    #[must_use]
    pub fn is_lobby(&self) -> bool {
        self.account_type() == AccountType::Chat as u8
            && self.instance() & (instance::FLAG_LOBBY | instance::FLAG_MMS_LOBBY) != 0
    }
}

impl std::fmt::Display for SteamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SteamId {
    type Err = SteamIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u64> for SteamId {
    fn from(packed: u64) -> Self {
        Self(packed)
    }
}

impl From<SteamId> for u64 {
    fn from(sid: SteamId) -> Self {
        sid.0
    }
}

impl serde::Serialize for SteamId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.steamid64())
    }
}

impl<'de> serde::Deserialize<'de> for SteamId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Steam2: `STEAM_U:M:A` with U a single digit 0..=5, M 0 or 1, A decimal.
fn parse_steam2(input: &str) -> Option<SteamId> {
    let rest = input.strip_prefix("STEAM_")?;
    let mut parts = rest.split(':');
    let universe_part = parts.next()?;
    let parity_part = parts.next()?;
    let account_part = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let universe = single_digit(universe_part).filter(|&d| d <= 5)?;
    let parity: u64 = match parity_part {
        "0" => 0,
        "1" => 1,
        _ => return None,
    };
    let account = parse_decimal_u64(account_part)?;
    let account_id = u32::try_from(account.checked_mul(2)?.checked_add(parity)?).ok()?;

    // Universe 0 is legacy shorthand for the public universe
    let universe = if universe == 0 {
        Universe::Public as u8
    } else {
        universe
    };

    Some(SteamId::from_parts(
        universe,
        AccountType::Individual as u8,
        instance::DESKTOP,
        account_id,
    ))
}

/// Steam3: `[T:U:A]` or `[T:U:A:I]` with T a single ASCII letter, U a
/// single digit 0..=5, A and I decimal.
fn parse_steam3(input: &str) -> Option<SteamId> {
    let inner = input.strip_prefix('[')?.strip_suffix(']')?;
    let mut parts = inner.split(':');
    let type_part = parts.next()?;
    let universe_part = parts.next()?;
    let account_part = parts.next()?;
    let instance_part = parts.next();
    if parts.next().is_some() {
        return None;
    }

    let type_char = single_char(type_part).filter(char::is_ascii_alphabetic)?;
    let universe = single_digit(universe_part).filter(|&d| d <= 5)?;
    let account_id = parse_decimal_u32(account_part)?;
    let explicit_instance = match instance_part {
        Some(part) => Some(parse_decimal_u32(part)? & instance::MASK),
        None => None,
    };

    let (account_type, inst) = match type_char {
        // Individual IDs default to the desktop instance when none is given
        'U' => (
            AccountType::Individual,
            explicit_instance.unwrap_or(instance::DESKTOP),
        ),
        'c' => (
            AccountType::Chat,
            explicit_instance.unwrap_or(instance::ALL) | instance::FLAG_CLAN,
        ),
        'L' => (
            AccountType::Chat,
            explicit_instance.unwrap_or(instance::ALL) | instance::FLAG_LOBBY,
        ),
        // Unrecognized characters yield an invalid-typed ID, not an error
        c => (
            AccountType::from_char(c),
            explicit_instance.unwrap_or(instance::ALL),
        ),
    };

    Some(SteamId::from_parts(
        universe,
        account_type as u8,
        inst,
        account_id,
    ))
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn single_digit(s: &str) -> Option<u8> {
    single_char(s)?.to_digit(10).map(|d| d as u8)
}

fn parse_decimal_u64(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_decimal_u32(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
