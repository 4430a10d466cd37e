//! ID types for Fantasy Premier League entities.

use crate::error::{FplError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
mod tests;

/// Highest team id in a twenty-club league.
pub const MAX_TEAM_ID: u32 = 20;

fn parse_id(kind: &str, s: &str) -> Result<u32> {
    let raw: i64 = s
        .trim()
        .parse()
        .map_err(|_| FplError::invalid_argument(format!("{kind} id must be an integer, got {s:?}")))?;
    if raw < 0 {
        return Err(FplError::invalid_argument(format!(
            "{kind} id must be positive, got {raw}"
        )));
    }
    u32::try_from(raw).map_err(|_| {
        FplError::invalid_argument(format!(
            "{kind} id must be at most {}, got {raw}",
            u32::MAX
        ))
    })
}

/// Type-safe wrapper for Premier League club ids.
///
/// A club id is only meaningful in `1..=20`; [`TeamId::validate`] enforces both
/// bounds and is checked before any request goes out.
///
/// # Examples
///
/// ```rust
/// use fpl_client::TeamId;
///
/// let team = TeamId::new(14);
/// assert_eq!(team.as_u32(), 14);
/// assert!(TeamId::new(21).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Reject ids outside `1..=MAX_TEAM_ID`.
    pub fn validate(self) -> Result<Self> {
        if (1..=MAX_TEAM_ID).contains(&self.0) {
            Ok(self)
        } else {
            Err(FplError::invalid_argument(format!(
                "Team id needs to be between 1 and {MAX_TEAM_ID}. Got {}",
                self.0
            )))
        }
    }
}

impl From<TeamId> for u32 {
    fn from(id: TeamId) -> Self {
        id.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(parse_id("team", s)?).validate()
    }
}

/// Type-safe wrapper for player ("element") ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Player ids start at 1.
    pub fn validate(self) -> Result<Self> {
        if self.0 > 0 {
            Ok(self)
        } else {
            Err(FplError::invalid_argument(format!(
                "Player id needs to be larger than 0. Got {}",
                self.0
            )))
        }
    }
}

impl From<PlayerId> for u32 {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(parse_id("player", s)?).validate()
    }
}

/// Id of a manager's fantasy team (an "entry" in league tables).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub u32);

impl EntryId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub fn validate(self) -> Result<Self> {
        if self.0 > 0 {
            Ok(self)
        } else {
            Err(FplError::invalid_argument("Entry id needs to be larger than 0"))
        }
    }
}

impl From<EntryId> for u32 {
    fn from(id: EntryId) -> Self {
        id.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(parse_id("entry", s)?).validate()
    }
}

/// Id of a cup competition an entry takes part in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CupId(pub u32);

impl CupId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CupId {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self::new(parse_id("cup", s)?))
    }
}
