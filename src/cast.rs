//! The fixed cast of characters and the poses each of them is drawn in.
//!
//! Characters map to sheet columns and poses map to (sheet, row) pairs. Both
//! sets are closed: every generator renders exactly `Character::ALL` times the
//! three poses of each [`SheetKind`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a character or pose name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CastError {
    #[error("unknown character '{0}', expected one of: max, chief, cortana, ghost")]
    UnknownCharacter(String),
    #[error("unknown pose '{0}', expected one of: idle, typing, thinking, walk1, walk2, sleeping")]
    UnknownPose(String),
}

/// A member of the cast. Declaration order is sheet column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Character {
    Max,
    Chief,
    Cortana,
    Ghost,
}

impl Character {
    /// All characters in column order
    pub const ALL: [Character; 4] =
        [Character::Max, Character::Chief, Character::Cortana, Character::Ghost];

    /// Lowercase identifier used in sprite keys and config tables
    pub fn name(self) -> &'static str {
        match self {
            Character::Max => "max",
            Character::Chief => "chief",
            Character::Cortana => "cortana",
            Character::Ghost => "ghost",
        }
    }

    /// Sheet column of this character
    pub fn column(self) -> u32 {
        self as u32
    }

    /// Map an agent identifier onto a cast member.
    ///
    /// Known agent roles are name-locked to a character; anything else is
    /// spread over the cast by a string hash so the same id always lands on
    /// the same column.
    ///
    /// ```
    /// use charsheet::cast::Character;
    ///
    /// assert_eq!(Character::from_agent_id("main"), Character::Max);
    /// assert_eq!(Character::from_agent_id("01-tech-lead"), Character::Chief);
    /// assert_eq!(Character::from_agent_id("02-threat-hunter"), Character::Cortana);
    /// assert_eq!(Character::from_agent_id("03-lore-keeper"), Character::Ghost);
    /// ```
    pub fn from_agent_id(agent_id: &str) -> Character {
        let id = agent_id.to_lowercase();
        if id.contains("main") || id == "default" {
            return Character::Max;
        }
        if id.contains("tech-lead") || id.contains("chief") || id.contains("01-") {
            return Character::Chief;
        }
        if id.contains("threat") || id.contains("cortana") || id.contains("02-") {
            return Character::Cortana;
        }
        if id.contains("lore") || id.contains("ghost") || id.contains("03-") {
            return Character::Ghost;
        }

        let hash = id.encode_utf16().fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32));
        let index = hash.unsigned_abs() as usize % Character::ALL.len();
        Character::ALL[index]
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Character {
    type Err = CastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Character::ALL
            .into_iter()
            .find(|c| c.name() == lower)
            .ok_or_else(|| CastError::UnknownCharacter(s.to_string()))
    }
}

/// A character state. Each pose lives on exactly one row of one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pose {
    Idle,
    Typing,
    Thinking,
    Walk1,
    Walk2,
    Sleeping,
}

impl Pose {
    pub const ALL: [Pose; 6] =
        [Pose::Idle, Pose::Typing, Pose::Thinking, Pose::Walk1, Pose::Walk2, Pose::Sleeping];

    pub fn name(self) -> &'static str {
        match self {
            Pose::Idle => "idle",
            Pose::Typing => "typing",
            Pose::Thinking => "thinking",
            Pose::Walk1 => "walk1",
            Pose::Walk2 => "walk2",
            Pose::Sleeping => "sleeping",
        }
    }

    /// The sheet and row this pose is placed on
    pub fn sheet(self) -> (SheetKind, u32) {
        match self {
            Pose::Idle => (SheetKind::Idle, 0),
            Pose::Typing => (SheetKind::Idle, 1),
            Pose::Thinking => (SheetKind::Idle, 2),
            Pose::Walk1 => (SheetKind::Action, 0),
            Pose::Walk2 => (SheetKind::Action, 1),
            Pose::Sleeping => (SheetKind::Action, 2),
        }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pose {
    type Err = CastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Pose::ALL
            .into_iter()
            .find(|p| p.name() == lower)
            .ok_or_else(|| CastError::UnknownPose(s.to_string()))
    }
}

/// One of the two output sheets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetKind {
    /// Rows: idle, typing, thinking
    Idle,
    /// Rows: walk1, walk2, sleeping
    Action,
}

impl SheetKind {
    pub const ALL: [SheetKind; 2] = [SheetKind::Idle, SheetKind::Action];

    /// Poses of this sheet in row order
    pub fn poses(self) -> [Pose; 3] {
        match self {
            SheetKind::Idle => [Pose::Idle, Pose::Typing, Pose::Thinking],
            SheetKind::Action => [Pose::Walk1, Pose::Walk2, Pose::Sleeping],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SheetKind::Idle => "idle",
            SheetKind::Action => "action",
        }
    }
}

impl fmt::Display for SheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
