use std::ops::{Index, IndexMut};

/// One of the two fixed battle participants.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Side {
    /// Human-controlled side.
    Player,
    /// Automated side.
    Opponent,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Player, Side::Opponent];

    /// The opposing side.
    pub const fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// A value per side, stored in a fixed two-slot structure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sides<T> {
    pub player: T,
    pub opponent: T,
}

impl<T> Sides<T> {
    pub const fn new(player: T, opponent: T) -> Self {
        Self { player, opponent }
    }

    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Iterates `(side, value)` pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Player, &self.player), (Side::Opponent, &self.opponent)].into_iter()
    }

    pub fn map<U>(self, mut f: impl FnMut(Side, T) -> U) -> Sides<U> {
        Sides {
            player: f(Side::Player, self.player),
            opponent: f(Side::Opponent, self.opponent),
        }
    }
}

impl<T> Index<Side> for Sides<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for Sides<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        self.get_mut(side)
    }
}
