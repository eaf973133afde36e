//! Sides (partitions) and move directions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// One of the two partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    /// Items whose key is not a target key.
    Source,
    /// Items whose key is a target key.
    Target,
}

impl Side {
    /// Both sides, source first.
    pub const ALL: [Side; 2] = [Side::Source, Side::Target];

    /// Direction that moves items away from this side.
    pub fn outgoing(self) -> Direction {
        match self {
            Side::Source => Direction::ToTarget,
            Side::Target => Direction::ToSource,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => f.write_str("source"),
            Side::Target => f.write_str("target"),
        }
    }
}

/// Direction of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// Source to target.
    ToTarget,
    /// Target to source.
    ToSource,
}

impl Direction {
    /// Side whose selected keys are moved.
    pub fn origin(self) -> Side {
        match self {
            Direction::ToTarget => Side::Source,
            Direction::ToSource => Side::Target,
        }
    }

    /// Side the keys land on.
    pub fn destination(self) -> Side {
        match self {
            Direction::ToTarget => Side::Target,
            Direction::ToSource => Side::Source,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::ToTarget => f.write_str("toTarget"),
            Direction::ToSource => f.write_str("toSource"),
        }
    }
}

/// A value per side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sides<T> {
    /// Source-side value.
    pub source: T,
    /// Target-side value.
    pub target: T,
}

impl<T> Sides<T> {
    /// Build from a per-side constructor.
    pub fn from_fn(mut f: impl FnMut(Side) -> T) -> Self {
        Self {
            source: f(Side::Source),
            target: f(Side::Target),
        }
    }

    /// Map both values.
    pub fn map<U>(self, mut f: impl FnMut(Side, T) -> U) -> Sides<U> {
        Sides {
            source: f(Side::Source, self.source),
            target: f(Side::Target, self.target),
        }
    }
}

impl<T> Index<Side> for Sides<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        match side {
            Side::Source => &self.source,
            Side::Target => &self.target,
        }
    }
}

impl<T> IndexMut<Side> for Sides<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Source => &mut self.source,
            Side::Target => &mut self.target,
        }
    }
}
