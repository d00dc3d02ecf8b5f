use std::fmt;

use crate::error::{FlowError, Result};

/// Edge capacity. `Infinite` marks structurally-required edges that must
/// never be a bottleneck; the derived ordering places it above every
/// finite value so a path bottleneck is a plain `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Capacity {
    Finite(u64),
    Infinite,
}

impl Capacity {
    pub fn is_infinite(&self) -> bool {
        matches!(self, Capacity::Infinite)
    }

    /// Whether an edge with this residual is traversable.
    pub fn is_positive(&self) -> bool {
        !matches!(self, Capacity::Finite(0))
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Finite(value) => write!(f, "{value}"),
            Capacity::Infinite => f.write_str("inf"),
        }
    }
}

/// Direction of an operation relative to an edge's stored `from -> to`
/// orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Orientation {
    Forward,
    Backward,
}

/// Capacity and current usage of one edge, oriented stored-from to
/// stored-to. Invariant: `0 <= used <= capacity` at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeState {
    capacity: Capacity,
    used: u64,
}

impl EdgeState {
    pub(crate) fn new(capacity: Capacity) -> Self {
        Self { capacity, used: 0 }
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn used(&self) -> u64 {
        self.used
    }

    pub fn is_saturated(&self) -> bool {
        matches!(self.capacity, Capacity::Finite(c) if self.used == c)
    }

    /// Residual capacity in the given direction: room to push more flow
    /// forward, or room to cancel routed flow backward. Every traversal
    /// and cut decision derives from this single computation.
    pub(crate) fn residual(&self, orientation: Orientation) -> Capacity {
        match orientation {
            Orientation::Forward => match self.capacity {
                Capacity::Finite(c) => Capacity::Finite(c - self.used),
                Capacity::Infinite => Capacity::Infinite,
            },
            Orientation::Backward => Capacity::Finite(self.used),
        }
    }

    pub(crate) fn push(&mut self, orientation: Orientation, amount: u64) -> Result<()> {
        match orientation {
            Orientation::Forward => {
                let next = self.used.checked_add(amount);
                match (next, self.capacity) {
                    (Some(next), Capacity::Infinite) => {
                        self.used = next;
                        Ok(())
                    }
                    (Some(next), Capacity::Finite(c)) if next <= c => {
                        self.used = next;
                        Ok(())
                    }
                    _ => Err(FlowError::PushExceedsCapacity {
                        amount,
                        used: self.used,
                        capacity: self.capacity,
                    }),
                }
            }
            Orientation::Backward => {
                if amount > self.used {
                    return Err(FlowError::PushBelowZero {
                        amount,
                        used: self.used,
                    });
                }
                self.used -= amount;
                Ok(())
            }
        }
    }
}
