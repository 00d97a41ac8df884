//! Phase tables for four-coil steppers.

/// Direction of travel through the phase table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Table order (positive step count).
    Forward,
    /// Reverse table order (negative step count).
    Reverse,
}

impl Direction {
    /// Get direction from signed step count.
    #[inline]
    pub fn from_steps(steps: i32) -> Self {
        if steps >= 0 {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }
}

/// Ordered coil patterns forming one electrical cycle.
///
/// Bit `n` of a pattern drives coil pin `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTable([u8; PhaseTable::LEN]);

impl PhaseTable {
    /// Number of phases in one cycle.
    pub const LEN: usize = 8;

    /// Half-step sequence of the lab's four-pin driver board.
    pub const HALF_STEP: Self = Self([
        0b1001, 0b0001, 0b0101, 0b0100, 0b0110, 0b0010, 0b1010, 0b1000,
    ]);

    /// Create a table from raw patterns. Only the low four bits are used.
    pub const fn new(patterns: [u8; Self::LEN]) -> Self {
        let mut masked = [0u8; Self::LEN];
        let mut i = 0;
        while i < Self::LEN {
            masked[i] = patterns[i] & 0b1111;
            i += 1;
        }
        Self(masked)
    }

    /// Raw patterns in table order.
    #[inline]
    pub fn patterns(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// Pattern at position `index` of a traversal in `direction`.
    #[inline]
    pub fn pattern_at(&self, index: usize, direction: Direction) -> u8 {
        match direction {
            Direction::Forward => self.0[index],
            Direction::Reverse => self.0[Self::LEN - 1 - index],
        }
    }

    /// Patterns of one traversal in `direction`.
    pub fn iter(&self, direction: Direction) -> impl Iterator<Item = u8> + '_ {
        (0..Self::LEN).map(move |i| self.pattern_at(i, direction))
    }
}

impl Default for PhaseTable {
    fn default() -> Self {
        Self::HALF_STEP
    }
}
