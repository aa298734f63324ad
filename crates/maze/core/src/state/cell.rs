use bitflags::bitflags;

use super::Direction;

bitflags! {
    /// State of one maze cell, packed into a single byte.
    ///
    /// Bit values match the exported buffer layout. Each interior boundary is
    /// stored once: on the cell below it (`TOP_WALL`) or to its right
    /// (`LEFT_WALL`). `RIGHT_WALL` and `BOTTOM_WALL` only appear on the last
    /// column and row as framing.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CellFlags: u8 {
        const LEFT_WALL   = 1 << 0;
        const TOP_WALL    = 1 << 1;
        const RIGHT_WALL  = 1 << 2;
        const BOTTOM_WALL = 1 << 3;
        /// Set when the generator's walk reaches the cell. Cleared when the
        /// player leaves the cell, which leaves a breadcrumb behind.
        const VISIT_MARK  = 1 << 4;
        const TREASURE    = 1 << 5;
    }
}

impl CellFlags {
    /// All four wall bits.
    pub const WALLS: Self = Self::LEFT_WALL
        .union(Self::TOP_WALL)
        .union(Self::RIGHT_WALL)
        .union(Self::BOTTOM_WALL);

    /// Wall flag describing the given side of a cell.
    pub const fn wall(side: Direction) -> Self {
        match side {
            Direction::Up => Self::TOP_WALL,
            Direction::Down => Self::BOTTOM_WALL,
            Direction::Left => Self::LEFT_WALL,
            Direction::Right => Self::RIGHT_WALL,
        }
    }
}

/// Reads and writes [`CellFlags`] in the signed byte slots of a maze buffer.
///
/// Every write touches only the requested bits. `set` and `clear` are
/// idempotent.
pub struct CellCodec;

impl CellCodec {
    /// Decodes a slot. Bits outside the six known flags are dropped.
    #[inline]
    pub const fn decode(slot: i8) -> CellFlags {
        CellFlags::from_bits_truncate(slot as u8)
    }

    #[inline]
    pub const fn encode(flags: CellFlags) -> i8 {
        flags.bits() as i8
    }

    #[inline]
    pub const fn get(slot: i8, flag: CellFlags) -> bool {
        Self::decode(slot).contains(flag)
    }

    #[inline]
    pub fn set(slot: &mut i8, flag: CellFlags) {
        *slot = Self::encode(Self::decode(*slot).union(flag));
    }

    #[inline]
    pub fn clear(slot: &mut i8, flag: CellFlags) {
        *slot = Self::encode(Self::decode(*slot).difference(flag));
    }

    #[inline]
    pub fn toggle(slot: &mut i8, flag: CellFlags) {
        *slot = Self::encode(Self::decode(*slot).symmetric_difference(flag));
    }
}
