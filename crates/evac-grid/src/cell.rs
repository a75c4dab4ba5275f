//! Cell types and O(1) group-membership tests.
//!
//! Every cell holds exactly one [`CellType`].  Each type owns a distinct bit,
//! so a named group of types is a [`CellSet`] (a `u16` mask) and "is this
//! cell in group G" is a single AND.  Neighbourhood queries are filtered by
//! these composite groups rather than by chained comparisons.

use std::fmt;
use std::ops::BitOr;

/// Semantic type of one grid cell.
///
/// The discriminants are single bits; see [`CellType::bit`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum CellType {
    /// Free floor.
    #[default]
    Empty             = 1 << 0,
    /// Exit; never moves or changes across runs (a person standing on it is
    /// `PersonAtExit`).
    Exit              = 1 << 1,
    /// Impassable, never ignites.
    Wall              = 1 << 2,
    /// Impassable furniture; can fill with smoke.
    Obstacle          = 1 << 3,
    /// A pedestrian.
    Person            = 1 << 4,
    /// Smoke-filled floor.
    Smoke             = 1 << 5,
    /// Free floor where pedestrians are placed first when seeding.
    PersonAppearance  = 1 << 6,
    /// A pedestrian who reached an exit this tick; absorbed on the next.
    PersonAtExit      = 1 << 7,
    /// A pedestrian standing in smoke.
    PersonWithSmoke   = 1 << 8,
    /// Obstacle filled with smoke.
    ObstacleWithSmoke = 1 << 9,
}

impl CellType {
    pub const ALL: [CellType; 10] = [
        CellType::Empty,
        CellType::Exit,
        CellType::Wall,
        CellType::Obstacle,
        CellType::Person,
        CellType::Smoke,
        CellType::PersonAppearance,
        CellType::PersonAtExit,
        CellType::PersonWithSmoke,
        CellType::ObstacleWithSmoke,
    ];

    /// The single bit this type occupies in a [`CellSet`].
    #[inline(always)]
    pub const fn bit(self) -> u16 {
        self as u16
    }

    /// `true` if this type belongs to `set`.
    #[inline(always)]
    pub const fn is_in(self, set: CellSet) -> bool {
        self.bit() & set.0 != 0
    }

    /// Snake-case label for logs and CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            CellType::Empty             => "empty",
            CellType::Exit              => "exit",
            CellType::Wall              => "wall",
            CellType::Obstacle          => "obstacle",
            CellType::Person            => "person",
            CellType::Smoke             => "smoke",
            CellType::PersonAppearance  => "person_appearance",
            CellType::PersonAtExit      => "person_at_exit",
            CellType::PersonWithSmoke   => "person_with_smoke",
            CellType::ObstacleWithSmoke => "obstacle_with_smoke",
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── CellSet ───────────────────────────────────────────────────────────────────

/// A set of cell types, stored as a bitmask.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct CellSet(pub u16);

impl CellSet {
    pub const ALL: CellSet = CellSet((1 << 10) - 1);

    /// Cells a pedestrian may step into.
    pub const EMPTY: CellSet = CellSet::of(&[
        CellType::Empty,
        CellType::Smoke,
        CellType::PersonAppearance,
        CellType::Exit,
    ]);

    /// Cells the distance field propagates through (occupied ones included,
    /// they are merely more costly).
    pub const TRAVERSABLE: CellSet = CellSet::of(&[
        CellType::Empty,
        CellType::Smoke,
        CellType::PersonAppearance,
        CellType::Exit,
        CellType::Person,
        CellType::PersonWithSmoke,
        CellType::PersonAtExit,
    ]);

    /// Smoke-bearing cells.
    pub const SMOKE: CellSet = CellSet::of(&[
        CellType::Smoke,
        CellType::ObstacleWithSmoke,
        CellType::PersonWithSmoke,
    ]);

    /// Every cell holding a pedestrian token.
    pub const PEOPLE: CellSet = CellSet::of(&[
        CellType::Person,
        CellType::PersonWithSmoke,
        CellType::PersonAtExit,
    ]);

    /// Pedestrians that still have to move this tick.
    pub const MOVING: CellSet = CellSet::of(&[CellType::Person, CellType::PersonWithSmoke]);

    /// Cells that smoke can spread into.
    pub const IGNITABLE: CellSet = CellSet::of(&[
        CellType::Empty,
        CellType::Obstacle,
        CellType::Person,
        CellType::PersonAppearance,
    ]);

    /// Neighbours that count towards the smoke-spread denominator.
    pub const SMOKE_SENSING: CellSet =
        CellSet(CellSet::ALL.0 & !(CellType::Wall.bit() | CellType::Exit.bit()));

    /// Build a set from a list of types (usable in `const` context).
    pub const fn of(types: &[CellType]) -> CellSet {
        let mut bits = 0u16;
        let mut i = 0;
        while i < types.len() {
            bits |= types[i].bit();
            i += 1;
        }
        CellSet(bits)
    }

    #[inline(always)]
    pub const fn contains(self, t: CellType) -> bool {
        t.is_in(self)
    }

    #[inline]
    pub const fn union(self, other: CellSet) -> CellSet {
        CellSet(self.0 | other.0)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<CellType> for CellSet {
    #[inline]
    fn from(t: CellType) -> Self {
        CellSet(t.bit())
    }
}

impl BitOr for CellSet {
    type Output = CellSet;
    #[inline]
    fn bitor(self, rhs: CellSet) -> CellSet {
        self.union(rhs)
    }
}

impl BitOr for CellType {
    type Output = CellSet;
    #[inline]
    fn bitor(self, rhs: CellType) -> CellSet {
        CellSet(self.bit() | rhs.bit())
    }
}

impl BitOr<CellType> for CellSet {
    type Output = CellSet;
    #[inline]
    fn bitor(self, rhs: CellType) -> CellSet {
        CellSet(self.0 | rhs.bit())
    }
}

// ── Cell ──────────────────────────────────────────────────────────────────────

/// One grid cell.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub kind: CellType,

    /// Weighted cost of the cheapest path to any exit; `f64::INFINITY` when
    /// unreachable.  Rewritten on every tick.
    pub exit_distance: f64,

    /// Ticks the pedestrian on this cell has spent in smoke.  Meaningful only
    /// while `kind` is in [`CellSet::PEOPLE`]; travels with the pedestrian and
    /// is zero everywhere else.
    pub exposure: u32,
}

impl Cell {
    pub const fn new(kind: CellType) -> Self {
        Self { kind, exit_distance: f64::INFINITY, exposure: 0 }
    }

    #[inline(always)]
    pub fn is(&self, set: CellSet) -> bool {
        self.kind.is_in(set)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::new(CellType::Empty)
    }
}
