//! Canonical Game of Life patterns as glyph literals.
//!
//! Multi-phase fixtures list consecutive generations: phase `i + 1` is
//! the result of stepping phase `i` once on a grid of exactly that size.

// ── Still lifes ─────────────────────────────────────────────────

/// 2×2 block. Fixed point.
pub const BLOCK: &[&str] = &["++", "++"];

/// Beehive. Fixed point.
pub const BEEHIVE: &[&str] = &[" ++ ", "+  +", " ++ "];

// ── Oscillators ─────────────────────────────────────────────────

/// Blinker, period 2: vertical then horizontal bar.
pub const BLINKER: &[&[&str]] = &[&[" + ", " + ", " + "], &["   ", "+++", "   "]];

/// Toad, period 2.
pub const TOAD: &[&[&str]] = &[
    &["  + ", "+  +", "+  +", " +  "],
    &["    ", " +++", "+++ ", "    "],
];

// ── Spaceships ──────────────────────────────────────────────────

/// Glider, five phases. Phase 4 is phase 0 moved one row down and one
/// column right.
pub const GLIDER: &[&[&str]] = &[
    &["+ + ", " ++ ", " +  ", "    "],
    &["  + ", "+ + ", " ++ ", "    "],
    &[" +  ", "  ++", " ++ ", "    "],
    &["  + ", "   +", " +++", "    "],
    &["    ", " + +", "  ++", "  + "],
];

// ── Edge-sensitive ──────────────────────────────────────────────

/// A 5×5 pattern whose evolution depends on the dead border.
pub const BORDERED: &[&[&str]] = &[
    &["++++ ", "+   +", "+ + +", "+    ", " ++++"],
    &["++++ ", "+   +", "+  + ", "+   +", " +++ "],
    &["++++ ", "+   +", "++ ++", "+   +", " +++ "],
    &["++++ ", "    +", "++ ++", "+   +", " +++ "],
];
