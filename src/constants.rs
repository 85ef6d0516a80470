//! Global constants for the tag panel core.

/// Maximum tag name length in characters (exclusive upper bound).
pub const MAX_TAG_NAME_LEN: usize = 128;

/// Default tag color palette, in allocation order.
///
/// The allocator walks this list front to back, so earlier entries are
/// handed out first. Hosts may inject their own palette; this one is the
/// fallback when they don't care.
pub const DEFAULT_PALETTE: &[&str] = &[
    "#CC543A",
    "#7FB774",
    "#4894FE",
    "#E3BC36",
    "#EB873A",
    "#5E5DE6",
    "#9F8AD8",
    "#D78080",
    "#80C9D7",
    "#D0CE4F",
    "#47855B",
    "#B87FD7",
    "#8AA6D8",
    "#BF9F71",
];
