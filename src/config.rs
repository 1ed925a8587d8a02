//! Build-time configuration knobs (`spec.md` §6).

/// Inline prefix bytes stored per internal node before a compressed path
/// becomes "optimistic" (the remainder is verified against a
/// representative leaf instead of being stored). The spec recommends
/// 10-32 bytes; 24 keeps prefix storage small while still absorbing most
/// real-world shared path segments without falling back to a leaf read.
pub const PREFIX_CAPACITY: usize = 24;

/// Byte appended internally to every stored key so that one key can
/// never be a strict prefix of another stored key (see `spec.md` §9 and
/// the terminator decision in `DESIGN.md`). Keys passed to the public
/// API must not themselves contain this byte.
pub(crate) const KEY_TERMINATOR: u8 = 0x00;

/// Below this child count an `N16` collapses back to `N4` on delete.
pub(crate) const N16_SHRINK_AT: usize = 3;
/// Below this child count an `N48` collapses back to `N16` on delete.
pub(crate) const N48_SHRINK_AT: usize = 12;
/// Below this child count an `N256` collapses back to `N48` on delete.
pub(crate) const N256_SHRINK_AT: usize = 37;
