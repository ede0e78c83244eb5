#![forbid(unsafe_code)]

//! Relocating one element inside an ordered sequence.
//!
//! # Semantics
//!
//! `move_element(seq, from, to)` removes the element at `from` and then
//! inserts it at `to` in the already-shortened sequence. Elements between the
//! two positions shift by exactly one slot towards the vacated index; this is
//! the reflow a wrapping flow layout shows when one chip is dragged onto
//! another, not a pairwise exchange.
//!
//! ```
//! use tagflow_core::ordering::move_element;
//!
//! let moved = move_element(&["a", "b", "c", "d"], 0, 2);
//! assert_eq!(moved, ["b", "c", "a", "d"]);
//! ```
//!
//! # Invariants
//!
//! 1. Length is preserved.
//! 2. The moved element ends at `to`.
//! 3. Every other element keeps its relative order.
//! 4. `from == to` is the identity.
//!
//! # Failure Modes
//!
//! Out-of-range indices never panic: the sequence is left unchanged.

/// Return a copy of `seq` with the element at `from` relocated to `to`.
///
/// Out-of-range indices yield an unchanged copy.
#[must_use]
pub fn move_element<T: Clone>(seq: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = seq.to_vec();
    move_element_in_place(&mut out, from, to);
    out
}

/// Relocate the element at `from` to `to` inside `seq`.
///
/// Returns `true` if the sequence changed.
pub fn move_element_in_place<T>(seq: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= seq.len() || to >= seq.len() || from == to {
        return false;
    }
    let element = seq.remove(from);
    seq.insert(to, element);
    true
}
