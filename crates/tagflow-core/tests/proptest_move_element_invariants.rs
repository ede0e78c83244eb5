//! Property-based invariant tests for `move_element`.
//!
//! These tests verify the structural invariants of the reorder primitive:
//!
//! 1. Length is preserved
//! 2. The moved element lands at `to`
//! 3. Every other element keeps its relative order
//! 4. `from == to` is the identity
//! 5. Out-of-range indices never panic and leave the sequence unchanged
//! 6. The in-place and copying variants agree

use proptest::prelude::*;
use tagflow_core::ordering::{move_element, move_element_in_place};

// ── Strategies ──────────────────────────────────────────────────────────

/// A non-empty sequence of distinct values plus two in-range indices.
fn seq_and_indices() -> impl Strategy<Value = (Vec<u32>, usize, usize)> {
    (1usize..40).prop_flat_map(|len| {
        let seq: Vec<u32> = (0..len as u32).collect();
        (Just(seq), 0..len, 0..len)
    })
}

fn others(seq: &[u32], skip: u32) -> Vec<u32> {
    seq.iter().copied().filter(|v| *v != skip).collect()
}

// ═══════════════════════════════════════════════════════════════════════
// 1–3. Length, landing index, relative order
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn length_is_preserved((seq, from, to) in seq_and_indices()) {
        let moved = move_element(&seq, from, to);
        prop_assert_eq!(moved.len(), seq.len());
    }

    #[test]
    fn moved_element_lands_at_target((seq, from, to) in seq_and_indices()) {
        let moved = move_element(&seq, from, to);
        prop_assert_eq!(moved[to], seq[from]);
    }

    #[test]
    fn others_keep_relative_order((seq, from, to) in seq_and_indices()) {
        let moved = move_element(&seq, from, to);
        let subject = seq[from];
        prop_assert_eq!(others(&moved, subject), others(&seq, subject));
    }

    #[test]
    fn at_most_the_span_between_indices_changes((seq, from, to) in seq_and_indices()) {
        let moved = move_element(&seq, from, to);
        let (lo, hi) = (from.min(to), from.max(to));
        for i in (0..seq.len()).filter(|i| *i < lo || *i > hi) {
            prop_assert_eq!(moved[i], seq[i]);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4. Identity
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn same_index_is_identity((seq, from, _to) in seq_and_indices()) {
        prop_assert_eq!(move_element(&seq, from, from), seq);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5. Out-of-range indices
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn out_of_range_is_unchanged(
        seq in proptest::collection::vec(any::<u32>(), 0..20),
        from in 0usize..40,
        to in 0usize..40,
    ) {
        prop_assume!(from >= seq.len() || to >= seq.len());
        prop_assert_eq!(move_element(&seq, from, to), seq);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 6. In-place agrees with copy
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn in_place_matches_copy((seq, from, to) in seq_and_indices()) {
        let copied = move_element(&seq, from, to);
        let mut in_place = seq.clone();
        let changed = move_element_in_place(&mut in_place, from, to);
        prop_assert_eq!(&in_place, &copied);
        prop_assert_eq!(changed, from != to);
    }
}

// ── Fixed examples ──────────────────────────────────────────────────────

#[test]
fn dragging_first_over_third_shifts_not_swaps() {
    let moved = move_element(&["a", "b", "c", "d"], 0, 2);
    assert_eq!(moved, ["b", "c", "a", "d"]);
    assert_ne!(moved, ["c", "b", "a", "d"]);
}
