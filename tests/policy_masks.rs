// tests/policy_masks.rs

use proptest::prelude::*;
use umaskd::engine::compute_mode;

#[test]
fn worked_example_clamps_to_0o711() {
    // min 0644, max 0022, created with 0600:
    // floor: 0600 | 0133 = 0733; ceiling: 0733 & !0022 = 0711.
    assert_eq!(compute_mode(0o600, 0o644, 0o022), 0o711);
}

#[test]
fn special_bits_survive_enforcement() {
    let mode = compute_mode(0o4755, 0o644, 0o022);
    assert_eq!(mode & 0o7000, 0o4000);
    assert_eq!(mode & 0o777, compute_mode(0o755, 0o644, 0o022) & 0o777);
}

#[test]
fn file_type_bits_never_reach_the_result() {
    // A regular-file st_mode as stat reports it.
    let mode = compute_mode(0o100600, 0o644, 0o022);
    assert_eq!(mode, 0o711);
}

proptest! {
    #[test]
    fn ceiling_bits_are_always_clear(
        mode in 0u32..=0o777,
        min in 0u32..=0o777,
        max in 0u32..=0o777,
    ) {
        prop_assert_eq!(compute_mode(mode, min, max) & max, 0);
    }

    #[test]
    fn bits_outside_both_masks_are_always_set(
        mode in 0u32..=0o777,
        min in 0u32..=0o777,
        max in 0u32..=0o777,
    ) {
        let free = !min & !max & 0o777;
        prop_assert_eq!(compute_mode(mode, min, max) & free, free);
    }

    #[test]
    fn overlapping_bits_resolve_to_the_ceiling(
        mode in 0u32..=0o777,
        min in 0u32..=0o777,
        max in 0u32..=0o777,
    ) {
        prop_assert_eq!(compute_mode(mode, min, max) & (min & max), 0);
    }

    #[test]
    fn enforcement_is_idempotent(
        mode in 0u32..=0o7777,
        min in 0u32..=0o777,
        max in 0u32..=0o777,
    ) {
        let once = compute_mode(mode, min, max);
        prop_assert_eq!(compute_mode(once, min, max), once);
    }
}
