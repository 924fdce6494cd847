// src/engine/policy.rs

/// Permission bits covered by the per-directory masks.
pub const PERM_BITS: u32 = 0o777;

/// Setuid, setgid and sticky bits; carried through enforcement untouched.
const SPECIAL_BITS: u32 = 0o7000;

/// Clamp a file mode between a minimum and a maximum mask.
///
/// Step 1 (floor) forces ON every permission bit *not* covered by
/// `min_mask`; step 2 (ceiling) then forces OFF every bit covered by
/// `max_mask`, so the ceiling always wins over the floor on overlapping
/// bits. The result carries only the clamped permission bits plus the
/// preserved special bits; callers write back exactly that.
pub fn compute_mode(current: u32, min_mask: u32, max_mask: u32) -> u32 {
    let special = current & SPECIAL_BITS;
    let perms = (current | (!min_mask & PERM_BITS)) & !max_mask & PERM_BITS;
    special | perms
}
