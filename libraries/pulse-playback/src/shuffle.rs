//! Random track selection for shuffle mode

use rand::Rng;

/// Uniformly random index in `0..len` other than `exclude`
///
/// Returns `None` when no other index exists. Draws once from `0..len - 1`
/// and skips over `exclude`, so it never loops.
pub(crate) fn pick_excluding<R: Rng>(
    rng: &mut R,
    len: usize,
    exclude: usize,
) -> Option<usize> {
    if len < 2 {
        return None;
    }

    let pick = rng.gen_range(0..len - 1);
    Some(if pick >= exclude { pick + 1 } else { pick })
}

/// Uniformly random index in `0..len`
pub(crate) fn pick_any<R: Rng>(rng: &mut R, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(rng.gen_range(0..len))
}
