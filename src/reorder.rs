//! Pure reorder math for the rule list.
//!
//! Both interaction styles route through here: explicit up/down buttons via
//! [`swap_up`]/[`swap_down`], pointer drag via [`relocate`]. Nothing in this
//! module mutates its input, so every case is unit-testable with index
//! triples.

use crate::types::Rule;

/// Compute the list produced by dragging `source` onto `target`.
///
/// `drop_after` says whether the pointer released below the target row's
/// midpoint. Returns `None` when the drop is rejected and the list must stay
/// unchanged: source and target equal, either index out of range, source is
/// the FINAL sentinel, or the drop would land on the sentinel.
///
/// After the source is removed, every later index shifts down by one, which
/// is why the insertion position is asymmetric around the drag direction:
/// moving down inserts at `target` (after) or `target - 1` (before); moving
/// up inserts at `target + 1` (after) or `target` (before). The result is
/// clamped so a sentinel, when present, keeps the last slot.
#[must_use]
pub fn relocate(
    rules: &[Rule],
    source: usize,
    target: usize,
    drop_after: bool,
    has_final: bool,
) -> Option<Vec<Rule>> {
    if source == target || source >= rules.len() || target >= rules.len() {
        return None;
    }
    if rules[source].is_final() || rules[target].is_final() {
        return None;
    }

    let mut out = rules.to_vec();
    let moved = out.remove(source);

    let mut position = if source < target {
        if drop_after {
            target
        } else {
            target - 1
        }
    } else if drop_after {
        target + 1
    } else {
        target
    };

    let max = if has_final {
        out.len().saturating_sub(1)
    } else {
        out.len()
    };
    if position > max {
        position = max;
    }

    out.insert(position, moved);
    Some(out)
}

/// Index pair swapped by a "move up" on `index`, or `None` at the top row or
/// on the sentinel.
#[must_use]
pub fn swap_up(rules: &[Rule], index: usize) -> Option<(usize, usize)> {
    if index == 0 || index >= rules.len() || rules[index].is_final() {
        return None;
    }
    Some((index - 1, index))
}

/// Index pair swapped by a "move down" on `index`.
///
/// `None` on the sentinel and on the last movable row: with a sentinel the
/// final slot is reserved, so the last movable row is `len - 2`.
#[must_use]
pub fn swap_down(rules: &[Rule], index: usize, has_final: bool) -> Option<(usize, usize)> {
    let len = rules.len();
    if index >= len || rules[index].is_final() {
        return None;
    }
    let limit = if has_final {
        len.saturating_sub(2)
    } else {
        len.saturating_sub(1)
    };
    if index >= limit {
        return None;
    }
    Some((index, index + 1))
}
