//! Weighted index selection

use rand::Rng;

/// Pick an index with probability proportional to its weight.
///
/// Non-positive and non-finite weights are never chosen. The remaining weights
/// are renormalized over a single uniform draw. Returns `None` for an empty
/// slice; when no weight is positive the first index is returned, so callers
/// that pass only eligible candidates always get one back.
pub fn roulette<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }

    let usable = |w: f64| w.is_finite() && w > 0.0;
    let total: f64 = weights.iter().copied().filter(|w| usable(*w)).sum();
    if total <= 0.0 {
        return Some(0);
    }

    let draw = rng.gen::<f64>() * total;
    let mut cumulative = 0.0;
    let mut last_usable = 0;
    for (index, weight) in weights.iter().copied().enumerate() {
        if !usable(weight) {
            continue;
        }
        cumulative += weight;
        last_usable = index;
        if draw < cumulative {
            return Some(index);
        }
    }

    // rounding can leave the draw just above the final cumulative sum
    Some(last_usable)
}
