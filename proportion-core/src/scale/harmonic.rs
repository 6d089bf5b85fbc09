/// Ratio families of the harmonic candidate set, from unison to octave.
pub const HARMONIC_RATIOS: [f64; 10] = [
    1.0, 1.125, 1.2, 1.25, 1.333, 1.414, 1.5, 1.618, 1.75, 2.0,
];

/// Cap on candidates generated per ratio family.
pub(crate) const MAX_CANDIDATES_PER_RATIO: usize = 512;

/// Snap `value` to the closest `base × ratio^k` (for every harmonic ratio) below `2 × value`.
///
/// Only candidates inside `[lo, hi]` are eligible; with none eligible `value` is returned
/// unchanged. Ties keep the first candidate found, in ratio order.
pub(crate) fn snap_to_harmonic(value: f64, base: f64, lo: f64, hi: f64) -> f64 {
    let ceiling = value * 2.0;
    let mut closest = value;
    let mut best = f64::INFINITY;

    for ratio in HARMONIC_RATIOS {
        let mut candidate = base;
        let mut generated = 0usize;
        while candidate < ceiling {
            if candidate >= lo && candidate <= hi {
                let dist = (candidate - value).abs();
                if dist < best {
                    best = dist;
                    closest = candidate;
                }
            }
            generated += 1;
            // the unison family is just `base`
            if ratio <= 1.0 {
                break;
            }
            if generated >= MAX_CANDIDATES_PER_RATIO {
                tracing::debug!(ratio, value, base, "harmonic candidate cap reached");
                break;
            }
            candidate *= ratio;
        }
    }
    closest
}

#[cfg(test)]
#[path = "../../tests/unit/scale/harmonic.rs"]
mod tests;
