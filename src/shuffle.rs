use rand::Rng;

/// Uniform in-place shuffle. For each index `i`, a partner `r` is
/// drawn uniformly from `0..=i` and the two entries are exchanged, so
/// every permutation of `items` is equally likely under a fair `rng`.
pub(crate) fn fisher_yates<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in 0..items.len() {
        let r = rng.gen_range(0, i + 1);
        items.swap(i, r);
    }
}
