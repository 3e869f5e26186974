// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Computes factorial of n, saturating at usize::MAX (small n expected).
pub const fn factorial(n: usize) -> usize {
    let mut acc: usize = 1;
    let mut k = 2;

    while k <= n {
        acc = acc.saturating_mul(k);
        k += 1;
    }

    acc
}

/// Decodes one permutation by its index in lexicographic order.
///
/// Removes from a shrinking candidate list, `O(n^2)`.
pub fn lehmer_decode(mut i: usize, n: usize) -> Vec<usize> {
    let mut elems: Vec<usize> = (0..n).collect();
    let mut result = Vec::with_capacity(n);

    for j in (1..=n).rev() {
        let fact = factorial(j - 1);
        let idx = i / fact;

        i %= fact;

        result.push(elems.remove(idx));
    }

    result
}

/// Calls `f` with every permutation of `0..n`, in lexicographic order.
pub fn index_permutations(n: usize, mut f: impl FnMut(&[usize])) {
    for i in 0..factorial(n) {
        f(&lehmer_decode(i, n));
    }
}

/// Reorders `data` in place so that `data[i]` becomes the old `data[perm[i]]`.
pub fn apply_permutation<T>(data: &mut [T], perm: &[usize]) {
    assert_eq!(data.len(), perm.len(), "length mismatch");
    let mut visited = vec![false; data.len()];

    for i in 0..data.len() {
        if visited[i] {
            continue;
        }

        let mut current = i;

        while !visited[current] {
            visited[current] = true;
            let next = perm[current];

            if next == i {
                break;
            }

            data.swap(current, next);
            current = next;
        }
    }
}

/// Computes the inverse of a permutation: `inv[perm[i]] == i`.
pub fn invert_perm(perm: &[usize]) -> Vec<usize> {
    let mut inv = vec![0; perm.len()];
    for (i, &p) in perm.iter().enumerate() {
        inv[p] = i;
    }
    inv
}

/// Number of pairs `i < j` with `perm[i] > perm[j]`, `O(n^2)`.
pub fn inversion_count(perm: &[usize]) -> usize {
    let mut count = 0;
    for i in 0..perm.len() {
        for j in (i + 1)..perm.len() {
            if perm[i] > perm[j] {
                count += 1;
            }
        }
    }
    count
}

/// Returns `true` if `values` holds every integer in `0..values.len()` exactly once.
pub fn is_bijection(values: &[usize]) -> bool {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted.iter().enumerate().all(|(i, &v)| i == v)
}
