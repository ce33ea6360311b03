//! DCell addressing algebra: the bijection between linear host ids and
//! `(k+1)`-tuple coordinates, and the small set of pure functions the
//! recursive router builds on. No state; every function is parameterized
//! explicitly by `(k, n)` so that [`middle_link`](crate::router) can invoke
//! [`tuple_of`] at a smaller level than the top-level DCell.

/// `t[i]` (servers in a `DCell_i`) and `g[i]` (sub-`DCell_(i-1)`s per
/// `DCell_i`) for `i = 0..=k`, per the recurrence in the spec:
/// `t[0] = n`, `g[0] = 1`; for `i >= 1`: `g[i] = t[i-1] + 1`, `t[i] = g[i] * t[i-1]`.
pub fn t_g(k: u32, n: u64) -> (Vec<u64>, Vec<u64>) {
    let mut t = vec![n];
    let mut g = vec![1];
    for i in 1..=k as usize {
        let gi = t[i - 1] + 1;
        let ti = gi * t[i - 1];
        g.push(gi);
        t.push(ti);
    }
    (t, g)
}

/// Total hosts and switches (host-switches + mini switches) in a `DCell_k`.
pub fn counts(k: u32, n: u64) -> (u64, u64) {
    let (t, _) = t_g(k, n);
    let num_hosts = t[k as usize];
    let num_mini_switches = num_hosts / n;
    let num_host_switches = num_hosts;
    (num_hosts, num_host_switches + num_mini_switches)
}

/// The dpid of the mini switch serving the `DCell_0` that `host_id` lives in.
pub fn mini_dpid(host_id: u64, num_hosts: u64, n: u64) -> u64 {
    num_hosts + 1 + (host_id - 1) / n
}

/// Converts a 1-indexed host id in `[1, t[k]]` to its `(k+1)`-tuple
/// coordinate `[a_k, ..., a_0]` (most-significant digit first).
///
/// Builds `H[0..=k]` with `H[k] = n` and `H[i] = (H[i+1] + 1) * H[i+1]` for
/// `i < k` (so `H[i] == t[k - i]`), then peels off one digit per level:
/// `tuple[i] = h / H[i+1]`, `h %= H[i+1]` for `i = 0..k-1`, and the final
/// digit `tuple[k] = h % n`.
pub fn tuple_of(host_id: u64, k: u32, n: u64) -> Vec<u64> {
    let k = k as usize;
    let mut h_table = vec![0u64; k + 1];
    h_table[k] = n;
    for i in (0..k).rev() {
        h_table[i] = (h_table[i + 1] + 1) * h_table[i + 1];
    }

    let mut tuple = vec![0u64; k + 1];
    let mut h = host_id - 1;
    for i in 0..k {
        tuple[i] = h / h_table[i + 1];
        h %= h_table[i + 1];
    }
    tuple[k] = h % n;
    tuple
}

/// Inverse of [`tuple_of`]: converts a `(k+1)`-tuple back to its 1-indexed
/// host id. Walks the tuple from the last digit to the first, growing the
/// per-level base `n -> n * (n + 1)` as it goes, exactly mirroring the
/// original `host_id()` accumulation order (not a closed-form sum).
pub fn host_of(tuple: &[u64], n: u64) -> u64 {
    let k = tuple.len() - 1;
    let mut host_id = 0u64;
    let mut base = n;
    for i in (0..=k).rev() {
        if i == k {
            host_id += tuple[i];
        } else {
            host_id += tuple[i] * base;
            base *= base + 1;
        }
    }
    host_id + 1
}

/// Longest prefix on which `a[i] == b[i]`.
pub fn common_prefix(a: &[u64], b: &[u64]) -> Vec<u64> {
    a.iter()
        .zip(b.iter())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| *x)
        .collect()
}
