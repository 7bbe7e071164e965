// Normalized Levenshtein similarity over token-joined strings.
//
// Tokens are concatenated without a separator, then compared character by
// character (Unicode scalar values, so one CJK ideograph is one edit).
// Cost is O(len_a * len_b) time; memory is two rows of the DP table. There
// is no cap on input length, so very large documents are the caller's
// capacity problem.

/// Minimum number of single-character insertions, deletions or
/// substitutions turning `a` into `b`.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // prev[j] = dp[i-1][j], curr[j] = dp[i][j]
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            curr[j] = if a[i - 1] == b[j - 1] {
                prev[j - 1]
            } else {
                1 + prev[j].min(curr[j - 1]).min(prev[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// `1 - distance / max_len` for two strings. Both empty scores 1.0.
pub fn string_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein_distance(a, b) as f64 / max_len as f64
}

/// Levenshtein similarity between two token sequences, compared as their
/// separator-free concatenations.
pub fn levenshtein_similarity<S: AsRef<str>>(tokens_a: &[S], tokens_b: &[S]) -> f64 {
    string_similarity(&join(tokens_a), &join(tokens_b))
}

fn join<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens.iter().map(|t| t.as_ref()).collect()
}
