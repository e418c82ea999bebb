/// KMP failure function: `lps[i]` is the length of the longest proper
/// prefix of `s[..=i]` that is also its suffix.
pub fn failure_function<T: PartialEq>(s: &[T]) -> Vec<usize> {
    let mut lps = vec![0; s.len()];
    let mut len = 0;
    let mut i = 1;
    while i < s.len() {
        if s[i] == s[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len > 0 {
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }
    lps
}

pub fn smallest_period<T: PartialEq>(s: &[T]) -> usize {
    match failure_function(s).last() {
        Some(&border) => s.len() - border,
        None => 0,
    }
}

/// The shortest prefix that regenerates `s` by repetition, provided it
/// occurs at least twice; otherwise `s` itself.
///
/// A trailing partial copy is allowed, so `abcab` has period 3 but is
/// still returned whole because 3 exceeds half its length.
pub fn smallest_repeating_unit<T: PartialEq>(s: &[T]) -> &[T] {
    let n = s.len();
    if n < 2 {
        return s;
    }
    let period = smallest_period(s);
    if period <= n / 2 {
        &s[..period]
    } else {
        s
    }
}

pub fn reduce_str(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    smallest_repeating_unit(&chars).iter().collect()
}
