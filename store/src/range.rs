//! Range helpers for prefix scans.

/// Smallest key strictly greater than every key starting with `prefix`.
///
/// Returns `None` when no such key exists (empty prefix or all `0xFF`), which
/// callers treat as an unbounded end.
pub fn prefix_end(prefix: &[u8]) -> Option<Vec<u8>> {
    let mut end = prefix.to_vec();
    while let Some(last) = end.pop() {
        if last < u8::MAX {
            end.push(last + 1);
            return Some(end);
        }
    }
    None
}

/// Whether `key` lies in the half-open range `[start, end)`.
pub fn in_range(key: &[u8], start: Option<&[u8]>, end: Option<&[u8]>) -> bool {
    start.map_or(true, |s| key >= s) && end.map_or(true, |e| key < e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_end_increments_last_byte() {
        assert_eq!(prefix_end(&[1, 2, 3]), Some(vec![1, 2, 4]));
    }

    #[test]
    fn test_prefix_end_carries_over_ff() {
        assert_eq!(prefix_end(&[1, 0xFF, 0xFF]), Some(vec![2]));
    }

    #[test]
    fn test_prefix_end_unbounded() {
        assert_eq!(prefix_end(&[]), None);
        assert_eq!(prefix_end(&[0xFF, 0xFF]), None);
    }

    #[test]
    fn test_in_range_is_half_open() {
        let (b, c): (&[u8], &[u8]) = (b"b", b"c");
        assert!(in_range(b"b", Some(b), Some(c)));
        assert!(!in_range(b"c", Some(b), Some(c)));
        assert!(in_range(b"zzz", None, None));
        assert!(!in_range(b"a", Some(b), None));
    }
}
