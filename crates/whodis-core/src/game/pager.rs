//! Roster pagination.

use whodis_types::person::Person;

/// One fixed-size window into the roster.
///
/// Returns the slice starting at `page_index * size` and whether further
/// pages remain. A past-the-end page is an empty window with no more
/// pages, not an error.
pub fn page(roster: &[Person], page_index: usize, size: usize) -> (&[Person], bool) {
    let start = page_index.saturating_mul(size);
    if start >= roster.len() {
        return (&[], false);
    }
    let end = (start + size).min(roster.len());
    (&roster[start..end], end < roster.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(n: usize) -> Vec<Person> {
        (0..n).map(|i| Person::new(format!("P{i:03}"))).collect()
    }

    #[test]
    fn test_pages_partition_the_roster() {
        let r = roster(120);
        let mut collected = Vec::new();
        let mut index = 0;
        loop {
            let (window, has_more) = page(&r, index, 50);
            assert!(window.len() <= 50);
            collected.extend_from_slice(window);
            if !has_more {
                break;
            }
            index += 1;
        }
        assert_eq!(collected, r);
    }

    #[test]
    fn test_last_page_is_short_when_not_divisible() {
        let r = roster(120);
        let (window, has_more) = page(&r, 2, 50);
        assert_eq!(window.len(), 20);
        assert!(!has_more);
    }

    #[test]
    fn test_evenly_divisible_roster_has_no_phantom_page() {
        let r = roster(100);
        let (window, has_more) = page(&r, 1, 50);
        assert_eq!(window.len(), 50);
        assert!(!has_more);

        let (window, has_more) = page(&r, 2, 50);
        assert!(window.is_empty());
        assert!(!has_more);
    }

    #[test]
    fn test_past_the_end_is_empty() {
        let r = roster(10);
        let (window, has_more) = page(&r, 5, 50);
        assert!(window.is_empty());
        assert!(!has_more);
    }

    #[test]
    fn test_empty_roster() {
        let (window, has_more) = page(&[], 0, 50);
        assert!(window.is_empty());
        assert!(!has_more);
    }
}
