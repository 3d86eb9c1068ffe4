//! Nearest-name matching against the gazetteer.
//!
//! Used only after an exact case-insensitive lookup has missed.

use crate::domain::entities::City;

/// Levenshtein edit distance over Unicode scalar values.
///
/// Runs in `O(len(a) * len(b))` time with a single row of `O(len(b))` memory.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    if b_chars.is_empty() {
        return a.chars().count();
    }

    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, cb) in b_chars.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b_chars.len()]
}

/// Returns the record closest to `target`.
///
/// The score of a record is the distance to its native name plus the distance
/// to its ASCII name. The lowest score wins; on ties the earliest record wins.
/// Records with an empty native or ASCII name are never considered.
///
/// # Examples
///
/// ```ignore
/// let best = find_most_similar("Lvov", &cities);
/// assert_eq!(best.unwrap().city_ascii, "Lviv");
/// ```
pub fn find_most_similar<'a>(target: &str, cities: &'a [City]) -> Option<&'a City> {
    let mut best: Option<(&City, usize)> = None;

    for city in cities {
        if city.city.is_empty() || city.city_ascii.is_empty() {
            continue;
        }

        let score = levenshtein(&city.city, target) + levenshtein(&city.city_ascii, target);

        if best.is_none_or(|(_, min)| score < min) {
            best = Some((city, score));
        }
    }

    best.map(|(city, _)| city)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(id: i64, name: &str, ascii: &str) -> City {
        City::new(
            id,
            name.to_string(),
            ascii.to_string(),
            0.0,
            0.0,
            "Country".to_string(),
            String::new(),
            None,
        )
    }

    #[test]
    fn test_levenshtein_basic() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("Kyiv", "Kyiv"), 0);
        assert_eq!(levenshtein("Kiev", "Kyiv"), 2);
    }

    #[test]
    fn test_levenshtein_counts_code_points() {
        // One substitution, even though 'ü' is two bytes in UTF-8.
        assert_eq!(levenshtein("Zurich", "Zürich"), 1);
        assert_eq!(levenshtein("Київ", "Киів"), 1);
    }

    #[test]
    fn test_find_most_similar_picks_minimum_sum() {
        let cities = vec![
            city(1, "Lisbon", "Lisbon"),
            city(2, "Lviv", "Lviv"),
            city(3, "London", "London"),
        ];

        let found = find_most_similar("Lvov", &cities).unwrap();
        assert_eq!(found.id, 2);
    }

    #[test]
    fn test_find_most_similar_uses_both_fields() {
        // "Zürich" vs target "Zurich": 1 + 0 = 1; "Zug": 4 + 4 = 8.
        let cities = vec![city(1, "Zug", "Zug"), city(2, "Zürich", "Zurich")];
        assert_eq!(find_most_similar("Zurich", &cities).unwrap().id, 2);
    }

    #[test]
    fn test_find_most_similar_first_wins_ties() {
        let cities = vec![city(10, "Bath", "Bath"), city(11, "Bati", "Bati")];
        // Both are at distance 1 from "Batx" on each field.
        assert_eq!(find_most_similar("Batx", &cities).unwrap().id, 10);

        let reversed = vec![city(11, "Bati", "Bati"), city(10, "Bath", "Bath")];
        assert_eq!(find_most_similar("Batx", &reversed).unwrap().id, 11);
    }

    #[test]
    fn test_find_most_similar_skips_empty_names() {
        let cities = vec![
            city(1, "", "Paris"),
            city(2, "Paris", ""),
            city(3, "Parma", "Parma"),
        ];
        // Records 1 and 2 would score lower but are never eligible.
        assert_eq!(find_most_similar("Paris", &cities).unwrap().id, 3);

        let only_empty = vec![city(1, "", ""), city(2, "", "X")];
        assert!(find_most_similar("", &only_empty).is_none());
    }

    #[test]
    fn test_find_most_similar_empty_gazetteer() {
        assert!(find_most_similar("Kyiv", &[]).is_none());
    }
}
