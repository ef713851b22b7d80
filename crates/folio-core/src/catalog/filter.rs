//! Generic keep-then-sort over any list.

use super::SortOrder;

/// Keeps the items matching `keep` and stable-sorts them by `key` under `order`.
///
/// Items with equal keys stay in input order. Nothing is deduplicated.
pub fn filter_and_sort<T, P, K>(
    items: impl IntoIterator<Item = T>,
    mut keep: P,
    key: K,
    order: SortOrder,
) -> Vec<T>
where
    P: FnMut(&T) -> bool,
    K: Fn(&T) -> &str,
{
    let mut kept: Vec<T> = items.into_iter().filter(|item| keep(item)).collect();
    let mut collation = order.collation();
    kept.sort_by(|a, b| collation.compare(key(a), key(b)));
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_and_sorts() {
        let words = vec!["pear", "Apple", "fig", "banana"];
        let out = filter_and_sort(words, |w| w.len() > 3, |w| *w, SortOrder::Locale);
        assert_eq!(out, vec!["Apple", "banana", "pear"]);
    }

    #[test]
    fn ordinal_order() {
        let words = vec!["pear", "Apple", "banana"];
        let out = filter_and_sort(words, |_| true, |w| *w, SortOrder::Ordinal);
        assert_eq!(out, vec!["Apple", "banana", "pear"]);
        let words = vec!["b", "B", "a"];
        let out = filter_and_sort(words, |_| true, |w| *w, SortOrder::Ordinal);
        assert_eq!(out, vec!["B", "a", "b"]);
    }

    #[test]
    fn sort_is_stable_on_equal_keys() {
        let items = vec![("Git", 1), ("Java", 2), ("Git", 3), ("Git", 4)];
        let out = filter_and_sort(items, |_| true, |item| item.0, SortOrder::Locale);
        assert_eq!(out, vec![("Git", 1), ("Git", 3), ("Git", 4), ("Java", 2)]);
    }

    #[test]
    fn accented_keys_sort_with_their_base_letter() {
        let words = vec!["zeta", "Élan", "Ångström", "Beta"];
        let out = filter_and_sort(words, |_| true, |w| *w, SortOrder::Locale);
        assert_eq!(out, vec!["Ångström", "Beta", "Élan", "zeta"]);
    }

    #[test]
    fn empty_input() {
        let out = filter_and_sort(Vec::<&str>::new(), |_| true, |w| *w, SortOrder::Locale);
        assert!(out.is_empty());
    }
}
