//! Mapping-to-sequence conversion.
//!
//! Output order follows the mapping's own iteration order, which is
//! unspecified for hashed mappings. Compare results as multisets.

use crate::sequence::Pair;

/// Produces one element per mapping entry by applying `function(key, value)`.
///
/// Accepts any borrowed mapping that iterates as `(&K, &V)`, such as
/// `&HashMap<K, V>` or `&BTreeMap<K, V>`.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use foldkit::aggregate::flatten_with;
///
/// let stock = BTreeMap::from([("apple", 3), ("pear", 5)]);
/// let lines = flatten_with(|fruit: &&str, count: &i32| format!("{fruit}: {count}"), &stock);
/// assert_eq!(lines, vec!["apple: 3", "pear: 5"]);
/// ```
pub fn flatten_with<'a, K, V, C, M, F>(mut function: F, mapping: M) -> Vec<C>
where
    K: 'a,
    V: 'a,
    M: IntoIterator<Item = (&'a K, &'a V)>,
    F: FnMut(&K, &V) -> C,
{
    mapping.into_iter().map(|(key, value)| function(key, value)).collect()
}

/// Converts every mapping entry into a [`Pair`] of cloned key and value.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use foldkit::aggregate::flatten;
/// use foldkit::sequence::Pair;
///
/// let ages = HashMap::from([("alice", 30)]);
/// assert_eq!(flatten(&ages), vec![Pair::new("alice", 30)]);
/// ```
pub fn flatten<'a, K, V, M>(mapping: M) -> Vec<Pair<K, V>>
where
    K: Clone + 'a,
    V: Clone + 'a,
    M: IntoIterator<Item = (&'a K, &'a V)>,
{
    flatten_with(|key: &K, value: &V| Pair::new(key.clone(), value.clone()), mapping)
}
