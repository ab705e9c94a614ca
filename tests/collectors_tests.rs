use downstream::{BaseStream, Collectors, Downstream, Drain, StreamError};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    key: &'static str,
    value: i32,
}

fn entries() -> Vec<Entry> {
    vec![Entry { key: "a", value: 1 }, Entry { key: "a", value: 2 }]
}

#[test]
fn test_to_vec_aliases_preserve_order() {
    let source = vec![3, 1, 2];
    assert_eq!(Downstream::of(source.clone()).collect(Collectors::to_vec()).unwrap(), source);
    assert_eq!(Downstream::of(source.clone()).collect(Collectors::to_array()).unwrap(), source);
    assert_eq!(Downstream::of(source.clone()).collect(Collectors::to_list()).unwrap(), source);
}

#[test]
fn test_joining() {
    let joined = Downstream::of(vec!["a", "b", "c"]).collect(Collectors::joining(", ")).unwrap();
    assert_eq!(joined, "a, b, c");

    let empty = Downstream::of(Vec::<String>::new()).collect(Collectors::joining(",")).unwrap();
    assert_eq!(empty, "");

    let single = Downstream::of(vec![42]).collect(Collectors::joining("-")).unwrap();
    assert_eq!(single, "42");
}

#[test]
fn test_joining_wraps_each_element() {
    let joined = Downstream::of(vec![1, 2, 3])
        .collect(Collectors::joining_with("|", "<", ">"))
        .unwrap();
    assert_eq!(joined, "<1>|<2>|<3>");
}

#[test]
fn test_to_map_without_merge_rejects_duplicates() {
    let err = Downstream::of(entries())
        .collect(Collectors::to_map(|e: &Entry| e.key, |e: Entry| e.value))
        .unwrap_err();
    assert_eq!(err, StreamError::DuplicateKey { key: "\"a\"".to_string() });
}

#[test]
fn test_to_map_with_merge_combines_values() {
    let map = Downstream::of(entries())
        .collect(Collectors::to_map_merging(|e: &Entry| e.key, |e: Entry| e.value, |x: i32, y: i32| x + y))
        .unwrap();
    assert_eq!(map, HashMap::from([("a", 3)]));
}

#[test]
fn test_to_map_merge_receives_new_then_existing() {
    let map = Downstream::of(vec![("k", "first"), ("k", "second")])
        .collect(Collectors::to_map_merging(
            |pair: &(&'static str, &'static str)| pair.0,
            |pair: (&'static str, &'static str)| pair.1.to_string(),
            |new: String, existing: String| format!("{}+{}", new, existing),
        ))
        .unwrap();
    assert_eq!(map["k"], "second+first");
}

#[test]
fn test_to_map_unique_keys() {
    let map = Downstream::of(vec!["apple", "kiwi"])
        .collect(Collectors::to_map(|s: &&str| s.len(), |s: &str| s.to_uppercase()))
        .unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map[&5], "APPLE");
    assert_eq!(map[&4], "KIWI");
}

#[test]
fn test_to_map_by_key_keeps_whole_element() {
    let map = Downstream::of(vec![Entry { key: "a", value: 1 }, Entry { key: "b", value: 2 }])
        .collect(Collectors::to_map_by_key(|e: &Entry| e.key))
        .unwrap();
    assert_eq!(map["a"], Entry { key: "a", value: 1 });
    assert_eq!(map["b"], Entry { key: "b", value: 2 });

    let err = Downstream::of(entries())
        .collect(Collectors::to_map_by_key(|e: &Entry| e.key))
        .unwrap_err();
    assert!(matches!(err, StreamError::DuplicateKey { .. }));
}

#[test]
fn test_grouping_by_preserves_order_within_groups() {
    let groups = Downstream::range(1, 10)
        .collect(Collectors::grouping_by(|n: &i64| n % 3))
        .unwrap();
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[&0], vec![3, 6, 9]);
    assert_eq!(groups[&1], vec![1, 4, 7]);
    assert_eq!(groups[&2], vec![2, 5, 8]);
}

#[test]
fn test_from_fn_collector_sees_drained_sequence() {
    let (evens, odds) = Downstream::of(1..=7)
        .collect(Collectors::from_fn(|source: Drain<'_, i32>| {
            source.fold((0, 0), |(e, o), n| if n % 2 == 0 { (e + 1, o) } else { (e, o + 1) })
        }))
        .unwrap();
    assert_eq!((evens, odds), (3, 4));
}

#[test]
fn test_collector_bounded_by_limit_on_infinite_source() {
    let firsts = Downstream::iterate(1i64, |n| n + 1)
        .limit(3)
        .unwrap()
        .collect(Collectors::joining(" "))
        .unwrap();
    assert_eq!(firsts, "1 2 3");
}
