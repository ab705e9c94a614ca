use downstream::{BaseStream, Collectors, Downstream};
use quickcheck::{quickcheck, TestResult};

quickcheck! {
    fn prop_limit_yields_prefix(source: Vec<i32>, n: u8) -> bool {
        let n = n as usize;
        let limited = Downstream::of(source.clone())
            .limit(n)
            .unwrap()
            .collect(Collectors::to_vec())
            .unwrap();
        limited == source[..n.min(source.len())]
    }

    fn prop_skip_then_limit_is_a_window(source: Vec<i32>, n: u8, m: u8) -> bool {
        let (n, m) = (n as usize, m as usize);
        let window = Downstream::of(source.clone())
            .skip(n)
            .unwrap()
            .limit(m)
            .unwrap()
            .collect(Collectors::to_vec())
            .unwrap();
        let expected: Vec<i32> = source.iter().skip(n).take(m).copied().collect();
        let expected_len = m.min(source.len().saturating_sub(n));
        window == expected && window.len() == expected_len
    }

    fn prop_range_matches_half_open_interval(start: i16, len: u8) -> bool {
        let start = start as i64;
        let end = start + len as i64;
        let values = Downstream::range(start, end).collect(Collectors::to_vec()).unwrap();
        let closed = Downstream::range_closed(start, end).collect(Collectors::to_vec()).unwrap();
        values == (start..end).collect::<Vec<_>>() && closed == (start..=end).collect::<Vec<_>>()
    }

    fn prop_distinct_matches_hashed(source: Vec<u8>) -> bool {
        let linear = Downstream::of(source.clone())
            .distinct()
            .unwrap()
            .collect(Collectors::to_vec())
            .unwrap();
        let hashed = Downstream::of(source)
            .distinct_hashed()
            .unwrap()
            .collect(Collectors::to_vec())
            .unwrap();
        linear == hashed
    }

    fn prop_concat_preserves_both_sides(a: Vec<i32>, b: Vec<i32>) -> bool {
        let joined = Downstream::of(a.clone())
            .concat(Downstream::of(b.clone()))
            .unwrap()
            .collect(Collectors::to_vec())
            .unwrap();
        joined == [a, b].concat()
    }

    fn prop_sorted_agrees_with_vec_sort(source: Vec<i32>) -> bool {
        let mut expected = source.clone();
        expected.sort();
        Downstream::of(source).sorted().unwrap().collect(Collectors::to_vec()).unwrap() == expected
    }

    fn prop_average_is_mean(source: Vec<i32>) -> TestResult {
        if source.is_empty() {
            return TestResult::discard();
        }
        let numbers: Vec<i64> = source.iter().map(|n| *n as i64).collect();
        let expected = numbers.iter().sum::<i64>() as f64 / numbers.len() as f64;
        let average = Downstream::number_stream(numbers).average().unwrap().get().unwrap();
        TestResult::from_bool((average - expected).abs() < 1e-9)
    }
}
