//! Named function shapes used across the pipeline API.
//!
//! Operations accept plain generic closures. These aliases name the boxed
//! forms for callers that pick a function at runtime or store it; a boxed
//! value satisfies the same bound, so `filter` takes a [`Predicate`],
//! `map` a [`Mapper`], `sorted_by`/`min_by`/`max_by` a [`Comparator`],
//! `reduce` a [`Reducer`], `peek` a [`Consumer`] and `generate` a
//! [`Supplier`].

use std::cmp::Ordering;

pub type Predicate<T> = Box<dyn FnMut(&T) -> bool>;
pub type Mapper<T, R> = Box<dyn FnMut(T) -> R>;
pub type Comparator<T> = Box<dyn FnMut(&T, &T) -> Ordering>;
pub type Reducer<T> = Box<dyn FnMut(T, T) -> T>;
pub type Consumer<T> = Box<dyn FnMut(&T)>;
pub type Supplier<T> = Box<dyn FnMut() -> T>;

/// Default three-way comparator: greater, less, otherwise equal.
///
/// Incomparable values (such as `NaN`) compare as equal.
pub fn natural_order<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    if a > b {
        Ordering::Greater
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_order() {
        assert_eq!(natural_order(&1, &2), Ordering::Less);
        assert_eq!(natural_order(&"b", &"a"), Ordering::Greater);
        assert_eq!(natural_order(&3.0, &3.0), Ordering::Equal);
        assert_eq!(natural_order(&f64::NAN, &1.0), Ordering::Equal);
    }

    #[test]
    fn test_boxed_shapes_are_callable() {
        let mut is_even: Predicate<i32> = Box::new(|x| x % 2 == 0);
        let mut double: Mapper<i32, i32> = Box::new(|x| x * 2);
        let mut add: Reducer<i32> = Box::new(|a, b| a + b);
        assert!(is_even(&4));
        assert_eq!(double(21), 42);
        assert_eq!(add(1, 2), 3);
    }
}
