//! Tests for OrderedCollection

use crate::collection::OrderedCollection;

#[test]
fn test_spec_scenario_build_remove_clear() {
    let mut numbers = OrderedCollection::new();
    numbers.add(1);
    numbers.add(2);
    numbers.add(3);
    numbers.add_all([4, 5, 6]);
    assert!(numbers.insert(0, 0));
    assert_eq!(numbers.as_slice(), &[0, 1, 2, 3, 4, 5, 6]);

    assert!(numbers.remove(&2));
    assert_eq!(numbers.remove_at(0), Some(0));
    assert_eq!(numbers.as_slice(), &[1, 3, 4, 5, 6]);

    numbers.clear();
    numbers.add(1);
    assert_eq!(numbers.as_slice(), &[1]);
    assert!(numbers.contains(&1));
}

#[test]
fn test_capacity_grows_past_eight() {
    let mut numbers = OrderedCollection::new();
    assert_eq!(numbers.capacity(), 0);

    for i in 0..6 {
        numbers.add(i);
    }
    numbers.insert(0, -1);
    // Seven elements pushed through the doubling policy.
    assert!(numbers.capacity() >= 8);

    numbers.clear();
    numbers.add(1);
    // Clearing keeps the allocation.
    assert!(numbers.capacity() >= 8);
    assert_eq!(numbers.len(), 1);
}

#[test]
fn test_with_capacity() {
    let numbers: OrderedCollection<i64> = OrderedCollection::with_capacity(16);
    assert!(numbers.capacity() >= 16);
    assert!(numbers.is_empty());
}

#[test]
fn test_insert_out_of_range_is_rejected() {
    let mut numbers = OrderedCollection::from(vec![1, 2]);
    assert!(!numbers.insert(5, 99));
    assert_eq!(numbers.as_slice(), &[1, 2]);

    // Insert at len() is an append.
    assert!(numbers.insert(2, 3));
    assert_eq!(numbers.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_remove_first_occurrence_only() {
    let mut numbers = OrderedCollection::from(vec![1, 2, 2, 3]);
    assert!(numbers.remove(&2));
    assert_eq!(numbers.as_slice(), &[1, 2, 3]);
    assert!(!numbers.remove(&9));
}

#[test]
fn test_remove_at_out_of_range() {
    let mut numbers = OrderedCollection::from(vec![1]);
    assert_eq!(numbers.remove_at(3), None);
    assert_eq!(numbers.remove_at(0), Some(1));
    assert!(numbers.is_empty());
}

#[test]
fn test_remove_all_predicate() {
    let mut numbers = OrderedCollection::from(vec![1, 2, 3, 4, 5]);
    let removed = numbers.remove_all(|&x| x > 3);

    assert_eq!(removed, 2);
    assert_eq!(numbers.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_remove_all_no_match() {
    let mut numbers = OrderedCollection::from(vec![1, 2, 3]);
    assert_eq!(numbers.remove_all(|&x| x > 10), 0);
    assert_eq!(numbers.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_sort_reverse_and_comparator() {
    let mut numbers = OrderedCollection::from(vec![3, 1, 2]);

    numbers.sort();
    assert_eq!(numbers.as_slice(), &[1, 2, 3]);

    numbers.reverse();
    assert_eq!(numbers.as_slice(), &[3, 2, 1]);

    numbers.sort_by(|a, b| a.cmp(b));
    assert_eq!(numbers.as_slice(), &[1, 2, 3]);

    numbers.sort_by(|a, b| b.cmp(a));
    assert_eq!(numbers.as_slice(), &[3, 2, 1]);
}

#[test]
fn test_binary_search_hit_and_miss() {
    let sorted = OrderedCollection::from(vec![1, 2, 3]);

    assert_eq!(sorted.binary_search(&3), Ok(2));
    assert_eq!(sorted.binary_search(&9), Err(3));
    assert!(sorted.binary_search(&9).is_err());
}

#[test]
fn test_string_elements() {
    let mut names = OrderedCollection::new();
    names.add(String::from("Alice"));
    names.add(String::from("Bob"));
    names.add(String::from("Charlie"));

    assert_eq!(names.len(), 3);
    assert!(names.contains(&String::from("Bob")));
}

#[test]
fn test_insertion_order_preserved() {
    let mut numbers = OrderedCollection::new();
    numbers.add_all([5, 1, 4]);
    let seen: Vec<i64> = numbers.iter().copied().collect();
    assert_eq!(seen, vec![5, 1, 4]);
}

#[test]
fn test_display() {
    let numbers = OrderedCollection::from(vec![1, 2, 3]);
    assert_eq!(numbers.to_string(), "[1, 2, 3]");

    let empty: OrderedCollection<i64> = OrderedCollection::new();
    assert_eq!(empty.to_string(), "[]");
}

#[test]
fn test_from_iterator_and_into_iterator() {
    let numbers: OrderedCollection<i64> = (1..=3).collect();
    assert_eq!(numbers.as_slice(), &[1, 2, 3]);

    let doubled: Vec<i64> = numbers.into_iter().map(|x| x * 2).collect();
    assert_eq!(doubled, vec![2, 4, 6]);
}

#[test]
fn test_struct_elements() {
    use crate::value::ValueRecord;

    let mut people = OrderedCollection::new();
    people.add(ValueRecord::new(30));
    people.add(ValueRecord::new(40));
    people.add(ValueRecord::new(50));

    let ages: Vec<i64> = people.iter().map(|p| p.age).collect();
    assert_eq!(ages, vec![30, 40, 50]);
}
