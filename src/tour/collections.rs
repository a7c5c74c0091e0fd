//! Ordered-collection vignette

use std::io::Write;

use super::{TourError, Vignette};
use crate::collection::OrderedCollection;
use crate::value::ValueRecord;

/// Walks the collection API: growth, removal, reordering, bulk conditional
/// removal, and binary search over sorted content.
pub struct CollectionsVignette;

impl Vignette for CollectionsVignette {
    fn name(&self) -> &'static str {
        "collections"
    }

    fn title(&self) -> &'static str {
        "ordered collections"
    }

    fn run(
        &self,
        out: &mut dyn Write,
    ) -> Result<(), TourError> {
        let mut numbers: OrderedCollection<i64> = OrderedCollection::new();
        writeln!(out, "initial capacity: {}", numbers.capacity())?;

        numbers.add(1);
        numbers.add(2);
        numbers.add(3);
        numbers.add_all([4, 5, 6]);
        numbers.insert(0, 0);
        writeln!(out, "built: {}", numbers)?;

        numbers.remove(&2);
        numbers.remove_at(0);
        writeln!(out, "after remove(2) and remove_at(0): {}", numbers)?;

        numbers.clear();
        numbers.add(1);
        writeln!(out, "after clear and add(1): {}", numbers)?;
        writeln!(out, "contains(1): {}", numbers.contains(&1))?;

        numbers.sort();
        numbers.reverse();
        numbers.sort_by(|x, y| x.cmp(y));
        // Growth went through the doubling policy, so the backing store
        // still holds at least 8 slots.
        writeln!(out, "capacity after growth: {}", numbers.capacity())?;
        writeln!(out, "count: {}", numbers.len())?;
        for number in &numbers {
            writeln!(out, "{}", number)?;
        }

        // numbers.add("hello") would not compile: this collection only
        // accepts i64 elements. The same API works for any element type.
        let mut names: OrderedCollection<String> = OrderedCollection::new();
        names.add(String::from("Alice"));
        names.add(String::from("Bob"));
        names.add(String::from("Charlie"));
        writeln!(out, "names count: {}", names.len())?;
        for name in &names {
            writeln!(out, "{}", name)?;
        }

        let mut people = OrderedCollection::new();
        people.add(ValueRecord::new(30));
        people.add(ValueRecord::new(40));
        people.add(ValueRecord::new(50));
        for person in &people {
            writeln!(out, "{}", person.age)?;
        }

        // Bulk conditional removal in one pass instead of removing by index
        // inside a loop.
        let mut bulk = OrderedCollection::from(vec![1, 2, 3, 4, 5]);
        let removed = bulk.remove_all(|&x| x > 3);
        writeln!(out, "remove_all(> 3) removed {}: {}", removed, bulk)?;

        let mut sorted = OrderedCollection::from(vec![3, 1, 2]);
        sorted.sort();
        match sorted.binary_search(&3) {
            Ok(index) => writeln!(out, "binary_search(3): index {}", index)?,
            Err(_) => writeln!(out, "binary_search(3): not found")?,
        }
        match sorted.binary_search(&9) {
            Ok(index) => writeln!(out, "binary_search(9): index {}", index)?,
            Err(_) => writeln!(out, "binary_search(9): not found")?,
        }

        Ok(())
    }
}
