//! Record fixtures.

use product_view::Record;

/// Twelve fruits, every title containing an "a" (Apple only as uppercase),
/// with distinct prices.
pub fn twelve_fruits() -> Vec<Record> {
    [
        ("Apple", 3.0),
        ("Banana", 1.5),
        ("Grape", 7.25),
        ("Papaya", 4.0),
        ("Mango", 2.75),
        ("Guava", 6.0),
        ("Avocado", 9.5),
        ("Apricot", 5.5),
        ("Pear", 0.5),
        ("Date", 8.0),
        ("Watermelon", 11.0),
        ("Orange", 1.0),
    ]
    .iter()
    .enumerate()
    .map(|(i, (title, price))| Record::new(i as u64 + 1, *title, *price))
    .collect()
}

/// Records whose prices collide, to observe tie order.
pub fn price_ties() -> Vec<Record> {
    vec![
        Record::new(1, "Delta", 2.0),
        Record::new(2, "alpha", 1.0),
        Record::new(3, "Charlie", 2.0),
        Record::new(4, "Bravo", 1.0),
        Record::new(5, "echo", 3.0),
    ]
}

/// `n` records titled "Item {i}" priced `i`.
pub fn numbered(n: u64) -> Vec<Record> {
    (1..=n)
        .map(|i| Record::new(i, format!("Item {}", i), i as f64))
        .collect()
}

pub fn ids(records: &[&Record]) -> Vec<u64> {
    records.iter().map(|r| r.id).collect()
}

pub fn titles<'a>(records: &[&'a Record]) -> Vec<&'a str> {
    records.iter().map(|r| r.title.as_str()).collect()
}
