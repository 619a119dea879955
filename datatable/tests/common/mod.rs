#![allow(dead_code)]

use datatable::{CellValue, Column, TableRow, ValueKind};

/// A freelancer listing row used across the tests.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub rate: Option<i64>,
}

impl Person {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            rate: None,
        }
    }

    pub fn with_rate(mut self, rate: i64) -> Self {
        self.rate = Some(rate);
        self
    }
}

impl TableRow for Person {
    type Key = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn value(&self, column_id: &str) -> CellValue {
        match column_id {
            "id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            "rate" => self.rate.into(),
            _ => CellValue::Empty,
        }
    }
}

pub fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name"),
        Column::new("rate", "Hourly rate").kind(ValueKind::Number),
        Column::new("actions", "").not_sortable(),
    ]
}

/// Bob, Amy, Cid.
pub fn people() -> Vec<Person> {
    vec![
        Person::new("1", "Bob"),
        Person::new("2", "Amy"),
        Person::new("3", "Cid"),
    ]
}

/// `count` people with ids "0".."count" and names "P000".. in id order.
pub fn many(count: usize) -> Vec<Person> {
    (0..count)
        .map(|i| Person::new(&i.to_string(), &format!("P{:03}", i)).with_rate((i as i64 * 37) % 11))
        .collect()
}

pub fn names(rows: &[Person]) -> Vec<&str> {
    rows.iter().map(|p| p.name.as_str()).collect()
}

pub fn ids<'a>(rows: impl IntoIterator<Item = &'a Person>) -> Vec<String> {
    rows.into_iter().map(|p| p.id.clone()).collect()
}
