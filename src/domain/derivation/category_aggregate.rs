//! Grouping records into `{ name, count }` rows.

use std::collections::HashMap;

use serde::Serialize;

/// Count of records that fell into one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

impl CategoryCount {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Groups records by `categorizer`, emitting rows in first-seen order.
///
/// Rows are not sorted by count; ties keep the order in which their
/// category first appeared.
pub fn build_category_aggregate<T, F, K>(
    records: impl IntoIterator<Item = T>,
    categorizer: F,
) -> Vec<CategoryCount>
where
    F: Fn(&T) -> K,
    K: Into<String>,
{
    let mut rows: Vec<CategoryCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let name: String = categorizer(&record).into();
        match index.get(&name) {
            Some(&position) => rows[position].count += 1,
            None => {
                index.insert(name.clone(), rows.len());
                rows.push(CategoryCount::new(name, 1));
            }
        }
    }

    rows
}
