//! Rows used by the sample suites.

use spanner_harness_core::{
    stmt::{Mutation, Row, Value},
    Result,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub category: String,
}

impl User {
    pub const TABLE: &'static str = "Users";
    pub const COLUMNS: [&'static str; 3] = ["ID", "Name", "Age"];

    pub fn new(id: i64, name: &str, age: i64) -> User {
        User {
            id,
            name: name.to_string(),
            age,
        }
    }

    pub fn samples() -> Vec<User> {
        vec![
            User::new(0, "Taro", 25),
            User::new(1, "Jiro", 41),
            User::new(2, "Hanako", 28),
        ]
    }

    pub fn insert_or_update(&self) -> Mutation {
        Mutation::insert_or_update(
            User::TABLE,
            User::COLUMNS,
            [
                Value::from(self.id),
                Value::from(self.name.as_str()),
                Value::from(self.age),
            ],
        )
    }

    pub fn from_row(row: Row) -> Result<User> {
        Ok(User {
            id: row.get(0)?,
            name: row.get(1)?,
            age: row.get(2)?,
        })
    }
}

impl Item {
    pub const TABLE: &'static str = "Items";
    pub const COLUMNS: [&'static str; 3] = ["ID", "Name", "Category"];

    pub fn new(id: i64, name: &str, category: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            category: category.to_string(),
        }
    }

    pub fn samples() -> Vec<Item> {
        vec![
            Item::new(0, "Orange", "Fruit"),
            Item::new(1, "Grape", "Fruit"),
            Item::new(2, "Chair", "Furniture"),
        ]
    }

    pub fn insert_or_update(&self) -> Mutation {
        Mutation::insert_or_update(
            Item::TABLE,
            Item::COLUMNS,
            [
                Value::from(self.id),
                Value::from(self.name.as_str()),
                Value::from(self.category.as_str()),
            ],
        )
    }

    pub fn from_row(row: Row) -> Result<Item> {
        Ok(Item {
            id: row.get(0)?,
            name: row.get(1)?,
            category: row.get(2)?,
        })
    }
}
