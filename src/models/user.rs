use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub balance: u64,           // reward points, never negative
    pub channels: Vec<String>,  // insertion order, duplicates allowed
}

impl User {
    pub fn new(username: String) -> Self {
        Self {
            username,
            balance: 0,
            channels: Vec::new(),
        }
    }
}
