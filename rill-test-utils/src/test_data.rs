// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Person {
    pub id: u32,
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(id: u32, name: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }

    /// Same person, one year older.
    pub fn aged(&self) -> Self {
        Self {
            age: self.age + 1,
            ..self.clone()
        }
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person[id={}, name={}, age={}]", self.id, self.name, self.age)
    }
}

pub fn person_alice() -> Person {
    Person::new(1, "Alice", 25)
}

pub fn person_bob() -> Person {
    Person::new(2, "Bob", 30)
}

pub fn person_charlie() -> Person {
    Person::new(3, "Charlie", 35)
}
