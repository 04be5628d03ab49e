pub trait Animal {
    /// Generic animals have nothing to say.
    fn speak(&self) -> Option<String> {
        None
    }

    fn eat(&self) -> String {
        "The animal is eating.".to_string()
    }

    fn sleep(&self) -> String {
        "The animal is sleeping.".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GenericAnimal;

impl Animal for GenericAnimal {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lion {
    pub name: String,
}

impl Lion {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Animal for Lion {
    fn speak(&self) -> Option<String> {
        Some(format!("{} the lion roars", self.name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elephant {
    pub name: String,
}

impl Elephant {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Animal for Elephant {
    fn speak(&self) -> Option<String> {
        Some(format!("{} the elephant trumpets", self.name))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Dog;

impl Dog {
    pub fn bark(&self) -> String {
        "The dog is barking.".to_string()
    }
}

impl Animal for Dog {
    fn eat(&self) -> String {
        "The dog is eating.".to_string()
    }

    fn sleep(&self) -> String {
        "The dog is sleeping.".to_string()
    }
}
