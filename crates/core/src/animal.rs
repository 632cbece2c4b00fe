//! # Animal Module
//!
//! Bài học kế thừa: trait có phương thức mặc định, và một kiểu ghi đè nó.

use std::fmt;

/// Hành vi chung của mọi con vật.
pub trait Animal {
    fn name(&self) -> &str;

    /// Tiếng kêu chung. Kiểu cụ thể có thể ghi đè.
    fn make_sound(&self) -> String {
        "Some generic animal sound".to_string()
    }
}

/// Con vật giữ nguyên tiếng kêu mặc định.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericAnimal {
    name: String,
}

impl GenericAnimal {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Animal for GenericAnimal {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    name: String,
}

impl Dog {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Animal for Dog {
    fn name(&self) -> &str {
        &self.name
    }

    fn make_sound(&self) -> String {
        format!("{} barks: woof woof", self.name)
    }
}

impl fmt::Display for Dog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dog({})", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sound() {
        let animal = GenericAnimal::new("Generic");
        assert_eq!(animal.name(), "Generic");
        assert_eq!(animal.make_sound(), "Some generic animal sound");
    }

    #[test]
    fn test_dog_overrides_sound() {
        let dog = Dog::new("Pochi");
        assert_eq!(dog.make_sound(), "Pochi barks: woof woof");
        assert_eq!(dog.to_string(), "Dog(Pochi)");
    }

    #[test]
    fn test_dispatch_through_trait_object() {
        let animals: Vec<Box<dyn Animal>> =
            vec![Box::new(GenericAnimal::new("Cat")), Box::new(Dog::new("Rex"))];

        let sounds: Vec<String> = animals.iter().map(|a| a.make_sound()).collect();
        assert_eq!(
            sounds,
            vec!["Some generic animal sound", "Rex barks: woof woof"]
        );
    }
}
