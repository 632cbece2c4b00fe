//! # Human Module
//!
//! Bài học đa hình: một interface, hai cách chào theo ngôn ngữ.

/// Bất kỳ ai có thể tự giới thiệu.
pub trait Human {
    fn name(&self) -> &str;
    fn say_hello(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Japanese {
    name: String,
}

impl Japanese {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Human for Japanese {
    fn name(&self) -> &str {
        &self.name
    }

    fn say_hello(&self) -> String {
        format!("こんにちは。私の名前は{}です。", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct American {
    name: String,
}

impl American {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Human for American {
    fn name(&self) -> &str {
        &self.name
    }

    fn say_hello(&self) -> String {
        format!("Hello. My name is {}.", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greetings() {
        assert_eq!(
            Japanese::new("太郎").say_hello(),
            "こんにちは。私の名前は太郎です。"
        );
        assert_eq!(American::new("John").say_hello(), "Hello. My name is John.");
    }

    #[test]
    fn test_rebinding_trait_object() {
        let mut human: Box<dyn Human> = Box::new(Japanese::new("Taro"));
        assert_eq!(human.name(), "Taro");

        human = Box::new(American::new("John"));
        assert_eq!(human.name(), "John");
        assert!(human.say_hello().starts_with("Hello."));
    }
}
