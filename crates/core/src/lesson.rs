//! # Lesson Module
//!
//! Chạy từng bài học và gom những dòng sẽ in ra console vào một `Transcript`.

use crate::account::BankAccount;
use crate::animal::{Animal, Dog, GenericAnimal};
use crate::config::LessonConfig;
use crate::error::{CoreError, CoreResult};
use crate::human::{American, Human, Japanese};
use crate::shape::{Circle, Rectangle, Shape, ShapeCalculator};
use crate::singleton::{Journal, Singleton};
use crate::vehicle::{Car, Vehicle};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Các bài học có sẵn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lesson {
    /// BankAccount - dữ liệu private, guard conditions
    Encapsulation,
    /// Animal / Dog - ghi đè phương thức
    Inheritance,
    /// Human, Shape - trait object
    Polymorphism,
    /// Vehicle / Car - phương thức trừu tượng
    Abstraction,
    /// Instance duy nhất
    Singleton,
}

impl Lesson {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lesson::Encapsulation => "encapsulation",
            Lesson::Inheritance => "inheritance",
            Lesson::Polymorphism => "polymorphism",
            Lesson::Abstraction => "abstraction",
            Lesson::Singleton => "singleton",
        }
    }

    /// Parse từ string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "encapsulation" => Some(Lesson::Encapsulation),
            "inheritance" => Some(Lesson::Inheritance),
            "polymorphism" => Some(Lesson::Polymorphism),
            "abstraction" => Some(Lesson::Abstraction),
            "singleton" => Some(Lesson::Singleton),
            _ => None,
        }
    }

    /// Parse, trả về lỗi nếu không tồn tại
    pub fn parse(s: &str) -> CoreResult<Self> {
        Self::from_str(s).ok_or_else(|| CoreError::UnknownLesson(s.to_string()))
    }

    /// Tất cả bài học theo thứ tự
    pub fn all() -> Vec<Lesson> {
        vec![
            Lesson::Encapsulation,
            Lesson::Inheritance,
            Lesson::Polymorphism,
            Lesson::Abstraction,
            Lesson::Singleton,
        ]
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Lesson::Encapsulation => "Bank account with a private balance and silent guards",
            Lesson::Inheritance => "Dog overrides the generic animal sound",
            Lesson::Polymorphism => "Greeters and shapes behind one trait",
            Lesson::Abstraction => "Car fills in the abstract vehicle operations",
            Lesson::Singleton => "One lazily created instance shared by the process",
        }
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kết quả chạy một bài học
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transcript {
    pub lesson: Lesson,
    pub lines: Vec<String>,
}

impl Transcript {
    fn new(lesson: Lesson) -> Self {
        Self {
            lesson,
            lines: Vec::new(),
        }
    }

    fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.lesson)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Chạy một bài học với config cho trước
pub fn run(lesson: Lesson, config: &LessonConfig) -> CoreResult<Transcript> {
    tracing::info!(%lesson, "Running lesson");

    let mut transcript = Transcript::new(lesson);
    match lesson {
        Lesson::Encapsulation => encapsulation(&mut transcript, config)?,
        Lesson::Inheritance => inheritance(&mut transcript, config),
        Lesson::Polymorphism => polymorphism(&mut transcript, config),
        Lesson::Abstraction => abstraction(&mut transcript, config),
        Lesson::Singleton => singleton(&mut transcript),
    }

    Journal::record(&format!("{} finished", lesson));
    Ok(transcript)
}

fn encapsulation(t: &mut Transcript, config: &LessonConfig) -> CoreResult<()> {
    let cfg = &config.account;
    let mut account = BankAccount::new(cfg.initial_balance)?;

    account.deposit(cfg.deposit);
    account.withdraw(cfg.withdraw);
    t.line(format!("Balance: {}", account.balance()));

    // Gọi qua method syntax và qua đường dẫn đầy đủ là như nhau
    BankAccount::deposit(&mut account, Decimal::from(100));
    t.line(format!(
        "Balance after BankAccount::deposit(&mut account, 100): {}",
        account.balance()
    ));
    account.deposit(Decimal::from(50));
    t.line(format!(
        "Balance after account.deposit(50): {}",
        account.balance()
    ));

    let before = account.balance();
    if let Some(overdraft) = before.checked_add(Decimal::ONE) {
        account.withdraw(overdraft);
    }
    account.withdraw(-Decimal::ONE);
    account.deposit(-Decimal::ONE);
    t.line(format!(
        "Invalid operations ignored, balance unchanged: {}",
        account.balance() == before
    ));

    let interest = BankAccount::calculate_interest(account.balance(), cfg.interest_rate)?;
    t.line(format!(
        "Interest at rate {}: {}",
        cfg.interest_rate, interest
    ));
    Ok(())
}

fn inheritance(t: &mut Transcript, config: &LessonConfig) {
    let animal = GenericAnimal::new("Animal");
    let dog = Dog::new(config.dog_name.as_str());

    t.line(animal.make_sound());
    t.line(dog.make_sound());
}

fn polymorphism(t: &mut Transcript, config: &LessonConfig) {
    let mut human: Box<dyn Human> = Box::new(Japanese::new(config.greeters.japanese.as_str()));
    t.line(human.say_hello());
    human = Box::new(American::new(config.greeters.american.as_str()));
    t.line(human.say_hello());

    let calculator = ShapeCalculator::new();
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle::new(config.shapes.radius)),
        Box::new(Rectangle::new(config.shapes.width, config.shapes.height)),
    ];
    for shape in &shapes {
        t.line(calculator.describe(shape.as_ref()));
    }
    t.line(format!("Total area: {:.2}", calculator.total_area(&shapes)));
}

fn abstraction(t: &mut Transcript, config: &LessonConfig) {
    let car = Car::new(config.car_brand.as_str());

    t.line(car.start());
    t.line(car.stop());
    t.line(car.display_brand());
}

fn singleton(t: &mut Transcript) {
    let s1 = Singleton::instance();
    let s2 = Singleton::instance();

    t.line(format!("s1 == s2: {}", std::ptr::eq(s1, s2)));
    t.line(format!("s1.id == s2.id: {}", s1.id() == s2.id()));
    t.line(s1.do_something());
}
