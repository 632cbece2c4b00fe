//! Integration tests: config file -> lesson runner -> transcript

use std::io::Write;

use rust_decimal_macros::dec;

use primer_core::{
    run, BankAccount, ConfigLoader, Journal, Lesson, LessonConfig, Singleton, Transcript,
};

fn run_all(config: &LessonConfig) -> Vec<Transcript> {
    Lesson::all()
        .into_iter()
        .map(|lesson| run(lesson, config).unwrap())
        .collect()
}

#[test]
fn test_all_lessons_with_defaults() {
    let transcripts = run_all(&LessonConfig::default());
    assert_eq!(transcripts.len(), 5);

    let lines = |lesson: Lesson| -> Vec<String> {
        transcripts
            .iter()
            .find(|t| t.lesson == lesson)
            .map(|t| t.lines.clone())
            .unwrap()
    };

    assert_eq!(lines(Lesson::Encapsulation)[0], "Balance: 1300");
    assert_eq!(
        lines(Lesson::Inheritance),
        vec!["Some generic animal sound", "Pochi barks: woof woof"]
    );
    assert_eq!(
        lines(Lesson::Polymorphism),
        vec![
            "こんにちは。私の名前はTaroです。",
            "Hello. My name is John.",
            "Area of circle: 78.54",
            "Area of rectangle: 24.00",
            "Total area: 102.54",
        ]
    );
    assert_eq!(
        lines(Lesson::Abstraction),
        vec![
            "Toyota car started its engine",
            "Toyota car stopped",
            "Brand: Toyota",
        ]
    );
    assert_eq!(
        lines(Lesson::Singleton),
        vec![
            "s1 == s2: true",
            "s1.id == s2.id: true",
            "Singleton method was called",
        ]
    );
}

#[test]
fn test_lessons_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
dog_name = "Hachi"
car_brand = "Subaru"

[account]
initial_balance = "50"
deposit = "-20"
withdraw = "80"

[greeters]
american = "Ada"
"#
    )
    .unwrap();

    let config = ConfigLoader::load_file(file.path()).unwrap();

    // deposit âm và withdraw vượt số dư đều bị bỏ qua
    let t = run(Lesson::Encapsulation, &config).unwrap();
    assert_eq!(t.lines[0], "Balance: 50");

    let t = run(Lesson::Inheritance, &config).unwrap();
    assert_eq!(t.lines[1], "Hachi barks: woof woof");

    let t = run(Lesson::Polymorphism, &config).unwrap();
    assert_eq!(t.lines[1], "Hello. My name is Ada.");

    let t = run(Lesson::Abstraction, &config).unwrap();
    assert_eq!(t.lines[2], "Brand: Subaru");
}

#[test]
fn test_runs_are_journaled() {
    run(Lesson::Abstraction, &LessonConfig::default()).unwrap();
    assert!(Journal::entries()
        .iter()
        .any(|e| e == "abstraction finished"));
}

#[test]
fn test_transcript_json() {
    let t = run(Lesson::Inheritance, &LessonConfig::default()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&t.to_json().unwrap()).unwrap();

    assert_eq!(json["lesson"], "inheritance");
    assert_eq!(json["lines"][1], "Pochi barks: woof woof");
}

#[test]
fn test_singleton_identity_survives_lesson_runs() {
    let before = Singleton::instance().id();
    run(Lesson::Singleton, &LessonConfig::default()).unwrap();
    assert_eq!(Singleton::instance().id(), before);
}

#[test]
fn test_balance_never_negative() {
    let mut account = BankAccount::new(dec!(10)).unwrap();
    for amount in [dec!(3), dec!(-4), dec!(20), dec!(7), dec!(0.5), dec!(1)] {
        account.withdraw(amount);
        account.deposit(amount - dec!(5));
        assert!(account.balance() >= dec!(0));
    }
}
