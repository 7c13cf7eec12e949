//! Signup form example - one batch over every field of a form
//!
//! Run with: cargo run --example signup_form

use rampart::prelude::*;

struct SignupForm {
    username: String,
    email: Option<String>,
    phone: Option<String>,
    age: i64,
    plan: String,
    referral_code: Option<String>,
}

fn rules(form: &SignupForm) -> Vec<BoxedValidator> {
    let contact = |value: &Option<String>| {
        from_fn({
            let value = value.clone();
            move || match &value {
                Some(v) => NotBlank::new(v.as_str()).validate(),
                None => Err(Failure::single("missing")),
            }
        })
    };

    validators![
        validate_str(&form.username)
            .with(NotBlank::default().message("username is required"))
            .with(Length::between(3, 24))
            .with(Exclusion::of(["admin", "root"]).message("username is reserved")),
        or(validators![contact(&form.email), contact(&form.phone)])
            .message("provide an email or a phone number"),
        InRange::new(form.age, 18, 130).left_message("you must be an adult"),
        Inclusion::new(form.plan.as_str(), ["free", "pro", "team"]),
        allow_none(form.referral_code.as_deref().map(|code| {
            Length::new(code, 8, 8).too_short_message("referral codes have 8 characters")
        })),
    ]
}

fn report(name: &str, form: &SignupForm) {
    match validate(&rules(form)) {
        Ok(()) => println!("{}: accepted", name),
        Err(BatchError::Invalid(errors)) => {
            println!("{}: rejected", name);
            for error in &errors {
                println!("  - {}", error);
            }
        }
        Err(err) => println!("{}: could not validate: {}", name, err),
    }
}

fn main() {
    println!("=== Signup form validation ===\n");

    let good = SignupForm {
        username: "ada".to_string(),
        email: Some("ada@example.com".to_string()),
        phone: None,
        age: 36,
        plan: "pro".to_string(),
        referral_code: None,
    };
    report("ada", &good);

    let bad = SignupForm {
        username: "root".to_string(),
        email: None,
        phone: Some("   ".to_string()),
        age: 15,
        plan: "gold".to_string(),
        referral_code: Some("abc".to_string()),
    };
    report("root", &bad);

    let blank = SignupForm {
        username: "  ".to_string(),
        ..good
    };
    report("blank", &blank);
}
