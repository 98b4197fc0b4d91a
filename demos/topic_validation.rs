//! Topic Validation
//!
//! This example registers external validators on a record type and runs
//! them for new and persisted records.
//!
//! Key concepts:
//! - Validators built from forwarded options on every pass
//! - Phase-scoped registrations (create/update)
//! - `if`/`unless` guards
//! - Aggregated error reporting
//!
//! Run with: RUST_LOG=ratify=debug cargo run --example topic_validation

use ratify::core::{Condition, Phase, Record};
use ratify::registry::{RegistrationOptions, ValidatorRegistry};
use ratify::validator::{
    factory, ValidationContext, ValidationError, Validator, ValidatorFactory, ValidatorOptions,
};

struct Topic {
    id: Option<u64>,
    title: String,
    author_name: String,
    approved: bool,
}

impl Record for Topic {
    fn record_name(&self) -> &str {
        "Topic"
    }

    fn is_new_record(&self) -> bool {
        self.id.is_none()
    }
}

/// Adds an error when the configured field is blank.
struct PresenceValidator {
    field: String,
}

impl Validator<Topic> for PresenceValidator {
    fn validate(&self, ctx: &mut ValidationContext<'_, Topic>) -> Result<(), ValidationError> {
        let topic = ctx.record();
        let value = match self.field.as_str() {
            "title" => &topic.title,
            "author_name" => &topic.author_name,
            other => {
                return Err(ValidationError::ValidatorFailed {
                    validator: "PresenceValidator".to_string(),
                    reason: format!("unknown field '{other}'"),
                })
            }
        };
        if value.trim().is_empty() {
            ctx.add_error(self.field.clone(), "can't be blank");
        }
        Ok(())
    }
}

fn presence() -> ValidatorFactory<Topic> {
    factory(|options: &ValidatorOptions| {
        Ok(PresenceValidator {
            field: options.require_str("field")?.to_string(),
        })
    })
}

fn main() -> Result<(), ValidationError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Topic Validation Example ===\n");

    let mut registry = ValidatorRegistry::new();

    registry.register_one(
        "TitlePresence",
        presence(),
        RegistrationOptions::new().option("field", "title"),
    );
    registry.register_one(
        "AuthorPresence",
        presence(),
        RegistrationOptions::new()
            .on(Phase::Create)
            .option("field", "author_name"),
    );
    registry.register_fn(
        "ApprovedTopicsAreLocked",
        |ctx: &mut ValidationContext<'_, Topic>| {
            ctx.add_base_error("Approved topics can't be changed");
            Ok(())
        },
        RegistrationOptions::new()
            .on(Phase::Update)
            .when(Condition::new("approved", |t: &Topic| t.approved)),
    );

    println!("Registered validators: {:?}\n", registry.validator_names::<Topic>());

    let draft = Topic {
        id: None,
        title: String::new(),
        author_name: String::new(),
        approved: false,
    };
    let errors = registry.validate_record(&draft)?;
    println!("New topic valid? {}", errors.is_empty());
    for message in errors.full_messages() {
        println!("  - {message}");
    }

    let published = Topic {
        id: Some(7),
        title: "Pattern matching".to_string(),
        author_name: String::new(),
        approved: true,
    };
    let errors = registry.validate_record(&published)?;
    println!("\nPersisted approved topic valid? {}", errors.is_empty());
    for message in errors.full_messages() {
        println!("  - {message}");
    }

    println!("\nAs JSON: {}", serde_json::to_string(&errors).unwrap_or_default());

    println!("\n=== Example Complete ===");
    Ok(())
}
