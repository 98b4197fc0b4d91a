//! Integration tests for registering external validators on a record type.

use ratify::core::{Condition, Phase, Record};
use ratify::registry::{RegistrationOptions, ValidatorRegistry};
use ratify::validator::{
    factory, ValidationContext, ValidationError, Validator, ValidatorFactory, ValidatorOptions,
};
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

const ERROR_MESSAGE: &str = "Validation error from validator";
const OTHER_ERROR_MESSAGE: &str = "Validation error from other validator";

#[derive(Debug, Default)]
struct Topic {
    id: Option<u64>,
    title: String,
}

impl Record for Topic {
    fn is_new_record(&self) -> bool {
        self.id.is_none()
    }
}

struct ValidatorThatAddsErrors;

impl Validator<Topic> for ValidatorThatAddsErrors {
    fn validate(&self, ctx: &mut ValidationContext<'_, Topic>) -> Result<(), ValidationError> {
        ctx.add_base_error(ERROR_MESSAGE);
        Ok(())
    }
}

struct OtherValidatorThatAddsErrors;

impl Validator<Topic> for OtherValidatorThatAddsErrors {
    fn validate(&self, ctx: &mut ValidationContext<'_, Topic>) -> Result<(), ValidationError> {
        ctx.add_base_error(OTHER_ERROR_MESSAGE);
        Ok(())
    }
}

struct ValidatorThatDoesNotAddErrors;

impl Validator<Topic> for ValidatorThatDoesNotAddErrors {
    fn validate(&self, _ctx: &mut ValidationContext<'_, Topic>) -> Result<(), ValidationError> {
        Ok(())
    }
}

struct ValidatorThatValidatesOptions {
    options: ValidatorOptions,
}

impl Validator<Topic> for ValidatorThatValidatesOptions {
    fn validate(&self, ctx: &mut ValidationContext<'_, Topic>) -> Result<(), ValidationError> {
        if self.options.get_str("field") == Some("first_name") {
            ctx.add_base_error(ERROR_MESSAGE);
        }
        Ok(())
    }
}

fn adds_errors() -> (&'static str, ValidatorFactory<Topic>) {
    (
        "ValidatorThatAddsErrors",
        factory(|_: &ValidatorOptions| Ok(ValidatorThatAddsErrors)),
    )
}

fn other_adds_errors() -> (&'static str, ValidatorFactory<Topic>) {
    (
        "OtherValidatorThatAddsErrors",
        factory(|_: &ValidatorOptions| Ok(OtherValidatorThatAddsErrors)),
    )
}

fn does_not_add_errors() -> (&'static str, ValidatorFactory<Topic>) {
    (
        "ValidatorThatDoesNotAddErrors",
        factory(|_: &ValidatorOptions| Ok(ValidatorThatDoesNotAddErrors)),
    )
}

fn validates_options() -> (&'static str, ValidatorFactory<Topic>) {
    (
        "ValidatorThatValidatesOptions",
        factory(|options: &ValidatorOptions| {
            Ok(ValidatorThatValidatesOptions {
                options: options.clone(),
            })
        }),
    )
}

fn options() -> RegistrationOptions<Topic> {
    RegistrationOptions::new()
}

#[test]
fn validation_with_class_that_adds_errors() {
    let mut registry = ValidatorRegistry::new();
    registry.register([adds_errors()], options());

    let topic = Topic::default();
    let errors = registry.validate(&topic, Phase::Create).unwrap();

    assert!(!errors.is_empty(), "a validator that adds errors invalidates the record");
    assert!(errors.includes("base", ERROR_MESSAGE));
    assert!(!registry.is_valid(&topic).unwrap());
}

#[test]
fn with_a_class_that_returns_valid() {
    let mut registry = ValidatorRegistry::new();
    registry.register([does_not_add_errors()], options());

    let topic = Topic::default();
    assert!(registry.validate(&topic, Phase::Create).unwrap().is_empty());
    assert!(registry.is_valid(&topic).unwrap());
}

#[test]
fn with_a_class_that_adds_errors_on_update_and_a_new_record() {
    let mut registry = ValidatorRegistry::new();
    registry.register([adds_errors()], options().on(Phase::Update));

    let topic = Topic::default();
    assert!(registry.is_valid(&topic).unwrap());
    assert!(registry
        .validate(&topic, Phase::Update)
        .unwrap()
        .includes("base", ERROR_MESSAGE));
}

#[test]
fn with_a_class_that_adds_errors_on_create_and_a_new_record() {
    let mut registry = ValidatorRegistry::new();
    registry.register([adds_errors()], options().on(Phase::Create));

    let topic = Topic::default();
    let errors = registry.validate_record(&topic).unwrap();
    assert!(errors.includes("base", ERROR_MESSAGE));

    let persisted = Topic {
        id: Some(1),
        ..Topic::default()
    };
    assert!(registry.is_valid(&persisted).unwrap());
}

#[test]
fn with_multiple_classes() {
    let mut registry = ValidatorRegistry::new();
    registry.register([adds_errors(), other_adds_errors()], options());

    let errors = registry.validate(&Topic::default(), Phase::Create).unwrap();

    assert_eq!(errors.get("base"), [ERROR_MESSAGE, OTHER_ERROR_MESSAGE]);
    assert_eq!(
        registry.validator_names::<Topic>(),
        vec!["ValidatorThatAddsErrors", "OtherValidatorThatAddsErrors"]
    );
}

#[test]
fn with_if_statements_that_return_false() {
    let mut registry = ValidatorRegistry::new();
    registry.register(
        [adds_errors()],
        options().when(Condition::from_fn("1 == 2", || false)),
    );

    assert!(registry.is_valid(&Topic::default()).unwrap());
}

#[test]
fn with_if_statements_that_return_true() {
    let mut registry = ValidatorRegistry::new();
    registry.register(
        [adds_errors()],
        options().when(Condition::from_fn("1 == 1", || true)),
    );

    let errors = registry.validate_record(&Topic::default()).unwrap();
    assert!(errors.includes("base", ERROR_MESSAGE));
}

#[test]
fn with_unless_statements_that_return_true() {
    let mut registry = ValidatorRegistry::new();
    registry.register([adds_errors()], options().unless(true));

    assert!(registry.is_valid(&Topic::default()).unwrap());
}

#[test]
fn with_unless_statements_that_return_false() {
    let mut registry = ValidatorRegistry::new();
    registry.register([adds_errors()], options().unless(false));

    let errors = registry.validate_record(&Topic::default()).unwrap();
    assert!(errors.includes("base", ERROR_MESSAGE));
}

#[test]
fn conditions_can_inspect_the_record() {
    let mut registry = ValidatorRegistry::new();
    registry.register(
        [adds_errors()],
        options().when(Condition::new("untitled", |t: &Topic| t.title.is_empty())),
    );

    assert!(registry.is_invalid(&Topic::default()).unwrap());
    assert!(registry
        .is_valid(&Topic {
            title: "Rust".to_string(),
            ..Topic::default()
        })
        .unwrap());
}

#[test]
fn conditions_are_evaluated_again_on_every_pass() {
    let enabled = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&enabled);

    let mut registry = ValidatorRegistry::new();
    registry.register(
        [adds_errors()],
        options().when(Condition::from_fn("enabled", move || flag.load(Ordering::SeqCst))),
    );

    let topic = Topic::default();
    assert!(registry.is_valid(&topic).unwrap());

    enabled.store(true, Ordering::SeqCst);
    assert!(registry
        .validate(&topic, Phase::Create)
        .unwrap()
        .includes("base", ERROR_MESSAGE));

    enabled.store(false, Ordering::SeqCst);
    assert!(registry.is_valid(&topic).unwrap());
}

struct SpyValidator {
    seen: Arc<Mutex<Vec<usize>>>,
}

impl Validator<Topic> for SpyValidator {
    fn validate(&self, ctx: &mut ValidationContext<'_, Topic>) -> Result<(), ValidationError> {
        let address = ctx.record() as *const Topic as usize;
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(address);
        }
        Ok(())
    }
}

#[test]
fn passes_all_configuration_options_to_the_validator_class() {
    let built_with: Arc<Mutex<Vec<ValidatorOptions>>> = Arc::default();
    let seen: Arc<Mutex<Vec<usize>>> = Arc::default();

    let spy_options = Arc::clone(&built_with);
    let spy_seen = Arc::clone(&seen);
    let spy: ValidatorFactory<Topic> = factory(move |options: &ValidatorOptions| {
        spy_options.lock().unwrap().push(options.clone());
        Ok(SpyValidator {
            seen: Arc::clone(&spy_seen),
        })
    });

    let mut registry = ValidatorRegistry::new();
    registry.register(
        [("SpyValidator", spy)],
        options()
            .when(Condition::from_fn("1 == 1", || true))
            .option("foo", "bar"),
    );

    let topic = Topic::default();
    assert!(registry.is_valid(&topic).unwrap());

    let built_with = built_with.lock().unwrap();
    assert_eq!(built_with.len(), 1);
    assert_eq!(built_with[0], json!({ "foo": "bar", "if": "1 == 1" }));

    let seen = seen.lock().unwrap();
    assert_eq!(*seen, vec![&topic as *const Topic as usize]);
}

#[test]
fn on_and_unless_are_not_forwarded() {
    let built_with: Arc<Mutex<Vec<ValidatorOptions>>> = Arc::default();
    let spy_options = Arc::clone(&built_with);
    let spy: ValidatorFactory<Topic> = factory(move |options: &ValidatorOptions| {
        spy_options.lock().unwrap().push(options.clone());
        Ok(ValidatorThatDoesNotAddErrors)
    });

    let mut registry = ValidatorRegistry::new();
    registry.register(
        [("SpyValidator", spy)],
        options().on(Phase::Create).unless(false).option("foo", "bar"),
    );
    registry.validate(&Topic::default(), Phase::Create).unwrap();

    assert_eq!(built_with.lock().unwrap()[0], json!({ "foo": "bar" }));
}

#[test]
fn validates_with_with_options() {
    let mut registry = ValidatorRegistry::new();
    registry.register([validates_options()], options().option("field", "first_name"));

    let errors = registry.validate_record(&Topic::default()).unwrap();
    assert!(errors.includes("base", ERROR_MESSAGE));
}

#[test]
fn validates_with_with_other_field_option() {
    let mut registry = ValidatorRegistry::new();
    registry.register([validates_options()], options().option("field", "last_name"));

    assert!(registry.is_valid(&Topic::default()).unwrap());
}

#[test]
fn declarative_options_parse_from_json() {
    let mut registry = ValidatorRegistry::new();
    let declared = RegistrationOptions::<Topic>::from_json(json!({
        "on": "update",
        "field": "first_name",
    }))
    .unwrap();
    registry.register([validates_options()], declared);

    let topic = Topic::default();
    assert!(registry.validate(&topic, Phase::Create).unwrap().is_empty());
    assert!(registry
        .validate(&topic, Phase::Update)
        .unwrap()
        .includes("base", ERROR_MESSAGE));
}

#[test]
fn failing_factory_aborts_validation() {
    let strict: ValidatorFactory<Topic> = factory(|options: &ValidatorOptions| {
        options.require_str("attribute")?;
        Ok(ValidatorThatAddsErrors)
    });

    let mut registry = ValidatorRegistry::new();
    registry.register([("Strict", strict)], options());

    let result = registry.validate(&Topic::default(), Phase::Create);
    assert!(matches!(
        result,
        Err(ValidationError::InvalidOption { ref key, .. }) if key == "attribute"
    ));
}

#[test]
fn closures_register_as_validators() {
    let mut registry = ValidatorRegistry::new();
    registry.register_fn(
        "title_presence",
        |ctx: &mut ValidationContext<'_, Topic>| {
            if ctx.record().title.is_empty() {
                ctx.add_error("title", "can't be blank");
            }
            Ok(())
        },
        options(),
    );
    registry.register([adds_errors()], options());

    let errors = registry.validate_record(&Topic::default()).unwrap();
    assert_eq!(
        errors.full_messages(),
        vec!["Title can't be blank".to_string(), ERROR_MESSAGE.to_string()]
    );
}

#[test]
fn reset_clears_registrations_between_runs() {
    let mut registry = ValidatorRegistry::new();
    registry.register([adds_errors()], options());
    assert!(registry.is_invalid(&Topic::default()).unwrap());

    registry.reset::<Topic>();
    assert!(registry.is_valid(&Topic::default()).unwrap());
}
