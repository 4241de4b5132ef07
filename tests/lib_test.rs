//! Library integration tests.

use medic::MedicError;

#[test]
fn error_types_are_public() {
    let err = MedicError::UnknownCheck {
        category: "git".into(),
        operation: "installed".into(),
    };
    assert!(err.to_string().contains("git::installed"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> medic::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn core_types_are_reexported() {
    use medic::{Arguments, CheckDescriptor, CheckRegistry, CheckResult, Dispatcher, Options};

    let registry = CheckRegistry::new().with("git", "installed", |_| Ok(CheckResult::Ok));
    let dispatcher = Dispatcher::new(registry, medic::skip::SkipResolver::default());
    assert_eq!(dispatcher.registry().len(), 1);

    let descriptor =
        CheckDescriptor::with_arguments("svc", "up", Arguments::from(Options::new().with("k", "v")));
    assert_eq!(descriptor.arguments().token(), "v");
}
