//! End-to-end tests for the check execution engine.

use std::cell::Cell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use medic::check::{values, Arguments, CheckDescriptor, CheckResult, Options};
use medic::config::{ErrorPolicy, MedicConfig};
use medic::dispatcher::Dispatcher;
use medic::doctor::Doctor;
use medic::predicate::in_list;
use medic::registry::CheckRegistry;
use medic::report::{MedicTheme, MockReporter, ReportEvent, Reporter, TerminalReporter};
use medic::skip::SkipResolver;
use medic::MedicError;
use tempfile::TempDir;

fn counting_registry(calls: &Rc<Cell<usize>>) -> CheckRegistry {
    let counter = Rc::clone(calls);
    CheckRegistry::new().with("disk", "free_space", move |_| {
        counter.set(counter.get() + 1);
        Ok(CheckResult::warn("disk low"))
    })
}

#[test]
fn skipped_descriptor_never_invokes_check() {
    let temp = TempDir::new().unwrap();
    let resolver = SkipResolver::for_project(temp.path());
    let descriptor = CheckDescriptor::new("disk", "free_space");

    fs::create_dir_all(resolver.root()).unwrap();
    fs::write(resolver.path_for(&descriptor), "").unwrap();

    let calls = Rc::new(Cell::new(0));
    let dispatcher = Dispatcher::new(counting_registry(&calls), resolver);
    let mut reporter = MockReporter::new();

    let result = dispatcher.run(&descriptor, &mut reporter).unwrap();

    assert_eq!(result, CheckResult::Skipped);
    assert_eq!(calls.get(), 0);
    assert_eq!(reporter.progress_count(), 1);
}

#[test]
fn warn_result_is_returned_after_one_progress_event() {
    let temp = TempDir::new().unwrap();
    let calls = Rc::new(Cell::new(0));
    let dispatcher = Dispatcher::new(
        counting_registry(&calls),
        SkipResolver::for_project(temp.path()),
    );
    let mut reporter = MockReporter::new();

    let result = dispatcher
        .run(&CheckDescriptor::new("disk", "free_space"), &mut reporter)
        .unwrap();

    assert_eq!(result, CheckResult::warn("disk low"));
    assert_eq!(calls.get(), 1);
    assert_eq!(reporter.events().len(), 1);
    assert!(matches!(
        &reporter.events()[0],
        ReportEvent::Progress { description, .. } if description == "free space"
    ));
}

#[test]
fn creating_and_deleting_marker_toggles_skip() {
    let temp = TempDir::new().unwrap();
    let resolver = SkipResolver::for_project(temp.path());
    let args = Arguments::Options(Options::new().with("a", "1").with("b", "2"));

    let path = resolver.resolve_skip_path("svc", "running", &args);
    assert_eq!(path, temp.path().join(".medic/skipped").join("svc-running-1+2"));
    assert!(!resolver.is_skipped("svc", "running", &args));

    fs::create_dir_all(resolver.root()).unwrap();
    fs::write(&path, "").unwrap();
    assert!(resolver.is_skipped("svc", "running", &args));
    assert_eq!(resolver.list_skipped().unwrap(), vec!["svc-running-1+2"]);

    fs::remove_file(&path).unwrap();
    assert!(!resolver.is_skipped("svc", "running", &args));
}

#[test]
fn empty_arguments_path_has_no_trailing_separator() {
    let resolver = SkipResolver::new(".medic/skipped");
    let path = resolver.resolve_skip_path("homebrew", "bundled", &Arguments::none());
    assert_eq!(path, PathBuf::from(".medic/skipped/homebrew-bundled"));
    assert!(!path.to_string_lossy().ends_with('/'));
}

#[test]
fn dot_identity_does_not_match_existing_skip_dir() {
    let temp = TempDir::new().unwrap();
    let resolver = SkipResolver::for_project(temp.path());
    fs::create_dir_all(resolver.root()).unwrap();

    let up = CheckDescriptor::new("..", "");
    let here = CheckDescriptor::new("", ".");
    assert!(!resolver.is_descriptor_skipped(&up));
    assert!(!resolver.is_descriptor_skipped(&here));

    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let registry = CheckRegistry::new().with("..", "", move |_| {
        counter.set(counter.get() + 1);
        Ok(CheckResult::Ok)
    });
    let dispatcher = Dispatcher::new(registry, resolver);
    let result = dispatcher.run(&up, &mut MockReporter::new()).unwrap();
    assert_eq!(result, CheckResult::Ok);
    assert_eq!(calls.get(), 1);
}

#[cfg(unix)]
#[test]
fn shell_checks_through_dispatcher() {
    use medic::shell::command_succeeds;

    let temp = TempDir::new().unwrap();
    let mut registry = CheckRegistry::new();
    registry.register("tool", "installed", |params| {
        let args = values("tool::installed", params)?;
        let [tool] = args.as_slice() else {
            return Err(MedicError::InvalidArguments {
                check: "tool::installed".into(),
                message: format!("expected 1 argument, got {}", args.len()),
            });
        };
        let script = format!("command -v {}", tool);
        Ok(command_succeeds(
            "sh",
            &["-c", script.as_str()],
            &format!("brew install {}", tool),
        ))
    });
    let dispatcher = Dispatcher::new(registry, SkipResolver::for_project(temp.path()));
    let mut reporter = MockReporter::new();

    let present =
        CheckDescriptor::with_arguments("tool", "installed", Arguments::positional(["sh"]));
    assert_eq!(dispatcher.run(&present, &mut reporter).unwrap(), CheckResult::Ok);

    let missing = CheckDescriptor::with_arguments(
        "tool",
        "installed",
        Arguments::positional(["medic-not-a-real-tool"]),
    );
    let result = dispatcher.run(&missing, &mut reporter).unwrap();
    assert_eq!(result.remedy(), Some("brew install medic-not-a-real-tool"));

    let wrong_shape = CheckDescriptor::with_arguments(
        "tool",
        "installed",
        Options::new().with("name", "jq"),
    );
    let err = dispatcher.run(&wrong_shape, &mut reporter).unwrap_err();
    assert!(matches!(err, MedicError::InvalidArguments { .. }));
}

#[test]
fn doctor_renders_checklist_to_terminal() {
    let temp = TempDir::new().unwrap();
    let registry = CheckRegistry::new()
        .with("git", "installed", |_| Ok(CheckResult::Ok))
        .with("asdf", "plugin_installed", |params| {
            let installed = ["nodejs", "ruby"];
            let wanted = params.first().and_then(|p| p.as_value()).unwrap_or_default();
            Ok(in_list(
                &wanted,
                &installed,
                &format!("asdf plugin add {}", wanted),
            ))
        });

    let config = MedicConfig::default();
    let dispatcher = Dispatcher::new(registry, config.skip_resolver(temp.path()));
    let mut reporter = TerminalReporter::new(Vec::new(), MedicTheme::plain());

    let summary = Doctor::new(&dispatcher, ErrorPolicy::Halt)
        .run(
            &[
                CheckDescriptor::new("git", "installed"),
                CheckDescriptor::with_arguments(
                    "asdf",
                    "plugin_installed",
                    Arguments::positional(["erlang"]),
                ),
                CheckDescriptor::new("never", "reached"),
            ],
            &mut reporter,
        )
        .unwrap();

    assert!(summary.halted);
    assert_eq!(summary.exit_code(), 1);

    let out = String::from_utf8(reporter.into_inner()).unwrap();
    let skip_path = temp.path().join(".medic/skipped/asdf-plugin_installed-erlang");
    let expected = format!(
        "• git: installed … ✓ ok\n\
         • asdf: plugin installed (erlang) … ✗ failed\n  \
         \"erlang\" not found in [\"nodejs\", \"ruby\"]\n  \
         Remedy: asdf plugin add erlang\n  \
         Skip: mkdir -p {} && touch {}\n",
        temp.path().join(".medic/skipped").display(),
        skip_path.display()
    );
    assert_eq!(out, expected);
}

#[test]
fn reporter_trait_is_object_safe() {
    let mut reporter = MockReporter::new();
    let sink: &mut dyn Reporter = &mut reporter;
    sink.report(&CheckResult::error("boom", ""));
    assert_eq!(
        reporter.events(),
        &[ReportEvent::Failed {
            output: "boom".into(),
            remedy: String::new(),
        }]
    );
}
