//! End-to-end cascade behaviour against a simulated device.

use folder_opener_config::Config;
use folder_opener_engine::{
    ACTION_GET_CONTENT, ACTION_VIEW, FolderOpener, HostError, Intent, IntentHost, IntentTarget,
    LaunchOutcome, StrategyKind,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::cell::RefCell;

/// What is installed on the pretend phone.
#[derive(Default)]
struct SimulatedDevice {
    folder_viewer: bool,
    content_picker: bool,
    generic_folder_viewer: bool,
    installed_packages: Vec<&'static str>,
    chooser_broken: bool,
    launched: RefCell<Vec<Intent>>,
}

impl SimulatedDevice {
    fn launched_targets(&self) -> Vec<IntentTarget> {
        self.launched
            .borrow()
            .iter()
            .map(|intent| intent.target.clone())
            .collect()
    }
}

impl IntentHost for SimulatedDevice {
    fn resolve(&self, intent: &Intent) -> Result<bool, HostError> {
        Ok(match &intent.target {
            IntentTarget::Action(action) if action == ACTION_VIEW => {
                if intent.data.is_some() {
                    self.folder_viewer
                } else {
                    self.generic_folder_viewer
                }
            }
            IntentTarget::Action(action) if action == ACTION_GET_CONTENT => self.content_picker,
            IntentTarget::Action(_) => false,
            IntentTarget::Package(package) => self
                .installed_packages
                .iter()
                .any(|installed| *installed == package.as_str()),
            IntentTarget::Chooser { .. } => true,
        })
    }

    fn launch(&self, intent: &Intent) -> Result<(), HostError> {
        if self.chooser_broken && matches!(intent.target, IntentTarget::Chooser { .. }) {
            return Err(HostError::ActivityNotFound(intent.to_string()));
        }
        self.launched.borrow_mut().push(intent.clone());
        Ok(())
    }
}

#[test]
fn test_inspections_folder_opens_with_folder_viewer() {
    let storage = tempfile::tempdir().unwrap();
    let inspections = storage.path().join("storage/emulated/0/Inspections");
    assert!(!inspections.exists());

    let device = SimulatedDevice {
        folder_viewer: true,
        content_picker: true,
        installed_packages: vec!["com.android.documentsui"],
        ..Default::default()
    };
    let opener = FolderOpener::new(device);

    let outcome = opener.open(&inspections);

    assert_eq!(
        outcome,
        LaunchOutcome::Opened {
            via: StrategyKind::FolderView
        }
    );
    assert!(inspections.is_dir());
    let launched = opener.host().launched.borrow();
    assert_eq!(launched.len(), 1);
    assert_eq!(
        launched[0].data.as_deref().map(|d| d.ends_with("/storage/emulated/0/Inspections")),
        Some(true)
    );
}

#[rstest]
#[case::picker(true, &[], false, StrategyKind::ContentPicker)]
#[case::installed_app(false, &["com.estrongs.android.pop"], false, StrategyKind::KnownFileManager)]
#[case::generic_viewer(false, &[], true, StrategyKind::SystemChooser)]
#[case::bare_device(false, &[], false, StrategyKind::SystemChooser)]
fn test_cascade_picks_first_available(
    #[case] content_picker: bool,
    #[case] installed_packages: &[&'static str],
    #[case] generic_folder_viewer: bool,
    #[case] expected: StrategyKind,
) {
    let storage = tempfile::tempdir().unwrap();
    let device = SimulatedDevice {
        content_picker,
        installed_packages: installed_packages.to_vec(),
        generic_folder_viewer,
        ..Default::default()
    };
    let opener = FolderOpener::new(device);

    let outcome = opener.open(storage.path());

    assert_eq!(outcome, LaunchOutcome::Opened { via: expected });
    assert_eq!(opener.host().launched.borrow().len(), 1);
}

#[test]
fn test_known_apps_missing_reaches_chooser() {
    let storage = tempfile::tempdir().unwrap();
    let device = SimulatedDevice {
        installed_packages: vec!["com.example.unrelated"],
        ..Default::default()
    };
    let opener = FolderOpener::new(device);

    let outcome = opener.open(storage.path());

    assert_eq!(
        outcome,
        LaunchOutcome::Opened {
            via: StrategyKind::SystemChooser
        }
    );
    match &opener.host().launched_targets()[..] {
        [IntentTarget::Chooser { title, .. }] => assert_eq!(title, "Choose File Manager"),
        other => panic!("expected a single chooser launch, got {other:?}"),
    }
}

#[test]
fn test_configured_candidates_replace_defaults() {
    let storage = tempfile::tempdir().unwrap();
    let device = SimulatedDevice {
        installed_packages: vec!["com.android.documentsui", "com.example.files"],
        ..Default::default()
    };
    let config = Config {
        candidate_packages: vec!["com.example.files".to_string()],
        ..Config::default()
    };
    let opener = FolderOpener::from_config(device, &config);

    opener.open(storage.path());

    assert_eq!(
        opener.host().launched_targets(),
        vec![IntentTarget::Package("com.example.files".to_string())]
    );
}

#[test]
fn test_everything_failing_reports_original_error() {
    let storage = tempfile::tempdir().unwrap();
    let device = SimulatedDevice {
        chooser_broken: true,
        ..Default::default()
    };
    let opener = FolderOpener::new(device);

    let outcome = opener.open(storage.path());

    match outcome {
        LaunchOutcome::Failed(reason) => {
            assert!(reason.contains("No activity found to handle chooser"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
    assert!(opener.host().launched.borrow().is_empty());
}
