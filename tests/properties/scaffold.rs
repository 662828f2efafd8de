//! Property tests for create/package behaviour on a real filesystem.

use std::fs;

use proptest::prelude::*;
use tempfile::tempdir;

use bfg::{Layout, ProjectScaffolder, ProjectStatus};

fn artifact_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,8}\\.(o|hpp|csv|txt)").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: create_project is idempotent and never rewrites the model.
    #[test]
    fn property_create_is_idempotent(content in "[ -~]{0,200}") {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("__template__.stan"), "model {}").unwrap();
        let scaffolder = ProjectScaffolder::new(Layout::new(dir.path()));

        let first = scaffolder.create_project("demo").unwrap();
        fs::write(first.project.model_file(), &content).unwrap();
        let second = scaffolder.create_project("demo").unwrap();

        prop_assert_eq!(first.project, second.project.clone());
        prop_assert_eq!(second.status, ProjectStatus::AlreadyExists);
        prop_assert_eq!(fs::read_to_string(second.project.model_file()).unwrap(), content);
    }

    /// PROPERTY: after packaging, the bundle holds exactly the latest run's artifacts.
    #[test]
    fn property_bundle_matches_latest_run(
        first in proptest::collection::btree_set(artifact_name(), 0..6),
        second in proptest::collection::btree_set(artifact_name(), 0..6),
    ) {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("__template__.stan"), "model {}").unwrap();
        let scaffolder = ProjectScaffolder::new(Layout::new(dir.path()));
        let created = scaffolder.create_project("demo").unwrap();
        let project_dir = created.project.project_dir();
        let model = created.project.model_file();

        for name in &first {
            fs::write(project_dir.join(name), name).unwrap();
        }
        scaffolder.package_artifacts(model).unwrap();
        for name in &second {
            fs::write(project_dir.join(name), name).unwrap();
        }
        let report = scaffolder.package_artifacts(model).unwrap();

        let expected: Vec<String> = second.iter().cloned().collect();
        prop_assert_eq!(&report.moved, &expected);

        let mut bundled: Vec<String> = fs::read_dir(&report.bundle_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        bundled.sort();
        prop_assert_eq!(bundled, expected);
        prop_assert!(model.is_file());
    }
}
