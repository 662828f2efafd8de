//! Property tests for project name validation and path derivation.

use proptest::prelude::*;

use bfg::{Layout, Project, ProjectName};

fn valid_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_][A-Za-z0-9._-]{0,31}")
        .unwrap()
        .prop_filter("reserved bundle name", |s| s != "__compile__")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Validation never panics on arbitrary input.
    #[test]
    fn property_validation_never_panics(s in "(?s).{0,64}") {
        let _ = ProjectName::new(s);
    }

    /// PROPERTY: Accepted names never contain separators or dot segments.
    #[test]
    fn property_accepted_names_are_single_segments(s in "(?s).{0,64}") {
        if let Ok(name) = ProjectName::new(s) {
            prop_assert!(!name.as_str().contains('/'));
            prop_assert!(!name.as_str().contains('\\'));
            prop_assert!(!name.as_str().starts_with('.'));
            prop_assert!(!name.as_str().trim().is_empty());
        }
    }

    /// PROPERTY: model file sits directly in the project dir, which sits directly in the root.
    #[test]
    fn property_layout_invariants(name in valid_name()) {
        let layout = Layout::new("/srv/bfg");
        let project = Project::new(ProjectName::new(name.clone()).unwrap(), &layout);

        prop_assert_eq!(project.model_file().parent(), Some(project.project_dir()));
        prop_assert_eq!(project.project_dir().parent(), Some(project.root_dir()));
        let expected_file = format!("{}.stan", name);
        prop_assert_eq!(
            project.model_file().file_name().and_then(|n| n.to_str()),
            Some(expected_file.as_str())
        );
    }
}
