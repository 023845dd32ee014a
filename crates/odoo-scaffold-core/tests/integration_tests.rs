//! Integration tests for odoo-scaffold-core.
//!
//! Drives the public API end to end with an in-test renderer and an
//! in-memory filesystem, so no adapter crate is needed.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use odoo_scaffold_core::{
    domain::{Predicate, State, Transition},
    prelude::*,
};

#[derive(Clone, Default)]
struct RecordingFs {
    dirs: Arc<Mutex<Vec<PathBuf>>>,
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
}

impl Filesystem for RecordingFs {
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        self.dirs.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().iter().any(|d| d == path)
            || self.files.lock().unwrap().contains_key(path)
    }
}

/// Renders one view file with every header button guard.
struct GuardRenderer;

impl BundleRenderer for GuardRenderer {
    fn render(&self, names: &DerivedNames, options: &ModuleOptions) -> ScaffoldResult<Bundle> {
        let buttons: Vec<String> = Transition::ALL
            .iter()
            .map(|t| {
                format!(
                    "<button name=\"{}\" {}/>",
                    t.method(),
                    names.visibility_dialect.render(&t.hide_predicate())
                )
            })
            .collect();
        let ctx = RenderContext::new(names, options).with_variable("BUTTONS", buttons.join("\n"));
        let view = ctx.render("views", "<form string=\"{{HUMAN_NAME}}\">\n{{BUTTONS}}\n</form>\n")?;

        Ok(Bundle::new(names.module().clone())
            .with_directory("views")?
            .with_artifact(names.views_file(), view)?)
    }
}

fn service(fs: &RecordingFs) -> ScaffoldService {
    ScaffoldService::new(Box::new(GuardRenderer), Box::new(fs.clone()))
}

#[test]
fn full_pipeline_writes_under_module_directory() {
    let fs = RecordingFs::default();
    let report = service(&fs)
        .generate(&GenerateRequest::new("library_management", "/addons"))
        .unwrap();

    assert_eq!(report.module_dir, PathBuf::from("/addons/library_management"));
    assert_eq!(report.model_name, "library.management");
    assert_eq!(report.dialect, VisibilityDialect::Expression);

    let files = fs.files.lock().unwrap();
    let view = &files[Path::new("/addons/library_management/views/library_management_views.xml")];
    assert!(view.contains("<form string=\"Library Management\">"));
    assert!(view.contains("invisible=\"state != 'draft'\""));
    assert!(!view.contains("attrs="));
}

#[test]
fn legacy_version_uses_attrs_only() {
    let fs = RecordingFs::default();
    service(&fs)
        .generate(&GenerateRequest::new("task_tracker", "/addons").platform_version(PlatformVersion::new(16)))
        .unwrap();

    let files = fs.files.lock().unwrap();
    let view = files.values().next().unwrap();
    assert_eq!(view.matches("attrs=").count(), Transition::ALL.len());
    assert!(!view.contains("invisible=\""));
}

#[test]
fn second_generation_is_refused() {
    let fs = RecordingFs::default();
    let svc = service(&fs);
    let request = GenerateRequest::new("task_tracker", "/addons");

    svc.generate(&request).unwrap();
    let before = fs.files.lock().unwrap().clone();

    let err = svc.generate(&request).unwrap_err();
    assert!(err.is_already_done());
    assert_eq!(*fs.files.lock().unwrap(), before);
}

#[test]
fn invalid_identifiers_write_nothing() {
    let fs = RecordingFs::default();
    let svc = service(&fs);
    for bad in ["", "9bad", "my-module", "my module", "_private", "modulé"] {
        let err = svc.generate(&GenerateRequest::new(bad, "/addons")).unwrap_err();
        assert!(err.is_invalid_identifier(), "{bad:?}");
    }
    assert!(fs.dirs.lock().unwrap().is_empty());
    assert!(fs.files.lock().unwrap().is_empty());
}

#[test]
fn every_state_shows_exactly_the_transitions_it_allows() {
    for state in State::ALL {
        for transition in Transition::ALL {
            let hide: Predicate = transition.hide_predicate();
            assert_eq!(
                !hide.holds(state.as_str()),
                transition.is_available_from(state),
                "{transition:?} from {state:?}"
            );
        }
    }
}
