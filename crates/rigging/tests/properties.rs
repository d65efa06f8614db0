//! Property tests for the pure helpers behind synthesis.

use std::path::{Path, PathBuf};

use proptest::prelude::*;
use rigging::paths::{resolve, resolve_dest};
use rigging::settings::sanitize_namespace;
use rigging::{Environment, Mode, Project, Synthesizer};
use serde_json::{json, Map, Value};

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,8}"
}

fn relative_path() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(segment(), 1..4).prop_map(|parts| parts.iter().collect())
}

fn flag_object() -> impl Strategy<Value = Value> {
    let key = prop::sample::select(vec!["production", "analyze", "watch"]);
    prop::collection::vec((key, any::<bool>()), 0..4).prop_map(|pairs| {
        let map: Map<String, Value> = pairs
            .into_iter()
            .map(|(key, flag)| (key.to_string(), Value::Bool(flag)))
            .collect();
        Value::Object(map)
    })
}

proptest! {
    #[test]
    fn sanitized_namespaces_have_no_brackets(raw in ".{0,24}") {
        let clean = sanitize_namespace(&raw);
        prop_assert!(!clean.contains('['));
        prop_assert!(!clean.contains(']'));
        prop_assert_eq!(sanitize_namespace(&clean), clean);
    }

    #[test]
    fn later_environment_entries_win(objects in prop::collection::vec(flag_object(), 1..5)) {
        let env = Environment::normalize(&Value::Array(objects.clone()));

        for key in ["production", "analyze", "watch"] {
            let expected = objects.iter().rev().find_map(|object| object.get(key));
            prop_assert_eq!(env.get(key), expected);
        }
    }

    #[test]
    fn mode_follows_the_last_production_flag(objects in prop::collection::vec(flag_object(), 1..5)) {
        let synth = Synthesizer::new(Project::new("P").with_root_dir("/p"));
        let config = synth.synthesize(&Value::Array(objects.clone())).unwrap();

        let production = objects
            .iter()
            .rev()
            .find_map(|object| object.get("production"))
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let expected = if production { Mode::Production } else { Mode::Development };
        prop_assert_eq!(config.mode, expected);
    }

    #[test]
    fn destination_resolution_is_idempotent(dest in relative_path()) {
        let root = Path::new("/work/app");
        let once = resolve_dest(root, Some(&dest));
        let twice = resolve_dest(root, Some(&once));
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.starts_with(root));
    }

    #[test]
    fn resolved_paths_are_absolute(path in relative_path()) {
        prop_assert!(resolve(Path::new("/base"), &path).is_absolute());
    }

    #[test]
    fn synthesis_is_deterministic(production in any::<bool>()) {
        let synth = Synthesizer::new(Project::new("P").with_root_dir("/p"));
        let env = json!({ "production": production });
        prop_assert_eq!(synth.synthesize(&env).unwrap(), synth.synthesize(&env).unwrap());
    }
}
