//! Descriptor loading through figment and serde_json.

use std::path::PathBuf;

use figment::Figment;
use figment::providers::{Format, Json, Serialized, Toml};
use proptest::prelude::*;
use rigging_config::{
    ConfigError, CssMode, Entry, EntryPoint, Environment, HtmlSetting, Mode, Project,
};
use serde_json::{json, Value};

#[test]
fn toml_descriptor_with_every_field() {
    let figment = Figment::new().merge(Toml::string(
        r#"
        title = "Storefront"
        rootDir = "/srv/store"
        destDir = "public"
        vendor = "shop"

        [entry]
        main = "./src/main"
        admin = ["./src/polyfills", "./src/admin"]

        [define]
        API_URL = "https://api.example.com"
        RETRIES = 3

        [html]
        template = "./src/index.ejs"

        [css]
        mode = "embed-in-js"
        modules = { namespace = "st" }
        "#,
    ));

    let project = Project::from_figment(&figment).expect("descriptor");

    assert_eq!(project.title, "Storefront");
    assert_eq!(project.root_dir, Some(PathBuf::from("/srv/store")));
    assert_eq!(project.dest_dir, Some(PathBuf::from("public")));
    assert_eq!(
        project.entry,
        Some(Entry::named([
            ("main", EntryPoint::from("./src/main")),
            (
                "admin",
                EntryPoint::from(vec!["./src/polyfills".to_string(), "./src/admin".to_string()])
            ),
        ]))
    );
    assert_eq!(project.define["RETRIES"], json!(3));
    assert_eq!(project.css.mode, Some(CssMode::EmbedInJs));
    assert_eq!(
        project.css.modules.as_ref().and_then(|m| m.namespace()),
        Some("st")
    );
    let html = project.html.expect("html setting");
    assert_eq!(
        html.options().and_then(|o| o.template.as_deref()),
        Some("./src/index.ejs")
    );
}

#[test]
fn later_providers_override_earlier_ones() {
    let figment = Figment::new()
        .merge(Toml::string("title = \"Base\"\nvendor = \"acme\""))
        .merge(Json::string(r#"{ "title": "Override", "html": false }"#));

    let project = Project::from_figment(&figment).expect("descriptor");
    assert_eq!(project.title, "Override");
    assert_eq!(project.vendor.as_deref(), Some("acme"));
    assert_eq!(project.html, Some(HtmlSetting::Toggle(false)));
}

#[test]
fn serialized_descriptor_roundtrips_through_figment() {
    let original = Project::new("Docs")
        .with_dest_dir("site")
        .with_entry("./docs/index")
        .with_define("VERSION", &"1.2.3")
        .expect("define");

    let figment = Figment::from(Serialized::defaults(&original));
    let loaded = Project::from_figment(&figment).expect("descriptor");

    assert_eq!(loaded.to_value().unwrap(), original.to_value().unwrap());
}

#[test]
fn missing_title_is_reported() {
    let figment = Figment::new().merge(Toml::string("vendor = \"acme\""));
    let err = Project::from_figment(&figment).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "project"));
    assert!(err.to_string().contains("title"));
}

#[test]
fn non_finite_toml_define_is_rejected() {
    let figment = Figment::new().merge(Toml::string(
        r#"
        title = "t"

        [define]
        LIMITS = { low = 0.5, high = inf }
        "#,
    ));

    let err = Project::from_figment(&figment).unwrap_err();
    assert!(matches!(err, ConfigError::MalformedDefine { ref key, .. } if key == "LIMITS"));
}

#[test]
fn unknown_css_mode_is_rejected() {
    let result = Project::from_value(json!({
        "title": "t",
        "css": { "mode": "inline" }
    }));
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn mode_reads_production_flag_truthiness() {
    let cases = [
        (json!({}), Mode::Development),
        (json!({"production": true}), Mode::Production),
        (json!({"production": "yes"}), Mode::Production),
        (json!({"production": ""}), Mode::Development),
        (json!({"production": 0}), Mode::Development),
        (json!([{"production": 1}, {"production": null}]), Mode::Development),
    ];
    for (env, expected) in cases {
        assert_eq!(Mode::from_env(&Environment::normalize(&env)), expected, "{env}");
    }
}

proptest! {
    #[test]
    fn non_object_environments_are_empty(n in any::<i64>(), s in ".{0,12}", b in any::<bool>()) {
        for value in [json!(n), json!(s), json!(b), Value::Null] {
            prop_assert!(Environment::normalize(&value).is_empty());
        }
    }
}
