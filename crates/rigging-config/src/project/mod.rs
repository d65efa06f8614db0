//! The project descriptor: the small, user-facing input to synthesis.

mod css;
mod define;
mod entry;
mod html;
mod source;

use figment::Figment;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

pub use css::{CssMode, CssModules, CssModulesOptions, CssOptions};
pub use entry::{Entry, EntryPoint};
pub use html::{HtmlOptions, HtmlSetting};
pub use source::{Customize, ProjectSource};

use crate::error::{ConfigError, Result};
use crate::webpack::BuildConfiguration;

/// Project descriptor
///
/// Only `title` is required; every other field has a default applied at
/// synthesis time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project source root. Relative values resolve against the caller's location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_dir: Option<PathBuf>,

    /// Output directory relative to the root (default: "dist")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest_dir: Option<PathBuf>,

    /// Page title for generated markup
    pub title: String,

    /// Vendor prefix for generated CSS class names (default: "sv")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// Entry points (default: "./index")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<Entry>,

    /// Global constants injected at build time
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub define: IndexMap<String, Value>,

    /// Markup generation; `false` disables it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<HtmlSetting>,

    #[serde(default)]
    pub css: CssOptions,

    /// Final transform applied to the synthesized configuration
    #[serde(skip)]
    pub customize: Option<Customize>,
}

impl Project {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            root_dir: None,
            dest_dir: None,
            title: title.into(),
            vendor: None,
            entry: None,
            define: IndexMap::new(),
            html: None,
            css: CssOptions::default(),
            customize: None,
        }
    }

    /// Create from serde_json::Value
    ///
    /// # Example
    ///
    /// ```
    /// use rigging_config::Project;
    /// use serde_json::json;
    ///
    /// let project = Project::from_value(json!({
    ///     "title": "Demo",
    ///     "destDir": "public",
    ///     "css": { "modules": false }
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(project.title, "Demo");
    /// assert!(project.css.modules.unwrap().is_disabled());
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::invalid("project", e))
    }

    /// Extract a descriptor from a layered figment.
    ///
    /// # Example
    ///
    /// ```
    /// use figment::{Figment, providers::{Format, Toml}};
    /// use rigging_config::Project;
    ///
    /// let figment = Figment::new().merge(Toml::string(r#"
    /// title = "Docs"
    /// vendor = "acme"
    /// "#));
    ///
    /// let project = Project::from_figment(&figment).unwrap();
    /// assert_eq!(project.vendor.as_deref(), Some("acme"));
    /// ```
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        define::check_figment(figment)?;
        let project: Project = figment
            .extract()
            .map_err(|e| ConfigError::invalid("project", e))?;
        tracing::debug!(title = %project.title, "loaded project descriptor");
        Ok(project)
    }

    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::invalid("project", e))
    }

    pub fn with_root_dir(mut self, root_dir: impl Into<PathBuf>) -> Self {
        self.root_dir = Some(root_dir.into());
        self
    }

    pub fn with_dest_dir(mut self, dest_dir: impl Into<PathBuf>) -> Self {
        self.dest_dir = Some(dest_dir.into());
        self
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }

    pub fn with_entry(mut self, entry: impl Into<Entry>) -> Self {
        self.entry = Some(entry.into());
        self
    }

    pub fn with_html(mut self, html: impl Into<HtmlSetting>) -> Self {
        self.html = Some(html.into());
        self
    }

    pub fn with_css_mode(mut self, mode: CssMode) -> Self {
        self.css.mode = Some(mode);
        self
    }

    pub fn with_css_modules(mut self, modules: CssModules) -> Self {
        self.css.modules = Some(modules);
        self
    }

    /// Add a global constant.
    ///
    /// Fails when the value has no JSON representation, e.g. a map keyed by
    /// something other than strings or a NaN or infinite number.
    pub fn with_define<T: Serialize>(mut self, key: impl Into<String>, value: &T) -> Result<Self> {
        let key = key.into();
        let value = define::literal(&key, value)?;
        self.define.insert(key, value);
        Ok(self)
    }

    pub fn with_customize<F>(mut self, hook: F) -> Self
    where
        F: Fn(BuildConfiguration) -> BuildConfiguration + Send + Sync + 'static,
    {
        self.customize = Some(Customize::new(hook));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn title_is_required() {
        let result = Project::from_value(json!({ "destDir": "out" }));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn entry_accepts_string_list_and_mapping() {
        let single = Project::from_value(json!({"title": "t", "entry": "./main"})).unwrap();
        assert_eq!(single.entry, Some(Entry::from("./main")));

        let list = Project::from_value(json!({"title": "t", "entry": ["./a", "./b"]})).unwrap();
        assert_eq!(
            list.entry,
            Some(Entry::Point(EntryPoint::Paths(vec!["./a".into(), "./b".into()])))
        );

        let named =
            Project::from_value(json!({"title": "t", "entry": {"app": "./app", "admin": ["./x"]}}))
                .unwrap();
        let Some(Entry::Named(map)) = named.entry else {
            panic!("expected named entries");
        };
        assert_eq!(map.keys().collect::<Vec<_>>(), ["app", "admin"]);
    }

    #[test]
    fn html_accepts_bool_or_options() {
        let off = Project::from_value(json!({"title": "t", "html": false})).unwrap();
        assert!(!off.html.unwrap().is_enabled());

        let custom = Project::from_value(json!({
            "title": "t",
            "html": { "template": "./page.ejs", "templateParameters": { "lang": "en" } }
        }))
        .unwrap();
        let html = custom.html.unwrap();
        assert!(html.is_enabled());
        assert_eq!(html.options().unwrap().template.as_deref(), Some("./page.ejs"));
    }

    #[test]
    fn css_mode_uses_kebab_case() {
        let project =
            Project::from_value(json!({"title": "t", "css": {"mode": "embed-in-js"}})).unwrap();
        assert_eq!(project.css.mode, Some(CssMode::EmbedInJs));

        let bad = Project::from_value(json!({"title": "t", "css": {"mode": "inline"}}));
        assert!(bad.is_err());
    }

    #[test]
    fn css_modules_namespace_is_read() {
        let project = Project::from_value(json!({
            "title": "t",
            "css": { "modules": { "namespace": "acme" } }
        }))
        .unwrap();
        let modules = project.css.modules.unwrap();
        assert!(!modules.is_disabled());
        assert_eq!(modules.namespace(), Some("acme"));
    }

    #[test]
    fn define_rejects_non_string_keys() {
        let mut bad = HashMap::new();
        bad.insert(vec![1u8], 1);
        let result = Project::new("t").with_define("BAD", &bad);
        assert!(matches!(result, Err(ConfigError::MalformedDefine { ref key, .. }) if key == "BAD"));
    }

    #[test]
    fn define_rejects_non_finite_numbers() {
        let nan = Project::new("t").with_define("RATIO", &f64::NAN);
        assert!(matches!(nan, Err(ConfigError::MalformedDefine { ref key, .. }) if key == "RATIO"));

        let inf = Project::new("t").with_define("MAX", &f64::INFINITY);
        assert!(matches!(inf, Err(ConfigError::MalformedDefine { ref key, .. }) if key == "MAX"));

        let err = Project::new("t").with_define("MIN", &f32::NEG_INFINITY).unwrap_err();
        assert!(err.to_string().contains("infinite"));
    }

    #[test]
    fn define_preserves_insertion_order() {
        let project = Project::new("t")
            .with_define("Z", &1)
            .unwrap()
            .with_define("A", &"a")
            .unwrap();
        assert_eq!(project.define.keys().collect::<Vec<_>>(), ["Z", "A"]);
    }

    #[test]
    fn customize_is_not_serialized() {
        let project = Project::new("t").with_customize(|config| config);
        let value = project.to_value().unwrap();
        assert!(value.get("customize").is_none());
        assert_eq!(value["title"], json!("t"));
    }
}
