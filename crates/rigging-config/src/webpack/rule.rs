use regex::Regex;
use serde::Serialize;
use serde_json::Value;

/// Recognized classes of source file, in rule order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetClass {
    Script,
    Markup,
    Stylesheet,
    PreprocessedStylesheet,
    Binary,
}

impl AssetClass {
    /// Rule order. Matching is first-wins, so this order is load-bearing.
    pub const ALL: [AssetClass; 5] = [
        AssetClass::Script,
        AssetClass::Markup,
        AssetClass::Stylesheet,
        AssetClass::PreprocessedStylesheet,
        AssetClass::Binary,
    ];

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            AssetClass::Script => &["ts", "tsx"],
            AssetClass::Markup => &["html", "htm"],
            AssetClass::Stylesheet => &["css"],
            AssetClass::PreprocessedStylesheet => &["less"],
            AssetClass::Binary => &[
                "png", "jpg", "jpeg", "gif", "svg", "webp", "mp3", "mp4", "oga", "ogg", "ogv",
                "webm", "woff", "woff2", "ttf", "eot", "otf",
            ],
        }
    }

    /// Regex source matching any of this class's extensions.
    pub fn test_pattern(self) -> String {
        format!(r"\.(?:{})$", self.extensions().join("|"))
    }
}

/// Role a stage plays within its rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    /// Script compilation
    Compile,
    /// Runtime style injection from scripts
    Inject,
    /// Style extraction into separate files
    Extract,
    /// CSS Modules class-name rewriting
    ScopedClasses,
    /// Post-processing and compaction of styles
    PostProcess,
    /// Pre-processor expansion, always the last stage of its rule
    Preprocess,
    /// Pulling markup content out of its module wrapper
    ContentExtract,
    /// Markup minification
    Minify,
    /// Copying a file to the output under a hashed name
    Copy,
}

/// One loader invocation in a rule's pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stage {
    #[serde(skip)]
    pub kind: StageKind,

    pub loader: String,

    #[serde(skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl Stage {
    pub fn new(kind: StageKind, loader: impl Into<String>, options: Value) -> Self {
        Self {
            kind,
            loader: loader.into(),
            options,
        }
    }
}

/// File pattern plus its ordered processing stages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRule {
    #[serde(skip)]
    pub class: AssetClass,

    /// Regex source tested against the module path
    pub test: String,

    /// Regex source for paths this rule never applies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    /// Module type override, e.g. `asset/resource` to emit a URL
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub module_type: Option<String>,

    #[serde(rename = "use")]
    pub stages: Vec<Stage>,
}

impl AssetRule {
    pub fn new(class: AssetClass, stages: Vec<Stage>) -> Self {
        Self {
            class,
            test: class.test_pattern(),
            exclude: None,
            module_type: None,
            stages,
        }
    }

    pub fn with_exclude(mut self, exclude: impl Into<String>) -> Self {
        self.exclude = Some(exclude.into());
        self
    }

    pub fn with_module_type(mut self, module_type: impl Into<String>) -> Self {
        self.module_type = Some(module_type.into());
        self
    }

    /// Whether this rule applies to `path`. Unparseable patterns match nothing.
    pub fn matches(&self, path: &str) -> bool {
        let included = Regex::new(&self.test).is_ok_and(|re| re.is_match(path));
        let excluded = self
            .exclude
            .as_deref()
            .is_some_and(|exclude| Regex::new(exclude).is_ok_and(|re| re.is_match(path)));
        included && !excluded
    }

    pub fn stage_kinds(&self) -> Vec<StageKind> {
        self.stages.iter().map(|stage| stage.kind).collect()
    }

    pub fn loaders(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.loader.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_cover_declared_extensions() {
        for class in AssetClass::ALL {
            let rule = AssetRule::new(class, Vec::new());
            for ext in class.extensions() {
                assert!(rule.matches(&format!("src/file.{ext}")), "{class:?} should match .{ext}");
            }
        }
    }

    #[test]
    fn patterns_anchor_on_the_extension() {
        let rule = AssetRule::new(AssetClass::Script, Vec::new());
        assert!(rule.matches("src/app.ts"));
        assert!(rule.matches("src/app.tsx"));
        assert!(!rule.matches("src/app.ts.map"));
        assert!(!rule.matches("src/app.js"));
    }

    #[test]
    fn exclude_wins_over_test() {
        let rule = AssetRule::new(AssetClass::Script, Vec::new())
            .with_exclude(r"[\\/]node_modules[\\/]");
        assert!(!rule.matches("/p/node_modules/lib/index.ts"));
        assert!(!rule.matches(r"C:\p\node_modules\lib\index.ts"));
        assert!(rule.matches("/p/src/index.ts"));
    }

    #[test]
    fn serializes_in_bundler_shape() {
        let rule = AssetRule::new(
            AssetClass::Markup,
            vec![Stage::new(StageKind::ContentExtract, "extract-loader", Value::Null)],
        )
        .with_module_type("asset/resource");

        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value["type"], "asset/resource");
        assert_eq!(value["use"][0]["loader"], "extract-loader");
        assert!(value["use"][0].get("options").is_none());
        assert!(value.get("exclude").is_none());
        assert!(value.get("class").is_none());
    }
}
