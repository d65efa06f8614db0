use serde::{Deserialize, Serialize};

/// How stylesheets reach the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CssMode {
    /// Styles are bundled into scripts and injected at runtime
    EmbedInJs,
    /// Styles are emitted as separate files referenced from the page (default)
    #[default]
    LoadFromHtml,
}

/// CSS handling preferences from the descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssOptions {
    /// Delivery mode; ignored in development, where styles are always embedded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<CssMode>,

    /// CSS Modules class-name scoping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<CssModules>,
}

/// `css.modules`: `false` turns scoping off, an object tunes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssModules {
    Toggle(bool),
    Options(CssModulesOptions),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssModulesOptions {
    /// Prefix for generated class identifiers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl CssModules {
    pub fn is_disabled(&self) -> bool {
        matches!(self, CssModules::Toggle(false))
    }

    pub fn namespace(&self) -> Option<&str> {
        match self {
            CssModules::Options(options) => options.namespace.as_deref(),
            CssModules::Toggle(_) => None,
        }
    }
}
