use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `html`: a plain switch or customized generation options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HtmlSetting {
    Toggle(bool),
    Options(HtmlOptions),
}

impl HtmlSetting {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, HtmlSetting::Toggle(false))
    }

    /// Customized options, if any. A bare `true` means the defaults.
    pub fn options(&self) -> Option<&HtmlOptions> {
        match self {
            HtmlSetting::Options(options) => Some(options),
            HtmlSetting::Toggle(_) => None,
        }
    }
}

impl Default for HtmlSetting {
    fn default() -> Self {
        HtmlSetting::Toggle(true)
    }
}

impl From<HtmlOptions> for HtmlSetting {
    fn from(options: HtmlOptions) -> Self {
        HtmlSetting::Options(options)
    }
}

impl From<bool> for HtmlSetting {
    fn from(enabled: bool) -> Self {
        HtmlSetting::Toggle(enabled)
    }
}

/// Page generation options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlOptions {
    /// Template request handed to the markup generator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Extra values exposed to the template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_parameters: Option<Value>,
}

impl HtmlOptions {
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn with_template_parameters(mut self, parameters: Value) -> Self {
        self.template_parameters = Some(parameters);
        self
    }
}
