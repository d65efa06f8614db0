//! Descriptor-to-configuration pipeline.

use std::path::PathBuf;

use rigging_config::{
    BuildConfiguration, Customize, Devtool, Environment, Minimizer, Mode,
    ModuleConfig, Optimization, OutputConfig, ProjectSource, ResolveConfig, TerserOptions,
};
use serde_json::Value;

use crate::error::Result;
use crate::plugins::assemble_plugins;
use crate::rules::{asset_module_filename, build_rules};
use crate::settings::ResolvedSettings;

const HASH_FUNCTION: &str = "sha256";
const HASH_DIGEST: &str = "base64url";
const HASH_DIGEST_LENGTH: usize = 8;

/// Turns a project source into build configurations, one per environment.
///
/// Holds no state between invocations: the same environment always yields
/// an equal configuration.
///
/// # Example
///
/// ```
/// use rigging::{Project, Synthesizer};
/// use serde_json::json;
///
/// let synth = Synthesizer::new(Project::new("Demo"))
///     .with_caller_location("/work/app/webpack.config.js");
///
/// let config = synth.synthesize(&json!({ "production": true })).unwrap();
/// assert!(config.optimization.minimize);
/// assert_eq!(config.output.path, std::path::PathBuf::from("/work/app/dist"));
/// ```
#[derive(Debug, Clone)]
pub struct Synthesizer {
    source: ProjectSource,
    caller: Option<PathBuf>,
}

impl Synthesizer {
    /// Synthesizer for a fixed descriptor or a factory. Without a caller
    /// location the descriptor's `rootDir` must be absolute.
    pub fn new(source: impl Into<ProjectSource>) -> Self {
        Self {
            source: source.into(),
            caller: None,
        }
    }

    /// Location of the configuration file declaring the project. Relative
    /// `rootDir` values resolve against its directory.
    pub fn with_caller_location(mut self, caller: impl Into<PathBuf>) -> Self {
        self.caller = Some(caller.into());
        self
    }

    /// Produce the configuration for one invocation environment.
    ///
    /// `env` may be an object, an array of objects folded left to right, or
    /// anything else, which counts as empty. A truthy `production` key
    /// selects production mode. The customize hook, if any, runs last.
    pub fn synthesize(&self, env: &Value) -> Result<BuildConfiguration> {
        let env = Environment::normalize(env);
        let mode = Mode::from_env(&env);
        let project = self.source.project(mode, &env);

        let _span = tracing::debug_span!("synthesize", %mode, title = %project.title).entered();

        let settings = ResolvedSettings::resolve(&project, mode, self.caller.as_deref())?;
        tracing::debug!(
            root = %settings.root_dir.display(),
            dest = %settings.dest_dir.display(),
            extract_css = settings.extract_css,
            "resolved project settings"
        );

        let config = compose(&settings);
        tracing::trace!(
            rules = config.module.rules.len(),
            plugins = config.plugins.len(),
            "composed configuration"
        );

        Ok(apply_customize(project.customize.as_ref(), config))
    }
}

/// Assemble the final configuration from resolved settings.
pub fn compose(settings: &ResolvedSettings) -> BuildConfiguration {
    let production = settings.mode.is_production();

    BuildConfiguration {
        mode: settings.mode,
        context: settings.root_dir.clone(),
        entry: settings.entry.clone(),
        module: ModuleConfig {
            rules: build_rules(settings),
        },
        resolve: ResolveConfig::default(),
        devtool: if production {
            Devtool::Disabled
        } else {
            Devtool::InlineSourceMap
        },
        optimization: optimization(settings.mode),
        plugins: assemble_plugins(settings),
        output: output(settings),
    }
}

/// Run the caller's hook, if any. Its result replaces the configuration.
pub fn apply_customize(hook: Option<&Customize>, config: BuildConfiguration) -> BuildConfiguration {
    match hook {
        Some(hook) => {
            tracing::trace!("applying customize hook");
            hook.apply(config)
        }
        None => config,
    }
}

fn optimization(mode: Mode) -> Optimization {
    match mode {
        Mode::Development => Optimization {
            minimize: false,
            minimizer: Vec::new(),
        },
        Mode::Production => Optimization {
            minimize: true,
            minimizer: vec![Minimizer::Terser(TerserOptions::default())],
        },
    }
}

fn output(settings: &ResolvedSettings) -> OutputConfig {
    let (filename, chunk_filename) = match settings.mode {
        Mode::Development => ("[name].js", "[id].js"),
        Mode::Production => ("[name].[contenthash].js", "[id].[contenthash].js"),
    };

    OutputConfig {
        path: settings.dest_dir.clone(),
        public_path: String::new(),
        filename: filename.to_string(),
        chunk_filename: chunk_filename.to_string(),
        asset_module_filename: asset_module_filename(settings.mode),
        devtool_module_filename_template: "[resource-path]?[loaders]".to_string(),
        hash_function: HASH_FUNCTION.to_string(),
        hash_digest: HASH_DIGEST.to_string(),
        hash_digest_length: HASH_DIGEST_LENGTH,
    }
}

/// Build a reusable configuration function.
///
/// This is the shape bundlers expect from a configuration module: called
/// once per build (or per target) with the invocation environment.
///
/// # Example
///
/// ```
/// use rigging::{configure, Project};
/// use serde_json::json;
///
/// let config_fn = configure(Project::new("Demo").with_root_dir("/srv/demo"), None);
/// let dev = config_fn(&json!({})).unwrap();
/// let prod = config_fn(&json!([{ "production": true }])).unwrap();
/// assert_ne!(dev.mode, prod.mode);
/// ```
pub fn configure(
    source: impl Into<ProjectSource>,
    caller: Option<PathBuf>,
) -> impl Fn(&Value) -> Result<BuildConfiguration> + Send + Sync {
    let synthesizer = match caller {
        Some(caller) => Synthesizer::new(source).with_caller_location(caller),
        None => Synthesizer::new(source),
    };
    move |env| synthesizer.synthesize(env)
}
