//! Asset rule construction.
//!
//! One rule per [`AssetClass`], emitted in [`AssetClass::ALL`] order. Stage
//! order inside a rule is fixed per class: the engine applies loaders from
//! the last stage to the first, so pre-processor expansion sits last and the
//! style delivery stage first.

use rigging_config::{AssetClass, AssetRule, Mode, Stage, StageKind};
use serde_json::{json, Value};

use crate::settings::ResolvedSettings;

/// Vendored dependencies are never compiled.
pub const NODE_MODULES: &str = r"[\\/]node_modules[\\/]";

const CSS_CONTENT_HASH: &str = "[sha256:contenthash:base64:5]";
const FILE_CONTENT_HASH: &str = "[sha256:hash:base64:8]";
const EXTRACT_LOADER: &str = "mini-css-extract-plugin/dist/loader";

pub fn build_rules(settings: &ResolvedSettings) -> Vec<AssetRule> {
    AssetClass::ALL
        .into_iter()
        .map(|class| build_rule(class, settings))
        .collect()
}

pub fn build_rule(class: AssetClass, settings: &ResolvedSettings) -> AssetRule {
    match class {
        AssetClass::Script => script_rule(settings.mode),
        AssetClass::Markup => markup_rule(settings),
        AssetClass::Stylesheet | AssetClass::PreprocessedStylesheet => {
            stylesheet_rule(class, settings)
        }
        AssetClass::Binary => binary_rule(settings.mode),
    }
}

/// Class-name template for CSS Modules.
///
/// Development keeps the local name readable; production uses only the
/// namespace and a content hash.
pub fn local_ident_name(mode: Mode, namespace: &str) -> String {
    match mode {
        Mode::Development => format!("[local]-{CSS_CONTENT_HASH}"),
        Mode::Production => format!("{namespace}{CSS_CONTENT_HASH}"),
    }
}

/// Output name for copied files. The source path is only kept in development.
pub fn binary_filename(mode: Mode) -> String {
    match mode {
        Mode::Development => format!("[path][name].{FILE_CONTENT_HASH}.[ext]"),
        Mode::Production => format!("{FILE_CONTENT_HASH}.[ext]"),
    }
}

/// Output name for modules emitted as `asset/resource`, such as markup.
///
/// Uses the engine's own `[contenthash]`, which follows the output hash
/// settings; `[ext]` already carries the leading dot here.
pub fn asset_module_filename(mode: Mode) -> String {
    match mode {
        Mode::Development => "[path][name].[contenthash][ext]".to_string(),
        Mode::Production => "[contenthash][ext]".to_string(),
    }
}

fn script_rule(mode: Mode) -> AssetRule {
    let compile = Stage::new(
        StageKind::Compile,
        "ts-loader",
        json!({
            "transpileOnly": !mode.is_production(),
            "compilerOptions": {
                "declaration": false,
                "noEmit": false
            }
        }),
    );
    AssetRule::new(AssetClass::Script, vec![compile]).with_exclude(NODE_MODULES)
}

fn markup_rule(settings: &ResolvedSettings) -> AssetRule {
    let stages = vec![
        Stage::new(StageKind::ContentExtract, "extract-loader", Value::Null),
        Stage::new(
            StageKind::Minify,
            "html-loader",
            json!({ "minimize": settings.markup_minify }),
        ),
    ];
    AssetRule::new(AssetClass::Markup, stages).with_module_type("asset/resource")
}

fn stylesheet_rule(class: AssetClass, settings: &ResolvedSettings) -> AssetRule {
    let production = settings.mode.is_production();
    let preprocessed = class == AssetClass::PreprocessedStylesheet;

    let mut stages = vec![delivery_stage(settings)];

    let trailing = usize::from(production) + usize::from(preprocessed);
    stages.push(scoped_classes_stage(settings, trailing));

    if production {
        stages.push(Stage::new(
            StageKind::PostProcess,
            "postcss-loader",
            json!({
                "postcssOptions": {
                    "plugins": ["autoprefixer", "cssnano"]
                }
            }),
        ));
    }

    if preprocessed {
        stages.push(Stage::new(
            StageKind::Preprocess,
            "less-loader",
            json!({ "sourceMap": !production }),
        ));
    }

    AssetRule::new(class, stages)
}

fn delivery_stage(settings: &ResolvedSettings) -> Stage {
    if settings.extract_css {
        return Stage::new(StageKind::Extract, EXTRACT_LOADER, Value::Null);
    }

    let development = !settings.mode.is_production();
    Stage::new(
        StageKind::Inject,
        "style-loader",
        json!({
            "hmr": development,
            "sourceMap": development,
            "convertToAbsoluteUrls": development
        }),
    )
}

/// `importLoaders` counts the stages after this one.
fn scoped_classes_stage(settings: &ResolvedSettings, import_loaders: usize) -> Stage {
    let modules = match &settings.css_namespace {
        Some(namespace) => json!({
            "mode": "local",
            "localIdentName": local_ident_name(settings.mode, namespace),
            "exportLocalsConvention": "camelCase"
        }),
        None => Value::Bool(false),
    };

    Stage::new(
        StageKind::ScopedClasses,
        "css-loader",
        json!({
            "modules": modules,
            "importLoaders": import_loaders,
            "sourceMap": !settings.mode.is_production()
        }),
    )
}

fn binary_rule(mode: Mode) -> AssetRule {
    let copy = Stage::new(
        StageKind::Copy,
        "file-loader",
        json!({ "name": binary_filename(mode) }),
    );
    AssetRule::new(AssetClass::Binary, vec![copy])
}
