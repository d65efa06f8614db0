//! Plugin assembly.

use rigging_config::{CleanOptions, CssExtractOptions, HtmlPluginOptions, Plugin};

use crate::settings::ResolvedSettings;

/// Plugins in execution order: cleanup, defines, CSS extraction, markup.
pub fn assemble_plugins(settings: &ResolvedSettings) -> Vec<Plugin> {
    let mut plugins = Vec::with_capacity(4);

    // Development writes incrementally into existing output.
    if settings.mode.is_production() {
        plugins.push(Plugin::Clean(CleanOptions {
            path: settings.dest_dir.clone(),
            root: settings.root_dir.clone(),
        }));
    }

    plugins.push(Plugin::Define(settings.define.clone()));

    if settings.extract_css {
        plugins.push(Plugin::CssExtract(CssExtractOptions {
            filename: "[name].[contenthash].css".to_string(),
            chunk_filename: "[id].[contenthash].css".to_string(),
        }));
    }

    if let Some(html) = &settings.html {
        let mut options = HtmlPluginOptions::new(&settings.title, settings.markup_minify.clone());
        options.template = html.template.clone();
        options.template_parameters = html.template_parameters.clone();
        plugins.push(Plugin::Html(options));
    }

    plugins
}
