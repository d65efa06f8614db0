//! Ambient module declarations for asset imports.
//!
//! Tells the type checker what a static import of a stylesheet, a page or a
//! media file evaluates to. Generated from the extension table the asset
//! rules are built from.

use std::fmt::Write as _;

use rigging_config::AssetClass;

/// What a static import of an asset evaluates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportShape {
    /// Mapping of source class names to generated identifiers
    ClassNames,
    /// Public URL of the emitted file
    Url,
}

/// Scripts resolve through the compiler and need no declaration.
pub fn import_shape(class: AssetClass) -> Option<ImportShape> {
    match class {
        AssetClass::Script => None,
        AssetClass::Stylesheet | AssetClass::PreprocessedStylesheet => {
            Some(ImportShape::ClassNames)
        }
        AssetClass::Markup | AssetClass::Binary => Some(ImportShape::Url),
    }
}

/// Render the declaration file for every declared asset extension.
pub fn render() -> String {
    let mut out = String::new();

    for class in AssetClass::ALL {
        let Some(shape) = import_shape(class) else {
            continue;
        };
        for ext in class.extensions() {
            write_module(&mut out, ext, shape);
        }
    }

    out.push_str(
        "declare namespace NodeJS {\n    interface Process {\n        readonly env: {\n            readonly [key: string]: unknown;\n            readonly NODE_ENV: string;\n        };\n    }\n}\n",
    );
    out
}

fn write_module(out: &mut String, ext: &str, shape: ImportShape) {
    let (binding, ty) = match shape {
        ImportShape::ClassNames => ("mappings", "{readonly [key: string]: string}"),
        ImportShape::Url => ("url", "string"),
    };
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "declare module \"*.{ext}\" {{\n    const {binding}: {ty};\n    export default {binding};\n}}\n\n"
    );
}
