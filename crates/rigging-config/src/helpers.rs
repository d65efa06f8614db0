pub const DEFAULT_ENTRY: &str = "./index";
pub const DEFAULT_NAMESPACE: &str = "sv";
pub const DEFAULT_DEST_DIR: &str = "dist";

/// Where generated pages place script tags
pub const DEFAULT_INJECT: &str = "head";
