//! Grammar scopes and file extensions handled by the language server

/// Grammar scopes for TypeScript buffers
pub const TS_SCOPES: &[&str] = &["source.ts", "source.tsx", "typescript"];

/// Grammar scopes for JavaScript buffers
pub const JS_SCOPES: &[&str] = &["source.js", "source.js.jsx", "javascript"];

/// Extensions watched for TypeScript projects
pub const TS_EXTENSIONS: &[&str] = &["*.json", ".ts", ".tsx"];

/// Extensions watched in addition when JavaScript support is on
pub const JS_EXTENSIONS: &[&str] = &[".js", ".jsx"];

/// TypeScript scopes, followed by JavaScript scopes when requested
pub fn grammar_scopes(javascript_support: bool) -> Vec<String> {
    select(TS_SCOPES, JS_SCOPES, javascript_support)
}

/// TypeScript extensions, followed by JavaScript extensions when requested
pub fn supported_extensions(javascript_support: bool) -> Vec<String> {
    select(TS_EXTENSIONS, JS_EXTENSIONS, javascript_support)
}

fn select(base: &[&str], extra: &[&str], include_extra: bool) -> Vec<String> {
    let mut out: Vec<String> = base.iter().map(|s| s.to_string()).collect();
    if include_extra {
        out.extend(extra.iter().map(|s| s.to_string()));
    }
    out
}
