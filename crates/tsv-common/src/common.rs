//! Script kinds and file extensions.

use std::path::Path;

/// File extensions understood by the front end.
pub mod extension {
    pub const TS: &str = ".ts";
    pub const TSX: &str = ".tsx";
    pub const DTS: &str = ".d.ts";
    pub const JS: &str = ".js";
    pub const JSX: &str = ".jsx";
    pub const JSON: &str = ".json";
    pub const TS_BUILD_INFO: &str = ".tsbuildinfo";
    pub const MJS: &str = ".mjs";
    pub const MTS: &str = ".mts";
    pub const DMTS: &str = ".d.mts";
    pub const CJS: &str = ".cjs";
    pub const CTS: &str = ".cts";
    pub const DCTS: &str = ".d.cts";
}

/// Extensions that mark a declaration file outright.
pub const SUPPORTED_DECLARATION_EXTENSIONS: [&str; 3] =
    [extension::DTS, extension::DCTS, extension::DMTS];

/// The flavour of source a file contains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScriptKind {
    #[default]
    Unknown,
    Js,
    Jsx,
    Ts,
    Tsx,
}

/// Derive the script kind from a file name's extension (case-insensitive).
pub fn get_script_kind_from_file_name(file_name: &str) -> ScriptKind {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("js") => ScriptKind::Js,
        Some("jsx") => ScriptKind::Jsx,
        Some("ts") => ScriptKind::Ts,
        Some("tsx") => ScriptKind::Tsx,
        _ => ScriptKind::Unknown,
    }
}

/// Resolve an explicit script kind, falling back to the file name and then to TS.
pub fn ensure_script_kind(file_name: &str, script_kind: ScriptKind) -> ScriptKind {
    let kind = if script_kind != ScriptKind::Unknown {
        script_kind
    } else {
        get_script_kind_from_file_name(file_name)
    };
    if kind != ScriptKind::Unknown {
        kind
    } else {
        ScriptKind::Ts
    }
}

#[inline]
pub fn file_extension_is(path: &str, extension: &str) -> bool {
    path.ends_with(extension)
}

pub fn file_extension_is_one_of(path: &str, extensions: &[&str]) -> bool {
    extensions.iter().any(|ext| file_extension_is(path, ext))
}

/// Check whether a file name denotes a declaration file (`.d.ts` and friends,
/// or a `.ts` file whose base name contains `.d.`, e.g. `lib.d.es5.ts`).
pub fn is_declaration_file_name(file_name: &str) -> bool {
    if file_extension_is_one_of(file_name, &SUPPORTED_DECLARATION_EXTENSIONS) {
        return true;
    }
    file_extension_is(file_name, extension::TS)
        && Path::new(file_name)
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.contains(".d."))
}
