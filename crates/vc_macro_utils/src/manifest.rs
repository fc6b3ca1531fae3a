use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use proc_macro2::Span;
use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for another crate as seen from the
/// caller's Cargo.toml.
///
/// This helper is intended for proc-macro code generation where the emitted
/// path must be valid from the invoking crate.
///
/// # Example
///
/// ```rust
/// # use vc_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("vc_schema"));
/// ```
///
/// Reading the manifest is not cheap: call this once per macro invocation
/// and pass the resulting path around.
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If it is listed under another key with `package = "crate_name"`,
///    return `::key`.
/// 3. If the requested crate name begins with `vc_` and the caller depends on
///    the umbrella crate `vc_convert`, return `::vc_convert::short_name`
///    (e.g. `vc_schema` -> `::vc_convert::schema`).
/// 4. Repeat steps 1-3 in `dev-dependencies`.
/// 5. Otherwise, fall back to the absolute path `::crate_name`.
///
/// ## Note
///
/// A crate that refers to itself through generated code needs
/// `extern crate self as crate_name;` in its root, so that `::crate_name`
/// resolves in its own unit tests as well as in doctests.
#[derive(Debug)]
pub struct Manifest {
    manifest: Option<Document<Box<str>>>,
    modified_time: Option<SystemTime>,
}

const UMBRELLA_NAME: &str = "vc_convert";
const FAMILY_PREFIX: &str = "vc_";

impl Manifest {
    #[inline(never)]
    fn manifest_path() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        Some(path)
    }

    #[inline(never)]
    fn modified_time(path: &Path) -> Option<SystemTime> {
        std::fs::metadata(path)
            .and_then(|metadata| metadata.modified())
            .ok()
    }

    #[inline(never)]
    fn read(path: &Path) -> Option<Document<Box<str>>> {
        let text = std::fs::read_to_string(path).ok()?.into_boxed_str();
        Document::parse(text).ok()
    }

    /// Builds `::first::second...` from plain identifiers.
    fn absolute_path<'a>(segments: impl IntoIterator<Item = &'a str>) -> syn::Path {
        let mut path = syn::Path {
            leading_colon: Some(Default::default()),
            segments: Default::default(),
        };
        for segment in segments {
            path.segments
                .push(syn::Ident::new(segment, Span::call_site()).into());
        }
        path
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::absolute_path([name]));
        }

        // `alias = { package = "name", ... }`
        let renamed = deps.iter().find_map(|(key, item)| {
            let package = item.get("package")?.as_str()?;
            (package == name).then_some(key)
        });
        if let Some(alias) = renamed {
            return Some(Self::absolute_path([alias]));
        }

        let module = name.strip_prefix(FAMILY_PREFIX)?;
        deps.contains_key(UMBRELLA_NAME)
            .then(|| Self::absolute_path([UMBRELLA_NAME, module]))
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the top-level documentation for the resolution
    /// order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        let found = self.manifest.as_ref().and_then(|manifest| {
            ["dependencies", "dev-dependencies"]
                .into_iter()
                .find_map(|section| match manifest.get(section) {
                    Some(Item::Table(deps)) => Self::find_in_deps(deps, name),
                    _ => None,
                })
        });

        found.unwrap_or_else(|| Self::absolute_path([name]))
    }

    /// Obtain the [`Manifest`] of the caller's Cargo.toml.
    ///
    /// The parsed manifest is cached per path and re-read when the file
    /// changes. An unreadable manifest resolves every crate to `::crate_name`.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(manifest_path) = Self::manifest_path() else {
            return func(&Manifest {
                manifest: None,
                modified_time: None,
            });
        };
        let modified_time = Self::modified_time(&manifest_path);

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(manifest) = manifests.get(&manifest_path)
            && modified_time.is_some()
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }
        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read(&manifest_path),
            modified_time,
        };
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Manifest;
    use quote::ToTokens;
    use toml_edit::Document;

    fn resolve(manifest: &str, name: &str) -> String {
        let manifest = Manifest {
            manifest: Some(Document::parse(manifest.into()).unwrap()),
            modified_time: None,
        };
        manifest
            .get_crate_path(name)
            .to_token_stream()
            .to_string()
            .replace(' ', "")
    }

    #[test]
    fn direct_dependency() {
        let toml = "[dependencies]\nvc_schema = \"0.0.1\"\n";
        assert_eq!(resolve(toml, "vc_schema"), "::vc_schema");
    }

    #[test]
    fn renamed_dependency() {
        let toml = "[dependencies]\nschema = { package = \"vc_schema\", path = \"..\" }\n";
        assert_eq!(resolve(toml, "vc_schema"), "::schema");
    }

    #[test]
    fn umbrella_dependency() {
        let toml = "[dev-dependencies]\nvc_convert = { path = \"..\" }\n";
        assert_eq!(resolve(toml, "vc_schema"), "::vc_convert::schema");
    }

    #[test]
    fn fallback() {
        assert_eq!(resolve("[package]\nname = \"x\"\n", "vc_schema"), "::vc_schema");
    }
}
