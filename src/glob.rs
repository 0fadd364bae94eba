use std::fs;
use std::path::Path;

use gtmpl::TemplateError;

use crate::error::{Error, Result};
use crate::strip::strip;
use crate::template::{Builder, SparseTemplate};

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl Builder {
    /// Strips and parses every file matching `pattern` into one template set.
    ///
    /// Each file becomes a template named after its base name. Files are
    /// taken in path order and the first one is the template that gets
    /// executed; the others are reachable through `{{template "name" .}}`.
    /// The builder's own name is not used.
    pub fn parse_glob(self, pattern: &str) -> Result<SparseTemplate> {
        let paths = glob::glob(pattern).map_err(|source| Error::Pattern {
            pattern: pattern.to_owned(),
            source,
        })?;
        let mut set: Option<SparseTemplate> = None;
        for entry in paths {
            let path = entry?;
            let name = base_name(&path);
            let text = fs::read_to_string(&path).map_err(|source| Error::Read {
                path: path.clone(),
                source,
            })?;
            let stripped = strip(&text);
            debug!("adding {} from {}", name, path.display());
            let res = match set {
                Some(ref mut tmpl) => tmpl.inner.add_template(name.clone(), stripped),
                None => {
                    let mut inner = self.template(&name);
                    let res = inner.parse(stripped).map_err(TemplateError::from);
                    set = Some(SparseTemplate {
                        name: name.clone(),
                        inner,
                    });
                    res
                }
            };
            res.map_err(|source| Error::Parse { name, source })?;
        }
        set.ok_or_else(|| Error::NoMatch(pattern.to_owned()))
    }
}

/// `Builder::parse_glob` without extra functions.
pub fn parse_glob(pattern: &str) -> Result<SparseTemplate> {
    Builder::new("").parse_glob(pattern)
}
