use std::ops::Deref;

use gtmpl::{Context, Func, Template, Value};

use crate::error::{Error, Result};
use crate::funcs::SPARSE_FUNCS;
use crate::strip::strip;

/// Collects the name and functions of a sparse template before parsing it.
///
/// `last` is always installed first, so functions added here may replace it.
pub struct Builder {
    name: String,
    funcs: Vec<(String, Func)>,
}

impl Builder {
    pub fn new<N: Into<String>>(name: N) -> Builder {
        Builder {
            name: name.into(),
            funcs: Vec::default(),
        }
    }

    pub fn func(mut self, name: &str, func: Func) -> Builder {
        self.funcs.push((name.to_owned(), func));
        self
    }

    pub fn funcs(mut self, funcs: &[(&str, Func)]) -> Builder {
        self.funcs
            .extend(funcs.iter().map(|&(name, func)| (name.to_owned(), func)));
        self
    }

    pub(crate) fn template(&self, name: &str) -> Template {
        let mut tmpl = Template::with_name(name);
        for &(name, func) in SPARSE_FUNCS.iter() {
            tmpl.add_func(name, func);
        }
        for (name, func) in &self.funcs {
            tmpl.add_func(name, *func);
        }
        tmpl
    }

    /// Strips `text` and parses it into a template named after the builder.
    pub fn parse(self, text: &str) -> Result<SparseTemplate> {
        let stripped = strip(text);
        trace!(
            "parsing {}: stripped {} to {} bytes",
            self.name,
            text.len(),
            stripped.len()
        );
        let mut inner = self.template(&self.name);
        inner.parse(stripped).map_err(|e| Error::Parse {
            name: self.name.clone(),
            source: e.into(),
        })?;
        Ok(SparseTemplate {
            name: self.name,
            inner,
        })
    }
}

/// A template parsed from sparse text.
///
/// `execute` returns the rendered output as a `String` and panics if the
/// template fails to execute. Use `try_execute` to get the error instead, or
/// go through `Deref` to the wrapped `gtmpl::Template` for the engine's own
/// API.
pub struct SparseTemplate {
    pub(crate) name: String,
    pub(crate) inner: Template,
}

impl SparseTemplate {
    pub fn new<N: Into<String>>(name: N, text: &str) -> Result<SparseTemplate> {
        Builder::new(name).parse(text)
    }

    /// Like `new`, but panics if `text` does not parse.
    pub fn must<N: Into<String>>(name: N, text: &str) -> SparseTemplate {
        match SparseTemplate::new(name, text) {
            Ok(tmpl) => tmpl,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renders the template, panicking on any execution error.
    pub fn execute<T: Into<Value>>(&self, data: T) -> String {
        match self.try_execute(data) {
            Ok(output) => output,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_execute<T: Into<Value>>(&self, data: T) -> Result<String> {
        execute_to_string(&self.inner, data)
    }

    pub fn as_template(&self) -> &Template {
        &self.inner
    }

    pub fn into_inner(self) -> Template {
        self.inner
    }
}

impl Deref for SparseTemplate {
    type Target = Template;

    fn deref(&self) -> &Template {
        &self.inner
    }
}

/// Executes `tmpl` into a buffer and returns the buffer as a `String`.
///
/// Output written before a failure is kept in the returned error, see
/// `Error::partial_output`.
pub fn execute_to_string<T: Into<Value>>(tmpl: &Template, data: T) -> Result<String> {
    let mut buf: Vec<u8> = vec![];
    let res = tmpl.execute(&mut buf, &Context::from(data));
    let output = String::from_utf8_lossy(&buf).into_owned();
    match res {
        Ok(_) => Ok(output),
        Err(e) => Err(Error::Execute {
            output,
            source: e.into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use gtmpl::FuncError;

    fn shout(args: &[Value]) -> std::result::Result<Value, FuncError> {
        match args.first() {
            Some(Value::String(s)) => Ok(Value::from(s.to_uppercase())),
            _ => Err(anyhow!("shout requires a string").into()),
        }
    }

    fn never(_: &[Value]) -> std::result::Result<Value, FuncError> {
        Ok(Value::from(false))
    }

    #[test]
    fn test_parse() {
        let tmpl = SparseTemplate::new(
            "foo",
            "\n  {{ if eq \"bar\" \"bar\" }}\n    2000\n  {{ end }}\n",
        );
        assert!(tmpl.is_ok());
        let tmpl = tmpl.unwrap();
        assert_eq!(tmpl.name(), "foo");
        assert_eq!(tmpl.execute(Value::Nil), "2000");
    }

    #[test]
    fn test_parse_error() {
        let err = SparseTemplate::new("broken", "{{ end }}").err().unwrap();
        match err {
            Error::Parse { ref name, .. } => assert_eq!(name, "broken"),
            _ => panic!("unexpected error: {}", err),
        }
    }

    #[test]
    fn test_builder_funcs() {
        let tmpl = Builder::new("shout")
            .func("shout", shout)
            .parse("\n    {{ shout . }}\n    !\n")
            .unwrap();
        assert_eq!(tmpl.execute("hey"), "HEY!");
    }

    #[test]
    fn test_builder_overrides_last() {
        let tmpl = Builder::new("never")
            .funcs(&[("last", never as Func)])
            .parse("{{range $i, $v := .}}{{$v}}{{if last $i $ | not}};{{end}}{{end}}")
            .unwrap();
        assert_eq!(tmpl.execute(vec![1, 2]), "1;2;");
    }

    #[test]
    fn test_execute_to_string_partial() {
        let tmpl = SparseTemplate::must("partial", "\n  before\n  {{ last 0 . }}\n  after\n");
        let err = execute_to_string(&tmpl, 42).err().unwrap();
        assert_eq!(err.partial_output(), Some("before"));
    }

    #[test]
    fn test_deref() {
        let tmpl = SparseTemplate::must("raw", "  {{ . }}");
        assert_eq!(tmpl.render(&Context::from(7)).unwrap(), "7");
        assert_eq!(tmpl.into_inner().render(&Context::from("x")).unwrap(), "x");
    }
}
