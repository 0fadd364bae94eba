use anyhow::anyhow;
use gtmpl_value::{Func, FuncError, Value};

lazy_static! {
    /// Functions installed on every sparse template before it is parsed.
    pub static ref SPARSE_FUNCS: Vec<(&'static str, Func)> = vec![("last", last as Func)];
}

#[doc = "
Returns the boolean truth of index == len(collection) - 1

Meant to be used inside a `range` to tell the last element apart, e.g. to
skip a trailing separator.

# Example
```
use gtmpl_sparse::SparseTemplate;

let tmpl = SparseTemplate::must(\"list\", r#\"
    {{range $i, $v := .}}
        {{$v}}
        {{if last $i $ | not}},{{end}}
    {{end}}
\"#);
assert_eq!(tmpl.execute(vec![1, 2, 3]), \"1,2,3\");
```
"]
pub fn last(args: &[Value]) -> Result<Value, FuncError> {
    if args.len() != 2 {
        return Err(anyhow!("last requires exactly 2 arguments, got {}", args.len()).into());
    }
    let index = match args[0] {
        Value::Number(ref n) => n
            .as_i64()
            .ok_or_else(|| anyhow!("last requires an integer index, got {}", args[0]))?,
        _ => return Err(anyhow!("last requires an integer index, got {}", args[0]).into()),
    };
    let len = length(&args[1])?;
    if len == 0 {
        return Err(anyhow!("no last element in empty {}", args[1]).into());
    }
    Ok(Value::from(index == len as i64 - 1))
}

fn length(val: &Value) -> Result<usize, FuncError> {
    match *val {
        Value::Array(ref a) => Ok(a.len()),
        Value::Map(ref m) => Ok(m.len()),
        Value::Object(ref o) => Ok(o.len()),
        Value::String(ref s) => Ok(s.len()),
        _ => Err(anyhow!("unable to take length of {}", val).into()),
    }
}
