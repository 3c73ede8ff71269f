use crate::InteropError;

/// Renders a `codegenDecl` format string.
///
/// `$1` is the result type, `$2` the declared name and `$3` the parameter list.
/// `$$` produces a literal dollar sign.
pub fn render_codegen_decl(
    format: &str,
    result_type: &str,
    name: &str,
    params: &str,
) -> Result<String, InteropError> {
    let mut output = String::with_capacity(format.len() + name.len());
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        if c != '$' {
            output.push(c);
            continue;
        }

        match chars.next() {
            Some('1') => output.push_str(result_type),
            Some('2') => output.push_str(name),
            Some('3') => output.push_str(params),
            Some('$') => output.push('$'),
            Some(other) => return Err(InteropError::UnknownCodegenPlaceholder(other)),
            None => output.push('$'),
        }
    }

    Ok(output)
}

/// Checks a `codegenDecl` format without rendering it
pub fn validate_codegen_decl(format: &str) -> Result<(), InteropError> {
    render_codegen_decl(format, "", "", "").map(|_| ())
}
