use super::InteropCommand;
use interop_pattern::{ForeignType, InteropExpr};

impl InteropCommand {
    pub fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, ()> {
        // Skip over 'interop' command keyword
        args.next();

        let Some(pattern) = args.next() else {
            eprintln!("error: Expected pattern after 'interop'");
            return Err(());
        };

        let mut receiver = None;
        let mut call_args = Vec::new();
        let mut types = Vec::new();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--receiver" | "--receiver-ptr" => {
                    let Some(text) = args.next() else {
                        eprintln!("error: Expected expression after '{arg}'");
                        return Err(());
                    };

                    let expr = if arg == "--receiver-ptr" {
                        InteropExpr::pointer(text)
                    } else {
                        parse_expr(&text)
                    };

                    if receiver.replace(expr).is_some() {
                        eprintln!("error: Multiple receivers specified");
                        return Err(());
                    }
                }
                "--type" => {
                    let Some(text) = args.next() else {
                        eprintln!("error: Expected type after '--type'");
                        return Err(());
                    };

                    types.push(parse_type(&text));
                }
                _ => call_args.push(parse_expr(&arg)),
            }
        }

        Ok(Self {
            pattern,
            receiver,
            args: call_args,
            types,
        })
    }
}

/// Reads `f(a, b)` as a call and anything else as a plain value
fn parse_expr(text: &str) -> InteropExpr {
    let call = text
        .strip_suffix(')')
        .and_then(|rest| rest.split_once('('))
        .filter(|(callee, _)| !callee.is_empty());

    match call {
        Some((callee, args)) => InteropExpr::call(callee, split_top_level(args)),
        None => InteropExpr::value(text),
    }
}

/// Reads `T`, `T*` and `Name<A, B>`
fn parse_type(text: &str) -> ForeignType {
    let text = text.trim();

    if let Some(inner) = text.strip_suffix('*') {
        return ForeignType::pointer_to(parse_type(inner));
    }

    let generic = text
        .strip_suffix('>')
        .and_then(|rest| rest.split_once('<'));

    match generic {
        Some((name, args)) => ForeignType::Generic {
            name: name.trim().into(),
            args: split_top_level(args)
                .into_iter()
                .map(|arg| parse_type(&arg))
                .collect(),
        },
        None => ForeignType::named(text),
    }
}

/// Splits on commas that are not nested inside brackets
fn split_top_level(text: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for c in text.chars() {
        match c {
            '(' | '<' | '[' => depth += 1,
            ')' | '>' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(std::mem::take(&mut current).trim().to_string());
                continue;
            }
            _ => (),
        }
        current.push(c);
    }

    if !current.trim().is_empty() || !parts.is_empty() {
        parts.push(current.trim().to_string());
    }

    parts
}
