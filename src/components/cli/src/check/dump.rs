use attributes::Attribute;
use evaluate_pragmas::ModuleSummary;
use itertools::Itertools;
use std::fmt::Write;
use symbols::{Symbol, SymbolTable};

pub fn dump_module(summary: &ModuleSummary, symbols: &SymbolTable) -> String {
    let mut output = String::new();
    writeln!(output, "module {}", summary.name).expect("write to string");

    for id in summary.symbols.iter() {
        writeln!(output, "  {}", dump_symbol(symbols.get(*id))).expect("write to string");
    }

    let directives = &summary.directives;

    for code in directives.emitted.iter() {
        writeln!(output, "  emit {:?}", code).expect("write to string");
    }

    for feature in directives.experimental.iter() {
        writeln!(output, "  experimental {:?}", feature).expect("write to string");
    }

    for (kind, value) in directives.entries.iter() {
        writeln!(output, "  {} {:?}", kind.name(), value).expect("write to string");
    }

    output
}

fn dump_symbol(symbol: &Symbol) -> String {
    let mut line = format!("{} {}", symbol.kind.keyword(), symbol.name);

    if !symbol.attributes.is_empty() {
        line.push_str(&format!(" {{.{}.}}", symbol.attributes.iter().format(", ")));
    }

    let options = &symbol.options;
    let calling_convention = symbol
        .attributes
        .iter()
        .find_map(|attribute| match attribute {
            Attribute::CallConv(convention) => Some(*convention),
            _ => None,
        })
        .unwrap_or(options.calling_convention);

    line.push_str(&format!(
        "  # optimization: {}, callconv: {}, checks: {}",
        options.optimization,
        calling_convention,
        if options.checks == compiler::Checks::all(true) {
            "on"
        } else if options.checks == compiler::Checks::all(false) {
            "off"
        } else {
            "mixed"
        }
    ));

    line
}
