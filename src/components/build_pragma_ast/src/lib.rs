mod error;
mod input;
mod parser;

pub use error::{ParseError, ParseErrorKind};
use input::Input;
use parser::Parser;
use pragma_ast::Module;
use source_files::{SourceFileKey, SourceFiles};

/// Reads a declaration listing into a module.
///
/// The module is named after the file unless the listing starts with a
/// `module` header.
pub fn parse_listing(source_files: &SourceFiles, key: SourceFileKey) -> Result<Module, ParseError> {
    let file = source_files.get(key);

    let default_name = file
        .filepath()
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("main")
        .to_string();

    Parser::new(Input::new(file.content(), key), default_name).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pragma_ast::{DeclKind, Item, PragmaArgKind};

    fn parse(content: &str) -> Result<Module, ParseError> {
        let mut source_files = SourceFiles::new();
        let key = source_files.add("listing.prg".into(), content.into());
        parse_listing(&source_files, key)
    }

    #[test]
    fn reads_declarations_and_statements() {
        let module = parse(indoc! {r#"
            module net {.experimental: "views".}

            # comment
            {.push checks: off, optimization: speed.}
            proc send {.importc: "send", header: "<sys/socket.h>".}
            {.pop.}
            var count {.volatile.}   # trailing comment
            use send
        "#})
        .unwrap();

        assert_eq!(module.name, "net");
        assert_eq!(module.pragmas.len(), 1);
        assert_eq!(module.items.len(), 5);

        let Item::PragmaStmt(push) = &module.items[0] else {
            panic!("expected pragma statement");
        };
        assert_eq!(push.pragmas[0].name, "push");
        assert_eq!(push.pragmas[0].args.len(), 2);

        let Item::Declaration(send) = &module.items[1] else {
            panic!("expected declaration");
        };
        assert_eq!(send.kind, DeclKind::Proc);
        assert_eq!(send.name, "send");
        assert_eq!(send.source.location.line, 5);
        assert_eq!(send.source.location.column, 6);
        assert_eq!(
            send.pragmas.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            vec!["importc", "header"]
        );

        assert!(matches!(&module.items[4], Item::Reference(r) if r.name == "send"));
    }

    #[test]
    fn reads_selectors_and_rename_lists() {
        let module = parse(indoc! {r#"
            {.warning[Deprecated]: off, deprecated: [oldName: newName].}
        "#})
        .unwrap();

        let Item::PragmaStmt(stmt) = &module.items[0] else {
            panic!("expected pragma statement");
        };

        assert_eq!(stmt.pragmas[0].selector.as_deref(), Some("Deprecated"));
        let renames = stmt.pragmas[1].args[0].as_rename_list().unwrap();
        assert_eq!(renames[0].0, "oldName");
        assert_eq!(renames[0].1, "newName");
    }

    #[test]
    fn pragma_alias_takes_remaining_items() {
        let module = parse(r#"{.pragma: rtl, exportc, header: "rtl.h".}"#).unwrap();

        let Item::PragmaStmt(stmt) = &module.items[0] else {
            panic!("expected pragma statement");
        };

        assert_eq!(stmt.pragmas.len(), 1);
        let args = &stmt.pragmas[0].args;
        assert_eq!(args.len(), 3);
        assert_eq!(args[0].as_ident(), Some("rtl"));
        assert!(matches!(args[2].kind, PragmaArgKind::KeyValue { .. }));
    }

    #[test]
    fn module_name_defaults_to_file_stem() {
        assert_eq!(parse("proc main").unwrap().name, "listing");
    }

    #[test]
    fn errors_carry_locations() {
        let error = parse("proc run {.inline\nvar x").unwrap_err();
        assert_eq!(error.kind, ParseErrorKind::Expected(','));
        assert_eq!(error.source.location.line, 2);

        let error = parse("proc run\nfunc other").unwrap_err();
        assert_eq!(error.kind, ParseErrorKind::ExpectedDeclaration("func".into()));
        assert_eq!(error.source.location.line, 2);
        assert_eq!(error.source.location.column, 1);

        let error = parse(r#"{.emit: "unterminated.}"#).unwrap_err();
        assert_eq!(error.kind, ParseErrorKind::UnterminatedString);
        assert_eq!(error.source.location.column, 9);
    }
}
