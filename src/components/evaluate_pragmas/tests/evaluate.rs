use attributes::{Attribute, AttributeKey};
use build_pragma_ast::parse_listing;
use compiler::{BuildOptions, CheckKind, Compiler, Optimization};
use diagnostics::{DiagnosticFlags, DiagnosticId, DiagnosticKind, DiagnosticRecord};
use evaluate_pragmas::{ModuleSummary, PragmaCtx, process_modules};
use indoc::indoc;
use pragma_table::{BuildDirectiveKind, PragmaTable};
use source_files::SourceFiles;
use symbols::{Symbol, SymbolTable};

struct Outcome {
    halted: bool,
    records: Vec<DiagnosticRecord>,
    symbols: SymbolTable,
    summaries: Vec<ModuleSummary>,
}

impl Outcome {
    fn symbol(&self, name: &str) -> Option<&Symbol> {
        self.symbols
            .iter()
            .map(|(_, symbol)| symbol)
            .find(|symbol| symbol.name == name)
    }

    fn with_id(&self, id: DiagnosticId) -> Vec<&DiagnosticRecord> {
        self.records.iter().filter(|record| record.id == id).collect()
    }

    fn lines(&self, id: DiagnosticId) -> Vec<u32> {
        self.with_id(id)
            .iter()
            .filter_map(|record| record.source)
            .map(|source| source.location.line)
            .collect()
    }
}

fn evaluate(listings: &[&str]) -> Outcome {
    let mut source_files = SourceFiles::new();
    let keys = listings
        .iter()
        .enumerate()
        .map(|(i, listing)| source_files.add(format!("m{i}.prg").into(), listing.to_string()))
        .collect::<Vec<_>>();

    let modules = keys
        .iter()
        .map(|key| parse_listing(&source_files, *key).expect("listing parses"))
        .collect::<Vec<_>>();

    let table = PragmaTable::builtin();
    let options = BuildOptions {
        diagnostic_flags: DiagnosticFlags::collecting(),
        ..Default::default()
    };

    let mut ctx = PragmaCtx::new(&table, Compiler::new(options, &source_files));
    let summaries = process_modules(&mut ctx, &modules);

    Outcome {
        halted: ctx.is_halted(),
        records: ctx.compiler.diagnostics.take_records(),
        symbols: ctx.symbols,
        summaries,
    }
}

#[test]
fn fatal_stops_everything_after_it() {
    let outcome = evaluate(&[
        indoc! {r#"
            proc first {.inline.}
            {.fatal: "unsupported target".}
            proc second {.noinline.}
        "#},
        "proc third {.inline.}",
    ]);

    assert!(outcome.halted);
    assert!(outcome.symbol("first").is_some());
    assert!(outcome.symbol("second").is_none());
    assert!(outcome.symbol("third").is_none());
    assert_eq!(outcome.summaries.len(), 1);

    let last = outcome.records.last().unwrap();
    assert_eq!(last.kind, DiagnosticKind::Fatal);
    assert_eq!(last.message, "unsupported target");
    assert!(outcome.with_id(DiagnosticId::XDeclaredButNotUsed).is_empty());
}

#[test]
fn fatal_stops_later_statements() {
    let outcome = evaluate(&[indoc! {r#"
        {.fatal: "first".}
        {.error: "never reached".}
    "#}]);

    assert!(outcome.halted);
    assert_eq!(outcome.records.len(), 1);
}

#[test]
fn renamed_symbols_warn_once_per_reference() {
    let outcome = evaluate(&[indoc! {r#"
        proc newName {.deprecated: "old and new".}
        {.deprecated: [oldName: newName].}
        use oldName
        use oldName
    "#}]);

    assert_eq!(outcome.lines(DiagnosticId::Deprecated), vec![3, 4]);
    assert!(outcome.with_id(DiagnosticId::UndeclaredIdentifier).is_empty());
    assert!(outcome.symbol("newName").unwrap().referenced);
}

#[test]
fn deferred_diagnostics_fire_at_use_sites() {
    let outcome = evaluate(&[indoc! {r#"
        proc legacy {.deprecated: "use modern".}
        proc forbidden {.error: "not available on this target".}
        use legacy
        use forbidden
        use forbidden
    "#}]);

    let deprecated = outcome.with_id(DiagnosticId::Deprecated);
    assert_eq!(deprecated.len(), 1);
    assert_eq!(deprecated[0].message, "'legacy' is deprecated: use modern");

    let errors = outcome
        .records
        .iter()
        .filter(|record| record.kind == DiagnosticKind::Error)
        .collect::<Vec<_>>();
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|record| record.id == DiagnosticId::User));
    assert!(!outcome.halted);
}

#[test]
fn statement_error_does_not_halt() {
    let outcome = evaluate(&[indoc! {r#"
        {.error: "configuration is incomplete".}
        proc later {.used.}
    "#}]);

    assert!(!outcome.halted);
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].kind, DiagnosticKind::Error);
    assert!(outcome.symbol("later").is_some());
}

#[test]
fn aliases_expand_to_their_pragmas() {
    let outcome = evaluate(&[indoc! {r#"
        {.pragma: rtl, exportc, header: "rtl.h".}
        {.pragma: rtlInline, rtl, inline.}
        proc run {.rtl_inline.}
        {.pragma: rtl.}
        {.pragma: inline.}
        {.pragma: loop, loop.}
    "#}]);

    let run = outcome.symbol("run").unwrap();
    assert_eq!(
        run.attributes.get(AttributeKey::Export),
        Some(&Attribute::Export("run".into()))
    );
    assert_eq!(
        run.attributes.get(AttributeKey::Header),
        Some(&Attribute::Header("rtl.h".into()))
    );
    assert!(run.attributes.contains(AttributeKey::Inline));

    assert_eq!(outcome.lines(DiagnosticId::DuplicateUserPragmaAlias), vec![4, 5]);
    assert_eq!(outcome.lines(DiagnosticId::UnknownPragma), vec![6]);
    assert!(outcome.with_id(DiagnosticId::XDeclaredButNotUsed).is_empty());
}

#[test]
fn declarations_capture_effective_options() {
    let outcome = evaluate(&[indoc! {r#"
        proc before {.used.}
        {.push checks: off, callconv: cdecl.}
        proc inside {.used.}
        {.pop.}
        {.optimization: speed.}
        proc after {.used.}
    "#}]);

    assert!(outcome.records.is_empty());

    let before = &outcome.symbol("before").unwrap().options;
    let inside = &outcome.symbol("inside").unwrap().options;
    let after = &outcome.symbol("after").unwrap().options;

    assert!(before.checks.get(CheckKind::Bound));
    assert!(!inside.checks.get(CheckKind::Bound));
    assert!(after.checks.get(CheckKind::Bound));
    assert_eq!(before.optimization, Optimization::None);
    assert_eq!(after.optimization, Optimization::Speed);
    assert_eq!(outcome.summaries[0].final_options.optimization, Optimization::Speed);
}

#[test]
fn options_reset_between_modules() {
    let outcome = evaluate(&[
        "{.push overflowChecks: off.}\n{.optimization: size.}",
        "proc fresh {.used.}",
    ]);

    let fresh = &outcome.symbol("fresh").unwrap().options;
    assert!(fresh.checks.get(CheckKind::Overflow));
    assert_eq!(fresh.optimization, Optimization::None);
    assert_eq!(outcome.lines(DiagnosticId::UnbalancedPush), vec![1]);
}

#[test]
fn end_of_module_checks() {
    let outcome = evaluate(&[indoc! {r#"
        {.pop.}
        {.push boundChecks: off.}
        var unusedVar
        var keptVar {.used.}
        proc imported {.importc.}
        type Header {.exportc.}
        field bits {.bitsize: 3.}
    "#}]);

    assert_eq!(outcome.lines(DiagnosticId::UnbalancedPop), vec![1]);
    assert_eq!(outcome.lines(DiagnosticId::UnbalancedPush), vec![2]);

    let unused = outcome.with_id(DiagnosticId::XDeclaredButNotUsed);
    assert_eq!(unused.len(), 1);
    assert_eq!(unused[0].message, "'unusedVar' is declared but not used");
    assert_eq!(unused[0].kind, DiagnosticKind::Hint);
}

#[test]
fn suppression_pragmas_silence_later_diagnostics() {
    let outcome = evaluate(&[indoc! {r#"
        {.hint[XDeclaredButNotUsed]: off.}
        {.warnings: off.}
        proc old {.deprecated.}
        var unusedVar
        use old
        {.warning: "after warnings were disabled".}
        {.hint: "shown"    .}
    "#}]);

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].kind, DiagnosticKind::Hint);
    assert_eq!(outcome.records[0].message, "shown");
}

#[test]
fn reenabling_a_warning_restores_it() {
    let outcome = evaluate(&[indoc! {r#"
        {.warnings: off.}
        {.warning[Deprecated]: on.}
        {.hint[UserHint]: off.}
        proc old {.deprecated.}
        use old
        {.warning: "hidden by the global switch".}
        {.warnings: on.}
        {.warning: "shown".}
        {.hint: "hidden".}
    "#}]);

    assert_eq!(outcome.lines(DiagnosticId::Deprecated), vec![5]);
    assert_eq!(outcome.lines(DiagnosticId::UserWarning), vec![8]);
    assert!(outcome.lines(DiagnosticId::UserHint).is_empty());
}

#[test]
fn invalid_invocations_are_reported_and_ignored() {
    let outcome = evaluate(&[indoc! {r#"
        proc run {.notAPragma, bitsize: 3, inline: 1, no_side_effect.}
        type Node {.acyclic, shallow, inline.}
        use missing
        use run
        use Node
    "#}]);

    assert_eq!(outcome.lines(DiagnosticId::UnknownPragma), vec![1]);
    assert_eq!(outcome.lines(DiagnosticId::PragmaTargetMismatch), vec![1, 2]);
    assert_eq!(outcome.lines(DiagnosticId::InvalidPragmaArguments), vec![1]);
    assert_eq!(outcome.lines(DiagnosticId::UndeclaredIdentifier), vec![3]);

    let run = outcome.symbol("run").unwrap();
    assert_eq!(run.attributes.len(), 1);
    assert!(run.attributes.contains(AttributeKey::NoSideEffect));

    let node = outcome.symbol("Node").unwrap();
    assert!(node.attributes.contains(AttributeKey::Acyclic));
    assert!(node.attributes.contains(AttributeKey::Shallow));
    assert!(!node.attributes.contains(AttributeKey::Inline));
}

#[test]
fn build_directives_are_collected() {
    let outcome = evaluate(&[indoc! {r#"
        module io {.experimental: "views", passl: "-lm".}
        {.emit: "static int counter;".}
        {.passc: "-O2", link: "io.o", experimental: "views".}
    "#}]);

    assert!(outcome.records.is_empty());

    let summary = &outcome.summaries[0];
    assert_eq!(summary.name, "io");
    assert_eq!(summary.directives.emitted, vec!["static int counter;"]);
    assert_eq!(summary.directives.experimental.len(), 1);
    assert_eq!(
        summary
            .directives
            .of_kind(BuildDirectiveKind::PassL)
            .collect::<Vec<_>>(),
        vec!["-lm"]
    );
    assert_eq!(
        summary
            .directives
            .of_kind(BuildDirectiveKind::PassC)
            .collect::<Vec<_>>(),
        vec!["-O2"]
    );
}

#[test]
fn interop_attributes_are_recorded() {
    let outcome = evaluate(&[indoc! {r##"
        type Vector {.importcpp: "std::vector", header: "<vector>".}
        proc pushBack {.importcpp: "#.push_back(@)", header: "<vector>".}
        proc counter {.codegenDecl: "static $1 $2$3", cdecl.}
        proc broken {.codegenDecl: "$1 $9".}
        proc twice {.cdecl, stdcall.}
    "##}]);

    let push_back = outcome.symbol("pushBack").unwrap();
    let pattern = interop_pattern::InteropPattern::for_attributes(&push_back.attributes).unwrap();
    let receiver = interop_pattern::InteropExpr::value("items");
    assert_eq!(
        pattern.resolve(
            Some(&receiver),
            &[interop_pattern::InteropExpr::value("42")],
            &[]
        ),
        Ok("items.push_back(42)".into())
    );

    assert_eq!(outcome.lines(DiagnosticId::InvalidPragmaArguments), vec![4]);
    assert_eq!(outcome.lines(DiagnosticId::ConflictingPragmas), vec![5]);
    assert!(
        outcome
            .symbol("counter")
            .unwrap()
            .attributes
            .contains(AttributeKey::CodegenDecl)
    );
}
