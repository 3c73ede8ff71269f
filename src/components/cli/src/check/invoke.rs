use super::{CheckCommand, dump::dump_module};
use crate::Invoke;
use build_pragma_ast::parse_listing;
use compiler::Compiler;
use evaluate_pragmas::{PragmaCtx, process_modules};
use pragma_table::PragmaTable;
use source_files::SourceFiles;

impl Invoke for CheckCommand {
    fn invoke(self) -> Result<(), ()> {
        let CheckCommand { filenames, options } = self;
        let mut source_files = SourceFiles::new();
        let mut keys = Vec::with_capacity(filenames.len());

        for filename in filenames {
            let content = std::fs::read_to_string(&filename).map_err(|error| {
                eprintln!("error: Failed to read '{filename}': {error}");
            })?;

            keys.push(source_files.add(filename.into(), content));
        }

        let dump_symbols = options.dump_symbols;
        let table = PragmaTable::builtin();
        let mut ctx = PragmaCtx::new(&table, Compiler::new(options, &source_files));

        let modules = keys
            .into_iter()
            .filter_map(|key| match parse_listing(&source_files, key) {
                Ok(module) => Some(module),
                Err(error) => {
                    ctx.report(error);
                    None
                }
            })
            .collect::<Vec<_>>();

        let summaries = process_modules(&mut ctx, &modules);

        if !ctx.compiler.diagnostics.flags().print_without_collecting {
            ctx.compiler.diagnostics.print_all();
        }

        if dump_symbols {
            for summary in summaries.iter() {
                print!("{}", dump_module(summary, &ctx.symbols));
            }
        }

        ctx.compiler.finish()
    }
}
