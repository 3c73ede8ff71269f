use super::HelpCommand;
use crate::Invoke;
use indoc::printdoc;

impl Invoke for HelpCommand {
    fn invoke(self) -> Result<(), ()> {
        printdoc! {"
            usage: pragmac check FILE... [OPTIONS]
                   pragmac interop PATTERN [--receiver EXPR | --receiver-ptr EXPR] [ARG...] [--type TYPE...]

            check options:
              --checks:on|off           enable or disable all runtime checks
              --opt:none|speed|size     optimization mode
              --callconv:NAME           default calling convention
              --dead-code-elim:on|off   dead code elimination
              --line-dir:on|off         emit #line directives
              --hint:ID:on|off          toggle a single hint
              --warning:ID:on|off       toggle a single warning
              --hints:on|off            toggle all hints
              --warnings:on|off         toggle all warnings
              --collect                 print diagnostics after processing instead of immediately
              --dump-symbols            print every symbol with its attributes
        "}
        Ok(())
    }
}
