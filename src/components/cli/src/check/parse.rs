use super::CheckCommand;
use compiler::{BuildOptions, OptionOverride};
use diagnostics::{DiagnosticId, DiagnosticKind};

impl CheckCommand {
    pub fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, ()> {
        // Skip over 'check' command keyword
        args.next();

        let mut filenames = Vec::new();
        let mut options = BuildOptions::default();

        for arg in args {
            let Some(flag) = arg.strip_prefix("--") else {
                filenames.push(arg);
                continue;
            };

            match flag.split_once(':') {
                None => match flag {
                    "collect" => options.diagnostic_flags.print_without_collecting = false,
                    "dump-symbols" => options.dump_symbols = true,
                    _ => return unknown_flag(&arg),
                },
                Some((name, value)) => match name {
                    "checks" => set_option(&mut options, "checks", value)?,
                    "opt" => set_option(&mut options, "optimization", value)?,
                    "callconv" => set_option(&mut options, "callconv", value)?,
                    "dead-code-elim" => set_option(&mut options, "deadCodeElim", value)?,
                    "line-dir" => set_option(&mut options, "lineDir", value)?,
                    "hint" | "warning" => {
                        let Some((id, switch)) = value.split_once(':') else {
                            eprintln!("error: Expected '--{name}:ID:on|off'");
                            return Err(());
                        };

                        let id = id.parse::<DiagnosticId>().map_err(|error| {
                            eprintln!("error: {error}");
                        })?;

                        let kind = if name == "hint" {
                            DiagnosticKind::Hint
                        } else {
                            DiagnosticKind::Warning
                        };

                        options
                            .suppression
                            .set(kind, id, parse_switch(&arg, switch)?);
                    }
                    "hints" => options
                        .suppression
                        .set_all(DiagnosticKind::Hint, parse_switch(&arg, value)?),
                    "warnings" => options
                        .suppression
                        .set_all(DiagnosticKind::Warning, parse_switch(&arg, value)?),
                    _ => return unknown_flag(&arg),
                },
            }
        }

        if filenames.is_empty() {
            eprintln!("error: No filenames specified");
            return Err(());
        }

        Ok(Self { filenames, options })
    }
}

fn set_option(options: &mut BuildOptions, name: &str, value: &str) -> Result<(), ()> {
    let option_override = OptionOverride::parse(name, value).map_err(|error| {
        eprintln!("error: {error}");
    })?;

    option_override.apply(&mut options.baseline);
    Ok(())
}

fn parse_switch(arg: &str, value: &str) -> Result<bool, ()> {
    match value {
        "on" => Ok(true),
        "off" => Ok(false),
        _ => {
            eprintln!("error: Expected 'on' or 'off' in '{arg}'");
            Err(())
        }
    }
}

fn unknown_flag<T>(arg: &str) -> Result<T, ()> {
    eprintln!("error: Unknown option '{arg}'");
    Err(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use compiler::{CallingConvention, CheckKind, Optimization};

    fn parse(args: &[&str]) -> Result<CheckCommand, ()> {
        CheckCommand::parse(
            std::iter::once("check")
                .chain(args.iter().copied())
                .map(String::from),
        )
    }

    #[test]
    fn flags_build_the_baseline() {
        let command = parse(&[
            "a.prg",
            "--checks:off",
            "--opt:size",
            "--callconv:stdcall",
            "b.prg",
            "--warning:Deprecated:off",
            "--hints:off",
            "--collect",
        ])
        .unwrap();

        assert_eq!(command.filenames, vec!["a.prg", "b.prg"]);

        let baseline = &command.options.baseline;
        assert!(!baseline.checks.get(CheckKind::Nil));
        assert_eq!(baseline.optimization, Optimization::Size);
        assert_eq!(baseline.calling_convention, CallingConvention::Stdcall);

        let suppression = &command.options.suppression;
        assert!(!suppression.allows(DiagnosticKind::Warning, DiagnosticId::Deprecated));
        assert!(!suppression.allows(DiagnosticKind::Hint, DiagnosticId::UserHint));
        assert!(suppression.allows(DiagnosticKind::Warning, DiagnosticId::UserWarning));
        assert!(!command.options.diagnostic_flags.print_without_collecting);
    }

    #[test]
    fn rejects_bad_flags() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["a.prg", "--opt:fast"]).is_err());
        assert!(parse(&["a.prg", "--hint:NoSuchHint:off"]).is_err());
        assert!(parse(&["a.prg", "--warnings:maybe"]).is_err());
        assert!(parse(&["a.prg", "--verbose"]).is_err());
    }
}
