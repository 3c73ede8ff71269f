mod check;
mod help;
mod interop;

use check::CheckCommand;
use enum_dispatch::enum_dispatch;
use help::HelpCommand;
use interop::InteropCommand;

#[enum_dispatch(Invoke)]
#[derive(Clone, Debug)]
pub enum Command {
    Help(HelpCommand),
    Check(CheckCommand),
    Interop(InteropCommand),
}

impl Command {
    pub fn parse() -> Result<Self, ()> {
        Self::parse_from(std::env::args().skip(1))
    }

    pub fn parse_from(args: impl Iterator<Item = String>) -> Result<Self, ()> {
        let mut args = args.peekable();

        match args.peek().map(String::as_str) {
            Some("-h" | "--help") | None => HelpCommand::parse(args).map(Self::from),
            Some("interop") => InteropCommand::parse(args).map(Self::from),
            Some("check") => CheckCommand::parse(args).map(Self::from),
            Some(other) => {
                eprintln!("error: Unknown command '{other}', see 'pragmac --help'");
                Err(())
            }
        }
    }
}

#[enum_dispatch]
pub trait Invoke {
    fn invoke(self) -> Result<(), ()>;
}
