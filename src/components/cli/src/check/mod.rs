use compiler::BuildOptions;
mod dump;
mod invoke;
mod parse;

#[derive(Clone, Debug)]
pub struct CheckCommand {
    pub filenames: Vec<String>,
    pub options: BuildOptions,
}
