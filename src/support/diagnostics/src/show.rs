use source_files::{Source, SourceFiles};
use std::path::Path;

pub trait Show {
    fn show(
        &self,
        w: &mut dyn std::fmt::Write,
        source_files: &SourceFiles,
        project_root: Option<&Path>,
    ) -> std::fmt::Result;

    fn eprintln(self: &Self, source_files: &SourceFiles, project_root: Option<&Path>) {
        let mut message = String::new();
        self.show(&mut message, source_files, project_root)
            .expect("show error message");
        eprintln!("{}", message);
    }
}

/// Filename for a source, relative to the project root when possible
pub fn minimal_filename<'a>(
    source: Source,
    source_files: &'a SourceFiles,
    project_root: Option<&Path>,
) -> &'a str {
    let file = source_files.get(source.key);

    project_root
        .and_then(|root| file.filepath().strip_prefix(root).ok())
        .and_then(|relative| relative.to_str())
        .unwrap_or_else(|| file.filename())
}
