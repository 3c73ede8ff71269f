use super::InteropCommand;
use crate::Invoke;
use interop_pattern::InteropPattern;

impl Invoke for InteropCommand {
    fn invoke(self) -> Result<(), ()> {
        let pattern = InteropPattern::parse(&self.pattern);

        let text = pattern
            .resolve(self.receiver.as_ref(), &self.args, &self.types)
            .map_err(|error| {
                eprintln!("error: {error}");
            })?;

        println!("{text}");
        Ok(())
    }
}
