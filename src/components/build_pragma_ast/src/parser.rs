use crate::{ParseError, ParseErrorKind, input::Input};
use pragma_ast::{
    DeclKind, Declaration, Item, Module, PragmaArg, PragmaArgKind, PragmaInvocation, PragmaStmt,
    Reference, normalize_name,
};
use source_files::Source;

pub struct Parser<'a> {
    input: Input<'a>,
    module: Module,
    seen_item: bool,
}

impl<'a> Parser<'a> {
    pub fn new(input: Input<'a>, default_name: String) -> Self {
        Self {
            module: Module {
                name: default_name,
                pragmas: vec![],
                items: vec![],
                source: Source::internal(),
            },
            input,
            seen_item: false,
        }
    }

    pub fn parse(mut self) -> Result<Module, ParseError> {
        self.module.source = self.input.source();

        loop {
            self.input.skip_whitespace();
            self.input.skip_comment();

            if self.input.peek().is_none() {
                return Ok(self.module);
            }

            if self.input.peek_is('\n') {
                continue;
            }

            self.parse_line()?;
            self.expect_end_of_line()?;
        }
    }

    fn parse_line(&mut self) -> Result<(), ParseError> {
        let source = self.input.source();

        if self.input.peek_starts_with("{.") {
            let pragmas = self.parse_pragma_block()?;
            self.push_item(PragmaStmt { pragmas, source });
            return Ok(());
        }

        let keyword = self.parse_identifier()?;
        self.input.skip_spaces();

        let kind = match keyword.as_str() {
            "module" => return self.parse_module_header(source),
            "use" => {
                let name = self.parse_identifier()?;
                self.push_item(Reference { name, source });
                return Ok(());
            }
            "proc" => DeclKind::Proc,
            "var" => DeclKind::Variable,
            "field" => DeclKind::Field,
            "type" => DeclKind::Type,
            _ => return Err(ParseErrorKind::ExpectedDeclaration(keyword).at(source)),
        };

        let name_source = self.input.source();
        let name = self.parse_identifier()?;
        let pragmas = self.parse_optional_pragma_block()?;

        self.push_item(Declaration {
            kind,
            name,
            pragmas,
            source: name_source,
        });
        Ok(())
    }

    fn parse_module_header(&mut self, source: Source) -> Result<(), ParseError> {
        if self.seen_item {
            return Err(ParseErrorKind::ModuleHeaderNotFirst.at(source));
        }

        self.module.name = self.parse_identifier()?;
        self.module.pragmas = self.parse_optional_pragma_block()?;
        self.module.source = source;
        self.seen_item = true;
        Ok(())
    }

    fn push_item(&mut self, item: impl Into<Item>) {
        self.seen_item = true;
        self.module.items.push(item.into());
    }

    fn expect_end_of_line(&mut self) -> Result<(), ParseError> {
        self.input.skip_spaces();
        self.input.skip_comment();

        let source = self.input.source();

        match self.input.next() {
            None | Some('\n') => Ok(()),
            Some(c) => Err(ParseErrorKind::ExpectedEndOfLine(c).at(source)),
        }
    }

    fn parse_optional_pragma_block(&mut self) -> Result<Vec<PragmaInvocation>, ParseError> {
        self.input.skip_spaces();

        if self.input.peek_starts_with("{.") {
            self.parse_pragma_block()
        } else {
            Ok(vec![])
        }
    }

    fn parse_pragma_block(&mut self) -> Result<Vec<PragmaInvocation>, ParseError> {
        let start = self.input.source();

        if !self.input.eat_str("{.") {
            return Err(ParseErrorKind::Expected('{').at(start));
        }

        let mut pragmas = Vec::new();

        loop {
            self.input.skip_whitespace();

            if self.input.eat_str(".}") {
                return Ok(pragmas);
            }

            if self.input.peek().is_none() {
                return Err(ParseErrorKind::UnterminatedPragmaBlock.at(start));
            }

            if !pragmas.is_empty() && !self.input.eat(',') {
                return Err(ParseErrorKind::Expected(',').at(self.input.source()));
            }

            self.input.skip_whitespace();
            pragmas.push(self.parse_pragma()?);
        }
    }

    fn parse_pragma(&mut self) -> Result<PragmaInvocation, ParseError> {
        let source = self.input.source();
        let name = self.parse_identifier()?;
        let selector = self.parse_optional_selector()?;
        let takes_rest = matches!(normalize_name(&name).as_str(), "push" | "pragma");

        let mut args = Vec::new();
        self.input.skip_spaces();

        if takes_rest {
            // `push` and `pragma` take every remaining item of the block
            self.input.eat(':');
            self.input.skip_whitespace();

            while !self.input.peek_starts_with(".}") && self.input.peek().is_some() {
                if !args.is_empty() {
                    if !self.input.eat(',') {
                        return Err(ParseErrorKind::Expected(',').at(self.input.source()));
                    }
                    self.input.skip_whitespace();
                }

                args.push(self.parse_value()?);
                self.input.skip_whitespace();
            }
        } else if self.input.eat(':') {
            self.input.skip_whitespace();
            args.push(self.parse_value()?);
        }

        Ok(PragmaInvocation::new(name, source)
            .with_selector(selector)
            .with_args(args))
    }

    fn parse_optional_selector(&mut self) -> Result<Option<String>, ParseError> {
        if !self.input.eat('[') {
            return Ok(None);
        }

        self.input.skip_spaces();
        let selector = self.parse_identifier()?;
        self.input.skip_spaces();

        if !self.input.eat(']') {
            return Err(ParseErrorKind::Expected(']').at(self.input.source()));
        }

        Ok(Some(selector))
    }

    fn parse_value(&mut self) -> Result<PragmaArg, ParseError> {
        let source = self.input.source();

        let kind = match self.input.peek() {
            Some('"') => PragmaArgKind::Str(self.parse_string()?),
            Some('[') => PragmaArgKind::List(self.parse_list()?),
            Some(c) if c.is_ascii_digit() || c == '-' => PragmaArgKind::Int(self.parse_integer()?),
            Some(c) if is_identifier_start(c) => {
                let name = self.parse_identifier()?;
                let selector = self.parse_optional_selector()?;
                self.input.skip_spaces();

                if self.input.eat(':') {
                    self.input.skip_whitespace();

                    PragmaArgKind::KeyValue {
                        key: name,
                        selector,
                        value: Box::new(self.parse_value()?),
                    }
                } else if selector.is_some() {
                    return Err(ParseErrorKind::Expected(':').at(self.input.source()));
                } else {
                    PragmaArgKind::Ident(name)
                }
            }
            _ => return Err(ParseErrorKind::ExpectedValue.at(source)),
        };

        Ok(kind.at(source))
    }

    fn parse_list(&mut self) -> Result<Vec<PragmaArg>, ParseError> {
        let start = self.input.source();
        self.input.eat('[');

        let mut items = Vec::new();

        loop {
            self.input.skip_whitespace();

            if self.input.eat(']') {
                return Ok(items);
            }

            if self.input.peek().is_none() {
                return Err(ParseErrorKind::Expected(']').at(start));
            }

            if !items.is_empty() {
                if !self.input.eat(',') {
                    return Err(ParseErrorKind::Expected(',').at(self.input.source()));
                }
                self.input.skip_whitespace();
            }

            items.push(self.parse_value()?);
        }
    }

    fn parse_string(&mut self) -> Result<String, ParseError> {
        let start = self.input.source();
        self.input.eat('"');

        let mut value = String::new();

        loop {
            match self.input.next() {
                Some('"') => return Ok(value),
                Some('\\') => match self.input.next() {
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some(c) => value.push(c),
                    None => break,
                },
                Some('\n') | None => break,
                Some(c) => value.push(c),
            }
        }

        Err(ParseErrorKind::UnterminatedString.at(start))
    }

    fn parse_integer(&mut self) -> Result<i64, ParseError> {
        let source = self.input.source();
        let mut digits = String::new();

        if self.input.eat('-') {
            digits.push('-');
        }

        while let Some(c) = self.input.peek().filter(char::is_ascii_digit) {
            digits.push(c);
            self.input.next();
        }

        if digits.is_empty() || digits == "-" {
            return Err(ParseErrorKind::ExpectedValue.at(source));
        }

        digits
            .parse()
            .map_err(|_| ParseErrorKind::IntegerOutOfRange(digits).at(source))
    }

    fn parse_identifier(&mut self) -> Result<String, ParseError> {
        let source = self.input.source();

        if !self.input.peek().is_some_and(is_identifier_start) {
            return Err(ParseErrorKind::ExpectedIdentifier.at(source));
        }

        let mut name = String::new();

        while let Some(c) = self
            .input
            .peek()
            .filter(|c| c.is_alphanumeric() || *c == '_')
        {
            name.push(c);
            self.input.next();
        }

        Ok(name)
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}
