use crate::{InteropPattern, PatternToken};
use std::{iter::Peekable, str::Chars};

pub fn parse_pattern(pattern: &str) -> InteropPattern {
    if !pattern.contains(['#', '\'', '@']) {
        // Bare member name, same as `#.name(@)`
        return InteropPattern {
            tokens: vec![
                PatternToken::ThisArg,
                PatternToken::Literal(format!("{pattern}(")),
                PatternToken::RemainingArgs,
                PatternToken::Literal(")".into()),
            ],
            member_name: Some(pattern.into()),
        };
    }

    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        let token = match c {
            '#' => match chars.peek() {
                Some('.') => {
                    chars.next();
                    PatternToken::ThisArg
                }
                Some('@') => {
                    chars.next();
                    PatternToken::FusedCall
                }
                Some('+') => {
                    chars.next();
                    PatternToken::CalleeCall
                }
                _ => PatternToken::NextArg,
            },
            '@' => PatternToken::RemainingArgs,
            '\'' => match scan_type_slot(&mut chars) {
                Some(token) => token,
                None => {
                    literal.push('\'');
                    continue;
                }
            },
            _ => {
                literal.push(c);
                continue;
            }
        };

        if !literal.is_empty() {
            tokens.push(PatternToken::Literal(std::mem::take(&mut literal)));
        }
        tokens.push(token);
    }

    if !literal.is_empty() {
        tokens.push(PatternToken::Literal(literal));
    }

    InteropPattern {
        tokens,
        member_name: None,
    }
}

/// Scans the `*...*N` after a `'`, consuming nothing unless it is a valid slot
fn scan_type_slot(chars: &mut Peekable<Chars>) -> Option<PatternToken> {
    let mut lookahead = chars.clone();
    let mut stars = 0;

    while lookahead.next_if_eq(&'*').is_some() {
        stars += 1;
    }

    let index = lookahead.next()?.to_digit(10)? as usize;
    *chars = lookahead;
    Some(PatternToken::TypeSlot { index, stars })
}
