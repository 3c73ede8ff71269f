use crate::{ForeignType, InteropError, InteropExpr, InteropPattern, PatternToken};
use itertools::Itertools;

pub fn resolve_tokens(
    pattern: &InteropPattern,
    receiver: Option<&InteropExpr>,
    args: &[InteropExpr],
    types: &[ForeignType],
) -> Result<String, InteropError> {
    let slots = receiver.into_iter().chain(args).collect_vec();

    if let Some(member_name) = &pattern.member_name {
        if slots.is_empty() {
            return Ok(format!("{member_name}()"));
        }
    }

    let mut next = 0;
    let mut output = String::new();

    let take = |next: &mut usize| {
        let position = *next;
        *next += 1;
        slots
            .get(position)
            .copied()
            .map(|slot| (position, slot))
            .ok_or(InteropError::MissingArgument { position })
    };

    for token in pattern.tokens.iter() {
        match token {
            PatternToken::Literal(text) => output.push_str(text),
            PatternToken::NextArg => {
                let (_, slot) = take(&mut next)?;
                output.push_str(&slot.to_string());
            }
            PatternToken::ThisArg => {
                let (_, slot) = take(&mut next)?;
                output.push_str(&slot.to_string());
                output.push_str(slot.member_access());
            }
            PatternToken::FusedCall | PatternToken::CalleeCall => {
                let (position, slot) = take(&mut next)?;

                let InteropExpr::Call { callee, args } = slot else {
                    return Err(InteropError::CallExpressionExpected { position });
                };

                if *token == PatternToken::CalleeCall {
                    output.push_str(callee);
                }
                output.push('(');
                output.push_str(&args.join(", "));
                output.push(')');
            }
            PatternToken::RemainingArgs => {
                let rest = slots.get(next..).unwrap_or_default();
                output.push_str(&rest.iter().join(", "));
                next = slots.len();
            }
            PatternToken::TypeSlot { index, stars } => {
                let ty = types.get(*index).ok_or(InteropError::TypeSlotOutOfRange {
                    index: *index,
                    available: types.len(),
                })?;

                match ty.strip_n(*stars) {
                    Some(ty) => output.push_str(&ty.to_string()),
                    None => output.push_str("void"),
                }
            }
        }
    }

    Ok(output)
}
