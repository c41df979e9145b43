//! Context-free lexer.
//!
//! Assigns every argument its shape independently of its neighbours. Shapes
//! with a single possible meaning (`--`, `--name=value`, `+name`, plain
//! words, ...) come out already resolved; the rest carry their candidate
//! set for the resolver.

use tracing::trace;

use crate::pattern::classify;
use crate::token::{Token, TokenList};

/// Lexes a single argument found at `position`.
///
/// # Examples
///
/// ```
/// use argshape_argparse::lex_argument;
/// use argshape_core::{ContextFreeType, SemanticType, TokenType};
///
/// let token = lex_argument(0, "-p");
/// assert_eq!(token.ttype, TokenType::ContextFree(ContextFreeType::OneDashLetter));
/// assert_eq!(
///     token.candidates,
///     vec![SemanticType::PosixShortSwitch, SemanticType::PosixShortAssignmentLeftSide],
/// );
///
/// let token = lex_argument(1, "--color=auto");
/// assert_eq!(token.ttype, TokenType::Semantic(SemanticType::GnuExplicitAssignment));
/// assert!(token.candidates.is_empty());
/// ```
pub fn lex_argument(position: usize, arg: &str) -> Token {
    let shape = classify(arg);
    trace!(position, arg, ?shape, "Lexed argument");
    match shape.semantic_candidates() {
        [only] => Token::resolved(position, arg, shape, *only),
        candidates => Token::ambiguous(position, arg, shape, candidates.to_vec()),
    }
}

/// Lexes an argument vector (program name excluded).
pub fn lex<I, S>(args: I) -> TokenList
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens = args
        .into_iter()
        .enumerate()
        .map(|(position, arg)| lex_argument(position, arg.as_ref()))
        .collect();
    TokenList::new(tokens)
}

#[cfg(test)]
mod tests {
    use argshape_core::{ContextFreeType, SemanticType, TokenType};

    use super::*;

    fn is_context_free_final(ty: SemanticType) -> bool {
        matches!(
            ty,
            SemanticType::EndOfOptions
                | SemanticType::GnuExplicitAssignment
                | SemanticType::GnuSwitch
                | SemanticType::XToolkitExplicitAssignment
                | SemanticType::PosixShortStickyValue
                | SemanticType::XToolkitReverseSwitch
                | SemanticType::Operand
        )
    }

    #[test]
    fn test_lex_preserves_order_and_values() {
        let args = ["-l", "--po=TOTO_to", "this is a sentence", "+iconic"];
        let tokens = lex(args);
        assert_eq!(tokens.len(), args.len());
        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(token.position, i);
            assert_eq!(token.value, args[i]);
        }
    }

    #[test]
    fn test_unambiguous_shapes_are_resolved() {
        let tokens = lex(["--", "--only", "-a=1", "-n3", "+x", "/tmp"]);
        for token in &tokens {
            let ty = token.semantic_type().expect("resolved by lexer");
            assert!(is_context_free_final(ty), "{ty:?}");
            assert!(token.candidates.is_empty());
        }
    }

    #[test]
    fn test_ambiguous_shapes_carry_candidates() {
        let tokens = lex(["-p", "-opt", "-long-option", "value"]);
        for token in &tokens {
            assert!(!token.is_resolved(), "{:?}", token.value);
            assert_eq!(token.ttype, TokenType::ContextFree(token.shape));
            assert!(token.candidates.len() >= 2);
        }
        assert_eq!(tokens[3].shape, ContextFreeType::OptWord);
    }
}
