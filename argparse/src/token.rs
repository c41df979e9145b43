//! Tokens produced by the lexer and refined by the resolver.

use std::ops::Index;

use argshape_core::{ContextFreeType, SemanticType, TokenType};
use serde::{Deserialize, Serialize};

/// One classified argument.
///
/// `value` is always the original argument, unmodified. `shape` is the
/// context-free shape the lexer saw; `ttype` is the current classification.
/// While `ttype` is still [`TokenType::ContextFree`], `candidates` lists the
/// semantic types the token may take (never empty); once resolved it is
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Index in the input sequence.
    pub position: usize,
    /// Raw argument.
    pub value: String,
    /// Shape assigned by the lexer.
    pub shape: ContextFreeType,
    /// Current classification.
    pub ttype: TokenType,
    /// Remaining interpretations of an unresolved token.
    pub candidates: Vec<SemanticType>,
}

impl Token {
    pub(crate) fn resolved(
        position: usize,
        value: &str,
        shape: ContextFreeType,
        ty: SemanticType,
    ) -> Self {
        Self {
            position,
            value: value.to_string(),
            shape,
            ttype: TokenType::Semantic(ty),
            candidates: Vec::new(),
        }
    }

    pub(crate) fn ambiguous(
        position: usize,
        value: &str,
        shape: ContextFreeType,
        candidates: Vec<SemanticType>,
    ) -> Self {
        Self {
            position,
            value: value.to_string(),
            shape,
            ttype: TokenType::ContextFree(shape),
            candidates,
        }
    }

    pub(crate) fn resolve(&mut self, ty: SemanticType) {
        self.ttype = TokenType::Semantic(ty);
        self.candidates.clear();
    }

    pub(crate) fn leave_ambiguous(&mut self, candidates: Vec<SemanticType>) {
        self.ttype = TokenType::ContextFree(self.shape);
        self.candidates = candidates;
    }

    /// Returns `true` once the token carries a semantic type.
    pub fn is_resolved(&self) -> bool {
        !self.ttype.is_context_free()
    }

    pub fn semantic_type(&self) -> Option<SemanticType> {
        self.ttype.semantic()
    }
}

/// Ordered tokens of one parse, one per input argument.
///
/// # Examples
///
/// ```
/// use argshape_argparse::parse_arguments;
/// use argshape_core::{SemanticType, TokenType};
///
/// let tokens = parse_arguments(["-v", "--", "-x"], None);
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[2].ttype, TokenType::Semantic(SemanticType::Operand));
/// assert!(tokens.is_fully_resolved());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenList {
    tokens: Vec<Token>,
    unbound_assignments: Vec<usize>,
}

impl TokenList {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            unbound_assignments: Vec::new(),
        }
    }

    pub(crate) fn with_unbound(tokens: Vec<Token>, unbound_assignments: Vec<usize>) -> Self {
        Self {
            tokens,
            unbound_assignments,
        }
    }

    pub(crate) fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Token> {
        self.tokens.get(position)
    }

    /// Token types in input order.
    pub fn types(&self) -> Vec<TokenType> {
        self.tokens.iter().map(|t| t.ttype).collect()
    }

    /// Tokens still carrying a context-free type.
    pub fn unresolved(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| !t.is_resolved())
    }

    /// Returns `true` when every token has a semantic type.
    pub fn is_fully_resolved(&self) -> bool {
        self.tokens.iter().all(Token::is_resolved)
    }

    /// Positions of assignment left sides that never received a value,
    /// either because input ended or because a later left side shadowed
    /// them.
    pub fn unbound_assignments(&self) -> &[usize] {
        &self.unbound_assignments
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, position: usize) -> &Token {
        &self.tokens[position]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for TokenList {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}
