//! Semantic resolver.
//!
//! Narrows every context-free token to one semantic type, scanning left to
//! right. Per token, the first rule that applies wins:
//!
//! 1. The first `--` closes options.
//! 2. A word following an assignment left side becomes that left side's
//!    value. A `--` in between is allowed, but only the word directly after
//!    it may bind.
//! 3. After `--`, everything else is an operand.
//! 4. A spelling declared in the description catalog takes the declared
//!    type.
//! 5. Tokens the lexer already resolved keep their type.
//! 6. Otherwise the candidate set is narrowed: left-side readings are dropped
//!    when no word follows, then the scheme filters what remains. One
//!    survivor resolves the token; several resolve by specificity when a
//!    scheme is present. Without a scheme the token stays ambiguous.
//!
//! Scan state lives in a [`ScanState`] owned by a single call to
//! [`resolve`]; configuration is only read.

use argshape_core::{ContextFreeType, OptionScheme, ProgramInterfaceModel, SemanticType};
use tracing::{debug, trace};

use crate::token::{Token, TokenList};

/// An assignment left side still waiting for its value.
#[derive(Debug, Clone, Copy)]
struct PendingAssignment {
    position: usize,
    value_type: SemanticType,
}

#[derive(Debug, Default)]
struct ScanState {
    options_closed: bool,
    pending: Option<PendingAssignment>,
    /// Left-side readings of the previous token, when it stayed ambiguous.
    open_left_sides: Vec<SemanticType>,
    unbound: Vec<usize>,
}

/// Resolves lexed tokens using the optional interface model.
///
/// The output has the same length and order as the input. Tokens no rule
/// can settle keep their context-free type and candidates.
///
/// # Examples
///
/// ```
/// use argshape_argparse::{lex, resolve};
/// use argshape_core::{OptionScheme, ProgramInterfaceModel, SemanticType, TokenType};
///
/// let pim = ProgramInterfaceModel::with_scheme(OptionScheme::posix_strict());
/// let tokens = resolve(lex(["-xlf", "file"]), Some(&pim));
/// assert_eq!(
///     tokens.types(),
///     vec![
///         TokenType::Semantic(SemanticType::PosixStackedShortSwitches),
///         TokenType::Semantic(SemanticType::Operand),
///     ],
/// );
/// ```
pub fn resolve(tokens: TokenList, pim: Option<&ProgramInterfaceModel>) -> TokenList {
    let scheme = pim.and_then(ProgramInterfaceModel::effective_scheme);
    let mut tokens = tokens.into_tokens();
    let mut state = ScanState::default();

    for i in 0..tokens.len() {
        let next_shape = tokens.get(i + 1).map(|t| t.shape);
        state.step(&mut tokens[i], next_shape, pim, scheme.as_ref());
    }

    let unbound = state.finish();
    debug!(
        tokens = tokens.len(),
        unresolved = tokens.iter().filter(|t| !t.is_resolved()).count(),
        unbound = ?unbound,
        "Resolved arguments"
    );
    TokenList::with_unbound(tokens, unbound)
}

impl ScanState {
    fn step(
        &mut self,
        token: &mut Token,
        next_shape: Option<ContextFreeType>,
        pim: Option<&ProgramInterfaceModel>,
        scheme: Option<&OptionScheme>,
    ) {
        let open_left_sides = std::mem::take(&mut self.open_left_sides);

        if token.shape == ContextFreeType::EndOfOptions && !self.options_closed {
            self.options_closed = true;
            token.resolve(SemanticType::EndOfOptions);
            trace!(position = token.position, "End of options");
            return;
        }

        if token.shape.is_value_shaped() {
            if let Some(pending) = self.pending.take() {
                trace!(
                    position = token.position,
                    left_side = pending.position,
                    "Bound assignment value"
                );
                token.resolve(pending.value_type);
                return;
            }
        }

        if self.options_closed {
            // Only the token right after `--` may still bind a pending value.
            if let Some(pending) = self.pending.take() {
                debug!(
                    position = pending.position,
                    "Assignment left side without value before end of options"
                );
                self.unbound.push(pending.position);
            }
            token.resolve(SemanticType::Operand);
            return;
        }

        let declared = pim.and_then(|pim| most_specific(&pim.match_argument(&token.value)));
        if let Some(ty) = declared {
            trace!(position = token.position, ?ty, "Matched declared option");
            self.accept(token, ty);
            return;
        }

        if token.shape == ContextFreeType::OptWord {
            self.resolve_word(token, &open_left_sides);
            return;
        }

        if let Some(ty) = token.semantic_type() {
            self.accept(token, ty);
            return;
        }

        self.narrow(token, next_shape, scheme);
    }

    /// A word with no pending left side is an operand, unless the previous
    /// token may have been a left side.
    fn resolve_word(&mut self, token: &mut Token, open_left_sides: &[SemanticType]) {
        let values: Vec<SemanticType> = open_left_sides
            .iter()
            .filter_map(|ty| ty.assignment_value())
            .collect();
        if values.is_empty() {
            token.resolve(SemanticType::Operand);
        } else {
            let mut candidates = vec![SemanticType::Operand];
            candidates.extend(values);
            token.leave_ambiguous(candidates);
        }
    }

    fn narrow(
        &mut self,
        token: &mut Token,
        next_shape: Option<ContextFreeType>,
        scheme: Option<&OptionScheme>,
    ) {
        let mut candidates = token.candidates.clone();
        let value_follows = next_shape.is_some_and(ContextFreeType::is_value_shaped);
        if !value_follows && candidates.iter().any(|ty| !ty.is_assignment_left_side()) {
            candidates.retain(|ty| !ty.is_assignment_left_side());
        }

        if let Some(scheme) = scheme {
            candidates.retain(|ty| scheme.accepts_type(*ty));
            if candidates.is_empty() {
                debug!(
                    position = token.position,
                    value = %token.value,
                    "No candidate accepted by scheme"
                );
                return;
            }
        }

        if let [only] = candidates[..] {
            self.accept(token, only);
        } else if scheme.is_some() {
            if let Some(ty) = most_specific(&candidates) {
                trace!(position = token.position, ?ty, "Tie-break");
                self.accept(token, ty);
            }
        } else {
            self.open_left_sides = candidates
                .iter()
                .copied()
                .filter(|ty| ty.is_assignment_left_side())
                .collect();
            token.leave_ambiguous(candidates);
        }
    }

    fn accept(&mut self, token: &mut Token, ty: SemanticType) {
        if let Some(value_type) = ty.assignment_value() {
            let pending = PendingAssignment {
                position: token.position,
                value_type,
            };
            if let Some(shadowed) = self.pending.replace(pending) {
                debug!(
                    position = shadowed.position,
                    shadowed_by = token.position,
                    "Assignment left side shadowed before its value"
                );
                self.unbound.push(shadowed.position);
            }
        }
        token.resolve(ty);
    }

    fn finish(mut self) -> Vec<usize> {
        if let Some(pending) = self.pending.take() {
            debug!(
                position = pending.position,
                "Assignment left side without value at end of input"
            );
            self.unbound.push(pending.position);
        }
        self.unbound
    }
}

/// Tie-break: the lowest specificity rank wins.
fn most_specific(candidates: &[SemanticType]) -> Option<SemanticType> {
    candidates
        .iter()
        .copied()
        .min_by_key(|ty| ty.specificity())
}
