//! Token type definitions for argument classification.
//!
//! Classification uses a closed, two-layer tag:
//!
//! - [`ContextFreeType`]: the *shape* of a raw argument, decided from its
//!   text alone (e.g. "one dash followed by a single letter").
//! - [`SemanticType`]: one concrete syntax convention the argument plays in
//!   the command line (e.g. a POSIX short switch, or the value half of a GNU
//!   implicit assignment).
//!
//! Every shape maps statically to a non-empty set of semantic candidates
//! ([`ContextFreeType::semantic_candidates`]). [`Variant`] names the
//! historical conventions a program interface may accept; each variant knows
//! the semantic types it produces.

use serde::{Deserialize, Serialize};

/// A concrete historical command-line syntax convention.
///
/// Variants are what option schemes accept and what option descriptions are
/// declared with. Two-token assignments (`-o value`, `--output value`) are a
/// single variant producing two semantic types: a left side and a value.
///
/// # Examples
///
/// ```
/// use argshape_core::{SemanticType, Variant};
///
/// assert_eq!(Variant::GnuSwitch.flag_type(), SemanticType::GnuSwitch);
/// assert_eq!(
///     Variant::PosixShortAssignment.value_type(),
///     Some(SemanticType::PosixShortAssignmentValue),
/// );
/// assert_eq!(Variant::GnuSwitch.value_type(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// `-x`
    PosixShortSwitch,
    /// `-xvf`, equivalent to `-x -v -f`
    PosixStackedShortSwitches,
    /// `-o value`
    PosixShortAssignment,
    /// `-n3`
    PosixShortStickyValue,
    /// `-option`
    XToolkitSwitch,
    /// `+option`
    XToolkitReverseSwitch,
    /// `-option=value`
    XToolkitExplicitAssignment,
    /// `-option value`
    XToolkitImplicitAssignment,
    /// `--option`
    GnuSwitch,
    /// `--option=value`
    GnuExplicitAssignment,
    /// `--option value`
    GnuImplicitAssignment,
}

impl Variant {
    /// Every variant, in declaration order.
    pub const ALL: [Variant; 11] = [
        Variant::PosixShortSwitch,
        Variant::PosixStackedShortSwitches,
        Variant::PosixShortAssignment,
        Variant::PosixShortStickyValue,
        Variant::XToolkitSwitch,
        Variant::XToolkitReverseSwitch,
        Variant::XToolkitExplicitAssignment,
        Variant::XToolkitImplicitAssignment,
        Variant::GnuSwitch,
        Variant::GnuExplicitAssignment,
        Variant::GnuImplicitAssignment,
    ];

    /// Returns the semantic type of the token carrying the option name.
    ///
    /// For two-token assignments this is the left side.
    pub fn flag_type(self) -> SemanticType {
        match self {
            Variant::PosixShortSwitch => SemanticType::PosixShortSwitch,
            Variant::PosixStackedShortSwitches => SemanticType::PosixStackedShortSwitches,
            Variant::PosixShortAssignment => SemanticType::PosixShortAssignmentLeftSide,
            Variant::PosixShortStickyValue => SemanticType::PosixShortStickyValue,
            Variant::XToolkitSwitch => SemanticType::XToolkitSwitch,
            Variant::XToolkitReverseSwitch => SemanticType::XToolkitReverseSwitch,
            Variant::XToolkitExplicitAssignment => SemanticType::XToolkitExplicitAssignment,
            Variant::XToolkitImplicitAssignment => {
                SemanticType::XToolkitImplicitAssignmentLeftSide
            }
            Variant::GnuSwitch => SemanticType::GnuSwitch,
            Variant::GnuExplicitAssignment => SemanticType::GnuExplicitAssignment,
            Variant::GnuImplicitAssignment => SemanticType::GnuImplicitAssignmentLeftSide,
        }
    }

    /// Returns the semantic type of the separate value token, for variants
    /// spread over two arguments.
    pub fn value_type(self) -> Option<SemanticType> {
        match self {
            Variant::PosixShortAssignment => Some(SemanticType::PosixShortAssignmentValue),
            Variant::XToolkitImplicitAssignment => {
                Some(SemanticType::XToolkitImplicitAssignmentValue)
            }
            Variant::GnuImplicitAssignment => Some(SemanticType::GnuImplicitAssignmentValue),
            Variant::PosixShortSwitch
            | Variant::PosixStackedShortSwitches
            | Variant::PosixShortStickyValue
            | Variant::XToolkitSwitch
            | Variant::XToolkitReverseSwitch
            | Variant::XToolkitExplicitAssignment
            | Variant::GnuSwitch
            | Variant::GnuExplicitAssignment => None,
        }
    }

    /// Returns `true` for variants whose option name is one character.
    pub fn is_short(self) -> bool {
        matches!(
            self,
            Variant::PosixShortSwitch
                | Variant::PosixShortAssignment
                | Variant::PosixShortStickyValue
        )
    }
}

/// One concrete role an argument plays in a command line.
///
/// This is the final classification produced by the resolver. `Operand` and
/// `EndOfOptions` are not tied to any [`Variant`] and are accepted under
/// every scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    PosixShortSwitch,
    PosixStackedShortSwitches,
    PosixShortAssignmentLeftSide,
    PosixShortAssignmentValue,
    PosixShortStickyValue,
    XToolkitSwitch,
    XToolkitReverseSwitch,
    XToolkitExplicitAssignment,
    XToolkitImplicitAssignmentLeftSide,
    XToolkitImplicitAssignmentValue,
    GnuSwitch,
    GnuExplicitAssignment,
    GnuImplicitAssignmentLeftSide,
    GnuImplicitAssignmentValue,
    /// A positional argument.
    Operand,
    /// The `--` sentinel.
    EndOfOptions,
}

impl SemanticType {
    /// Returns the variant this type belongs to, or `None` for `Operand` and
    /// `EndOfOptions`.
    ///
    /// # Examples
    ///
    /// ```
    /// use argshape_core::{SemanticType, Variant};
    ///
    /// assert_eq!(
    ///     SemanticType::GnuImplicitAssignmentValue.variant(),
    ///     Some(Variant::GnuImplicitAssignment),
    /// );
    /// assert_eq!(SemanticType::Operand.variant(), None);
    /// ```
    pub fn variant(self) -> Option<Variant> {
        match self {
            SemanticType::PosixShortSwitch => Some(Variant::PosixShortSwitch),
            SemanticType::PosixStackedShortSwitches => Some(Variant::PosixStackedShortSwitches),
            SemanticType::PosixShortAssignmentLeftSide | SemanticType::PosixShortAssignmentValue => {
                Some(Variant::PosixShortAssignment)
            }
            SemanticType::PosixShortStickyValue => Some(Variant::PosixShortStickyValue),
            SemanticType::XToolkitSwitch => Some(Variant::XToolkitSwitch),
            SemanticType::XToolkitReverseSwitch => Some(Variant::XToolkitReverseSwitch),
            SemanticType::XToolkitExplicitAssignment => Some(Variant::XToolkitExplicitAssignment),
            SemanticType::XToolkitImplicitAssignmentLeftSide
            | SemanticType::XToolkitImplicitAssignmentValue => {
                Some(Variant::XToolkitImplicitAssignment)
            }
            SemanticType::GnuSwitch => Some(Variant::GnuSwitch),
            SemanticType::GnuExplicitAssignment => Some(Variant::GnuExplicitAssignment),
            SemanticType::GnuImplicitAssignmentLeftSide
            | SemanticType::GnuImplicitAssignmentValue => Some(Variant::GnuImplicitAssignment),
            SemanticType::Operand | SemanticType::EndOfOptions => None,
        }
    }

    /// For an assignment left side, returns the type its value takes.
    pub fn assignment_value(self) -> Option<SemanticType> {
        match self {
            SemanticType::PosixShortAssignmentLeftSide
            | SemanticType::XToolkitImplicitAssignmentLeftSide
            | SemanticType::GnuImplicitAssignmentLeftSide => {
                self.variant().and_then(Variant::value_type)
            }
            _ => None,
        }
    }

    /// Returns `true` if this type expects a value in the next argument.
    pub fn is_assignment_left_side(self) -> bool {
        self.assignment_value().is_some()
    }

    /// Returns `true` if this type is the value half of a two-token
    /// assignment.
    pub fn is_assignment_value(self) -> bool {
        matches!(
            self,
            SemanticType::PosixShortAssignmentValue
                | SemanticType::XToolkitImplicitAssignmentValue
                | SemanticType::GnuImplicitAssignmentValue
        )
    }

    /// Tie-break rank used when several candidates survive; lower wins.
    ///
    /// Single-option switches rank first, compound and assignment forms
    /// after, generic interpretations (operand) last.
    pub fn specificity(self) -> u8 {
        match self {
            SemanticType::PosixShortSwitch => 0,
            SemanticType::GnuSwitch => 1,
            SemanticType::XToolkitSwitch => 2,
            SemanticType::XToolkitReverseSwitch => 3,
            SemanticType::PosixShortStickyValue => 4,
            SemanticType::PosixStackedShortSwitches => 5,
            SemanticType::GnuExplicitAssignment => 6,
            SemanticType::XToolkitExplicitAssignment => 7,
            SemanticType::PosixShortAssignmentLeftSide => 8,
            SemanticType::GnuImplicitAssignmentLeftSide => 9,
            SemanticType::XToolkitImplicitAssignmentLeftSide => 10,
            SemanticType::PosixShortAssignmentValue => 11,
            SemanticType::GnuImplicitAssignmentValue => 12,
            SemanticType::XToolkitImplicitAssignmentValue => 13,
            SemanticType::Operand => 14,
            SemanticType::EndOfOptions => 15,
        }
    }
}

/// Shape of a raw argument, decided from its text alone.
///
/// # Examples
///
/// ```
/// use argshape_core::{ContextFreeType, SemanticType};
///
/// assert_eq!(
///     ContextFreeType::OneDashLetter.semantic_candidates(),
///     &[SemanticType::PosixShortSwitch, SemanticType::PosixShortAssignmentLeftSide],
/// );
/// assert!(ContextFreeType::OneDashLetter.is_ambiguous());
/// assert!(!ContextFreeType::EndOfOptions.is_ambiguous());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextFreeType {
    /// `--`
    EndOfOptions,
    /// `--name=value`
    GnuExplicitAssignment,
    /// `--name`
    TwoDashWord,
    /// `-name=value`
    XToolkitExplicitAssignment,
    /// `-x`
    OneDashLetter,
    /// `-n12`
    PosixShortStickyValue,
    /// `-abc`
    OneDashWordAlphaNum,
    /// `-long-name`, `-ns.flag`
    OneDashWord,
    /// `+name`
    XToolkitReverseSwitch,
    /// `word`
    OptWord,
    /// Anything else: sentences, paths, URLs, punctuation-led text.
    Word,
}

impl ContextFreeType {
    /// Returns the semantic types a token of this shape may resolve to.
    ///
    /// The slice is never empty. Order is the declaration order of the
    /// disambiguation universe, not a preference.
    pub fn semantic_candidates(self) -> &'static [SemanticType] {
        match self {
            ContextFreeType::EndOfOptions => &[SemanticType::EndOfOptions],
            ContextFreeType::GnuExplicitAssignment => &[SemanticType::GnuExplicitAssignment],
            ContextFreeType::TwoDashWord => &[SemanticType::GnuSwitch],
            ContextFreeType::XToolkitExplicitAssignment => {
                &[SemanticType::XToolkitExplicitAssignment]
            }
            ContextFreeType::OneDashLetter => &[
                SemanticType::PosixShortSwitch,
                SemanticType::PosixShortAssignmentLeftSide,
            ],
            ContextFreeType::PosixShortStickyValue => &[SemanticType::PosixShortStickyValue],
            ContextFreeType::OneDashWordAlphaNum => &[
                SemanticType::XToolkitSwitch,
                SemanticType::PosixStackedShortSwitches,
            ],
            ContextFreeType::OneDashWord => &[
                SemanticType::XToolkitSwitch,
                SemanticType::XToolkitImplicitAssignmentLeftSide,
            ],
            ContextFreeType::XToolkitReverseSwitch => &[SemanticType::XToolkitReverseSwitch],
            ContextFreeType::OptWord => &[
                SemanticType::Operand,
                SemanticType::PosixShortAssignmentValue,
                SemanticType::XToolkitImplicitAssignmentValue,
                SemanticType::GnuImplicitAssignmentValue,
            ],
            ContextFreeType::Word => &[SemanticType::Operand],
        }
    }

    /// Returns `true` when the shape maps to two or more semantic types.
    pub fn is_ambiguous(self) -> bool {
        self.semantic_candidates().len() > 1
    }

    /// Returns `true` for shapes that may stand as the value of a preceding
    /// assignment left side.
    pub fn is_value_shaped(self) -> bool {
        matches!(self, ContextFreeType::OptWord | ContextFreeType::Word)
    }
}

/// Resolved type of a token: either still a context-free shape (ambiguous)
/// or a final semantic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    ContextFree(ContextFreeType),
    Semantic(SemanticType),
}

impl TokenType {
    /// Returns the semantic type, if resolved.
    pub fn semantic(self) -> Option<SemanticType> {
        match self {
            TokenType::Semantic(ty) => Some(ty),
            TokenType::ContextFree(_) => None,
        }
    }

    /// Returns `true` if the type is still a context-free placeholder.
    pub fn is_context_free(self) -> bool {
        matches!(self, TokenType::ContextFree(_))
    }
}

impl From<SemanticType> for TokenType {
    fn from(ty: SemanticType) -> Self {
        TokenType::Semantic(ty)
    }
}

impl From<ContextFreeType> for TokenType {
    fn from(shape: ContextFreeType) -> Self {
        TokenType::ContextFree(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHAPES: [ContextFreeType; 11] = [
        ContextFreeType::EndOfOptions,
        ContextFreeType::GnuExplicitAssignment,
        ContextFreeType::TwoDashWord,
        ContextFreeType::XToolkitExplicitAssignment,
        ContextFreeType::OneDashLetter,
        ContextFreeType::PosixShortStickyValue,
        ContextFreeType::OneDashWordAlphaNum,
        ContextFreeType::OneDashWord,
        ContextFreeType::XToolkitReverseSwitch,
        ContextFreeType::OptWord,
        ContextFreeType::Word,
    ];

    #[test]
    fn test_every_shape_has_candidates() {
        for shape in SHAPES {
            assert!(!shape.semantic_candidates().is_empty(), "{shape:?}");
        }
    }

    #[test]
    fn test_flag_and_value_types_point_back_to_variant() {
        for variant in Variant::ALL {
            assert_eq!(variant.flag_type().variant(), Some(variant));
            if let Some(value) = variant.value_type() {
                assert_eq!(value.variant(), Some(variant));
                assert!(value.is_assignment_value());
                assert_eq!(variant.flag_type().assignment_value(), Some(value));
            }
        }
    }

    #[test]
    fn test_short_variants() {
        let short: Vec<Variant> = Variant::ALL.into_iter().filter(|v| v.is_short()).collect();
        assert_eq!(
            short,
            vec![
                Variant::PosixShortSwitch,
                Variant::PosixShortAssignment,
                Variant::PosixShortStickyValue,
            ]
        );
    }

    #[test]
    fn test_left_sides() {
        assert!(SemanticType::PosixShortAssignmentLeftSide.is_assignment_left_side());
        assert!(SemanticType::GnuImplicitAssignmentLeftSide.is_assignment_left_side());
        assert!(!SemanticType::GnuExplicitAssignment.is_assignment_left_side());
        assert!(!SemanticType::PosixShortAssignmentValue.is_assignment_left_side());
    }

    #[test]
    fn test_switch_outranks_left_side() {
        assert!(
            SemanticType::PosixShortSwitch.specificity()
                < SemanticType::PosixShortAssignmentLeftSide.specificity()
        );
        assert!(
            SemanticType::XToolkitSwitch.specificity()
                < SemanticType::PosixStackedShortSwitches.specificity()
        );
        assert!(SemanticType::GnuSwitch.specificity() < SemanticType::Operand.specificity());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Variant::XToolkitReverseSwitch).unwrap();
        assert_eq!(json, "\"x_toolkit_reverse_switch\"");
        let ty: TokenType =
            serde_json::from_str(r#"{"semantic":"gnu_switch"}"#).unwrap();
        assert_eq!(ty, TokenType::Semantic(SemanticType::GnuSwitch));
    }
}
