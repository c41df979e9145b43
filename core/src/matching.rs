//! Match models: one declared spelling of an option.
//!
//! A [`MatchModel`] binds an option name to a [`Variant`] and compiles the
//! left-hand-side pattern that recognizes it in a raw argument. Names are
//! validated against the variant when the model is built, so a model that
//! could never match is rejected up front.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};
use crate::{SemanticType, Variant};

/// A compiled test for one option spelling.
///
/// # Examples
///
/// ```
/// use argshape_core::{MatchModel, Variant};
///
/// let output = MatchModel::new(Variant::GnuExplicitAssignment, "output").unwrap();
/// assert!(output.matches("--output=out.txt"));
/// assert!(!output.matches("--output"));
/// assert_eq!(output.spelling(), "--output=");
///
/// // A POSIX short option must be a single character.
/// assert!(MatchModel::new(Variant::PosixShortSwitch, "verbose").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "MatchModelSpec", into = "MatchModelSpec")]
pub struct MatchModel {
    variant: Variant,
    name: String,
    left_side: Regex,
}

/// Serialized form of a [`MatchModel`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MatchModelSpec {
    variant: Variant,
    name: String,
}

impl MatchModel {
    /// Builds a match model for `name` spelled as `variant`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidOptionName`] when the name cannot be
    /// spelled with the variant (e.g. a multi-character POSIX short switch).
    pub fn new(variant: Variant, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !is_valid_name(variant, &name) {
            return Err(SchemaError::InvalidOptionName { variant, name });
        }
        let left_side = Regex::new(&left_side_pattern(variant, &name))?;
        Ok(Self {
            variant,
            name,
            left_side,
        })
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Semantic type of an argument matched by this model.
    pub fn flag_type(&self) -> SemanticType {
        self.variant.flag_type()
    }

    /// Returns `true` if the left-hand side of `arg` is this option.
    pub fn matches(&self, arg: &str) -> bool {
        self.left_side.is_match(arg)
    }

    /// Canonical command-line spelling of the option's left side.
    pub fn spelling(&self) -> String {
        let name = &self.name;
        match self.variant {
            Variant::PosixShortSwitch
            | Variant::PosixShortAssignment
            | Variant::PosixStackedShortSwitches
            | Variant::XToolkitSwitch
            | Variant::XToolkitImplicitAssignment => format!("-{name}"),
            Variant::PosixShortStickyValue => format!("-{name}N"),
            Variant::XToolkitReverseSwitch => format!("+{name}"),
            Variant::XToolkitExplicitAssignment => format!("-{name}="),
            Variant::GnuSwitch | Variant::GnuImplicitAssignment => format!("--{name}"),
            Variant::GnuExplicitAssignment => format!("--{name}="),
        }
    }
}

impl TryFrom<MatchModelSpec> for MatchModel {
    type Error = SchemaError;

    fn try_from(spec: MatchModelSpec) -> Result<Self> {
        MatchModel::new(spec.variant, spec.name)
    }
}

impl From<MatchModel> for MatchModelSpec {
    fn from(model: MatchModel) -> Self {
        Self {
            variant: model.variant,
            name: model.name,
        }
    }
}

fn is_valid_name(variant: Variant, name: &str) -> bool {
    let alphanumeric = name.chars().all(|ch| ch.is_ascii_alphanumeric());
    if variant.is_short() {
        name.len() == 1 && alphanumeric
    } else if variant == Variant::PosixStackedShortSwitches {
        name.len() >= 2 && alphanumeric
    } else {
        is_long_name(name)
    }
}

fn is_long_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|ch| ch.is_ascii_alphanumeric())
        && chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'))
}

fn left_side_pattern(variant: Variant, name: &str) -> String {
    let name = regex::escape(name);
    match variant {
        Variant::PosixShortSwitch
        | Variant::PosixShortAssignment
        | Variant::XToolkitSwitch
        | Variant::XToolkitImplicitAssignment => format!("^-{name}$"),
        // Any arrangement of the declared letters, at least two of them.
        Variant::PosixStackedShortSwitches => format!("^-[{name}]{{2,}}$"),
        Variant::PosixShortStickyValue => format!("^-{name}[0-9]+$"),
        Variant::XToolkitReverseSwitch => format!(r"^\+{name}$"),
        Variant::XToolkitExplicitAssignment => format!("^-{name}="),
        Variant::GnuSwitch | Variant::GnuImplicitAssignment => format!("^--{name}$"),
        Variant::GnuExplicitAssignment => format!("^--{name}="),
    }
}
