//! Option schemes: the set of syntax conventions a program accepts.
//!
//! A scheme is an unnamed, coarse filter. It does not know any option names,
//! only which [`Variant`]s make sense for the program, and the resolver uses
//! it to discard candidate interpretations of an ambiguous argument.

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::{SemanticType, Variant};

/// A set of accepted variants.
///
/// # Examples
///
/// ```
/// use argshape_core::{OptionScheme, SemanticType, Variant};
///
/// let scheme = OptionScheme::posix_strict();
/// assert!(scheme.accepts(Variant::PosixStackedShortSwitches));
/// assert!(!scheme.accepts(Variant::XToolkitSwitch));
///
/// // Operands and `--` are always acceptable.
/// assert!(scheme.accepts_type(SemanticType::Operand));
/// ```
///
/// In configuration files a scheme is either a default scheme name or a
/// list of variants:
///
/// ```
/// use argshape_core::OptionScheme;
///
/// let named: OptionScheme = serde_yaml::from_str("posix-strict").unwrap();
/// let listed: OptionScheme = serde_yaml::from_str("[gnu_switch]").unwrap();
/// assert_eq!(named, OptionScheme::posix_strict());
/// assert_eq!(listed.variants().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "SchemeSpec", into = "Vec<Variant>")]
pub struct OptionScheme {
    variants: Vec<Variant>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum SchemeSpec {
    Named(String),
    Variants(Vec<Variant>),
}

impl OptionScheme {
    /// Creates a scheme from variants; duplicates are dropped.
    pub fn new(variants: impl IntoIterator<Item = Variant>) -> Self {
        let mut unique = Vec::new();
        for variant in variants {
            if !unique.contains(&variant) {
                unique.push(variant);
            }
        }
        Self { variants: unique }
    }

    /// POSIX utility syntax guidelines: short options only.
    pub fn posix_strict() -> Self {
        Self::new([
            Variant::PosixShortSwitch,
            Variant::PosixStackedShortSwitches,
            Variant::PosixShortAssignment,
            Variant::PosixShortStickyValue,
        ])
    }

    /// X Toolkit intrinsics: single-dash long options and `+` reversal.
    pub fn xtoolkit_strict() -> Self {
        Self::new([
            Variant::XToolkitSwitch,
            Variant::XToolkitReverseSwitch,
            Variant::XToolkitExplicitAssignment,
            Variant::XToolkitImplicitAssignment,
        ])
    }

    /// GNU long options only.
    pub fn gnu_strict() -> Self {
        Self::new([
            Variant::GnuSwitch,
            Variant::GnuExplicitAssignment,
            Variant::GnuImplicitAssignment,
        ])
    }

    /// `getopt_long`: POSIX short options plus GNU long options.
    pub fn getopt_long() -> Self {
        let mut scheme = Self::posix_strict();
        scheme.extend(Self::gnu_strict().variants);
        scheme
    }

    /// Every known variant.
    pub fn permissive() -> Self {
        Self::new(Variant::ALL)
    }

    /// Looks up a default scheme by name (`posix-strict`, `xtoolkit-strict`,
    /// `gnu-strict`, `getopt-long`, `permissive`). Underscores are accepted
    /// in place of dashes.
    ///
    /// # Examples
    ///
    /// ```
    /// use argshape_core::OptionScheme;
    ///
    /// assert_eq!(OptionScheme::named("getopt_long"), Some(OptionScheme::getopt_long()));
    /// assert_eq!(OptionScheme::named("dos"), None);
    /// ```
    pub fn named(name: &str) -> Option<Self> {
        match name.replace('_', "-").as_str() {
            "posix-strict" => Some(Self::posix_strict()),
            "xtoolkit-strict" => Some(Self::xtoolkit_strict()),
            "gnu-strict" => Some(Self::gnu_strict()),
            "getopt-long" => Some(Self::getopt_long()),
            "permissive" => Some(Self::permissive()),
            _ => None,
        }
    }

    /// Adds variants not already present.
    pub fn extend(&mut self, variants: impl IntoIterator<Item = Variant>) {
        for variant in variants {
            if !self.variants.contains(&variant) {
                self.variants.push(variant);
            }
        }
    }

    pub fn accepts(&self, variant: Variant) -> bool {
        self.variants.contains(&variant)
    }

    /// Returns `true` if a token may take this semantic type under the
    /// scheme. Types outside any variant (operand, `--`) are always accepted.
    pub fn accepts_type(&self, ty: SemanticType) -> bool {
        ty.variant().is_none_or(|variant| self.accepts(variant))
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }
}

impl TryFrom<SchemeSpec> for OptionScheme {
    type Error = SchemaError;

    fn try_from(spec: SchemeSpec) -> Result<Self, SchemaError> {
        match spec {
            SchemeSpec::Named(name) => {
                OptionScheme::named(&name).ok_or(SchemaError::UnknownScheme(name))
            }
            SchemeSpec::Variants(variants) => Ok(OptionScheme::new(variants)),
        }
    }
}

impl From<Vec<Variant>> for OptionScheme {
    fn from(variants: Vec<Variant>) -> Self {
        Self::new(variants)
    }
}

impl From<OptionScheme> for Vec<Variant> {
    fn from(scheme: OptionScheme) -> Self {
        scheme.variants
    }
}
