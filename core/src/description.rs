//! Option descriptions: the named catalog of a program's options.
//!
//! An [`OptDescription`] is one declared option (e.g. "output file") with the
//! spellings it accepts. An [`OptDescriptionModel`] is the ordered catalog of
//! every declared option. The resolver consults the model first: an argument
//! matching a declared spelling is classified by that declaration alone.
//!
//! # Example
//!
//! ```
//! use argshape_core::*;
//!
//! let model = OptDescriptionModel::new(vec![
//!     OptDescription::new("execute", vec![
//!         MatchModel::new(Variant::PosixShortSwitch, "x").unwrap(),
//!     ]).unwrap(),
//!     OptDescription::new("parse", vec![
//!         MatchModel::new(Variant::PosixShortAssignment, "p").unwrap(),
//!         MatchModel::new(Variant::GnuImplicitAssignment, "parse").unwrap(),
//!     ]).unwrap(),
//! ]).unwrap();
//!
//! assert_eq!(model.match_argument("-p"), vec![SemanticType::PosixShortAssignmentLeftSide]);
//! assert!(model.match_argument("-q").is_empty());
//! assert_eq!(model.variants().len(), 3);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};
use crate::{MatchModel, SemanticType, Variant};

/// One declared option of a program interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "OptDescriptionSpec", into = "OptDescriptionSpec")]
pub struct OptDescription {
    description: String,
    match_models: Vec<MatchModel>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OptDescriptionSpec {
    description: String,
    match_models: Vec<MatchModel>,
}

impl OptDescription {
    /// Creates a description with a human label and its accepted spellings.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::EmptyDescription`] when `match_models` is empty.
    pub fn new(description: impl Into<String>, match_models: Vec<MatchModel>) -> Result<Self> {
        let description = description.into();
        if match_models.is_empty() {
            return Err(SchemaError::EmptyDescription(description));
        }
        Ok(Self {
            description,
            match_models,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn match_models(&self) -> &[MatchModel] {
        &self.match_models
    }

    /// Returns the semantic types of every spelling matching `arg`.
    pub fn match_argument(&self, arg: &str) -> Vec<SemanticType> {
        self.match_models
            .iter()
            .filter(|model| model.matches(arg))
            .map(MatchModel::flag_type)
            .collect()
    }
}

impl TryFrom<OptDescriptionSpec> for OptDescription {
    type Error = SchemaError;

    fn try_from(spec: OptDescriptionSpec) -> Result<Self> {
        OptDescription::new(spec.description, spec.match_models)
    }
}

impl From<OptDescription> for OptDescriptionSpec {
    fn from(desc: OptDescription) -> Self {
        Self {
            description: desc.description,
            match_models: desc.match_models,
        }
    }
}

/// Ordered catalog of a program's declared options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<OptDescription>", into = "Vec<OptDescription>")]
pub struct OptDescriptionModel {
    descriptions: Vec<OptDescription>,
}

impl OptDescriptionModel {
    /// Builds a model from descriptions, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateOption`] when two match models declare
    /// the same variant and name.
    pub fn new(descriptions: Vec<OptDescription>) -> Result<Self> {
        check_duplicates(&descriptions)?;
        Ok(Self { descriptions })
    }

    pub fn descriptions(&self) -> &[OptDescription] {
        &self.descriptions
    }

    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }

    /// Returns the semantic types `arg` matches across all descriptions,
    /// deduplicated in first-match order.
    pub fn match_argument(&self, arg: &str) -> Vec<SemanticType> {
        let mut matches = Vec::new();
        for ty in self.descriptions.iter().flat_map(|d| d.match_argument(arg)) {
            if !matches.contains(&ty) {
                matches.push(ty);
            }
        }
        matches
    }

    /// Returns the first description with a spelling matching `arg`.
    pub fn find(&self, arg: &str) -> Option<&OptDescription> {
        self.descriptions
            .iter()
            .find(|d| d.match_models.iter().any(|m| m.matches(arg)))
    }

    /// Returns every variant referenced by the model, deduplicated in
    /// first-declaration order.
    pub fn variants(&self) -> Vec<Variant> {
        let mut variants = Vec::new();
        for variant in self
            .descriptions
            .iter()
            .flat_map(|d| d.match_models.iter().map(MatchModel::variant))
        {
            if !variants.contains(&variant) {
                variants.push(variant);
            }
        }
        variants
    }
}

fn check_duplicates(descriptions: &[OptDescription]) -> Result<()> {
    let mut seen: HashSet<(Variant, &str)> = HashSet::new();
    for model in descriptions.iter().flat_map(|d| d.match_models.iter()) {
        if !seen.insert((model.variant(), model.name())) {
            return Err(SchemaError::DuplicateOption(model.spelling()));
        }
    }
    Ok(())
}

impl TryFrom<Vec<OptDescription>> for OptDescriptionModel {
    type Error = SchemaError;

    fn try_from(descriptions: Vec<OptDescription>) -> Result<Self> {
        OptDescriptionModel::new(descriptions)
    }
}

impl From<OptDescriptionModel> for Vec<OptDescription> {
    fn from(model: OptDescriptionModel) -> Self {
        model.descriptions
    }
}
