//! Program interface models: the configuration handed to one parse call.
//!
//! A [`ProgramInterfaceModel`] pairs an optional [`OptionScheme`] with an
//! optional [`OptDescriptionModel`]. It is built (or loaded) once and read
//! concurrently by any number of parses.
//!
//! # Example YAML
//!
//! ```yaml
//! scheme: getopt-long
//! descriptions:
//!   - description: output file
//!     match_models:
//!       - { variant: posix_short_assignment, name: o }
//!       - { variant: gnu_implicit_assignment, name: output }
//!   - description: verbose
//!     match_models:
//!       - { variant: posix_short_switch, name: v }
//! ```
//!
//! `scheme` is either a default scheme name or a list of variants.

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::{OptDescriptionModel, OptionScheme, SemanticType};

/// Optional scheme and description catalog for one program interface.
///
/// # Examples
///
/// ```
/// use argshape_core::*;
///
/// let pim = ProgramInterfaceModel::from_yaml_str(r#"
/// descriptions:
///   - description: execute
///     match_models: [{ variant: posix_short_switch, name: x }]
/// "#).unwrap();
///
/// assert!(pim.scheme.is_none());
/// assert_eq!(pim.match_argument("-x"), vec![SemanticType::PosixShortSwitch]);
/// // Without an explicit scheme, the declared variants act as one.
/// assert!(pim.effective_scheme().unwrap().accepts(Variant::PosixShortSwitch));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgramInterfaceModel {
    /// Accepted syntax variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<OptionScheme>,
    /// Declared options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptions: Option<OptDescriptionModel>,
}

impl ProgramInterfaceModel {
    pub fn new(scheme: Option<OptionScheme>, descriptions: Option<OptDescriptionModel>) -> Self {
        Self {
            scheme,
            descriptions,
        }
    }

    /// Model with only a scheme.
    pub fn with_scheme(scheme: OptionScheme) -> Self {
        Self::new(Some(scheme), None)
    }

    /// Model with only a description catalog.
    pub fn with_descriptions(descriptions: OptDescriptionModel) -> Self {
        Self::new(None, Some(descriptions))
    }

    /// Semantic types the description catalog assigns to `arg`; empty when
    /// there is no catalog or nothing matches.
    pub fn match_argument(&self, arg: &str) -> Vec<SemanticType> {
        self.descriptions
            .as_ref()
            .map(|model| model.match_argument(arg))
            .unwrap_or_default()
    }

    /// Scheme used to filter candidates: the explicit scheme, or else the
    /// variants declared by the description catalog.
    pub fn effective_scheme(&self) -> Option<OptionScheme> {
        match (&self.scheme, &self.descriptions) {
            (Some(scheme), _) => Some(scheme.clone()),
            (None, Some(model)) if !model.is_empty() => Some(OptionScheme::new(model.variants())),
            (None, _) => None,
        }
    }

    /// Loads a model from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::SchemaError::Io) if the file cannot be read, or
    /// [`Yaml`](crate::SchemaError::Yaml) if parsing or validation fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let model = serde_yaml::from_reader(reader)?;
        Ok(model)
    }

    /// Saves the model as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
