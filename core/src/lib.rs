//! Configuration types for command-line argument classification.
//!
//! This crate defines the vocabulary shared by the lexer and resolver in
//! `argshape-argparse`, and the configuration a program hands them:
//!
//! - [`Variant`]: one historical syntax convention (POSIX short switch,
//!   GNU explicit assignment, X-toolkit reverse switch, ...).
//! - [`ContextFreeType`] / [`SemanticType`] / [`TokenType`]: the two-layer
//!   token tag: the shape of an argument and the role it finally plays.
//! - [`MatchModel`], [`OptDescription`], [`OptDescriptionModel`]: a named
//!   catalog of a program's options and their spellings.
//! - [`OptionScheme`]: the coarse set of variants a program accepts, with a
//!   catalog of defaults (`posix_strict`, `getopt_long`, ...).
//! - [`ProgramInterfaceModel`]: scheme and catalog paired for one parse,
//!   loadable from YAML or JSON.
//!
//! Invalid configuration is rejected when it is built ([`SchemaError`]);
//! nothing in this crate fails while arguments are being classified.
//!
//! # Example
//!
//! ```
//! use argshape_core::*;
//!
//! let catalog = OptDescriptionModel::new(vec![
//!     OptDescription::new("output", vec![
//!         MatchModel::new(Variant::PosixShortAssignment, "o").unwrap(),
//!         MatchModel::new(Variant::GnuExplicitAssignment, "output").unwrap(),
//!     ]).unwrap(),
//! ]).unwrap();
//! let pim = ProgramInterfaceModel::new(Some(OptionScheme::getopt_long()), Some(catalog));
//!
//! assert_eq!(pim.match_argument("--output=a.out"), vec![SemanticType::GnuExplicitAssignment]);
//! assert!(pim.effective_scheme().unwrap().accepts(Variant::GnuSwitch));
//! ```

mod description;
mod error;
mod interface;
mod matching;
mod scheme;
mod types;

pub use description::{OptDescription, OptDescriptionModel};
pub use error::{Result, SchemaError};
pub use interface::ProgramInterfaceModel;
pub use matching::MatchModel;
pub use scheme::OptionScheme;
pub use types::*;
