//! Two-phase classification of raw command-line arguments.
//!
//! Arguments go through two passes:
//!
//! 1. The [lexer](lex) gives every argument a context-free shape using the
//!    [pattern table](pattern::PATTERNS). Unambiguous shapes (`--`,
//!    `--name=value`, `+name`, plain words) are final at this point; the
//!    others carry a set of semantic candidates.
//! 2. The [resolver](resolve) scans left to right and settles candidates
//!    using the optional [`ProgramInterfaceModel`]: declared options first,
//!    then pending assignments, then the option scheme. `--` closes options
//!    for the rest of the line.
//!
//! Classification is total: every argument gets a token, and nothing here
//! returns an error. A token that no available context can settle keeps its
//! context-free type and candidates, which callers must check for with
//! [`Token::is_resolved`] or [`TokenList::unresolved`].
//!
//! # Example
//!
//! ```
//! use argshape_argparse::parse_arguments;
//! use argshape_core::{SemanticType, TokenType};
//!
//! let tokens = parse_arguments(["-l", "-p", "--only", "argument"], None);
//! assert_eq!(
//!     tokens.types(),
//!     vec![
//!         TokenType::Semantic(SemanticType::PosixShortSwitch),
//!         TokenType::Semantic(SemanticType::PosixShortSwitch),
//!         TokenType::Semantic(SemanticType::GnuSwitch),
//!         TokenType::Semantic(SemanticType::Operand),
//!     ],
//! );
//! ```
//!
//! [`ProgramInterfaceModel`]: argshape_core::ProgramInterfaceModel

mod lexer;
pub mod pattern;
mod resolver;
mod token;

use argshape_core::ProgramInterfaceModel;

pub use lexer::{lex, lex_argument};
pub use resolver::resolve;
pub use token::{Token, TokenList};

/// Lexes and resolves an argument vector (program name excluded).
///
/// Each call owns its scan state, so one interface model may be shared by
/// any number of concurrent calls.
pub fn parse_arguments<I, S>(args: I, pim: Option<&ProgramInterfaceModel>) -> TokenList
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    resolve(lex(args), pim)
}
