use thiserror::Error;

/// Failures surfaced by term construction and evaluation.
///
/// All of them are values returned to the caller; nothing here terminates
/// the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  /// A constructor was handed an argument that cannot form a term: a zero
  /// positional index or an empty identifier.
  #[error("invalid term: {0}")]
  InvalidConstruction(&'static str),

  /// A positional variable pointed past the end of the binding stack.
  #[error("unbound variable {index} (environment holds {depth} bindings)")]
  UnboundVariable { index: u32, depth: usize },

  /// The function position of an application reduced to something that is
  /// not an abstraction.
  #[error("cannot apply non-abstraction {found}")]
  TypeMismatch { found: String },
}

pub type Result<T> = std::result::Result<T, Error>;
