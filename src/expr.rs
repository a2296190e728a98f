use std::fmt;
use std::rc::Rc;

/// Fixes how variables address their binders in one configuration.
///
/// [`crate::indexed::Indexed`] counts binder depth, so a variable is a
/// positive integer and an abstraction declares no parameter of its own.
/// [`crate::named::Named`] uses identifiers for both.
pub trait Addressing: Sized {
  /// Payload of a [`Expr::Var`] node.
  type Var: Clone + PartialEq + fmt::Debug + fmt::Display;
  /// Parameter declared by a [`Expr::Lam`] node.
  type Binder: Clone + PartialEq + fmt::Debug;

  /// Renders an abstraction; the two disciplines print the binder slot
  /// differently.
  fn fmt_lam(binder: &Self::Binder, body: &Expr<Self>, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// A lambda term.
///
/// Sub-terms are reference counted so environments and evaluation results
/// can share them read-only; nothing ever mutates a node after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<A: Addressing> {
  Var(A::Var),
  Lam(A::Binder, Rc<Expr<A>>),
  App(Rc<Expr<A>>, Rc<Expr<A>>),
}

impl<A: Addressing> fmt::Display for Expr<A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Expr::Var(var) => write!(f, "{var}"),
      Expr::Lam(binder, body) => A::fmt_lam(binder, &**body, f),
      Expr::App(fun, arg) => write!(f, "({fun} {arg})"),
    }
  }
}
