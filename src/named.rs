//! Named addressing.
//!
//! Variables are identifiers; bindings live in a map where a newer binding
//! for a name overwrites the older one outright. A variable missing from
//! the map is free and evaluates to itself.

use std::fmt;
use std::rc::Rc;

use im::HashMap;

use crate::error::{Error, Result};
use crate::eval::Env;
use crate::expr::{Addressing, Expr};

/// Marker for the named discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Named;

/// Identifier of a variable or abstraction parameter.
pub type Name = String;

impl Addressing for Named {
  type Var = Name;
  type Binder = Name;

  fn fmt_lam(binder: &Name, body: &Expr<Self>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "(λ{binder} . {body})")
  }
}

/// Identifier-to-value map, last write wins.
pub type Scope = HashMap<Name, Rc<Expr<Named>>>;

impl Env for Scope {
  type Addr = Named;

  fn bind(&mut self, name: &Name, value: Rc<Expr<Named>>) {
    self.insert(name.clone(), value);
  }

  fn lookup(&self, name: &Name) -> Result<Option<Rc<Expr<Named>>>> {
    Ok(self.get(name).cloned())
  }

  fn entries(&self) -> Vec<String> {
    // the map keeps no insertion order; render sorted by name instead
    let mut entries: Vec<String> = self
      .iter()
      .map(|(name, value)| format!("{name} = {value}"))
      .collect();
    entries.sort();
    entries
  }
}

/// Variable named `name`; the empty identifier is rejected.
#[inline(always)]
pub fn var(name: impl Into<Name>) -> Result<Rc<Expr<Named>>> {
  let name = name.into();
  if name.is_empty() {
    return Err(Error::InvalidConstruction("variable name must not be empty"));
  }
  Ok(Rc::new(Expr::Var(name)))
}

/// Abstraction binding `binder` in `body`; the empty identifier is
/// rejected.
#[inline(always)]
pub fn lam(binder: impl Into<Name>, body: Rc<Expr<Named>>) -> Result<Rc<Expr<Named>>> {
  let binder = binder.into();
  if binder.is_empty() {
    return Err(Error::InvalidConstruction("abstraction parameter must not be empty"));
  }
  Ok(Rc::new(Expr::Lam(binder, body)))
}

#[inline(always)]
pub fn app(fun: Rc<Expr<Named>>, arg: Rc<Expr<Named>>) -> Rc<Expr<Named>> {
  Rc::new(Expr::App(fun, arg))
}

/// Scope with each name bound to itself, the usual seed for open terms.
pub fn free<I>(names: I) -> Result<Scope>
where
  I: IntoIterator,
  I::Item: Into<Name>,
{
  let mut scope = Scope::new();
  for name in names {
    let name = name.into();
    let value = var(name.clone())?;
    scope.insert(name, value);
  }
  Ok(scope)
}
