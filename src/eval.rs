use std::rc::Rc;

use crate::error::{Error, Result};
use crate::expr::{Addressing, Expr};

/// Binding store threaded through one evaluation.
///
/// The store is shared and mutable across the whole reduction: a binding
/// committed while reducing one sub-term stays visible to every later
/// sibling reduction and is never retracted when an application returns.
pub trait Env {
  /// Addressing discipline this store resolves.
  type Addr: Addressing;

  /// Commits a binding of `binder` to `value`.
  fn bind(&mut self, binder: &<Self::Addr as Addressing>::Binder, value: Rc<Expr<Self::Addr>>);

  /// Resolves a variable. `Ok(None)` marks a free variable that evaluates
  /// to itself; a discipline that cannot tolerate a miss returns an error
  /// instead of `None`.
  fn lookup(&self, var: &<Self::Addr as Addressing>::Var) -> Result<Option<Rc<Expr<Self::Addr>>>>;

  /// Rendered bindings, newest first.
  fn entries(&self) -> Vec<String>;
}

/// Reduces `expr` to normal form under `env`.
pub fn eval<E: Env>(expr: &Rc<Expr<E::Addr>>, env: &mut E) -> Result<Rc<Expr<E::Addr>>> {
  eval_with(expr, env, &mut |_: &E| {})
}

/// Like [`eval`], invoking `hook` on the environment immediately before
/// each new binding is committed.
pub fn eval_with<E, F>(expr: &Rc<Expr<E::Addr>>, env: &mut E, hook: &mut F) -> Result<Rc<Expr<E::Addr>>>
where
  E: Env,
  F: FnMut(&E),
{
  match &**expr {
    Expr::Var(var) => match env.lookup(var)? {
      Some(value) => Ok(value),
      None => Ok(expr.clone()),
    },
    Expr::Lam(..) => Ok(expr.clone()),
    Expr::App(fun, arg) => {
      // call-by-value, argument strictly before function
      let arg_val = eval_with(arg, env, hook)?;
      let fun_val = eval_with(fun, env, hook)?;
      match &*fun_val {
        Expr::Lam(binder, body) => {
          hook(env);
          env.bind(binder, arg_val);
          eval_with(body, env, hook)
        }
        other => Err(Error::TypeMismatch { found: other.to_string() }),
      }
    }
  }
}

/// Ready-made [`eval_with`] hook dumping the environment through `tracing`
/// at TRACE level, newest binding first.
pub fn trace_bindings<E: Env>(env: &E) {
  if !tracing::enabled!(tracing::Level::TRACE) {
    return;
  }
  let entries = env.entries();
  tracing::trace!("environment before bind ({} entries)", entries.len());
  for entry in entries {
    tracing::trace!("  {entry}");
  }
}
