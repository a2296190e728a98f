use pretty_assertions::assert_eq;
use reducer::eval::{eval, Env};
use reducer::indexed::{self, Stack};
use reducer::named::{self, Scope};
use reducer::Error;

#[test]
fn positional_golden_trace() {
  // ((λ (λ 2)) (λ 1)) (λ 2) — index 2 skips the innermost binding
  let id = indexed::lam(indexed::var(1).unwrap());
  let open = indexed::lam(indexed::var(2).unwrap());
  let k = indexed::lam(indexed::lam(indexed::var(2).unwrap()));
  let expr = indexed::app(indexed::app(k, id.clone()), open);
  assert_eq!(expr.to_string(), "(((λ (λ 2)) (λ 1)) (λ 2))");

  let mut stack = Stack::new();
  let result = eval(&expr, &mut stack).unwrap();
  assert_eq!(result, id);
  assert_eq!(result.to_string(), "(λ 1)");

  // both arguments remain bound, newest first
  assert_eq!(stack.entries(), vec!["(λ 2)".to_string(), "(λ 1)".to_string()]);
}

#[test]
fn named_golden_trace() {
  // ((λx . (λy . x)) y) x with x and y pre-bound to themselves
  let k = named::lam("x", named::lam("y", named::var("x").unwrap()).unwrap()).unwrap();
  let expr = named::app(
    named::app(k, named::var("y").unwrap()),
    named::var("x").unwrap(),
  );
  assert_eq!(expr.to_string(), "(((λx . (λy . x)) y) x)");

  let mut scope = named::free(["x", "y"]).unwrap();
  let result = eval(&expr, &mut scope).unwrap();
  assert_eq!(result, named::var("y").unwrap());
  assert_eq!(result.to_string(), "y");

  // the inner application rebound x, the outer one rebound y
  assert_eq!(
    scope.entries(),
    vec!["x = y".to_string(), "y = x".to_string()]
  );
}

#[test]
fn positional_beta_step_matches_extended_environment() {
  // ((λ 1) arg) under env ≡ 1 under env with eval(arg) appended
  let arg = indexed::lam(indexed::var(1).unwrap());
  let redex = indexed::app(indexed::lam(indexed::var(1).unwrap()), arg.clone());

  let mut stack = Stack::new();
  let applied = eval(&redex, &mut stack).unwrap();

  let mut extended = Stack::new();
  let mut scratch = Stack::new();
  let arg_val = eval(&arg, &mut scratch).unwrap();
  extended.bind(&(), arg_val);
  let direct = eval(&indexed::var(1).unwrap(), &mut extended).unwrap();

  assert_eq!(applied, direct);
}

#[test]
fn named_beta_step_matches_extended_environment() {
  // ((λx . x) arg) under env ≡ x under env with x bound to eval(arg),
  // shadowing any prior x
  let arg = named::lam("z", named::var("z").unwrap()).unwrap();
  let redex = named::app(named::lam("x", named::var("x").unwrap()).unwrap(), arg.clone());

  let mut scope = named::free(["x"]).unwrap();
  let applied = eval(&redex, &mut scope).unwrap();

  let mut extended = named::free(["x"]).unwrap();
  let mut scratch = Scope::new();
  let arg_val = eval(&arg, &mut scratch).unwrap();
  extended.bind(&"x".to_string(), arg_val);
  let direct = eval(&named::var("x").unwrap(), &mut extended).unwrap();

  assert_eq!(applied, direct);
}

#[test]
fn normal_forms_are_fixed_points() {
  let id = named::lam("x", named::var("x").unwrap()).unwrap();
  let mut scope = Scope::new();
  let once = eval(&id, &mut scope).unwrap();
  let twice = eval(&once, &mut scope).unwrap();
  assert_eq!(once, twice);
}

#[test]
fn failures_are_values_not_aborts() {
  let expr = indexed::app(
    indexed::lam(indexed::var(3).unwrap()),
    indexed::lam(indexed::var(1).unwrap()),
  );
  let mut stack = Stack::new();
  let err = eval(&expr, &mut stack).unwrap_err();
  assert_eq!(err, Error::UnboundVariable { index: 3, depth: 1 });
  assert_eq!(
    err.to_string(),
    "unbound variable 3 (environment holds 1 bindings)"
  );
}
