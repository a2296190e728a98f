use reducer::eval::{eval_with, trace_bindings};
use reducer::{indexed, named};

// Demo programs for both addressing disciplines. Run with RUST_LOG=trace to
// see the environment dumped before each binding.
fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  // positional: ((λ (λ 2)) id) open, where index 2 skips the innermost
  // binding and resolves to id
  let id = indexed::lam(indexed::var(1)?);
  let open = indexed::lam(indexed::var(2)?);
  let k = indexed::lam(indexed::lam(indexed::var(2)?));
  let expr = indexed::app(indexed::app(k, id), open);
  println!("{expr}");

  let mut stack = indexed::Stack::new();
  let result = eval_with(&expr, &mut stack, &mut trace_bindings)?;
  println!("{result}");

  // named: ((λx . (λy . x)) y) x with x and y free, reducing to y
  let k = named::lam("x", named::lam("y", named::var("x")?)?)?;
  let expr = named::app(named::app(k, named::var("y")?), named::var("x")?);
  println!("{expr}");

  let mut scope = named::free(["x", "y"])?;
  let result = eval_with(&expr, &mut scope, &mut trace_bindings)?;
  println!("{result}");

  Ok(())
}
