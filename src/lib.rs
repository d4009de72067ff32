//! # scalargrad
//!
//! A reverse-mode automatic differentiation engine over scalar values.
//!
//! Forward arithmetic eagerly builds a DAG of [`Value`] nodes; calling
//! [`Value::backward`] on a root computes exact gradients of that root with
//! respect to every node that contributed to it, in a single reverse
//! topological traversal. A small neural-network composition layer
//! ([`nn`]) sits on top of the engine.
//!
//! ```
//! use scalargrad::Value;
//!
//! let a = Value::new(2.0);
//! let b = Value::new(-3.0);
//! let c = Value::new(10.0);
//! let d = &(&a * &b) + &c;
//! assert_eq!(d.data(), 4.0);
//!
//! d.backward();
//! assert_eq!(a.grad(), -3.0);
//! assert_eq!(b.grad(), 2.0);
//! assert_eq!(c.grad(), 1.0);
//! ```

pub mod autograd;
pub mod nn;
pub mod ops;
pub mod value;

pub use value::Value;

pub mod error;
pub use error::ScalarGradError;
