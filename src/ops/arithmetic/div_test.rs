use crate::autograd::check_grad;
use crate::ops::arithmetic::div_op;
use crate::Value;
use approx::assert_relative_eq;

#[test]
fn test_div_forward() {
    let a = Value::new(6.0);
    let b = Value::new(-3.0);
    let c = div_op(&a, &b);
    assert_relative_eq!(c.data(), -2.0);
    assert_eq!(c.op(), Some("/"));
}

#[test]
fn test_div_backward() {
    let a = Value::new(6.0);
    let b = Value::new(2.0);
    let c = &a / &b;
    c.backward();
    // d(a/b)/da = 1/b = 0.5, d(a/b)/db = -a/b^2 = -1.5
    assert_relative_eq!(a.grad(), 0.5);
    assert_relative_eq!(b.grad(), -1.5);
}

#[test]
fn test_div_reflected_constant() {
    let b = Value::new(4.0);
    let c = 1.0 / &b;
    assert_relative_eq!(c.data(), 0.25);

    c.backward();
    assert_relative_eq!(b.grad(), -0.0625);
}

#[test]
fn test_div_by_zero_propagates_non_finite() {
    let a = Value::new(1.0);
    let b = Value::new(0.0);
    let c = &a / &b;
    assert!(c.data().is_infinite());

    // Gradients are non-finite too, not an error.
    c.backward();
    assert!(a.grad().is_infinite());
    assert!(b.grad().is_nan() || b.grad().is_infinite());
}

#[test]
fn test_div_grad_check() {
    let inputs = vec![Value::new(1.5), Value::new(-0.8)];
    check_grad(|xs: &[Value]| &xs[0] / &xs[1], &inputs, 1e-6, 1e-4).unwrap();
}
