// End-to-end behavior of the scalar engine: forward values, chain rule,
// accumulation over shared nodes, and determinism across repeated passes.

use approx::assert_relative_eq;
use scalargrad::autograd::check_grad;
use scalargrad::Value;

#[test]
fn forward_and_chain_rule_product_plus_constant() {
    let a = Value::new(2.0);
    let b = Value::new(-3.0);
    let c = Value::new(10.0);
    let d = &(&a * &b) + &c;
    assert_relative_eq!(d.data(), 4.0);

    d.backward();
    assert_relative_eq!(a.grad(), -3.0);
    assert_relative_eq!(b.grad(), 2.0);
    assert_relative_eq!(c.grad(), 1.0);
    assert_relative_eq!(d.grad(), 1.0);
}

#[test]
fn shared_node_accumulates_with_multiplicity() {
    let x = Value::new(3.0);
    let y = &x + &x;
    y.backward();
    assert_relative_eq!(x.grad(), 2.0);
}

#[test]
fn diamond_graph_gradient() {
    // z = (x + x) * (x + x) = 4x^2, dz/dx = 8x = 8.
    let x = Value::new(1.0);
    let y = &x + &x;
    let z = &y * &y;
    z.backward();
    assert_relative_eq!(z.data(), 4.0);
    assert_relative_eq!(x.grad(), 8.0);
}

#[test]
fn propagation_runs_once_per_node() {
    // If a multi-path node propagated more than once, the gradient below it
    // would be overcounted. d = c * c with c = a + b: dd/da = 2c = 10.
    let a = Value::new(2.0);
    let b = Value::new(3.0);
    let c = &a + &b;
    let d = &c * &c;
    d.backward();
    assert_relative_eq!(c.grad(), 10.0);
    assert_relative_eq!(a.grad(), 10.0);
    assert_relative_eq!(b.grad(), 10.0);
}

#[test]
fn repeated_backward_is_deterministic_with_resets() {
    let a = Value::new(1.5);
    let b = Value::new(-2.0);
    let p = &a * &b;
    let q = &a * &a;
    let c = &p + &q;

    c.backward();
    let first = (a.grad(), b.grad());
    assert_relative_eq!(first.0, 1.0); // b + 2a
    assert_relative_eq!(first.1, 1.5); // a

    // The graph is retained, so every node it contains must be reset,
    // intermediates included: a stale grad on p or q would be replayed
    // into the leaves on the next pass.
    for node in [&a, &b, &p, &q, &c] {
        node.zero_grad();
    }
    c.backward();
    let second = (a.grad(), b.grad());

    assert_eq!(first, second);
}

#[test]
fn stale_intermediate_grads_double_count_on_retained_graph() {
    let a = Value::new(1.5);
    let b = Value::new(-2.0);
    let p = &a * &b;
    let q = &a * &a;
    let c = &p + &q;

    c.backward();
    let first = (a.grad(), b.grad());

    // Resetting only the leaves is not enough on a retained graph: p and q
    // still hold grad 1.0, the replay adds on top of it, and the leaves
    // receive exactly twice the fresh gradient.
    a.zero_grad();
    b.zero_grad();
    c.backward();
    assert_relative_eq!(a.grad(), 2.0 * first.0);
    assert_relative_eq!(b.grad(), 2.0 * first.1);
}

#[test]
fn gradients_accumulate_without_resets() {
    let x = Value::new(2.0);
    let y = &x * 3.0;
    y.backward();
    assert_relative_eq!(x.grad(), 3.0);

    // No reset: the second pass adds on top.
    y.backward();
    assert_relative_eq!(x.grad(), 6.0);
}

#[test]
fn backward_on_intermediate_covers_only_its_subgraph() {
    let a = Value::new(2.0);
    let b = &a * &a;
    let c = &b + 1.0;

    b.backward();
    assert_relative_eq!(a.grad(), 4.0);
    // c is above the chosen root and receives nothing.
    assert_relative_eq!(c.grad(), 0.0);
}

#[test]
fn mixed_constant_expression() {
    // f(a) = (2a + 1) / a at a = 1: f = 3, f' = d(2 + 1/a)/da = -1/a^2 = -1.
    let a = Value::new(1.0);
    let f = &(&(2.0 * &a) + 1.0) / &a;
    assert_relative_eq!(f.data(), 3.0);
    f.backward();
    assert_relative_eq!(a.grad(), -1.0);
}

#[test]
fn karpathy_style_two_neuron_expression() {
    // x1*w1 + x2*w2 + b through tanh, the classic worked example:
    // tanh(0.8814) ~ 0.7071, local derivative ~ 0.5.
    let x1 = Value::new(2.0);
    let x2 = Value::new(0.0);
    let w1 = Value::new(-3.0);
    let w2 = Value::new(1.0);
    let b = Value::new(6.881_373_587_019_543);

    let n = &(&(&x1 * &w1) + &(&x2 * &w2)) + &b;
    let o = n.tanh();
    o.backward();

    assert_relative_eq!(o.data(), 0.707_106_781_186_547_6, epsilon = 1e-9);
    assert_relative_eq!(x1.grad(), -1.5, epsilon = 1e-9);
    assert_relative_eq!(w1.grad(), 1.0, epsilon = 1e-9);
    assert_relative_eq!(x2.grad(), 0.5, epsilon = 1e-9);
    assert_relative_eq!(w2.grad(), 0.0, epsilon = 1e-9);
}

#[test]
fn composite_expression_matches_finite_differences() {
    let inputs = vec![Value::new(0.7), Value::new(-1.3), Value::new(2.1)];
    let func = |xs: &[Value]| {
        let p = &(&xs[0] * &xs[1]) + &xs[2].powf(2.0);
        let q = &p.tanh() + &(&xs[0] / &xs[2]);
        &q.exp() + &(-&xs[1]).relu()
    };
    check_grad(func, &inputs, 1e-6, 1e-4).unwrap();
}
