// src/autograd/grad_fn.rs

use crate::value::Value;

/// The gradient rule attached to an operation-result node.
///
/// Each variant carries exactly the operand handle(s) and constants its local
/// rule needs (e.g. the fixed exponent for `Pow`). The backward engine
/// dispatches on the tag; there is no stored closure and no hidden captured
/// state. The operand handles double as the node's children for graph
/// traversal, via [`GradFn::inputs`].
#[derive(Clone)]
pub(crate) enum GradFn {
    Add(Value, Value),
    Sub(Value, Value),
    Mul(Value, Value),
    Div(Value, Value),
    Pow { base: Value, exponent: f64 },
    Exp(Value),
    Tanh(Value),
    Relu(Value),
}

impl GradFn {
    /// Diagnostic label for the operation that produced the node.
    pub(crate) fn op(&self) -> &'static str {
        match self {
            GradFn::Add(..) => "+",
            GradFn::Sub(..) => "-",
            GradFn::Mul(..) => "*",
            GradFn::Div(..) => "/",
            GradFn::Pow { .. } => "powf",
            GradFn::Exp(..) => "exp",
            GradFn::Tanh(..) => "tanh",
            GradFn::Relu(..) => "relu",
        }
    }

    /// The operand nodes this rule propagates into, in operand order.
    /// An operand used twice (`x + x`, with both slots the same node) appears
    /// once per slot; the visited set of the topological sort deduplicates
    /// traversal, while `propagate` still credits each slot's contribution.
    pub(crate) fn inputs(&self) -> Vec<Value> {
        match self {
            GradFn::Add(a, b)
            | GradFn::Sub(a, b)
            | GradFn::Mul(a, b)
            | GradFn::Div(a, b) => vec![a.clone(), b.clone()],
            GradFn::Pow { base: a, .. } => vec![a.clone()],
            GradFn::Exp(a) | GradFn::Tanh(a) | GradFn::Relu(a) => vec![a.clone()],
        }
    }

    /// Applies the local gradient rule: reads `grad_output` (the producing
    /// node's current gradient) and accumulates each operand's contribution.
    ///
    /// May only run once every node that lists the producing node as an
    /// operand has itself propagated; the backward engine's reverse
    /// topological replay guarantees this.
    pub(crate) fn propagate(&self, grad_output: f64) {
        match self {
            GradFn::Add(a, b) => {
                a.accumulate_grad(grad_output);
                b.accumulate_grad(grad_output);
            }
            GradFn::Sub(a, b) => {
                a.accumulate_grad(grad_output);
                b.accumulate_grad(-grad_output);
            }
            GradFn::Mul(a, b) => {
                a.accumulate_grad(b.data() * grad_output);
                b.accumulate_grad(a.data() * grad_output);
            }
            GradFn::Div(a, b) => {
                // d(a/b)/da = 1/b, d(a/b)/db = -a/b². A zero-valued divisor
                // is not special-cased: non-finite values flow through.
                let b_data = b.data();
                a.accumulate_grad(grad_output / b_data);
                b.accumulate_grad(-a.data() * grad_output / (b_data * b_data));
            }
            GradFn::Pow { base, exponent } => {
                let k = *exponent;
                base.accumulate_grad(k * base.data().powf(k - 1.0) * grad_output);
            }
            GradFn::Exp(a) => {
                a.accumulate_grad(a.data().exp() * grad_output);
            }
            GradFn::Tanh(a) => {
                let t = a.data().tanh();
                a.accumulate_grad((1.0 - t * t) * grad_output);
            }
            GradFn::Relu(a) => {
                // Sub-gradient at exactly 0 is 0: strictly-positive test.
                if a.data() > 0.0 {
                    a.accumulate_grad(grad_output);
                }
            }
        }
    }
}
