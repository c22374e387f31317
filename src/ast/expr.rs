//! Expression nodes for the plot language AST.

/// An additive operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOp {
    /// `+`
    Add,
    /// `-`
    Sub,
}

/// A multiplicative operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MulOp {
    /// `*`
    Mul,
    /// `/`
    Div,
}

/// An expression: a [`Term`] followed by zero or more additive operations.
///
/// The tail vector encodes left associativity: `a - b + c` is stored as
/// `a` with tail `[(-, b), (+, c)]` and folds left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    /// The leading term.
    pub term: Term,
    /// The additive tail, applied left to right.
    pub tail: Vec<(AddOp, Term)>,
}

/// A term: a [`Factor`] followed by zero or more multiplicative operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    /// The leading factor.
    pub factor: Factor,
    /// The multiplicative tail, applied left to right.
    pub tail: Vec<(MulOp, Factor)>,
}

/// A factor: an optional chain of unary signs in front of a [`Component`].
///
/// Unary sign binds looser than `**`, so `-2**2` parses as
/// `Minus(Component(2 ** 2))`.
#[derive(Debug, Clone, PartialEq)]
pub enum Factor {
    /// Unary `+`; evaluates to its operand unchanged.
    Plus(Box<Factor>),
    /// Unary `-`; negates its operand.
    Minus(Box<Factor>),
    /// A plain component with no leading sign.
    Component(Component),
}

/// A component: an [`Atom`] with an optional `**` exponent.
///
/// The exponent is itself a component, making `**` right-associative:
/// `2 ** 3 ** 2` is `2 ** (3 ** 2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    /// The base atom.
    pub atom: Atom,
    /// The exponent, if a `**` followed the atom.
    pub exponent: Option<Box<Component>>,
}

/// The smallest expression unit.
#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    /// A numeric literal.
    Literal(f64),
    /// A reference to a constant or loop variable.
    ///
    /// The parser guarantees the name resolved to a symbol when the atom
    /// was built; the evaluator resolves it again for its value.
    Ident(String),
    /// A call to a unary built-in function, e.g. `SIN(T)`.
    Call {
        /// The function name as written.
        name: String,
        /// The single argument expression.
        arg: Box<Expression>,
    },
    /// A parenthesized subexpression.
    Paren(Box<Expression>),
}
