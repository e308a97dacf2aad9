use serde::Serialize;
use std::fmt;

/// A C++ type from the fixed grammar the demo exercises: `int` as the only
/// base type, cv-qualification, pointers, and both reference kinds.
///
/// Construct values through the associated functions rather than the variants
/// directly; the constructors enforce the language rules that a reference to
/// a reference collapses and that a reference is never cv-qualified.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Ty {
    Int,
    Const(Box<Ty>),
    Pointer(Box<Ty>),
    LvalueRef(Box<Ty>),
    RvalueRef(Box<Ty>),
}

impl Ty {
    pub fn int() -> Ty {
        Ty::Int
    }

    /// cv-qualify a type. Qualifying a reference is a no-op (references are
    /// never const themselves), and qualifying twice is idempotent.
    pub fn konst(inner: Ty) -> Ty {
        match inner {
            Ty::LvalueRef(_) | Ty::RvalueRef(_) => inner,
            Ty::Const(_) => inner,
            other => Ty::Const(Box::new(other)),
        }
    }

    pub fn pointer(pointee: Ty) -> Ty {
        Ty::Pointer(Box::new(pointee))
    }

    /// `T&`, with reference collapsing: `&` applied to any reference yields
    /// an lvalue reference.
    pub fn lvalue_ref(referent: Ty) -> Ty {
        match referent {
            Ty::LvalueRef(inner) | Ty::RvalueRef(inner) => Ty::LvalueRef(inner),
            other => Ty::LvalueRef(Box::new(other)),
        }
    }

    /// `T&&`, with reference collapsing: `&&` applied to `T&` stays `T&`.
    pub fn rvalue_ref(referent: Ty) -> Ty {
        match referent {
            Ty::LvalueRef(inner) => Ty::LvalueRef(inner),
            Ty::RvalueRef(inner) => Ty::RvalueRef(inner),
            other => Ty::RvalueRef(Box::new(other)),
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Ty::LvalueRef(_) | Ty::RvalueRef(_))
    }

    pub fn is_rvalue_ref(&self) -> bool {
        matches!(self, Ty::RvalueRef(_))
    }

    /// Whether the outermost level is const. For a pointer this asks about
    /// the pointer itself, not the pointee.
    pub fn is_top_const(&self) -> bool {
        matches!(self, Ty::Const(_))
    }

    /// The referent type if this is a reference, otherwise the type itself.
    pub fn strip_reference(&self) -> Ty {
        match self {
            Ty::LvalueRef(inner) | Ty::RvalueRef(inner) => (**inner).clone(),
            other => other.clone(),
        }
    }

    /// Remove outermost const, if any. Inner const (e.g. a pointee's) stays.
    pub fn strip_top_const(&self) -> Ty {
        match self {
            Ty::Const(inner) => (**inner).clone(),
            other => other.clone(),
        }
    }

    /// What a by-value copy of this type looks like: references dropped,
    /// then top-level const dropped. This is the plain-`auto` result and also
    /// the adjusted type of a prvalue expression.
    pub fn decayed(&self) -> Ty {
        self.strip_reference().strip_top_const()
    }
}

/// Canonical spelling, GCC style (`const int&`, `int* const`). Toolchain
/// dialect variations live in [`crate::label`].
impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Int => write!(f, "int"),
            Ty::Const(inner) => match **inner {
                // West const for base types, east const for pointers.
                Ty::Pointer(_) => write!(f, "{} const", inner),
                _ => write!(f, "const {}", inner),
            },
            Ty::Pointer(pointee) => write!(f, "{}*", pointee),
            Ty::LvalueRef(referent) => write!(f, "{}&", referent),
            Ty::RvalueRef(referent) => write!(f, "{}&&", referent),
        }
    }
}

/// The three fundamental value categories of a C++17 expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ValueCategory {
    Lvalue,
    Xvalue,
    Prvalue,
}

impl ValueCategory {
    /// glvalue = lvalue or xvalue: the expression designates an object.
    pub fn has_identity(self) -> bool {
        !matches!(self, ValueCategory::Prvalue)
    }

    /// rvalue = xvalue or prvalue: resources may be stolen from it.
    pub fn is_movable(self) -> bool {
        !matches!(self, ValueCategory::Lvalue)
    }
}

impl fmt::Display for ValueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueCategory::Lvalue => "lvalue",
            ValueCategory::Xvalue => "xvalue",
            ValueCategory::Prvalue => "prvalue",
        };
        f.write_str(name)
    }
}

/// How `decltype` classifies the expression it is applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ExprForm {
    /// A bare, unparenthesized name; `decltype` yields the declared type.
    IdExpression,
    /// Anything else (parenthesized names, calls, literals); `decltype`
    /// applies the value-category rules.
    Compound,
}

/// One demonstrated initializer expression: its source text, the type the
/// language assigns it, its value category, and its form as seen by
/// `decltype`.
#[derive(Clone, Debug, Serialize)]
pub struct Expr {
    pub source: String,
    pub ty: Ty,
    pub category: ValueCategory,
    pub form: ExprForm,
}

impl Expr {
    /// A named variable. Every id-expression naming a variable is an lvalue,
    /// including one whose declared type is `int&&`.
    pub fn id(source: &str, declared: Ty) -> Expr {
        Expr {
            source: source.to_string(),
            ty: declared,
            category: ValueCategory::Lvalue,
            form: ExprForm::IdExpression,
        }
    }

    /// A function call; value category follows the return type.
    pub fn call(source: &str, return_ty: Ty) -> Expr {
        let category = match &return_ty {
            Ty::LvalueRef(_) => ValueCategory::Lvalue,
            Ty::RvalueRef(_) => ValueCategory::Xvalue,
            _ => ValueCategory::Prvalue,
        };
        Expr {
            source: source.to_string(),
            ty: return_ty,
            category,
            form: ExprForm::Compound,
        }
    }

    /// A literal such as `42`: a prvalue.
    pub fn literal(source: &str, ty: Ty) -> Expr {
        Expr {
            source: source.to_string(),
            ty,
            category: ValueCategory::Prvalue,
            form: ExprForm::Compound,
        }
    }

    /// The same expression wrapped in parentheses. Type and value category
    /// are untouched, but `decltype` now applies the expression rules.
    pub fn parenthesized(&self) -> Expr {
        Expr {
            source: format!("({})", self.source),
            ty: self.ty.clone(),
            category: self.category,
            form: ExprForm::Compound,
        }
    }
}
