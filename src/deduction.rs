//! The C++17 deduction rules the report demonstrates, as pure functions over
//! the [`crate::core`] model. Each function answers: given this initializer
//! expression, what type does the declaration get?

use crate::core::{Expr, ExprForm, Ty, ValueCategory};
use thiserror::Error;

/// A declaration form that does not compile for the given initializer. These
/// are the cases the report mentions in prose instead of a table row.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeductionError {
    #[error("cannot bind non-const lvalue reference to {category} `{source_text}`")]
    LvalueRefToRvalue { source_text: String, category: ValueCategory },

    #[error("`{ty}` cannot bind to lvalue `{source_text}`")]
    RvalueRefToLvalue { source_text: String, ty: Ty },

    #[error("`auto*` requires a pointer initializer, got `{ty}` from `{source_text}`")]
    NotAPointer { source_text: String, ty: Ty },
}

/// `decltype(expr)`: declared type for an unparenthesized id-expression,
/// value-category rules for everything else.
pub fn decltype_of(expr: &Expr) -> Ty {
    match expr.form {
        ExprForm::IdExpression => expr.ty.clone(),
        ExprForm::Compound => decltype_expr(expr),
    }
}

/// The expression rules: lvalue gives `T&`, xvalue gives `T&&`, prvalue
/// gives `T`, where `T` is the expression's non-reference type.
fn decltype_expr(expr: &Expr) -> Ty {
    let base = expr.ty.strip_reference();
    match expr.category {
        ValueCategory::Lvalue => Ty::lvalue_ref(base),
        ValueCategory::Xvalue => Ty::rvalue_ref(base),
        ValueCategory::Prvalue => base,
    }
}

/// Plain `auto`: always a fresh copy, so references and top-level const are
/// stripped. A pointer's pointee const survives; the pointer's own const
/// does not.
pub fn auto_value(expr: &Expr) -> Ty {
    expr.ty.decayed()
}

/// `auto&`: deduces `T` with the reference dropped and const preserved.
/// Binding fails for rvalue initializers unless the deduced type is const.
pub fn auto_lvalue_ref(expr: &Expr) -> Result<Ty, DeductionError> {
    let deduced = expr.ty.strip_reference();
    if expr.category == ValueCategory::Lvalue || deduced.is_top_const() {
        Ok(Ty::lvalue_ref(deduced))
    } else {
        Err(DeductionError::LvalueRefToRvalue {
            source_text: expr.source.clone(),
            category: expr.category,
        })
    }
}

/// `const auto&`: binds to anything, including temporaries (whose lifetime
/// it extends), and the result is always a const lvalue reference.
pub fn const_auto_ref(expr: &Expr) -> Ty {
    Ty::lvalue_ref(Ty::konst(expr.ty.strip_reference()))
}

/// `auto&&`, the forwarding reference: an lvalue initializer deduces `T&`
/// and reference collapsing keeps it an lvalue reference; any rvalue deduces
/// `T&&`. Const is preserved either way.
pub fn auto_forwarding_ref(expr: &Expr) -> Ty {
    let base = expr.ty.strip_reference();
    match expr.category {
        ValueCategory::Lvalue => Ty::lvalue_ref(base),
        ValueCategory::Xvalue | ValueCategory::Prvalue => Ty::rvalue_ref(base),
    }
}

/// `decltype(auto)`: the declared type gets exactly `decltype(initializer)`.
/// When that comes out as `T&&` but the initializer is an lvalue (a named
/// rvalue-reference variable), the binding is ill-formed.
pub fn decltype_auto(expr: &Expr) -> Result<Ty, DeductionError> {
    let ty = decltype_of(expr);
    if ty.is_rvalue_ref() && expr.category == ValueCategory::Lvalue {
        return Err(DeductionError::RvalueRefToLvalue {
            source_text: expr.source.clone(),
            ty,
        });
    }
    Ok(ty)
}

/// `auto* v = e`: deduces the pointee from a pointer initializer.
pub fn auto_ptr(expr: &Expr) -> Result<Ty, DeductionError> {
    pointee_of(expr).map(Ty::pointer)
}

/// `const auto* v = e`: like `auto*` but the pointee becomes const.
pub fn const_auto_ptr(expr: &Expr) -> Result<Ty, DeductionError> {
    pointee_of(expr).map(|p| Ty::pointer(Ty::konst(p)))
}

/// `auto* const v = e`: the deduced pointer itself is const.
pub fn auto_ptr_const(expr: &Expr) -> Result<Ty, DeductionError> {
    pointee_of(expr).map(|p| Ty::konst(Ty::pointer(p)))
}

fn pointee_of(expr: &Expr) -> Result<Ty, DeductionError> {
    match expr.ty.decayed() {
        Ty::Pointer(pointee) => Ok(*pointee),
        other => Err(DeductionError::NotAPointer {
            source_text: expr.source.clone(),
            ty: other,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn int() -> Ty {
        Ty::int()
    }
    fn cint() -> Ty {
        Ty::konst(Ty::int())
    }

    #[test]
    fn decltype_of_id_expression_is_declared_type() {
        let rrx = Expr::id("rrx", Ty::rvalue_ref(int()));
        assert_eq!(decltype_of(&rrx), Ty::rvalue_ref(int()));
    }

    #[test]
    fn decltype_of_parenthesized_lvalue_adds_reference() {
        let x = Expr::id("x", int());
        assert_eq!(decltype_of(&x.parenthesized()), Ty::lvalue_ref(int()));

        let cx = Expr::id("cx", cint());
        assert_eq!(decltype_of(&cx.parenthesized()), Ty::lvalue_ref(cint()));

        // rrx is an lvalue despite its declared type int&&
        let rrx = Expr::id("rrx", Ty::rvalue_ref(int()));
        assert_eq!(decltype_of(&rrx.parenthesized()), Ty::lvalue_ref(int()));
    }

    #[test]
    fn decltype_of_rvalues() {
        let moved = Expr::call("std::move(x)", Ty::rvalue_ref(int()));
        assert_eq!(decltype_of(&moved), Ty::rvalue_ref(int()));

        let lit = Expr::literal("42", int());
        assert_eq!(decltype_of(&lit), int());
    }

    #[test]
    fn auto_value_strips_reference_and_const() {
        let rcx = Expr::id("rcx", Ty::lvalue_ref(cint()));
        assert_eq!(auto_value(&rcx), int());

        let cx = Expr::id("cx", cint());
        assert_eq!(auto_value(&cx), int());
    }

    #[test]
    fn auto_value_keeps_pointee_const_only() {
        let pcx = Expr::id("pcx", Ty::pointer(cint()));
        assert_eq!(auto_value(&pcx), Ty::pointer(cint()));

        let cpx = Expr::id("cpx", Ty::konst(Ty::pointer(int())));
        assert_eq!(auto_value(&cpx), Ty::pointer(int()));
    }

    #[test]
    fn auto_lvalue_ref_preserves_const_and_rejects_rvalues() {
        let cx = Expr::id("cx", cint());
        assert_eq!(auto_lvalue_ref(&cx), Ok(Ty::lvalue_ref(cint())));

        let moved = Expr::call("std::move(x)", Ty::rvalue_ref(int()));
        assert!(matches!(
            auto_lvalue_ref(&moved),
            Err(DeductionError::LvalueRefToRvalue { .. })
        ));

        let prvalue = Expr::call("get_value()", int());
        assert!(auto_lvalue_ref(&prvalue).is_err());
    }

    #[test]
    fn const_auto_ref_binds_temporaries() {
        let lit = Expr::literal("42", int());
        assert_eq!(const_auto_ref(&lit), Ty::lvalue_ref(cint()));

        let x = Expr::id("x", int());
        assert_eq!(const_auto_ref(&x), Ty::lvalue_ref(cint()));
    }

    #[test]
    fn forwarding_ref_follows_value_category() {
        let x = Expr::id("x", int());
        assert_eq!(auto_forwarding_ref(&x), Ty::lvalue_ref(int()));

        let cx = Expr::id("cx", cint());
        assert_eq!(auto_forwarding_ref(&cx), Ty::lvalue_ref(cint()));

        // the central gotcha: a named int&& is an lvalue, so auto&& gives int&
        let rrx = Expr::id("rrx", Ty::rvalue_ref(int()));
        assert_eq!(auto_forwarding_ref(&rrx), Ty::lvalue_ref(int()));

        let moved = Expr::call("std::move(x)", Ty::rvalue_ref(int()));
        assert_eq!(auto_forwarding_ref(&moved), Ty::rvalue_ref(int()));

        let prvalue = Expr::call("get_value()", int());
        assert_eq!(auto_forwarding_ref(&prvalue), Ty::rvalue_ref(int()));
    }

    #[test]
    fn decltype_auto_follows_decltype_and_checks_binding() {
        let x = Expr::id("x", int());
        assert_eq!(decltype_auto(&x), Ok(int()));
        assert_eq!(decltype_auto(&x.parenthesized()), Ok(Ty::lvalue_ref(int())));

        let moved = Expr::call("std::move(x)", Ty::rvalue_ref(int()));
        assert_eq!(decltype_auto(&moved), Ok(Ty::rvalue_ref(int())));

        // decltype(auto) v = rrx: declared type int&& cannot bind the lvalue rrx
        let rrx = Expr::id("rrx", Ty::rvalue_ref(int()));
        assert!(matches!(
            decltype_auto(&rrx),
            Err(DeductionError::RvalueRefToLvalue { .. })
        ));
    }

    #[test]
    fn auto_ptr_family() {
        let px = Expr::id("px", Ty::pointer(int()));
        let pcx = Expr::id("pcx", Ty::pointer(cint()));

        assert_eq!(auto_ptr(&px), Ok(Ty::pointer(int())));
        assert_eq!(auto_ptr(&pcx), Ok(Ty::pointer(cint())));
        assert_eq!(const_auto_ptr(&px), Ok(Ty::pointer(cint())));
        assert_eq!(auto_ptr_const(&px), Ok(Ty::konst(Ty::pointer(int()))));

        let x = Expr::id("x", int());
        assert!(matches!(
            auto_ptr(&x),
            Err(DeductionError::NotAPointer { .. })
        ));
    }
}
