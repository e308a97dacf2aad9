//! The fixed, enumerable case set the report walks through: ten named
//! variables covering the qualifier combinations, three helper functions for
//! each value category, and the two rvalue expressions. Every table row is
//! computed through [`crate::deduction`]; no label is ever hand-written.

use crate::core::{Expr, Ty};
use crate::deduction::{self, DeductionError};
use once_cell::sync::Lazy;
use serde::Serialize;

/// The named entities every section draws its initializers from.
pub struct Entities {
    pub x: Expr,
    pub cx: Expr,
    pub rx: Expr,
    pub rcx: Expr,
    pub rrx: Expr,
    pub rrcx: Expr,
    pub px: Expr,
    pub pcx: Expr,
    pub cpx: Expr,
    pub cpcx: Expr,
    pub get_value: Expr,
    pub get_lref: Expr,
    pub get_rref: Expr,
    pub forty_two: Expr,
    pub move_x: Expr,
}

pub static ENTITIES: Lazy<Entities> = Lazy::new(|| {
    let int = Ty::int();
    let cint = Ty::konst(Ty::int());
    Entities {
        x: Expr::id("x", int.clone()),
        cx: Expr::id("cx", cint.clone()),
        rx: Expr::id("rx", Ty::lvalue_ref(int.clone())),
        rcx: Expr::id("rcx", Ty::lvalue_ref(cint.clone())),
        rrx: Expr::id("rrx", Ty::rvalue_ref(int.clone())),
        rrcx: Expr::id("rrcx", Ty::rvalue_ref(cint.clone())),
        px: Expr::id("px", Ty::pointer(int.clone())),
        pcx: Expr::id("pcx", Ty::pointer(cint.clone())),
        cpx: Expr::id("cpx", Ty::konst(Ty::pointer(int.clone()))),
        cpcx: Expr::id("cpcx", Ty::konst(Ty::pointer(cint))),
        get_value: Expr::call("get_value()", int.clone()),
        get_lref: Expr::call("get_lref()", Ty::lvalue_ref(int.clone())),
        get_rref: Expr::call("get_rref()", Ty::rvalue_ref(int.clone())),
        forty_two: Expr::literal("42", int.clone()),
        move_x: Expr::call("std::move(x)", Ty::rvalue_ref(int)),
    }
});

impl Entities {
    /// The ten base variables, in report order.
    pub fn base_variables(&self) -> [&Expr; 10] {
        [
            &self.x, &self.cx, &self.rx, &self.rcx, &self.rrx, &self.rrcx, &self.px, &self.pcx,
            &self.cpx, &self.cpcx,
        ]
    }
}

/// One table row: the demonstrated source text, the deduced type, and the
/// extra column (Why/Note) when the table has one.
#[derive(Clone, Debug, Serialize)]
pub struct Row {
    pub expr: String,
    pub ty: Ty,
    pub note: Option<String>,
}

impl Row {
    fn new(expr: String, ty: Ty) -> Row {
        Row {
            expr,
            ty,
            note: None,
        }
    }

    fn with_note(expr: String, ty: Ty, note: &str) -> Row {
        Row {
            expr,
            ty,
            note: Some(note.to_string()),
        }
    }
}

/// Section 1: the declared type of each base variable.
pub fn base_variable_rows() -> Vec<Row> {
    ENTITIES
        .base_variables()
        .iter()
        .map(|e| Row::new(e.source.clone(), deduction::decltype_of(e)))
        .collect()
}

/// Section 2.1: `decltype` on unparenthesized id-expressions.
pub fn decltype_id_rows() -> Vec<Row> {
    let e = &*ENTITIES;
    [&e.x, &e.cx, &e.rx, &e.rcx, &e.rrx, &e.rrcx]
        .into_iter()
        .map(|v| {
            Row::new(
                format!("decltype({})", v.source),
                deduction::decltype_of(v),
            )
        })
        .collect()
}

/// Section 2.2: `decltype` on parenthesized expressions, value-category
/// rules in effect.
pub fn decltype_paren_rows() -> Vec<Row> {
    let e = &*ENTITIES;
    let cases: [(&Expr, &str); 9] = [
        (&e.x, "x is lvalue"),
        (&e.cx, "cx is lvalue"),
        (&e.rx, "rx is lvalue"),
        (&e.rrx, "rrx is lvalue!"),
        (&e.move_x, "xvalue"),
        (&e.forty_two, "prvalue"),
        (&e.get_value, "prvalue"),
        (&e.get_lref, "lvalue"),
        (&e.get_rref, "xvalue"),
    ];
    cases
        .into_iter()
        .map(|(v, why)| {
            let paren = v.parenthesized();
            Row::with_note(
                format!("decltype({})", paren.source),
                deduction::decltype_of(&paren),
                why,
            )
        })
        .collect()
}

fn decl(prefix: &str, init: &Expr) -> String {
    format!("{} = {}", prefix, init.source)
}

/// Section 3.1: plain `auto`.
pub fn auto_value_rows() -> Vec<Row> {
    let e = &*ENTITIES;
    [
        &e.x,
        &e.cx,
        &e.rx,
        &e.rcx,
        &e.rrx,
        &e.move_x,
        &e.get_value,
        &e.get_lref,
        &e.get_rref,
    ]
    .into_iter()
    .map(|v| Row::new(decl("auto v", v), deduction::auto_value(v)))
    .collect()
}

/// Section 3.2: `auto&`. Only the declarations that compile appear; the
/// rejected ones are covered by [`auto_lvalue_ref_rejections`].
pub fn auto_lvalue_ref_rows() -> Result<Vec<Row>, DeductionError> {
    let e = &*ENTITIES;
    [&e.x, &e.cx, &e.rx, &e.rcx, &e.rrx, &e.get_lref]
        .into_iter()
        .map(|v| deduction::auto_lvalue_ref(v).map(|ty| Row::new(decl("auto& v", v), ty)))
        .collect()
}

/// The `auto&` declarations the report calls out as errors.
pub fn auto_lvalue_ref_rejections() -> Vec<(String, DeductionError)> {
    let e = &*ENTITIES;
    [&e.move_x, &e.get_value, &e.get_rref]
        .into_iter()
        .filter_map(|v| {
            deduction::auto_lvalue_ref(v)
                .err()
                .map(|err| (decl("auto& v", v), err))
        })
        .collect()
}

/// Section 3.3: `const auto&`.
pub fn const_auto_ref_rows() -> Vec<Row> {
    let e = &*ENTITIES;
    [&e.x, &e.cx, &e.rx, &e.move_x, &e.get_value, &e.forty_two]
        .into_iter()
        .map(|v| Row::new(decl("const auto& v", v), deduction::const_auto_ref(v)))
        .collect()
}

/// Section 3.4: `auto&&`, the forwarding reference.
pub fn forwarding_ref_rows() -> Vec<Row> {
    let e = &*ENTITIES;
    let cases: [(&Expr, &str); 10] = [
        (&e.x, "x is lvalue"),
        (&e.cx, "cx is lvalue"),
        (&e.rx, "rx is lvalue"),
        (&e.rcx, "rcx is lvalue"),
        (&e.rrx, "rrx is lvalue!"),
        (&e.move_x, "xvalue"),
        (&e.get_value, "prvalue"),
        (&e.get_lref, "lvalue"),
        (&e.get_rref, "xvalue"),
        (&e.forty_two, "prvalue"),
    ];
    cases
        .into_iter()
        .map(|(v, why)| {
            Row::with_note(decl("auto&& v", v), deduction::auto_forwarding_ref(v), why)
        })
        .collect()
}

/// Section 4: `decltype(auto)`.
pub fn decltype_auto_rows() -> Result<Vec<Row>, DeductionError> {
    let e = &*ENTITIES;
    let x_paren = e.x.parenthesized();
    let cx_paren = e.cx.parenthesized();
    let cases: [(&Expr, &str); 5] = [
        (&e.x, "id-expression → declared type"),
        (&e.cx, "id-expression → declared type"),
        (&e.move_x, "expression returns int&&"),
        (&x_paren, "(x) is lvalue → adds &"),
        (&cx_paren, "(cx) is lvalue → adds const&"),
    ];
    cases
        .into_iter()
        .map(|(v, why)| {
            deduction::decltype_auto(v)
                .map(|ty| Row::with_note(decl("decltype(auto) v", v), ty, why))
        })
        .collect()
}

/// Section 5: the `auto*` family.
pub fn pointer_rows() -> Result<Vec<Row>, DeductionError> {
    let e = &*ENTITIES;
    let rows = vec![
        Row::with_note(decl("auto v", &e.px), deduction::auto_value(&e.px), ""),
        Row::with_note(
            decl("auto v", &e.pcx),
            deduction::auto_value(&e.pcx),
            "pointee const preserved",
        ),
        Row::with_note(
            decl("auto v", &e.cpx),
            deduction::auto_value(&e.cpx),
            "top-level const stripped",
        ),
        Row::with_note(
            decl("auto v", &e.cpcx),
            deduction::auto_value(&e.cpcx),
            "top-level const stripped",
        ),
        Row::with_note(decl("auto* v", &e.px), deduction::auto_ptr(&e.px)?, ""),
        Row::with_note(
            decl("auto* v", &e.pcx),
            deduction::auto_ptr(&e.pcx)?,
            "pointee const preserved",
        ),
        Row::with_note(
            decl("const auto* v", &e.px),
            deduction::const_auto_ptr(&e.px)?,
            "adds pointee const",
        ),
        Row::with_note(
            decl("auto* const v", &e.px),
            deduction::auto_ptr_const(&e.px)?,
            "pointer is const",
        ),
    ];
    Ok(rows)
}
