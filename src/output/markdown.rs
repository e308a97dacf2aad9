//! The report emitter: a fixed sequence of Markdown sections, each table row
//! pairing a literal source expression with the label of its deduced type.

use crate::cases::{self, Row};
use crate::core::ValueCategory;
use crate::label::{self, Toolchain, CPLUSPLUS};
use anyhow::Result;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
    toolchain: Toolchain,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, toolchain: Toolchain) -> Self {
        Self { writer, toolchain }
    }

    /// Emit the whole document. Section order and row counts are fixed;
    /// only the type labels vary with the toolchain dialect.
    pub fn write_report(&mut self) -> Result<()> {
        log::debug!("rendering report for toolchain {}", self.toolchain);
        self.write_header()?;
        self.write_base_variables()?;
        self.write_decltype_section()?;
        self.write_auto_section()?;
        self.write_decltype_auto_section()?;
        self.write_pointer_section()?;
        self.write_value_category_reference()?;
        self.write_key_insights()?;
        self.write_gotchas()?;
        self.write_footer()
    }

    fn write_header(&mut self) -> Result<()> {
        writeln!(self.writer, "# C++ Types Zoo")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "A comprehensive exploration of `auto` and `decltype` type deduction."
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**Compiler:** {}", self.toolchain)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**C++ Standard:** {}", CPLUSPLUS)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_base_variables(&mut self) -> Result<()> {
        writeln!(self.writer, "## 1. Base Variable Types")?;
        writeln!(self.writer)?;
        self.write_table(&["Variable", "Declared Type"], &cases::base_variable_rows())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_decltype_section(&mut self) -> Result<()> {
        writeln!(self.writer, "## 2. decltype on Expressions")?;
        writeln!(self.writer)?;

        writeln!(self.writer, "### 2.1 decltype on Variables (id-expressions)")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "When `decltype` is applied to an **unparenthesized** id-expression, it yields the **declared type**."
        )?;
        writeln!(self.writer)?;
        self.write_table(&["Expression", "Type"], &cases::decltype_id_rows())?;
        writeln!(self.writer)?;

        writeln!(self.writer, "### 2.2 decltype on Parenthesized Expressions")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "When `decltype` is applied to a **parenthesized** expression `(expr)`, it considers the **value category**:"
        )?;
        writeln!(self.writer, "- **lvalue** → `T&`")?;
        writeln!(self.writer, "- **xvalue** → `T&&`")?;
        writeln!(self.writer, "- **prvalue** → `T`")?;
        writeln!(self.writer)?;
        self.write_table(
            &["Expression", "Type", "Why"],
            &cases::decltype_paren_rows(),
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_auto_section(&mut self) -> Result<()> {
        writeln!(self.writer, "## 3. auto Type Deduction")?;
        writeln!(self.writer)?;

        writeln!(
            self.writer,
            "### 3.1 Plain `auto` (strips references and top-level cv-qualifiers)"
        )?;
        writeln!(self.writer)?;
        self.write_table(
            &["Declaration", "Deduced Type"],
            &cases::auto_value_rows(),
        )?;
        writeln!(self.writer)?;

        writeln!(
            self.writer,
            "### 3.2 `auto&` (lvalue reference, preserves const)"
        )?;
        writeln!(self.writer)?;
        self.write_table(
            &["Declaration", "Deduced Type"],
            &cases::auto_lvalue_ref_rows()?,
        )?;
        writeln!(self.writer)?;
        let rejected: Vec<String> = cases::auto_lvalue_ref_rejections()
            .into_iter()
            .map(|(decl, _)| format!("`{}`", decl))
            .collect();
        writeln!(
            self.writer,
            "**Note:** {} would be **errors** (can't bind lvalue ref to rvalue).",
            rejected.join(", ")
        )?;
        writeln!(self.writer)?;

        writeln!(
            self.writer,
            "### 3.3 `const auto&` (extends lifetime of temporaries)"
        )?;
        writeln!(self.writer)?;
        self.write_table(
            &["Declaration", "Deduced Type"],
            &cases::const_auto_ref_rows(),
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "### 3.4 `auto&&` (forwarding/universal reference)")?;
        writeln!(self.writer)?;
        self.write_table(
            &["Declaration", "Deduced Type", "Why"],
            &cases::forwarding_ref_rows(),
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_decltype_auto_section(&mut self) -> Result<()> {
        writeln!(self.writer, "## 4. `decltype(auto)`")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Preserves the **exact type** including references and cv-qualifiers."
        )?;
        writeln!(self.writer)?;
        self.write_table(
            &["Declaration", "Deduced Type", "Why"],
            &cases::decltype_auto_rows()?,
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**Warning:** `decltype(auto) v = rrx;` would be an **error** because `rrx` has declared type `int&&`, but `rrx` itself is an lvalue and can't bind to `int&&`."
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_pointer_section(&mut self) -> Result<()> {
        writeln!(self.writer, "## 5. Pointers with `auto`")?;
        writeln!(self.writer)?;
        self.write_table(
            &["Declaration", "Deduced Type", "Note"],
            &cases::pointer_rows()?,
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_value_category_reference(&mut self) -> Result<()> {
        writeln!(self.writer, "## 6. Value Categories Reference")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "```")?;
        writeln!(self.writer, "          expression")?;
        writeln!(self.writer, "          /        \\")?;
        writeln!(self.writer, "      glvalue      rvalue")?;
        writeln!(self.writer, "      /     \\     /     \\")?;
        writeln!(self.writer, "   lvalue   xvalue   prvalue")?;
        writeln!(self.writer, "```")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Category | Has Identity | Can Move From | Examples |"
        )?;
        writeln!(
            self.writer,
            "|----------|--------------|---------------|----------|"
        )?;
        let examples = [
            (ValueCategory::Lvalue, "`x`, `*p`, `a[n]`, `++i`"),
            (ValueCategory::Xvalue, "`std::move(x)`, `a[n]` where a is rvalue"),
            (ValueCategory::Prvalue, "`42`, `x + y`, function returning by value"),
        ];
        for (category, example) in examples {
            writeln!(
                self.writer,
                "| **{}** | {} | {} | {} |",
                category,
                yes_no(category.has_identity()),
                yes_no(category.is_movable()),
                example
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_key_insights(&mut self) -> Result<()> {
        writeln!(self.writer, "## 7. Key Insights")?;
        writeln!(self.writer)?;
        let insights = [
            "**`auto` strips top-level const and references** — it always creates a new copy",
            "**`auto&` preserves const** but requires an lvalue",
            "**`auto&&` is a forwarding reference** — binds to anything, preserves value category",
            "**`decltype(var)` returns declared type** of the variable",
            "**`decltype((var))` adds reference** based on value category (lvalue → `T&`)",
            "**`decltype(auto)` uses decltype rules** on the initializer expression",
            "**Named rvalue references are lvalues!** — `rrx` in `int&& rrx = ...` is an lvalue",
            "**`const auto&` extends lifetime** of temporaries",
            "**`auto*` preserves pointee const** but `auto` strips top-level pointer const",
        ];
        for (i, insight) in insights.iter().enumerate() {
            writeln!(self.writer, "{}. {}", i + 1, insight)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_gotchas(&mut self) -> Result<()> {
        writeln!(self.writer, "## 8. Common Gotchas")?;
        writeln!(self.writer)?;

        writeln!(self.writer, "### Named rvalue references are lvalues")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "```cpp")?;
        writeln!(self.writer, "int&& rrx = std::move(x);  // rrx has type int&&")?;
        writeln!(
            self.writer,
            "auto&& v = rrx;            // but rrx is an lvalue! v is int&"
        )?;
        writeln!(self.writer, "```")?;
        writeln!(self.writer)?;

        writeln!(self.writer, "### decltype with parentheses")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "```cpp")?;
        writeln!(self.writer, "int x = 42;")?;
        writeln!(self.writer, "decltype(x)   a;  // int")?;
        writeln!(
            self.writer,
            "decltype((x)) b = x;  // int& (dangerous: returns reference to local!)"
        )?;
        writeln!(self.writer, "```")?;
        writeln!(self.writer)?;

        writeln!(self.writer, "### auto strips const from the thing being copied")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "```cpp")?;
        writeln!(self.writer, "const int cx = 42;")?;
        writeln!(self.writer, "auto v = cx;  // v is int, not const int")?;
        writeln!(self.writer, "```")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_footer(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Generated by cpp-types-zoo*")?;
        Ok(())
    }

    /// One pipe table: header row, separator row, then a row per case with
    /// the type label rendered for this writer's toolchain.
    fn write_table(&mut self, headers: &[&str], rows: &[Row]) -> Result<()> {
        write!(self.writer, "|")?;
        for header in headers {
            write!(self.writer, " {} |", header)?;
        }
        writeln!(self.writer)?;

        write!(self.writer, "|")?;
        for header in headers {
            write!(self.writer, "{}|", "-".repeat(header.len() + 2))?;
        }
        writeln!(self.writer)?;

        for row in rows {
            let ty_label = label::type_label(&row.ty, self.toolchain);
            match row.note.as_deref() {
                None => writeln!(self.writer, "| `{}` | `{}` |", row.expr, ty_label)?,
                Some("") => writeln!(self.writer, "| `{}` | `{}` | |", row.expr, ty_label)?,
                Some(note) => writeln!(
                    self.writer,
                    "| `{}` | `{}` | {} |",
                    row.expr, ty_label, note
                )?,
            }
        }
        Ok(())
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}
