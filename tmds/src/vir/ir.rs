use std::fmt;

use itertools::Itertools;

use crate::utils::{bin_literal, indent};

const INDENT: usize = 4;

/// Module.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Module {
    /// Module name.
    pub name: String,

    /// Port declarations.
    pub port_decls: Vec<PortDeclaration>,

    /// Module items.
    pub module_items: Vec<ModuleItem>,
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`timescale 1ns / 1ps\n\nmodule {}\n(\n{}\n);\n\n{}\n\nendmodule",
            self.name,
            indent(self.port_decls.iter().join(",\n"), INDENT),
            gen_verilog_module(&self.module_items)
        )
    }
}

/// Module item.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ModuleItem {
    /// Always construct.
    AlwaysConstruct(String, Vec<Statement>),

    /// Comment. (Comment before modules, comment after modules, modules)
    Commented(String, Option<String>, Vec<ModuleItem>),
}

impl fmt::Display for ModuleItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleItem::AlwaysConstruct(event, stmts) => {
                write!(f, "{} begin\n{}\nend", event, indent(stmts.iter().join("\n"), INDENT))
            }
            ModuleItem::Commented(comment_before, comment_after, items) => {
                write!(
                    f,
                    "/*\n{}\n*/\n{}{}",
                    indent(comment_before.clone(), INDENT),
                    items.iter().join("\n\n"),
                    comment_after.as_ref().map_or("".to_string(), |c| format!("\n/* {} */", c))
                )
            }
        }
    }
}

/// Generates Verilog code for module items.
pub fn gen_verilog_module(module: &[ModuleItem]) -> String { module.iter().join("\n\n") }

/// Port declaration.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum PortDeclaration {
    /// Input declaration.
    Input(usize, String),

    /// Output declaration driven from an always construct.
    OutputReg(usize, String),
}

impl fmt::Display for PortDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, width, ident) = match self {
            Self::Input(width, ident) => ("input wire", width, ident),
            Self::OutputReg(width, ident) => ("output reg", width, ident),
        };
        if *width > 1 {
            write!(f, "{} [{}-1:0] {}", kind, width, ident)
        } else {
            write!(f, "{} {}", kind, ident)
        }
    }
}

impl PortDeclaration {
    /// Creates new input port declaration.
    pub fn input(width: usize, ident: &str) -> Self { Self::Input(width, ident.to_string()) }

    /// Creates new output reg port declaration.
    pub fn output_reg(width: usize, ident: &str) -> Self { Self::OutputReg(width, ident.to_string()) }
}

/// Statement.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Statement {
    /// Blocking assignment.
    BlockingAssignment(Expression, Expression),

    /// Case statement.
    Case(Expression, Vec<(Expression, Vec<Statement>)>, Vec<Statement>),
}

impl Statement {
    /// Blocking assignment.
    #[inline]
    pub fn blocking_assignment(lvalue: Expression, expr: Expression) -> Self {
        assert!(lvalue.is_identifier(), "lvalue should be identifier");
        Statement::BlockingAssignment(lvalue, expr)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlockingAssignment(lvalue, expr) => write!(f, "{} = {};", lvalue, expr),
            Self::Case(case_expr, case_items, default) => {
                let mut case_items_code = case_items
                    .iter()
                    .map(|(cond, stmt)| format!("{}: begin\n{}\nend", cond, indent(stmt.iter().join("\n"), INDENT)))
                    .collect::<Vec<_>>();
                if !default.is_empty() {
                    case_items_code.push(format!("default: begin\n{}\nend", indent(default.iter().join("\n"), INDENT)));
                }

                write!(f, "case ({})\n{}\nendcase", case_expr, indent(case_items_code.join("\n"), INDENT))
            }
        }
    }
}

/// Expression.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Expression {
    /// Number.
    Number(String),

    /// Identifier.
    Identifier(String),

    /// Concatenation.
    Concatenation(Vec<Expression>),
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(num) => write!(f, "{}", num),
            Self::Identifier(ident) => write!(f, "{}", ident),
            Self::Concatenation(exprs) => {
                assert!(!exprs.is_empty());
                write!(f, "{{{}}}", exprs.iter().join(", "))
            }
        }
    }
}

impl From<&str> for Expression {
    fn from(ident: &str) -> Self { Expression::ident(ident) }
}

impl Expression {
    /// Sized binary number.
    pub fn number(width: u32, value: u32) -> Self { Self::Number(bin_literal(width, value)) }

    /// Identifier.
    pub fn ident(ident: &str) -> Self { Self::Identifier(ident.to_string()) }

    /// Concatenation.
    pub fn concat(self, rhs: Expression) -> Self {
        match self {
            Self::Concatenation(mut exprs) => {
                exprs.push(rhs);
                Self::Concatenation(exprs)
            }
            lhs => Self::Concatenation(vec![lhs, rhs]),
        }
    }

    /// Returns `true` if the expression is identifier.
    pub fn is_identifier(&self) -> bool { matches!(self, Self::Identifier(_)) }
}
