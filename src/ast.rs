//! # JSL - Abstract Syntax Tree
//!
//! This module defines the Abstract Syntax Tree (AST) for the JSON Selector
//! Language (JSL), a tiny dotted-path language for extracting a single value
//! from a JSON document.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes (select, index, literals, prefix)
//! - **[statements]** - Top-level expression statements
//! - **[program]** - The compiled program (ordered statement sequence)
//!
//! ## Core Concepts
//!
//! ### Statement Chaining
//!
//! A dot never nests expressions. Every `.` opens a new statement, so
//!
//! ```text
//! .data.items[2].image
//! ```
//!
//! compiles to three statements (`.data`, `.items[2]`, `.image`), each
//! evaluated against the result of the previous one.
//!
//! ### Index Binding
//!
//! Only a `[` directly after a select binds within the same statement:
//! `.images[224]` is a single [`Expression::Index`] whose left side is the
//! select, while the `.id` in `.images[224].id` starts a fresh statement.
//!
//! ### Anchoring Tokens
//!
//! Every node keeps the [`Token`] it was parsed from, so evaluation errors
//! can quote the exact source literal involved.

pub mod expressions;
pub mod program;
pub mod statements;
pub mod tokens;

pub use expressions::Expression;
pub use program::Program;
pub use statements::ExpressionStatement;
pub use tokens::{Token, TokenKind};
