// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Column-name expressions.
//!
//! Naming overrides may be templates evaluated at bootstrap. The engine
//! only depends on the [`EvaluationContext`] trait; [`TemplateContext`] is
//! the bundled implementation.
//!
//! # Template Syntax
//!
//! | Form | Meaning |
//! |------|---------|
//! | `plain text` | literal |
//! | `#{'text'}` | string literal |
//! | `#{#name}` | variable |
//! | `#{name}`, `#{@name}` | bean |
//!
//! Segments concatenate, so `user_#{#tenant}` with `tenant = "acme"`
//! evaluates to `user_acme`.

use std::collections::HashMap;

use thiserror::Error;

/// Failure to evaluate an expression.
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// `#{name}` or `#{@name}` names no bean.
    #[error("no bean named [{0}]")]
    UnknownBean(String),

    /// `#{#name}` names no variable.
    #[error("no variable named [{0}]")]
    UnknownVariable(String),

    /// `#{` without a closing `}`.
    #[error("unterminated expression starting at offset {0}")]
    Unterminated(usize),

    /// `#{}` with nothing inside.
    #[error("empty expression")]
    EmptyExpression,

    /// Failure reported by a custom context.
    #[error("evaluation failed: {0}")]
    Custom(#[source] Box<dyn std::error::Error + Send + Sync>)
}

/// Evaluates naming expressions into column name text.
pub trait EvaluationContext: Send + Sync {
    /// Evaluate `expression` to its text value.
    ///
    /// # Errors
    ///
    /// Any [`EvaluationError`] the context raises.
    fn evaluate(&self, expression: &str) -> Result<String, EvaluationError>;
}

/// Template evaluator over in-memory variables and beans.
///
/// # Example
///
/// ```rust
/// use cqlmap_core::{EvaluationContext, TemplateContext};
///
/// let context = TemplateContext::new()
///     .variable("tenant", "acme")
///     .bean("suffix", "v2");
///
/// assert_eq!(
///     context.evaluate("orders_#{#tenant}_#{suffix}").unwrap(),
///     "orders_acme_v2"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: HashMap<String, String>,
    beans:     HashMap<String, String>
}

impl TemplateContext {
    /// Empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, referenced as `#{#name}`.
    #[must_use]
    pub fn variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_variable(name, value);
        self
    }

    /// Add a bean, referenced as `#{name}` or `#{@name}`.
    #[must_use]
    pub fn bean(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.beans.insert(name.into(), value.into());
        self
    }

    /// Insert or replace a variable.
    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    fn evaluate_segment(&self, segment: &str) -> Result<String, EvaluationError> {
        let segment = segment.trim();

        if segment.is_empty() {
            return Err(EvaluationError::EmptyExpression);
        }

        if let Some(literal) = segment
            .strip_prefix('\'')
            .and_then(|rest| rest.strip_suffix('\''))
        {
            return Ok(literal.replace("''", "'"));
        }

        if let Some(name) = segment.strip_prefix('#') {
            return self
                .variables
                .get(name.trim())
                .cloned()
                .ok_or_else(|| EvaluationError::UnknownVariable(name.trim().to_string()));
        }

        let name = segment.strip_prefix('@').unwrap_or(segment).trim();
        self.beans
            .get(name)
            .cloned()
            .ok_or_else(|| EvaluationError::UnknownBean(name.to_string()))
    }
}

impl EvaluationContext for TemplateContext {
    fn evaluate(&self, expression: &str) -> Result<String, EvaluationError> {
        let mut output = String::with_capacity(expression.len());
        let mut rest = expression;
        let mut offset = 0;

        while let Some(start) = rest.find("#{") {
            output.push_str(&rest[..start]);

            let body = &rest[start + 2..];
            let end = body
                .find('}')
                .ok_or(EvaluationError::Unterminated(offset + start))?;

            output.push_str(&self.evaluate_segment(&body[..end])?);

            let consumed = start + 2 + end + 1;
            offset += consumed;
            rest = &rest[consumed..];
        }

        output.push_str(rest);
        Ok(output)
    }
}
