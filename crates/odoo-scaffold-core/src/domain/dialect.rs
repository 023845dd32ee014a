//! Conditional-visibility dialects.
//!
//! Odoo 17 replaced the `attrs="{'invisible': [domain]}"` attribute map with
//! inline Python expressions (`invisible="state != 'draft'"`). A bundle must
//! use exactly one of the two, so the dialect is chosen once in
//! [`DerivedNames`](crate::domain::DerivedNames) and every renderer receives
//! it from there.

use std::fmt;

use serde::Serialize;

use crate::domain::identifier::PlatformVersion;

/// Comparison operator of a [`Predicate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    Eq,
    Ne,
    In,
    NotIn,
}

impl Operator {
    /// Operator token, identical in both dialects.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::In => "in",
            Self::NotIn => "not in",
        }
    }

    /// Expression dialect spells equality the Python way.
    const fn as_python(self) -> &'static str {
        match self {
            Self::Eq => "==",
            other => other.as_str(),
        }
    }

    const fn is_set(self) -> bool {
        matches!(self, Self::In | Self::NotIn)
    }
}

/// A `(field, operator, values)` condition on a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Predicate {
    pub field: &'static str,
    pub operator: Operator,
    pub values: Vec<&'static str>,
}

impl Predicate {
    pub fn new(field: &'static str, operator: Operator, values: Vec<&'static str>) -> Self {
        Self {
            field,
            operator,
            values,
        }
    }

    /// Evaluate against a field value.
    pub fn holds(&self, value: &str) -> bool {
        let member = self.values.contains(&value);
        match self.operator {
            Operator::Eq | Operator::In => member,
            Operator::Ne | Operator::NotIn => !member,
        }
    }

    fn python_values(&self) -> String {
        if self.operator.is_set() {
            let quoted: Vec<String> = self.values.iter().map(|v| format!("'{v}'")).collect();
            // One-element tuples need the trailing comma in Python.
            if quoted.len() == 1 {
                format!("({},)", quoted[0])
            } else {
                format!("({})", quoted.join(", "))
            }
        } else {
            self.values
                .first()
                .map(|v| format!("'{v}'"))
                .unwrap_or_else(|| "False".to_string())
        }
    }
}

/// Markup style for "hide this element when ..." conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityDialect {
    /// `invisible="<python expression>"` (Odoo 17 and later).
    Expression,
    /// `attrs="{'invisible': [<domain>]}"` (Odoo 16 and earlier).
    AttrsLegacy,
}

impl VisibilityDialect {
    pub fn for_version(version: PlatformVersion) -> Self {
        if version >= PlatformVersion::EXPRESSION_SINCE {
            Self::Expression
        } else {
            Self::AttrsLegacy
        }
    }

    /// Render the XML attribute that hides an element while `hide_when` holds.
    pub fn render(self, hide_when: &Predicate) -> String {
        let field = hide_when.field;
        let values = hide_when.python_values();
        match self {
            Self::Expression => format!(
                "invisible=\"{field} {} {values}\"",
                hide_when.operator.as_python()
            ),
            Self::AttrsLegacy => format!(
                "attrs=\"{{'invisible': [('{field}', '{}', {values})]}}\"",
                hide_when.operator.as_str()
            ),
        }
    }

    /// Short name used in reports.
    pub const fn style(self) -> &'static str {
        match self {
            Self::Expression => "expressions",
            Self::AttrsLegacy => "attrs",
        }
    }
}

impl fmt::Display for VisibilityDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.style())
    }
}
