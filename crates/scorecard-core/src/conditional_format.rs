//! Conditional formatting
//!
//! Declarative rules causing matching cells to render with an alternate
//! format. The scorecard only uses comparison (`cellIs`) and expression
//! rules, all pointing at the single shared differential format.

use crate::range::CellRange;

/// Comparison operator for `cellIs` rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CfOperator {
    /// Cell value is less than the comparand
    LessThan,
    /// Cell value is greater than the comparand
    GreaterThan,
}

impl CfOperator {
    /// XLSX attribute value for this operator
    pub fn xlsx_operator(&self) -> &'static str {
        match self {
            CfOperator::LessThan => "lessThan",
            CfOperator::GreaterThan => "greaterThan",
        }
    }
}

/// Rule condition
#[derive(Debug, Clone, PartialEq)]
pub enum CfRule {
    /// Compare each cell against a formula/constant
    CellIs {
        /// Comparison operator
        operator: CfOperator,
        /// Comparand formula or constant
        formula: String,
    },
    /// Apply where the expression evaluates TRUE
    Expression {
        /// Boolean expression, relative to the range's top-left cell
        formula: String,
    },
}

/// A conditional formatting rule applied to one or more ranges
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalFormat {
    /// Ranges the rule applies to (space-joined into `sqref`)
    pub ranges: Vec<CellRange>,
    /// The rule condition
    pub rule: CfRule,
    /// Priority (lower = higher priority); must be >= 1
    pub priority: u32,
    /// Index into the shared `dxfs` table
    pub dxf_id: u32,
}

impl ConditionalFormat {
    /// Create a rule highlighting cells less than a value
    pub fn cell_is_less_than<S: Into<String>>(value: S) -> Self {
        Self::new(CfRule::CellIs {
            operator: CfOperator::LessThan,
            formula: value.into(),
        })
    }

    /// Create a rule highlighting cells greater than a value
    pub fn cell_is_greater_than<S: Into<String>>(value: S) -> Self {
        Self::new(CfRule::CellIs {
            operator: CfOperator::GreaterThan,
            formula: value.into(),
        })
    }

    /// Create a rule highlighting cells where the expression is TRUE
    pub fn expression<S: Into<String>>(formula: S) -> Self {
        Self::new(CfRule::Expression {
            formula: formula.into(),
        })
    }

    fn new(rule: CfRule) -> Self {
        Self {
            ranges: Vec::new(),
            rule,
            priority: 1,
            dxf_id: 0,
        }
    }

    /// Add a range this rule applies to
    pub fn with_range(mut self, range: CellRange) -> Self {
        self.ranges.push(range);
        self
    }

    /// Set the rule priority
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Space-joined range list for the `sqref` attribute
    pub fn sqref(&self) -> String {
        self.ranges
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
