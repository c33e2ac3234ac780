//! The expression tree
//!
//! Nodes are immutable once built. Children sit behind [`ExprRef`]
//! (`Arc<Expression>`), so a rewrite only copies the nodes along the path
//! to the edit and shares every untouched subtree with the previous
//! version of the program.

use crate::ids::ExprId;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Shared handle to an expression node
pub type ExprRef = Arc<Expression>;

/// Operator of a [`Expression::Boolean`] node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BooleanOperator {
    And,
    Or,
    Not,
    Equals,
    LessThan,
    GreaterThan,
}

/// An operator name that is not one of the six boolean operators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown boolean operator: {0}")]
pub struct UnknownOperator(pub String);

impl BooleanOperator {
    /// Operator name as used in the data model
    pub fn as_str(&self) -> &'static str {
        match self {
            BooleanOperator::And => "and",
            BooleanOperator::Or => "or",
            BooleanOperator::Not => "not",
            BooleanOperator::Equals => "equals",
            BooleanOperator::LessThan => "lessThan",
            BooleanOperator::GreaterThan => "greaterThan",
        }
    }

    /// Surface syntax accepted by the text classifier
    pub fn symbol(&self) -> &'static str {
        match self {
            BooleanOperator::And => "and",
            BooleanOperator::Or => "or",
            BooleanOperator::Not => "not",
            BooleanOperator::Equals => "==",
            BooleanOperator::LessThan => "<",
            BooleanOperator::GreaterThan => ">",
        }
    }

    /// Whether the operator takes a single operand
    pub fn is_unary(&self) -> bool {
        matches!(self, BooleanOperator::Not)
    }
}

impl fmt::Display for BooleanOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BooleanOperator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "and" => Ok(BooleanOperator::And),
            "or" => Ok(BooleanOperator::Or),
            "not" => Ok(BooleanOperator::Not),
            "equals" => Ok(BooleanOperator::Equals),
            "lessThan" => Ok(BooleanOperator::LessThan),
            "greaterThan" => Ok(BooleanOperator::GreaterThan),
            other => Err(UnknownOperator(other.to_string())),
        }
    }
}

/// Structural position of a child inside its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildSlot {
    /// Entry of `Stack.expressions`
    StackEntry(usize),
    /// Entry of `FunctionCall.arguments`
    Argument(usize),
    WhileCondition,
    WhileBody,
    AssignmentValue,
    IfCondition,
    IfThen,
    IfElse,
    FunctionBody,
    BooleanLeft,
    BooleanRight,
}

impl ChildSlot {
    /// Whether the slot belongs to an ordered child collection
    pub fn is_list_entry(&self) -> bool {
        matches!(self, ChildSlot::StackEntry(_) | ChildSlot::Argument(_))
    }
}

/// A node of the program tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Expression {
    /// Sequential block; yields the value of its last entry
    #[serde(rename = "StackExpression")]
    Stack {
        id: ExprId,
        expressions: Vec<ExprRef>,
    },
    #[serde(rename = "FunctionCallExpression", rename_all = "camelCase")]
    FunctionCall {
        id: ExprId,
        function_name: String,
        arguments: Vec<ExprRef>,
    },
    /// Literal
    #[serde(rename = "ValueExpression")]
    Value { id: ExprId, value: Value },
    #[serde(rename = "WhileExpression")]
    While {
        id: ExprId,
        condition: ExprRef,
        body: ExprRef,
    },
    #[serde(rename = "AssignmentExpression", rename_all = "camelCase")]
    Assignment {
        id: ExprId,
        variable_name: String,
        value: ExprRef,
    },
    #[serde(rename = "VariableExpression", rename_all = "camelCase")]
    Variable { id: ExprId, variable_name: String },
    #[serde(rename = "IfExpression", rename_all = "camelCase")]
    If {
        id: ExprId,
        condition: ExprRef,
        then_branch: ExprRef,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        else_branch: Option<ExprRef>,
    },
    #[serde(rename = "FunctionDefinitionExpression", rename_all = "camelCase")]
    FunctionDefinition {
        id: ExprId,
        function_name: String,
        parameters: Vec<String>,
        body: ExprRef,
    },
    /// `not` only uses `left`. Missing operands are tolerated while editing
    /// and reported by the interpreter.
    #[serde(rename = "BooleanExpression")]
    Boolean {
        id: ExprId,
        operator: BooleanOperator,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        left: Option<ExprRef>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        right: Option<ExprRef>,
    },
}

impl Expression {
    // Constructors. Every node gets a freshly generated id.

    pub fn value(value: impl Into<Value>) -> Self {
        Expression::Value {
            id: ExprId::generate(),
            value: value.into(),
        }
    }

    pub fn number(n: f64) -> Self {
        Self::value(Value::Number(n))
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Variable {
            id: ExprId::generate(),
            variable_name: name.into(),
        }
    }

    pub fn stack(expressions: Vec<Expression>) -> Self {
        Expression::Stack {
            id: ExprId::generate(),
            expressions: expressions.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn call(function_name: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Expression::FunctionCall {
            id: ExprId::generate(),
            function_name: function_name.into(),
            arguments: arguments.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn assignment(variable_name: impl Into<String>, value: Expression) -> Self {
        Expression::Assignment {
            id: ExprId::generate(),
            variable_name: variable_name.into(),
            value: Arc::new(value),
        }
    }

    pub fn while_loop(condition: Expression, body: Expression) -> Self {
        Expression::While {
            id: ExprId::generate(),
            condition: Arc::new(condition),
            body: Arc::new(body),
        }
    }

    pub fn if_else(
        condition: Expression,
        then_branch: Expression,
        else_branch: Option<Expression>,
    ) -> Self {
        Expression::If {
            id: ExprId::generate(),
            condition: Arc::new(condition),
            then_branch: Arc::new(then_branch),
            else_branch: else_branch.map(Arc::new),
        }
    }

    pub fn function_definition(
        function_name: impl Into<String>,
        parameters: Vec<String>,
        body: Expression,
    ) -> Self {
        Expression::FunctionDefinition {
            id: ExprId::generate(),
            function_name: function_name.into(),
            parameters,
            body: Arc::new(body),
        }
    }

    pub fn boolean(
        operator: BooleanOperator,
        left: Option<Expression>,
        right: Option<Expression>,
    ) -> Self {
        Expression::Boolean {
            id: ExprId::generate(),
            operator,
            left: left.map(Arc::new),
            right: right.map(Arc::new),
        }
    }

    /// Replaces the id of this node (used for fixtures with fixed ids)
    pub fn with_id(mut self, new_id: impl Into<ExprId>) -> Self {
        *self.id_mut() = new_id.into();
        self
    }

    /// Wraps the node in a shared handle
    pub fn into_ref(self) -> ExprRef {
        Arc::new(self)
    }

    pub fn id(&self) -> &ExprId {
        match self {
            Expression::Stack { id, .. }
            | Expression::FunctionCall { id, .. }
            | Expression::Value { id, .. }
            | Expression::While { id, .. }
            | Expression::Assignment { id, .. }
            | Expression::Variable { id, .. }
            | Expression::If { id, .. }
            | Expression::FunctionDefinition { id, .. }
            | Expression::Boolean { id, .. } => id,
        }
    }

    fn id_mut(&mut self) -> &mut ExprId {
        match self {
            Expression::Stack { id, .. }
            | Expression::FunctionCall { id, .. }
            | Expression::Value { id, .. }
            | Expression::While { id, .. }
            | Expression::Assignment { id, .. }
            | Expression::Variable { id, .. }
            | Expression::If { id, .. }
            | Expression::FunctionDefinition { id, .. }
            | Expression::Boolean { id, .. } => id,
        }
    }

    /// Kind tag as used by the serialized form
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::Stack { .. } => "StackExpression",
            Expression::FunctionCall { .. } => "FunctionCallExpression",
            Expression::Value { .. } => "ValueExpression",
            Expression::While { .. } => "WhileExpression",
            Expression::Assignment { .. } => "AssignmentExpression",
            Expression::Variable { .. } => "VariableExpression",
            Expression::If { .. } => "IfExpression",
            Expression::FunctionDefinition { .. } => "FunctionDefinitionExpression",
            Expression::Boolean { .. } => "BooleanExpression",
        }
    }

    /// Whether this node owns an ordered child collection
    pub fn is_list(&self) -> bool {
        matches!(self, Expression::Stack { .. } | Expression::FunctionCall { .. })
    }

    /// The ordered child collection of a list-shaped node
    pub fn list_children(&self) -> Option<&[ExprRef]> {
        match self {
            Expression::Stack { expressions, .. } => Some(expressions),
            Expression::FunctionCall { arguments, .. } => Some(arguments),
            _ => None,
        }
    }

    /// Children in traversal order, paired with their slot
    pub fn children(&self) -> Vec<(ChildSlot, &ExprRef)> {
        match self {
            Expression::Stack { expressions, .. } => expressions
                .iter()
                .enumerate()
                .map(|(i, e)| (ChildSlot::StackEntry(i), e))
                .collect(),
            Expression::FunctionCall { arguments, .. } => arguments
                .iter()
                .enumerate()
                .map(|(i, e)| (ChildSlot::Argument(i), e))
                .collect(),
            Expression::Value { .. } | Expression::Variable { .. } => Vec::new(),
            Expression::While {
                condition, body, ..
            } => vec![
                (ChildSlot::WhileCondition, condition),
                (ChildSlot::WhileBody, body),
            ],
            Expression::Assignment { value, .. } => vec![(ChildSlot::AssignmentValue, value)],
            Expression::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                let mut children = vec![
                    (ChildSlot::IfCondition, condition),
                    (ChildSlot::IfThen, then_branch),
                ];
                if let Some(else_branch) = else_branch {
                    children.push((ChildSlot::IfElse, else_branch));
                }
                children
            }
            Expression::FunctionDefinition { body, .. } => vec![(ChildSlot::FunctionBody, body)],
            Expression::Boolean { left, right, .. } => {
                let mut children = Vec::with_capacity(2);
                if let Some(left) = left {
                    children.push((ChildSlot::BooleanLeft, left));
                }
                if let Some(right) = right {
                    children.push((ChildSlot::BooleanRight, right));
                }
                children
            }
        }
    }

    /// Returns the child occupying `slot`, if any
    pub fn child(&self, slot: ChildSlot) -> Option<&ExprRef> {
        self.children()
            .into_iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, child)| child)
    }

    /// Whether the occupant of `slot` must always be present
    ///
    /// List entries and an if's else branch are optional. The right operand
    /// of `not` is never used, so it is optional as well.
    pub fn slot_is_required(&self, slot: ChildSlot) -> bool {
        match slot {
            ChildSlot::StackEntry(_) | ChildSlot::Argument(_) | ChildSlot::IfElse => false,
            ChildSlot::BooleanRight => match self {
                Expression::Boolean { operator, .. } => !operator.is_unary(),
                _ => true,
            },
            _ => true,
        }
    }

    /// Shallow copy with the child at `slot` replaced
    ///
    /// Returns `None` if the slot does not exist on this node.
    pub fn with_child(&self, slot: ChildSlot, child: ExprRef) -> Option<Expression> {
        let mut copy = self.clone();
        match (&mut copy, slot) {
            (Expression::Stack { expressions: list, .. }, ChildSlot::StackEntry(i))
            | (Expression::FunctionCall { arguments: list, .. }, ChildSlot::Argument(i)) => {
                *list.get_mut(i)? = child;
            }
            (Expression::While { condition, .. }, ChildSlot::WhileCondition)
            | (Expression::If { condition, .. }, ChildSlot::IfCondition) => *condition = child,
            (Expression::While { body, .. }, ChildSlot::WhileBody)
            | (Expression::FunctionDefinition { body, .. }, ChildSlot::FunctionBody) => {
                *body = child
            }
            (Expression::Assignment { value, .. }, ChildSlot::AssignmentValue) => *value = child,
            (Expression::If { then_branch, .. }, ChildSlot::IfThen) => *then_branch = child,
            (Expression::If { else_branch, .. }, ChildSlot::IfElse) => *else_branch = Some(child),
            (Expression::Boolean { left, .. }, ChildSlot::BooleanLeft) => *left = Some(child),
            (Expression::Boolean { right, .. }, ChildSlot::BooleanRight) => *right = Some(child),
            _ => return None,
        }
        Some(copy)
    }

    /// Shallow copy of a list-shaped node with a new child collection
    pub fn with_list_children(&self, children: Vec<ExprRef>) -> Option<Expression> {
        match self {
            Expression::Stack { id, .. } => Some(Expression::Stack {
                id: id.clone(),
                expressions: children,
            }),
            Expression::FunctionCall {
                id, function_name, ..
            } => Some(Expression::FunctionCall {
                id: id.clone(),
                function_name: function_name.clone(),
                arguments: children,
            }),
            _ => None,
        }
    }

    /// Shallow copy with the occupant of an optional `slot` removed
    ///
    /// Returns `None` when the slot is required or empty.
    pub fn without_child(&self, slot: ChildSlot) -> Option<Expression> {
        if self.slot_is_required(slot) {
            return None;
        }
        match (self, slot) {
            (Expression::Stack { expressions: list, .. }, ChildSlot::StackEntry(i))
            | (Expression::FunctionCall { arguments: list, .. }, ChildSlot::Argument(i)) => {
                if i >= list.len() {
                    return None;
                }
                let mut children = list.clone();
                children.remove(i);
                self.with_list_children(children)
            }
            (
                Expression::If {
                    id,
                    condition,
                    then_branch,
                    else_branch: Some(_),
                },
                ChildSlot::IfElse,
            ) => Some(Expression::If {
                id: id.clone(),
                condition: Arc::clone(condition),
                then_branch: Arc::clone(then_branch),
                else_branch: None,
            }),
            (
                Expression::Boolean {
                    id,
                    operator,
                    left,
                    right: Some(_),
                },
                ChildSlot::BooleanRight,
            ) => Some(Expression::Boolean {
                id: id.clone(),
                operator: *operator,
                left: left.clone(),
                right: None,
            }),
            _ => None,
        }
    }
}
