//! Fluent assertion API for AST nodes

use crate::minilang::ast::{
    AstNode, Block, Expression, Function, Operator, Program, Statement, Type, Variable,
};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a program
pub fn assert_ast(program: &Program) -> ProgramAssertion<'_> {
    ProgramAssertion { program }
}

fn summarize<T: AstNode>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| format!("{}({})", item.node_type(), item.display_label()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn nth<'a, T: AstNode>(items: &'a [T], index: usize, what: &str, context: &str) -> &'a T {
    assert!(
        index < items.len(),
        "{}: {} index {} out of bounds ({} present: [{}])",
        context,
        what,
        index,
        items.len(),
        summarize(items)
    );
    &items[index]
}

// ============================================================================
// Program Assertions
// ============================================================================

pub struct ProgramAssertion<'a> {
    program: &'a Program,
}

impl<'a> ProgramAssertion<'a> {
    pub fn variable_count(self, expected: usize) -> Self {
        let actual = self.program.variables.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} globals, found {}: [{}]",
            expected,
            actual,
            summarize(&self.program.variables)
        );
        self
    }

    pub fn function_count(self, expected: usize) -> Self {
        let actual = self.program.functions.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} functions, found {}: [{}]",
            expected,
            actual,
            summarize(&self.program.functions)
        );
        self
    }

    pub fn variable<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(VariableAssertion<'a>),
    {
        let context = format!("variables[{}]", index);
        let variable = nth(&self.program.variables, index, "Variable", "program");
        assertion(VariableAssertion { variable, context });
        self
    }

    pub fn function<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(FunctionAssertion<'a>),
    {
        let context = format!("functions[{}]", index);
        let function = nth(&self.program.functions, index, "Function", "program");
        assertion(FunctionAssertion { function, context });
        self
    }

    /// Assert on the first function with the given name
    pub fn function_named<F>(self, name: &str, assertion: F) -> Self
    where
        F: FnOnce(FunctionAssertion<'a>),
    {
        let function = self.program.function(name).unwrap_or_else(|| {
            panic!(
                "No function named '{}' in [{}]",
                name,
                summarize(&self.program.functions)
            )
        });
        assertion(FunctionAssertion {
            function,
            context: format!("function '{}'", name),
        });
        self
    }
}

// ============================================================================
// Variable Assertions
// ============================================================================

pub struct VariableAssertion<'a> {
    variable: &'a Variable,
    context: String,
}

impl<'a> VariableAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.variable.name, expected,
            "{}: Expected name '{}', found '{}'",
            self.context, expected, self.variable.name
        );
        self
    }

    pub fn ty(self, expected: Type) -> Self {
        assert_eq!(
            self.variable.ty, expected,
            "{}: Expected type {}, found {}",
            self.context, expected, self.variable.ty
        );
        self
    }

    pub fn no_initializer(self) -> Self {
        assert!(
            self.variable.initializer.is_none(),
            "{}: Expected no initializer, found {}",
            self.context,
            self.variable
        );
        self
    }

    pub fn initializer<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ExpressionAssertion<'a>),
    {
        let expr = self.variable.initializer.as_ref().unwrap_or_else(|| {
            panic!("{}: Expected an initializer on {}", self.context, self.variable)
        });
        assertion(ExpressionAssertion {
            expr,
            context: format!("{}.initializer", self.context),
        });
        self
    }
}

// ============================================================================
// Function Assertions
// ============================================================================

pub struct FunctionAssertion<'a> {
    function: &'a Function,
    context: String,
}

impl<'a> FunctionAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.function.name, expected,
            "{}: Expected name '{}', found '{}'",
            self.context, expected, self.function.name
        );
        self
    }

    pub fn return_type(self, expected: Type) -> Self {
        assert_eq!(
            self.function.return_type, expected,
            "{}: Expected return type {}, found {}",
            self.context, expected, self.function.return_type
        );
        self
    }

    pub fn param_count(self, expected: usize) -> Self {
        let actual = self.function.params.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} params, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(&self.function.params)
        );
        self
    }

    pub fn param<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(VariableAssertion<'a>),
    {
        let variable = nth(&self.function.params, index, "Param", &self.context);
        assertion(VariableAssertion {
            variable,
            context: format!("{}.params[{}]", self.context, index),
        });
        self
    }

    pub fn body<F>(self, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assertion(BlockAssertion {
            block: &self.function.body,
            context: format!("{}.body", self.context),
        });
        self
    }
}

// ============================================================================
// Block Assertions
// ============================================================================

pub struct BlockAssertion<'a> {
    block: &'a Block,
    context: String,
}

impl<'a> BlockAssertion<'a> {
    pub fn is_empty(self) -> Self {
        assert!(
            self.block.is_empty(),
            "{}: Expected empty block, found {}",
            self.context,
            self.block
        );
        self
    }

    pub fn local_count(self, expected: usize) -> Self {
        let actual = self.block.locals.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} locals, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(&self.block.locals)
        );
        self
    }

    pub fn statement_count(self, expected: usize) -> Self {
        let actual = self.block.statements.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} statements, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(&self.block.statements)
        );
        self
    }

    pub fn local<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(VariableAssertion<'a>),
    {
        let variable = nth(&self.block.locals, index, "Local", &self.context);
        assertion(VariableAssertion {
            variable,
            context: format!("{}.locals[{}]", self.context, index),
        });
        self
    }

    pub fn statement<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(StatementAssertion<'a>),
    {
        let stmt = nth(&self.block.statements, index, "Statement", &self.context);
        assertion(StatementAssertion {
            stmt,
            context: format!("{}.statements[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Statement Assertions
// ============================================================================

pub struct StatementAssertion<'a> {
    stmt: &'a Statement,
    context: String,
}

impl<'a> StatementAssertion<'a> {
    fn mismatch(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}({})",
            self.context,
            expected,
            self.stmt.node_type(),
            self.stmt.display_label()
        )
    }

    pub fn assert_assignment(self) -> AssignmentAssertion<'a> {
        match self.stmt {
            Statement::Assignment { target, value } => AssignmentAssertion {
                target: &target.name,
                value,
                context: self.context,
            },
            _ => self.mismatch("Assignment"),
        }
    }

    pub fn assert_if_else(self) -> ConditionalAssertion<'a> {
        match self.stmt {
            Statement::IfElse {
                cond,
                then_block,
                else_block,
            } => ConditionalAssertion {
                cond,
                body: then_block,
                else_block: Some(else_block),
                kind: "IfElse",
                context: self.context,
            },
            _ => self.mismatch("IfElse"),
        }
    }

    pub fn assert_while(self) -> ConditionalAssertion<'a> {
        match self.stmt {
            Statement::While { cond, body } => ConditionalAssertion {
                cond,
                body,
                else_block: None,
                kind: "While",
                context: self.context,
            },
            _ => self.mismatch("While"),
        }
    }

    /// Assert a valued return and check its expression
    pub fn assert_return<F>(self, assertion: F)
    where
        F: FnOnce(ExpressionAssertion<'a>),
    {
        match self.stmt {
            Statement::Return { value } => assertion(ExpressionAssertion {
                expr: value,
                context: format!("{}.value", self.context),
            }),
            _ => self.mismatch("Return"),
        }
    }

    pub fn assert_return_void(self) {
        if *self.stmt != Statement::ReturnVoid {
            self.mismatch("ReturnVoid")
        }
    }

    pub fn assert_break(self) {
        if *self.stmt != Statement::Break {
            self.mismatch("Break")
        }
    }

    pub fn assert_continue(self) {
        if *self.stmt != Statement::Continue {
            self.mismatch("Continue")
        }
    }
}

pub struct AssignmentAssertion<'a> {
    target: &'a str,
    value: &'a Expression,
    context: String,
}

impl<'a> AssignmentAssertion<'a> {
    pub fn target(self, expected: &str) -> Self {
        assert_eq!(
            self.target, expected,
            "{}: Expected target '{}', found '{}'",
            self.context, expected, self.target
        );
        self
    }

    pub fn value<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ExpressionAssertion<'a>),
    {
        assertion(ExpressionAssertion {
            expr: self.value,
            context: format!("{}.value", self.context),
        });
        self
    }
}

/// Shared by `IfElse` and `While`; only `IfElse` has an else block
pub struct ConditionalAssertion<'a> {
    cond: &'a Expression,
    body: &'a Block,
    else_block: Option<&'a Block>,
    kind: &'static str,
    context: String,
}

impl<'a> ConditionalAssertion<'a> {
    pub fn cond<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ExpressionAssertion<'a>),
    {
        assertion(ExpressionAssertion {
            expr: self.cond,
            context: format!("{}.cond", self.context),
        });
        self
    }

    /// The then block of an `if`, or the body of a `while`
    pub fn body<F>(self, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assertion(BlockAssertion {
            block: self.body,
            context: format!("{}.body", self.context),
        });
        self
    }

    pub fn else_block<F>(self, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        let block = self
            .else_block
            .unwrap_or_else(|| panic!("{}: {} has no else block", self.context, self.kind));
        assertion(BlockAssertion {
            block,
            context: format!("{}.else", self.context),
        });
        self
    }
}

// ============================================================================
// Expression Assertions
// ============================================================================

pub struct ExpressionAssertion<'a> {
    expr: &'a Expression,
    context: String,
}

impl<'a> ExpressionAssertion<'a> {
    fn mismatch(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {} `{}`",
            self.context,
            expected,
            self.expr.node_type(),
            self.expr
        )
    }

    /// Compare against the rendered form, e.g. `"(a + 1) * b"`
    pub fn text(self, expected: &str) -> Self {
        let actual = self.expr.to_string();
        assert_eq!(
            actual, expected,
            "{}: Expected `{}`, found `{}`",
            self.context, expected, actual
        );
        self
    }

    pub fn int(self, expected: i32) {
        if *self.expr != Expression::int(expected) {
            self.mismatch(&format!("IntConstant {}", expected))
        }
    }

    pub fn bool(self, expected: bool) {
        if *self.expr != Expression::bool(expected) {
            self.mismatch(&format!("BoolConstant {}", expected))
        }
    }

    pub fn location(self, expected: &str) {
        if *self.expr != Expression::location(expected) {
            self.mismatch(&format!("Location {}", expected))
        }
    }

    pub fn assert_binary(self, expected: Operator) -> BinaryAssertion<'a> {
        match self.expr {
            Expression::Binary { left, op, right } if *op == expected => BinaryAssertion {
                left,
                right,
                context: self.context,
            },
            _ => self.mismatch(&format!("Binary {}", expected)),
        }
    }

    pub fn assert_call(self, expected_name: &str) -> CallAssertion<'a> {
        match self.expr {
            Expression::FunctionCall { name, args } if name == expected_name => CallAssertion {
                args,
                context: self.context,
            },
            _ => self.mismatch(&format!("call to {}", expected_name)),
        }
    }
}

pub struct BinaryAssertion<'a> {
    left: &'a Expression,
    right: &'a Expression,
    context: String,
}

impl<'a> BinaryAssertion<'a> {
    pub fn left<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ExpressionAssertion<'a>),
    {
        assertion(ExpressionAssertion {
            expr: self.left,
            context: format!("{}.left", self.context),
        });
        self
    }

    pub fn right<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ExpressionAssertion<'a>),
    {
        assertion(ExpressionAssertion {
            expr: self.right,
            context: format!("{}.right", self.context),
        });
        self
    }
}

pub struct CallAssertion<'a> {
    args: &'a [Expression],
    context: String,
}

impl<'a> CallAssertion<'a> {
    pub fn arg_count(self, expected: usize) -> Self {
        assert_eq!(
            self.args.len(),
            expected,
            "{}: Expected {} arguments, found [{}]",
            self.context,
            expected,
            summarize(self.args)
        );
        self
    }

    pub fn arg<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ExpressionAssertion<'a>),
    {
        let expr = nth(self.args, index, "Argument", &self.context);
        assertion(ExpressionAssertion {
            expr,
            context: format!("{}.args[{}]", self.context, index),
        });
        self
    }
}
