use std::fmt;

/// Root of the AST: the ordered list of top-level statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

impl Program {
    /// Returns the literal of the token that started the program, or the
    /// empty string for an empty program.
    #[must_use]
    pub fn token_literal(&self) -> String {
        self.statements
            .first()
            .map_or_else(String::new, Statement::token_literal)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// A top-level or block-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        /// The name being bound.
        name:  String,
        /// The bound expression.
        value: Expression,
    },
    /// `return <value>;`
    Return {
        /// The returned expression.
        value: Expression,
    },
    /// A bare expression used as a statement.
    Expression {
        /// The inner expression.
        expression: Expression,
    },
    /// A line comment. The parser strips comment tokens before building
    /// statements, so this variant only appears in hand-built trees; it
    /// renders as nothing.
    Comment {
        /// The comment text without the leading slashes.
        text: String,
    },
}

impl Statement {
    /// Returns the literal of the token this statement starts with.
    #[must_use]
    pub fn token_literal(&self) -> String {
        match self {
            Self::Let { .. } => "let".to_string(),
            Self::Return { .. } => "return".to_string(),
            Self::Expression { expression } => expression.token_literal(),
            Self::Comment { text } => text.clone(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { expression } => write!(f, "{expression}"),
            Self::Comment { .. } => Ok(()),
        }
    }
}

/// A `{ ... }` sequence of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStatement {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// An expression node.
///
/// The `Display` implementation is the canonical formatter: operator
/// expressions print fully parenthesized, which makes the rendered text an
/// unambiguous record of how the parser grouped the input. Tests lean on
/// this as an equality proxy.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Reference to a binding by name.
    Identifier(String),
    /// A 64-bit signed integer literal.
    IntegerLiteral(i64),
    /// A 64-bit float literal with its display precision (the number of
    /// fractional digits written in the source).
    DoubleLiteral {
        /// The parsed value.
        value:     f64,
        /// Fractional digits in the source literal.
        precision: u32,
    },
    /// A string literal; the payload is already unescaped.
    StringLiteral(String),
    /// `true` or `false`.
    BooleanLiteral(bool),
    /// `nil`.
    NullLiteral,
    /// A stripped line comment, kept only for canonical-string tests; it
    /// renders as nothing and evaluates to nothing.
    CommentLiteral(String),
    /// `[a, b, c]`
    ArrayLiteral(Vec<Self>),
    /// `{key: value, ...}` with pairs in source order.
    HashLiteral(Vec<(Self, Self)>),
    /// `left[index]`
    Index {
        /// The indexed collection.
        left:  Box<Self>,
        /// The index expression.
        index: Box<Self>,
    },
    /// A prefix operation such as `!ok` or `-x`.
    Prefix {
        /// The operator.
        operator: PrefixOperator,
        /// The operand.
        right:    Box<Self>,
    },
    /// A suffix operation: `x++` or `x--`.
    Suffix {
        /// The operator.
        operator: SuffixOperator,
        /// The operand.
        left:     Box<Self>,
    },
    /// A binary operation such as `a + b`.
    Infix {
        /// The operator.
        operator: InfixOperator,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
    },
    /// `if (<condition>) { ... } else { ... }`
    If {
        /// The condition.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Optional block evaluated otherwise.
        alternative: Option<BlockStatement>,
    },
    /// `fn(<params>) { ... }`
    FunctionLiteral {
        /// Parameter names.
        parameters: Vec<String>,
        /// The function body.
        body:       BlockStatement,
    },
    /// `<callee>(<args>)`
    Call {
        /// The expression being called.
        function:  Box<Self>,
        /// Arguments in source order.
        arguments: Vec<Self>,
    },
}

impl Expression {
    /// Returns the literal of the token this expression starts with.
    #[must_use]
    pub fn token_literal(&self) -> String {
        match self {
            Self::Identifier(name) => name.clone(),
            Self::IntegerLiteral(value) => value.to_string(),
            Self::DoubleLiteral { value, precision } => {
                format!("{:.*}", *precision as usize, value)
            },
            Self::StringLiteral(text) => text.clone(),
            Self::BooleanLiteral(value) => value.to_string(),
            Self::NullLiteral => "nil".to_string(),
            Self::CommentLiteral(text) => text.clone(),
            Self::ArrayLiteral(_) => "[".to_string(),
            Self::HashLiteral(_) => "{".to_string(),
            Self::Index { .. } => "[".to_string(),
            Self::Prefix { operator, .. } => operator.to_string(),
            Self::Suffix { operator, .. } => operator.to_string(),
            Self::Infix { operator, .. } => operator.to_string(),
            Self::If { .. } => "if".to_string(),
            Self::FunctionLiteral { .. } => "fn".to_string(),
            Self::Call { .. } => "(".to_string(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "{name}"),
            Self::IntegerLiteral(value) => write!(f, "{value}"),
            Self::DoubleLiteral { value, precision } => {
                write!(f, "{:.*}", *precision as usize, value)
            },
            Self::StringLiteral(text) => write!(f, "{text}"),
            Self::BooleanLiteral(value) => write!(f, "{value}"),
            Self::NullLiteral => write!(f, "nil"),
            Self::CommentLiteral(_) => Ok(()),
            Self::ArrayLiteral(elements) => {
                write!(f, "[{}]", join(elements, ", "))
            },
            Self::HashLiteral(pairs) => {
                let rendered = pairs.iter()
                                    .map(|(key, value)| format!("{key}:{value}"))
                                    .collect::<Vec<_>>()
                                    .join(", ");
                write!(f, "{{{rendered}}}")
            },
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
            Self::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Self::Suffix { operator, left } => write!(f, "({left}{operator})"),
            Self::Infix { operator, left, right } => {
                write!(f, "({left} {operator} {right})")
            },
            Self::If { condition, consequence, alternative } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body } => {
                write!(f, "fn({}) {body}", parameters.join(", "))
            },
            Self::Call { function, arguments } => {
                write!(f, "{function}({})", join(arguments, ", "))
            },
        }
    }
}

fn join(expressions: &[Expression], separator: &str) -> String {
    expressions.iter()
               .map(ToString::to_string)
               .collect::<Vec<_>>()
               .join(separator)
}

/// A unary operator written before its operand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical NOT (`!x`).
    Bang,
    /// Arithmetic negation (`-x`).
    Minus,
    /// Pre-increment (`++x`).
    Increment,
    /// Pre-decrement (`--x`).
    Decrement,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Bang => "!",
            Self::Minus => "-",
            Self::Increment => "++",
            Self::Decrement => "--",
        };
        write!(f, "{operator}")
    }
}

/// A unary operator written after its operand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SuffixOperator {
    /// Post-increment (`x++`).
    Increment,
    /// Post-decrement (`x--`).
    Decrement,
}

impl fmt::Display for SuffixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Increment => "++",
            Self::Decrement => "--",
        };
        write!(f, "{operator}")
    }
}

/// A binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Plus,
    /// Subtraction (`-`)
    Minus,
    /// Multiplication (`*`)
    Asterisk,
    /// Division (`/`)
    Slash,
    /// Exponentiation (`^`)
    Power,
    /// Modulo (`%`)
    Modulus,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    LessThan,
    /// Greater than (`>`)
    GreaterThan,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
    /// Null coalescing (`??`)
    NullOr,
    /// Member access (`.`)
    Period,
    /// In-place addition (`+=`)
    PlusAssign,
    /// In-place subtraction (`-=`)
    MinusAssign,
    /// In-place multiplication (`*=`)
    AsteriskAssign,
    /// In-place division (`/=`)
    SlashAssign,
}

impl InfixOperator {
    /// Returns `true` for the in-place operators `+=`, `-=`, `*=` and `/=`,
    /// which write their result back to the left-hand binding.
    #[must_use]
    pub const fn is_compound(self) -> bool {
        matches!(self,
                 Self::PlusAssign | Self::MinusAssign | Self::AsteriskAssign | Self::SlashAssign)
    }

    /// Returns `true` for operators that widen a mixed integer/double operand
    /// pair to doubles: the arithmetic family (in-place forms included), the
    /// orderings, and equality.
    #[must_use]
    pub const fn widens(self) -> bool {
        matches!(self,
                 Self::Plus
                 | Self::PlusAssign
                 | Self::Minus
                 | Self::MinusAssign
                 | Self::Asterisk
                 | Self::AsteriskAssign
                 | Self::Slash
                 | Self::SlashAssign
                 | Self::LessThan
                 | Self::LessEqual
                 | Self::GreaterThan
                 | Self::GreaterEqual
                 | Self::Equal
                 | Self::NotEqual)
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Power => "^",
            Self::Modulus => "%",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::And => "&&",
            Self::Or => "||",
            Self::NullOr => "??",
            Self::Period => ".",
            Self::PlusAssign => "+=",
            Self::MinusAssign => "-=",
            Self::AsteriskAssign => "*=",
            Self::SlashAssign => "/=",
        };
        write!(f, "{operator}")
    }
}
