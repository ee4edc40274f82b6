use crate::{
    ast::{Expression, InfixOperator, SuffixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Parser, Precedence, precedence_of},
    },
};

impl Parser {
    /// Maps a token to its infix operator, or `None` for tokens that never
    /// appear in infix position. Calls and index expressions are handled
    /// separately.
    #[must_use]
    pub(super) const fn infix_operator(token: &Token) -> Option<InfixOperator> {
        match token {
            Token::Plus => Some(InfixOperator::Plus),
            Token::Minus => Some(InfixOperator::Minus),
            Token::Asterisk => Some(InfixOperator::Asterisk),
            Token::Slash => Some(InfixOperator::Slash),
            Token::Power => Some(InfixOperator::Power),
            Token::Modulus => Some(InfixOperator::Modulus),
            Token::Eq => Some(InfixOperator::Equal),
            Token::NotEq => Some(InfixOperator::NotEqual),
            Token::Lt => Some(InfixOperator::LessThan),
            Token::Gt => Some(InfixOperator::GreaterThan),
            Token::LtEq => Some(InfixOperator::LessEqual),
            Token::GtEq => Some(InfixOperator::GreaterEqual),
            Token::And => Some(InfixOperator::And),
            Token::Or => Some(InfixOperator::Or),
            Token::NullOr => Some(InfixOperator::NullOr),
            Token::Period => Some(InfixOperator::Period),
            Token::PlusEq => Some(InfixOperator::PlusAssign),
            Token::MinusEq => Some(InfixOperator::MinusAssign),
            Token::AsteriskEq => Some(InfixOperator::AsteriskAssign),
            Token::SlashEq => Some(InfixOperator::SlashAssign),
            _ => None,
        }
    }

    /// Maps a token to its suffix operator (`++` or `--`).
    #[must_use]
    pub(super) const fn suffix_operator(token: &Token) -> Option<SuffixOperator> {
        match token {
            Token::Increment => Some(SuffixOperator::Increment),
            Token::Decrement => Some(SuffixOperator::Decrement),
            _ => None,
        }
    }

    /// Parses `<left> <op> <right>` with the current token on the operator.
    ///
    /// In-place operators demand an identifier on the left; anything else
    /// records the dedicated error and produces nothing. All operators are
    /// left-associative: the right side parses at the operator's own
    /// precedence.
    pub(super) fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let operator = Self::infix_operator(&self.cur_token)?;

        if operator.is_compound() && !matches!(left, Expression::Identifier(_)) {
            self.record_error(ParseError::InfixRequiresIdentifier {
                operator: operator.to_string(),
                found:    literal_kind(&left),
            });
            return None;
        }

        let precedence = precedence_of(&self.cur_token);
        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix { operator,
                                 left: Box::new(left),
                                 right: Box::new(right) })
    }

    /// Parses `<callee>( <arguments> )` with the current token on `(`.
    pub(super) fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let arguments = self.parse_expression_list(&Token::RParen)?;
        Some(Expression::Call { function: Box::new(function),
                                arguments })
    }

    /// Parses `<left>[ <index> ]` with the current token on `[`.
    pub(super) fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RBracket) {
            return None;
        }
        Some(Expression::Index { left:  Box::new(left),
                                 index: Box::new(index), })
    }
}

/// Names the token kind of a literal for the in-place-operator error
/// message; non-literal expressions report `ILLEGAL`.
fn literal_kind(expression: &Expression) -> String {
    let kind = match expression {
        Expression::IntegerLiteral(_) => "INTEGER",
        Expression::DoubleLiteral { .. } => "DOUBLE",
        Expression::StringLiteral(_) => "STRING",
        Expression::BooleanLiteral(_) => "BOOLEAN",
        _ => "ILLEGAL",
    };
    kind.to_string()
}
