use crate::{
    ast::{Expression, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Parser, Precedence},
    },
    util::num::fractional_digits,
};

impl Parser {
    /// Dispatches the current token to its prefix parser.
    ///
    /// A token without a prefix parser records the standard
    /// `no prefix parse function` error and yields `None`.
    pub(super) fn parse_prefix(&mut self) -> Option<Expression> {
        match &self.cur_token {
            Token::Identifier(name) => {
                let name = name.clone();
                Some(self.parse_identifier(name))
            },
            Token::Int(literal) => {
                let literal = literal.clone();
                self.parse_integer_literal(&literal)
            },
            Token::Double(literal) => {
                let literal = literal.clone();
                self.parse_double_literal(&literal)
            },
            Token::Str(text) => Some(Expression::StringLiteral(text.clone())),
            Token::Comment(text) => Some(Expression::CommentLiteral(text.clone())),
            Token::True => Some(Expression::BooleanLiteral(true)),
            Token::False => Some(Expression::BooleanLiteral(false)),
            Token::Null => Some(Expression::NullLiteral),
            Token::Bang => self.parse_prefix_operator(PrefixOperator::Bang),
            Token::Minus => self.parse_prefix_operator(PrefixOperator::Minus),
            Token::Increment => self.parse_prefix_operator(PrefixOperator::Increment),
            Token::Decrement => self.parse_prefix_operator(PrefixOperator::Decrement),
            Token::LParen => self.parse_grouped_expression(),
            Token::LBracket => self.parse_array_literal(),
            Token::LBrace => self.parse_hash_literal(),
            Token::If => self.parse_if_expression(),
            Token::Function => self.parse_function_literal(),
            other => {
                let kind = other.to_string();
                self.record_error(ParseError::NoPrefixParseFn { kind });
                None
            },
        }
    }

    /// Parses an identifier, folding a directly following `++` or `--` into
    /// a suffix expression.
    fn parse_identifier(&mut self, name: String) -> Expression {
        let identifier = Expression::Identifier(name);

        match Self::suffix_operator(&self.peek_token) {
            Some(operator) => {
                self.next_token();
                Expression::Suffix { operator,
                                     left: Box::new(identifier) }
            },
            None => identifier,
        }
    }

    /// Parses a base-10 integer literal as a signed 64-bit value.
    fn parse_integer_literal(&mut self, literal: &str) -> Option<Expression> {
        match literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral(value)),
            Err(_) => {
                self.record_error(ParseError::InvalidIntegerLiteral { literal:
                                                                          literal.to_string(), });
                None
            },
        }
    }

    /// Parses a double literal, keeping the fractional digit count of the
    /// source text as the value's display precision.
    fn parse_double_literal(&mut self, literal: &str) -> Option<Expression> {
        match literal.parse::<f64>() {
            Ok(value) => Some(Expression::DoubleLiteral { value,
                                                          precision: fractional_digits(literal), }),
            Err(_) => {
                self.record_error(ParseError::InvalidDoubleLiteral { literal:
                                                                         literal.to_string(), });
                None
            },
        }
    }

    /// Parses `<op> <operand>` where the operand binds at prefix strength.
    fn parse_prefix_operator(&mut self, operator: PrefixOperator) -> Option<Expression> {
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expression::Prefix { operator,
                                  right: Box::new(right) })
    }

    /// Parses `( <expression> )`.
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RParen) {
            return None;
        }
        Some(expression)
    }

    /// Parses `[ <expression-list> ]`.
    fn parse_array_literal(&mut self) -> Option<Expression> {
        let elements = self.parse_expression_list(&Token::RBracket)?;
        Some(Expression::ArrayLiteral(elements))
    }

    /// Parses `{ <key> : <value> (, <key> : <value>)* }`.
    ///
    /// Keys are full expressions; pairs keep their source order.
    fn parse_hash_literal(&mut self) -> Option<Expression> {
        let mut pairs = Vec::new();

        while !self.peek_token_is(&Token::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(&Token::Colon) {
                return None;
            }
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_token_is(&Token::RBrace) && !self.expect_peek(&Token::Comma) {
                return None;
            }
        }

        if !self.expect_peek(&Token::RBrace) {
            return None;
        }
        Some(Expression::HashLiteral(pairs))
    }

    /// Parses `if ( <condition> ) <block> (else <block>)?`.
    fn parse_if_expression(&mut self) -> Option<Expression> {
        if !self.expect_peek(&Token::LParen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RParen) {
            return None;
        }
        if !self.expect_peek(&Token::LBrace) {
            return None;
        }
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_token_is(&Token::Else) {
            self.next_token();
            if !self.expect_peek(&Token::LBrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If { condition: Box::new(condition),
                              consequence,
                              alternative })
    }

    /// Parses `fn ( <parameters> ) <block>`.
    fn parse_function_literal(&mut self) -> Option<Expression> {
        if !self.expect_peek(&Token::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(&Token::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Expression::FunctionLiteral { parameters, body })
    }

    /// Parses a comma-separated list of parameter names. Parameters are
    /// plain identifiers only.
    fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_token_is(&Token::RParen) {
            self.next_token();
            return Some(parameters);
        }

        parameters.push(self.expect_peek_identifier()?);
        while self.peek_token_is(&Token::Comma) {
            self.next_token();
            parameters.push(self.expect_peek_identifier()?);
        }

        if !self.expect_peek(&Token::RParen) {
            return None;
        }
        Some(parameters)
    }

    /// Parses a comma-separated expression list terminated by `end`.
    ///
    /// Shared by array literals and call arguments. A trailing comma is not
    /// permitted: after a comma another expression must follow.
    pub(super) fn parse_expression_list(&mut self, end: &Token) -> Option<Vec<Expression>> {
        let mut list = Vec::new();

        if self.peek_token_is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token_is(&Token::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }
        Some(list)
    }
}
