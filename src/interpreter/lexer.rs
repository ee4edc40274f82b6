use logos::Logos;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the Monkey language. Variants
/// that depend on the source text (identifiers, numbers, strings, comments)
/// carry their literal; string literals carry their unescaped contents.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    /// Identifier tokens; variable or function names such as `x` or `add`.
    #[regex(r"[A-Za-z_]+", |lex| lex.slice().to_owned())]
    Identifier(String),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", |lex| lex.slice().to_owned())]
    Int(String),
    /// Double literal tokens, such as `13434.56`.
    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice().to_owned())]
    Double(String),
    /// String literal tokens; the payload is the unescaped contents.
    ///
    /// A string is opened by `"` and terminated by an unescaped `"` or by the
    /// end of input. The escapes `\"`, `\n`, `\t` and `\r` are resolved here.
    #[regex(r#""([^"\\]|\\.)*""#, unescape_string)]
    #[regex(r#""([^"\\]|\\.)*"#, unescape_string)]
    Str(String),
    /// `// Comments.` The literal is kept verbatim, leading slashes included.
    #[regex(r"//[^\n]*", |lex| lex.slice().to_owned())]
    Comment(String),
    /// Text the lexer cannot classify, such as `5.` with no fraction digits.
    /// The parser rejects these; lexing itself never fails.
    #[regex(r"[0-9]+\.", |lex| lex.slice().to_owned())]
    Illegal(String),
    /// End of input. Produced indefinitely once the source is exhausted.
    /// An embedded NUL byte also reads as end of input.
    #[token("\0")]
    Eof,

    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Power,
    /// `%`
    #[token("%")]
    Modulus,
    /// `!`
    #[token("!")]
    Bang,
    /// `++`
    #[token("++")]
    Increment,
    /// `--`
    #[token("--")]
    Decrement,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `<=`
    #[token("<=")]
    LtEq,
    /// `>=`
    #[token(">=")]
    GtEq,
    /// `+=`
    #[token("+=")]
    PlusEq,
    /// `-=`
    #[token("-=")]
    MinusEq,
    /// `/=`
    #[token("/=")]
    SlashEq,
    /// `*=`
    #[token("*=")]
    AsteriskEq,
    /// `&&`
    #[token("&&")]
    And,
    /// `||`
    #[token("||")]
    Or,
    /// `??`
    #[token("??")]
    NullOr,
    /// `.`
    #[token(".")]
    Period,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `nil`
    #[token("nil")]
    Null,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
}

impl Token {
    /// Returns the source text this token stands for.
    ///
    /// Fixed tokens return their operator or keyword spelling; tokens with a
    /// payload return it. `Eof` returns the empty string, and string literals
    /// return their unescaped contents.
    #[must_use]
    pub fn literal(&self) -> &str {
        match self {
            Self::Identifier(literal)
            | Self::Int(literal)
            | Self::Double(literal)
            | Self::Str(literal)
            | Self::Comment(literal)
            | Self::Illegal(literal) => literal,
            Self::Eof => "",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Power => "^",
            Self::Modulus => "%",
            Self::Bang => "!",
            Self::Increment => "++",
            Self::Decrement => "--",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::PlusEq => "+=",
            Self::MinusEq => "-=",
            Self::SlashEq => "/=",
            Self::AsteriskEq => "*=",
            Self::And => "&&",
            Self::Or => "||",
            Self::NullOr => "??",
            Self::Period => ".",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Function => "fn",
            Self::Let => "let",
            Self::True => "true",
            Self::False => "false",
            Self::Null => "nil",
            Self::If => "if",
            Self::Else => "else",
            Self::Return => "return",
        }
    }
}

impl std::fmt::Display for Token {
    /// Renders the stable kind tag of the token.
    ///
    /// These tags appear in parser error messages and must stay stable:
    /// operators and punctuation print as themselves, classes print as
    /// `IDENTIFIER`, `INTEGER`, `DOUBLE`, `STRING`, `//`, `ILLEGAL`, `EOF`,
    /// and keywords print uppercased.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Self::Identifier(_) => "IDENTIFIER",
            Self::Int(_) => "INTEGER",
            Self::Double(_) => "DOUBLE",
            Self::Str(_) => "STRING",
            Self::Comment(_) => "//",
            Self::Illegal(_) => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Null => "NULL",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            other => other.literal(),
        };
        write!(f, "{tag}")
    }
}

/// Turns source text into a stream of tokens.
///
/// `new` normalizes line endings and tokenizes the whole input up front;
/// `next_token` then hands tokens out one at a time, yielding [`Token::Eof`]
/// indefinitely once the input is exhausted. Unlexable text comes back as
/// [`Token::Illegal`] rather than an error, so lexing itself never fails —
/// the parser is the one that rejects illegal tokens.
///
/// # Example
/// ```
/// use monkey::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("let x = 5;");
///
/// assert_eq!(lexer.next_token(), Token::Let);
/// assert_eq!(lexer.next_token(), Token::Identifier("x".to_string()));
/// assert_eq!(lexer.next_token(), Token::Assign);
/// assert_eq!(lexer.next_token(), Token::Int("5".to_string()));
/// assert_eq!(lexer.next_token(), Token::Semicolon);
/// assert_eq!(lexer.next_token(), Token::Eof);
/// assert_eq!(lexer.next_token(), Token::Eof);
/// ```
pub struct Lexer {
    tokens: std::vec::IntoIter<Token>,
}

impl Lexer {
    /// Creates a lexer over `source`.
    ///
    /// CRLF (windows) and CR (classic mac) line endings are normalized to LF
    /// first, so comment and string literals never carry a carriage return.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let normalized = normalize_newlines(source);

        let mut tokens = Vec::new();
        let mut lexer = Token::lexer(&normalized);

        while let Some(token) = lexer.next() {
            tokens.push(match token {
                Ok(token) => token,
                Err(()) => Token::Illegal(lexer.slice().to_owned()),
            });
        }

        Self { tokens: tokens.into_iter(), }
    }

    /// Returns the next token, or [`Token::Eof`] forever at end of input.
    pub fn next_token(&mut self) -> Token {
        self.tokens.next().unwrap_or(Token::Eof)
    }
}

/// Normalizes `\r\n` (windows) and `\r` (mac) line endings into `\n`.
fn normalize_newlines(source: &str) -> String {
    source.replace("\r\n", "\n").replace('\r', "\n")
}

/// Strips the surrounding quotes from a string literal and resolves the
/// escape sequences `\"`, `\n`, `\t` and `\r`, in that order.
fn unescape_string(lexer: &logos::Lexer<'_, Token>) -> String {
    let slice = lexer.slice();
    let mut contents = &slice[1..];

    // An unterminated literal runs to end of input and has no closing quote.
    if contents.len() > 1 && contents.ends_with('"') && !contents.ends_with("\\\"") {
        contents = &contents[..contents.len() - 1];
    } else if contents == "\"" {
        contents = "";
    }

    contents.replace("\\\"", "\"")
            .replace("\\n", "\n")
            .replace("\\t", "\t")
            .replace("\\r", "\r")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            if token == Token::Eof {
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    fn identifier(name: &str) -> Token {
        Token::Identifier(name.to_string())
    }

    fn int(literal: &str) -> Token {
        Token::Int(literal.to_string())
    }

    #[test]
    fn lexes_a_small_program() {
        let input = "let five = 5;
        let ten = 10;

        let add = fn(x, y) {
            x + y;
        };

        let result = add(five, ten);
        !-/*5;
        5 < 10 > 5;

        if (5 < 10) {
            return true;
        } else {
            return false;
        }

        10 == 10;
        10 != 9;
        x -= 9;
        x += 9;
        x /= 9;
        x *= 9;
        ";

        let expected = vec![Token::Let,
                            identifier("five"),
                            Token::Assign,
                            int("5"),
                            Token::Semicolon,
                            Token::Let,
                            identifier("ten"),
                            Token::Assign,
                            int("10"),
                            Token::Semicolon,
                            Token::Let,
                            identifier("add"),
                            Token::Assign,
                            Token::Function,
                            Token::LParen,
                            identifier("x"),
                            Token::Comma,
                            identifier("y"),
                            Token::RParen,
                            Token::LBrace,
                            identifier("x"),
                            Token::Plus,
                            identifier("y"),
                            Token::Semicolon,
                            Token::RBrace,
                            Token::Semicolon,
                            Token::Let,
                            identifier("result"),
                            Token::Assign,
                            identifier("add"),
                            Token::LParen,
                            identifier("five"),
                            Token::Comma,
                            identifier("ten"),
                            Token::RParen,
                            Token::Semicolon,
                            Token::Bang,
                            Token::Minus,
                            Token::Slash,
                            Token::Asterisk,
                            int("5"),
                            Token::Semicolon,
                            int("5"),
                            Token::Lt,
                            int("10"),
                            Token::Gt,
                            int("5"),
                            Token::Semicolon,
                            Token::If,
                            Token::LParen,
                            int("5"),
                            Token::Lt,
                            int("10"),
                            Token::RParen,
                            Token::LBrace,
                            Token::Return,
                            Token::True,
                            Token::Semicolon,
                            Token::RBrace,
                            Token::Else,
                            Token::LBrace,
                            Token::Return,
                            Token::False,
                            Token::Semicolon,
                            Token::RBrace,
                            int("10"),
                            Token::Eq,
                            int("10"),
                            Token::Semicolon,
                            int("10"),
                            Token::NotEq,
                            int("9"),
                            Token::Semicolon,
                            identifier("x"),
                            Token::MinusEq,
                            int("9"),
                            Token::Semicolon,
                            identifier("x"),
                            Token::PlusEq,
                            int("9"),
                            Token::Semicolon,
                            identifier("x"),
                            Token::SlashEq,
                            int("9"),
                            Token::Semicolon,
                            identifier("x"),
                            Token::AsteriskEq,
                            int("9"),
                            Token::Semicolon];

        assert_eq!(lex(input), expected);
    }

    #[test]
    fn lexes_multi_char_operators() {
        assert_eq!(lex("++ -- == != <= >= += -= *= /= && || ??"),
                   vec![Token::Increment,
                        Token::Decrement,
                        Token::Eq,
                        Token::NotEq,
                        Token::LtEq,
                        Token::GtEq,
                        Token::PlusEq,
                        Token::MinusEq,
                        Token::AsteriskEq,
                        Token::SlashEq,
                        Token::And,
                        Token::Or,
                        Token::NullOr]);
    }

    #[test]
    fn lexes_doubles_and_integers() {
        assert_eq!(lex("5 13434.56 0.5"),
                   vec![int("5"),
                        Token::Double("13434.56".to_string()),
                        Token::Double("0.5".to_string())]);
    }

    #[test]
    fn number_with_trailing_period_is_illegal() {
        assert_eq!(lex("5. x")[0], Token::Illegal("5.".to_string()));
    }

    #[test]
    fn lexes_keywords_and_nil() {
        assert_eq!(lex("fn let true false nil if else return"),
                   vec![Token::Function,
                        Token::Let,
                        Token::True,
                        Token::False,
                        Token::Null,
                        Token::If,
                        Token::Else,
                        Token::Return]);
    }

    #[test]
    fn lexes_string_escapes() {
        assert_eq!(lex(r#""hello \"world\"\n""#),
                   vec![Token::Str("hello \"world\"\n".to_string())]);
        assert_eq!(lex(r#""""#), vec![Token::Str(String::new())]);
    }

    #[test]
    fn unterminated_string_runs_to_end_of_input() {
        assert_eq!(lex(r#""abc"#), vec![Token::Str("abc".to_string())]);
    }

    #[test]
    fn lexes_comments_verbatim() {
        assert_eq!(lex("5 // the five\n6"),
                   vec![int("5"),
                        Token::Comment("// the five".to_string()),
                        int("6")]);
    }

    #[test]
    fn normalizes_line_endings_in_comments() {
        assert_eq!(lex("// a\r\n// b\r"),
                   vec![Token::Comment("// a".to_string()),
                        Token::Comment("// b".to_string())]);
    }

    #[test]
    fn unknown_characters_are_illegal() {
        assert_eq!(lex("@"), vec![Token::Illegal("@".to_string())]);
        assert_eq!(lex("&"), vec![Token::Illegal("&".to_string())]);
    }

    #[test]
    fn identifiers_do_not_contain_digits() {
        assert_eq!(lex("t42"), vec![identifier("t"), int("42")]);
    }
}
