//! Recursive-descent statement parser
//!
//! Grammar, lowest precedence first:
//! - `expression  := disjunction`
//! - `disjunction := conjunction ( "or" conjunction )*`
//! - `conjunction := unary ( "and" unary )*`
//! - `unary       := "not" unary | primary`
//! - `primary     := "(" expression ")" | CONDITION`

use super::ast::Expression;
use super::token::{tokenize, Token};
use crate::error::ParseError;

/// Bounds applied while parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLimits {
    /// Maximum nesting of parenthesized groups, `not` chains and
    /// `and`/`or` links
    pub max_depth: usize,
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

/// Parse a token sequence into a single expression tree
pub fn parse(tokens: &[Token]) -> Result<Expression, ParseError> {
    parse_with_limits(tokens, ParseLimits::default())
}

/// Tokenize and parse a statement
pub fn parse_statement(statement: &str) -> Result<Expression, ParseError> {
    parse(&tokenize(statement))
}

/// Parse with custom limits
pub fn parse_with_limits(tokens: &[Token], limits: ParseLimits) -> Result<Expression, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        open_groups: 0,
        limits,
    };
    let expr = parser.expression()?;

    match parser.peek() {
        None => Ok(expr),
        Some(Token::ParenClose) => Err(ParseError::UnmatchedParenthesis {
            position: parser.pos,
        }),
        Some(found) => Err(ParseError::TrailingTokens {
            position: parser.pos,
            found: found.clone(),
        }),
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Height of the tree built so far along the current path
    depth: usize,
    /// Parenthesized groups entered and not yet closed
    open_groups: usize,
    limits: ParseLimits,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next_is(&self, token: &Token) -> bool {
        self.peek() == Some(token)
    }

    fn expression(&mut self) -> Result<Expression, ParseError> {
        self.disjunction()
    }

    // Every `and`/`or` link adds a level to the left spine, so it counts
    // toward the depth limit just like a group does.
    fn disjunction(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.conjunction()?;
        let mut links = 0;
        while self.next_is(&Token::Or) {
            self.descend()?;
            links += 1;
            self.pos += 1;
            let right = self.conjunction()?;
            left = Expression::or(left, right);
        }
        self.depth -= links;
        Ok(left)
    }

    fn conjunction(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.unary()?;
        let mut links = 0;
        while self.next_is(&Token::And) {
            self.descend()?;
            links += 1;
            self.pos += 1;
            let right = self.unary()?;
            left = Expression::and(left, right);
        }
        self.depth -= links;
        Ok(left)
    }

    fn unary(&mut self) -> Result<Expression, ParseError> {
        if self.next_is(&Token::Not) {
            self.descend()?;
            self.pos += 1;
            let operand = self.unary()?;
            self.depth -= 1;
            return Ok(Expression::not(operand));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expression, ParseError> {
        let position = self.pos;
        match self.peek() {
            Some(Token::Condition(text)) => {
                self.pos += 1;
                Ok(Expression::Atom(text.clone()))
            }
            Some(Token::ParenOpen) => self.group(position),
            Some(Token::ParenClose) if self.open_groups == 0 => {
                Err(ParseError::UnmatchedParenthesis { position })
            }
            found => Err(ParseError::UnexpectedToken {
                position,
                found: found.cloned(),
                expected: "a condition, 'not' or '('",
            }),
        }
    }

    /// `"(" expression ")"`, with the cursor on the opening paren
    fn group(&mut self, position: usize) -> Result<Expression, ParseError> {
        self.descend()?;
        self.open_groups += 1;
        self.pos += 1;

        let inner = match self.expression() {
            Ok(inner) => inner,
            // input ran out before this group was closed
            Err(ParseError::UnexpectedToken { found: None, .. }) => {
                return Err(ParseError::UnmatchedParenthesis { position })
            }
            Err(e) => return Err(e),
        };
        self.open_groups -= 1;
        self.depth -= 1;

        match self.peek() {
            Some(Token::ParenClose) => {
                self.pos += 1;
                Ok(inner)
            }
            None => Err(ParseError::UnmatchedParenthesis { position }),
            Some(found) => Err(ParseError::UnexpectedToken {
                position: self.pos,
                found: Some(found.clone()),
                expected: "')'",
            }),
        }
    }

    fn descend(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.limits.max_depth {
            return Err(ParseError::NestingTooDeep {
                position: self.pos,
                limit: self.limits.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }
}
