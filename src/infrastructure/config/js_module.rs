//! Reader for declarative JS config modules.
//!
//! Accepts `module.exports = <literal>` or `export default <literal>`,
//! where the literal is built from objects, arrays, quoted strings,
//! numbers, `true`, `false` and `null`. Keys may be bare identifiers,
//! comments and trailing commas are allowed. Any executable expression
//! (calls, spreads, template literals, references) is rejected.

use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Error produced when the module text is not a plain declarative literal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message} at line {line}, column {column}")]
pub struct JsModuleError {
    /// 1-based line of the offending character
    pub line: usize,
    /// 1-based column, counted in characters
    pub column: usize,
    /// What the reader expected or rejected
    pub message: String,
}

type Result<T> = std::result::Result<T, JsModuleError>;

/// Parse the exported literal of a JS config module.
pub fn parse_module(text: &str) -> Result<Value> {
    let mut reader = Reader::new(text);
    reader.export_header()?;
    let value = reader.value()?;
    reader.skip_trivia()?;
    if reader.peek() == Some(';') {
        reader.bump();
        reader.skip_trivia()?;
    }
    match reader.peek() {
        None => Ok(value),
        Some(c) => Err(reader.error(format!("unexpected `{c}` after exported value"))),
    }
}

/// Whether `text` looks like a JS module rather than JSON or YAML.
///
/// Only the first token after leading whitespace and comments counts.
pub fn looks_like_module(text: &str) -> bool {
    let mut reader = Reader::new(text);
    if reader.skip_trivia().is_err() {
        return false;
    }
    matches!(reader.identifier().as_str(), "module" | "export")
}

/// Deepest object/array nesting accepted, same as serde_json.
const MAX_DEPTH: usize = 128;

struct Reader {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    depth: usize,
}

impl Reader {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn error(&self, message: impl Into<String>) -> JsModuleError {
        JsModuleError {
            line: self.line,
            column: self.column,
            message: message.into(),
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.peek() {
            Some(c) if c == expected => {
                self.bump();
                Ok(())
            }
            Some(c) => Err(self.error(format!("expected `{expected}`, found `{c}`"))),
            None => Err(self.error(format!("expected `{expected}`, found end of input"))),
        }
    }

    fn skip_trivia(&mut self) -> Result<()> {
        loop {
            match (self.peek(), self.peek_at(1)) {
                (Some(c), _) if c.is_whitespace() => {
                    self.bump();
                }
                (Some('/'), Some('/')) => {
                    while let Some(c) = self.bump() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                (Some('/'), Some('*')) => {
                    let (line, column) = (self.line, self.column);
                    self.bump();
                    self.bump();
                    loop {
                        match self.bump() {
                            Some('*') if self.peek() == Some('/') => {
                                self.bump();
                                break;
                            }
                            Some(_) => {}
                            None => {
                                return Err(JsModuleError {
                                    line,
                                    column,
                                    message: "unterminated block comment".to_string(),
                                })
                            }
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn identifier(&mut self) -> String {
        let mut ident = String::new();
        while let Some(c) = self.peek() {
            if !is_ident_char(c) {
                break;
            }
            ident.push(c);
            self.bump();
        }
        ident
    }

    fn keyword(&mut self, word: &str) -> Result<()> {
        let (line, column) = (self.line, self.column);
        let found = self.identifier();
        if found == word {
            Ok(())
        } else {
            Err(JsModuleError {
                line,
                column,
                message: format!("expected `{word}`, found `{found}`"),
            })
        }
    }

    fn export_header(&mut self) -> Result<()> {
        self.skip_trivia()?;
        let (line, column) = (self.line, self.column);
        match self.identifier().as_str() {
            "module" => {
                self.skip_trivia()?;
                self.expect('.')?;
                self.skip_trivia()?;
                self.keyword("exports")?;
                self.skip_trivia()?;
                self.expect('=')
            }
            "export" => {
                self.skip_trivia()?;
                self.keyword("default")
            }
            _ => Err(JsModuleError {
                line,
                column,
                message: "expected `module.exports =` or `export default`".to_string(),
            }),
        }
    }

    fn value(&mut self) -> Result<Value> {
        self.skip_trivia()?;
        match self.peek() {
            Some('{') => self.nested(Self::object),
            Some('[') => self.nested(Self::array),
            Some(quote @ ('\'' | '"')) => self.string(quote).map(Value::String),
            Some(c) if c == '-' || c == '.' || c.is_ascii_digit() => self.number(),
            Some('`') => Err(self.error("template literals are not supported")),
            Some(c) if is_ident_start(c) => {
                let (line, column) = (self.line, self.column);
                match self.identifier().as_str() {
                    "true" => Ok(Value::Bool(true)),
                    "false" => Ok(Value::Bool(false)),
                    "null" => Ok(Value::Null),
                    other => Err(JsModuleError {
                        line,
                        column,
                        message: format!("unsupported expression `{other}`"),
                    }),
                }
            }
            Some(c) => Err(self.error(format!("unexpected `{c}`"))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn nested(&mut self, parse: fn(&mut Self) -> Result<Value>) -> Result<Value> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error("nesting too deep"));
        }
        self.depth += 1;
        let value = parse(self);
        self.depth -= 1;
        value
    }

    fn object(&mut self) -> Result<Value> {
        self.expect('{')?;
        let mut entries = Map::new();
        loop {
            self.skip_trivia()?;
            let key = match self.peek() {
                Some('}') => {
                    self.bump();
                    break;
                }
                Some(quote @ ('\'' | '"')) => self.string(quote)?,
                Some(c) if is_ident_start(c) => self.identifier(),
                Some(c) if c.is_ascii_digit() => self.identifier(),
                Some('.') => return Err(self.error("spread elements are not supported")),
                Some('[') => return Err(self.error("computed keys are not supported")),
                Some(c) => return Err(self.error(format!("unexpected `{c}` in object key"))),
                None => return Err(self.error("unterminated object")),
            };
            self.skip_trivia()?;
            self.expect(':')?;
            let value = self.value()?;
            entries.insert(key, value);

            self.skip_trivia()?;
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some('}') => {
                    self.bump();
                    break;
                }
                Some(c) => return Err(self.error(format!("expected `,` or `}}`, found `{c}`"))),
                None => return Err(self.error("unterminated object")),
            }
        }
        Ok(Value::Object(entries))
    }

    fn array(&mut self) -> Result<Value> {
        self.expect('[')?;
        let mut items = Vec::new();
        loop {
            self.skip_trivia()?;
            match self.peek() {
                Some(']') => {
                    self.bump();
                    break;
                }
                Some('.') if self.peek_at(1) == Some('.') => {
                    return Err(self.error("spread elements are not supported"))
                }
                None => return Err(self.error("unterminated array")),
                _ => {}
            }
            items.push(self.value()?);

            self.skip_trivia()?;
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(']') => {
                    self.bump();
                    break;
                }
                Some(c) => return Err(self.error(format!("expected `,` or `]`, found `{c}`"))),
                None => return Err(self.error("unterminated array")),
            }
        }
        Ok(Value::Array(items))
    }

    fn string(&mut self, quote: char) -> Result<String> {
        let (line, column) = (self.line, self.column);
        self.bump();
        let mut text = String::new();
        loop {
            match self.bump() {
                Some(c) if c == quote => return Ok(text),
                Some('\\') => self.escape(&mut text)?,
                Some('\n') | None => {
                    return Err(JsModuleError {
                        line,
                        column,
                        message: "unterminated string".to_string(),
                    })
                }
                Some(c) => text.push(c),
            }
        }
    }

    fn escape(&mut self, text: &mut String) -> Result<()> {
        let escaped = match self.bump() {
            Some('n') => '\n',
            Some('t') => '\t',
            Some('r') => '\r',
            Some('b') => '\u{8}',
            Some('f') => '\u{c}',
            Some('v') => '\u{b}',
            Some('0') => '\0',
            // line continuation
            Some('\n' | '\u{2028}' | '\u{2029}') => return Ok(()),
            Some('\r') => {
                if self.peek() == Some('\n') {
                    self.bump();
                }
                return Ok(());
            }
            Some('x') => self.hex_escape(2)?,
            Some('u') => self.hex_escape(4)?,
            Some(c) => c,
            None => return Err(self.error("unterminated escape sequence")),
        };
        text.push(escaped);
        Ok(())
    }

    fn hex_escape(&mut self, digits: usize) -> Result<char> {
        let mut code = 0u32;
        for _ in 0..digits {
            let digit = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.error("invalid hex escape"))?;
            code = code * 16 + digit;
        }
        char::from_u32(code).ok_or_else(|| self.error("escape is not a valid character"))
    }

    fn number(&mut self) -> Result<Value> {
        let (line, column) = (self.line, self.column);
        let mut literal = String::new();
        while let Some(c) = self.peek() {
            if !(c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E' | '_')) {
                break;
            }
            if c != '_' {
                literal.push(c);
            }
            self.bump();
        }

        let invalid = || JsModuleError {
            line,
            column,
            message: format!("invalid number `{literal}`"),
        };
        if let Ok(integer) = literal.parse::<i64>() {
            return Ok(Value::Number(integer.into()));
        }
        literal
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(invalid)
    }
}

const fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

const fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}
