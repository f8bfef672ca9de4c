// ============================================================================
// Command Domain Model
// Opcodes, operators and the line lexer
// ============================================================================

/// Operators that consume two operands (`a b op`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub fn symbol(&self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
            BinaryOp::Pow => '^',
        }
    }
}

/// Operators that consume one operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Sqrt,
}

impl UnaryOp {
    pub fn symbol(&self) -> char {
        match self {
            UnaryOp::Sqrt => 'v',
        }
    }
}

/// Single-character opcodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Binary(BinaryOp),
    Unary(UnaryOp),
    /// `=` or `p`: print the top without popping
    PrintTop,
    /// `b`: print every element, top to bottom
    Dump,
    /// `s`: print the number of elements
    PrintSize,
    /// `d`
    Duplicate,
    /// `c`
    Clear,
    /// `q`: stop reading lines after the current one
    Quit,
    /// `k`: the next literal sets precision
    SetPrecision,
    /// `_`: the next literal is negated
    Negate,
}

impl Command {
    /// Decode an opcode. Whitespace, digits and unknown characters are not
    /// commands.
    pub fn from_char(c: char) -> Option<Self> {
        let command = match c {
            '+' => Command::Binary(BinaryOp::Add),
            '-' => Command::Binary(BinaryOp::Sub),
            '*' => Command::Binary(BinaryOp::Mul),
            '/' => Command::Binary(BinaryOp::Div),
            '^' => Command::Binary(BinaryOp::Pow),
            'v' => Command::Unary(UnaryOp::Sqrt),
            '=' | 'p' => Command::PrintTop,
            'b' => Command::Dump,
            's' => Command::PrintSize,
            'd' => Command::Duplicate,
            'c' => Command::Clear,
            'q' => Command::Quit,
            'k' => Command::SetPrecision,
            '_' => Command::Negate,
            _ => return None,
        };
        Some(command)
    }
}

// ============================================================================
// Lexer
// ============================================================================

/// One unit of a scanned line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Command(Command),
    /// Raw literal text, not yet parsed
    Literal(&'a str),
    /// Character that is neither an opcode, whitespace nor a literal start
    Invalid(char),
}

/// Splits a line into tokens, left to right. Spaces and newlines are
/// skipped.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = &self.line[self.pos..];
            let c = rest.chars().next()?;

            if c.is_ascii_digit() {
                let len = literal_len(rest);
                self.pos += len;
                return Some(Token::Literal(&rest[..len]));
            }

            self.pos += c.len_utf8();
            if c == ' ' || c == '\n' {
                continue;
            }
            return Some(match Command::from_char(c) {
                Some(command) => Token::Command(command),
                None => Token::Invalid(c),
            });
        }
    }
}

/// Byte length of the literal at the start of `text`.
///
/// Greedy: digits, at most one `.` before the exponent, and one exponent
/// marker. A sign after the marker is taken only when a digit follows it,
/// so `2e-3` is one literal while `2e-` leaves the `-` as an operator.
fn literal_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut i = 0;
    let mut seen_dot = false;
    let mut seen_exp = false;

    while let Some(&b) = bytes.get(i) {
        match b {
            b'0'..=b'9' => i += 1,
            b'.' if !seen_dot && !seen_exp => {
                seen_dot = true;
                i += 1;
            }
            b'e' | b'E' if !seen_exp => {
                seen_exp = true;
                i += 1;
                let signed = matches!(bytes.get(i), Some(b'+' | b'-'));
                if signed && bytes.get(i + 1).is_some_and(u8::is_ascii_digit) {
                    i += 1;
                }
            }
            _ => break,
        }
    }
    i
}
