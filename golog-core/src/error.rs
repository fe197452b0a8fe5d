use serde::{Deserialize, Serialize};

use std::fmt;

/// Two terms cannot be made identical.
///
/// This is an ordinary result of unification, not a fault. The resolution
/// engine reacts to it by backtracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CantUnify;

impl fmt::Display for CantUnify {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "can't unify")
    }
}

impl std::error::Error for CantUnify {}

pub type UnifyResult<T> = std::result::Result<T, CantUnify>;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GologError {
    pub kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ErrorKind {
    Parse(ParseError),
    Runtime(RuntimeError),
}

impl GologError {
    pub fn is_parse(&self) -> bool {
        matches!(self.kind, ErrorKind::Parse(_))
    }

    pub fn is_runtime(&self) -> bool {
        matches!(self.kind, ErrorKind::Runtime(_))
    }
}

impl From<ParseError> for GologError {
    fn from(err: ParseError) -> Self {
        Self {
            kind: ErrorKind::Parse(err),
        }
    }
}

impl From<RuntimeError> for GologError {
    fn from(err: RuntimeError) -> Self {
        Self {
            kind: ErrorKind::Runtime(err),
        }
    }
}

pub type GologResult<T> = std::result::Result<T, GologError>;

impl std::error::Error for GologError {}

impl fmt::Display for GologError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            ErrorKind::Parse(e) => write!(f, "{}", e),
            ErrorKind::Runtime(e) => write!(f, "{}", e),
        }
    }
}

/// Malformed numeric literal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseError {
    InvalidInteger { token: String },
    InvalidCharacterConstant { token: String },
    InvalidEscape { token: String },
    InvalidFloat { token: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidInteger { token } => {
                write!(f, "invalid integer: {}", token.escape_debug())
            }
            Self::InvalidCharacterConstant { token } => write!(
                f,
                "invalid integer character constant: {}",
                token.escape_debug()
            ),
            Self::InvalidEscape { token } => write!(
                f,
                "invalid character escape sequence: {}",
                token.escape_debug()
            ),
            Self::InvalidFloat { token } => write!(
                f,
                "{} was parsed as a float, but is invalid",
                token.escape_debug()
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuntimeError {
    AlreadyBound { var: String },
    /// Raised by a foreign predicate; catchable by the logic program.
    Exception { msg: String },
    TypeError { msg: String },
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::AlreadyBound { var } => write!(f, "{} is already bound", var),
            Self::Exception { msg } => write!(f, "{}", msg),
            Self::TypeError { msg } => write!(f, "Type error: {}", msg),
        }
    }
}
