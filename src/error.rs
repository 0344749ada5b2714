//! The closed set of errors the interpreter can raise (spec §7).

use thiserror::Error;

use crate::coord::Coord;

/// Every way interpretation of a template against a stream can fail.
///
/// `InterpReturn` from spec §7 is deliberately absent here: it is an
/// in-band, always-caught control-flow signal, not a user-visible error. It
/// is modeled separately as [`crate::interp::Outcome`] so that it can never
/// escape `evaluate` as a `Result::Err` by construction. See the Design
/// Note on non-local return.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InterpError {
    #[error("{0:?}: unsupported AST node kind '{1}'")]
    UnsupportedASTNode(Coord, String),

    #[error("{0:?}: unsupported binary operator '{1}'")]
    UnsupportedBinaryOperator(Coord, String),

    #[error("{0:?}: unsupported unary operator '{1}'")]
    UnsupportedUnaryOperator(Coord, String),

    #[error("{0:?}: unsupported constant type '{1}'")]
    UnsupportedConstantType(Coord, String),

    #[error("{0:?}: unresolved identifier '{1}'")]
    UnresolvedID(Coord, String),

    #[error("{0:?}: unresolved type '{1}' (resolved so far: '{2}')")]
    UnresolvedType(Coord, String, String),

    /// Not part of spec §7's closed set; see SPEC_FULL.md §A.3. Raised when
    /// a configured [`crate::interp::Limits`] is exceeded (runaway
    /// recursion or an oversized array dimension), so that a malicious or
    /// buggy template cannot crash the host process.
    #[error("{0:?}: limit exceeded: {1}")]
    LimitExceeded(Coord, String),

    /// Not part of spec §7's closed set; see SPEC_FULL.md §A.3. The stream
    /// interface (spec §6) is narrow but still fallible — a truncated or
    /// exhausted stream has to surface as something.
    #[error("{0:?}: stream read failed: {1}")]
    StreamRead(Coord, String),
}

impl InterpError {
    pub fn coord(&self) -> &Coord {
        match self {
            InterpError::UnsupportedASTNode(c, _)
            | InterpError::UnsupportedBinaryOperator(c, _)
            | InterpError::UnsupportedUnaryOperator(c, _)
            | InterpError::UnsupportedConstantType(c, _)
            | InterpError::UnresolvedID(c, _)
            | InterpError::UnresolvedType(c, _, _)
            | InterpError::LimitExceeded(c, _)
            | InterpError::StreamRead(c, _) => c,
        }
    }
}

pub type InterpResult<T> = Result<T, InterpError>;
