//! Utility macros for the front end.
//!
//! - `MK_NODE!` - Creates an AST Node instance
//! - `MK_ERROR!` - Creates a positioned Error and returns it as `Err`

/// Creates a Node instance.
///
/// # Arguments
///
/// * `$kind` - The NodeKind
/// * `$position` - The source position
///
/// # Example
///
/// ```ignore
/// let node = MK_NODE!(NodeKind::IntegerLiteral(String::from("42")), position);
/// ```
#[macro_export]
macro_rules! MK_NODE {
    ($kind:expr, $position:expr) => {
        $crate::ast::ast::Node {
            kind: $kind,
            position: $position,
        }
    };
}

/// Returns early with an Error built from an ErrorImpl and a position.
///
/// # Example
///
/// ```ignore
/// MK_ERROR!(ErrorImpl::UnterminatedString, scanner.position());
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($error:expr, $position:expr) => {
        return Err($crate::errors::errors::Error::new($error, $position))
    };
}
