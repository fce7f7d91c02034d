/// Bound on the elements a cursor walks over.
///
/// Tokens are compared by the primitive parsers and cloned into parser
/// outputs; `Debug` enables mismatch messages without constraining what a
/// token is (characters, lexer tokens, arbitrary values).
pub trait Token: Clone + PartialEq + std::fmt::Debug {}

impl<S> Token for S where S: Clone + PartialEq + std::fmt::Debug {}
