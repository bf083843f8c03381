//! Types for the element registry system.

/// Classification of element types for rendering strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    /// Container elements (glossary, glossdiv, glossentry).
    Structural,
    /// Paragraph-level elements (para).
    Block,
    /// Text-level elements (command, code, link).
    Inline,
}

/// State threaded through one conversion run.
///
/// A fresh context per document makes the converter re-entrant: the
/// glossary directive is emitted once per run, not once per process.
#[derive(Debug, Clone, Default)]
pub struct ConvertContext {
    /// Whether the `.. glossary::` directive has been emitted.
    pub glossary_opened: bool,

    /// Number of glossary divisions converted.
    pub divisions: usize,

    /// Number of glossary entries converted.
    pub entries: usize,
}

impl ConvertContext {
    /// Create a new context for a conversion run.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the glossary directive as emitted.
    ///
    /// Returns `true` only on the first call.
    pub fn open_glossary(&mut self) -> bool {
        !std::mem::replace(&mut self.glossary_opened, true)
    }
}
