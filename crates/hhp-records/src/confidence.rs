/// A line that sat inside the betting history but could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gap {
    line: usize,
    text: String,
}

impl Gap {
    pub fn new(line: usize, text: impl Into<String>) -> Self {
        Self {
            line,
            text: text.into(),
        }
    }
    /// 1-based line number in the raw text.
    pub fn line(&self) -> usize {
        self.line
    }
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Gap {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.text)
    }
}

/// How completely a hand was understood.
///
/// `Partial` hands broke no invariant but skipped lines the parser could
/// not interpret; consumers decide whether to trust statistics from them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Confidence {
    #[default]
    Full,
    Partial(Vec<Gap>),
}

impl Confidence {
    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full)
    }
    pub fn gaps(&self) -> &[Gap] {
        match self {
            Self::Full => &[],
            Self::Partial(gaps) => gaps,
        }
    }
}

impl From<Vec<Gap>> for Confidence {
    fn from(gaps: Vec<Gap>) -> Self {
        if gaps.is_empty() {
            Self::Full
        } else {
            Self::Partial(gaps)
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Partial(gaps) => write!(f, "partial ({} gaps)", gaps.len()),
        }
    }
}
