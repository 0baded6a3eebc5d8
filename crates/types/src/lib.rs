/// Errors that can occur when creating validated identifier types.
#[derive(Debug, thiserror::Error)]
pub enum CodeError {
    /// The input was empty or contained only whitespace
    #[error("Procedure code cannot be empty")]
    Empty,
    /// The input did not match the procedure code shape
    #[error("'{0}' is not a valid procedure code (expected letters followed by digits, e.g. MEXIP01)")]
    Malformed(String),
}

/// A normalized procedure identifier.
///
/// Wraps a `String` that is guaranteed to be trimmed, upper-case, and to match
/// the lexical shape of a procedure code: at least three ASCII letters followed
/// by at least two ASCII digits, and nothing else. The same shape doubles as the
/// boundary signature between procedure blocks in a source document, so keeping
/// it in one place prevents the locator and the classifier from drifting apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcedureCode(String);

impl ProcedureCode {
    /// Minimum number of leading ASCII letters in a code.
    pub const MIN_LETTERS: usize = 3;
    /// Minimum number of trailing ASCII digits in a code.
    pub const MIN_DIGITS: usize = 2;

    /// Creates a new `ProcedureCode` from the given input.
    ///
    /// The input is trimmed and upper-cased. If the result is empty or does not
    /// match the letters-then-digits shape, an error is returned.
    ///
    /// # Errors
    ///
    /// Returns `CodeError::Empty` for whitespace-only input and
    /// `CodeError::Malformed` when the shape check fails.
    pub fn new(input: impl AsRef<str>) -> Result<Self, CodeError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CodeError::Empty);
        }
        let candidate = trimmed.to_ascii_uppercase();
        if !Self::matches_shape(&candidate) {
            return Err(CodeError::Malformed(trimmed.to_owned()));
        }
        Ok(Self(candidate))
    }

    /// Returns true when `s` is entirely `MIN_LETTERS`+ ASCII letters followed
    /// by `MIN_DIGITS`+ ASCII digits.
    pub fn matches_shape(s: &str) -> bool {
        let letters = s.chars().take_while(|c| c.is_ascii_alphabetic()).count();
        if letters < Self::MIN_LETTERS {
            return false;
        }
        let rest = &s[letters..];
        let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
        digits >= Self::MIN_DIGITS && digits == rest.len()
    }

    /// Returns the inner code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProcedureCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ProcedureCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for ProcedureCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for ProcedureCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ProcedureCode::new(&s).map_err(serde::de::Error::custom)
    }
}
