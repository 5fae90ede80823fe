#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    Digit,
    Letter,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskToken {
    Literal(char),
    Placeholder(PlaceholderKind),
}

impl MaskToken {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

/// Ordered sequence of mask tokens. Replaced, never edited, when the
/// configuration or the digit form changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    tokens: Vec<MaskToken>,
}

impl Template {
    pub fn new(tokens: Vec<MaskToken>) -> Self {
        Self { tokens }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn parse(pattern: &str) -> Self {
        super::parser::parse_mask(pattern)
    }

    pub fn tokens(&self) -> &[MaskToken] {
        self.tokens.as_slice()
    }

    /// Length of the fully masked string, in characters.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn placeholder_count(&self) -> usize {
        self.tokens.iter().filter(|token| token.is_placeholder()).count()
    }

    /// Number of maximal runs of consecutive `Digit` placeholders.
    pub fn digit_runs(&self) -> usize {
        let mut runs = 0usize;
        let mut in_run = false;
        for token in &self.tokens {
            let is_digit = matches!(token, MaskToken::Placeholder(PlaceholderKind::Digit));
            if is_digit && !in_run {
                runs += 1;
            }
            in_run = is_digit;
        }
        runs
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for token in &self.tokens {
            let ch = match token {
                MaskToken::Literal(ch) => *ch,
                MaskToken::Placeholder(kind) => super::parser::placeholder_char(*kind),
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MaskedOutput {
    pub text: String,
    /// Input characters matched against placeholders.
    pub consumed_input_len: usize,
}
