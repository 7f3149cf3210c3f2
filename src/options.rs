/// Quote character used around encoded strings and keys.
///
/// `Bare` omits the quotes entirely and produces intentionally non-strict
/// output; keys are still quoted with `"` so the object syntax survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quote {
    #[default]
    Double,
    Single,
    Bare,
}

impl Quote {
    pub fn as_str(self) -> &'static str {
        match self {
            Quote::Double => "\"",
            Quote::Single => "'",
            Quote::Bare => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    pub quote: Quote,
    pub numeric_strings: bool,
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quote(mut self, quote: Quote) -> Self {
        self.quote = quote;
        self
    }

    pub fn with_numeric_strings(mut self, numeric_strings: bool) -> Self {
        self.numeric_strings = numeric_strings;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub max_depth: usize,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        // serde_json refuses to nest deeper than 128 on its own
        Self { max_depth: 128 }
    }
}
