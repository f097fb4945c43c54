//! Punctuation normalization for mixed CJK/Latin text.
//!
//! Converts Western punctuation into the conventions used by Chinese
//! publishing platforms before the text is parsed into blocks. The passes
//! run in a fixed order because each one relies on the shape left by the
//! previous pass:
//!
//! 1. quotes: `"…"` / `“…”` → `「…」`, `'…'` / `‘…’` → `『…』`
//! 2. ellipsis: `...` / `。。` → `……`
//! 3. dashes: `--` → `——`, except on horizontal rules and table separators
//! 4. spacing: one space between CJK ideographs and Latin letters or digits

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::syntax;

static DOUBLE_QUOTED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"["“”]([^"“”]*)["“”]"#).expect("valid regex for double-quoted spans")
});

static PERIOD_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.{3,}").expect("valid regex for period runs"));

static FULL_STOP_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"。{2,}").expect("valid regex for CJK full stop runs"));

static CJK_THEN_LATIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([\x{4e00}-\x{9fa5}])([a-zA-Z0-9])").expect("valid regex for CJK-Latin boundary")
});

static LATIN_THEN_CJK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-zA-Z0-9])([\x{4e00}-\x{9fa5}])").expect("valid regex for Latin-CJK boundary")
});

static SPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" {2,}").expect("valid regex for space runs"));

const ELLIPSIS: &str = "……";
const EM_DASH_PAIR: &str = "——";

/// Options selecting which normalization passes run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PunctuationOptions {
    /// Normalize Unicode to NFC form before any other pass
    pub unicode_nfc: bool,

    /// Convert Western and curly quotes to corner brackets
    pub quotes: bool,

    /// Collapse period and full-stop runs into an ellipsis
    pub ellipsis: bool,

    /// Convert inline double hyphens to an em-dash pair
    pub dashes: bool,

    /// Space out CJK/Latin boundaries and collapse repeated spaces
    pub spacing: bool,
}

impl PunctuationOptions {
    /// The four punctuation passes, without Unicode normalization.
    pub fn standard() -> Self {
        Self {
            unicode_nfc: false,
            quotes: true,
            ellipsis: true,
            dashes: true,
            spacing: true,
        }
    }

    /// No passes at all; the text is returned unchanged.
    pub fn none() -> Self {
        Self {
            unicode_nfc: false,
            quotes: false,
            ellipsis: false,
            dashes: false,
            spacing: false,
        }
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode_nfc(mut self, enabled: bool) -> Self {
        self.unicode_nfc = enabled;
        self
    }

    /// Enable or disable quote conversion.
    pub fn with_quotes(mut self, enabled: bool) -> Self {
        self.quotes = enabled;
        self
    }

    /// Enable or disable ellipsis collapsing.
    pub fn with_ellipsis(mut self, enabled: bool) -> Self {
        self.ellipsis = enabled;
        self
    }

    /// Enable or disable dash conversion.
    pub fn with_dashes(mut self, enabled: bool) -> Self {
        self.dashes = enabled;
        self
    }

    /// Enable or disable CJK/Latin spacing.
    pub fn with_spacing(mut self, enabled: bool) -> Self {
        self.spacing = enabled;
        self
    }
}

impl Default for PunctuationOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Punctuation normalization pipeline.
#[derive(Debug, Clone, Default)]
pub struct PunctuationNormalizer {
    options: PunctuationOptions,
}

impl PunctuationNormalizer {
    /// Create a new normalizer with the given options.
    pub fn new(options: PunctuationOptions) -> Self {
        Self { options }
    }

    /// Get the options in use.
    pub fn options(&self) -> &PunctuationOptions {
        &self.options
    }

    /// Run the enabled passes over the text.
    pub fn process(&self, text: &str) -> String {
        let mut result = if self.options.unicode_nfc {
            text.nfc().collect()
        } else {
            text.to_string()
        };

        if self.options.quotes {
            result = convert_quotes(&result);
        }
        if self.options.ellipsis {
            result = collapse_ellipsis(&result);
        }
        if self.options.dashes {
            result = convert_dashes(&result);
        }
        if self.options.spacing {
            result = space_cjk_boundaries(&result);
        }

        result
    }
}

/// Normalize punctuation with the standard passes.
pub fn normalize(text: &str) -> String {
    PunctuationNormalizer::default().process(text)
}

fn convert_quotes(text: &str) -> String {
    let doubled = DOUBLE_QUOTED.replace_all(text, "「${1}」");
    convert_single_quotes(&doubled)
}

fn is_single_quote(c: char) -> bool {
    matches!(c, '\'' | '‘' | '’')
}

// A candidate span is rejected when its closing quote runs straight into a
// Latin letter (`Tom's book`); scanning then resumes one character later.
fn convert_single_quotes(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if is_single_quote(chars[i]) {
            let close = (i + 1..chars.len()).find(|&j| is_single_quote(chars[j]));
            if let Some(close) = close {
                let glued = chars
                    .get(close + 1)
                    .is_some_and(|c| c.is_ascii_alphabetic());
                if !glued {
                    result.push('『');
                    result.extend(&chars[i + 1..close]);
                    result.push('』');
                    i = close + 1;
                    continue;
                }
            }
        }
        result.push(chars[i]);
        i += 1;
    }

    result
}

fn collapse_ellipsis(text: &str) -> String {
    let result = PERIOD_RUN.replace_all(text, ELLIPSIS);
    FULL_STOP_RUN.replace_all(&result, ELLIPSIS).into_owned()
}

fn convert_dashes(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            let trimmed = syntax::trim_line(line);
            if is_rule_like(trimmed) || is_table_divider(trimmed) {
                line.to_string()
            } else {
                convert_line_dashes(line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// Any run of 3+ rule characters, mixed or not.
fn is_rule_like(trimmed: &str) -> bool {
    trimmed.chars().count() >= 3 && trimmed.chars().all(|c| matches!(c, '-' | '*' | '_'))
}

fn is_table_divider(trimmed: &str) -> bool {
    syntax::is_separator_row(trimmed)
        || (syntax::is_pipe_wrapped(trimmed) && trimmed.contains("---"))
}

// A `--` reaching a pipe through only spaces and hyphens is cell padding, not a dash.
fn convert_line_dashes(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let (pipe_before, pipe_after) = pipe_reach(&chars);
    let mut result = String::with_capacity(line.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '-'
            && chars.get(i + 1) == Some(&'-')
            && !(pipe_before[i] || pipe_after[i + 2])
        {
            result.push_str(EM_DASH_PAIR);
            i += 2;
            continue;
        }
        result.push(chars[i]);
        i += 1;
    }

    result
}

// `before[k]`: the nearest non-filler char in `chars[..k]` is a pipe.
// `after[k]`: the nearest non-filler char in `chars[k..]` is a pipe.
fn pipe_reach(chars: &[char]) -> (Vec<bool>, Vec<bool>) {
    let is_filler = |c: char| c == '-' || c.is_whitespace();
    let n = chars.len();

    let mut before = vec![false; n + 1];
    for (k, &c) in chars.iter().enumerate() {
        before[k + 1] = if is_filler(c) { before[k] } else { c == '|' };
    }

    let mut after = vec![false; n + 1];
    for (k, &c) in chars.iter().enumerate().rev() {
        after[k] = if is_filler(c) { after[k + 1] } else { c == '|' };
    }

    (before, after)
}

fn space_cjk_boundaries(text: &str) -> String {
    let result = CJK_THEN_LATIN.replace_all(text, "${1} ${2}");
    let result = LATIN_THEN_CJK.replace_all(&result, "${1} ${2}");
    SPACE_RUN.replace_all(&result, " ").into_owned()
}
