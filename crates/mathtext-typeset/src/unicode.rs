//! LaTeX to Unicode typesetter.
//!
//! Renders math as plain Unicode text inside a `<span>`, with no external
//! engine.
//!
//! # Supported conversions
//!
//! - Greek letters: `\alpha` → α, `\Delta` → Δ
//! - Operators: `\sum` → Σ, `\int` → ∫, `\times` → ×
//! - Relations: `\leq` → ≤, `\neq` → ≠, `\approx` → ≈
//! - Subscripts: `x_1` → x₁, `x_{10}` → x₁₀
//! - Superscripts: `x^2` → x², `x^{n+1}` → xⁿ⁺¹
//! - Fractions: `\frac{a}{b}` → (a/b)
//! - Roots: `\sqrt{2}` → √2, `\sqrt{x+1}` → √(x+1)
//! - Text and font commands: `\text{ m/s}` → m/s
//! - Accents: `\vec{v}` → v⃗, `\hat{x}` → x̂
//!
//! Unknown commands are kept verbatim.

use crate::Typesetter;
use mathtext_core::{MathMode, TypesetError};
use mathtext_html::{escape_html, markup};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Class of the span produced for inline math.
pub const INLINE_CLASS: &str = "math math-inline";

/// Class of the span produced for display math.
pub const DISPLAY_CLASS: &str = "math math-display";

/// Typesetter that maps LaTeX to Unicode text.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTypesetter;

impl UnicodeTypesetter {
    /// Create a new Unicode typesetter.
    pub fn new() -> Self {
        Self
    }
}

impl Typesetter for UnicodeTypesetter {
    fn name(&self) -> &str {
        "unicode"
    }

    fn typeset(&self, source: &str, mode: MathMode) -> Result<String, TypesetError> {
        validate(source)?;
        let class = match mode {
            MathMode::Inline => INLINE_CLASS,
            MathMode::Display => DISPLAY_CLASS,
        };
        Ok(markup::element("span", class, &escape_html(&latex_to_unicode(source))))
    }
}

/// Commands that take two arguments and render as a fraction.
const FRACTION_COMMANDS: &[&str] = &["frac", "dfrac", "tfrac"];

/// Check that a math source is well-formed enough to typeset.
///
/// # Errors
///
/// [`TypesetError::Syntax`] for unbalanced braces, a trailing lone
/// backslash, `^`/`_` without an operand, or a fraction missing one of
/// its two arguments.
///
/// # Example
/// ```
/// use mathtext_typeset::unicode::validate;
///
/// assert!(validate(r"\frac{a}{b}").is_ok());
/// assert!(validate(r"\frac{a}{b").is_err());
/// ```
pub fn validate(latex: &str) -> Result<(), TypesetError> {
    let chars: Vec<char> = latex.chars().collect();
    let mut depth = 0usize;
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '\\' => {
                let Some(&next) = chars.get(i + 1) else {
                    return Err(TypesetError::syntax("trailing backslash"));
                };
                if !next.is_ascii_alphabetic() {
                    i += 2;
                    continue;
                }
                let end = command_end(&chars, i + 1);
                let name: String = chars[i + 1..end].iter().collect();
                i = end;
                if FRACTION_COMMANDS.contains(&name.as_str()) {
                    let missing = || TypesetError::syntax(format!("\\{} expects two arguments", name));
                    let first = skip_argument(&chars, end).ok_or_else(missing)?;
                    skip_argument(&chars, first).ok_or_else(missing)?;
                }
            }
            '{' => {
                depth += 1;
                i += 1;
            }
            '}' => {
                if depth == 0 {
                    return Err(TypesetError::syntax("unexpected `}`"));
                }
                depth -= 1;
                i += 1;
            }
            c @ ('^' | '_') => {
                let operand = chars[i + 1..].iter().copied().find(|c| !c.is_whitespace());
                if matches!(operand, None | Some('}')) {
                    return Err(TypesetError::syntax(format!("missing operand for `{}`", c)));
                }
                i += 1;
            }
            _ => i += 1,
        }
    }

    if depth > 0 {
        return Err(TypesetError::syntax("unbalanced braces: missing `}`"));
    }
    Ok(())
}

/// Index just past the letters of a command name starting at `from`.
fn command_end(chars: &[char], from: usize) -> usize {
    chars[from..]
        .iter()
        .position(|c| !c.is_ascii_alphabetic())
        .map(|p| from + p)
        .unwrap_or(chars.len())
}

/// Index just past one macro argument at or after `from`.
///
/// An argument is a brace group, a command, or a single character.
fn skip_argument(chars: &[char], from: usize) -> Option<usize> {
    let mut i = from;
    while chars.get(i)?.is_whitespace() {
        i += 1;
    }
    match chars[i] {
        '{' => {
            let mut depth = 0usize;
            while i < chars.len() {
                match chars[i] {
                    '\\' => i += 1,
                    '{' => depth += 1,
                    '}' => {
                        depth -= 1;
                        if depth == 0 {
                            return Some(i + 1);
                        }
                    }
                    _ => {}
                }
                i += 1;
            }
            None
        }
        '}' => None,
        '\\' => match chars.get(i + 1) {
            Some(c) if c.is_ascii_alphabetic() => Some(command_end(chars, i + 1)),
            Some(_) => Some(i + 2),
            None => None,
        },
        _ => Some(i + 1),
    }
}

/// Convert a LaTeX expression to Unicode text.
///
/// The result is plain text, not markup. Input is assumed to have passed
/// [`validate`]; malformed input still converts, just less cleanly.
///
/// # Example
/// ```
/// use mathtext_typeset::unicode::latex_to_unicode;
///
/// assert_eq!(latex_to_unicode(r"E = mc^2"), "E = mc²");
/// assert_eq!(latex_to_unicode(r"\alpha \leq \frac{1}{2}"), "α ≤ (1/2)");
/// ```
pub fn latex_to_unicode(latex: &str) -> String {
    let result = convert_groups(latex);
    let result = convert_commands(&result);
    let result = convert_subscripts(&result);
    let result = convert_superscripts(&result);
    let result = convert_fractions(&result);
    cleanup(&result)
}

/// Unwrap text/font commands, roots and accents that take a brace group.
fn convert_groups(input: &str) -> String {
    static TEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"\\(?:text|textrm|textbf|textit|mathrm|mathbf|mathit|mathcal|mathbb|operatorname)\{([^{}]*)\}")
            .unwrap()
    });
    static SQRT_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\\sqrt\{([^{}]*)\}").unwrap());
    static ACCENT_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\\(vec|hat|bar|overline|dot|ddot|tilde)\{([^{}]*)\}").unwrap());

    let result = TEXT_RE.replace_all(input, "$1");

    let result = SQRT_RE.replace_all(&result, |caps: &regex::Captures| {
        let radicand = &caps[1];
        if radicand.chars().count() == 1 {
            format!("√{}", radicand)
        } else {
            format!("√({})", radicand)
        }
    });

    ACCENT_RE
        .replace_all(&result, |caps: &regex::Captures| {
            let mark = match &caps[1] {
                "vec" => '\u{20D7}',
                "hat" => '\u{0302}',
                "bar" | "overline" => '\u{0304}',
                "dot" => '\u{0307}',
                "ddot" => '\u{0308}',
                _ => '\u{0303}',
            };
            format!("{}{}", &caps[2], mark)
        })
        .into_owned()
}

/// Convert LaTeX commands (\alpha, \sum, etc.).
fn convert_commands(input: &str) -> String {
    static CMD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\([a-zA-Z]+)").unwrap());

    CMD_RE
        .replace_all(input, |caps: &regex::Captures| {
            let cmd = &caps[1];
            match COMMANDS.get(cmd) {
                Some(s) => (*s).to_string(),
                None => format!("\\{}", cmd),
            }
        })
        .into_owned()
}

/// Convert fractions \frac{a}{b} → (a/b).
fn convert_fractions(input: &str) -> String {
    static FRAC_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\\[dt]?frac\s*\{([^{}]*)\}\s*\{([^{}]*)\}").unwrap());

    FRAC_RE
        .replace_all(input, |caps: &regex::Captures| {
            format!("({}/{})", caps[1].trim(), caps[2].trim())
        })
        .into_owned()
}

/// Convert subscripts x_1 → x₁, x_{10} → x₁₀.
fn convert_subscripts(input: &str) -> String {
    static BRACED_SUB_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"_\{([^{}]+)\}").unwrap());
    static SINGLE_SUB_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"_([0-9a-z+\-=()])").unwrap());

    let result = BRACED_SUB_RE.replace_all(input, |caps: &regex::Captures| {
        map_script(&caps[1], &SUBSCRIPTS).unwrap_or_else(|| caps[0].to_string())
    });

    SINGLE_SUB_RE
        .replace_all(&result, |caps: &regex::Captures| {
            map_script(&caps[1], &SUBSCRIPTS).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Convert superscripts x^2 → x², x^{10} → x¹⁰.
fn convert_superscripts(input: &str) -> String {
    static BRACED_SUP_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\^\{([^{}]+)\}").unwrap());
    static SINGLE_SUP_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\^([0-9a-zA-Z+\-=()])").unwrap());

    let result = BRACED_SUP_RE.replace_all(input, |caps: &regex::Captures| {
        map_script(&caps[1], &SUPERSCRIPTS).unwrap_or_else(|| caps[0].to_string())
    });

    SINGLE_SUP_RE
        .replace_all(&result, |caps: &regex::Captures| {
            map_script(&caps[1], &SUPERSCRIPTS).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Map every character of a script; `None` if any has no script form.
fn map_script(s: &str, table: &HashMap<char, char>) -> Option<String> {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| table.get(&c).copied())
        .collect()
}

/// Resolve escapes and spacing, drop grouping braces.
fn cleanup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' | '}' => {}
            '\\' => match chars.peek().copied() {
                Some(next @ ('{' | '}' | '$' | '%' | '&' | '#' | '_')) => {
                    out.push(next);
                    chars.next();
                }
                Some(',' | ';' | ':' | ' ' | '\\') => {
                    out.push(' ');
                    chars.next();
                }
                Some('!') => {
                    chars.next();
                }
                _ => out.push('\\'),
            },
            _ => out.push(c),
        }
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Command name → replacement text.
static COMMANDS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [GREEK, OPERATORS, RELATIONS, SYMBOLS, LAYOUT]
        .into_iter()
        .flatten()
        .copied()
        .collect()
});

const GREEK: &[(&str, &str)] = &[
    ("alpha", "α"), ("beta", "β"), ("gamma", "γ"), ("delta", "δ"),
    ("epsilon", "ε"), ("varepsilon", "ε"), ("zeta", "ζ"), ("eta", "η"),
    ("theta", "θ"), ("vartheta", "ϑ"), ("iota", "ι"), ("kappa", "κ"),
    ("lambda", "λ"), ("mu", "μ"), ("nu", "ν"), ("xi", "ξ"),
    ("omicron", "ο"), ("pi", "π"), ("varpi", "ϖ"), ("rho", "ρ"),
    ("varrho", "ϱ"), ("sigma", "σ"), ("varsigma", "ς"), ("tau", "τ"),
    ("upsilon", "υ"), ("phi", "φ"), ("varphi", "ϕ"), ("chi", "χ"),
    ("psi", "ψ"), ("omega", "ω"),
    ("Gamma", "Γ"), ("Delta", "Δ"), ("Theta", "Θ"), ("Lambda", "Λ"),
    ("Xi", "Ξ"), ("Pi", "Π"), ("Sigma", "Σ"), ("Upsilon", "Υ"),
    ("Phi", "Φ"), ("Psi", "Ψ"), ("Omega", "Ω"),
];

const OPERATORS: &[(&str, &str)] = &[
    ("sum", "Σ"), ("prod", "Π"), ("int", "∫"), ("iint", "∬"),
    ("iiint", "∭"), ("oint", "∮"), ("partial", "∂"), ("nabla", "∇"),
    ("sqrt", "√"), ("times", "×"), ("div", "÷"), ("cdot", "·"),
    ("ast", "∗"), ("star", "⋆"), ("circ", "∘"), ("bullet", "•"),
    ("oplus", "⊕"), ("ominus", "⊖"), ("otimes", "⊗"), ("odot", "⊙"),
    ("lim", "lim"), ("log", "log"), ("ln", "ln"), ("exp", "exp"),
    ("sin", "sin"), ("cos", "cos"), ("tan", "tan"), ("cot", "cot"),
    ("sec", "sec"), ("csc", "csc"), ("max", "max"), ("min", "min"),
];

const RELATIONS: &[(&str, &str)] = &[
    ("leq", "≤"), ("le", "≤"), ("geq", "≥"), ("ge", "≥"),
    ("neq", "≠"), ("ne", "≠"), ("approx", "≈"), ("equiv", "≡"),
    ("sim", "∼"), ("simeq", "≃"), ("cong", "≅"), ("propto", "∝"),
    ("ll", "≪"), ("gg", "≫"), ("subset", "⊂"), ("supset", "⊃"),
    ("subseteq", "⊆"), ("supseteq", "⊇"), ("in", "∈"), ("notin", "∉"),
    ("ni", "∋"), ("forall", "∀"), ("exists", "∃"), ("nexists", "∄"),
];

const SYMBOLS: &[(&str, &str)] = &[
    ("infty", "∞"), ("pm", "±"), ("mp", "∓"), ("to", "→"),
    ("rightarrow", "→"), ("leftarrow", "←"), ("leftrightarrow", "↔"),
    ("Rightarrow", "⇒"), ("Leftarrow", "⇐"), ("Leftrightarrow", "⇔"),
    ("rightleftharpoons", "⇌"), ("uparrow", "↑"), ("downarrow", "↓"),
    ("mapsto", "↦"), ("ldots", "…"), ("cdots", "⋯"), ("vdots", "⋮"),
    ("ddots", "⋱"), ("therefore", "∴"), ("because", "∵"), ("angle", "∠"),
    ("perp", "⊥"), ("parallel", "∥"), ("triangle", "△"), ("square", "□"),
    ("emptyset", "∅"), ("varnothing", "∅"), ("neg", "¬"), ("land", "∧"),
    ("wedge", "∧"), ("lor", "∨"), ("vee", "∨"), ("cap", "∩"),
    ("cup", "∪"), ("setminus", "∖"), ("aleph", "ℵ"), ("hbar", "ℏ"),
    ("ell", "ℓ"), ("Re", "ℜ"), ("Im", "ℑ"), ("prime", "′"),
    ("degree", "°"),
];

/// Sizing and spacing commands with no visible output of their own.
const LAYOUT: &[(&str, &str)] = &[
    ("left", ""), ("right", ""), ("big", ""), ("Big", ""),
    ("displaystyle", ""), ("limits", ""), ("quad", " "), ("qquad", " "),
];

static SUBSCRIPTS: LazyLock<HashMap<char, char>> = LazyLock::new(|| {
    "0123456789+-=()aehijklmnoprstuvx"
        .chars()
        .zip("₀₁₂₃₄₅₆₇₈₉₊₋₌₍₎ₐₑₕᵢⱼₖₗₘₙₒₚᵣₛₜᵤᵥₓ".chars())
        .collect()
});

static SUPERSCRIPTS: LazyLock<HashMap<char, char>> = LazyLock::new(|| {
    "0123456789+-=()abcdefghijklmnoprstuvwxyzT"
        .chars()
        .zip("⁰¹²³⁴⁵⁶⁷⁸⁹⁺⁻⁼⁽⁾ᵃᵇᶜᵈᵉᶠᵍʰⁱʲᵏˡᵐⁿᵒᵖʳˢᵗᵘᵛʷˣʸᶻᵀ".chars())
        .collect()
});
