//! Advance width ratios of the reference typeface.
//!
//! Four tables are selected by (bold, italic). Italic and bold tables only list
//! the characters whose shape changes. Bold italic falls back to bold, and every
//! other table falls back to the regular one.

/// Advance width of `c` as a ratio of the font size, if listed
pub fn width_ratio(c: char, bold: bool, italic: bool) -> Option<f32> {
    let styled = match (bold, italic) {
        (false, false) => None,
        (false, true) => italic_width(c),
        (true, false) => bold_width(c),
        (true, true) => bold_italic_width(c).or_else(|| bold_width(c)),
    };
    styled.or_else(|| regular_width(c))
}

fn regular_width(c: char) -> Option<f32> {
    let w = match c {
        '0'..='9' => 0.5,
        'i' | 'j' | 'l' => 0.28,
        'f' | 't' => 0.33,
        'r' => 0.39,
        's' => 0.39,
        'm' => 0.78,
        'w' => 0.72,
        'a'..='z' => 0.5,
        'I' => 0.33,
        'J' => 0.39,
        'M' => 0.89,
        'W' => 0.94,
        'A'..='Z' => 0.67,
        '+' | '=' | '<' | '>' | '\u{2212}' | '×' | '÷' | '±' | '∓' => 0.78,
        '≤' | '≥' | '≠' | '≈' | '≡' | '∼' | '→' | '←' | '⇒' => 0.78,
        '∗' | '⋅' | '∘' => 0.5,
        '(' | ')' | '[' | ']' => 0.39,
        '{' | '}' => 0.48,
        '⟨' | '⟩' => 0.39,
        '⌊' | '⌋' | '⌈' | '⌉' => 0.44,
        ',' | ';' | '.' | ':' | '|' => 0.28,
        '!' => 0.33,
        '/' => 0.5,
        '\'' | '′' => 0.28,
        '∞' => 1.0,
        '∑' | '∏' => 1.0,
        '∫' | '∮' => 0.56,
        '⋯' | '…' => 1.0,
        '∂' => 0.56,
        '∇' => 0.83,
        _ => return None,
    };
    Some(w)
}

fn italic_width(c: char) -> Option<f32> {
    let w = match c {
        'i' | 'j' | 'l' => 0.3,
        'f' => 0.49,
        'm' => 0.72,
        'w' => 0.67,
        'a'..='z' => 0.5,
        'I' => 0.36,
        'M' | 'W' => 0.83,
        'A'..='Z' => 0.62,
        _ => return None,
    };
    Some(w)
}

fn bold_width(c: char) -> Option<f32> {
    let w = match c {
        '0'..='9' => 0.58,
        'i' | 'j' | 'l' => 0.32,
        'f' | 't' => 0.37,
        'm' => 0.87,
        'w' => 0.79,
        'a'..='z' => 0.56,
        'I' => 0.39,
        'M' => 0.98,
        'W' => 1.03,
        'A'..='Z' => 0.74,
        _ => return None,
    };
    Some(w)
}

fn bold_italic_width(c: char) -> Option<f32> {
    let w = match c {
        'i' | 'j' | 'l' => 0.33,
        'f' => 0.54,
        'm' => 0.81,
        'w' => 0.74,
        'a'..='z' => 0.55,
        'I' => 0.4,
        'M' | 'W' => 0.91,
        'A'..='Z' => 0.68,
        _ => return None,
    };
    Some(w)
}
