//! Command symbol table and literal character classes
use super::ast::AtomType;

/// Glyph and spacing class of a symbol command such as `\alpha` or `\leq`
pub fn lookup(name: &str) -> Option<(char, AtomType)> {
    use AtomType::*;
    let sym = match name {
        // lowercase greek
        "alpha" => ('α', Ord),
        "beta" => ('β', Ord),
        "gamma" => ('γ', Ord),
        "delta" => ('δ', Ord),
        "epsilon" => ('ε', Ord),
        "zeta" => ('ζ', Ord),
        "eta" => ('η', Ord),
        "theta" => ('θ', Ord),
        "iota" => ('ι', Ord),
        "kappa" => ('κ', Ord),
        "lambda" => ('λ', Ord),
        "mu" => ('μ', Ord),
        "nu" => ('ν', Ord),
        "xi" => ('ξ', Ord),
        "pi" => ('π', Ord),
        "rho" => ('ρ', Ord),
        "sigma" => ('σ', Ord),
        "tau" => ('τ', Ord),
        "upsilon" => ('υ', Ord),
        "phi" => ('φ', Ord),
        "chi" => ('χ', Ord),
        "psi" => ('ψ', Ord),
        "omega" => ('ω', Ord),
        // uppercase greek
        "Gamma" => ('Γ', Ord),
        "Delta" => ('Δ', Ord),
        "Theta" => ('Θ', Ord),
        "Lambda" => ('Λ', Ord),
        "Xi" => ('Ξ', Ord),
        "Pi" => ('Π', Ord),
        "Sigma" => ('Σ', Ord),
        "Phi" => ('Φ', Ord),
        "Psi" => ('Ψ', Ord),
        "Omega" => ('Ω', Ord),
        // binary operators
        "times" => ('×', Bin),
        "cdot" => ('⋅', Bin),
        "pm" => ('±', Bin),
        "mp" => ('∓', Bin),
        "div" => ('÷', Bin),
        "ast" => ('∗', Bin),
        "circ" => ('∘', Bin),
        "cup" => ('∪', Bin),
        "cap" => ('∩', Bin),
        // relations
        "leq" | "le" => ('≤', Rel),
        "geq" | "ge" => ('≥', Rel),
        "neq" | "ne" => ('≠', Rel),
        "approx" => ('≈', Rel),
        "equiv" => ('≡', Rel),
        "sim" => ('∼', Rel),
        "propto" => ('∝', Rel),
        "to" | "rightarrow" => ('→', Rel),
        "leftarrow" => ('←', Rel),
        "Rightarrow" => ('⇒', Rel),
        "in" => ('∈', Rel),
        "subset" => ('⊂', Rel),
        // ordinary symbols
        "infty" => ('∞', Ord),
        "partial" => ('∂', Ord),
        "nabla" => ('∇', Ord),
        "forall" => ('∀', Ord),
        "exists" => ('∃', Ord),
        "emptyset" => ('∅', Ord),
        "prime" => ('′', Ord),
        // large operators
        "sum" => ('∑', Op),
        "prod" => ('∏', Op),
        "int" => ('∫', Op),
        "oint" => ('∮', Op),
        // inner
        "cdots" => ('⋯', Inner),
        "ldots" | "dots" => ('…', Inner),
        // brackets
        "langle" => ('⟨', Open),
        "rangle" => ('⟩', Close),
        "lfloor" => ('⌊', Open),
        "rfloor" => ('⌋', Close),
        "lceil" => ('⌈', Open),
        "rceil" => ('⌉', Close),
        // punctuation
        "colon" => (':', Punct),
        _ => return None,
    };
    Some(sym)
}

/// Displayed glyph and spacing class of a literal character
pub fn literal(c: char) -> (char, AtomType) {
    match c {
        '+' => ('+', AtomType::Bin),
        '-' => ('\u{2212}', AtomType::Bin),
        '*' => ('∗', AtomType::Bin),
        '=' | '<' | '>' => (c, AtomType::Rel),
        ',' | ';' => (c, AtomType::Punct),
        '(' | '[' => (c, AtomType::Open),
        ')' | ']' => (c, AtomType::Close),
        '&' => (c, AtomType::Sep),
        _ => (c, AtomType::Ord),
    }
}

/// Closing counterpart of a bracket that opens a balanced scan
pub fn closing_bracket(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        _ => None,
    }
}
