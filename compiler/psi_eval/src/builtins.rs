//! The builtin operator table.
//!
//! Keywords are matched case-insensitively. A user definition with the
//! same name shadows the builtin, because dictionary lookup runs first.

/// Every operator the interpreter knows without a definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    // Stack
    Exch,
    Pop,
    Copy,
    Dup,
    Clear,
    Count,
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Idiv,
    Mod,
    Abs,
    Neg,
    Ceiling,
    Floor,
    Round,
    Sqrt,
    // Dictionaries
    Dict,
    Maxlength,
    Begin,
    End,
    Def,
    Dyn,
    Lex,
    // Strings
    Length,
    Get,
    Getinterval,
    Putinterval,
    // Comparison and logic
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
    And,
    Or,
    Not,
    True,
    False,
    // Flow control
    If,
    Ifelse,
    For,
    Repeat,
    Quit,
    // Output
    Print,
    Equals,
    DoubleEquals,
}

const TABLE: &[(&str, Builtin)] = &[
    ("exch", Builtin::Exch),
    ("pop", Builtin::Pop),
    ("copy", Builtin::Copy),
    ("dup", Builtin::Dup),
    ("clear", Builtin::Clear),
    ("count", Builtin::Count),
    ("add", Builtin::Add),
    ("sub", Builtin::Sub),
    ("mul", Builtin::Mul),
    ("div", Builtin::Div),
    ("idiv", Builtin::Idiv),
    ("mod", Builtin::Mod),
    ("abs", Builtin::Abs),
    ("neg", Builtin::Neg),
    ("ceiling", Builtin::Ceiling),
    ("floor", Builtin::Floor),
    ("round", Builtin::Round),
    ("sqrt", Builtin::Sqrt),
    ("dict", Builtin::Dict),
    ("maxlength", Builtin::Maxlength),
    ("begin", Builtin::Begin),
    ("end", Builtin::End),
    ("def", Builtin::Def),
    ("dyn", Builtin::Dyn),
    ("lex", Builtin::Lex),
    ("length", Builtin::Length),
    ("get", Builtin::Get),
    ("getinterval", Builtin::Getinterval),
    ("putinterval", Builtin::Putinterval),
    ("eq", Builtin::Eq),
    ("ne", Builtin::Ne),
    ("gt", Builtin::Gt),
    ("lt", Builtin::Lt),
    ("ge", Builtin::Ge),
    ("le", Builtin::Le),
    ("and", Builtin::And),
    ("or", Builtin::Or),
    ("not", Builtin::Not),
    ("true", Builtin::True),
    ("false", Builtin::False),
    ("if", Builtin::If),
    ("ifelse", Builtin::Ifelse),
    ("for", Builtin::For),
    ("repeat", Builtin::Repeat),
    ("quit", Builtin::Quit),
    ("print", Builtin::Print),
    ("=", Builtin::Equals),
    ("==", Builtin::DoubleEquals),
];

impl Builtin {
    /// Look up a keyword, ignoring ASCII case.
    pub fn lookup(word: &str) -> Option<Builtin> {
        TABLE
            .iter()
            .find(|(keyword, _)| keyword.eq_ignore_ascii_case(word))
            .map(|&(_, builtin)| builtin)
    }

    /// Canonical lower-case keyword. `pop` and the output operators report
    /// errors under this name whatever case the source used.
    pub fn name(self) -> &'static str {
        TABLE
            .iter()
            .find(|&&(_, builtin)| builtin == self)
            .map_or("?", |&(keyword, _)| keyword)
    }

    /// All builtins in table order.
    #[cfg(test)]
    pub fn all() -> impl Iterator<Item = Builtin> {
        TABLE.iter().map(|&(_, builtin)| builtin)
    }
}
