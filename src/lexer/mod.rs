use lachs::Span;

// Keyword terminals come before the Ident literal, so every keyword spelling
// is a reserved word. Longest match keeps `=>` from lexing as `=`.
#[lachs::token]
pub enum Token {
    #[terminal("true")]
    True,
    #[terminal("false")]
    False,
    #[terminal("if")]
    If,
    #[terminal("then")]
    Then,
    #[terminal("else")]
    Else,
    #[terminal("fi")]
    Fi,
    #[terminal("call")]
    Call,
    #[terminal("let")]
    Let,
    #[terminal("in")]
    In,
    #[terminal("end")]
    End,
    #[terminal("fun")]
    Fun,
    #[terminal("prog")]
    Prog,
    #[terminal("=>")]
    Arrow,
    #[terminal("(")]
    LParen,
    #[terminal(")")]
    RParen,
    #[terminal(",")]
    Comma,
    #[terminal(";")]
    Semicolon,
    #[terminal("+")]
    Plus,
    #[terminal("-")]
    Minus,
    #[terminal("*")]
    Star,
    #[terminal("/")]
    Slash,
    #[terminal("=")]
    Equals,
    #[terminal("<")]
    LessThan,
    #[terminal(">")]
    GreaterThan,
    #[literal("[A-Za-z][A-Za-z0-9_]*")]
    Ident,
    #[literal("0|[1-9][0-9]*")]
    Number,
}

impl Token {
    pub fn pos(&self) -> Span {
        match self {
            Token::True(inner) => inner.position.clone(),
            Token::False(inner) => inner.position.clone(),
            Token::If(inner) => inner.position.clone(),
            Token::Then(inner) => inner.position.clone(),
            Token::Else(inner) => inner.position.clone(),
            Token::Fi(inner) => inner.position.clone(),
            Token::Call(inner) => inner.position.clone(),
            Token::Let(inner) => inner.position.clone(),
            Token::In(inner) => inner.position.clone(),
            Token::End(inner) => inner.position.clone(),
            Token::Fun(inner) => inner.position.clone(),
            Token::Prog(inner) => inner.position.clone(),
            Token::Arrow(inner) => inner.position.clone(),
            Token::LParen(inner) => inner.position.clone(),
            Token::RParen(inner) => inner.position.clone(),
            Token::Comma(inner) => inner.position.clone(),
            Token::Semicolon(inner) => inner.position.clone(),
            Token::Plus(inner) => inner.position.clone(),
            Token::Minus(inner) => inner.position.clone(),
            Token::Star(inner) => inner.position.clone(),
            Token::Slash(inner) => inner.position.clone(),
            Token::Equals(inner) => inner.position.clone(),
            Token::LessThan(inner) => inner.position.clone(),
            Token::GreaterThan(inner) => inner.position.clone(),
            Token::Ident(inner) => inner.position.clone(),
            Token::Number(inner) => inner.position.clone(),
        }
    }

    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        match self {
            Token::True(_) => "'true'".to_string(),
            Token::False(_) => "'false'".to_string(),
            Token::If(_) => "'if'".to_string(),
            Token::Then(_) => "'then'".to_string(),
            Token::Else(_) => "'else'".to_string(),
            Token::Fi(_) => "'fi'".to_string(),
            Token::Call(_) => "'call'".to_string(),
            Token::Let(_) => "'let'".to_string(),
            Token::In(_) => "'in'".to_string(),
            Token::End(_) => "'end'".to_string(),
            Token::Fun(_) => "'fun'".to_string(),
            Token::Prog(_) => "'prog'".to_string(),
            Token::Arrow(_) => "'=>'".to_string(),
            Token::LParen(_) => "'('".to_string(),
            Token::RParen(_) => "')'".to_string(),
            Token::Comma(_) => "','".to_string(),
            Token::Semicolon(_) => "';'".to_string(),
            Token::Plus(_) => "'+'".to_string(),
            Token::Minus(_) => "'-'".to_string(),
            Token::Star(_) => "'*'".to_string(),
            Token::Slash(_) => "'/'".to_string(),
            Token::Equals(_) => "'='".to_string(),
            Token::LessThan(_) => "'<'".to_string(),
            Token::GreaterThan(_) => "'>'".to_string(),
            Token::Ident(inner) => format!("identifier '{}'", inner.value),
            Token::Number(inner) => format!("number '{}'", inner.value),
        }
    }
}
