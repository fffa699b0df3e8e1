//! Command template tokenization.
//!
//! A usage string such as `"Log summary <project_alias> <time>"` is split on
//! whitespace into [`Token`]s. Words wrapped in angle brackets are parameters,
//! every other word is a literal that the input must repeat exactly.
//!
//! There is no escaping: a literal word cannot start with `<` and end with `>`.

/// One word of a command template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Literal text, or the parameter name without its brackets
    pub word: String,
    /// Whether the token captures input instead of matching it
    pub is_parameter: bool,
}

impl Token {
    fn parse(word: &str) -> Self {
        match word
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
        {
            Some(name) => Token {
                word: name.to_owned(),
                is_parameter: true,
            },
            None => Token {
                word: word.to_owned(),
                is_parameter: false,
            },
        }
    }
}

/// Splits `usage` into tokens. An empty usage gives no token.
pub fn tokenize(usage: &str) -> Vec<Token> {
    usage.split_whitespace().map(Token::parse).collect()
}
