//! Lexer for console commands using logos

use logos::Logos;

use crate::error::Span;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")]
pub enum Token {
    // Object commands
    #[token("add")]
    Add,
    #[token("select")]
    Select,
    #[token("none")]
    None,
    #[token("move")]
    Move,
    #[token("enlarge")]
    Enlarge,
    #[token("shrink")]
    Shrink,
    #[token("rotate")]
    Rotate,
    #[token("rename")]
    Rename,
    #[token("delete")]
    Delete,

    // Catalog commands
    #[token("deftype")]
    DefType,
    #[token("droptype")]
    DropType,
    #[token("confirm")]
    Confirm,
    #[token("types")]
    Types,

    // Layout commands
    #[token("save")]
    Save,
    #[token("load")]
    Load,
    #[token("layouts")]
    Layouts,
    #[token("list")]
    List,
    #[token("render")]
    Render,

    // Backend commands
    #[token("stock")]
    Stock,
    #[token("dashboard")]
    Dashboard,
    #[token("insight")]
    Insight,
    #[token("team")]
    Team,
    #[token("tasks")]
    Tasks,
    #[token("newtask")]
    NewTask,
    #[token("assign")]
    Assign,
    #[token("status")]
    Status,
    #[token("plan")]
    Plan,

    // Session commands
    #[token("login")]
    Login,
    #[token("logout")]
    Logout,

    // Literals - identifiers must come after keywords
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*", |lex| lex.slice().to_string(), priority = 1)]
    Ident(String),

    #[regex(r#""([^"\\]|\\.)*""#, |lex| {
        let s = lex.slice();
        s[1..s.len()-1].to_string()
    })]
    String(String),

    #[regex(r"-?[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    // Comments (skip)
    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,
}

/// Format a token for human-readable error messages
pub fn format_token(tok: &Token) -> String {
    match tok {
        Token::Ident(s) => format!("identifier '{}'", s),
        Token::String(s) => format!("string \"{}\"", s),
        Token::Number(n) => format!("number {}", n),
        Token::Add => "keyword 'add'".to_string(),
        Token::Select => "keyword 'select'".to_string(),
        Token::None => "keyword 'none'".to_string(),
        Token::Move => "keyword 'move'".to_string(),
        Token::Enlarge => "keyword 'enlarge'".to_string(),
        Token::Shrink => "keyword 'shrink'".to_string(),
        Token::Rotate => "keyword 'rotate'".to_string(),
        Token::Rename => "keyword 'rename'".to_string(),
        Token::Delete => "keyword 'delete'".to_string(),
        Token::DefType => "keyword 'deftype'".to_string(),
        Token::DropType => "keyword 'droptype'".to_string(),
        Token::Confirm => "keyword 'confirm'".to_string(),
        Token::Types => "keyword 'types'".to_string(),
        Token::Save => "keyword 'save'".to_string(),
        Token::Load => "keyword 'load'".to_string(),
        Token::Layouts => "keyword 'layouts'".to_string(),
        Token::List => "keyword 'list'".to_string(),
        Token::Render => "keyword 'render'".to_string(),
        Token::Stock => "keyword 'stock'".to_string(),
        Token::Dashboard => "keyword 'dashboard'".to_string(),
        Token::Insight => "keyword 'insight'".to_string(),
        Token::Team => "keyword 'team'".to_string(),
        Token::Tasks => "keyword 'tasks'".to_string(),
        Token::NewTask => "keyword 'newtask'".to_string(),
        Token::Assign => "keyword 'assign'".to_string(),
        Token::Status => "keyword 'status'".to_string(),
        Token::Plan => "keyword 'plan'".to_string(),
        Token::Login => "keyword 'login'".to_string(),
        Token::Logout => "keyword 'logout'".to_string(),
        Token::LineComment => "comment".to_string(),
    }
}

/// Lex one command line into tokens with spans
pub fn lex(input: &str) -> Vec<(Token, Span)> {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_keywords() {
        let tokens: Vec<_> = lex("add select move delete").into_iter().map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![Token::Add, Token::Select, Token::Move, Token::Delete]
        );
    }

    #[test]
    fn test_ident_with_dash_stays_whole() {
        let tokens: Vec<_> = lex("select rack-1").into_iter().map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![Token::Select, Token::Ident("rack-1".to_string())]
        );
    }

    #[test]
    fn test_numbers_and_strings() {
        let tokens: Vec<_> = lex(r#"move rack-1 412 -20.5 "Front Rack""#)
            .into_iter()
            .map(|(t, _)| t)
            .collect();
        assert_eq!(
            tokens,
            vec![
                Token::Move,
                Token::Ident("rack-1".to_string()),
                Token::Number(412.0),
                Token::Number(-20.5),
                Token::String("Front Rack".to_string()),
            ]
        );
    }

    #[test]
    fn test_comment_skipped() {
        let tokens = lex("rotate // quarter turn");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].0, Token::Rotate);
    }
}
