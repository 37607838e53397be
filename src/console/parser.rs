//! Recursive-descent parser over the console token stream
//!
//! Each command is one line, one statement. The parser walks the lexed
//! tokens with a cursor and produces a [`Command`]; anything malformed is
//! a [`ParseError`] carrying the offending span for ariadne reporting.

use crate::error::{ParseError, Span};

use super::lexer::{format_token, lex, Token};

/// A parsed console command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `add <type>`: place a new object of a fixture type.
    Add { type_key: String },
    /// `select <id>` / `select none`.
    Select { id: Option<String> },
    /// `move <id> <x> <y>`: raw coordinates, snapped by the editor.
    Move { id: String, x: f64, y: f64 },
    /// `enlarge`: grow the selection one scale step.
    Enlarge,
    /// `shrink`: shrink the selection one scale step.
    Shrink,
    /// `rotate`: quarter turn clockwise.
    Rotate,
    /// `rename "<name>"`.
    Rename { name: String },
    /// `delete`: remove the selection.
    Delete,
    /// `deftype <key> "<label>" <w> <h> ["<real size>" ["<thumbnail>"]]`.
    DefType {
        key: String,
        label: String,
        width: f64,
        height: f64,
        real_world_size: Option<String>,
        thumbnail: Option<String>,
    },
    /// `droptype <key> [confirm]`: remove a fixture type; without
    /// `confirm` the editor treats it as unacknowledged and does nothing.
    DropType { key: String, confirmed: bool },
    /// `types`: print the fixture palette.
    Types,
    /// `list`: print the placed objects.
    List,
    /// `save "<name>"`: snapshot and persist the layout.
    Save { name: String },
    /// `layouts`: fetch and print the saved layouts.
    Layouts,
    /// `load <index>`: replace the collection from the cached list.
    Load { index: usize },
    /// `render "<file>"`: write the current canvas as SVG.
    Render { path: String },
    /// `stock`: print the product catalog with prices.
    Stock,
    /// `dashboard`: print sales metrics, alerts, and top performers.
    Dashboard,
    /// `insight <product-code> "<period>"`: generate a product analysis.
    Insight {
        product_code: String,
        time_period: String,
    },
    /// `team`: print the team roster.
    Team,
    /// `tasks [member]`: list all tasks, or one member's assignments.
    /// The fetched list is cached for `assign`/`status`/`plan`.
    Tasks { member: Option<String> },
    /// `newtask "<action>" "<reason>" <priority>`: create a task by hand.
    NewTask {
        action: String,
        reason: String,
        priority: String,
    },
    /// `assign <index> <member>`: assign a cached task to a team member.
    Assign { index: usize, member: String },
    /// `status <index> <state>`: move a cached task through its lifecycle.
    Status { index: usize, status: String },
    /// `plan <index>`: fetch the step-by-step plan for a cached task.
    Plan { index: usize },
    /// `login <id> "<email>" "<name>" <role>`: sign in locally.
    Login {
        id: String,
        email: String,
        name: String,
        role: String,
    },
    /// `logout`: sign the current user out.
    Logout,
}

/// Parse one console line. Blank lines and comment-only lines yield
/// `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let tokens = lex(line);
    if tokens.is_empty() {
        return Ok(None);
    }
    let mut parser = LineParser {
        tokens,
        pos: 0,
        end: line.len(),
    };
    let command = parser.command()?;
    parser.expect_end()?;
    Ok(Some(command))
}

struct LineParser {
    tokens: Vec<(Token, Span)>,
    pos: usize,
    end: usize,
}

impl LineParser {
    fn peek(&self) -> Option<&(Token, Span)> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<(Token, Span)> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn end_span(&self) -> Span {
        self.end..self.end
    }

    fn unexpected(&self, found: Option<&(Token, Span)>, expected: &[&str]) -> ParseError {
        let expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
        match found {
            Some((tok, span)) => ParseError::syntax(
                span.clone(),
                format!("Unexpected {}", format_token(tok)),
                expected,
            ),
            None => ParseError::syntax(self.end_span(), "Unexpected end of command", expected),
        }
    }

    fn command(&mut self) -> Result<Command, ParseError> {
        let Some((tok, span)) = self.next() else {
            return Err(self.unexpected(None, &["a command keyword"]));
        };
        match tok {
            Token::Add => Ok(Command::Add {
                type_key: self.ident("fixture type key")?,
            }),
            Token::Select => {
                if matches!(self.peek(), Some((Token::None, _))) {
                    self.next();
                    Ok(Command::Select { id: None })
                } else {
                    Ok(Command::Select {
                        id: Some(self.ident("object id or 'none'")?),
                    })
                }
            }
            Token::Move => Ok(Command::Move {
                id: self.ident("object id")?,
                x: self.number("x coordinate")?,
                y: self.number("y coordinate")?,
            }),
            Token::Enlarge => Ok(Command::Enlarge),
            Token::Shrink => Ok(Command::Shrink),
            Token::Rotate => Ok(Command::Rotate),
            Token::Rename => Ok(Command::Rename {
                name: self.string("quoted name")?,
            }),
            Token::Delete => Ok(Command::Delete),
            Token::DefType => {
                let key = self.ident("fixture type key")?;
                let label = self.string("quoted label")?;
                let width = self.number("base width")?;
                let height = self.number("base height")?;
                let real_world_size = self.optional_string();
                let thumbnail = self.optional_string();
                Ok(Command::DefType {
                    key,
                    label,
                    width,
                    height,
                    real_world_size,
                    thumbnail,
                })
            }
            Token::DropType => {
                let key = self.ident("fixture type key")?;
                let confirmed = if matches!(self.peek(), Some((Token::Confirm, _))) {
                    self.next();
                    true
                } else {
                    false
                };
                Ok(Command::DropType { key, confirmed })
            }
            Token::Types => Ok(Command::Types),
            Token::List => Ok(Command::List),
            Token::Save => Ok(Command::Save {
                name: self.string("quoted layout name")?,
            }),
            Token::Layouts => Ok(Command::Layouts),
            Token::Load => Ok(Command::Load {
                index: self.index("layout index")?,
            }),
            Token::Render => Ok(Command::Render {
                path: self.string("quoted output path")?,
            }),
            Token::Stock => Ok(Command::Stock),
            Token::Dashboard => Ok(Command::Dashboard),
            Token::Insight => Ok(Command::Insight {
                product_code: self.ident("product code")?,
                time_period: self.string("quoted time period")?,
            }),
            Token::Team => Ok(Command::Team),
            Token::Tasks => {
                let member = match self.peek() {
                    Some((Token::Ident(_), _)) => Some(self.ident("member id")?),
                    _ => None,
                };
                Ok(Command::Tasks { member })
            }
            Token::NewTask => Ok(Command::NewTask {
                action: self.string("quoted action")?,
                reason: self.string("quoted reason")?,
                priority: self.ident("a priority (low, medium, high)")?,
            }),
            Token::Assign => Ok(Command::Assign {
                index: self.index("task index")?,
                member: self.ident("member id")?,
            }),
            Token::Status => Ok(Command::Status {
                index: self.index("task index")?,
                status: self.ident("a status (pending, in_progress, completed)")?,
            }),
            Token::Plan => Ok(Command::Plan {
                index: self.index("task index")?,
            }),
            Token::Login => Ok(Command::Login {
                id: self.ident("user id")?,
                email: self.string("quoted email")?,
                name: self.string("quoted name")?,
                role: self.ident("a role (associate, manager, visual_merchandiser)")?,
            }),
            Token::Logout => Ok(Command::Logout),
            other => Err(ParseError::syntax(
                span,
                format!("Unknown command {}", format_token(&other)),
                vec!["a command keyword".to_string()],
            )),
        }
    }

    fn ident(&mut self, what: &str) -> Result<String, ParseError> {
        match self.next() {
            Some((Token::Ident(s), _)) => Ok(s),
            found => Err(self.unexpected(found.as_ref(), &[what])),
        }
    }

    fn string(&mut self, what: &str) -> Result<String, ParseError> {
        match self.next() {
            Some((Token::String(s), _)) => Ok(s),
            found => Err(self.unexpected(found.as_ref(), &[what])),
        }
    }

    fn number(&mut self, what: &str) -> Result<f64, ParseError> {
        self.raw_number(what).map(|(value, _)| value)
    }

    fn raw_number(&mut self, what: &str) -> Result<(f64, Span), ParseError> {
        match self.next() {
            Some((Token::Number(n), span)) => Ok((n, span)),
            found => Err(self.unexpected(found.as_ref(), &[what])),
        }
    }

    /// A 1-based list index.
    fn index(&mut self, what: &str) -> Result<usize, ParseError> {
        let (value, span) = self.raw_number(what)?;
        if value < 1.0 || value.fract() != 0.0 {
            return Err(ParseError::syntax(
                span,
                "Index must be a positive integer",
                vec![format!("a 1-based {}", what)],
            ));
        }
        Ok(value as usize)
    }

    fn optional_string(&mut self) -> Option<String> {
        match self.peek() {
            Some((Token::String(_), _)) => match self.next() {
                Some((Token::String(s), _)) => Some(s),
                _ => None,
            },
            _ => None,
        }
    }

    fn expect_end(&mut self) -> Result<(), ParseError> {
        match self.peek() {
            None => Ok(()),
            Some((tok, span)) => Err(ParseError::syntax(
                span.clone(),
                format!("Trailing {} after command", format_token(tok)),
                vec!["end of line".to_string()],
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_add() {
        let cmd = parse_line("add rack").unwrap().unwrap();
        assert_eq!(
            cmd,
            Command::Add {
                type_key: "rack".to_string()
            }
        );
    }

    #[test]
    fn test_parse_select_and_clear() {
        assert_eq!(
            parse_line("select rack-1").unwrap().unwrap(),
            Command::Select {
                id: Some("rack-1".to_string())
            }
        );
        assert_eq!(
            parse_line("select none").unwrap().unwrap(),
            Command::Select { id: None }
        );
    }

    #[test]
    fn test_parse_move() {
        let cmd = parse_line("move rack-1 412 287.5").unwrap().unwrap();
        assert_eq!(
            cmd,
            Command::Move {
                id: "rack-1".to_string(),
                x: 412.0,
                y: 287.5
            }
        );
    }

    #[test]
    fn test_parse_deftype_with_optional_fields() {
        let cmd = parse_line(r#"deftype shelf "Wall Shelf" 100 20 "2.5m x 0.5m""#)
            .unwrap()
            .unwrap();
        assert_eq!(
            cmd,
            Command::DefType {
                key: "shelf".to_string(),
                label: "Wall Shelf".to_string(),
                width: 100.0,
                height: 20.0,
                real_world_size: Some("2.5m x 0.5m".to_string()),
                thumbnail: None,
            }
        );
    }

    #[test]
    fn test_parse_droptype_confirmation() {
        assert_eq!(
            parse_line("droptype rack confirm").unwrap().unwrap(),
            Command::DropType {
                key: "rack".to_string(),
                confirmed: true
            }
        );
        assert_eq!(
            parse_line("droptype rack").unwrap().unwrap(),
            Command::DropType {
                key: "rack".to_string(),
                confirmed: false
            }
        );
    }

    #[test]
    fn test_parse_save_load_layouts() {
        assert_eq!(
            parse_line(r#"save "Monday floor set""#).unwrap().unwrap(),
            Command::Save {
                name: "Monday floor set".to_string()
            }
        );
        assert_eq!(
            parse_line("load 2").unwrap().unwrap(),
            Command::Load { index: 2 }
        );
        assert_eq!(parse_line("layouts").unwrap().unwrap(), Command::Layouts);
    }

    #[test]
    fn test_parse_backend_commands() {
        assert_eq!(parse_line("stock").unwrap().unwrap(), Command::Stock);
        assert_eq!(parse_line("dashboard").unwrap().unwrap(), Command::Dashboard);
        assert_eq!(parse_line("team").unwrap().unwrap(), Command::Team);
        assert_eq!(
            parse_line("tasks").unwrap().unwrap(),
            Command::Tasks { member: None }
        );
        assert_eq!(
            parse_line("tasks sarah").unwrap().unwrap(),
            Command::Tasks {
                member: Some("sarah".to_string())
            }
        );
        assert_eq!(
            parse_line(r#"insight TSH-WHT-001 "12weeks""#).unwrap().unwrap(),
            Command::Insight {
                product_code: "TSH-WHT-001".to_string(),
                time_period: "12weeks".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_task_commands() {
        assert_eq!(
            parse_line(r#"newtask "Move rack to entrance" "High traffic" high"#)
                .unwrap()
                .unwrap(),
            Command::NewTask {
                action: "Move rack to entrance".to_string(),
                reason: "High traffic".to_string(),
                priority: "high".to_string(),
            }
        );
        assert_eq!(
            parse_line("assign 2 mike").unwrap().unwrap(),
            Command::Assign {
                index: 2,
                member: "mike".to_string()
            }
        );
        assert_eq!(
            parse_line("status 1 in_progress").unwrap().unwrap(),
            Command::Status {
                index: 1,
                status: "in_progress".to_string()
            }
        );
        assert_eq!(
            parse_line("plan 3").unwrap().unwrap(),
            Command::Plan { index: 3 }
        );
        assert!(parse_line("assign 0 mike").is_err());
    }

    #[test]
    fn test_parse_login_logout() {
        assert_eq!(
            parse_line(r#"login sarah "sarah@store.com" "Sarah Chen" visual_merchandiser"#)
                .unwrap()
                .unwrap(),
            Command::Login {
                id: "sarah".to_string(),
                email: "sarah@store.com".to_string(),
                name: "Sarah Chen".to_string(),
                role: "visual_merchandiser".to_string(),
            }
        );
        assert_eq!(parse_line("logout").unwrap().unwrap(), Command::Logout);
        // Email carries characters outside the ident alphabet, so it must
        // be quoted.
        assert!(parse_line(r#"login sarah sarah@store.com "Sarah" manager"#).is_err());
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("// just a note").unwrap(), None);
    }

    #[test]
    fn test_missing_argument_is_error() {
        let err = parse_line("add").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { .. }));
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        let err = parse_line("rotate rack-1").unwrap_err();
        let ParseError::Syntax { message, .. } = err;
        assert!(message.contains("Trailing"));
    }

    #[test]
    fn test_load_index_must_be_positive_integer() {
        assert!(parse_line("load 0").is_err());
        assert!(parse_line("load 1.5").is_err());
    }

    #[test]
    fn test_rename_requires_quoted_string() {
        assert!(parse_line("rename FrontRack").is_err());
        assert_eq!(
            parse_line(r#"rename "Front Rack""#).unwrap().unwrap(),
            Command::Rename {
                name: "Front Rack".to_string()
            }
        );
    }
}
