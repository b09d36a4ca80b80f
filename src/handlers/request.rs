//! Command parsing

use std::str::SplitWhitespace;

use crate::{
    constants::{verbs, WILDCARD},
    error::ParseError,
    models::Verdict,
    services::ledger::Filter,
};

/// A validated input command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddTeam {
        name: String,
    },
    Start {
        duration: u64,
        problem_count: usize,
    },
    Submit {
        problem: String,
        team: String,
        verdict: Verdict,
        time: u64,
    },
    Flush,
    Freeze,
    Scroll,
    QueryRanking {
        team: String,
    },
    QuerySubmission {
        team: String,
        problem: Filter<String>,
        verdict: Filter<Verdict>,
    },
    End,
}

impl Command {
    /// Parse one input line. Returns `Ok(None)` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let mut tokens = Tokens(line.split_whitespace());
        let Some(verb) = tokens.0.next() else {
            return Ok(None);
        };

        let command = match verb {
            verbs::ADD_TEAM => Self::AddTeam {
                name: tokens.field("team name")?.to_string(),
            },
            verbs::START => {
                tokens.keyword("DURATION")?;
                let duration = tokens.integer("duration")?;
                tokens.keyword("PROBLEM")?;
                let problem_count = tokens.integer("problem count")?;
                Self::Start {
                    duration,
                    problem_count: usize::try_from(problem_count).map_err(|_| {
                        ParseError::InvalidInteger {
                            field: "problem count",
                            value: problem_count.to_string(),
                        }
                    })?,
                }
            }
            verbs::SUBMIT => {
                tokens.keyword("PROBLEM")?;
                let problem = tokens.field("problem")?.to_string();
                tokens.keyword("BY")?;
                let team = tokens.field("team")?.to_string();
                tokens.keyword("WITH")?;
                let verdict = parse_verdict(tokens.field("verdict")?)?;
                tokens.keyword("AT")?;
                let time = tokens.integer("time")?;
                Self::Submit {
                    problem,
                    team,
                    verdict,
                    time,
                }
            }
            verbs::FLUSH => Self::Flush,
            verbs::FREEZE => Self::Freeze,
            verbs::SCROLL => Self::Scroll,
            verbs::QUERY_RANKING => Self::QueryRanking {
                team: tokens.field("team")?.to_string(),
            },
            verbs::QUERY_SUBMISSION => {
                let team = tokens.field("team")?.to_string();
                tokens.keyword("WITH")?;
                let problem = tokens.assignment("PROBLEM")?;
                tokens.keyword("AND")?;
                let verdict = match tokens.assignment("STATUS")? {
                    Filter::Any => Filter::Any,
                    Filter::Exact(value) => Filter::Exact(parse_verdict(&value)?),
                };
                Self::QuerySubmission {
                    team,
                    problem,
                    verdict,
                }
            }
            verbs::END => Self::End,
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }

    /// Verb for logging
    pub fn verb(&self) -> &'static str {
        match self {
            Self::AddTeam { .. } => verbs::ADD_TEAM,
            Self::Start { .. } => verbs::START,
            Self::Submit { .. } => verbs::SUBMIT,
            Self::Flush => verbs::FLUSH,
            Self::Freeze => verbs::FREEZE,
            Self::Scroll => verbs::SCROLL,
            Self::QueryRanking { .. } => verbs::QUERY_RANKING,
            Self::QuerySubmission { .. } => verbs::QUERY_SUBMISSION,
            Self::End => verbs::END,
        }
    }
}

fn parse_verdict(token: &str) -> Result<Verdict, ParseError> {
    Verdict::parse(token).ok_or_else(|| ParseError::UnknownVerdict(token.to_string()))
}

struct Tokens<'a>(SplitWhitespace<'a>);

impl<'a> Tokens<'a> {
    fn field(&mut self, name: &'static str) -> Result<&'a str, ParseError> {
        self.0.next().ok_or(ParseError::MissingField(name))
    }

    fn keyword(&mut self, expected: &'static str) -> Result<(), ParseError> {
        match self.field(expected)? {
            token if token == expected => Ok(()),
            token => Err(ParseError::UnexpectedToken {
                expected,
                found: token.to_string(),
            }),
        }
    }

    fn integer(&mut self, name: &'static str) -> Result<u64, ParseError> {
        let token = self.field(name)?;
        token.parse().map_err(|_| ParseError::InvalidInteger {
            field: name,
            value: token.to_string(),
        })
    }

    /// `KEY=value`, with `ALL` meaning any value
    fn assignment(&mut self, key: &'static str) -> Result<Filter<String>, ParseError> {
        let token = self.field(key)?;
        let value = token
            .strip_prefix(key)
            .and_then(|rest| rest.strip_prefix('='))
            .ok_or_else(|| ParseError::UnexpectedToken {
                expected: key,
                found: token.to_string(),
            })?;

        Ok(if value == WILDCARD {
            Filter::Any
        } else {
            Filter::Exact(value.to_string())
        })
    }
}
