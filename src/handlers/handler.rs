//! Command dispatcher
//!
//! Routes each command into the contest service and renders the lines to
//! print. Validation failures become `[Error]` lines; nothing here is fatal.

use crate::{
    constants::messages,
    error::ScoreboardError,
    models::RankingEntry,
    services::contest_service::ContestService,
    state::ContestState,
};

use super::{request::Command, response};

/// Lines produced by one command
#[derive(Debug, Default)]
pub struct HandlerOutput {
    pub lines: Vec<String>,
    /// Final standings, set once END has been handled
    pub standings: Option<Vec<RankingEntry>>,
}

impl HandlerOutput {
    fn line(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            standings: None,
        }
    }

    fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            standings: None,
        }
    }
}

fn rejected(operation: &str, error: &ScoreboardError) -> HandlerOutput {
    tracing::debug!(operation, code = error.error_code(), "Command rejected");
    HandlerOutput::line(error.to_line(operation))
}

/// Apply `command` to `state` and return its output
pub fn handle(state: &mut ContestState, command: Command) -> HandlerOutput {
    tracing::debug!(verb = command.verb(), "Dispatching command");

    match command {
        Command::AddTeam { name } => match ContestService::add_team(state, &name) {
            Ok(()) => HandlerOutput::line(messages::ADD_SUCCESS),
            Err(e) => rejected("Add", &e),
        },

        Command::Start {
            duration,
            problem_count,
        } => match ContestService::start(state, duration, problem_count) {
            Ok(()) => HandlerOutput::line(messages::COMPETITION_STARTS),
            Err(e) => rejected("Start", &e),
        },

        Command::Submit {
            problem,
            team,
            verdict,
            time,
        } => {
            if let Err(e) = ContestService::submit(state, &problem, &team, verdict, time) {
                tracing::warn!(
                    team = %team,
                    problem = %problem,
                    code = e.error_code(),
                    "Submission ignored: {}",
                    e
                );
            }
            HandlerOutput::default()
        }

        Command::Flush => {
            ContestService::flush(state);
            HandlerOutput::line(messages::FLUSH)
        }

        Command::Freeze => match ContestService::freeze(state) {
            Ok(_) => HandlerOutput::line(messages::FREEZE),
            Err(e) => rejected("Freeze", &e),
        },

        Command::Scroll => match ContestService::scroll(state) {
            Ok(report) => {
                let mut lines = vec![messages::SCROLL.to_string()];
                let problems = state.problem_count;
                lines.extend(response::scoreboard_lines(
                    &report.before,
                    &report.before_cells,
                    problems,
                ));
                lines.extend(report.changes.iter().map(response::rank_change_line));
                lines.extend(response::scoreboard_lines(
                    &report.after,
                    &report.after_cells,
                    problems,
                ));
                HandlerOutput::lines(lines)
            }
            Err(e) => rejected("Scroll", &e),
        },

        Command::QueryRanking { team } => match ContestService::query_ranking(state, &team) {
            Ok(query) => {
                let mut lines = vec![messages::QUERY_RANKING.to_string()];
                if query.frozen {
                    lines.push(messages::FROZEN_WARNING.to_string());
                }
                lines.push(response::ranking_line(&team, query.rank));
                HandlerOutput::lines(lines)
            }
            Err(e) => rejected("Query ranking", &e),
        },

        Command::QuerySubmission {
            team,
            problem,
            verdict,
        } => match ContestService::query_submission(state, &team, &problem, &verdict) {
            Ok(found) => HandlerOutput::lines(vec![
                messages::QUERY_SUBMISSION.to_string(),
                found.map_or_else(
                    || messages::SUBMISSION_NOT_FOUND.to_string(),
                    response::submission_line,
                ),
            ]),
            Err(e) => rejected("Query submission", &e),
        },

        Command::End => {
            let standings = ContestService::end(state);
            HandlerOutput {
                lines: vec![messages::COMPETITION_ENDS.to_string()],
                standings: Some(standings),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(state: &mut ContestState, line: &str) -> Vec<String> {
        let command = Command::parse(line).unwrap().unwrap();
        handle(state, command).lines
    }

    #[test]
    fn test_registration_flow() {
        let mut state = ContestState::new();
        assert_eq!(run(&mut state, "ADDTEAM a"), vec!["[Info]Add successfully."]);
        assert_eq!(
            run(&mut state, "ADDTEAM a"),
            vec!["[Error]Add failed: duplicated team name."]
        );
        assert_eq!(
            run(&mut state, "START DURATION 10 PROBLEM 2"),
            vec!["[Info]Competition starts."]
        );
        assert_eq!(
            run(&mut state, "START DURATION 10 PROBLEM 2"),
            vec!["[Error]Start failed: competition has started."]
        );
        assert_eq!(
            run(&mut state, "ADDTEAM b"),
            vec!["[Error]Add failed: competition has started."]
        );
    }

    #[test]
    fn test_submit_is_silent() {
        let mut state = ContestState::new();
        run(&mut state, "ADDTEAM a");
        run(&mut state, "START DURATION 10 PROBLEM 2");
        assert!(run(&mut state, "SUBMIT PROBLEM A BY a WITH Accepted AT 1").is_empty());
        assert!(run(&mut state, "SUBMIT PROBLEM A BY ghost WITH Accepted AT 2").is_empty());
        assert_eq!(state.ledger.len(), 1);
    }

    #[test]
    fn test_freeze_and_scroll_errors() {
        let mut state = ContestState::new();
        assert_eq!(
            run(&mut state, "SCROLL"),
            vec!["[Error]Scroll failed: scoreboard has not been frozen."]
        );
        assert_eq!(run(&mut state, "FREEZE"), vec!["[Info]Freeze scoreboard."]);
        assert_eq!(
            run(&mut state, "FREEZE"),
            vec!["[Error]Freeze failed: scoreboard has been frozen."]
        );
    }

    #[test]
    fn test_scroll_prints_hidden_board_first() {
        let mut state = ContestState::new();
        run(&mut state, "ADDTEAM T");
        run(&mut state, "START DURATION 300 PROBLEM 2");
        run(&mut state, "SUBMIT PROBLEM A BY T WITH Wrong_Answer AT 100");
        run(&mut state, "FREEZE");
        run(&mut state, "SUBMIT PROBLEM A BY T WITH Wrong_Answer AT 150");
        run(&mut state, "SUBMIT PROBLEM A BY T WITH Accepted AT 180");

        assert_eq!(
            run(&mut state, "SCROLL"),
            vec!["[Info]Scroll scoreboard.", "T 1 0 0 1/1 .", "T 1 1 200 +1 ."]
        );
    }

    #[test]
    fn test_queries() {
        let mut state = ContestState::new();
        run(&mut state, "ADDTEAM zeta");
        run(&mut state, "ADDTEAM alpha");
        run(&mut state, "START DURATION 10 PROBLEM 1");

        assert_eq!(
            run(&mut state, "QUERY_RANKING alpha"),
            vec!["[Info]Complete query ranking.", "alpha NOW AT RANKING 1"]
        );
        assert_eq!(
            run(&mut state, "QUERY_RANKING omega"),
            vec!["[Error]Query ranking failed: cannot find the team."]
        );
        assert_eq!(
            run(&mut state, "QUERY_SUBMISSION zeta WITH PROBLEM=ALL AND STATUS=ALL"),
            vec!["[Info]Complete query submission.", "Cannot find any submission."]
        );
        assert_eq!(
            run(&mut state, "QUERY_SUBMISSION omega WITH PROBLEM=ALL AND STATUS=ALL"),
            vec!["[Error]Query submission failed: cannot find the team."]
        );

        run(&mut state, "FREEZE");
        assert_eq!(
            run(&mut state, "QUERY_RANKING zeta"),
            vec![
                "[Info]Complete query ranking.",
                "[Warning]Scoreboard is frozen. The ranking may be inaccurate until it were scrolled.",
                "zeta NOW AT RANKING 2",
            ]
        );
    }

    #[test]
    fn test_end_returns_standings() {
        let mut state = ContestState::new();
        run(&mut state, "ADDTEAM a");
        let output = handle(&mut state, Command::End);
        assert_eq!(output.lines, vec!["[Info]Competition ends."]);
        assert_eq!(output.standings.map(|s| s.len()), Some(1));
    }
}
