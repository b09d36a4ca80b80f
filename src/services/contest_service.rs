//! Contest service

use crate::{
    constants::MAX_PROBLEM_COUNT,
    error::{AppResult, ScoreboardError},
    models::{RankingEntry, Submission, Team, Verdict},
    services::{
        freeze_service::ScrollReport,
        ledger::Filter,
        ranking_service::RankingService,
    },
    state::ContestState,
};

/// Result of a ranking query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingQuery {
    pub rank: usize,
    pub frozen: bool,
}

/// Contest service for business logic
pub struct ContestService;

impl ContestService {
    /// Register a team before the contest starts
    pub fn add_team(state: &mut ContestState, name: &str) -> AppResult<()> {
        if state.started {
            return Err(ScoreboardError::CompetitionAlreadyStarted);
        }
        if state.teams.contains_key(name) {
            return Err(ScoreboardError::DuplicateTeam);
        }

        state.teams.insert(name.to_string(), Team::new(name));
        // A snapshot taken before this registration no longer covers every team
        state.last_ranking = None;
        tracing::debug!(team = name, "Team registered");
        Ok(())
    }

    /// Start the contest
    pub fn start(state: &mut ContestState, duration: u64, problem_count: usize) -> AppResult<()> {
        if state.started {
            return Err(ScoreboardError::CompetitionAlreadyStarted);
        }

        let capped = problem_count.min(MAX_PROBLEM_COUNT);
        if capped != problem_count {
            tracing::warn!(problem_count, "Problem count capped at {}", MAX_PROBLEM_COUNT);
        }

        state.started = true;
        state.duration = Some(duration);
        state.problem_count = capped;
        tracing::info!(
            duration,
            problem_count = capped,
            teams = state.teams.len(),
            "Competition started"
        );
        Ok(())
    }

    /// Record a submission and update the team's problem status
    pub fn submit(
        state: &mut ContestState,
        problem: &str,
        team_name: &str,
        verdict: Verdict,
        time: u64,
    ) -> AppResult<()> {
        let team = state
            .teams
            .get_mut(team_name)
            .ok_or(ScoreboardError::TeamNotFound)?;

        let id = state.ledger.record(problem, team_name, verdict, time).id;
        team.submissions.push(id);

        let window = state.freeze.window();
        team.status_mut(problem).apply_submission(verdict, time, window);

        tracing::debug!(
            id,
            team = team_name,
            problem,
            %verdict,
            time,
            hidden = window.hides(time),
            "Submission recorded"
        );
        Ok(())
    }

    /// Recompute and store the ranking snapshot
    pub fn flush(state: &mut ContestState) -> &[RankingEntry] {
        let ranking = RankingService::compute(state.teams.values());
        state.last_ranking.insert(ranking)
    }

    pub fn freeze(state: &mut ContestState) -> AppResult<u64> {
        state.freeze.freeze(&state.ledger)
    }

    /// Reveal hidden results; the post-reveal ranking becomes the snapshot
    pub fn scroll(state: &mut ContestState) -> AppResult<ScrollReport> {
        let report = state.freeze.scroll(&mut state.teams, &state.ledger)?;
        state.last_ranking = Some(report.after.clone());
        Ok(report)
    }

    /// Team's rank in the last snapshot, or in name order before any flush
    pub fn query_ranking(state: &ContestState, team: &str) -> AppResult<RankingQuery> {
        if !state.teams.contains_key(team) {
            return Err(ScoreboardError::TeamNotFound);
        }

        let rank = match &state.last_ranking {
            Some(ranking) => RankingService::position_of(ranking, team),
            None => RankingService::lexicographic_position(&state.teams, team),
        }
        .ok_or(ScoreboardError::TeamNotFound)?;

        Ok(RankingQuery {
            rank,
            frozen: state.freeze.is_frozen(),
        })
    }

    /// Latest submission of `team` matching the filters
    pub fn query_submission<'a>(
        state: &'a ContestState,
        team: &str,
        problem: &Filter<String>,
        verdict: &Filter<Verdict>,
    ) -> AppResult<Option<&'a Submission>> {
        if !state.teams.contains_key(team) {
            return Err(ScoreboardError::TeamNotFound);
        }
        Ok(state.ledger.find_latest_matching(team, problem, verdict))
    }

    /// End the competition; returns the final visible standings
    pub fn end(state: &mut ContestState) -> Vec<RankingEntry> {
        state.ended = true;
        let standings = RankingService::compute(state.teams.values());
        tracing::info!(
            submissions = state.ledger.len(),
            duration = ?state.duration,
            phase = ?state.freeze.phase(),
            "Competition ended"
        );
        standings
    }
}
