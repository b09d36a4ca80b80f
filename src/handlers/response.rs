//! Response line formatting

use crate::{
    models::{RankingEntry, Submission},
    services::freeze_service::{CellSnapshot, RankChange},
};

/// Problem labels `A`, `B`, ... for the first `count` problems
pub fn problem_labels(count: usize) -> impl Iterator<Item = String> {
    ('A'..='Z').take(count).map(String::from)
}

/// One scoreboard line per ranked team, cells taken from `cells`
pub fn scoreboard_lines(
    ranking: &[RankingEntry],
    cells: &CellSnapshot,
    problem_count: usize,
) -> Vec<String> {
    ranking
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let team = cells.get(&entry.team_name);
            let mut line = format!(
                "{} {} {} {}",
                entry.team_name,
                index + 1,
                entry.solved_count,
                entry.penalty
            );
            for label in problem_labels(problem_count) {
                let token = team.and_then(|t| t.get(&label)).map_or(".", String::as_str);
                line.push(' ');
                line.push_str(token);
            }
            line
        })
        .collect()
}

pub fn rank_change_line(change: &RankChange) -> String {
    format!(
        "{} {} {} {}",
        change.team, change.displaced, change.solved_count, change.penalty
    )
}

pub fn ranking_line(team: &str, rank: usize) -> String {
    format!("{team} NOW AT RANKING {rank}")
}

pub fn submission_line(submission: &Submission) -> String {
    submission.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use crate::models::{FreezeWindow, Team, Verdict};
    use crate::services::{freeze_service::cell_snapshot, ranking_service::RankingService};

    #[test]
    fn test_problem_labels() {
        let labels: Vec<String> = problem_labels(3).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
        assert_eq!(problem_labels(40).count(), 26);
    }

    #[test]
    fn test_scoreboard_lines() {
        let mut teams = BTreeMap::new();
        let mut alpha = Team::new("alpha");
        alpha
            .status_mut("A")
            .apply_submission(Verdict::WrongAnswer, 3, FreezeWindow::OPEN);
        alpha
            .status_mut("A")
            .apply_submission(Verdict::Accepted, 7, FreezeWindow::OPEN);
        alpha
            .status_mut("C")
            .apply_submission(Verdict::RuntimeError, 9, FreezeWindow::OPEN);
        teams.insert("alpha".to_string(), alpha);
        teams.insert("beta".to_string(), Team::new("beta"));

        let ranking = RankingService::compute(teams.values());
        assert_eq!(
            scoreboard_lines(&ranking, &cell_snapshot(&teams), 3),
            vec!["alpha 1 1 27 +1 . -1", "beta 2 0 0 . . ."]
        );
    }

    #[test]
    fn test_rank_change_line() {
        let change = RankChange {
            team: "c".to_string(),
            displaced: "a".to_string(),
            solved_count: 2,
            penalty: 70,
        };
        assert_eq!(rank_change_line(&change), "c a 2 70");
        assert_eq!(ranking_line("c", 1), "c NOW AT RANKING 1");
    }
}
