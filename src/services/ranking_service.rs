//! Ranking engine

use std::collections::BTreeMap;

use crate::models::{RankingEntry, Team};

/// Ranking service for standings computation
pub struct RankingService;

impl RankingService {
    /// Compute a fresh ranking over all teams from their visible statuses
    pub fn compute<'a>(teams: impl IntoIterator<Item = &'a Team>) -> Vec<RankingEntry> {
        let mut ranking: Vec<RankingEntry> = teams.into_iter().map(RankingEntry::from_team).collect();
        ranking.sort_by(RankingEntry::rank_cmp);
        ranking
    }

    /// 1-based position of `team` in `ranking`
    pub fn position_of(ranking: &[RankingEntry], team: &str) -> Option<usize> {
        ranking
            .iter()
            .position(|entry| entry.team_name == team)
            .map(|index| index + 1)
    }

    /// 1-based position of `team` in plain name order, used before any flush
    pub fn lexicographic_position(teams: &BTreeMap<String, Team>, team: &str) -> Option<usize> {
        teams
            .keys()
            .position(|name| name == team)
            .map(|index| index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FreezeWindow, Verdict};

    fn team_with(name: &str, subs: &[(&str, Verdict, u64)]) -> Team {
        let mut team = Team::new(name);
        for (problem, verdict, time) in subs {
            team.status_mut(problem)
                .apply_submission(*verdict, *time, FreezeWindow::OPEN);
        }
        team
    }

    fn names(ranking: &[RankingEntry]) -> Vec<&str> {
        ranking.iter().map(|e| e.team_name.as_str()).collect()
    }

    #[test]
    fn test_full_ordering() {
        let teams = vec![
            team_with("delta", &[]),
            team_with("gamma", &[("A", Verdict::Accepted, 10)]),
            team_with(
                "beta",
                &[("A", Verdict::Accepted, 30), ("B", Verdict::Accepted, 10)],
            ),
            team_with(
                "alpha",
                &[("A", Verdict::Accepted, 25), ("B", Verdict::Accepted, 15)],
            ),
            team_with("charlie", &[]),
        ];

        let ranking = RankingService::compute(&teams);
        assert_eq!(
            names(&ranking),
            vec!["alpha", "beta", "gamma", "charlie", "delta"]
        );
        assert_eq!(ranking[0].penalty, 40);
        assert_eq!(ranking[0].solve_times, vec![25, 15]);
    }

    #[test]
    fn test_recompute_is_stable() {
        let teams = vec![
            team_with("b", &[("A", Verdict::WrongAnswer, 1), ("A", Verdict::Accepted, 5)]),
            team_with("a", &[("A", Verdict::Accepted, 25)]),
            team_with("c", &[("A", Verdict::Accepted, 25)]),
        ];
        let first = RankingService::compute(&teams);
        let second = RankingService::compute(&teams);
        assert_eq!(first, second);
        // Equal penalties (25 each): b's earlier solve time ranks it first
        assert_eq!(names(&first), vec!["b", "a", "c"]);
        assert_eq!(first[0].penalty, 25);
    }

    #[test]
    fn test_positions() {
        let mut teams = BTreeMap::new();
        teams.insert("zeta".to_string(), team_with("zeta", &[("A", Verdict::Accepted, 1)]));
        teams.insert("alpha".to_string(), team_with("alpha", &[]));

        assert_eq!(RankingService::lexicographic_position(&teams, "alpha"), Some(1));
        assert_eq!(RankingService::lexicographic_position(&teams, "zeta"), Some(2));
        assert_eq!(RankingService::lexicographic_position(&teams, "nope"), None);

        let ranking = RankingService::compute(teams.values());
        assert_eq!(RankingService::position_of(&ranking, "zeta"), Some(1));
        assert_eq!(RankingService::position_of(&ranking, "alpha"), Some(2));
    }
}
