//! Per-team problem status

use crate::constants::ICPC_PENALTY_MINUTES;

use super::submission::Verdict;

/// Solve state of one problem for one team
///
/// Attempts are split by the freeze boundary: `attempts_visible` counts
/// rejections recorded in the open, `attempts_hidden` those recorded while
/// the problem was hidden. Once `solved` is set nothing changes any more.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemStatus {
    pub attempts_visible: u32,
    pub attempts_hidden: u32,
    pub solved: bool,
    pub solved_at: Option<u64>,
    pub hidden: bool,
}

/// Freeze parameters in effect when a submission is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreezeWindow {
    pub frozen: bool,
    pub boundary: u64,
}

impl FreezeWindow {
    pub const OPEN: Self = Self {
        frozen: false,
        boundary: 0,
    };

    /// Whether a submission at `time` falls after the freeze boundary
    pub fn hides(&self, time: u64) -> bool {
        self.frozen && time > self.boundary
    }
}

impl ProblemStatus {
    /// Apply one judged submission to this status.
    ///
    /// A hidden Accepted does not mark the problem solved; the solve is
    /// withheld until the scoreboard is scrolled.
    pub fn apply_submission(&mut self, verdict: Verdict, time: u64, window: FreezeWindow) {
        if self.solved {
            return;
        }

        if window.hides(time) {
            self.hidden = true;
            if !verdict.is_accepted() {
                self.attempts_hidden += 1;
            }
        } else if verdict.is_accepted() {
            self.solved = true;
            self.solved_at = Some(time);
        } else {
            self.attempts_visible += 1;
        }
    }

    /// Mark as solved at `time` during reveal
    pub fn reveal_solve(&mut self, time: u64) {
        if !self.solved {
            self.solved = true;
            self.solved_at = Some(time);
        }
    }

    /// Whether this problem counts toward the ranking right now
    pub fn is_visible_solve(&self) -> bool {
        self.solved && !self.hidden
    }

    /// Penalty time: solve time plus 20 per visible rejected attempt
    pub fn penalty(&self) -> u64 {
        match (self.solved, self.solved_at) {
            (true, Some(at)) => ICPC_PENALTY_MINUTES * u64::from(self.attempts_visible) + at,
            _ => 0,
        }
    }

    /// Scoreboard cell for this problem
    pub fn display_token(&self) -> String {
        if self.hidden {
            format!("{}/{}", self.attempts_visible, self.attempts_hidden)
        } else if self.solved {
            match self.attempts_visible {
                0 => "+".to_string(),
                n => format!("+{n}"),
            }
        } else {
            match self.attempts_visible {
                0 => ".".to_string(),
                n => format!("-{n}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frozen_at(boundary: u64) -> FreezeWindow {
        FreezeWindow {
            frozen: true,
            boundary,
        }
    }

    #[test]
    fn test_open_contest_tokens() {
        let mut status = ProblemStatus::default();
        assert_eq!(status.display_token(), ".");

        status.apply_submission(Verdict::WrongAnswer, 10, FreezeWindow::OPEN);
        status.apply_submission(Verdict::RuntimeError, 20, FreezeWindow::OPEN);
        assert_eq!(status.display_token(), "-2");
        assert_eq!(status.penalty(), 0);

        status.apply_submission(Verdict::Accepted, 30, FreezeWindow::OPEN);
        assert_eq!(status.display_token(), "+2");
        assert_eq!(status.penalty(), 70);
    }

    #[test]
    fn test_first_try_solve() {
        let mut status = ProblemStatus::default();
        status.apply_submission(Verdict::Accepted, 15, FreezeWindow::OPEN);
        assert_eq!(status.display_token(), "+");
        assert_eq!(status.penalty(), 15);
    }

    #[test]
    fn test_no_changes_after_solve() {
        let mut status = ProblemStatus::default();
        status.apply_submission(Verdict::WrongAnswer, 5, FreezeWindow::OPEN);
        status.apply_submission(Verdict::Accepted, 9, FreezeWindow::OPEN);
        let solved = status.clone();

        status.apply_submission(Verdict::WrongAnswer, 12, FreezeWindow::OPEN);
        status.apply_submission(Verdict::Accepted, 14, FreezeWindow::OPEN);
        status.apply_submission(Verdict::TimeLimitExceed, 200, frozen_at(100));
        assert_eq!(status, solved);
    }

    #[test]
    fn test_hidden_attempts_keep_slash_token() {
        let mut status = ProblemStatus::default();
        status.apply_submission(Verdict::WrongAnswer, 50, FreezeWindow::OPEN);

        status.apply_submission(Verdict::WrongAnswer, 150, frozen_at(100));
        assert!(status.hidden);
        assert_eq!(status.attempts_hidden, 1);
        assert_eq!(status.display_token(), "1/1");

        status.apply_submission(Verdict::Accepted, 180, frozen_at(100));
        assert!(!status.solved);
        assert_eq!(status.display_token(), "1/1");
    }

    #[test]
    fn test_hidden_accept_only_shows_zero() {
        let mut status = ProblemStatus::default();
        status.apply_submission(Verdict::Accepted, 101, frozen_at(100));
        assert_eq!(status.display_token(), "0/0");
        assert!(!status.is_visible_solve());
    }

    #[test]
    fn test_submission_at_boundary_is_visible() {
        let mut status = ProblemStatus::default();
        status.apply_submission(Verdict::Accepted, 100, frozen_at(100));
        assert!(!status.hidden);
        assert!(status.is_visible_solve());
    }

    #[test]
    fn test_reveal_solve() {
        let mut status = ProblemStatus {
            attempts_visible: 1,
            attempts_hidden: 1,
            hidden: true,
            ..Default::default()
        };
        status.reveal_solve(180);
        status.hidden = false;
        assert_eq!(status.display_token(), "+1");
        assert_eq!(status.solved_at, Some(180));
        assert_eq!(status.penalty(), 200);
    }
}
