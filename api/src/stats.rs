//! Derived dashboard statistics. Pure functions of the current milestone
//! collection — nothing here is cached or persisted.

use chrono::NaiveDate;

use crate::models::Milestone;

/// Aggregate counts shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Completion percentage, rounded to the nearest integer. 0 when there
    /// are no milestones.
    pub rate: u32,
    /// Pending milestones whose target date falls within the next 7 days,
    /// inclusive of both endpoints.
    pub upcoming: usize,
}

impl DashboardStats {
    /// Recompute from the latest collection.
    pub fn compute(milestones: &[Milestone], today: NaiveDate) -> Self {
        let total = milestones.len();
        let completed = milestones.iter().filter(|m| m.completed).count();
        let pending = total - completed;
        let rate = if total > 0 {
            (completed as f64 / total as f64 * 100.0).round() as u32
        } else {
            0
        };
        let upcoming = milestones.iter().filter(|m| m.is_upcoming(today)).count();

        Self {
            total,
            completed,
            pending,
            rate,
            upcoming,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn milestone(id: i64, completed: bool, achieve_date: Option<&str>) -> Milestone {
        Milestone {
            id,
            title: format!("m{id}"),
            description: None,
            completed,
            achieve_date: achieve_date.map(date),
            created_date: None,
            completed_date: None,
            user_id: 1,
        }
    }

    #[test]
    fn test_empty_collection_is_all_zero() {
        let stats = DashboardStats::compute(&[], date("2025-01-01"));
        assert_eq!(stats, DashboardStats::default());
    }

    #[test]
    fn test_completed_plus_pending_is_total() {
        let items = vec![
            milestone(1, true, None),
            milestone(2, false, None),
            milestone(3, false, None),
        ];
        let stats = DashboardStats::compute(&items, date("2025-01-01"));
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed + stats.pending, stats.total);
    }

    #[test]
    fn test_rate_rounds_to_nearest() {
        let items = vec![
            milestone(1, true, None),
            milestone(2, false, None),
            milestone(3, false, None),
        ];
        // 1/3 -> 33.33 -> 33
        assert_eq!(DashboardStats::compute(&items, date("2025-01-01")).rate, 33);

        let items = vec![
            milestone(1, true, None),
            milestone(2, true, None),
            milestone(3, false, None),
        ];
        // 2/3 -> 66.67 -> 67
        assert_eq!(DashboardStats::compute(&items, date("2025-01-01")).rate, 67);
    }

    #[test]
    fn test_upcoming_window_is_inclusive() {
        let today = date("2025-01-01");
        let items = vec![
            milestone(1, false, Some("2025-01-01")), // today: counts
            milestone(2, false, Some("2025-01-08")), // today + 7: counts
            milestone(3, false, Some("2025-01-09")), // past the window
            milestone(4, false, Some("2024-12-31")), // already overdue
            milestone(5, true, Some("2025-01-03")),  // completed: never upcoming
            milestone(6, false, None),               // no target date
        ];
        let stats = DashboardStats::compute(&items, today);
        assert_eq!(stats.upcoming, 2);
    }
}
