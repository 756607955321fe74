#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::shared::{DomainError, SubjectId, UserId};
    use chrono::{Duration, NaiveDate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn ratio(v: f64) -> CompletionRatio {
        CompletionRatio::new(v).unwrap()
    }

    fn days_ago(n: i64) -> NaiveDate {
        today() - Duration::days(n)
    }

    fn routine_event(day: NaiveDate, value: f64) -> CompletionEvent {
        CompletionEvent::new(
            SubjectId::from_string("morning-routine"),
            SubjectKind::Routine,
            UserId::from_string("user-1"),
            day,
            ratio(value),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_streak_is_zero_when_today_missing() {
        let calc = StreakCalculator::for_kind(SubjectKind::Routine);
        let days = vec![(days_ago(1), ratio(1.0)), (days_ago(2), ratio(1.0))];

        let result = calc.calculate_days(&days, today()).unwrap();

        assert_eq!(result.current_streak, 0);
        assert_eq!(result.longest_streak, 2);
        assert_eq!(result.qualifying_days, 2);
    }

    #[test]
    fn test_streak_is_zero_when_today_below_threshold() {
        let calc = StreakCalculator::for_kind(SubjectKind::Routine);
        let days = vec![(today(), ratio(0.5)), (days_ago(1), ratio(1.0))];

        let result = calc.calculate_days(&days, today()).unwrap();

        assert_eq!(result.current_streak, 0);
    }

    #[test]
    fn test_streak_counts_unbroken_run() {
        let calc = StreakCalculator::for_kind(SubjectKind::Routine);
        let mut days: Vec<(NaiveDate, CompletionRatio)> =
            (0..5).map(|n| (days_ago(n), ratio(0.8))).collect();
        days.push((days_ago(5), ratio(0.2)));
        days.push((days_ago(6), ratio(1.0)));

        let result = calc.calculate_days(&days, today()).unwrap();

        assert_eq!(result.current_streak, 5);
        assert_eq!(result.total_executions, 7);
        assert_eq!(result.qualifying_days, 6);
    }

    #[test]
    fn test_streak_ignores_input_order() {
        let calc = StreakCalculator::for_kind(SubjectKind::Routine);
        let days = vec![
            (days_ago(2), ratio(1.0)),
            (today(), ratio(1.0)),
            (days_ago(1), ratio(1.0)),
        ];

        let result = calc.calculate_days(&days, today()).unwrap();

        assert_eq!(result.current_streak, 3);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let calc = StreakCalculator::for_kind(SubjectKind::Routine);
        let days = vec![(today(), ratio(0.7)), (days_ago(1), ratio(0.69))];

        let result = calc.calculate_days(&days, today()).unwrap();

        assert_eq!(result.current_streak, 1);
        assert_eq!(result.qualifying_days, 1);
    }

    #[test]
    fn test_completion_rate_is_unweighted_mean() {
        let calc = StreakCalculator::for_kind(SubjectKind::Routine);
        let days = vec![
            (today(), ratio(1.0)),
            (days_ago(1), ratio(0.5)),
            (days_ago(2), ratio(0.0)),
        ];

        let result = calc.calculate_days(&days, today()).unwrap();

        assert_eq!(result.completion_rate_rounded(), 50);
        assert!((result.completion_rate - 50.0).abs() < 1e-9);
        assert_eq!(result.total_executions, 3);
    }

    #[test]
    fn test_unrounded_rate_is_kept() {
        let calc = StreakCalculator::for_kind(SubjectKind::Routine);
        let days = vec![
            (today(), ratio(1.0)),
            (days_ago(1), ratio(1.0)),
            (days_ago(2), ratio(0.0)),
        ];

        let result = calc.calculate_days(&days, today()).unwrap();

        assert!((result.completion_rate - 66.666_666).abs() < 1e-4);
        assert_eq!(result.completion_rate_rounded(), 67);
    }

    #[test]
    fn test_empty_input_is_zero_result() {
        let calc = StreakCalculator::default();

        let result = calc.calculate_days(&[], today()).unwrap();

        assert_eq!(result, StreakResult::EMPTY);
        assert_eq!(result.completion_rate_rounded(), 0);
    }

    #[test]
    fn test_duplicate_days_are_rejected() {
        let calc = StreakCalculator::default();
        let days = vec![(today(), ratio(1.0)), (today(), ratio(0.9))];

        let result = calc.calculate_days(&days, today());

        assert!(matches!(result, Err(DomainError::DataIntegrity(_))));
    }

    #[test]
    fn test_habit_threshold_requires_full_completion() {
        let calc = StreakCalculator::for_kind(SubjectKind::Habit);
        let days = vec![
            (today(), CompletionRatio::from_done(true)),
            (days_ago(1), CompletionRatio::from_done(true)),
            (days_ago(2), CompletionRatio::from_done(false)),
            (days_ago(3), CompletionRatio::from_done(true)),
        ];

        let result = calc.calculate_days(&days, today()).unwrap();

        assert_eq!(result.current_streak, 2);
        assert_eq!(result.qualifying_days, 3);
        assert_eq!(result.completion_rate_rounded(), 75);
    }

    #[test]
    fn test_future_days_do_not_break_streak() {
        let calc = StreakCalculator::for_kind(SubjectKind::Habit);
        let days = vec![
            (today() + Duration::days(1), CompletionRatio::FULL),
            (today(), CompletionRatio::FULL),
            (days_ago(1), CompletionRatio::FULL),
        ];

        let result = calc.calculate_days(&days, today()).unwrap();

        assert_eq!(result.current_streak, 2);
        assert_eq!(result.total_executions, 3);
    }

    #[test]
    fn test_longest_streak_spans_gaps() {
        let calc = StreakCalculator::for_kind(SubjectKind::Habit);
        let days: Vec<(NaiveDate, CompletionRatio)> = [0, 1, 4, 5, 6, 7, 10]
            .iter()
            .map(|n| (days_ago(*n), CompletionRatio::FULL))
            .collect();

        let result = calc.calculate_days(&days, today()).unwrap();

        assert_eq!(result.current_streak, 2);
        assert_eq!(result.longest_streak, 4);
    }

    #[test]
    fn test_calculate_over_events() {
        let calc = StreakCalculator::for_kind(SubjectKind::Routine);
        let events = vec![
            routine_event(today(), 1.0),
            routine_event(days_ago(1), 0.75),
            routine_event(days_ago(2), 0.4),
        ];

        let result = calc.calculate(&events, today()).unwrap();

        assert_eq!(result.current_streak, 2);
        assert_eq!(result.total_executions, 3);
        assert_eq!(result.completion_rate_rounded(), 72);
    }

    #[test]
    fn test_calculation_is_repeatable() {
        let calc = StreakCalculator::for_kind(SubjectKind::Routine);
        let days = vec![(today(), ratio(0.9)), (days_ago(1), ratio(0.9))];

        let first = calc.calculate_days(&days, today()).unwrap();
        let second = calc.calculate_days(&days, today()).unwrap();

        assert_eq!(first, second);
    }
}
