use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Timelike, Weekday};

use crate::{LoggedSet, Name};

/// Returns the sets newest first, restricted to one exercise if `exercise_name` is given.
#[must_use]
pub fn filter_sets<'a>(sets: &'a [LoggedSet], exercise_name: Option<&str>) -> Vec<&'a LoggedSet> {
    let mut result = sets
        .iter()
        .filter(|s| exercise_name.is_none_or(|name| s.exercise_name.as_ref() == name))
        .collect::<Vec<_>>();
    result.sort_by(|a, b| b.date_time.cmp(&a.date_time));
    result
}

/// Returns the names of all logged exercises, ordered by their most recent set.
#[must_use]
pub fn exercise_names(sets: &[LoggedSet]) -> Vec<&Name> {
    let mut seen = HashSet::new();
    filter_sets(sets, None)
        .into_iter()
        .map(|s| &s.exercise_name)
        .filter(|name| seen.insert(*name))
        .collect()
}

/// Position of one set in a bucket, stacked on top of the sets before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepRange {
    pub start: u32,
    pub end: u32,
    pub weight: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBucket<L> {
    pub label: L,
    /// Never empty. A bucket without sets holds a single zero range.
    pub ranges: Vec<RepRange>,
}

/// Groups the sets of `day` by hour. The result has 24 buckets labeled 0 to 23.
#[must_use]
pub fn day_buckets(sets: &[LoggedSet], day: NaiveDate) -> Vec<ChartBucket<u32>> {
    let sets = chronological(sets, |s| s.date_time.date() == day);
    (0..24)
        .map(|hour| ChartBucket {
            label: hour,
            ranges: stack(sets.iter().copied().filter(|s| s.date_time.hour() == hour)),
        })
        .collect()
}

/// Groups the sets of the week containing `day` by weekday. Weeks start on Sunday.
#[must_use]
pub fn week_buckets(sets: &[LoggedSet], day: NaiveDate) -> Vec<ChartBucket<Weekday>> {
    let offset = i64::from(day.weekday().num_days_from_sunday());
    let sets = chronological(sets, |s| {
        (0..7).contains(&(s.date_time.date().signed_duration_since(day).num_days() + offset))
    });
    let mut weekday = Weekday::Sun;
    (0..7)
        .map(|_| {
            let bucket = ChartBucket {
                label: weekday,
                ranges: stack(
                    sets.iter()
                        .copied()
                        .filter(|s| s.date_time.weekday() == weekday),
                ),
            };
            weekday = weekday.succ();
            bucket
        })
        .collect()
}

fn chronological(sets: &[LoggedSet], predicate: impl Fn(&LoggedSet) -> bool) -> Vec<&LoggedSet> {
    let mut result = sets.iter().filter(|s| predicate(s)).collect::<Vec<_>>();
    result.sort_by_key(|s| s.date_time);
    result
}

fn stack<'a>(sets: impl Iterator<Item = &'a LoggedSet>) -> Vec<RepRange> {
    let mut end = 0;
    let mut ranges = sets
        .map(|s| {
            let start = end;
            end += s.reps.map_or(0, u32::from);
            RepRange {
                start,
                end,
                weight: s.weight.map_or(0.0, f32::from),
            }
        })
        .collect::<Vec<_>>();
    if ranges.is_empty() {
        ranges.push(RepRange {
            start: 0,
            end: 0,
            weight: 0.0,
        });
    }
    ranges
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{Reps, SetID, Time, Weight};

    const EMPTY: RepRange = RepRange {
        start: 0,
        end: 0,
        weight: 0.0,
    };

    fn set(
        id: u128,
        name: &str,
        (day, hour, minute): (u32, u32, u32),
        reps: Option<u32>,
        weight: Option<f32>,
    ) -> LoggedSet {
        LoggedSet {
            id: SetID::from(id),
            exercise_id: name.into(),
            exercise_name: Name::new(name).unwrap(),
            date_time: date(day).and_hms_opt(hour, minute, 0).unwrap(),
            reps: reps.map(|r| Reps::new(r).unwrap()),
            weight: weight.map(|w| Weight::new(w).unwrap()),
            duration: None,
        }
    }

    fn sets() -> Vec<LoggedSet> {
        vec![
            set(1, "Squat", (5, 9, 10), Some(5), Some(100.0)),
            set(2, "Bench Press", (5, 9, 30), Some(8), Some(60.0)),
            set(3, "Squat", (5, 9, 20), Some(3), Some(110.0)),
            set(4, "Squat", (4, 18, 0), Some(10), Some(80.0)),
            set(5, "Plank", (5, 21, 45), None, None),
            set(6, "Bench Press", (11, 7, 0), Some(6), Some(62.5)),
            set(7, "Squat", (3, 12, 0), Some(4), Some(90.0)),
        ]
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, day).unwrap()
    }

    #[rstest]
    #[case::all(None, &[6, 5, 2, 3, 1, 4, 7])]
    #[case::squat(Some("Squat"), &[3, 1, 4, 7])]
    #[case::unknown(Some("Deadlift"), &[])]
    fn test_filter_sets(#[case] exercise_name: Option<&str>, #[case] expected: &[u128]) {
        let sets = sets();

        assert_eq!(
            filter_sets(&sets, exercise_name)
                .iter()
                .map(|s| s.id)
                .collect::<Vec<_>>(),
            expected.iter().map(|id| SetID::from(*id)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_exercise_names() {
        let sets = sets();

        assert_eq!(
            exercise_names(&sets)
                .iter()
                .map(|n| n.as_ref().as_str())
                .collect::<Vec<_>>(),
            vec!["Bench Press", "Plank", "Squat"]
        );
        assert!(exercise_names(&[]).is_empty());
    }

    #[test]
    fn test_day_buckets() {
        let buckets = day_buckets(&sets(), date(5));

        assert_eq!(buckets.len(), 24);
        assert_eq!(
            buckets.iter().map(|b| b.label).collect::<Vec<_>>(),
            (0..24).collect::<Vec<u32>>()
        );
        assert_eq!(
            buckets[9].ranges,
            vec![
                RepRange {
                    start: 0,
                    end: 5,
                    weight: 100.0,
                },
                RepRange {
                    start: 5,
                    end: 8,
                    weight: 110.0,
                },
                RepRange {
                    start: 8,
                    end: 16,
                    weight: 60.0,
                },
            ]
        );
        assert_eq!(buckets[21].ranges, vec![EMPTY]);
        assert_eq!(buckets[18].ranges, vec![EMPTY]);
        assert_eq!(buckets[0].ranges, vec![EMPTY]);
    }

    #[rstest]
    #[case::sunday(4)]
    #[case::wednesday(7)]
    #[case::saturday(10)]
    fn test_week_buckets(#[case] day: u32) {
        let buckets = week_buckets(&sets(), date(day));

        assert_eq!(
            buckets.iter().map(|b| b.label).collect::<Vec<_>>(),
            vec![
                Weekday::Sun,
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
            ]
        );
        assert_eq!(
            buckets[0].ranges,
            vec![RepRange {
                start: 0,
                end: 10,
                weight: 80.0,
            }]
        );
        assert_eq!(
            buckets[1].ranges.iter().map(|r| r.end).collect::<Vec<_>>(),
            vec![5, 8, 16, 16]
        );
        for bucket in &buckets[2..] {
            assert_eq!(bucket.ranges, vec![EMPTY]);
        }
    }

    #[test]
    fn test_buckets_without_sets() {
        assert!(
            day_buckets(&[], date(5))
                .iter()
                .all(|b| b.ranges == vec![EMPTY])
        );
        assert!(
            week_buckets(&[], date(5))
                .iter()
                .all(|b| b.ranges == vec![EMPTY])
        );
    }

    #[test]
    fn test_timed_sets_do_not_add_reps() {
        let mut timed = set(1, "Plank", (5, 10, 0), None, None);
        timed.duration = Some(Time::new(60).unwrap());
        let sets = vec![timed, set(2, "Squat", (5, 10, 5), Some(5), Some(100.0))];

        assert_eq!(
            day_buckets(&sets, date(5))[10].ranges,
            vec![
                EMPTY,
                RepRange {
                    start: 0,
                    end: 5,
                    weight: 100.0,
                },
            ]
        );
    }
}
