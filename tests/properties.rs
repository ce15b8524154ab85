use std::collections::BTreeSet;

use jiff::civil::{Time, time};
use proptest::prelude::*;
use timebucket::editor::{add_weekday, apply, remove_weekday, toggle_weekday};
use timebucket::{Edit, Seat, Skill, Spot, TimeBucket, Weekday};

fn weekday() -> impl Strategy<Value = Weekday> {
    (0usize..7).prop_map(|i| Weekday::ALL[i])
}

fn time_of_day() -> impl Strategy<Value = Time> {
    (0i8..24, 0i8..60).prop_map(|(h, m)| time(h, m, 0, 0))
}

fn bucket() -> impl Strategy<Value = TimeBucket> {
    (
        prop::collection::btree_set(0usize..7, 0..=7),
        prop::collection::vec(0u32..28, 0..12),
        time_of_day(),
        time_of_day(),
    )
        .prop_map(|(days, seats, start, end)| {
            let spot = Spot {
                tenant_id: 0,
                id: Some(1),
                version: Some(0),
                name: "Ward".to_string(),
                required_skill_set: Vec::new(),
            };
            let mut bucket = TimeBucket::new(spot, start, end);
            bucket.repeat_on_day_set_list = days.into_iter().map(|i| Weekday::ALL[i]).collect();
            bucket.seat_list = seats
                .into_iter()
                .map(|day_in_rotation| Seat {
                    day_in_rotation,
                    employee: None,
                })
                .collect();
            bucket
        })
}

fn day_set(bucket: &TimeBucket) -> BTreeSet<Weekday> {
    bucket.repeat_on_day_set_list.iter().copied().collect()
}

proptest! {
    #[test]
    fn toggling_twice_restores_repeat_days(bucket in bucket(), day in weekday()) {
        let twice = toggle_weekday(&toggle_weekday(&bucket, day), day);
        prop_assert_eq!(day_set(&twice), day_set(&bucket));
        // Whichever toggle deselects the day takes its seats with it.
        let expected: Vec<Seat> = bucket
            .seat_list
            .iter()
            .filter(|s| s.weekday() != day)
            .cloned()
            .collect();
        prop_assert_eq!(twice.seat_list, expected);
    }

    #[test]
    fn removed_weekday_has_no_seats(bucket in bucket(), index in 0usize..7) {
        let after = remove_weekday(&bucket, index).unwrap();
        prop_assert!(after.seat_list.iter().all(|s| (s.day_in_rotation % 7) as usize != index));
        prop_assert!(!after.repeats_on(Weekday::ALL[index]));
        let kept = bucket
            .seat_list
            .iter()
            .filter(|s| (s.day_in_rotation % 7) as usize != index)
            .count();
        prop_assert_eq!(after.seat_list.len(), kept);
    }

    #[test]
    fn adding_weekday_keeps_seats(bucket in bucket(), day in weekday()) {
        let after = add_weekday(&bucket, day);
        prop_assert_eq!(&after.seat_list, &bucket.seat_list);
        prop_assert!(after.repeats_on(day));
    }

    #[test]
    fn field_edits_keep_days_and_seats(bucket in bucket(), start in time_of_day(), end in time_of_day()) {
        let edits = [
            Edit::StartTime(start.strftime("%H:%M").to_string()),
            Edit::EndTime(end.strftime("%H:%M").to_string()),
            Edit::AdditionalSkills(vec![Skill {
                tenant_id: 0,
                id: Some(9),
                version: None,
                name: "Cook".to_string(),
            }]),
        ];
        for edit in &edits {
            let after = apply(&bucket, edit).unwrap();
            prop_assert_eq!(&after.repeat_on_day_set_list, &bucket.repeat_on_day_set_list);
            prop_assert_eq!(&after.seat_list, &bucket.seat_list);
        }
    }

    #[test]
    fn deselecting_keeps_invariant(bucket in bucket(), day in weekday()) {
        // Start from a bucket that satisfies the invariant.
        let mut valid = bucket.clone();
        valid.seat_list.retain(|s| bucket.repeats_on(s.weekday()));
        let after = toggle_weekday(&valid, day);
        prop_assert_eq!(after.orphan_seats().count(), 0);
    }
}

#[test]
fn monday_scenario() {
    let spot = Spot {
        tenant_id: 0,
        id: None,
        version: None,
        name: "Ward".to_string(),
        required_skill_set: Vec::new(),
    };
    let mut bucket = TimeBucket::new(spot, time(9, 0, 0, 0), time(17, 0, 0, 0));
    bucket.repeat_on_day_set_list = vec![Weekday::Monday, Weekday::Tuesday];
    bucket.seat_list = [1, 8, 2]
        .into_iter()
        .map(|day_in_rotation| Seat {
            day_in_rotation,
            employee: None,
        })
        .collect();

    let after = remove_weekday(&bucket, 1).unwrap();
    assert_eq!(after.repeat_on_day_set_list, vec![Weekday::Tuesday]);
    let days: Vec<u32> = after.seat_list.iter().map(|s| s.day_in_rotation).collect();
    assert_eq!(days, vec![2]);
}
