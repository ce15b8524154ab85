use jiff::civil::Time;
use serde::{Deserialize, Serialize};

use crate::weekday::Weekday;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub tenant_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spot {
    pub tenant_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub required_skill_set: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub tenant_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    pub name: String,
}

/// One assignable slot, pinned to an offset day of the rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub day_in_rotation: u32,
    #[serde(default)]
    pub employee: Option<Employee>,
}

impl Seat {
    pub fn weekday(&self) -> Weekday {
        Weekday::of_rotation_day(self.day_in_rotation)
    }
}

/// A recurring shift template for one spot.
///
/// Every seat's weekday is expected to be in `repeat_on_day_set_list`; the
/// editor keeps that true when a day is deselected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBucket {
    pub tenant_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    pub spot: Spot,
    pub start_time: Time,
    pub end_time: Time,
    #[serde(default)]
    pub additional_skill_set: Vec<Skill>,
    #[serde(default)]
    pub repeat_on_day_set_list: Vec<Weekday>,
    #[serde(default)]
    pub seat_list: Vec<Seat>,
}

impl TimeBucket {
    pub fn new(spot: Spot, start_time: Time, end_time: Time) -> Self {
        Self {
            tenant_id: spot.tenant_id,
            id: None,
            version: None,
            spot,
            start_time,
            end_time,
            additional_skill_set: Vec::new(),
            repeat_on_day_set_list: Vec::new(),
            seat_list: Vec::new(),
        }
    }

    pub fn repeats_on(&self, weekday: Weekday) -> bool {
        self.repeat_on_day_set_list.contains(&weekday)
    }

    pub fn seats_on(&self, weekday: Weekday) -> impl Iterator<Item = &Seat> {
        self.seat_list
            .iter()
            .filter(move |seat| seat.weekday() == weekday)
    }

    /// Seats whose weekday is not an active repeat day.
    pub fn orphan_seats(&self) -> impl Iterator<Item = &Seat> {
        self.seat_list
            .iter()
            .filter(|seat| !self.repeats_on(seat.weekday()))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::time;

    use super::*;

    fn spot() -> Spot {
        Spot {
            tenant_id: 0,
            id: Some(3),
            version: Some(0),
            name: "Ward A".to_string(),
            required_skill_set: Vec::new(),
        }
    }

    #[test]
    fn test_deserialize_rostering_json() {
        let json = r#"{
            "tenantId": 0,
            "id": 12,
            "version": 1,
            "spot": { "tenantId": 0, "id": 3, "version": 0, "name": "Ward A", "requiredSkillSet": [] },
            "startTime": "09:00:00",
            "endTime": "17:00:00",
            "additionalSkillSet": [{ "tenantId": 0, "id": 1, "version": 0, "name": "Nurse" }],
            "repeatOnDaySetList": ["MONDAY", "WEDNESDAY"],
            "seatList": [
                { "dayInRotation": 1, "employee": { "tenantId": 0, "id": 7, "version": 0, "name": "Amy" } },
                { "dayInRotation": 10, "employee": null }
            ]
        }"#;
        let bucket: TimeBucket = serde_json::from_str(json).unwrap();
        assert_eq!(bucket.id, Some(12));
        assert_eq!(bucket.start_time, time(9, 0, 0, 0));
        assert_eq!(bucket.end_time, time(17, 0, 0, 0));
        assert_eq!(
            bucket.repeat_on_day_set_list,
            vec![Weekday::Monday, Weekday::Wednesday]
        );
        assert_eq!(bucket.seat_list[0].weekday(), Weekday::Monday);
        assert_eq!(bucket.seat_list[1].weekday(), Weekday::Wednesday);
        assert!(bucket.seat_list[1].employee.is_none());
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let bucket = TimeBucket::new(spot(), time(8, 0, 0, 0), time(16, 0, 0, 0));
        let value = serde_json::to_value(&bucket).unwrap();
        assert!(value.get("repeatOnDaySetList").is_some());
        assert!(value.get("seatList").is_some());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_orphan_seats() {
        let mut bucket = TimeBucket::new(spot(), time(8, 0, 0, 0), time(16, 0, 0, 0));
        bucket.repeat_on_day_set_list = vec![Weekday::Monday];
        bucket.seat_list = vec![
            Seat { day_in_rotation: 1, employee: None },
            Seat { day_in_rotation: 2, employee: None },
            Seat { day_in_rotation: 8, employee: None },
        ];
        assert_eq!(bucket.seats_on(Weekday::Monday).count(), 2);
        let orphans: Vec<u32> = bucket.orphan_seats().map(|s| s.day_in_rotation).collect();
        assert_eq!(orphans, vec![2]);
    }
}
