use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Time-of-day label for an availability slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "6am-9am")]
    EarlyMorning,
    #[serde(rename = "9am-12pm")]
    Morning,
    #[serde(rename = "12pm-3pm")]
    Afternoon,
    #[serde(rename = "3pm-6pm")]
    LateAfternoon,
    #[serde(rename = "6pm-9pm")]
    Evening,
    #[serde(rename = "9pm-12am")]
    Night,
    #[default]
    #[serde(rename = "flexible")]
    Flexible,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 7] = [
        TimeSlot::EarlyMorning,
        TimeSlot::Morning,
        TimeSlot::Afternoon,
        TimeSlot::LateAfternoon,
        TimeSlot::Evening,
        TimeSlot::Night,
        TimeSlot::Flexible,
    ];

    /// The wire label, as stored in the data document.
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::EarlyMorning => "6am-9am",
            TimeSlot::Morning => "9am-12pm",
            TimeSlot::Afternoon => "12pm-3pm",
            TimeSlot::LateAfternoon => "3pm-6pm",
            TimeSlot::Evening => "6pm-9pm",
            TimeSlot::Night => "9pm-12am",
            TimeSlot::Flexible => "flexible",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSlot::ALL
            .iter()
            .copied()
            .find(|t| t.label() == s)
            .ok_or_else(|| {
                format!(
                    "unknown time slot '{}', expected one of: {}",
                    s,
                    TimeSlot::ALL.map(|t| t.label()).join(", ")
                )
            })
    }
}

/// A (year, month, day, time-label) tuple representing when a user is free.
///
/// Duplicates are tolerated; the list carries whatever the user picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    /// Slots written before the schema carried years default to the current one.
    #[serde(default = "current_year")]
    pub year: i32,
    pub month: u32,
    pub day: u32,
    #[serde(default)]
    pub time: TimeSlot,
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

impl fmt::Display for AvailabilitySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {}",
            self.year, self.month, self.day, self.time
        )
    }
}

impl FromStr for AvailabilitySlot {
    type Err = String;

    /// Parses `YYYY-MM-DD` with an optional `@time-label` suffix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (date_part, time_part) = match s.split_once('@') {
            Some((date, time)) => (date, Some(time)),
            None => (s, None),
        };
        let date: NaiveDate = date_part
            .parse()
            .map_err(|_| format!("invalid date in slot '{}', expected YYYY-MM-DD", s))?;
        let time = match time_part {
            Some(label) => label.parse()?,
            None => TimeSlot::Flexible,
        };
        Ok(Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            time,
        })
    }
}

/// A member profile: who they are, what they like, when they are free
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub nick_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub availability: Vec<AvailabilitySlot>,
}

/// Media attached to an event or post; the url is an opaque URL or data URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaAttachment {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
}

/// A logged past outing between two users
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub user1_id: String,
    pub user2_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub media: Vec<MediaAttachment>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn involves(&self, user_id: &str) -> bool {
        self.user1_id == user_id || self.user2_id == user_id
    }

    /// The other participant, if `user_id` is one of the two.
    pub fn partner_of(&self, user_id: &str) -> Option<&str> {
        if self.user1_id == user_id {
            Some(&self.user2_id)
        } else if self.user2_id == user_id {
            Some(&self.user1_id)
        } else {
            None
        }
    }
}

/// A star rating left for a past partner
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    pub stars: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Text,
    Image,
    Video,
}

/// An entry on a user's page; media posts carry the url in `content`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: PostKind,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One chat message; starts unread until the recipient opens the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    pub text: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Declined,
}

/// A "go out" request waiting for the recipient's answer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutingRequest {
    pub id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub message: String,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

/// An agreed outing, created when a request is accepted
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub user1_id: String,
    pub user2_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub activity: String,
    pub created_at: DateTime<Utc>,
}

impl Plan {
    pub fn involves(&self, user_id: &str) -> bool {
        self.user1_id == user_id || self.user2_id == user_id
    }

    pub fn partner_of(&self, user_id: &str) -> Option<&str> {
        if self.user1_id == user_id {
            Some(&self.user2_id)
        } else if self.user2_id == user_id {
            Some(&self.user1_id)
        } else {
            None
        }
    }
}

/// A candidate paired with its computed match score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMatch {
    pub user: User,
    pub score: i32,
}

/// Availability bonus points awarded per reference slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SlotBonuses {
    pub exact: f64,
    pub same_day: f64,
    pub same_month: f64,
}

impl Default for SlotBonuses {
    fn default() -> Self {
        Self {
            exact: 25.0,
            same_day: 15.0,
            same_month: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_slot_labels_round_trip() {
        for slot in TimeSlot::ALL {
            let parsed: TimeSlot = slot.label().parse().unwrap();
            assert_eq!(parsed, slot);
        }
        assert!("9am-11am".parse::<TimeSlot>().is_err());
    }

    #[test]
    fn test_time_slot_serde_uses_labels() {
        let json = serde_json::to_string(&TimeSlot::Morning).unwrap();
        assert_eq!(json, "\"9am-12pm\"");
        let slot: TimeSlot = serde_json::from_str("\"flexible\"").unwrap();
        assert_eq!(slot, TimeSlot::Flexible);
    }

    #[test]
    fn test_slot_from_str() {
        let slot: AvailabilitySlot = "2025-03-15@9am-12pm".parse().unwrap();
        assert_eq!(slot.year, 2025);
        assert_eq!(slot.month, 3);
        assert_eq!(slot.day, 15);
        assert_eq!(slot.time, TimeSlot::Morning);

        let flexible: AvailabilitySlot = "2025-03-15".parse().unwrap();
        assert_eq!(flexible.time, TimeSlot::Flexible);

        assert!("15/03/2025".parse::<AvailabilitySlot>().is_err());
        assert!("2025-03-15@noon".parse::<AvailabilitySlot>().is_err());
    }

    #[test]
    fn test_slot_without_year_defaults_to_current() {
        let slot: AvailabilitySlot =
            serde_json::from_str(r#"{"month": 3, "day": 15, "time": "9am-12pm"}"#).unwrap();
        assert_eq!(slot.year, chrono::Local::now().year());
    }

    #[test]
    fn test_event_partner_of() {
        let event = Event {
            id: "e1".to_string(),
            user1_id: "1".to_string(),
            user2_id: "3".to_string(),
            date: chrono::Local::now().date_naive(),
            activity: "#hiking".to_string(),
            description: String::new(),
            media: vec![],
            created_at: Utc::now(),
        };

        assert_eq!(event.partner_of("1"), Some("3"));
        assert_eq!(event.partner_of("3"), Some("1"));
        assert_eq!(event.partner_of("2"), None);
        assert!(event.involves("1"));
        assert!(!event.involves("2"));
    }

    #[test]
    fn test_user_wire_names_match_document_format() {
        let user = User {
            id: "1".to_string(),
            nick_name: "Alex".to_string(),
            bio: String::new(),
            hashtags: vec!["#hiking".to_string()],
            availability: vec![],
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("nickName").is_some());
        assert!(json.get("nick_name").is_none());
    }
}
