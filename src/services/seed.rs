use chrono::{Datelike, Duration, Utc};

use crate::models::{
    AppData, AvailabilitySlot, Event, Post, PostKind, Rating, TimeSlot, User,
};

fn user(id: &str, nick_name: &str, bio: &str, tags: &[&str], slots: Vec<AvailabilitySlot>) -> User {
    User {
        id: id.to_string(),
        nick_name: nick_name.to_string(),
        bio: bio.to_string(),
        hashtags: tags.iter().map(|t| t.to_string()).collect(),
        availability: slots,
    }
}

fn slot(month: u32, day: u32, time: TimeSlot) -> AvailabilitySlot {
    AvailabilitySlot {
        year: chrono::Local::now().year(),
        month,
        day,
        time,
    }
}

/// The fixed data set a fresh or unrecoverable store falls back to.
///
/// Five browsable profiles plus one logged event, rating, and post so every
/// page has something to show before the first save.
pub fn seed_data() -> AppData {
    let now = Utc::now();

    AppData {
        users: vec![
            user(
                "1",
                "Alex",
                "Love outdoors and photography.",
                &["#hiking", "#photography", "#coffee"],
                vec![slot(3, 15, TimeSlot::Morning)],
            ),
            user(
                "2",
                "Sam",
                "Yoga enthusiast, into reading.",
                &["#hiking", "#yoga", "#reading"],
                vec![slot(3, 16, TimeSlot::Afternoon)],
            ),
            user(
                "3",
                "Jordan",
                "Movie buff, love cafes.",
                &["#photography", "#coffee", "#movies"],
                vec![slot(3, 15, TimeSlot::Morning)],
            ),
            user(
                "4",
                "Casey",
                "Fitness junkie.",
                &["#yoga", "#fitness", "#swimming"],
                vec![slot(4, 5, TimeSlot::Evening)],
            ),
            user(
                "5",
                "Riley",
                "Outdoor camping lover.",
                &["#hiking", "#photography", "#camping"],
                vec![slot(3, 22, TimeSlot::Flexible)],
            ),
        ],
        events: vec![Event {
            id: "e1".to_string(),
            user1_id: "1".to_string(),
            user2_id: "3".to_string(),
            date: (now - Duration::days(5)).date_naive(),
            activity: "#hiking #photography".to_string(),
            description: "Great hike at the park!".to_string(),
            media: vec![],
            created_at: now - Duration::days(5),
        }],
        ratings: vec![Rating {
            id: "r1".to_string(),
            from_user_id: "3".to_string(),
            to_user_id: "1".to_string(),
            stars: 5,
            comment: "Alex was an amazing hiking partner! Very friendly and knowledgeable about trails.".to_string(),
            event_id: Some("e1".to_string()),
            created_at: now - Duration::days(4),
        }],
        posts: vec![Post {
            id: "p1".to_string(),
            user_id: "1".to_string(),
            kind: PostKind::Text,
            content: "Had an awesome day hiking with Jordan!".to_string(),
            caption: None,
            created_at: now - Duration::days(4),
        }],
        ..AppData::default()
    }
}
