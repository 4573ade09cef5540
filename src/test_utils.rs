#![cfg(test)]

use crate::github::types::{ProfileRecord, RepoRecord};
use chrono::{DateTime, Duration, TimeZone, Utc};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn make_repo(name: &str, fork: bool, days_ago: i64) -> RepoRecord {
    RepoRecord {
        name: name.to_string(),
        html_url: format!("https://github.com/ann/{name}"),
        description: Some(format!("{name} description")),
        language: Some("Rust".to_string()),
        stargazers_count: 3,
        forks_count: 1,
        homepage: None,
        updated_at: fixed_now() - Duration::days(days_ago),
        fork,
    }
}

pub fn make_profile(login: &str) -> ProfileRecord {
    ProfileRecord {
        name: None,
        login: login.to_string(),
        avatar_url: format!("https://avatars.example/{login}.png"),
        bio: None,
        public_repos: 3,
        followers: 10,
        following: 2,
        company: None,
        location: None,
        blog: None,
    }
}
