use chrono::NaiveDate;
use std::sync::Arc;

use steadyday_domain::mood::{
    EnergyLevel, FocusLevel, MoodEntry, MoodEntryRepository, MoodLevel, MoodVector,
};
use steadyday_domain::shared::{DayWindow, UserId};
use steadyday_infrastructure::persistence::repositories::SqliteMoodEntryRepository;

mod test_helpers;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).expect("valid date")
}

fn entry(owner: &str, on: NaiveDate, mood: MoodLevel) -> MoodEntry {
    MoodEntry::new(
        UserId::from_string(owner),
        on,
        MoodVector::new(mood, EnergyLevel::High, FocusLevel::Low),
        None,
    )
    .expect("create entry")
}

#[tokio::test]
async fn mood_repo_upsert_and_find_for_day_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteMoodEntryRepository::new(Arc::new(pool));
    let owner = UserId::from_string("u1");

    repo.upsert(&entry("u1", day(3), MoodLevel::Low))
        .await
        .expect("first upsert");
    repo.upsert(&entry("u1", day(3), MoodLevel::Excellent))
        .await
        .expect("second upsert");

    let found = repo
        .find_for_day(&owner, day(3))
        .await
        .expect("find")
        .expect("entry should exist");

    assert_eq!(found.vector().mood, MoodLevel::Excellent);
    assert_eq!(found.vector().energy, EnergyLevel::High);
    assert_eq!(found.vector().focus, FocusLevel::Low);

    let missing = repo.find_for_day(&owner, day(4)).await.expect("find missing");
    assert!(missing.is_none());
}

#[tokio::test]
async fn mood_repo_window_is_newest_first_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteMoodEntryRepository::new(Arc::new(pool));

    for d in [1, 4, 2, 9] {
        repo.upsert(&entry("u1", day(d), MoodLevel::Good))
            .await
            .expect("upsert");
    }
    repo.upsert(&entry("u2", day(3), MoodLevel::Good))
        .await
        .expect("upsert other owner");

    let window = DayWindow::new(day(1), day(5)).expect("window");
    let entries = repo
        .list_in_window(&UserId::from_string("u1"), window)
        .await
        .expect("list");

    let days: Vec<NaiveDate> = entries.iter().map(|e| e.day()).collect();
    assert_eq!(days, vec![day(4), day(2), day(1)]);
}
