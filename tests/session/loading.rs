//! Archive loading and CSV conversion against the fixtures.

use crate::common::{fixture, fixture_donors, fixture_posts};
use chrono::NaiveDate;
use gleaner::convert::{convert_file, convert_posts_csv, default_output_path};
use gleaner::load::{load_donors, load_posts, load_posts_from_path, load_posts_from_reader};
use gleaner::records::{Borough, PaymentMethod, PostKind};
use gleaner::Error;
use std::fs::File;

#[test]
fn test_posts_fixture_loads_leniently() {
    let posts = fixture_posts();
    assert_eq!(posts.len(), 7);

    let kinds: Vec<PostKind> = posts.iter().map(|p| p.kind).collect();
    assert_eq!(
        kinds,
        vec![
            PostKind::Post,
            PostKind::Reply,
            PostKind::Repost,
            PostKind::Post,
            PostKind::Post,
            PostKind::Post,
            PostKind::Repost,
        ]
    );

    let grocery = &posts[4];
    assert_eq!(grocery.created_at.as_deref(), Some("not a date"));
    assert!(grocery.created().is_none());

    let tenants = &posts[5];
    assert!(tenants.user_screen_name.is_none());
    assert!(tenants.created_at.is_none());
}

#[test]
fn test_donors_fixture_loads_leniently() {
    let donors = fixture_donors();
    assert_eq!(donors.len(), 6);
    assert!(donors.iter().enumerate().all(|(i, d)| d.id == i));

    let jose = &donors[1];
    assert_eq!(jose.donation, 500.0);
    assert_eq!(jose.borough(), Some(Borough::Bronx));
    assert_eq!(jose.payment_method(), PaymentMethod::Cash);

    let bo = &donors[2];
    assert_eq!(bo.donation_date, NaiveDate::from_ymd_opt(2025, 2, 20));

    let mary = &donors[3];
    assert_eq!(mary.donation, 12.5);
    assert_eq!(mary.zip, "11102");
    assert_eq!(mary.previous_donation, 25.0);

    let priya = &donors[4];
    assert!(!priya.has_intermediary());
    assert!(priya.donation_date.is_none());

    let sam = &donors[5];
    assert_eq!(sam.zip, "7302");
    assert!(sam.borough().is_none());
    assert!(sam.date_of_donation.is_none());
}

#[test]
fn test_reader_and_bytes_agree() {
    let file = File::open(fixture("posts.json")).unwrap();
    let from_reader = load_posts_from_reader(file).unwrap();
    assert_eq!(from_reader, fixture_posts());
}

#[test]
fn test_non_array_payloads_fail_whole() {
    for payload in ["", "{}", "null", "\"posts\"", "  {\"text\": \"x\"}"] {
        assert!(
            matches!(load_posts(payload.as_bytes()), Err(Error::NotAnArray { .. })),
            "{payload:?}"
        );
    }
    assert!(matches!(load_donors(b"[1, 2"), Err(Error::Json { .. })));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("posts.json");
    assert!(matches!(load_posts_from_path(&missing), Err(Error::Io { .. })));
}

#[test]
fn test_csv_fixture_converts() {
    let file = File::open(fixture("posts.csv")).unwrap();
    let (posts, report) = convert_posts_csv(file, "ZohranKMamdani").unwrap();
    assert_eq!(report.converted, 3);
    assert_eq!(report.skipped, 1);

    let links: Vec<&str> = posts.iter().filter_map(|p| p.link()).collect();
    assert_eq!(
        links,
        vec![
            "https://x.com/ZohranKMamdani/status/1879000000000000001",
            "https://x.com/ZohranKMamdani/status/1885000000000000002",
            "https://x.com/ZohranKMamdani/status/1890000000000000003",
        ]
    );
    let headers: Vec<&str> = posts[0].columns().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        headers,
        vec!["tweet_id", "text", "created_at", "user_screen_name", "author_id", "link"]
    );
}

#[test]
fn test_converted_archive_loads_as_posts() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("posts.csv");
    std::fs::copy(fixture("posts.csv"), &csv_path).unwrap();

    let output = default_output_path(&csv_path);
    assert_eq!(output, dir.path().join("posts.json"));

    let report = convert_file(&csv_path, &output, "ZohranKMamdani").unwrap();
    assert_eq!(report.converted, 3);

    let posts = load_posts_from_path(&output).unwrap();
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[1].text, "Fare-free buses, for real");
    assert_eq!(posts[1].user_screen_name.as_deref(), Some("ZohranKMamdani"));
    assert!(posts[2].link.as_deref().unwrap().ends_with("/1890000000000000003"));
}
