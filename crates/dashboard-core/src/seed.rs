//! Seed Data
//!
//! Deterministic mock submissions scattered around central London.

use chrono::{DateTime, Duration, TimeZone, Timelike, Utc};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::record::{LatLng, Record, Status};

const WORKFLOW_TYPES: [&str; 5] = [
    "Requires Location",
    "Customer Survey",
    "Site Inspection",
    "Delivery Confirmation",
    "Maintenance Request",
];

const EMAILS: [&str; 5] = [
    "denisgordiyenya@gmail.com",
    "john.smith@example.com",
    "sarah.parker@example.com",
    "michael.wong@example.com",
    "emily.johnson@example.com",
];

const ADDRESSES: [&str; 5] = [
    "123 Main St, London, UK",
    "456 Oxford Street, London, UK",
    "789 Baker Street, London, UK",
    "321 Park Avenue, London, UK",
    "654 Bond Street, London, UK",
];

const BASE_LAT: f64 = 51.5;
const BASE_LNG: f64 = -0.1;
/// Full width of the scatter around the base point, in degrees
const SPREAD: f64 = 0.1;

/// Generate `count` records with ids `"1"..="count"`.
///
/// Due dates fall between 2022-01-01 and `now`; the same `seed` always
/// produces the same records for the same `now`.
pub fn generate(count: usize, seed: u64, now: DateTime<Utc>) -> Vec<Record> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let start = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).single().unwrap_or(now);
    let span = (now - start).num_seconds().max(1);

    (1..=count)
        .map(|i| {
            let status = Status::ALL[rng.gen_range(0..Status::ALL.len())];
            let task = format!("Work Flow:{}", pick(&mut rng, &WORKFLOW_TYPES));
            let from = pick(&mut rng, &EMAILS).to_string();
            let to = pick(&mut rng, &EMAILS).to_string();
            let address = pick(&mut rng, &ADDRESSES).to_string();

            let offset = Duration::seconds(rng.gen_range(0..span));
            let day = start + offset;
            let due_date = day
                .with_hour(rng.gen_range(0..24))
                .and_then(|d| d.with_minute(rng.gen_range(0..60)))
                .unwrap_or(day);

            let location = LatLng::new(
                BASE_LAT + (rng.gen::<f64>() - 0.5) * SPREAD,
                BASE_LNG + (rng.gen::<f64>() - 0.5) * SPREAD,
            );

            Record {
                id: i.to_string(),
                task,
                status,
                from,
                to,
                address,
                due_date,
                location,
            }
        })
        .collect()
}

fn pick<'a>(rng: &mut SmallRng, options: &[&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_generate_is_deterministic() {
        assert_eq!(generate(20, 7, now()), generate(20, 7, now()));
        assert_ne!(generate(20, 7, now()), generate(20, 8, now()));
    }

    #[test]
    fn test_generated_shape() {
        let records = generate(100, 42, now());
        assert_eq!(records.len(), 100);
        assert_eq!(records[0].id, "1");
        assert_eq!(records[99].id, "100");

        let start = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
        for record in &records {
            assert!(record.task.starts_with("Work Flow:"));
            assert!(record.address.contains("London"));
            assert!(record.has_valid_location());
            assert!((record.location.lat - BASE_LAT).abs() <= SPREAD / 2.0);
            assert!((record.location.lng - BASE_LNG).abs() <= SPREAD / 2.0);
            assert!(record.due_day() >= start.date_naive());
            assert!(record.due_day() <= now().date_naive());
        }
    }
}
