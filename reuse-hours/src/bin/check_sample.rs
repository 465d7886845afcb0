use std::env;
use std::fs;

use chrono::Local;

use reuse_hours::directory::{Directory, Location, Query, SortBy};
use reuse_hours::{GeoPoint, OpeningHours};

const SAMPLE: &str = include_str!("../tests/data/sample.json");

fn main() {
    env_logger::init();

    let data = match env::args().nth(1) {
        Some(path) => fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("could not read {path}: {err}")),
        None => SAMPLE.to_string(),
    };

    let locations: Vec<Location> =
        serde_json::from_str(&data).unwrap_or_else(|err| panic!("invalid locations: {err}"));

    let now = Local::now().naive_local();
    let mut directory = Directory::new(locations);

    if let Some(position) = env::var("USER_POSITION").ok().and_then(|pos| parse_position(&pos)) {
        directory = directory.with_user_location(position);
    }

    let mut query = Query::default().with_sort(SortBy::Distance);

    if let Ok(categories) = env::var("CATEGORIES") {
        for name in categories.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            query = query.with_category(name);
        }
    }

    let mut unparsed = 0;
    println!(" - date: {now}");

    for location in directory.query(&query) {
        let status = directory.status_of(location, now);
        let distance = directory.distance_text(location).unwrap_or_default();
        println!("{:>3} {:<45} {:<15} {distance}", location.id, location.name, status.label());

        let hours = OpeningHours::parse(location.hours.as_deref().unwrap_or_default());

        if let reuse_hours_syntax::HoursExpression::Clauses(clauses) = hours.expression() {
            for clause in clauses {
                if let reuse_hours_syntax::Clause::Unparsed(text) = clause {
                    println!("      ignored: {text:?}");
                    unparsed += 1;
                }
            }
        }
    }

    println!("---");
    println!("{} locations, {unparsed} ignored clauses", directory.locations().len());
}

fn parse_position(raw: &str) -> Option<GeoPoint> {
    let (lat, lng) = raw.split_once(',')?;
    Some(GeoPoint::new(lat.trim().parse().ok()?, lng.trim().parse().ok()?))
}
