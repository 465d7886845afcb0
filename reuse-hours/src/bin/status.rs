use std::env;

use chrono::{Local, TimeDelta};

use reuse_hours::{Context, OpeningHours, TzLocation};
use reuse_hours_syntax::rules::Clause;

fn main() {
    env_logger::init();

    let expression = env::args().nth(1).expect("Usage: ./status <HOURS>");
    let start_datetime = Local::now();
    let start_date = start_datetime.date_naive();
    println!(" - expression: {expression}");

    let oh = OpeningHours::parse(&expression)
        .with_context(Context::default().with_locale(TzLocation::new(Local)));

    for clause in oh.expression().segments() {
        println!(" - segment: {clause}");
    }

    if let reuse_hours_syntax::HoursExpression::Clauses(clauses) = oh.expression() {
        for clause in clauses {
            match clause {
                Clause::Annotation { text, always_open } => {
                    println!(" - annotation: {text} (always open: {always_open})")
                }
                Clause::Unparsed(text) => println!(" - ignored: {text}"),
                Clause::Schedule(_) => {}
            }
        }
    }

    println!(" - date: {start_date:?}");
    println!(" - current status: {}", oh.status(start_datetime));

    if let Some(next_opening) = oh.next_opening(start_datetime) {
        println!(" - next opening: {next_opening}");
    }

    for day in 0..7 {
        let date = start_date + TimeDelta::days(day);
        let schedule = oh.schedule_at(date);

        println!("---");
        println!("{}:", date.format("%A, %-d %B, %C%y"));

        if schedule.is_empty() {
            println!(" (empty)");
        }

        for tr in schedule {
            println!(" - {:?} - {:?}", tr.range, tr.state);
        }
    }
}
