use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use solarops_calendar::logic::calculate_available_slots;
use solarops_calendar::{Appointment, CalendarSettings};

// Appointments on every other business hour of `date`
fn create_bookings(date: NaiveDate, settings: &CalendarSettings, count: usize) -> Vec<Appointment> {
    (settings.business_start_hour..settings.business_end_hour)
        .step_by(2)
        .take(count)
        .filter_map(|hour| date.and_hms_opt(hour, 0, 0))
        .filter_map(|naive| settings.time_zone.from_local_datetime(&naive).earliest())
        .map(|start| Appointment {
            contact_id: format!("bench-{}", start.to_rfc3339()),
            start_time: start.fixed_offset(),
            end_time: (start + Duration::hours(1)).fixed_offset(),
            booked_at: start.fixed_offset(),
        })
        .collect()
}

fn benchmark_calculate_available_slots(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_available_slots");
    let settings = CalendarSettings::default();
    let date = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();
    let before_opening: DateTime<Utc> = Utc.with_ymd_and_hms(2024, 6, 11, 0, 0, 0).unwrap();

    group.bench_function("no_bookings", |b| {
        let booked: Vec<Appointment> = Vec::new();
        b.iter(|| {
            calculate_available_slots(
                black_box(date),
                black_box(&settings),
                black_box(&booked),
                black_box(before_opening),
            )
        })
    });

    group.bench_function("half_booked", |b| {
        let booked = create_bookings(date, &settings, 7);
        b.iter(|| {
            calculate_available_slots(
                black_box(date),
                black_box(&settings),
                black_box(&booked),
                black_box(before_opening),
            )
        })
    });

    // Two months of availability, the bulk endpoint's upper bound
    group.bench_function("sixty_days", |b| {
        let booked: Vec<Appointment> = (0..60)
            .filter_map(|offset| date.checked_add_days(chrono::Days::new(offset)))
            .flat_map(|day| create_bookings(day, &settings, 3))
            .collect();
        b.iter(|| {
            (0..60u64)
                .filter_map(|offset| date.checked_add_days(chrono::Days::new(offset)))
                .map(|day| {
                    calculate_available_slots(
                        black_box(day),
                        black_box(&settings),
                        black_box(&booked),
                        black_box(before_opening),
                    )
                    .len()
                })
                .sum::<usize>()
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_calculate_available_slots);
criterion_main!(benches);
