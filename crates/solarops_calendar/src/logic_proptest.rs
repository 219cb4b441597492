#[cfg(test)]
mod tests {
    use crate::logic::calculate_available_slots;
    use crate::models::Appointment;
    use crate::settings::CalendarSettings;
    use chrono::{DateTime, Duration, NaiveDate, TimeZone, Timelike, Utc};
    use chrono_tz::Tz;
    use proptest::prelude::*;

    // Settings with a configurable daily window in the given zone
    fn settings_for(time_zone: Tz, start_hour: u32, end_hour: u32) -> CalendarSettings {
        CalendarSettings {
            time_zone,
            business_start_hour: start_hour,
            business_end_hour: end_hour,
            ..Default::default()
        }
    }

    // Books the given local hours on `date`
    fn booked_hours(date: NaiveDate, time_zone: Tz, hours: &[u32]) -> Vec<Appointment> {
        hours
            .iter()
            .filter_map(|hour| date.and_hms_opt(*hour, 0, 0))
            .filter_map(|naive| time_zone.from_local_datetime(&naive).earliest())
            .map(|start| Appointment {
                contact_id: format!("contact-{}", start.hour()),
                start_time: start.fixed_offset(),
                end_time: (start + Duration::hours(1)).fixed_offset(),
                booked_at: start.fixed_offset(),
            })
            .collect()
    }

    fn zone() -> impl Strategy<Value = Tz> {
        prop_oneof![
            Just(Tz::America__Los_Angeles),
            Just(Tz::America__New_York),
            Just(Tz::Europe__Zurich),
            Just(Tz::UTC),
        ]
    }

    proptest! {
        // Every slot lies inside the daily window and starts on the hour
        #[test]
        fn test_slots_within_business_hours(
            time_zone in zone(),
            day_offset in 0..730u64,
            start_hour in 0..12u32,
            end_hour in 13..=24u32,
            now_offset_hours in -48..48i64,
        ) {
            let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(day_offset);
            let settings = settings_for(time_zone, start_hour, end_hour);
            let now = Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
                + Duration::hours(now_offset_hours);

            let slots = calculate_available_slots(date, &settings, &[], now);

            prop_assert!(slots.len() <= (end_hour - start_hour) as usize);
            for slot in &slots {
                prop_assert_eq!(slot.date_naive(), date);
                prop_assert!(slot.hour() >= start_hour && slot.hour() < end_hour,
                    "Slot {} outside {}..{}", slot, start_hour, end_hour);
                prop_assert_eq!((slot.minute(), slot.second(), slot.nanosecond()), (0, 0, 0));
            }
        }

        // No slot is in the past or already booked, and the list is strictly ascending
        #[test]
        fn test_slots_exclude_booked_and_past(
            time_zone in zone(),
            day_offset in 0..730u64,
            booked in proptest::collection::vec(7..21u32, 0..10),
            now_hour in 0..24u32,
        ) {
            let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(day_offset);
            let settings = settings_for(time_zone, 7, 21);
            let appointments = booked_hours(date, time_zone, &booked);
            let now: DateTime<Utc> = time_zone
                .from_local_datetime(&date.and_hms_opt(now_hour, 30, 0).unwrap())
                .earliest()
                .map(|local| local.with_timezone(&Utc))
                .unwrap_or_else(|| Utc.from_utc_datetime(&date.and_hms_opt(now_hour, 30, 0).unwrap()));

            let slots = calculate_available_slots(date, &settings, &appointments, now);

            for slot in &slots {
                prop_assert!(slot.with_timezone(&Utc) > now, "Slot {} is not after {}", slot, now);
                prop_assert!(
                    !appointments.iter().any(|a| a.start_time == *slot),
                    "Slot {} is already booked", slot
                );
            }
            for pair in slots.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
        }
    }
}
