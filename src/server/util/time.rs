use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

/// Start of the UTC calendar month containing `now`.
pub fn start_of_month(now: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
        .single()
        .unwrap_or(now)
}

/// `at` moved by `days` whole days, or `None` when the result leaves chrono's range.
pub fn shift_days(at: DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
    Duration::try_days(days).and_then(|delta| at.checked_add_signed(delta))
}

/// Time left until the next occurrence of `hour`:00 in the timezone of `now`.
///
/// If that wall-clock time does not exist on the target day (DST gap) the following hour is
/// used instead.
pub fn duration_until_next_hour<Tz: TimeZone>(now: &DateTime<Tz>, hour: u32) -> std::time::Duration {
    let local = now.naive_local();

    let Some(mut target) = local.date().and_hms_opt(hour, 0, 0) else {
        return std::time::Duration::ZERO;
    };
    if target <= local {
        target += Duration::days(1);
    }

    let timezone = now.timezone();
    let resolved = timezone
        .from_local_datetime(&target)
        .earliest()
        .or_else(|| {
            timezone
                .from_local_datetime(&(target + Duration::hours(1)))
                .earliest()
        });

    match resolved {
        Some(at) => at
            .signed_duration_since(now)
            .to_std()
            .unwrap_or(std::time::Duration::ZERO),
        None => std::time::Duration::ZERO,
    }
}
