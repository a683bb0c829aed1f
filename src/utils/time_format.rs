use chrono::{DateTime, Utc};

/// 列表展示用的时间格式，例如 `Mar 05, 2026 14:30`
pub fn format_date_time(date_time: &DateTime<Utc>) -> String {
    date_time.format("%b %d, %Y %H:%M").to_string()
}

/// 距截止时间的剩余时间描述
///
/// - 已过截止时间：`Deadline passed`
/// - 超过一天：`{d} days, {h} hours`
/// - 超过一小时：`{h} hours, {m} minutes`
/// - 其余：`{m} minutes`
pub fn time_remaining_label(deadline: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    if now > deadline {
        return "Deadline passed".to_string();
    }

    let remaining = deadline.signed_duration_since(*now);
    let days = remaining.num_days();
    let hours = remaining.num_hours() % 24;
    let minutes = remaining.num_minutes() % 60;

    if days > 0 {
        format!("{days} days, {hours} hours")
    } else if hours > 0 {
        format!("{hours} hours, {minutes} minutes")
    } else {
        format!("{minutes} minutes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_format_date_time() {
        let at = Utc.with_ymd_and_hms(2026, 3, 5, 14, 30, 0).unwrap();
        assert_eq!(format_date_time(&at), "Mar 05, 2026 14:30");
    }

    #[test]
    fn test_time_remaining_label() {
        let now = Utc.with_ymd_and_hms(2026, 3, 5, 8, 0, 0).unwrap();

        let deadline = now + Duration::days(2) + Duration::hours(3);
        assert_eq!(time_remaining_label(&deadline, &now), "2 days, 3 hours");

        let deadline = now + Duration::hours(5) + Duration::minutes(12);
        assert_eq!(time_remaining_label(&deadline, &now), "5 hours, 12 minutes");

        let deadline = now + Duration::minutes(42);
        assert_eq!(time_remaining_label(&deadline, &now), "42 minutes");

        let deadline = now - Duration::minutes(1);
        assert_eq!(time_remaining_label(&deadline, &now), "Deadline passed");
    }

    #[test]
    fn test_exact_deadline_is_not_passed() {
        let now = Utc.with_ymd_and_hms(2026, 3, 5, 8, 0, 0).unwrap();
        assert_eq!(time_remaining_label(&now, &now), "0 minutes");
    }
}
