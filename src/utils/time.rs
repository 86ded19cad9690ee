//! Timestamp formatting

use chrono::{DateTime, Local, Utc};

/// Render a UTC timestamp in local time, `YYYY-MM-DD HH:MM:SS`
pub fn format_time(time: &DateTime<Utc>) -> String {
    time.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Coarse age such as `5m` or `3d`, relative to now
pub fn format_age(time: &DateTime<Utc>) -> String {
    let secs = (Utc::now() - *time).num_seconds().max(0);

    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86400 {
        format!("{}h", secs / 3600)
    } else {
        format!("{}d", secs / 86400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn formatted_time_has_fixed_shape() {
        let s = format_time(&Utc::now());
        assert_eq!(s.len(), 19);
        assert_eq!(&s[4..5], "-");
        assert_eq!(&s[10..11], " ");
    }

    #[test]
    fn ages_use_the_largest_unit() {
        assert_eq!(format_age(&(Utc::now() - Duration::seconds(90))), "1m");
        assert_eq!(format_age(&(Utc::now() - Duration::hours(5))), "5h");
        assert_eq!(format_age(&(Utc::now() - Duration::days(2))), "2d");
    }
}
