pub trait FormatDuration {
    /// Only the largest unit, e.g. `2 days`.
    fn format_largest(&self) -> String;

    /// `3 days ago`, or `just now` under a minute.
    fn format_ago(&self) -> String;
}

impl FormatDuration for chrono::Duration {
    #[rustfmt::skip]
    fn format_largest(&self) -> String {
        let (y, mo, d, h, m, s) = (
            self.num_days() / 365,
            self.num_days() / 30,
            self.num_days(),
            self.num_hours(),
            self.num_minutes(),
            self.num_seconds(),
        );

        match (y, mo, d, h, m, s) {
            (1  , _  , _  , _  , _  , _  ) => "1 year".to_owned(),
            (2.., _  , _  , _  , _  , _  ) => format!("{y} years"),
            (_  , 1  , _  , _  , _  , _  ) => "1 month".to_owned(),
            (_  , 2.., _  , _  , _  , _  ) => format!("{mo} months"),
            (_  , _  , 1  , _  , _  , _  ) => "1 day".to_owned(),
            (_  , _  , 2.., _  , _  , _  ) => format!("{d} days"),
            (_  , _  , _  , 1  , _  , _  ) => "1 hour".to_owned(),
            (_  , _  , _  , 2.., _  , _  ) => format!("{h} hours"),
            (_  , _  , _  , _  , 1  , _  ) => "1 minute".to_owned(),
            (_  , _  , _  , _  , 2.., _  ) => format!("{m} minutes"),
            (_  , _  , _  , _  , _  , 1  ) => "1 second".to_owned(),
            (_  , _  , _  , _  , _  , 2..) => format!("{s} seconds"),
            (_  , _  , _  , _  , _  , _  ) => "less than a second".to_owned(),
        }
    }

    fn format_ago(&self) -> String {
        if self.num_minutes() < 1 {
            return "just now".to_owned();
        }

        format!("{} ago", self.format_largest())
    }
}

#[cfg(test)]
mod tests {
    use super::FormatDuration;
    use chrono::DateTime;
    use pretty_assertions::assert_eq;

    #[test]
    #[allow(clippy::unwrap_used)]
    fn format_largest() {
        let start = DateTime::parse_from_rfc3339("2024-01-19T20:00:00.000Z").unwrap();

        let end = DateTime::parse_from_rfc3339("2024-01-21T21:19:00.000Z").unwrap();
        assert_eq!("2 days", (end - start).format_largest());

        let end = DateTime::parse_from_rfc3339("2024-01-19T21:19:00.000Z").unwrap();
        assert_eq!("1 hour", (end - start).format_largest());

        let end = DateTime::parse_from_rfc3339("2024-01-19T20:19:00.000Z").unwrap();
        assert_eq!("19 minutes", (end - start).format_largest());

        let end = DateTime::parse_from_rfc3339("2024-04-19T20:00:00.000Z").unwrap();
        assert_eq!("3 months", (end - start).format_largest());

        let end = DateTime::parse_from_rfc3339("2026-02-19T20:00:00.000Z").unwrap();
        assert_eq!("2 years", (end - start).format_largest());
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn format_ago() {
        let start = DateTime::parse_from_rfc3339("2024-01-19T20:00:00.000Z").unwrap();

        let end = DateTime::parse_from_rfc3339("2024-01-22T20:00:00.000Z").unwrap();
        assert_eq!("3 days ago", (end - start).format_ago());

        let end = DateTime::parse_from_rfc3339("2024-01-19T20:00:30.000Z").unwrap();
        assert_eq!("just now", (end - start).format_ago());
    }
}
