use chrono::{NaiveTime, Timelike as _};

pub trait FormatHM {
    fn format_hm(&self) -> String;
}

/// Minutes, e.g. a sleep duration.
impl FormatHM for f64 {
    fn format_hm(&self) -> String {
        let minutes = self.max(0.0);
        let h = (minutes / 60.0) as i32;
        let m = (minutes % 60.0) as i32;
        format!("{}h {:02}m", h, m)
    }
}

impl FormatHM for NaiveTime {
    fn format_hm(&self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }
}
