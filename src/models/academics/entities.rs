//! 教学相关的枚举：考勤状态与课表星期

use serde::{Deserialize, Serialize};

// 考勤状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Excused,
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "present"),
            AttendanceStatus::Absent => write!(f, "absent"),
            AttendanceStatus::Late => write!(f, "late"),
            AttendanceStatus::Excused => write!(f, "excused"),
        }
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            "late" => Ok(AttendanceStatus::Late),
            "excused" => Ok(AttendanceStatus::Excused),
            _ => Err(format!("Invalid attendance status: {s}")),
        }
    }
}

// 课表中的上课日，周日不排课
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    /// 周日返回 None
    pub fn from_weekday(weekday: chrono::Weekday) -> Option<Self> {
        use chrono::Weekday;
        match weekday {
            Weekday::Mon => Some(DayOfWeek::Monday),
            Weekday::Tue => Some(DayOfWeek::Tuesday),
            Weekday::Wed => Some(DayOfWeek::Wednesday),
            Weekday::Thu => Some(DayOfWeek::Thursday),
            Weekday::Fri => Some(DayOfWeek::Friday),
            Weekday::Sat => Some(DayOfWeek::Saturday),
            Weekday::Sun => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_sunday_has_no_classes() {
        assert_eq!(DayOfWeek::from_weekday(Weekday::Sun), None);
        assert_eq!(
            DayOfWeek::from_weekday(Weekday::Sat),
            Some(DayOfWeek::Saturday)
        );
        assert_eq!(DayOfWeek::Monday.to_string(), "Monday");
    }

    #[test]
    fn test_attendance_status_parse() {
        assert_eq!(
            "Late".parse::<AttendanceStatus>().unwrap(),
            AttendanceStatus::Late
        );
        assert!("unknown".parse::<AttendanceStatus>().is_err());
    }
}
