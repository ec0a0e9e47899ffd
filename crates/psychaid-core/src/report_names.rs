//! Report naming conventions.
//!
//! Pure string functions with no rendering dependency. These define how an
//! exported report is named and numbered.

use crate::models::user::UserInfo;

/// `Medical_Record_<name>_<date>.<ext>`, with every whitespace run in the
/// name replaced by one `_` (leading and trailing runs included) and slashes
/// in the date replaced by `-`.
pub fn report_filename(user_info: &UserInfo, extension: &str) -> String {
    let mut name = String::with_capacity(user_info.name.len());
    let mut in_run = false;
    for c in user_info.name.chars() {
        if c.is_whitespace() {
            if !in_run {
                name.push('_');
            }
            in_run = true;
        } else {
            name.push(c);
            in_run = false;
        }
    }
    let date = user_info.assessment_date.replace('/', "-");
    format!("Medical_Record_{name}_{date}.{extension}")
}

/// Six-digit record number: the last six digits of the creation time in
/// milliseconds.
pub fn record_number(created_at: jiff::Timestamp) -> String {
    let millis = created_at.as_millisecond().rem_euclid(1_000_000);
    format!("{millis:06}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_replaces_spaces_and_slashes() {
        let mut info = UserInfo::new("Mary  Ann Smith", 29, "female");
        info.assessment_date = "03/14/2025".to_string();
        assert_eq!(
            report_filename(&info, "pdf"),
            "Medical_Record_Mary_Ann_Smith_03-14-2025.pdf"
        );
    }

    #[test]
    fn edge_whitespace_becomes_underscores_too() {
        let mut info = UserInfo::new(" Ann \t Lee\n", 29, "female");
        info.assessment_date = "2025-03-14".to_string();
        assert_eq!(report_filename(&info, "pdf"), "Medical_Record__Ann_Lee__2025-03-14.pdf");
    }

    #[test]
    fn iso_dates_pass_through() {
        let mut info = UserInfo::new("Ali", 52, "male");
        info.assessment_date = "2025-03-14".to_string();
        assert_eq!(report_filename(&info, "docx"), "Medical_Record_Ali_2025-03-14.docx");
    }

    #[test]
    fn record_number_keeps_last_six_digits() {
        let ts = jiff::Timestamp::from_millisecond(1_718_000_012_345).unwrap();
        assert_eq!(record_number(ts), "012345");
    }
}
