//! Display helpers for a Bengali audience in Bangladesh.

use chrono::{DateTime, Datelike, Duration, NaiveDateTime, Timelike, Utc};

use crate::validation::MOBILE_DIGITS;

const BENGALI_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

const BENGALI_MONTHS: [&str; 12] = [
    "জানু", "ফেব", "মার্চ", "এপ্রি", "মে", "জুন", "জুল", "আগ", "সেপ", "অক্টো", "নভে", "ডিসে",
];

/// Asia/Dhaka has no daylight saving; it is always UTC+06:00.
const DHAKA_OFFSET_HOURS: i64 = 6;

/// Replace ASCII digits with Bengali digits, leaving everything else.
pub fn bengali_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => BENGALI_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

pub fn format_count(count: u64) -> String {
    bengali_digits(&count.to_string())
}

/// `৳` followed by the amount in Bengali digits, e.g. `৳৫০০` or `৳২৫০.২৫`.
pub fn format_amount(amount_bdt: f64) -> String {
    format!("৳{}", bengali_digits(&amount_bdt.to_string()))
}

/// Wall-clock time in Dhaka.
pub fn to_dhaka(at: DateTime<Utc>) -> NaiveDateTime {
    at.naive_utc() + Duration::hours(DHAKA_OFFSET_HOURS)
}

/// Medium date, short time, Dhaka local: `১ মার্চ, ২০২৫ ৪:০৫ PM`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    let local = to_dhaka(at);
    let (is_pm, hour) = local.hour12();
    let text = format!(
        "{} {}, {} {}:{:02} {}",
        local.day(),
        BENGALI_MONTHS[local.month0() as usize],
        local.year(),
        hour,
        local.minute(),
        if is_pm { "PM" } else { "AM" },
    );
    bengali_digits(&text)
}

/// Digits only, truncated to a full mobile number. Applied on every keystroke.
pub fn sanitize_mobile_input(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(MOBILE_DIGITS).collect()
}
