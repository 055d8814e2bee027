//! 展示格式化
//!
//! - 金额：印尼写法，千位用 `.` 分隔，例如 `Rp 50.000`
//! - 时间：印尼长日期，固定显示为西印尼时间 (WIB, UTC+7)

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};

const WIB_OFFSET_SECS: i32 = 7 * 3600;

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// 千位分组：`1000000` -> `1.000.000`
pub fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// 金额标签：`50000` -> `Rp 50.000`
pub fn rupiah(amount: u64) -> String {
    format!("Rp {}", group_thousands(amount))
}

/// 交易时间：`17 Agustus 2023 17.10 WIB`
pub fn transaction_time(at: &DateTime<Utc>) -> String {
    let Some(wib) = FixedOffset::east_opt(WIB_OFFSET_SECS) else {
        return at.to_rfc3339();
    };
    let local = at.with_timezone(&wib);
    format!(
        "{} {} {} {:02}.{:02} WIB",
        local.day(),
        MONTHS_ID[local.month0() as usize],
        local.year(),
        local.hour(),
        local.minute()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1.000");
        assert_eq!(group_thousands(50_000), "50.000");
        assert_eq!(group_thousands(1_000_000), "1.000.000");
    }

    #[test]
    fn test_rupiah() {
        assert_eq!(rupiah(50_000), "Rp 50.000");
        assert_eq!(rupiah(10), "Rp 10");
    }

    #[test]
    fn test_transaction_time_uses_wib() {
        let at = Utc.with_ymd_and_hms(2023, 8, 17, 10, 10, 10).unwrap();
        assert_eq!(transaction_time(&at), "17 Agustus 2023 17.10 WIB");

        // 跨日
        let late = Utc.with_ymd_and_hms(2023, 12, 31, 20, 5, 0).unwrap();
        assert_eq!(transaction_time(&late), "1 Januari 2024 03.05 WIB");
    }
}
