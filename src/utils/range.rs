use crate::core::DateRange;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use chrono::{Datelike, NaiveDate};

/// Parse a period expression into an inclusive day range.
///
/// Accepted forms:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
/// - all (no bounds)
pub fn parse_period(p: &str) -> AppResult<DateRange> {
    let p = p.trim();
    if p.eq_ignore_ascii_case("all") {
        return Ok(DateRange::default());
    }

    let (from, to) = if let Some((start_raw, end_raw)) = p.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidRange(
                "start and end must have same format".into(),
            ));
        }

        (period_bounds(start)?.0, period_bounds(end)?.1)
    } else {
        period_bounds(p)?
    };

    if from > to {
        return Err(AppError::InvalidRange(format!("{from} is after {to}")));
    }

    Ok(DateRange::between(from, to))
}

/// Resolve the list filters: `--period` wins over explicit `--from`/`--to`.
pub fn resolve_range(period: Option<&str>, from: Option<&str>, to: Option<&str>) -> AppResult<DateRange> {
    if let Some(p) = period {
        return parse_period(p);
    }

    let parse = |s: &str| parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()));

    let from = from.map(parse).transpose()?;
    let to = to.map(parse).transpose()?;

    if let (Some(f), Some(t)) = (from, to)
        && f > t
    {
        return Err(AppError::InvalidRange(format!("{f} is after {t}")));
    }

    Ok(DateRange::new(from, to))
}

/// First and last day covered by a single YYYY, YYYY-MM or YYYY-MM-DD.
fn period_bounds(s: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidRange(format!("unsupported period '{s}'"));

    match s.len() {
        // YYYY
        4 => {
            let y: i32 = s.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d1, month_last_day(d1).ok_or_else(invalid)?))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

fn month_last_day(first: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn single_periods() {
        assert_eq!(parse_period("2024").unwrap(), DateRange::between(d(2024, 1, 1), d(2024, 12, 31)));
        assert_eq!(parse_period("2024-02").unwrap(), DateRange::between(d(2024, 2, 1), d(2024, 2, 29)));
        assert_eq!(parse_period("2023-12").unwrap(), DateRange::between(d(2023, 12, 1), d(2023, 12, 31)));
        assert_eq!(parse_period("2024-05-02").unwrap(), DateRange::between(d(2024, 5, 2), d(2024, 5, 2)));
        assert!(parse_period("all").unwrap().is_unbounded());
    }

    #[test]
    fn ranges() {
        assert_eq!(
            parse_period("2024-05:2024-06").unwrap(),
            DateRange::between(d(2024, 5, 1), d(2024, 6, 30))
        );
        assert_eq!(
            parse_period("2024-05-01:2024-05-10").unwrap(),
            DateRange::between(d(2024, 5, 1), d(2024, 5, 10))
        );
    }

    #[test]
    fn malformed_periods() {
        assert!(parse_period("2024-05:2024").is_err());
        assert!(parse_period("2024-13").is_err());
        assert!(parse_period("yesterday").is_err());
        assert!(parse_period("2024-05-10:2024-05-01").is_err());
    }

    #[test]
    fn explicit_bounds() {
        let r = resolve_range(None, Some("2024-05-01"), None).unwrap();
        assert_eq!(r, DateRange::new(Some(d(2024, 5, 1)), None));

        let r = resolve_range(Some("2024-05"), Some("1999-01-01"), None).unwrap();
        assert_eq!(r.from, Some(d(2024, 5, 1)));

        assert!(resolve_range(None, Some("05/01/2024"), None).is_err());
        assert!(resolve_range(None, Some("2024-05-02"), Some("2024-05-01")).is_err());
    }
}
