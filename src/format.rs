// 9.0: display formatting derived from calculator outputs. strings only,
// no math decisions here.

use crate::types::{Timestamp, Usd};
use rust_decimal::{Decimal, RoundingStrategy};

/// "$1,234.56" / "-$0.51". two decimal places, banker-free rounding.
pub fn usd(amount: Usd) -> String {
    let mut rounded = amount
        .value()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{}${}", sign, group_thousands(&rounded.abs().to_string()))
}

/// "12.34%". caller passes a fraction (0.1234), not a percentage.
pub fn percent(fraction: Decimal, dp: u32) -> String {
    let mut scaled = (fraction * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    scaled.rescale(dp);
    format!("{}%", scaled)
}

/// "+12.34%" / "-5.00%". pnl-style display with explicit sign.
pub fn signed_percent(fraction: Decimal, dp: u32) -> String {
    let mut scaled = (fraction * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    scaled.rescale(dp);
    if scaled >= Decimal::ZERO {
        format!("+{}%", scaled)
    } else {
        format!("{}%", scaled)
    }
}

/// Token quantity at a fixed precision: "1.500000 SOL" style, without the
/// symbol (the UI appends it).
pub fn token_amount(amount: Decimal, dp: u32) -> String {
    amount
        .round_dp_with_strategy(dp, RoundingStrategy::ToZero)
        .to_string()
}

/// Position age: "2d 4h", "3h 24m", "45m", "<1m".
pub fn age(opened_at: Timestamp, now: Timestamp) -> String {
    let mut mins = (now.as_millis() - opened_at.as_millis()).max(0) / 60_000;
    let days = mins / 1440;
    mins %= 1440;
    let hours = mins / 60;
    mins %= 60;

    if days > 0 {
        format!("{}d {}h", days, hours)
    } else if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else if mins > 0 {
        format!("{}m", mins)
    } else {
        "<1m".to_string()
    }
}

fn group_thousands(digits: &str) -> String {
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{}.{}", grouped, f),
        None => grouped,
    }
}
