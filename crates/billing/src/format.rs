//! Currency formatting.

const CENTS_PER_DOLLAR: u64 = 100;

/// Format an amount of cents as US dollars, e.g. `123456` -> `"$1,234.56"`.
pub fn usd(cents: u64) -> String {
    let dollars = (cents / CENTS_PER_DOLLAR).to_string();
    let fraction = cents % CENTS_PER_DOLLAR;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("${grouped}.{fraction:02}")
}
