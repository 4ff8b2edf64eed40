/// Step, state and byte counts printed with `'` between thousands: `987'654'321'234`.
///
/// Wide enough for table bounds such as `2^64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct NiceInt(u128);

impl From<u128> for NiceInt {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<u64> for NiceInt {
    fn from(value: u64) -> Self {
        Self(value as u128)
    }
}

impl From<usize> for NiceInt {
    fn from(value: usize) -> Self {
        Self(value as u128)
    }
}

impl std::fmt::Display for NiceInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() * 4 / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i != 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('\'');
            }
            grouped.push(ch);
        }
        f.pad(&grouped)
    }
}

impl NiceInt {
    /// Digits without separators, for machine-readable output.
    pub fn get(self) -> u128 {
        self.0
    }
}
