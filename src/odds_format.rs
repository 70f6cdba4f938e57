use crate::price::NO_PRICE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OddsFormat {
    Decimal,
    American,
    Fractional,
}

impl OddsFormat {
    pub fn all() -> &'static [(Self, &'static str)] {
        &[
            (Self::Decimal, "Decimal"),
            (Self::American, "American"),
            (Self::Fractional, "Fractional"),
        ]
    }

    pub fn from_index(idx: i32) -> Self {
        match idx {
            1 => Self::American,
            2 => Self::Fractional,
            _ => Self::Decimal,
        }
    }

    pub fn render(self, d: f64) -> String {
        match self {
            Self::Decimal => crate::price::format_price(d),
            Self::American => format_american(d),
            Self::Fractional => format_fractional(d),
        }
    }
}

pub fn format_american(d: f64) -> String {
    if !d.is_finite() || d <= 1.0 {
        return NO_PRICE.into();
    }
    let b = d - 1.0;
    if d >= 2.0 {
        format!("+{}", (b * 100.0).round() as i64)
    } else {
        format!("-{}", (100.0 / b).round() as i64)
    }
}

pub fn format_fractional(d: f64) -> String {
    if !d.is_finite() || d <= 1.0 {
        return NO_PRICE.into();
    }
    let (num, den) = approx_fraction(d - 1.0, 1_000, 100);
    format!("{}/{}", num, den)
}

// continued fraction expansion, stopping before the denominator exceeds max_den
fn approx_fraction(x: f64, max_den: i64, max_iter: i32) -> (i64, i64) {
    let mut x = x;
    let mut a = x.floor();
    let (mut h0, mut k0): (i64, i64) = (1, 0);
    let (mut h1, mut k1): (i64, i64) = (a as i64, 1);
    for _ in 0..max_iter {
        let frac = x - a;
        if frac.abs() < 1e-9 {
            break;
        }
        x = 1.0 / frac;
        a = x.floor();
        let h2 = h0 + (a as i64) * h1;
        let k2 = k0 + (a as i64) * k1;
        if k2 > max_den {
            break;
        }
        (h0, k0, h1, k1) = (h1, k1, h2, k2);
    }
    (h1, k1)
}
