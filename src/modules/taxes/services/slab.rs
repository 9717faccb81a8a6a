use rust_decimal::Decimal;

/// One contiguous income band taxed at a single marginal rate.
/// `upper_bound: None` marks the open-ended top band.
#[derive(Debug, Clone, PartialEq)]
pub struct Slab {
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

/// Ordered slab table for one regime, FY 2026-27
#[derive(Debug, Clone, PartialEq)]
pub struct SlabSchedule {
    slabs: Vec<Slab>,
}

fn lakhs(n: i64) -> Decimal {
    Decimal::from(n * 100_000)
}

fn percent(n: i64) -> Decimal {
    Decimal::new(n, 2)
}

impl SlabSchedule {
    /// Slabs must be in ascending order of `upper_bound`, with the last
    /// (and only the last) band unbounded.
    pub fn new(slabs: Vec<Slab>) -> Self {
        debug_assert!(
            slabs
                .windows(2)
                .all(|pair| match (pair[0].upper_bound, pair[1].upper_bound) {
                    (Some(a), Some(b)) => a < b,
                    (Some(_), None) => true,
                    _ => false,
                }),
            "slab bounds must be strictly ascending with an unbounded top band"
        );
        Self { slabs }
    }

    /// New Regime: 0-4L exempt, 4-8L 5%, 8-12L 10%, 12-20L 15%,
    /// 20-30L 20%, above 30L 30%
    pub fn new_regime() -> Self {
        Self::new(vec![
            Slab { upper_bound: Some(lakhs(4)), rate: Decimal::ZERO },
            Slab { upper_bound: Some(lakhs(8)), rate: percent(5) },
            Slab { upper_bound: Some(lakhs(12)), rate: percent(10) },
            Slab { upper_bound: Some(lakhs(20)), rate: percent(15) },
            Slab { upper_bound: Some(lakhs(30)), rate: percent(20) },
            Slab { upper_bound: None, rate: percent(30) },
        ])
    }

    /// Old Regime: 0-2.5L exempt, 2.5-5L 5%, 5-10L 20%, above 10L 30%
    pub fn old_regime() -> Self {
        Self::new(vec![
            Slab { upper_bound: Some(Decimal::from(250_000)), rate: Decimal::ZERO },
            Slab { upper_bound: Some(lakhs(5)), rate: percent(5) },
            Slab { upper_bound: Some(lakhs(10)), rate: percent(20) },
            Slab { upper_bound: None, rate: percent(30) },
        ])
    }

    /// Progressive marginal tax over this schedule.
    ///
    /// Walks the bands in order; each band taxes
    /// `min(remaining, upper_bound - previous_bound)` at its own rate and
    /// the open top band absorbs whatever is left. Negative input is a
    /// contract violation; callers clamp to zero first.
    pub fn tax_for(&self, taxable_income: Decimal) -> Decimal {
        let mut tax = Decimal::ZERO;
        let mut remaining = taxable_income;
        let mut previous_bound = Decimal::ZERO;

        for slab in &self.slabs {
            if remaining <= Decimal::ZERO {
                break;
            }

            let width = match slab.upper_bound {
                Some(upper) => (upper - previous_bound).min(remaining),
                None => remaining,
            };

            tax += width * slab.rate;
            remaining -= width;

            if let Some(upper) = slab.upper_bound {
                previous_bound = upper;
            }
        }

        tax
    }
}
