use serde::{Deserialize, Serialize};

/// One tick position; in log mode `position` is a log10 value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub position: f64,
    pub is_major: bool,
}

/// Tick request for one axis: about `target` major ticks in `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickAxis {
    pub low: f64,
    pub high: f64,
    pub target: usize,
    pub log: bool,
}

impl TickAxis {
    #[must_use]
    pub fn new(low: f64, high: f64, target: usize, log: bool) -> Self {
        Self {
            low,
            high,
            target,
            log,
        }
    }

    /// Returns a fresh iterator over ticks in ascending order.
    ///
    /// Cheap to call on every draw; the iterator holds only counters.
    #[must_use]
    pub fn ticks(&self) -> TickIter {
        let (low, high) = if self.low <= self.high {
            (self.low, self.high)
        } else {
            (self.high, self.low)
        };
        let width = high - low;
        if !low.is_finite() || !high.is_finite() || width <= 0.0 {
            return TickIter::empty();
        }
        let target = self.target.max(1) as f64;

        if self.log && width >= 1.0 {
            let rough_decades = width / target;
            if rough_decades <= 1.0 {
                return TickIter::decades(low, high);
            }
            let step = nice_step(rough_decades).0.round().max(1.0);
            if step <= 10.0 {
                return TickIter::uniform(low, high, 1.0, step as i64);
            }
        }

        let (step, factor) = nice_step(width / target);
        let per_major = minor_divisions(factor);
        TickIter::uniform(low, high, step / per_major as f64, per_major)
    }
}

/// Rounds `rough` to 1, 2 or 5 times a power of ten.
///
/// Returns the step and the chosen factor.
fn nice_step(rough: f64) -> (f64, u8) {
    let magnitude = 10.0_f64.powf(rough.abs().log10().floor());
    let normalized = rough / magnitude;
    let factor = if normalized <= 1.5 {
        1
    } else if normalized <= 3.5 {
        2
    } else if normalized <= 7.5 {
        5
    } else {
        10
    };
    (f64::from(factor) * magnitude, factor)
}

fn minor_divisions(factor: u8) -> i64 {
    match factor {
        2 => 4,
        _ => 5,
    }
}

#[derive(Debug, Clone)]
enum TickState {
    Empty,
    Uniform {
        minor_step: f64,
        per_major: i64,
        next: i64,
        last: i64,
    },
    Decades {
        low: f64,
        high: f64,
        decade: i64,
        last_decade: i64,
        multiple: u8,
    },
}

/// Lazy, finite tick sequence produced by `TickAxis::ticks`.
#[derive(Debug, Clone)]
pub struct TickIter {
    state: TickState,
}

impl TickIter {
    fn empty() -> Self {
        Self {
            state: TickState::Empty,
        }
    }

    fn uniform(low: f64, high: f64, minor_step: f64, per_major: i64) -> Self {
        if !minor_step.is_finite() || minor_step <= 0.0 {
            return Self::empty();
        }
        let first = (low / minor_step).ceil();
        let last = (high / minor_step).floor();
        if !first.is_finite() || !last.is_finite() || last - first > 100_000.0 {
            return Self::empty();
        }
        Self {
            state: TickState::Uniform {
                minor_step,
                per_major: per_major.max(1),
                next: first as i64,
                last: last as i64,
            },
        }
    }

    fn decades(low: f64, high: f64) -> Self {
        Self {
            state: TickState::Decades {
                low,
                high,
                decade: low.floor() as i64,
                last_decade: high.floor() as i64,
                multiple: 1,
            },
        }
    }
}

impl Iterator for TickIter {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        match &mut self.state {
            TickState::Empty => None,
            TickState::Uniform {
                minor_step,
                per_major,
                next,
                last,
            } => {
                if *next > *last {
                    return None;
                }
                let index = *next;
                *next += 1;
                Some(Tick {
                    position: index as f64 * *minor_step,
                    is_major: index.rem_euclid(*per_major) == 0,
                })
            }
            TickState::Decades {
                low,
                high,
                decade,
                last_decade,
                multiple,
            } => loop {
                if *decade > *last_decade {
                    return None;
                }
                let position = *decade as f64 + f64::from(*multiple).log10();
                let is_major = *multiple == 1;
                if *multiple == 9 {
                    *multiple = 1;
                    *decade += 1;
                } else {
                    *multiple += 1;
                }
                if position > *high {
                    *decade = *last_decade + 1;
                    return None;
                }
                if position >= *low {
                    return Some(Tick { position, is_major });
                }
            },
        }
    }
}
