//! Root finding over fitted trajectories.

use crate::trajectory::fit::Fit;


/// Bisection stops once the bracket is narrower than this many days.
const BISECTION_TOLERANCE_DAYS: f64 = 1e-4;
const MAX_BISECTION_STEPS: usize = 100;

/// Day offset (on the fit's own axis) where the curve reaches `target`.
///
/// Returns `None` when `target` is at or below the floor, or when the
/// solution is not finite. The result may be negative if the target lies
/// above the curve's starting value; callers compare against today's offset.
pub fn time_to_target(fit: &Fit, target: f64) -> Option<f64> {
    if !target.is_finite() || target <= fit.c {
        return None;
    }
    let ratio = (target - fit.c) / fit.a;
    if ratio <= 0.0 || !ratio.is_finite() {
        return None;
    }
    let t = -ratio.ln() / fit.b;
    t.is_finite().then_some(t)
}

/// First root of `h` in `[t_start, t_end]`.
///
/// `h` is sampled at `sample_count` evenly spaced points; the first sign
/// change is refined by bisection. A sample that lands exactly on zero is
/// returned as is.
pub fn find_next_root<H>(h: H, t_start: f64, t_end: f64, sample_count: usize) -> Option<f64>
where
    H: Fn(f64) -> f64,
{
    if !(t_start.is_finite() && t_end.is_finite()) || t_end < t_start || sample_count < 2 {
        return None;
    }

    let step = (t_end - t_start) / (sample_count - 1) as f64;
    let mut prev_t = t_start;
    let mut prev_h = h(prev_t);
    if prev_h == 0.0 {
        return Some(prev_t);
    }

    for i in 1..sample_count {
        let t = if i == sample_count - 1 {
            t_end
        } else {
            t_start + i as f64 * step
        };
        let value = h(t);
        if value == 0.0 {
            return Some(t);
        }
        if prev_h.is_finite() && value.is_finite() && prev_h.signum() != value.signum() {
            return Some(bisect(&h, prev_t, t, prev_h));
        }
        prev_t = t;
        prev_h = value;
    }
    None
}

/// First day offset in `[t_start, t_end]` where two trajectories cross.
///
/// Offsets are measured on `fit_a`'s axis; `fit_b` is re-anchored onto it.
pub fn find_next_intercept(
    fit_a: &Fit,
    fit_b: &Fit,
    t_start: f64,
    t_end: f64,
    sample_count: usize,
) -> Option<f64> {
    let shift = fit_b.t_of(fit_a.first_date);
    find_next_root(
        |t| fit_a.predict(t) - fit_b.predict(t + shift),
        t_start,
        t_end,
        sample_count,
    )
}

fn bisect<H>(h: &H, mut lo: f64, mut hi: f64, mut h_lo: f64) -> f64
where
    H: Fn(f64) -> f64,
{
    for _ in 0..MAX_BISECTION_STEPS {
        if hi - lo <= BISECTION_TOLERANCE_DAYS {
            break;
        }
        let mid = 0.5 * (lo + hi);
        let h_mid = h(mid);
        if h_mid == 0.0 {
            return mid;
        }
        if h_mid.signum() == h_lo.signum() {
            lo = mid;
            h_lo = h_mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}
