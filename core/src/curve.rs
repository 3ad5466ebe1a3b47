//! Trend curves fitted to sparse (date, value) control points.
//!
//! Curves work on ordinal day numbers (days since 0001-01-01 CE) so
//! that a curve fitted once can be queried for any cursor date.

use crate::error::{LedgerError, LedgerResult};
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub date:  NaiveDate,
    pub value: f64,
}

impl ControlPoint {
    pub fn ymd(year: i32, month: u32, day: u32, value: f64) -> LedgerResult<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(LedgerError::InvalidDate { year, month, day })?;
        Ok(Self { date, value })
    }
}

fn ordinal(date: NaiveDate) -> i32 {
    date.num_days_from_ce()
}

fn check_points(points: &[ControlPoint], min: usize) -> LedgerResult<()> {
    if points.len() < min {
        return Err(LedgerError::InvalidCurve {
            reason: format!("need at least {min} control points, got {}", points.len()),
        });
    }
    if let Some(pair) = points.windows(2).find(|w| w[0].date >= w[1].date) {
        return Err(LedgerError::InvalidCurve {
            reason: format!("control dates not increasing at {}", pair[1].date),
        });
    }
    Ok(())
}

/// Natural cubic spline through every control point.
///
/// Smooth (C2) between points and free to overshoot them; outside the
/// control span the end segments are extended. Used when a single
/// least-squares cubic cannot meet the smoothing budget.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivative at each knot. Zero at both ends.
    m:  Vec<f64>,
}

impl CubicSpline {
    pub fn fit(points: &[ControlPoint]) -> LedgerResult<Self> {
        check_points(points, 2)?;
        let xs: Vec<f64> = points.iter().map(|p| ordinal(p.date) as f64).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.value).collect();
        let n = xs.len();
        let mut m = vec![0.0; n];

        if n > 2 {
            // Tridiagonal system for the interior knots, solved with the
            // Thomas algorithm.
            let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
            let k = n - 2;
            let mut diag = vec![0.0; k];
            let mut upper = vec![0.0; k];
            let mut rhs = vec![0.0; k];
            for j in 0..k {
                let i = j + 1;
                diag[j] = 2.0 * (h[i - 1] + h[i]);
                upper[j] = h[i];
                rhs[j] = 6.0 * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]);
            }
            for j in 1..k {
                let w = h[j] / diag[j - 1];
                diag[j] -= w * upper[j - 1];
                rhs[j] -= w * rhs[j - 1];
            }
            m[k] = rhs[k - 1] / diag[k - 1];
            for j in (0..k - 1).rev() {
                m[j + 1] = (rhs[j] - upper[j] * m[j + 2]) / diag[j];
            }
        }

        Ok(Self { xs, ys, m })
    }

    pub fn eval(&self, x: f64) -> f64 {
        let last = self.xs.len() - 2;
        let i = match self.xs.iter().position(|&knot| knot > x) {
            Some(0) => 0,
            Some(p) => (p - 1).min(last),
            None => last,
        };
        let h = self.xs[i + 1] - self.xs[i];
        let a = self.xs[i + 1] - x;
        let b = x - self.xs[i];
        self.m[i] * a.powi(3) / (6.0 * h)
            + self.m[i + 1] * b.powi(3) / (6.0 * h)
            + (self.ys[i] / h - self.m[i] * h / 6.0) * a
            + (self.ys[i + 1] / h - self.m[i + 1] * h / 6.0) * b
    }
}

/// Least-squares cubic over centred, scaled ordinal days.
///
/// This is what a cubic smoothing spline reduces to when a single
/// polynomial already keeps the squared residual within the smoothing
/// budget: no interior knots, and no obligation to hit any control point.
#[derive(Debug, Clone)]
pub struct LeastSquaresCubic {
    centre: f64,
    scale:  f64,
    /// Coefficients of 1, t, t^2, t^3.
    coeffs: [f64; 4],
}

impl LeastSquaresCubic {
    pub fn fit(points: &[ControlPoint]) -> LedgerResult<Self> {
        check_points(points, 4)?;
        let first = ordinal(points[0].date) as f64;
        let last = ordinal(points[points.len() - 1].date) as f64;
        let centre = (first + last) / 2.0;
        let scale = (last - first) / 2.0;

        // Normal equations: sum t^(i+j) * c_j = sum y * t^i.
        let mut a = [[0.0; 5]; 4];
        for p in points {
            let t = (ordinal(p.date) as f64 - centre) / scale;
            let powers = [1.0, t, t * t, t * t * t];
            for i in 0..4 {
                for j in 0..4 {
                    a[i][j] += powers[i] * powers[j];
                }
                a[i][4] += powers[i] * p.value;
            }
        }

        // Gaussian elimination with partial pivoting.
        for col in 0..4 {
            let pivot = (col..4)
                .max_by(|&r, &s| a[r][col].abs().total_cmp(&a[s][col].abs()))
                .unwrap_or(col);
            a.swap(col, pivot);
            if a[col][col].abs() < f64::EPSILON {
                return Err(LedgerError::InvalidCurve {
                    reason: "singular least-squares system".into(),
                });
            }
            for row in col + 1..4 {
                let f = a[row][col] / a[col][col];
                for k in col..5 {
                    a[row][k] -= f * a[col][k];
                }
            }
        }
        let mut coeffs = [0.0; 4];
        for row in (0..4).rev() {
            let tail: f64 = (row + 1..4).map(|k| a[row][k] * coeffs[k]).sum();
            coeffs[row] = (a[row][4] - tail) / a[row][row];
        }

        Ok(Self { centre, scale, coeffs })
    }

    pub fn eval(&self, x: f64) -> f64 {
        let t = (x - self.centre) / self.scale;
        self.coeffs.iter().rev().fold(0.0, |acc, c| acc * t + c)
    }

    /// Sum of squared residuals at the control points.
    pub fn residual(&self, points: &[ControlPoint]) -> f64 {
        points
            .iter()
            .map(|p| (self.eval(ordinal(p.date) as f64) - p.value).powi(2))
            .sum()
    }
}

/// Piecewise-constant curve returning the value of the closest control
/// point. A query exactly halfway between two points takes the earlier one.
#[derive(Debug, Clone)]
pub struct NearestStep {
    points: Vec<(i32, f64)>,
    first:  NaiveDate,
    last:   NaiveDate,
}

impl NearestStep {
    pub fn fit(points: &[ControlPoint]) -> LedgerResult<Self> {
        check_points(points, 1)?;
        Ok(Self {
            points: points.iter().map(|p| (ordinal(p.date), p.value)).collect(),
            first:  points[0].date,
            last:   points[points.len() - 1].date,
        })
    }

    pub fn value_at(&self, date: NaiveDate) -> LedgerResult<f64> {
        if date < self.first || date > self.last {
            return Err(LedgerError::OutOfDomain {
                date,
                first: self.first,
                last:  self.last,
            });
        }
        let x = ordinal(date);
        let nearest = self
            .points
            .windows(2)
            .find(|w| x <= w[1].0)
            .map(|w| if x - w[0].0 <= w[1].0 - x { w[0].1 } else { w[1].1 })
            .unwrap_or(self.points[0].1);
        Ok(nearest)
    }
}

#[derive(Debug, Clone)]
pub enum TrendCurve {
    Cubic(LeastSquaresCubic),
    Spline(CubicSpline),
    Nearest(NearestStep),
}

impl TrendCurve {
    /// Cubic smoothing fit with the smoothing budget set to the number of
    /// control points (unit weights).
    pub fn smooth(points: &[ControlPoint]) -> LedgerResult<Self> {
        Self::smooth_within(points, points.len() as f64)
    }

    /// Single least-squares cubic while its squared residual stays within
    /// `budget`; otherwise a knot at every interior control point, which is
    /// the interpolating spline.
    pub fn smooth_within(points: &[ControlPoint], budget: f64) -> LedgerResult<Self> {
        let cubic = LeastSquaresCubic::fit(points)?;
        let residual = cubic.residual(points);
        if residual <= budget {
            return Ok(Self::Cubic(cubic));
        }
        log::debug!("least-squares residual {residual:.3} exceeds {budget:.3}; interpolating");
        Self::spline(points)
    }

    pub fn spline(points: &[ControlPoint]) -> LedgerResult<Self> {
        CubicSpline::fit(points).map(Self::Spline)
    }

    pub fn nearest(points: &[ControlPoint]) -> LedgerResult<Self> {
        NearestStep::fit(points).map(Self::Nearest)
    }

    pub fn value_at(&self, date: NaiveDate) -> LedgerResult<f64> {
        match self {
            Self::Cubic(cubic) => Ok(cubic.eval(ordinal(date) as f64)),
            Self::Spline(spline) => Ok(spline.eval(ordinal(date) as f64)),
            Self::Nearest(step) => step.value_at(date),
        }
    }
}
