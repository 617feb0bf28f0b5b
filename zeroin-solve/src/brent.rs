mod config;
mod error;
mod sign;
mod solution;

pub use config::Config;
pub use error::Error;
pub use sign::Sign;
pub use solution::Solution;

use zeroin_core::UnivariateFn;

/// Finds a zero of `f` inside a bracketing interval using the Brent-Dekker
/// method.
///
/// The endpoints of `bracket` must map to function values of opposite sign.
/// Each iteration picks between inverse quadratic interpolation, a secant
/// step, and bisection, falling back to bisection whenever an interpolated
/// step fails the safeguard test. The function is evaluated at most
/// `2 + config.max_iters` times.
///
/// Either a root satisfying the configured tolerances is returned, or the
/// call fails outright; there is no best-effort partial result.
///
/// # Errors
///
/// Returns an error if the config is invalid, an endpoint is non-finite,
/// the endpoints do not bracket a sign change, the function fails or
/// produces a non-finite value, or the iteration budget runs out.
pub fn solve<F>(f: &F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: UnivariateFn,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let [min, max] = bracket;
    if !min.is_finite() {
        return Err(Error::NonFiniteBracket { value: min });
    }
    if !max.is_finite() {
        return Err(Error::NonFiniteBracket { value: max });
    }

    let y_min = eval_at(f, min)?;
    if y_min.abs() <= config.residual_tol {
        return Ok(Solution {
            x: min,
            residual: y_min,
            iters: 0,
        });
    }

    let y_max = eval_at(f, max)?;
    if y_max.abs() <= config.residual_tol {
        return Ok(Solution {
            x: max,
            residual: y_max,
            iters: 0,
        });
    }

    if Sign::of(y_min) == Sign::of(y_max) {
        return Err(Error::NoBracket {
            min,
            max,
            f_min: y_min,
            f_max: y_max,
        });
    }

    // (x1, y1) is always the current best iterate, (x0, y0) the previous
    // one, and (x2, y2) the far end of the bracket around x1.
    let mut x0 = min;
    let mut y0 = y_min;
    let mut x1 = max;
    let mut y1 = y_max;
    let mut x2 = x0;
    let mut y2 = y0;
    let mut delta = x1 - x0;
    let mut old_delta = delta;

    for iters in 0..config.max_iters {
        if y2.abs() < y1.abs() {
            // Rotate so x1 holds the point with the smallest |f|.
            x0 = x1;
            y0 = y1;
            x1 = x2;
            y1 = y2;
            x2 = x0;
            y2 = y0;
        }

        let tol = f64::max(config.x_rel_tol * x1.abs(), config.x_abs_tol);

        if y1.abs() <= config.residual_tol {
            return Ok(Solution {
                x: x1,
                residual: y1,
                iters,
            });
        }

        let dx = 0.5 * (x2 - x1);
        if dx.abs() <= tol {
            return Ok(Solution {
                x: x1,
                residual: y1,
                iters,
            });
        }

        if old_delta.abs() < tol || y0.abs() <= y1.abs() {
            // The last step made too little progress, or the previous
            // iterate is no better than the current one. Force bisection.
            delta = dx;
            old_delta = delta;
        } else {
            let r3 = y1 / y0;
            #[allow(clippy::float_cmp)]
            let (mut p, mut p1) = if x0 == x2 {
                // Only two distinct points: secant step.
                (2.0 * dx * r3, 1.0 - r3)
            } else {
                // Three distinct points: inverse quadratic interpolation.
                let r1 = y0 / y2;
                let r2 = y1 / y2;
                (
                    r3 * (2.0 * dx * r1 * (r1 - r2) - (x1 - x0) * (r2 - 1.0)),
                    (r1 - 1.0) * (r2 - 1.0) * (r3 - 1.0),
                )
            };

            // Normalize so p is non-negative and p/p1 keeps its sign.
            if p > 0.0 {
                p1 = -p1;
            } else {
                p = -p;
            }

            if 2.0 * p >= 3.0 * dx * p1 - (tol * p1).abs() || p >= (0.5 * old_delta * p1).abs() {
                // Interpolation points the wrong way or gains less than the
                // step two iterations ago. Fall back to bisection.
                delta = dx;
                old_delta = delta;
            } else {
                old_delta = delta;
                delta = p / p1;
            }
        }

        x0 = x1;
        y0 = y1;
        if delta.abs() > tol {
            x1 += delta;
        } else if dx > 0.0 {
            // Step at least one tolerance unit toward the far endpoint.
            x1 += tol;
        } else {
            x1 -= tol;
        }
        y1 = eval_at(f, x1)?;

        if Sign::of(y1) == Sign::of(y2) {
            // The zero now lies between x1 and the previous iterate.
            x2 = x0;
            y2 = y0;
            delta = x1 - x0;
            old_delta = delta;
        }
    }

    Err(Error::MaxIters {
        max_iters: config.max_iters,
    })
}

/// Evaluates the function, rejecting non-finite values.
fn eval_at<F>(f: &F, x: f64) -> Result<f64, Error>
where
    F: UnivariateFn,
{
    let value = f.eval(x).map_err(|source| Error::Evaluation {
        x,
        source: Box::new(source),
    })?;

    if !value.is_finite() {
        return Err(Error::NonFiniteEvaluation { x, value });
    }

    Ok(value)
}
