/// Evaluate `a * sin(x)^2 + b * sin(x) + c`.
///
/// Total over all reals. NaN and infinite inputs flow through to the result
/// unchanged by any special casing.
pub fn compute(x: f64, a: f64, b: f64, c: f64) -> f64 {
    let s = x.sin();
    a * (s * s) + b * s + c
}

/// The formula coefficients, bundled so a sweep can evaluate many points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Coefficients {
    pub fn evaluate(&self, x: f64) -> f64 {
        compute(x, self.a, self.b, self.c)
    }
}
