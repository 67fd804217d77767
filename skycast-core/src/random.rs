use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniform values in `[0, 1)`.
///
/// Any `FnMut() -> f64` closure is a source, which keeps synthesis
/// deterministic under test (`|| 0.5`).
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Entropy-seeded source for normal runs.
pub fn system_random() -> impl RandomSource + Send + 'static {
    let mut rng = StdRng::from_entropy();
    move || rng.gen_range(0.0..1.0)
}

/// `floor(r * span) + offset`, the integer draw used for every jittered field.
pub(crate) fn draw_int(rng: &mut dyn RandomSource, span: i32, offset: i32) -> i32 {
    (rng.next_unit() * f64::from(span)).floor() as i32 + offset
}
