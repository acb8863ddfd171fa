use rand::RngExt;
use std::f64::consts::PI;

pub struct RandomUtils;

impl RandomUtils {
    /// Box-Muller sample from N(mean, std_dev).
    pub fn normal<R: RngExt>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
        let u = Self::open_unit(rng);
        let v = Self::open_unit(rng);

        mean + std_dev * (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos()
    }

    /// Normal sample rounded to the nearest integer and floored at `min`.
    pub fn rounded_normal<R: RngExt>(rng: &mut R, mean: f64, std_dev: f64, min: i32) -> i32 {
        (Self::normal(rng, mean, std_dev).round() as i32).max(min)
    }

    pub fn index<R: RngExt>(rng: &mut R, len: usize) -> usize {
        rng.random_range(0..len)
    }

    pub fn choose<'a, T, R: RngExt>(rng: &mut R, items: &'a [T]) -> &'a T {
        &items[Self::index(rng, items.len())]
    }

    pub fn chance<R: RngExt>(rng: &mut R, probability: f64) -> bool {
        rng.random::<f64>() < probability
    }

    /// Uniform draw in (0, 1), zero is drawn again.
    fn open_unit<R: RngExt>(rng: &mut R) -> f64 {
        loop {
            let value = rng.random::<f64>();
            if value > 0.0 {
                return value;
            }
        }
    }
}
