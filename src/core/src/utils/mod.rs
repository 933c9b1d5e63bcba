use rand::Rng;
use std::time::Instant;

pub struct IntegerUtils;

impl IntegerUtils {
    pub fn random(min: i32, max: i32) -> i32 {
        rand::rng().random_range(min..=max)
    }
}

pub struct FloatUtils;

impl FloatUtils {
    pub fn random(min: f32, max: f32) -> f32 {
        rand::rng().random_range(min..=max)
    }
}

pub struct FormattingUtils;

impl FormattingUtils {
    /// Money values carry one decimal of precision throughout.
    pub fn format_money(amount: f32) -> String {
        format!("{:.1}M", amount)
    }
}

pub struct TimeEstimation;

impl TimeEstimation {
    pub fn estimate<T, F: FnOnce() -> T>(action: F) -> (T, u128) {
        let now = Instant::now();
        let result = action();
        (result, now.elapsed().as_millis())
    }
}
