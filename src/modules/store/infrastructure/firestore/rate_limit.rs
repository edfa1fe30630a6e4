//! Outgoing request throttle for the Firestore REST adapter

use governor::{
    clock::DefaultClock,
    middleware::NoOpMiddleware,
    state::{direct::NotKeyed, InMemoryState},
    Quota, RateLimiter as GovernorRateLimiter,
};
use std::num::NonZeroU32;
use std::time::Duration;

use crate::shared::errors::{StoreError, StoreResult};

pub type DirectRateLimiter =
    GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

/// Create a rate limiter with specified requests per second and burst capacity
pub fn create_rate_limiter(
    requests_per_second: f64,
    burst_size: u32,
) -> StoreResult<DirectRateLimiter> {
    if !requests_per_second.is_finite() || requests_per_second <= 0.0 {
        return Err(StoreError::Unavailable {
            message: format!(
                "requests_per_second must be positive, got {}",
                requests_per_second
            ),
        });
    }

    // Convert rate to duration between requests
    let period = Duration::from_secs_f64(1.0 / requests_per_second);
    let burst = NonZeroU32::new(burst_size.max(1)).ok_or_else(|| StoreError::Unavailable {
        message: "burst size must be positive".to_string(),
    })?;
    let quota = Quota::with_period(period)
        .ok_or_else(|| StoreError::Unavailable {
            message: format!("invalid request period {:?}", period),
        })?
        .allow_burst(burst);

    Ok(GovernorRateLimiter::direct(quota))
}
