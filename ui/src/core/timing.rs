//! Timer helpers for the simulated operations (photo analysis, voice capture).

/// Suspend for `ms` milliseconds. Always resolves.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let ms = u32::try_from(ms).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

/// Suspend for `ms` milliseconds. Always resolves.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
