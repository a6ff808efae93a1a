use super::*;

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    tracing::debug!(target: "ssr_assert", "tracing initialized");
}
