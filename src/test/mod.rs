mod nbt;
mod tag;
mod value;

/// Route `log` output through the test harness, so `RUST_LOG=trace` shows
/// which keys were omitted or pruned.
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
