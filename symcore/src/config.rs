use core::sync::atomic::{AtomicBool, Ordering};

static CANONICAL_CHECK_ENABLED: AtomicBool = AtomicBool::new(cfg!(debug_assertions));

// When enabled, every polynomial arithmetic entry point asserts that its
// result is canonical.
pub fn is_canonical_check_enabled() -> bool {
    CANONICAL_CHECK_ENABLED.load(Ordering::Relaxed)
}

pub fn set_canonical_check_enabled(val: bool) {
    CANONICAL_CHECK_ENABLED.store(val, Ordering::Relaxed)
}

macro_rules! check_canonical {
    ($p:expr) => {{
        let p = $p;
        if $crate::config::is_canonical_check_enabled() { 
            assert!(p.is_canonical(), "non-canonical result: {:?}", p);
        }
        p
    }}
}

pub(crate) use check_canonical;
