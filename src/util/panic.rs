/// Asserts that the provided block panics, optionally checking that the panic message contains
/// the given text.
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            "assertion failed to panic"
        );
    };
    ($run:block, $contains:literal) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)) {
            Ok(_) => panic!("assertion failed to panic"),
            Err(payload) => {
                let msg = payload
                    .downcast_ref::<String>()
                    .map(String::as_str)
                    .or_else(|| payload.downcast_ref::<&str>().copied())
                    .unwrap_or_default();
                assert!(
                    msg.contains($contains),
                    "panic message {:?} doesn't mention {:?}",
                    msg,
                    $contains
                );
            }
        }
    };
}

pub(crate) use assert_panics;
