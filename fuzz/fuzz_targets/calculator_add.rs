#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&base, message)) = data.split_first() else { return };
    let mut calc = shannon::entropy::ShannonCalculator::new();
    calc.set_log_base(i32::from(base as i8));
    calc.add_bytes(message.iter().copied());
    let result = calc.result();
    if message.is_empty() {
        assert!(result.is_nan());
    } else {
        assert!(result.is_finite() && result >= 0.0);
    }
    let _ = calc.report();
});
