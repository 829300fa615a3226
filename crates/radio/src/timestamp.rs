//! Beacon timestamp field encoding

use std::time::Duration;

/// Encodes "microseconds since this AP's radio came up" as the little-endian
/// 8-byte beacon timestamp field.
///
/// `epoch_offset_ms` shifts the device clock so each synthetic AP reports a
/// distinct uptime; a negative offset larger than the elapsed time clamps
/// to zero rather than wrapping.
pub fn encode_uptime(elapsed: Duration, epoch_offset_ms: i64) -> [u8; 8] {
    let micros = elapsed.as_micros() as i64 + epoch_offset_ms.saturating_mul(1_000);
    (micros.max(0) as u64).to_le_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_little_endian_layout() {
        let field = encode_uptime(Duration::from_micros(0x0102_0304), 0);
        assert_eq!(field, [0x04, 0x03, 0x02, 0x01, 0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_offset_shifts_uptime() {
        let base = encode_uptime(Duration::from_secs(10), 0);
        let shifted = encode_uptime(Duration::from_secs(10), 2_500);
        assert_eq!(u64::from_le_bytes(base), 10_000_000);
        assert_eq!(u64::from_le_bytes(shifted), 12_500_000);
    }

    #[test]
    fn test_negative_offset_clamps_to_zero() {
        let field = encode_uptime(Duration::from_secs(1), -60_000);
        assert_eq!(u64::from_le_bytes(field), 0);
    }

    #[test]
    fn test_uptime_grows_with_elapsed_time() {
        let offset = 731_000;
        let early = u64::from_le_bytes(encode_uptime(Duration::from_millis(100), offset));
        let late = u64::from_le_bytes(encode_uptime(Duration::from_millis(205), offset));
        assert!(late > early);
        assert_eq!(late - early, 105_000);
    }
}
