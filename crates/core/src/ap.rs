use std::fmt;

use serde::{Deserialize, Serialize};

use crate::RosterError;

/// Longest SSID the beacon element can carry.
pub const MAX_SSID_LEN: usize = 32;

/// 6-byte link-layer address an access point advertises.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bssid(pub [u8; 6]);

impl fmt::Display for Bssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

/// One synthetic network identity.
///
/// The SSID lives in a fixed 32-byte buffer with a cached length; the only
/// constructor rejects names longer than [`MAX_SSID_LEN`], so every stored
/// identity already fits the beacon element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessPoint {
    bssid: Bssid,
    ssid: [u8; MAX_SSID_LEN],
    ssid_len: u8,
    epoch_offset_ms: i64,
}

impl AccessPoint {
    pub fn new(bssid: Bssid, ssid: &[u8], epoch_offset_ms: i64) -> Result<Self, RosterError> {
        if ssid.len() > MAX_SSID_LEN {
            return Err(RosterError::SsidTooLong { len: ssid.len() });
        }

        let mut buf = [0u8; MAX_SSID_LEN];
        buf[..ssid.len()].copy_from_slice(ssid);

        Ok(Self {
            bssid,
            ssid: buf,
            ssid_len: ssid.len() as u8,
            epoch_offset_ms,
        })
    }

    pub fn bssid(&self) -> Bssid {
        self.bssid
    }

    /// Advertised name; empty for a hidden network.
    pub fn ssid(&self) -> &[u8] {
        &self.ssid[..self.ssid_len as usize]
    }

    pub fn ssid_len(&self) -> u8 {
        self.ssid_len
    }

    pub fn is_hidden(&self) -> bool {
        self.ssid_len == 0
    }

    /// Signed offset (milliseconds) added to the device clock so this AP
    /// reports its own plausible uptime.
    pub fn epoch_offset_ms(&self) -> i64 {
        self.epoch_offset_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ssid_up_to_limit() {
        let bssid = Bssid([0x02, 0x00, 0x00, 0x00, 0x00, 0x01]);
        let name = [b'a'; MAX_SSID_LEN];

        let ap = AccessPoint::new(bssid, &name, 0).unwrap();
        assert_eq!(ap.ssid(), &name);
        assert_eq!(ap.ssid_len() as usize, MAX_SSID_LEN);
        assert!(!ap.is_hidden());
    }

    #[test]
    fn test_rejects_overlong_ssid() {
        let bssid = Bssid([0x02, 0x00, 0x00, 0x00, 0x00, 0x02]);
        let name = [b'x'; MAX_SSID_LEN + 1];

        let result = AccessPoint::new(bssid, &name, 0);
        assert!(matches!(result, Err(RosterError::SsidTooLong { len: 33 })));
    }

    #[test]
    fn test_empty_ssid_is_hidden() {
        let bssid = Bssid([0x02, 0x00, 0x00, 0x00, 0x00, 0x03]);

        let ap = AccessPoint::new(bssid, &[], -5_000).unwrap();
        assert!(ap.is_hidden());
        assert_eq!(ap.ssid(), &[] as &[u8]);
        assert_eq!(ap.epoch_offset_ms(), -5_000);
    }

    #[test]
    fn test_bssid_display() {
        let bssid = Bssid([0x10, 0xbd, 0x18, 0x5e, 0x29, 0x86]);
        assert_eq!(bssid.to_string(), "10:bd:18:5e:29:86");
    }
}
