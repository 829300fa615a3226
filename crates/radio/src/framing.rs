//! 802.11 beacon frame construction

use bytes::{BufMut, Bytes, BytesMut};
use mirage_core::AccessPoint;

/// Bytes surrounding the SSID: every frame is `FRAME_OVERHEAD + ssid_len`
/// long, and every consumer relies on that to size the radio hand-off.
pub const FRAME_OVERHEAD: usize = 51;

/// Timestamp carried by every frame unless live timestamps are enabled.
pub const TEMPLATE_TIMESTAMP: [u8; 8] = [0x83, 0x51, 0xf7, 0x8f, 0x8f, 0xab, 0x00, 0x00];

const FRAME_CONTROL: [u8; 2] = [0x80, 0x00]; // management / beacon subtype
const DURATION: [u8; 2] = [0x00, 0x00];
const BROADCAST: [u8; 6] = [0xff; 6];
const SEQUENCE_CONTROL: [u8; 2] = [0xc0, 0x6c];
const BEACON_INTERVAL_TU: [u8; 2] = [0x64, 0x00]; // 100 TU
const CAPABILITY_INFO: [u8; 2] = [0x31, 0x14];
const SSID_TAG: u8 = 0x00;
const SUPPORTED_RATES: [u8; 10] = [0x01, 0x08, 0x82, 0x84, 0x8b, 0x96, 0x24, 0x30, 0x48, 0x6c];
const DS_PARAMS_HEADER: [u8; 2] = [0x03, 0x01];

/// A single ready-to-transmit beacon frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeaconFrame {
    bytes: Bytes,
}

impl BeaconFrame {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Builds the beacon announcing `ap` on `channel`, with `timestamp` written
/// into the 8-byte field verbatim.
///
/// The BSSID lands in both the source-address and BSSID slots: the frame
/// impersonates the AP, so the two coincide. Inputs are trusted; the roster
/// constructor already bounds the SSID.
pub fn build_beacon(ap: &AccessPoint, channel: u8, timestamp: [u8; 8]) -> BeaconFrame {
    let ssid = ap.ssid();
    let mut buf = BytesMut::with_capacity(FRAME_OVERHEAD + ssid.len());

    buf.put_slice(&FRAME_CONTROL);
    buf.put_slice(&DURATION);
    buf.put_slice(&BROADCAST);
    buf.put_slice(&ap.bssid().0); // source
    buf.put_slice(&ap.bssid().0); // bssid
    buf.put_slice(&SEQUENCE_CONTROL);
    buf.put_slice(&timestamp);
    buf.put_slice(&BEACON_INTERVAL_TU);
    buf.put_slice(&CAPABILITY_INFO);

    buf.put_u8(SSID_TAG);
    buf.put_u8(ssid.len() as u8);
    buf.put_slice(ssid);

    buf.put_slice(&SUPPORTED_RATES);
    buf.put_slice(&DS_PARAMS_HEADER);
    buf.put_u8(channel);

    BeaconFrame { bytes: buf.freeze() }
}
