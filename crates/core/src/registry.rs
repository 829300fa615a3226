//! Compiled-in roster of synthetic access points.

use crate::ap::{AccessPoint, Bssid};

/// Identity table for the Museumplein installation: BSSID, advertised name,
/// synthetic boot offset in milliseconds. One entry is intentionally hidden.
const BUILTIN_ROSTER: &[([u8; 6], &str, i64)] = &[
    ([0x10, 0xbd, 0x18, 0x5e, 0x29, 0x86], "RIJKS SA", 97_433_000),
    ([0x10, 0xbd, 0x18, 0x5e, 0x2b, 0x14], "Rijksmuseum Gasten", 97_433_000 + 52_000),
    ([0x84, 0xd4, 0x7e, 0x12, 0xa0, 0x55], "Van Gogh Museum Gast", 8_119_000),
    ([0x84, 0xd4, 0x7e, 0x12, 0xa0, 0x56], "VGM Kantoor", 8_171_000),
    ([0xf0, 0x9f, 0xc2, 0x3a, 0x91, 0x02], "Stedelijk Publiek", 411_268_000),
    ([0x00, 0x0b, 0x86, 0x6e, 0x01, 0xc3], "Concertgebouw Gasten", 1_209_600_000),
    ([0xb4, 0xfb, 0xe4, 0x77, 0x20, 0x18], "Cobra Cafe", 63_540_000),
    ([0xb4, 0xfb, 0xe4, 0x77, 0x20, 0x19], "Cobra Cafe Terras", 63_595_000),
    ([0x9c, 0x3d, 0xcf, 0x08, 0x4e, 0xaa], "Conservatorium Hotel", 2_591_000_000),
    ([0x9c, 0x3d, 0xcf, 0x08, 0x4e, 0xab], "Conservatorium Spa", 2_591_060_000),
    ([0x00, 0x26, 0x5a, 0xd1, 0x73, 0x3f], "Coster Diamonds Guest", 189_000_000),
    ([0xa0, 0x40, 0xa0, 0x6b, 0x58, 0x01], "Museumplein Free WiFi", 36_000_000),
    ([0xa0, 0x40, 0xa0, 0x6b, 0x58, 0x02], "Museumplein Free WiFi", 36_004_000),
    ([0x62, 0x45, 0xb1, 0x99, 0x04, 0x7e], "KPN Fon", 730_120_000),
    ([0x62, 0x45, 0xb1, 0x99, 0x04, 0x7f], "", 730_121_000),
    ([0xc0, 0xc9, 0xe3, 0x2e, 0x66, 0x90], "Ziggo8C41F", 514_377_000),
    ([0x44, 0xfe, 0x3b, 0x5a, 0x12, 0xd4], "DirectPrint-D4 Canon", 21_600_000),
    ([0xda, 0xa1, 0x19, 0x30, 0x8b, 0x61], "Tours&Tickets Kiosk", 4_920_000),
    ([0x50, 0xc7, 0xbf, 0x83, 0x0f, 0x27], "PC Hooftstraat 92", 1_022_400_000),
    ([0x50, 0xc7, 0xbf, 0x83, 0x0f, 0x28], "PC Hooftstraat 92 5G", 1_022_460_000),
];

/// Immutable, ordered collection of synthetic access points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessPointRegistry {
    aps: Vec<AccessPoint>,
}

impl AccessPointRegistry {
    /// Wraps an already-validated table. An empty roster is allowed; bursts
    /// over it simply transmit nothing.
    pub fn new(aps: Vec<AccessPoint>) -> Self {
        Self { aps }
    }

    /// The compiled-in installation roster.
    pub fn builtin() -> Self {
        let aps = BUILTIN_ROSTER
            .iter()
            .map(|&(bssid, ssid, epoch_offset_ms)| {
                AccessPoint::new(Bssid(bssid), ssid.as_bytes(), epoch_offset_ms)
                    .expect("builtin roster entry exceeds SSID limit")
            })
            .collect();
        Self { aps }
    }

    pub fn get(&self, index: usize) -> Option<&AccessPoint> {
        self.aps.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AccessPoint> {
        self.aps.iter()
    }

    pub fn len(&self) -> usize {
        self.aps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aps.is_empty()
    }
}

impl<'a> IntoIterator for &'a AccessPointRegistry {
    type Item = &'a AccessPoint;
    type IntoIter = std::slice::Iter<'a, AccessPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.aps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_roster_is_valid() {
        let roster = AccessPointRegistry::builtin();
        assert!(!roster.is_empty());
        assert_eq!(roster.len(), BUILTIN_ROSTER.len());
    }

    #[test]
    fn test_builtin_roster_first_entry() {
        let roster = AccessPointRegistry::builtin();
        let first = roster.get(0).unwrap();
        assert_eq!(first.ssid(), b"RIJKS SA");
        assert_eq!(first.ssid_len(), 8);
        assert_eq!(first.bssid(), Bssid([0x10, 0xbd, 0x18, 0x5e, 0x29, 0x86]));
    }

    #[test]
    fn test_builtin_roster_has_hidden_entry() {
        let roster = AccessPointRegistry::builtin();
        assert!(roster.iter().any(|ap| ap.is_hidden()));
    }

    #[test]
    fn test_builtin_uptimes_are_distinct() {
        let roster = AccessPointRegistry::builtin();
        let mut offsets: Vec<i64> = roster.iter().map(|ap| ap.epoch_offset_ms()).collect();
        offsets.sort_unstable();
        offsets.dedup();
        assert_eq!(offsets.len(), roster.len());
    }

    #[test]
    fn test_table_order_is_preserved() {
        let roster = AccessPointRegistry::builtin();
        let from_iter: Vec<_> = roster.iter().map(|ap| ap.bssid()).collect();
        let from_get: Vec<_> = (0..roster.len())
            .map(|i| roster.get(i).unwrap().bssid())
            .collect();
        assert_eq!(from_iter, from_get);
    }
}
