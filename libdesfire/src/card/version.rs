use crate::constants::VERSION_LEN;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hardware or software half of the GetVersion response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VersionInfo {
    /// Vendor id, 0x04 for NXP.
    pub vendor: u8,
    /// Product type.
    pub kind: u8,
    /// Product subtype.
    pub subtype: u8,
    /// Major version.
    pub major: u8,
    /// Minor version.
    pub minor: u8,
    /// Storage size code.
    pub storage: u8,
    /// Communication protocol type.
    pub protocol: u8,
}

impl VersionInfo {
    fn from_bytes(b: &[u8; 7]) -> Self {
        Self {
            vendor: b[0],
            kind: b[1],
            subtype: b[2],
            major: b[3],
            minor: b[4],
            storage: b[5],
            protocol: b[6],
        }
    }

    fn to_bytes(self) -> [u8; 7] {
        [
            self.vendor,
            self.kind,
            self.subtype,
            self.major,
            self.minor,
            self.storage,
            self.protocol,
        ]
    }
}

/// The 28-byte GetVersion structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DesfireVersion {
    /// Hardware part.
    pub hw: VersionInfo,
    /// Software part.
    pub sw: VersionInfo,
    /// UID.
    pub uid: [u8; 7],
    /// Production batch number.
    pub batch: [u8; 5],
    /// Production week, BCD.
    pub prod_week: u8,
    /// Production year, BCD.
    pub prod_year: u8,
}

impl DesfireVersion {
    /// Split the raw GetVersion payload.
    pub fn from_bytes(b: &[u8; VERSION_LEN]) -> Self {
        let mut hw = [0u8; 7];
        let mut sw = [0u8; 7];
        let mut uid = [0u8; 7];
        let mut batch = [0u8; 5];
        hw.copy_from_slice(&b[0..7]);
        sw.copy_from_slice(&b[7..14]);
        uid.copy_from_slice(&b[14..21]);
        batch.copy_from_slice(&b[21..26]);

        Self {
            hw: VersionInfo::from_bytes(&hw),
            sw: VersionInfo::from_bytes(&sw),
            uid,
            batch,
            prod_week: b[26],
            prod_year: b[27],
        }
    }

    /// Raw GetVersion payload.
    pub fn to_bytes(&self) -> [u8; VERSION_LEN] {
        let mut out = [0u8; VERSION_LEN];
        out[0..7].copy_from_slice(&self.hw.to_bytes());
        out[7..14].copy_from_slice(&self.sw.to_bytes());
        out[14..21].copy_from_slice(&self.uid);
        out[21..26].copy_from_slice(&self.batch);
        out[26] = self.prod_week;
        out[27] = self.prod_year;
        out
    }
}
