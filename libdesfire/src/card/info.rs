// libdesfire/src/card/info.rs

//! Human-readable card summaries.

use std::fmt::{self, Write};

use crate::card::{Application, DesfireData, DesfireVersion, FileData, FileKind, FileSettings, KeySettings};
use crate::types::{ApplicationId, FileId, KeyVersion};
use crate::utils::bytes_to_hex_separated;

/// Compact summary of a read card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardInfo {
    /// 7-byte UID.
    pub uid: [u8; 7],
    /// Hardware major version.
    pub hw_major: u8,
    /// Hardware minor version.
    pub hw_minor: u8,
    /// Storage size byte as reported by the card.
    pub storage: u8,
    /// Free bytes, when the card reported them.
    pub free_memory: Option<u32>,
    /// Number of applications in the directory.
    pub application_count: usize,
}

impl CardInfo {
    /// Nominal storage in bytes. The storage byte encodes `2^(n >> 1)`;
    /// the low bit marks that the real size lies between that and the
    /// next power of two.
    pub fn storage_bytes(&self) -> u32 {
        1u32.checked_shl(u32::from(self.storage >> 1)).unwrap_or(0)
    }
}

impl From<&DesfireData> for CardInfo {
    fn from(data: &DesfireData) -> Self {
        Self {
            uid: data.version.uid,
            hw_major: data.version.hw.major,
            hw_minor: data.version.hw.minor,
            storage: data.version.hw.storage,
            free_memory: data.free_memory.bytes(),
            application_count: data.applications.len(),
        }
    }
}

impl fmt::Display for CardInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} v{}.{} {} bytes",
            bytes_to_hex_separated(&self.uid, ":"),
            self.hw_major,
            self.hw_minor,
            self.storage_bytes()
        )?;
        if let Some(free) = self.free_memory {
            write!(f, " ({} free)", free)?;
        }
        write!(f, ", {} apps", self.application_count)
    }
}

fn write_version(out: &mut String, v: &DesfireVersion) -> fmt::Result {
    writeln!(out, "{}", bytes_to_hex_separated(&v.uid, ":"))?;
    for (label, info) in [("hw", &v.hw), ("sw", &v.sw)] {
        writeln!(
            out,
            "{} {:02x} type {:02x} sub {:02x}",
            label, info.vendor, info.kind, info.subtype
        )?;
        writeln!(out, " maj {:02x} min {:02x}", info.major, info.minor)?;
        writeln!(out, " size {:02x} proto {:02x}", info.storage, info.protocol)?;
    }
    writeln!(out, "batch {}", bytes_to_hex_separated(&v.batch, ":"))?;
    writeln!(out, "week {} year {}", v.prod_week, v.prod_year)
}

fn write_key_settings(out: &mut String, ks: &KeySettings, versions: &[KeyVersion]) -> fmt::Result {
    writeln!(out, "changeKeyID {}", ks.change_key_id)?;
    writeln!(out, "configChangeable {}", ks.is_config_changeable as u8)?;
    writeln!(out, "freeCreateDelete {}", ks.is_free_create_delete as u8)?;
    writeln!(out, "freeDirectoryList {}", ks.is_free_directory_list as u8)?;
    writeln!(out, "masterChangeable {}", ks.is_master_key_changeable as u8)?;
    if ks.flags != 0 {
        writeln!(out, "flags {}", ks.flags)?;
    }
    writeln!(out, "maxKeys {}", ks.max_keys)?;
    for (i, kv) in versions.iter().enumerate() {
        writeln!(out, "key {} version {}", i, kv.as_u8())?;
    }
    Ok(())
}

/// Hex + printable dump, four bytes per row.
fn write_dump(out: &mut String, bytes: &[u8]) -> fmt::Result {
    for (row, chunk) in bytes.chunks(4).enumerate() {
        write!(out, "{:03x}|", row * 4)?;
        for i in 0..4 {
            match chunk.get(i) {
                Some(b) => write!(out, "{:02x} ", b)?,
                None => out.push_str("   "),
            }
        }
        for b in chunk {
            let c = *b as char;
            out.push(if c.is_ascii_graphic() || c == ' ' { c } else { '.' });
        }
        out.push('\n');
    }
    Ok(())
}

fn write_file(out: &mut String, id: FileId, settings: &FileSettings, data: &FileData) -> fmt::Result {
    writeln!(out, "File {}", id)?;
    writeln!(out, "{} {}", settings.file_type(), settings.comm)?;
    for ar in &settings.access_rights {
        writeln!(
            out,
            "r {} w {} rw {} c {}",
            ar.read(),
            ar.write(),
            ar.read_write(),
            ar.change()
        )?;
    }

    let mut record_size = data.len();
    match settings.kind {
        FileKind::Standard { size } | FileKind::Backup { size } => {
            writeln!(out, "size {}", size)?;
        }
        FileKind::Value {
            lo_limit,
            hi_limit,
            limited_credit_value,
            limited_credit_enabled,
        } => {
            writeln!(out, "lo {} hi {}", lo_limit, hi_limit)?;
            writeln!(
                out,
                "limit {} enabled {}",
                limited_credit_value, limited_credit_enabled as u8
            )?;
        }
        FileKind::LinearRecord { size, max, cur } | FileKind::CyclicRecord { size, max, cur } => {
            writeln!(out, "size {}", size)?;
            writeln!(out, "num {} max {}", cur, max)?;
            record_size = size as usize;
        }
    }

    if data.is_empty() {
        return Ok(());
    }
    for (rec, chunk) in data.as_bytes().chunks(record_size.max(1)).enumerate() {
        writeln!(out, "record {}", rec)?;
        write_dump(out, chunk)?;
    }
    Ok(())
}

fn write_application(out: &mut String, id: ApplicationId, app: &Application) -> fmt::Result {
    writeln!(out, "Application {}", id)?;
    write_key_settings(out, &app.key_settings, &app.key_versions)?;
    for (file_id, settings, data) in app.files() {
        write_file(out, file_id, settings, data)?;
    }
    Ok(())
}

/// Multi-line dump of everything read from the card.
pub fn render(data: &DesfireData) -> String {
    let mut out = String::new();
    // Writing into a String is infallible.
    let _ = write_card(&mut out, data);
    out
}

fn write_card(out: &mut String, data: &DesfireData) -> fmt::Result {
    write_version(out, &data.version)?;
    if let Some(free) = data.free_memory.bytes() {
        writeln!(out, "freeMem {}", free)?;
    }
    write_key_settings(out, &data.master_key_settings, &data.master_key_versions)?;
    for (id, app) in data.iter_applications() {
        write_application(out, id, app)?;
    }
    Ok(())
}
