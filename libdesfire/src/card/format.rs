// libdesfire/src/card/format.rs

//! Key/value persistence of [`DesfireData`].
//!
//! The concrete file writer/reader lives outside this crate; it plugs in
//! through [`FieldSink`] and [`FieldSource`]. [`FieldMap`] is an ordered
//! in-memory implementation of both.

use std::fmt;

use crate::card::{
    Application, DesfireData, DesfireVersion, FileData, FileKind, FileSettings, FreeMemory,
    KeySettings,
};
use crate::constants::{MAX_ADDITIONAL_ACCESS_RIGHTS, MAX_FILES, MAX_KEYS, VERSION_LEN};
use crate::types::{AccessRights, ApplicationId, CommunicationMode, FileId, FileType, KeyVersion};
use crate::utils::bytes_to_hex_upper_spaced;
use crate::{Error, Result};

const PICC_PREFIX: &str = "PICC";
const VERSION_KEY: &str = "PICC Version";
const FREE_MEMORY_KEY: &str = "PICC Free Memory";
const APPLICATION_COUNT_KEY: &str = "Application Count";
const APPLICATION_IDS_KEY: &str = "Application IDs";

/// Typed field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Byte array, written as `AA BB CC`.
    Hex(Vec<u8>),
    /// Unsigned decimal.
    Uint(u32),
    /// `true` or `false`.
    Bool(bool),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(bytes) => f.write_str(&bytes_to_hex_upper_spaced(bytes)),
            Self::Uint(v) => write!(f, "{}", v),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Destination of saved fields, written in order.
pub trait FieldSink {
    /// Store `value` under `key`.
    fn write_field(&mut self, key: &str, value: FieldValue) -> Result<()>;
}

/// Lookup of previously saved fields by key.
pub trait FieldSource {
    /// Value stored under `key`, if any.
    fn read_field(&self, key: &str) -> Option<FieldValue>;
}

/// Ordered in-memory field store. Writing an existing key replaces its
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    fields: Vec<(String, FieldValue)>,
}

impl FieldMap {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Store `value`, replacing an existing entry in place.
    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        let key = key.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Remove and return the entry for `key`.
    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        let idx = self.fields.iter().position(|(k, _)| k == key)?;
        Some(self.fields.remove(idx).1)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no field is stored.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FieldSink for FieldMap {
    fn write_field(&mut self, key: &str, value: FieldValue) -> Result<()> {
        self.insert(key, value);
        Ok(())
    }
}

impl FieldSource for FieldMap {
    fn read_field(&self, key: &str) -> Option<FieldValue> {
        self.get(key).cloned()
    }
}

/// One `Key: value` line per field.
impl fmt::Display for FieldMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, v) in &self.fields {
            writeln!(f, "{}: {}", k, v)?;
        }
        Ok(())
    }
}

fn application_prefix(id: ApplicationId) -> String {
    format!("Application {}", id.to_hex())
}

fn file_prefix(app_prefix: &str, id: FileId) -> String {
    format!("{} File {}", app_prefix, id)
}

// ---- save ----

fn save_key_settings<S: FieldSink + ?Sized>(
    sink: &mut S,
    prefix: &str,
    ks: &KeySettings,
    versions: &[KeyVersion],
) -> Result<()> {
    let key = |name: &str| format!("{} {}", prefix, name);
    sink.write_field(&key("Change Key ID"), FieldValue::Hex(vec![ks.change_key_id]))?;
    sink.write_field(&key("Config Changeable"), FieldValue::Bool(ks.is_config_changeable))?;
    sink.write_field(&key("Free Create Delete"), FieldValue::Bool(ks.is_free_create_delete))?;
    sink.write_field(&key("Free Directory List"), FieldValue::Bool(ks.is_free_directory_list))?;
    sink.write_field(&key("Key Changeable"), FieldValue::Bool(ks.is_master_key_changeable))?;
    sink.write_field(&key("Flags"), FieldValue::Hex(vec![ks.flags]))?;
    sink.write_field(&key("Max Keys"), FieldValue::Hex(vec![ks.max_keys]))?;
    for (i, kv) in versions.iter().enumerate() {
        sink.write_field(
            &format!("{} Key {} Version", prefix, i),
            FieldValue::Hex(vec![kv.as_u8()]),
        )?;
    }
    Ok(())
}

fn save_file<S: FieldSink + ?Sized>(
    sink: &mut S,
    prefix: &str,
    settings: &FileSettings,
    data: &FileData,
) -> Result<()> {
    let key = |name: &str| format!("{} {}", prefix, name);
    sink.write_field(&key("Type"), FieldValue::Hex(vec![settings.file_type() as u8]))?;
    sink.write_field(&key("Communication Settings"), FieldValue::Hex(vec![settings.comm as u8]))?;
    let rights: Vec<u8> = settings
        .access_rights
        .iter()
        .flat_map(|ar| ar.to_le_bytes())
        .collect();
    sink.write_field(&key("Access Rights"), FieldValue::Hex(rights))?;

    match settings.kind {
        FileKind::Standard { size } | FileKind::Backup { size } => {
            sink.write_field(&key("Size"), FieldValue::Uint(size))?;
        }
        FileKind::Value {
            lo_limit,
            hi_limit,
            limited_credit_value,
            limited_credit_enabled,
        } => {
            sink.write_field(&key("Hi Limit"), FieldValue::Uint(hi_limit))?;
            sink.write_field(&key("Lo Limit"), FieldValue::Uint(lo_limit))?;
            sink.write_field(&key("Limited Credit Value"), FieldValue::Uint(limited_credit_value))?;
            sink.write_field(
                &key("Limited Credit Enabled"),
                FieldValue::Bool(limited_credit_enabled),
            )?;
        }
        FileKind::LinearRecord { size, max, cur } | FileKind::CyclicRecord { size, max, cur } => {
            sink.write_field(&key("Size"), FieldValue::Uint(size))?;
            sink.write_field(&key("Max"), FieldValue::Uint(max))?;
            sink.write_field(&key("Cur"), FieldValue::Uint(cur))?;
        }
    }

    if !data.is_empty() {
        sink.write_field(prefix, FieldValue::Hex(data.as_bytes().to_vec()))?;
    }
    Ok(())
}

fn save_application<S: FieldSink + ?Sized>(
    sink: &mut S,
    prefix: &str,
    app: &Application,
) -> Result<()> {
    save_key_settings(sink, prefix, &app.key_settings, &app.key_versions)?;
    if !app.file_ids.is_empty() {
        let ids = app.file_ids.iter().map(FileId::as_u8).collect();
        sink.write_field(&format!("{} File IDs", prefix), FieldValue::Hex(ids))?;
    }
    for (id, settings, data) in app.files() {
        save_file(sink, &file_prefix(prefix, id), settings, data)?;
    }
    Ok(())
}

/// Write every field of `data` to `sink`.
pub fn save<S: FieldSink + ?Sized>(data: &DesfireData, sink: &mut S) -> Result<()> {
    sink.write_field(VERSION_KEY, FieldValue::Hex(data.version.to_bytes().to_vec()))?;
    if let Some(free) = data.free_memory.bytes() {
        sink.write_field(FREE_MEMORY_KEY, FieldValue::Uint(free))?;
    }
    save_key_settings(
        sink,
        PICC_PREFIX,
        &data.master_key_settings,
        &data.master_key_versions,
    )?;

    let count = data.application_ids.len() as u32;
    sink.write_field(APPLICATION_COUNT_KEY, FieldValue::Uint(count))?;
    if count > 0 {
        let ids = data
            .application_ids
            .iter()
            .flat_map(|id| *id.as_bytes())
            .collect();
        sink.write_field(APPLICATION_IDS_KEY, FieldValue::Hex(ids))?;
    }
    for (id, app) in data.iter_applications() {
        save_application(sink, &application_prefix(id), app)?;
    }
    Ok(())
}

// ---- load ----

fn read_hex<S: FieldSource + ?Sized>(source: &S, key: &str) -> Result<Vec<u8>> {
    match source.read_field(key) {
        Some(FieldValue::Hex(bytes)) => Ok(bytes),
        Some(_) => Err(Error::InvalidValue(key.to_string())),
        None => Err(Error::MissingField(key.to_string())),
    }
}

fn read_hex_len<S: FieldSource + ?Sized>(source: &S, key: &str, len: usize) -> Result<Vec<u8>> {
    let bytes = read_hex(source, key)?;
    if bytes.len() != len {
        return Err(Error::InvalidValue(key.to_string()));
    }
    Ok(bytes)
}

fn read_byte<S: FieldSource + ?Sized>(source: &S, key: &str) -> Result<u8> {
    Ok(read_hex_len(source, key, 1)?[0])
}

fn read_uint<S: FieldSource + ?Sized>(source: &S, key: &str) -> Result<u32> {
    match source.read_field(key) {
        Some(FieldValue::Uint(v)) => Ok(v),
        Some(_) => Err(Error::InvalidValue(key.to_string())),
        None => Err(Error::MissingField(key.to_string())),
    }
}

fn read_bool<S: FieldSource + ?Sized>(source: &S, key: &str) -> Result<bool> {
    match source.read_field(key) {
        Some(FieldValue::Bool(v)) => Ok(v),
        Some(_) => Err(Error::InvalidValue(key.to_string())),
        None => Err(Error::MissingField(key.to_string())),
    }
}

fn load_key_settings<S: FieldSource + ?Sized>(
    source: &S,
    prefix: &str,
) -> Result<(KeySettings, Vec<KeyVersion>)> {
    let key = |name: &str| format!("{} {}", prefix, name);
    let flags_key = key("Flags");
    let flags = match source.read_field(&flags_key) {
        Some(_) => read_byte(source, &flags_key)?,
        None => 0,
    };
    let max_keys_key = key("Max Keys");
    let max_keys = read_byte(source, &max_keys_key)?;
    if max_keys > MAX_KEYS {
        return Err(Error::InvalidValue(max_keys_key));
    }

    let settings = KeySettings {
        change_key_id: read_byte(source, &key("Change Key ID"))?,
        is_config_changeable: read_bool(source, &key("Config Changeable"))?,
        is_free_create_delete: read_bool(source, &key("Free Create Delete"))?,
        is_free_directory_list: read_bool(source, &key("Free Directory List"))?,
        is_master_key_changeable: read_bool(source, &key("Key Changeable"))?,
        max_keys,
        flags,
    };

    let versions = (0..max_keys)
        .map(|i| read_byte(source, &format!("{} Key {} Version", prefix, i)).map(KeyVersion::new))
        .collect::<Result<Vec<_>>>()?;

    Ok((settings, versions))
}

fn load_file<S: FieldSource + ?Sized>(source: &S, prefix: &str) -> Result<(FileSettings, FileData)> {
    let key = |name: &str| format!("{} {}", prefix, name);

    let type_key = key("Type");
    let file_type = FileType::try_from(read_byte(source, &type_key)?)
        .map_err(|_| Error::InvalidValue(type_key))?;
    let comm_key = key("Communication Settings");
    let comm = CommunicationMode::try_from(read_byte(source, &comm_key)?)
        .map_err(|_| Error::InvalidValue(comm_key))?;

    let rights_key = key("Access Rights");
    let rights = read_hex(source, &rights_key)?;
    if rights.is_empty()
        || rights.len() % 2 != 0
        || rights.len() / 2 > MAX_ADDITIONAL_ACCESS_RIGHTS + 1
    {
        return Err(Error::InvalidValue(rights_key));
    }
    let access_rights = rights
        .chunks_exact(2)
        .map(|c| AccessRights::from_le_bytes([c[0], c[1]]))
        .collect();

    let kind = match file_type {
        FileType::Standard => FileKind::Standard {
            size: read_uint(source, &key("Size"))?,
        },
        FileType::Backup => FileKind::Backup {
            size: read_uint(source, &key("Size"))?,
        },
        FileType::Value => FileKind::Value {
            hi_limit: read_uint(source, &key("Hi Limit"))?,
            lo_limit: read_uint(source, &key("Lo Limit"))?,
            limited_credit_value: read_uint(source, &key("Limited Credit Value"))?,
            limited_credit_enabled: read_bool(source, &key("Limited Credit Enabled"))?,
        },
        FileType::LinearRecord => FileKind::LinearRecord {
            size: read_uint(source, &key("Size"))?,
            max: read_uint(source, &key("Max"))?,
            cur: read_uint(source, &key("Cur"))?,
        },
        FileType::CyclicRecord => FileKind::CyclicRecord {
            size: read_uint(source, &key("Size"))?,
            max: read_uint(source, &key("Max"))?,
            cur: read_uint(source, &key("Cur"))?,
        },
    };

    let data = match source.read_field(prefix) {
        Some(_) => FileData::new(read_hex(source, prefix)?),
        None => FileData::default(),
    };

    Ok((
        FileSettings {
            kind,
            comm,
            access_rights,
        },
        data,
    ))
}

fn load_application<S: FieldSource + ?Sized>(source: &S, prefix: &str) -> Result<Application> {
    let (key_settings, key_versions) = load_key_settings(source, prefix)?;
    let mut app = Application {
        key_settings,
        key_versions,
        ..Application::default()
    };

    let ids_key = format!("{} File IDs", prefix);
    if source.read_field(&ids_key).is_none() {
        return Ok(app);
    }
    let ids = read_hex(source, &ids_key)?;
    if ids.len() > MAX_FILES {
        return Err(Error::InvalidValue(ids_key));
    }
    app.file_ids = ids.into_iter().map(FileId::new).collect();

    for id in &app.file_ids {
        let (settings, data) = load_file(source, &file_prefix(prefix, *id))?;
        app.file_settings.push(settings);
        app.file_data.push(data);
    }
    Ok(app)
}

/// Rebuild a card model from previously saved fields.
pub fn load<S: FieldSource + ?Sized>(source: &S) -> Result<DesfireData> {
    let version_bytes = read_hex_len(source, VERSION_KEY, VERSION_LEN)?;
    let mut raw = [0u8; VERSION_LEN];
    raw.copy_from_slice(&version_bytes);

    let free_memory = match source.read_field(FREE_MEMORY_KEY) {
        Some(_) => FreeMemory::present(read_uint(source, FREE_MEMORY_KEY)?),
        None => FreeMemory::default(),
    };

    let (master_key_settings, master_key_versions) = load_key_settings(source, PICC_PREFIX)?;

    let count = read_uint(source, APPLICATION_COUNT_KEY)? as usize;
    let application_ids = if count > 0 {
        read_hex_len(source, APPLICATION_IDS_KEY, count * 3)?
            .chunks_exact(3)
            .map(|c| ApplicationId::from_bytes([c[0], c[1], c[2]]))
            .collect()
    } else {
        Vec::new()
    };

    let applications = application_ids
        .iter()
        .map(|id| load_application(source, &application_prefix(*id)))
        .collect::<Result<Vec<_>>>()?;

    Ok(DesfireData {
        version: DesfireVersion::from_bytes(&raw),
        free_memory,
        master_key_settings,
        master_key_versions,
        application_ids,
        applications,
    })
}
