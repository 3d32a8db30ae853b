// libdesfire/src/poller/operations.rs

//! Typed read helpers. Each one issues its command(s) through the
//! reassembler and returns the decoded value; callers decide which errors
//! degrade and which fail the session.

use log::{debug, warn};

use crate::card::{
    Application, DesfireVersion, FileData, FileKind, FileSettings, FreeMemory, KeySettings,
};
use crate::protocol::chunk::ChunkReassembler;
use crate::protocol::codec;
use crate::protocol::{Command, Response};
use crate::transport::Transport;
use crate::types::{ApplicationId, FileId, KeyVersion};
use crate::{Error, Result};

fn unexpected(resp: Response) -> Error {
    Error::InvalidField(format!("unexpected response {:?}", resp))
}

/// GetVersion.
pub fn read_version<T: Transport + ?Sized>(
    rx: &ChunkReassembler,
    transport: &mut T,
) -> Result<DesfireVersion> {
    match codec::execute(rx, transport, &Command::GetVersion)? {
        Response::Version(v) => Ok(v),
        other => Err(unexpected(other)),
    }
}

/// GetFreeMemory. A payload that is not 3 bytes is `is_present == false`.
pub fn read_free_memory<T: Transport + ?Sized>(
    rx: &ChunkReassembler,
    transport: &mut T,
) -> Result<FreeMemory> {
    match codec::execute(rx, transport, &Command::GetFreeMemory)? {
        Response::FreeMemory(fm) => Ok(fm),
        other => Err(unexpected(other)),
    }
}

/// Key settings of the currently selected application (or the PICC).
pub fn read_key_settings<T: Transport + ?Sized>(
    rx: &ChunkReassembler,
    transport: &mut T,
) -> Result<KeySettings> {
    match codec::execute(rx, transport, &Command::GetKeySettings)? {
        Response::KeySettings(ks) => Ok(ks),
        other => Err(unexpected(other)),
    }
}

/// Read `count` key versions, one command per key index.
pub fn read_key_versions<T: Transport + ?Sized>(
    rx: &ChunkReassembler,
    transport: &mut T,
    count: u8,
) -> Result<Vec<KeyVersion>> {
    (0..count)
        .map(|key_no| {
            match codec::execute(rx, transport, &Command::GetKeyVersion { key_no })? {
                Response::KeyVersion(v) => Ok(v),
                other => Err(unexpected(other)),
            }
        })
        .collect()
}

/// Directory of the PICC.
pub fn read_application_ids<T: Transport + ?Sized>(
    rx: &ChunkReassembler,
    transport: &mut T,
) -> Result<Vec<ApplicationId>> {
    match codec::execute(rx, transport, &Command::GetApplicationIds)? {
        Response::ApplicationIds(ids) => Ok(ids),
        other => Err(unexpected(other)),
    }
}

/// Make `aid` the current application.
pub fn select_application<T: Transport + ?Sized>(
    rx: &ChunkReassembler,
    transport: &mut T,
    aid: ApplicationId,
) -> Result<()> {
    match codec::execute(rx, transport, &Command::SelectApplication { aid })? {
        Response::Selected => Ok(()),
        other => Err(unexpected(other)),
    }
}

/// File ids of the current application.
pub fn read_file_ids<T: Transport + ?Sized>(
    rx: &ChunkReassembler,
    transport: &mut T,
) -> Result<Vec<FileId>> {
    match codec::execute(rx, transport, &Command::GetFileIds)? {
        Response::FileIds(ids) => Ok(ids),
        other => Err(unexpected(other)),
    }
}

/// GetFileSettings for one file of the current application.
pub fn read_file_settings<T: Transport + ?Sized>(
    rx: &ChunkReassembler,
    transport: &mut T,
    file_id: FileId,
) -> Result<FileSettings> {
    match codec::execute(rx, transport, &Command::GetFileSettings { file_id })? {
        Response::FileSettings(fs) => Ok(fs),
        other => Err(unexpected(other)),
    }
}

/// Read `size` bytes from offset 0 in slices no larger than the assembly
/// capacity. Every slice must come back with exactly the requested length.
fn read_chunked<T: Transport + ?Sized>(
    rx: &ChunkReassembler,
    transport: &mut T,
    size: u32,
    make_cmd: impl Fn(u32, u32) -> Command,
) -> Result<FileData> {
    let step = rx.capacity().max(1) as u32;
    let mut out = Vec::with_capacity(size.min(step) as usize);
    let mut offset = 0u32;

    while offset < size {
        let length = step.min(size - offset);
        let cmd = make_cmd(offset, length);
        let chunk = codec::exchange(rx, transport, &cmd)?;
        if chunk.len() != length as usize {
            warn!("Read {} out of {} bytes", chunk.len(), length);
            return Err(Error::InvalidLength {
                expected: length as usize,
                actual: chunk.len(),
            });
        }
        out.extend_from_slice(&chunk);
        offset += length;
    }

    Ok(FileData::new(out))
}

/// Read file content through the command matching the file kind. Files
/// without free read access are skipped and yield empty data.
pub fn read_file_content<T: Transport + ?Sized>(
    rx: &ChunkReassembler,
    transport: &mut T,
    file_id: FileId,
    settings: &FileSettings,
) -> Result<FileData> {
    if !settings.is_free_read() {
        debug!("Can't read file {} data without authentication", file_id);
        return Ok(FileData::default());
    }

    match settings.kind {
        FileKind::Standard { size } | FileKind::Backup { size } => {
            read_chunked(rx, transport, size, |offset, length| Command::ReadData {
                file_id,
                offset,
                length,
            })
        }
        FileKind::Value { .. } => match codec::execute(rx, transport, &Command::GetValue { file_id })? {
            Response::FileData(data) => Ok(data),
            other => Err(unexpected(other)),
        },
        FileKind::LinearRecord { size, .. } | FileKind::CyclicRecord { size, .. } => {
            read_chunked(rx, transport, size, |offset, length| Command::ReadRecords {
                file_id,
                offset,
                length,
            })
        }
    }
}

/// Read the currently selected application.
///
/// Hidden key settings degrade the application to restricted settings
/// with no keys and no files instead of failing.
pub fn read_application<T: Transport + ?Sized>(
    rx: &ChunkReassembler,
    transport: &mut T,
) -> Result<Application> {
    let key_settings = match read_key_settings(rx, transport) {
        Ok(ks) => ks,
        Err(Error::Authentication) => {
            debug!("Auth is required to read application key settings");
            return Ok(Application {
                key_settings: KeySettings::restricted_application(),
                ..Application::default()
            });
        }
        Err(e) => return Err(e),
    };

    let key_versions = read_key_versions(rx, transport, key_settings.max_keys)?;
    let file_ids = read_file_ids(rx, transport)?;

    let file_settings = file_ids
        .iter()
        .map(|id| read_file_settings(rx, transport, *id))
        .collect::<Result<Vec<_>>>()?;

    let file_data = file_ids
        .iter()
        .zip(file_settings.iter())
        .map(|(id, settings)| read_file_content(rx, transport, *id, settings))
        .collect::<Result<Vec<_>>>()?;

    Ok(Application {
        key_settings,
        key_versions,
        file_ids,
        file_settings,
        file_data,
    })
}

/// Select and read every application in order. The first error aborts the
/// whole fan-out.
pub fn read_applications<T: Transport + ?Sized>(
    rx: &ChunkReassembler,
    transport: &mut T,
    ids: &[ApplicationId],
) -> Result<Vec<Application>> {
    ids.iter()
        .map(|aid| {
            debug!("Selecting app {}", aid);
            select_application(rx, transport, *aid)?;
            debug!("Reading app {}", aid);
            read_application(rx, transport)
        })
        .collect()
}
