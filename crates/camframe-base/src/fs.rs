use memmap2::{Mmap, MmapOptions};
use std::fs::{self, File};
use std::io;
use std::ops::Deref;
use std::path::Path;

/// Delete a file, or a directory and everything below it.
///
/// Children are removed before their parent. A path that does not exist is
/// treated as already deleted. Symlinks are removed, never followed.
pub fn delete_recursive(path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    if metadata.is_dir() {
        for entry in fs::read_dir(path)? {
            delete_recursive(entry?.path())?;
        }
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    }
}

/// Read-only memory map of one region of a file.
pub struct MappedRegion {
    mmap: Mmap,
    start_offset: u64,
}

impl MappedRegion {
    pub fn start_offset(&self) -> u64 {
        self.start_offset
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.mmap
    }
}

impl Deref for MappedRegion {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.mmap
    }
}

impl std::fmt::Debug for MappedRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappedRegion")
            .field("start_offset", &self.start_offset)
            .field("len", &self.mmap.len())
            .finish()
    }
}

/// Map `declared_length` bytes of `path` starting at `start_offset`.
///
/// This is the packaged-asset model: an asset lives inside a larger file and
/// is described by an offset and a length. The file handle is closed before
/// returning; the mapping stays valid on its own.
///
/// # Errors
///
/// Returns `InvalidInput` if the region extends past the end of the file, and
/// any I/O error from opening or mapping.
pub fn load_mapped_file(
    path: impl AsRef<Path>,
    start_offset: u64,
    declared_length: usize,
) -> io::Result<MappedRegion> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let file_len = file.metadata()?.len();

    let end = start_offset.checked_add(declared_length as u64);
    if end.is_none_or(|end| end > file_len) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "region {start_offset}+{declared_length} exceeds {} ({file_len} bytes)",
                path.display()
            ),
        ));
    }

    // SAFETY: the map is read-only; callers must not truncate the file
    // while the region is alive.
    let mmap = unsafe {
        MmapOptions::new()
            .offset(start_offset)
            .len(declared_length)
            .map(&file)?
    };

    log::debug!(
        "mapped {} bytes of {} at offset {}",
        declared_length,
        path.display(),
        start_offset
    );

    Ok(MappedRegion { mmap, start_offset })
}
