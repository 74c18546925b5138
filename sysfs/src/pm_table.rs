//! # PM Table
//!
//! Snapshot reads of the firmware's power-management table. The caller's
//! buffer must match the table size discovered at init exactly.

use smu_core::{Error, PmTableInfo, Result};

use crate::session::Session;

impl Session {
    /// Read the PM table into `dst`
    ///
    /// `dst.len()` must equal [`Session::pm_table_size`]; otherwise
    /// `InsufficientSize` is returned without touching the driver.
    pub fn read_pm_table(&self, dst: &mut [u8]) -> Result<()> {
        if dst.len() != self.pm_table_info().len() {
            return Err(Error::InsufficientSize);
        }

        let mut pm = self.pm.lock();
        let handle = pm.as_mut().ok_or(Error::RwError)?;

        handle.read_block(dst)
    }

    /// Read the PM table into a freshly allocated snapshot
    pub fn read_pm_table_snapshot(&self) -> Result<PmTableSnapshot> {
        let info = self.pm_table_info();
        if !info.is_supported() {
            return Err(Error::Unsupported);
        }

        let mut data = vec![0u8; info.len()];
        self.read_pm_table(&mut data)?;

        Ok(PmTableSnapshot { info, data })
    }
}

/// Owned copy of the PM table
///
/// The layout is defined by the table version; the driver's tables are
/// arrays of native-endian `f32`, which [`PmTableSnapshot::value`] decodes.
#[derive(Debug, Clone, PartialEq)]
pub struct PmTableSnapshot {
    info: PmTableInfo,
    data: Vec<u8>,
}

impl PmTableSnapshot {
    /// Version and size the table was read with
    pub fn info(&self) -> PmTableInfo {
        self.info
    }

    /// Raw table bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Take the raw bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Number of complete `f32` entries
    pub fn len(&self) -> usize {
        self.data.len() / 4
    }

    /// No complete entry
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entry `index` as `f32`
    pub fn value(&self, index: usize) -> Option<f32> {
        let offset = index.checked_mul(4)?;
        let end = offset.checked_add(4)?;
        let bytes = self.data.get(offset..end)?;
        Some(f32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// All entries as `f32`
    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        self.data
            .chunks_exact(4)
            .map(|b| f32::from_ne_bytes([b[0], b[1], b[2], b[3]]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use crate::testing::{pm_table_pattern, FakeDriver, Op, FAKE_PM_SIZE};

    fn session(driver: &FakeDriver) -> Session {
        let mut session = Session::new();
        session.init(driver).unwrap();
        session
    }

    #[test]
    fn test_read_pm_table() {
        let driver = FakeDriver::new();
        let session = session(&driver);

        let mut table = vec![0u8; FAKE_PM_SIZE as usize];
        session.read_pm_table(&mut table).unwrap();
        assert_eq!(table, pm_table_pattern(FAKE_PM_SIZE as usize));
    }

    #[test]
    fn test_wrong_length_does_no_io() {
        let driver = FakeDriver::new();
        let session = session(&driver);
        let before = driver.ops(Node::PmTable);

        let mut small = vec![0u8; FAKE_PM_SIZE as usize - 1];
        assert_eq!(session.read_pm_table(&mut small), Err(Error::InsufficientSize));
        let mut large = vec![0u8; FAKE_PM_SIZE as usize + 4];
        assert_eq!(session.read_pm_table(&mut large), Err(Error::InsufficientSize));

        assert_eq!(driver.ops(Node::PmTable), before);
        assert_eq!(before, vec![Op::Open]);
    }

    #[test]
    fn test_short_read() {
        let driver = FakeDriver::new();
        let session = session(&driver);
        driver.short_read(Node::PmTable);

        let mut table = vec![0u8; FAKE_PM_SIZE as usize];
        assert_eq!(session.read_pm_table(&mut table), Err(Error::RwError));
    }

    #[test]
    fn test_unsupported_platform() {
        let driver = FakeDriver::new().without(Node::PmTableVersion);
        let session = session(&driver);

        assert_eq!(session.read_pm_table(&mut [0u8; 4]), Err(Error::InsufficientSize));
        assert_eq!(session.read_pm_table(&mut []), Err(Error::RwError));
        assert_eq!(session.read_pm_table_snapshot(), Err(Error::Unsupported));
    }

    #[test]
    fn test_snapshot_values() {
        let driver = FakeDriver::new();
        let session = session(&driver);

        let snapshot = session.read_pm_table_snapshot().unwrap();
        assert_eq!(snapshot.info().size, FAKE_PM_SIZE);
        assert_eq!(snapshot.as_bytes().len(), FAKE_PM_SIZE as usize);
        assert_eq!(snapshot.len(), FAKE_PM_SIZE as usize / 4);
        assert_eq!(snapshot.value(0), Some(0.0));
        assert_eq!(snapshot.value(10), Some(10.0));
        assert_eq!(snapshot.value(snapshot.len()), None);
        assert_eq!(snapshot.values().nth(3), Some(3.0));
    }

    #[test]
    fn test_snapshot_value_out_of_range() {
        let driver = FakeDriver::new();
        let session = session(&driver);
        let snapshot = session.read_pm_table_snapshot().unwrap();

        assert_eq!(snapshot.value(usize::MAX / 4), None);
        assert_eq!(snapshot.value(usize::MAX / 4 + 1), None);
        assert_eq!(snapshot.value(usize::MAX), None);
    }
}
