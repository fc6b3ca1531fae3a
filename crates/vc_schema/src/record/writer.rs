use alloc::vec::Vec;

use crate::{Error, Format, Member, Pack};

// -----------------------------------------------------------------------------
// RecordWriter

/// Collects the packed members of one record, in declaration order.
pub struct RecordWriter<F: Format> {
    members: Vec<Member<F::Node>>,
}

impl<F: Format> RecordWriter<F> {
    /// Creates a writer with room for `capacity` members.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
        }
    }

    /// Packs one field.
    ///
    /// Absent values are skipped on formats without null.
    ///
    /// # Errors
    ///
    /// Pack failures are wrapped in [`Error::Field`].
    pub fn field<T: Pack + ?Sized>(&mut self, name: &'static str, value: &T) -> Result<(), Error> {
        if value.is_absent() && !F::SUPPORTS_NULL {
            return Ok(());
        }

        let node = value.pack::<F>().map_err(|err| err.in_field(name))?;
        self.members.push(Member::new(name, node));
        Ok(())
    }

    /// Returns the number of members written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Hands the members to the backend.
    #[inline]
    pub fn finish(self) -> Result<F::Node, Error> {
        F::pack_record(self.members)
    }
}
