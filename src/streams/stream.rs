use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use crate::streams::DatasetError;

/// Pull-based interface for sources that produce labeled [`Instance`]s.
///
/// All returned instances conform to the same immutable [`InstanceHeader`]
/// for the lifetime of the stream.
pub trait Stream {
    /// Returns the stream header (relation name, columns, resolved indices).
    fn header(&self) -> &InstanceHeader;

    /// Indicates whether the stream *may* produce more instances.
    ///
    /// If it returns `false`, a subsequent call to [`next_instance`] must
    /// return `None`.
    ///
    /// [`next_instance`]: Stream::next_instance
    fn has_more_instances(&self) -> bool;

    /// Produces the next instance, or `None` once exhausted.
    ///
    /// A malformed record yields `Some(Err(..))`; the stream does not try to
    /// resynchronise and callers are expected to stop.
    fn next_instance(&mut self) -> Option<Result<Instance, DatasetError>>;

    /// Resets the stream to its first data record. The header is unchanged.
    fn restart(&mut self) -> Result<(), DatasetError>;
}
