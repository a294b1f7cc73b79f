//! Constants describing the Net::HTTP debug output dialect.

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Prefix of lines written by the client
pub const OUTBOUND_MARKER: &str = "<- ";

/// Prefix of lines received from the server
pub const INBOUND_MARKER: &str = "-> ";

/// Progress line printed once a body read finishes ("read 587 bytes").
/// The last one in the trace ends the response.
pub const READ_MARKER: &str = "read ";

/// Progress line printed before a body read ("reading 587 bytes...").
/// The first one ends the response header block.
pub const READING_MARKER: &str = "reading";
