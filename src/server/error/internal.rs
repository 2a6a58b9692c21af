use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Results a in 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A stored bot carries a description type tag this build does not know.
    #[error("Bot {bot_id} has unknown description type '{kind}'")]
    UnknownDescriptionFormat {
        /// Id of the affected bot
        bot_id: String,
        /// The stored type tag
        kind: String,
    },
}
