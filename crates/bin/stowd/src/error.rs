//! translation of library errors to gRPC status codes

use stow_core::StowError;
use tonic::Status;

/// map a library error to the status a client sees
pub fn map_error(err: StowError) -> Status {
    match &err {
        StowError::UnknownAdaptor(_) | StowError::UnknownProperty(_) => {
            Status::not_found(err.to_string())
        }
        StowError::DuplicateAdaptor(_) => Status::already_exists(err.to_string()),
        StowError::UnsupportedOperation(_) => Status::unimplemented(err.to_string()),
        StowError::InvalidLocation(_)
        | StowError::InvalidProperty(_)
        | StowError::InvalidCredential(_) => Status::failed_precondition(err.to_string()),
        StowError::NotConnected(_) => Status::unavailable(err.to_string()),
        StowError::Io(_) => Status::internal(err.to_string()),
    }
}
