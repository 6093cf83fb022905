use thiserror::Error;

/// Error type shared by the whole crate.
///
/// Input-validation variants are request-level failures: the caller gets them
/// back directly and nothing is computed. `EphemerisUnavailable` is recovered
/// per body by the orchestrator (the body keeps an `Err` entry in the result
/// mapping); it never aborts the other bodies of a request.
#[derive(Error, Debug)]
pub enum AstrocartaError {
    #[error("Invalid timestamp {0:?}: {1}")]
    InvalidTimestamp(String, String),

    #[error("Latitude out of range [-90, 90]: {0}")]
    LatitudeOutOfRange(f64),

    #[error("Longitude out of range [-180, 180]: {0}")]
    LongitudeOutOfRange(f64),

    #[error("Declination out of range [-90, 90]: {0}")]
    DeclinationOutOfRange(f64),

    #[error("Right ascension is not finite: {0}")]
    NonFiniteRightAscension(f64),

    #[error("Unknown celestial body: {0:?}")]
    UnknownBody(String),

    #[error("Requested body set is empty")]
    EmptyBodySet,

    #[error("Longitude grid needs at least 2 samples, got {0}")]
    NotEnoughLongitudeSamples(usize),

    #[error("Ephemeris unavailable for {body}: {reason}")]
    EphemerisUnavailable { body: String, reason: String },
}

impl PartialEq for AstrocartaError {
    fn eq(&self, other: &Self) -> bool {
        use AstrocartaError::*;
        match (self, other) {
            (InvalidTimestamp(a, _), InvalidTimestamp(b, _)) => a == b,
            (LatitudeOutOfRange(a), LatitudeOutOfRange(b)) => a == b,
            (LongitudeOutOfRange(a), LongitudeOutOfRange(b)) => a == b,
            (DeclinationOutOfRange(a), DeclinationOutOfRange(b)) => a == b,
            (NonFiniteRightAscension(a), NonFiniteRightAscension(b)) => a == b,
            (UnknownBody(a), UnknownBody(b)) => a == b,
            (EmptyBodySet, EmptyBodySet) => true,
            (NotEnoughLongitudeSamples(a), NotEnoughLongitudeSamples(b)) => a == b,
            (
                EphemerisUnavailable { body: a, .. },
                EphemerisUnavailable { body: b, .. },
            ) => a == b,
            _ => false,
        }
    }
}
