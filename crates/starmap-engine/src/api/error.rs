use thiserror::Error;

/// Failure while loading a text resource for an app.
///
/// The runner never propagates these into the host page; apps receive them
/// through `App::load` and degrade.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("no browser window available")]
    NoWindow,
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },
    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("response body of {url} is not text")]
    Body { url: String },
    #[error("host reported load failure: {0}")]
    Host(String),
}

/// A selection coming from the host that does not name anything selectable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("selection index {index} is out of range (list has {len} entries)")]
    OutOfRange { index: usize, len: usize },
    #[error("unknown planet identifier {0}")]
    UnknownPlanet(i64),
    #[error("unknown planet name {0:?}")]
    UnknownPlanetName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = SelectionError::OutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "selection index 7 is out of range (list has 3 entries)");

        let err = LoadError::Status { url: "data.md".into(), status: 404 };
        assert_eq!(err.to_string(), "data.md answered HTTP 404");
    }
}
